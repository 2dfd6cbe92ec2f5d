//! Core types and traits for ChurnGuard
//!
//! This crate provides foundational types used across all other crates:
//! - Customer records and per-customer detail views
//! - Churn scores, risk tiers, and feature vectors
//! - Dashboard statistics and campaign types
//! - The `CustomerStore` collaborator trait
//! - Error types

pub mod campaign;
pub mod customer;
pub mod error;
pub mod score;
pub mod stats;
pub mod store;

pub use campaign::{Campaign, CampaignStatus};
pub use customer::{CustomerDetail, CustomerRecord, HighRiskCustomer, RecentCustomer};
pub use error::{Error, Result};
pub use score::{ChurnScore, FeatureVector, Prediction, RiskTier};
pub use stats::DashboardStats;
pub use store::CustomerStore;
