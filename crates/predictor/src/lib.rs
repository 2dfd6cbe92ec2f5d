//! Churn prediction engine
//!
//! Features:
//! - Feature extraction from raw customer records (total, never errors)
//! - Rule-based risk scoring behind a pluggable `RiskModel` trait
//! - Human-readable churn reason extraction
//! - Order-preserving batch prediction

pub mod batch;
pub mod features;
pub mod reasons;
pub mod scorer;

pub use batch::ChurnPredictor;
pub use features::{extract, extract_at};
pub use reasons::{churn_reasons, ChurnReason, Impact};
pub use scorer::{RiskModel, RuleBasedModel};
