//! Ingestion utilities for ChurnGuard
//!
//! Features:
//! - Cleaning and validation of uploaded customer rows, with the single
//!   fallback policy for malformed values (parse failure is treated as
//!   an absent field)
//! - Sample data generation for demos and tests
//! - Keyword-based sentiment scoring for free-text feedback

pub mod processor;
pub mod sample;
pub mod sentiment;

pub use processor::{DataProcessor, RawCustomer};
pub use sample::generate_sample_customers;
pub use sentiment::{analyze_sentiment, Sentiment};

use thiserror::Error;

/// Ingest errors
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("uploaded batch contains no rows")]
    EmptyBatch,

    #[error("missing required columns: {0}")]
    MissingColumns(String),
}
