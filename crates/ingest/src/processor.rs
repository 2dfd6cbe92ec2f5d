//! Cleaning and validation of uploaded customer rows
//!
//! Uploaded data is messy: columns go missing, dates arrive malformed,
//! names are blank. The processor applies one fallback policy everywhere:
//! a value that is absent or fails to parse becomes an absent field, and
//! the feature extractor's defaults take over downstream. Cleaning never
//! rejects an individual row; only a batch missing its required columns
//! outright is refused.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use churnguard_core::CustomerRecord;

use crate::IngestError;

/// Date format accepted from uploads
const DATE_FORMAT: &str = "%Y-%m-%d";

/// One uploaded row before cleaning. Everything is optional; the shape
/// mirrors a CSV row where any column may be missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawCustomer {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub registration_date: Option<String>,
    pub last_transaction_date: Option<String>,
    pub transaction_count: Option<u32>,
    pub total_spent: Option<f64>,
    pub engagement_score: Option<i32>,
    pub support_tickets: Option<u32>,
}

/// Cleans and validates uploaded customer batches
#[derive(Debug, Clone, Copy, Default)]
pub struct DataProcessor;

impl DataProcessor {
    pub fn new() -> Self {
        Self
    }

    /// Validate and clean a batch of uploaded rows.
    ///
    /// Fails only on an empty batch or when a required column (name,
    /// email) is absent from every row; individual bad values fall back to
    /// defaults instead of failing the batch.
    pub fn process(&self, rows: Vec<RawCustomer>) -> Result<Vec<CustomerRecord>, IngestError> {
        self.validate(&rows)?;

        let records: Vec<CustomerRecord> = rows.into_iter().map(|row| self.clean(row)).collect();
        tracing::debug!(count = records.len(), "cleaned uploaded batch");

        Ok(records)
    }

    /// Check that the required columns are present in the batch.
    pub fn validate(&self, rows: &[RawCustomer]) -> Result<(), IngestError> {
        if rows.is_empty() {
            return Err(IngestError::EmptyBatch);
        }

        let mut missing = Vec::new();
        if rows.iter().all(|r| r.name.is_none()) {
            missing.push("name");
        }
        if rows.iter().all(|r| r.email.is_none()) {
            missing.push("email");
        }

        if !missing.is_empty() {
            return Err(IngestError::MissingColumns(missing.join(", ")));
        }

        Ok(())
    }

    /// Clean a single row. Total: every row yields a record.
    fn clean(&self, row: RawCustomer) -> CustomerRecord {
        let name = row
            .name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| "Unknown".to_string());
        let email = row
            .email
            .map(|e| e.trim().to_lowercase())
            .unwrap_or_default();

        CustomerRecord {
            id: None,
            name,
            email,
            phone: row.phone.filter(|p| !p.trim().is_empty()),
            registration_date: row.registration_date.as_deref().and_then(parse_date),
            last_transaction_date: row.last_transaction_date.as_deref().and_then(parse_date),
            transaction_count: row.transaction_count.unwrap_or(0),
            total_spent: row.total_spent.unwrap_or(0.0),
            engagement_score: row.engagement_score,
            support_tickets: row.support_tickets.unwrap_or(0),
        }
    }
}

/// Parse an uploaded date, treating failure as absence.
fn parse_date(value: &str) -> Option<NaiveDate> {
    match NaiveDate::parse_from_str(value.trim(), DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(_) => {
            tracing::warn!(value, "unparseable date in upload, treating as absent");
            None
        }
    }
}
