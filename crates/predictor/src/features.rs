//! Feature extraction from customer records
//!
//! Extraction is total: absent fields fall back to fixed defaults, so every
//! record yields a feature vector. Malformed date strings are handled once,
//! at ingestion, where a failed parse becomes an absent date.

use chrono::{NaiveDate, Utc};

use churnguard_core::{CustomerRecord, FeatureVector};

/// Recency assumed for customers with no recorded transaction
pub const DEFAULT_RECENCY_DAYS: f64 = 365.0;

/// Account age assumed when the registration date is unknown
pub const DEFAULT_ACCOUNT_AGE_DAYS: f64 = 180.0;

/// Engagement assumed when no score was provided
pub const DEFAULT_ENGAGEMENT_SCORE: f64 = 50.0;

/// Extract behavioral features from a record, relative to today.
pub fn extract(record: &CustomerRecord) -> FeatureVector {
    extract_at(record, Utc::now().date_naive())
}

/// Extract behavioral features relative to an explicit reference date.
///
/// The clock is injected here so scoring stays deterministic in tests.
pub fn extract_at(record: &CustomerRecord, today: NaiveDate) -> FeatureVector {
    let recency_days = record
        .last_transaction_date
        .map(|date| (today - date).num_days() as f64)
        .unwrap_or(DEFAULT_RECENCY_DAYS);

    let frequency = record.transaction_count as f64;
    let monetary = record.total_spent;

    let avg_transaction = if frequency > 0.0 {
        monetary / frequency
    } else {
        0.0
    };

    let engagement_score = record
        .engagement_score
        .map(f64::from)
        .unwrap_or(DEFAULT_ENGAGEMENT_SCORE);

    let account_age_days = record
        .registration_date
        .map(|date| (today - date).num_days() as f64)
        .unwrap_or(DEFAULT_ACCOUNT_AGE_DAYS);

    FeatureVector {
        recency_days,
        frequency,
        monetary,
        avg_transaction,
        engagement_score,
        account_age_days,
        support_tickets: record.support_tickets as f64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_extract_full_record() {
        let record = CustomerRecord::new("Laura Wright", "laura.wright@example.com")
            .registered_on(date("2025-01-01"))
            .last_active_on(date("2026-06-01"))
            .transactions(10, 500.0)
            .engagement(80)
            .tickets(2);

        let features = extract_at(&record, date("2026-07-01"));

        assert_eq!(features.recency_days, 30.0);
        assert_eq!(features.frequency, 10.0);
        assert_eq!(features.monetary, 500.0);
        assert_eq!(features.avg_transaction, 50.0);
        assert_eq!(features.engagement_score, 80.0);
        assert_eq!(features.account_age_days, 546.0);
        assert_eq!(features.support_tickets, 2.0);
    }

    #[test]
    fn test_extract_defaults_for_absent_fields() {
        let record = CustomerRecord::new("Unknown", "");

        let features = extract_at(&record, date("2026-07-01"));

        assert_eq!(features.recency_days, DEFAULT_RECENCY_DAYS);
        assert_eq!(features.frequency, 0.0);
        assert_eq!(features.monetary, 0.0);
        assert_eq!(features.avg_transaction, 0.0);
        assert_eq!(features.engagement_score, DEFAULT_ENGAGEMENT_SCORE);
        assert_eq!(features.account_age_days, DEFAULT_ACCOUNT_AGE_DAYS);
        assert_eq!(features.support_tickets, 0.0);
    }

    #[test]
    fn test_avg_transaction_zero_when_no_transactions() {
        let record = CustomerRecord::new("Adam Cox", "adam.cox@example.com").transactions(0, 0.0);

        let features = extract_at(&record, date("2026-07-01"));
        assert_eq!(features.avg_transaction, 0.0);
    }
}
