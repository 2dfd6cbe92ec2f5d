//! Batch prediction over customer records

use chrono::{NaiveDate, Utc};

use churnguard_core::{ChurnScore, CustomerRecord, FeatureVector, Prediction, RiskTier};

use crate::features;
use crate::scorer::{round_probability, RiskModel, RuleBasedModel};

/// Orchestrates feature extraction and scoring over customer records.
///
/// Extraction and scoring are total, so a batch never fails part-way: every
/// input record yields exactly one prediction, in input order.
pub struct ChurnPredictor {
    model: Box<dyn RiskModel>,
}

impl ChurnPredictor {
    /// Predictor backed by the default rule-based model
    pub fn new() -> Self {
        Self {
            model: Box::new(RuleBasedModel::new()),
        }
    }

    /// Predictor backed by a custom scoring strategy
    pub fn with_model(model: Box<dyn RiskModel>) -> Self {
        Self { model }
    }

    /// Score a single record relative to today.
    pub fn predict(&self, record: &CustomerRecord) -> Prediction {
        self.predict_at(record, Utc::now().date_naive())
    }

    /// Score a single record relative to an explicit reference date.
    pub fn predict_at(&self, record: &CustomerRecord, today: NaiveDate) -> Prediction {
        let features = features::extract_at(record, today);
        let score = self.score_features(features);

        Prediction {
            customer_id: record.id,
            name: record.display_name().to_string(),
            email: record.email.clone(),
            score,
        }
    }

    /// Score every record, preserving input order.
    pub fn predict_all(&self, records: &[CustomerRecord]) -> Vec<Prediction> {
        let today = Utc::now().date_naive();
        self.predict_all_at(records, today)
    }

    /// Batch variant with an injected reference date, for deterministic
    /// tests.
    pub fn predict_all_at(&self, records: &[CustomerRecord], today: NaiveDate) -> Vec<Prediction> {
        tracing::debug!(count = records.len(), "scoring customer batch");

        records
            .iter()
            .map(|record| self.predict_at(record, today))
            .collect()
    }

    fn score_features(&self, features: FeatureVector) -> ChurnScore {
        let probability = round_probability(self.model.score(&features));
        let tier = RiskTier::from_probability(probability);

        ChurnScore {
            probability,
            tier,
            features,
            scored_at: Utc::now(),
        }
    }
}

impl Default for ChurnPredictor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn dormant_customer() -> CustomerRecord {
        let mut record = CustomerRecord::new("Tyler Morris", "tyler.morris@example.com")
            .last_active_on(date("2026-01-01"))
            .transactions(0, 0.0)
            .engagement(20)
            .tickets(7);
        record.id = Some(7);
        record
    }

    fn loyal_customer() -> CustomerRecord {
        let mut record = CustomerRecord::new("Sandra Rogers", "sandra.rogers@example.com")
            .last_active_on(date("2026-06-21"))
            .transactions(20, 3_000.0)
            .engagement(85)
            .tickets(0);
        record.id = Some(8);
        record
    }

    #[test]
    fn test_predict_dormant_customer() {
        let predictor = ChurnPredictor::new();
        // 181 days of inactivity, zero activity everywhere else
        let prediction = predictor.predict_at(&dormant_customer(), date("2026-07-01"));

        assert_eq!(prediction.customer_id, Some(7));
        assert_eq!(prediction.score.probability, 1.0);
        assert_eq!(prediction.score.tier, RiskTier::High);
    }

    #[test]
    fn test_predict_loyal_customer() {
        let predictor = ChurnPredictor::new();
        // 10 days recency, heavy activity
        let prediction = predictor.predict_at(&loyal_customer(), date("2026-07-01"));

        assert_eq!(prediction.score.probability, 0.09);
        assert_eq!(prediction.score.tier, RiskTier::Low);
    }

    #[test]
    fn test_batch_preserves_order_and_identity() {
        let predictor = ChurnPredictor::new();
        let records = vec![dormant_customer(), loyal_customer()];

        let predictions = predictor.predict_all_at(&records, date("2026-07-01"));

        assert_eq!(predictions.len(), 2);
        assert_eq!(predictions[0].customer_id, Some(7));
        assert_eq!(predictions[0].name, "Tyler Morris");
        assert_eq!(predictions[0].email, "tyler.morris@example.com");
        assert_eq!(predictions[1].customer_id, Some(8));
    }

    #[test]
    fn test_batch_tolerates_sparse_records() {
        let predictor = ChurnPredictor::new();
        // No dates, no engagement: extraction falls back to defaults
        // (recency 365, engagement 50) instead of failing.
        let records = vec![CustomerRecord::new("Unknown", "")];

        let predictions = predictor.predict_all_at(&records, date("2026-07-01"));

        assert_eq!(predictions.len(), 1);
        let score = &predictions[0].score;
        // 0.40 (recency 365) + 0.25 (no transactions) + 0.20 (zero spend)
        // + 0.03 (engagement 50) + 0.00 (no tickets)
        assert_eq!(score.probability, 0.88);
        assert_eq!(score.tier, RiskTier::High);
        assert_eq!(score.features.recency_days, 365.0);
    }

    #[test]
    fn test_custom_model_slots_in() {
        struct Constant(f64);
        impl RiskModel for Constant {
            fn score(&self, _features: &churnguard_core::FeatureVector) -> f64 {
                self.0
            }
        }

        let predictor = ChurnPredictor::with_model(Box::new(Constant(0.5)));
        let prediction = predictor.predict_at(&loyal_customer(), date("2026-07-01"));

        assert_eq!(prediction.score.probability, 0.5);
        assert_eq!(prediction.score.tier, RiskTier::Medium);
    }
}
