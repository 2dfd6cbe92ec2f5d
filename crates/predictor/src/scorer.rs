//! Rule-based churn risk scoring
//!
//! Five independent factor contributions are summed and clamped into
//! [0, 1]. Each factor's buckets are declared as const tables so the
//! weighting contract stays auditable factor by factor.

use churnguard_core::{FeatureVector, RiskTier};

/// Pluggable scoring strategy.
///
/// The default implementation is the hand-tuned rule table below; a trained
/// classifier can slot in behind the same contract.
pub trait RiskModel: Send + Sync {
    /// Churn probability in [0, 1] for the given features.
    fn score(&self, features: &FeatureVector) -> f64;

    /// Risk tier for the given features.
    fn tier(&self, features: &FeatureVector) -> RiskTier {
        RiskTier::from_probability(self.score(features))
    }
}

/// Rows are (exclusive lower bound, contribution); the first row whose
/// bound the value exceeds wins, else the fallback applies.
const RECENCY_BUCKETS: [(f64, f64); 3] = [(90.0, 0.40), (60.0, 0.30), (30.0, 0.15)];
const RECENCY_FALLBACK: f64 = 0.05;

/// Rows are (inclusive upper bound, contribution).
const FREQUENCY_BUCKETS: [(f64, f64); 3] = [(0.0, 0.25), (2.0, 0.20), (5.0, 0.10)];
const FREQUENCY_FALLBACK: f64 = 0.02;

/// Zero spend scores the full monetary weight; rows below are
/// (exclusive upper bound, contribution) for positive spend.
const MONETARY_ZERO: f64 = 0.20;
const MONETARY_BUCKETS: [(f64, f64); 2] = [(50.0, 0.15), (200.0, 0.08)];
const MONETARY_FALLBACK: f64 = 0.02;

/// Rows are (exclusive upper bound, contribution).
const ENGAGEMENT_BUCKETS: [(f64, f64); 3] = [(30.0, 0.10), (50.0, 0.06), (70.0, 0.03)];
const ENGAGEMENT_FALLBACK: f64 = 0.0;

/// Rows are (exclusive lower bound, contribution).
const TICKET_BUCKETS: [(f64, f64); 2] = [(5.0, 0.05), (2.0, 0.03)];
const TICKET_FALLBACK: f64 = 0.0;

fn bucket_above(value: f64, rows: &[(f64, f64)], fallback: f64) -> f64 {
    rows.iter()
        .find(|(bound, _)| value > *bound)
        .map(|(_, weight)| *weight)
        .unwrap_or(fallback)
}

fn bucket_below(value: f64, rows: &[(f64, f64)], fallback: f64) -> f64 {
    rows.iter()
        .find(|(bound, _)| value < *bound)
        .map(|(_, weight)| *weight)
        .unwrap_or(fallback)
}

fn bucket_at_most(value: f64, rows: &[(f64, f64)], fallback: f64) -> f64 {
    rows.iter()
        .find(|(bound, _)| value <= *bound)
        .map(|(_, weight)| *weight)
        .unwrap_or(fallback)
}

/// Recency contribution, capped at 0.40
pub fn recency_contribution(recency_days: f64) -> f64 {
    bucket_above(recency_days, &RECENCY_BUCKETS, RECENCY_FALLBACK)
}

/// Frequency contribution, capped at 0.25
pub fn frequency_contribution(frequency: f64) -> f64 {
    bucket_at_most(frequency, &FREQUENCY_BUCKETS, FREQUENCY_FALLBACK)
}

/// Monetary contribution, capped at 0.20
pub fn monetary_contribution(monetary: f64) -> f64 {
    if monetary <= 0.0 {
        return MONETARY_ZERO;
    }
    bucket_below(monetary, &MONETARY_BUCKETS, MONETARY_FALLBACK)
}

/// Engagement contribution, capped at 0.10
pub fn engagement_contribution(engagement_score: f64) -> f64 {
    bucket_below(engagement_score, &ENGAGEMENT_BUCKETS, ENGAGEMENT_FALLBACK)
}

/// Support ticket contribution, capped at 0.05
pub fn ticket_contribution(support_tickets: f64) -> f64 {
    bucket_above(support_tickets, &TICKET_BUCKETS, TICKET_FALLBACK)
}

/// The fixed weighted-bucket rule scorer.
///
/// Stateless and deterministic: identical features always yield the same
/// probability.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedModel;

impl RuleBasedModel {
    pub fn new() -> Self {
        Self
    }
}

impl RiskModel for RuleBasedModel {
    fn score(&self, features: &FeatureVector) -> f64 {
        let sum = recency_contribution(features.recency_days)
            + frequency_contribution(features.frequency)
            + monetary_contribution(features.monetary)
            + engagement_contribution(features.engagement_score)
            + ticket_contribution(features.support_tickets);

        // The table caps make the sum land in [0, 1] already; the clamp
        // guards against a future table edit breaking the invariant.
        sum.clamp(0.0, 1.0)
    }
}

/// Round a probability to 3 decimals for reporting.
pub fn round_probability(probability: f64) -> f64 {
    (probability * 1000.0).round() / 1000.0
}
