//! Churn score, risk tier, and feature vector types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Discrete churn risk tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    /// Probability at or above which a customer is considered high risk.
    ///
    /// This constant is the single source of truth for every place that
    /// filters "high risk": dashboard counts, at-risk revenue, chatbot
    /// listings, and campaign targeting.
    pub const HIGH_THRESHOLD: f64 = 0.70;

    /// Probability at or above which a customer is considered medium risk
    pub const MEDIUM_THRESHOLD: f64 = 0.40;

    /// Map a churn probability onto its tier.
    ///
    /// Boundaries are inclusive: exactly 0.70 is High, exactly 0.40 is
    /// Medium.
    pub fn from_probability(probability: f64) -> Self {
        if probability >= Self::HIGH_THRESHOLD {
            RiskTier::High
        } else if probability >= Self::MEDIUM_THRESHOLD {
            RiskTier::Medium
        } else {
            RiskTier::Low
        }
    }

    /// Get tier display name
    pub fn display_name(&self) -> &'static str {
        match self {
            RiskTier::Low => "Low",
            RiskTier::Medium => "Medium",
            RiskTier::High => "High",
        }
    }

    /// Check whether this tier triggers retention workflows
    pub fn is_high(&self) -> bool {
        matches!(self, RiskTier::High)
    }
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Behavioral features derived from a customer record.
///
/// Computed fresh on every prediction and kept on the score for
/// auditability; never cached or persisted on its own.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Days since the last transaction
    pub recency_days: f64,
    /// Number of transactions
    pub frequency: f64,
    /// Total transaction value
    pub monetary: f64,
    /// Average transaction value (0 when there are no transactions)
    pub avg_transaction: f64,
    /// Engagement score, nominally 0-100
    pub engagement_score: f64,
    /// Days since registration
    pub account_age_days: f64,
    /// Open support ticket count
    pub support_tickets: f64,
}

impl FeatureVector {
    /// Named feature values in their fixed order, for reporting
    pub fn named_values(&self) -> [(&'static str, f64); 7] {
        [
            ("recency_days", self.recency_days),
            ("frequency", self.frequency),
            ("monetary", self.monetary),
            ("avg_transaction", self.avg_transaction),
            ("engagement_score", self.engagement_score),
            ("account_age_days", self.account_age_days),
            ("support_tickets", self.support_tickets),
        ]
    }
}

/// A churn score for one customer.
///
/// At most one score is current per customer; the store replaces the prior
/// score when a new one is written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChurnScore {
    /// Churn probability in [0, 1], rounded to 3 decimals for reporting
    pub probability: f64,
    pub tier: RiskTier,
    /// Feature vector the score was computed from
    pub features: FeatureVector,
    pub scored_at: DateTime<Utc>,
}

/// Batch prediction result: a churn score with the customer identity
/// carried through from the input record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<i64>,
    pub name: String,
    pub email: String,
    pub score: ChurnScore,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries_are_inclusive() {
        assert_eq!(RiskTier::from_probability(0.70), RiskTier::High);
        assert_eq!(RiskTier::from_probability(0.40), RiskTier::Medium);
        assert_eq!(RiskTier::from_probability(0.699), RiskTier::Medium);
        assert_eq!(RiskTier::from_probability(0.399), RiskTier::Low);
        assert_eq!(RiskTier::from_probability(0.0), RiskTier::Low);
        assert_eq!(RiskTier::from_probability(1.0), RiskTier::High);
    }

    #[test]
    fn test_tier_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&RiskTier::High).unwrap(), "\"high\"");
        assert_eq!(RiskTier::High.to_string(), "High");
    }

    #[test]
    fn test_named_values_order() {
        let features = FeatureVector {
            recency_days: 10.0,
            frequency: 3.0,
            monetary: 120.0,
            avg_transaction: 40.0,
            engagement_score: 60.0,
            account_age_days: 400.0,
            support_tickets: 1.0,
        };

        let names: Vec<&str> = features.named_values().iter().map(|(n, _)| *n).collect();
        assert_eq!(names[0], "recency_days");
        assert_eq!(names[6], "support_tickets");
    }
}
