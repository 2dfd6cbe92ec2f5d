//! Churn reason extraction
//!
//! Surfaces the human-readable drivers behind a score, in a fixed factor
//! order (recency, frequency, monetary, tickets, engagement) so retention
//! teams see the same layout for every customer.

use serde::{Deserialize, Serialize};

use churnguard_core::FeatureVector;

/// How strongly a factor drives the churn risk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Impact {
    Medium,
    High,
}

impl Impact {
    pub fn display_name(&self) -> &'static str {
        match self {
            Impact::Medium => "Medium",
            Impact::High => "High",
        }
    }
}

impl std::fmt::Display for Impact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// One driver behind a customer's churn risk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChurnReason {
    pub factor: &'static str,
    pub description: String,
    pub impact: Impact,
}

/// Identify the main reasons for a customer's churn risk.
///
/// Each factor fires at a fixed threshold with a fixed impact tag; factors
/// below their threshold are omitted.
pub fn churn_reasons(features: &FeatureVector) -> Vec<ChurnReason> {
    let mut reasons = Vec::new();

    if features.recency_days > 60.0 {
        reasons.push(ChurnReason {
            factor: "Inactivity",
            description: format!("No transaction in {} days", features.recency_days as i64),
            impact: Impact::High,
        });
    }

    if features.frequency <= 2.0 {
        reasons.push(ChurnReason {
            factor: "Low Engagement",
            description: format!("Only {} transactions", features.frequency as i64),
            impact: Impact::High,
        });
    }

    if features.monetary < 100.0 {
        reasons.push(ChurnReason {
            factor: "Low Value",
            description: format!("Total spent: ${:.2}", features.monetary),
            impact: Impact::Medium,
        });
    }

    if features.support_tickets > 3.0 {
        reasons.push(ChurnReason {
            factor: "Support Issues",
            description: format!("{} support tickets", features.support_tickets as i64),
            impact: Impact::Medium,
        });
    }

    if features.engagement_score < 40.0 {
        reasons.push(ChurnReason {
            factor: "Poor Engagement",
            description: format!("Engagement score: {}/100", features.engagement_score as i64),
            impact: Impact::High,
        });
    }

    reasons
}

#[cfg(test)]
mod tests {
    use super::*;

    fn features(
        recency: f64,
        frequency: f64,
        monetary: f64,
        engagement: f64,
        tickets: f64,
    ) -> FeatureVector {
        FeatureVector {
            recency_days: recency,
            frequency,
            monetary,
            avg_transaction: 0.0,
            engagement_score: engagement,
            account_age_days: 365.0,
            support_tickets: tickets,
        }
    }

    #[test]
    fn test_all_factors_fire_in_fixed_order() {
        let reasons = churn_reasons(&features(120.0, 1.0, 25.0, 20.0, 6.0));

        let factors: Vec<&str> = reasons.iter().map(|r| r.factor).collect();
        assert_eq!(
            factors,
            vec![
                "Inactivity",
                "Low Engagement",
                "Low Value",
                "Support Issues",
                "Poor Engagement"
            ]
        );
        assert_eq!(reasons[0].impact, Impact::High);
        assert_eq!(reasons[2].impact, Impact::Medium);
    }

    #[test]
    fn test_healthy_customer_has_no_reasons() {
        let reasons = churn_reasons(&features(10.0, 25.0, 4_000.0, 90.0, 0.0));
        assert!(reasons.is_empty());
    }

    #[test]
    fn test_thresholds_are_exclusive_where_specified() {
        // Exactly at the boundary: recency 60 and tickets 3 do not fire,
        // frequency 2 does.
        let reasons = churn_reasons(&features(60.0, 2.0, 500.0, 80.0, 3.0));

        let factors: Vec<&str> = reasons.iter().map(|r| r.factor).collect();
        assert_eq!(factors, vec!["Low Engagement"]);
    }

    #[test]
    fn test_description_formatting() {
        let reasons = churn_reasons(&features(95.0, 10.0, 42.5, 80.0, 0.0));

        assert_eq!(reasons[0].description, "No transaction in 95 days");
        assert_eq!(reasons[1].description, "Total spent: $42.50");
    }
}
