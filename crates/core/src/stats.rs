//! Aggregate statistics for the dashboard and chatbot

use serde::{Deserialize, Serialize};

/// Snapshot of store-wide aggregates.
///
/// Tier counts use the same thresholds as `RiskTier::from_probability`, so
/// a customer is counted in exactly one tier bucket.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_customers: usize,
    pub high_risk_count: usize,
    pub medium_risk_count: usize,
    pub low_risk_count: usize,
    pub total_revenue: f64,
    /// Sum of `total_spent` over high-tier customers
    pub at_risk_revenue: f64,
    pub active_campaigns: usize,
}

impl DashboardStats {
    /// High-risk share of the customer base as a percentage.
    ///
    /// Returns 0 for an empty store rather than dividing by zero.
    pub fn churn_rate(&self) -> f64 {
        if self.total_customers == 0 {
            return 0.0;
        }
        self.high_risk_count as f64 / self.total_customers as f64 * 100.0
    }

    /// Share of revenue held by high-tier customers, as a percentage.
    ///
    /// Returns 0 when there is no revenue.
    pub fn at_risk_revenue_pct(&self) -> f64 {
        if self.total_revenue <= 0.0 {
            return 0.0;
        }
        self.at_risk_revenue / self.total_revenue * 100.0
    }
}
