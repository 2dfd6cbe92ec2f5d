//! Customer store collaborator trait
//!
//! The core never talks to a database directly; it consumes this trait.
//! `churnguard-store` provides an in-memory implementation, and a relational
//! backend can implement the same contract without touching the core.

use crate::customer::{CustomerDetail, CustomerRecord, HighRiskCustomer, RecentCustomer};
use crate::error::Result;
use crate::score::Prediction;
use crate::stats::DashboardStats;

/// Storage collaborator for customer records and churn scores.
///
/// Implementations must keep score insertion replace-on-write: a new score
/// for a customer supersedes the prior one, so "current score" queries never
/// observe two scores for the same customer.
pub trait CustomerStore: Send + Sync {
    /// Insert records, assigning identifiers. Returns the number inserted.
    fn add_customers(&self, records: Vec<CustomerRecord>) -> Result<usize>;

    /// Persist batch prediction results, replacing any prior score per
    /// customer. Predictions without a customer id are skipped.
    fn add_churn_scores(&self, predictions: &[Prediction]) -> Result<()>;

    /// Customers at or above the probability threshold, descending by
    /// probability.
    fn get_high_risk_customers(&self, threshold: f64) -> Result<Vec<HighRiskCustomer>>;

    /// Full detail for one customer, or `None` if the id is unknown.
    fn get_customer_detail(&self, id: i64) -> Result<Option<CustomerDetail>>;

    /// Most recently active customers, descending by last transaction date.
    fn get_recent_customers(&self, limit: usize) -> Result<Vec<RecentCustomer>>;

    /// Store-wide aggregates for the dashboard and chatbot.
    fn get_dashboard_stats(&self) -> Result<DashboardStats>;
}
