//! Customer record and query-surface row types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::score::{FeatureVector, RiskTier};

/// A raw customer record as ingested from an upload or generator.
///
/// Optional fields stay optional; the feature extractor substitutes fixed
/// defaults for anything that is absent. Records are mutable only during
/// ingestion — a rescore produces a new `ChurnScore`, it never touches the
/// record itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerRecord {
    /// Assigned by the store on insertion; `None` until persisted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    pub name: String,

    pub email: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_date: Option<NaiveDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_transaction_date: Option<NaiveDate>,

    #[serde(default)]
    pub transaction_count: u32,

    #[serde(default)]
    pub total_spent: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub engagement_score: Option<i32>,

    #[serde(default)]
    pub support_tickets: u32,
}

impl CustomerRecord {
    /// Create a minimal record with the required fields
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
            phone: None,
            registration_date: None,
            last_transaction_date: None,
            transaction_count: 0,
            total_spent: 0.0,
            engagement_score: None,
            support_tickets: 0,
        }
    }

    /// Set phone number
    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Set registration date
    pub fn registered_on(mut self, date: NaiveDate) -> Self {
        self.registration_date = Some(date);
        self
    }

    /// Set last transaction date
    pub fn last_active_on(mut self, date: NaiveDate) -> Self {
        self.last_transaction_date = Some(date);
        self
    }

    /// Set transaction history (count and total value)
    pub fn transactions(mut self, count: u32, total_spent: f64) -> Self {
        self.transaction_count = count;
        self.total_spent = total_spent;
        self
    }

    /// Set engagement score (nominally 0-100)
    pub fn engagement(mut self, score: i32) -> Self {
        self.engagement_score = Some(score);
        self
    }

    /// Set support ticket count
    pub fn tickets(mut self, count: u32) -> Self {
        self.support_tickets = count;
        self
    }

    /// Display name (falls back to "Unknown" for blank names)
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            "Unknown"
        } else {
            &self.name
        }
    }
}

/// A customer joined with their current churn score, as returned by
/// `CustomerStore::get_customer_detail`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerDetail {
    pub record: CustomerRecord,

    /// Current churn probability, if the customer has been scored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub churn_probability: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_tier: Option<RiskTier>,

    /// Feature vector the current score was computed from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<FeatureVector>,
}

impl CustomerDetail {
    /// Detail view for a customer that has not been scored yet
    pub fn unscored(record: CustomerRecord) -> Self {
        Self {
            record,
            churn_probability: None,
            risk_tier: None,
            features: None,
        }
    }
}

/// Row returned by `CustomerStore::get_high_risk_customers`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighRiskCustomer {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub total_spent: f64,
    pub churn_probability: f64,
    pub risk_tier: RiskTier,
}

/// Row returned by `CustomerStore::get_recent_customers`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentCustomer {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_transaction_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub churn_probability: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_tier: Option<RiskTier>,
}
