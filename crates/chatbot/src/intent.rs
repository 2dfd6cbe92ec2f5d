//! Intent classification
//!
//! Maps a free-text message onto a closed set of query intents using an
//! ordered regex table. The table order is a design contract: a message
//! matching several intents resolves to the earliest-listed one.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Supported query intents, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// High-risk / at-risk customer listings
    HighRisk,
    /// Customer count and tier breakdown
    TotalCustomers,
    /// Churn rate analysis
    ChurnRate,
    /// Recently active customers
    RecentActivity,
    /// Revenue and at-risk revenue
    Revenue,
    /// Detail for one customer by id
    SpecificCustomer,
    /// Usage help
    Help,
    /// No pattern matched
    Unknown,
}

impl Intent {
    /// Get intent display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Intent::HighRisk => "High Risk",
            Intent::TotalCustomers => "Total Customers",
            Intent::ChurnRate => "Churn Rate",
            Intent::RecentActivity => "Recent Activity",
            Intent::Revenue => "Revenue",
            Intent::SpecificCustomer => "Specific Customer",
            Intent::Help => "Help",
            Intent::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Pattern table, compiled once on first use.
///
/// Entry order defines intent priority; pattern order within an entry does
/// not matter.
static PATTERN_TABLE: Lazy<Vec<(Intent, Vec<Regex>)>> = Lazy::new(|| {
    fn compile(patterns: &[&str]) -> Vec<Regex> {
        patterns
            .iter()
            .map(|p| Regex::new(p).unwrap())
            .collect()
    }

    let table = vec![
        (
            Intent::HighRisk,
            compile(&[
                r"high risk.*customers?",
                r"customers?.*high risk",
                r"who.*likely.*churn",
                r"at risk customers?",
                r"customers?.*at risk",
            ]),
        ),
        (
            Intent::TotalCustomers,
            compile(&[
                r"how many customers?",
                r"total customers?",
                r"number.*customers?",
                r"count.*customers?",
            ]),
        ),
        (
            Intent::ChurnRate,
            compile(&[r"churn rate", r"percentage.*churned"]),
        ),
        (
            Intent::RecentActivity,
            compile(&[r"recent.*activity", r"latest.*transactions?", r"recent.*customers?"]),
        ),
        (
            Intent::Revenue,
            compile(&[r"revenue", r"total.*spent", r"sales", r"monetary.*value"]),
        ),
        (
            Intent::SpecificCustomer,
            compile(&[
                r"customer.*\d+",
                r"tell me about.*customer",
                r"show.*customer",
                r"customer info",
                r"info.*customer",
            ]),
        ),
        (
            Intent::Help,
            compile(&[r"\bhelp\b", r"what can you do", r"how to use", r"commands"]),
        ),
    ];

    tracing::debug!(intents = table.len(), "compiled intent pattern table");
    table
});

/// Matches the first integer that follows the word "customer"
static CUSTOMER_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"customer\D*?(\d+)").unwrap());

/// Extract the customer id referenced in a message, if any.
pub fn extract_customer_id(message: &str) -> Option<i64> {
    CUSTOMER_ID
        .captures(&message.to_lowercase())
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Classifies messages against the fixed pattern table
#[derive(Debug, Clone, Copy, Default)]
pub struct IntentMatcher;

impl IntentMatcher {
    pub fn new() -> Self {
        Self
    }

    /// Classify a message. The first matching intent in table order wins;
    /// a message matching nothing is `Unknown`.
    pub fn classify(&self, message: &str) -> Intent {
        let normalized = message.to_lowercase();
        let normalized = normalized.trim();

        for (intent, patterns) in PATTERN_TABLE.iter() {
            if patterns.iter().any(|p| p.is_match(normalized)) {
                return *intent;
            }
        }

        Intent::Unknown
    }
}
