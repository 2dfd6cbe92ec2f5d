//! Retention campaign types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Campaign lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CampaignStatus {
    Draft,
    Active,
    Completed,
}

impl CampaignStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            CampaignStatus::Draft => "Draft",
            CampaignStatus::Active => "Active",
            CampaignStatus::Completed => "Completed",
        }
    }
}

impl std::fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A retention campaign targeting a customer segment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Campaign {
    pub id: i64,
    pub name: String,
    /// Segment the campaign targets, e.g. "high_risk"
    pub target_segment: String,
    /// Delivery channels, e.g. "email", "sms"
    #[serde(default)]
    pub channels: Vec<String>,
    pub message_template: String,
    pub status: CampaignStatus,
    pub created_at: DateTime<Utc>,
}
