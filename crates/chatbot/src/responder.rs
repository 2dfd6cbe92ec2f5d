//! Response rendering per intent
//!
//! Each intent queries the customer store and renders a deterministic text
//! template plus the raw data. Store failures are converted into a regular
//! response embedding the error text; the chatbot never surfaces an error
//! to its caller.

use serde::{Deserialize, Serialize};
use serde_json::json;

use churnguard_core::{CustomerStore, Result, RiskTier};

use crate::intent::{extract_customer_id, Intent};

/// Churn rate (percent) above which the rate response carries a warning
const CHURN_RATE_WARNING_PCT: f64 = 20.0;

/// Maximum customers listed inline in the high-risk response
const HIGH_RISK_LIST_LIMIT: usize = 5;

/// Maximum customers listed in the recent-activity response
const RECENT_ACTIVITY_LIMIT: usize = 10;

/// A rendered chatbot answer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Human-readable answer text
    pub text: String,
    /// Structured payload backing the answer; shape depends on the intent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl ChatResponse {
    fn text_only(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            data: None,
        }
    }
}

/// Renders responses by intent against a customer store
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseGenerator;

impl ResponseGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Render a response for a classified message.
    ///
    /// Store lookup failures become a response whose text embeds the error
    /// description.
    pub fn respond(&self, intent: Intent, message: &str, store: &dyn CustomerStore) -> ChatResponse {
        let result = match intent {
            Intent::HighRisk => self.high_risk(store),
            Intent::TotalCustomers => self.total_customers(store),
            Intent::ChurnRate => self.churn_rate(store),
            Intent::RecentActivity => self.recent_activity(store),
            Intent::Revenue => self.revenue(store),
            Intent::SpecificCustomer => self.specific_customer(message, store),
            Intent::Help => Ok(self.help()),
            Intent::Unknown => Ok(self.unknown()),
        };

        result.unwrap_or_else(|err| {
            tracing::warn!(%intent, error = %err, "store lookup failed");
            ChatResponse::text_only(format!(
                "I encountered an error processing your request: {err}"
            ))
        })
    }

    fn high_risk(&self, store: &dyn CustomerStore) -> Result<ChatResponse> {
        let high_risk = store.get_high_risk_customers(RiskTier::HIGH_THRESHOLD)?;

        if high_risk.is_empty() {
            return Ok(ChatResponse {
                text: "Great news! There are currently no high-risk customers in your database."
                    .to_string(),
                data: Some(json!([])),
            });
        }

        let mut text = format!(
            "I found {} high-risk customers who are likely to churn:\n\n",
            high_risk.len()
        );

        for (i, customer) in high_risk.iter().take(HIGH_RISK_LIST_LIMIT).enumerate() {
            text.push_str(&format!(
                "{}. {} - Churn Probability: {:.1}%\n",
                i + 1,
                customer.name,
                customer.churn_probability * 100.0
            ));
        }

        if high_risk.len() > HIGH_RISK_LIST_LIMIT {
            text.push_str(&format!(
                "\n...and {} more. ",
                high_risk.len() - HIGH_RISK_LIST_LIMIT
            ));
        }

        text.push_str("\n\nI recommend creating a retention campaign for these customers.");

        Ok(ChatResponse {
            text,
            data: Some(serde_json::to_value(&high_risk).unwrap_or_default()),
        })
    }

    fn total_customers(&self, store: &dyn CustomerStore) -> Result<ChatResponse> {
        let stats = store.get_dashboard_stats()?;

        let text = format!(
            "You have {} customers in your database.\n\n\
             • High Risk: {}\n\
             • Medium Risk: {}\n\
             • Low Risk: {}",
            stats.total_customers,
            stats.high_risk_count,
            stats.medium_risk_count,
            stats.low_risk_count
        );

        Ok(ChatResponse {
            text,
            data: Some(serde_json::to_value(&stats).unwrap_or_default()),
        })
    }

    fn churn_rate(&self, store: &dyn CustomerStore) -> Result<ChatResponse> {
        let stats = store.get_dashboard_stats()?;
        let rate = stats.churn_rate();

        let verdict = if rate > CHURN_RATE_WARNING_PCT {
            "⚠️ Action needed! High churn risk detected."
        } else {
            "✓ Churn risk is under control."
        };

        let text = format!(
            "Current churn risk analysis:\n\n\
             • High-risk customers: {} ({:.1}%)\n\
             • Total customers: {}\n\n\
             {}",
            stats.high_risk_count, rate, stats.total_customers, verdict
        );

        Ok(ChatResponse {
            text,
            data: Some(json!({
                "churn_rate": rate,
                "high_risk": stats.high_risk_count,
                "total": stats.total_customers,
            })),
        })
    }

    fn recent_activity(&self, store: &dyn CustomerStore) -> Result<ChatResponse> {
        let recent = store.get_recent_customers(RECENT_ACTIVITY_LIMIT)?;

        if recent.is_empty() {
            return Ok(ChatResponse {
                text: "No recent customer data available.".to_string(),
                data: Some(json!([])),
            });
        }

        let mut text = format!(
            "Here are the {} most recently active customers:\n\n",
            recent.len()
        );

        for (i, customer) in recent.iter().enumerate() {
            let last_activity = customer
                .last_transaction_date
                .map(|d| d.to_string())
                .unwrap_or_else(|| "N/A".to_string());
            text.push_str(&format!(
                "{}. {} - Last activity: {}\n",
                i + 1,
                customer.name,
                last_activity
            ));
        }

        Ok(ChatResponse {
            text,
            data: Some(serde_json::to_value(&recent).unwrap_or_default()),
        })
    }

    fn revenue(&self, store: &dyn CustomerStore) -> Result<ChatResponse> {
        let stats = store.get_dashboard_stats()?;

        let text = format!(
            "Revenue Overview:\n\n\
             • Total Revenue: ${:.2}\n\
             • Revenue at Risk: ${:.2}\n\
             • Percentage at Risk: {:.1}%\n\n\
             Focus on retention to protect ${:.2} in revenue!",
            stats.total_revenue,
            stats.at_risk_revenue,
            stats.at_risk_revenue_pct(),
            stats.at_risk_revenue
        );

        Ok(ChatResponse {
            text,
            data: Some(json!({
                "total_revenue": stats.total_revenue,
                "at_risk_revenue": stats.at_risk_revenue,
            })),
        })
    }

    fn specific_customer(&self, message: &str, store: &dyn CustomerStore) -> Result<ChatResponse> {
        let Some(customer_id) = extract_customer_id(message) else {
            return Ok(ChatResponse::text_only(
                "Please specify a customer ID. For example: 'Show me customer 123'",
            ));
        };

        let Some(detail) = store.get_customer_detail(customer_id)? else {
            return Ok(ChatResponse::text_only(format!(
                "Customer with ID {customer_id} not found."
            )));
        };

        let tier = detail
            .risk_tier
            .map(|t| t.display_name())
            .unwrap_or("Unknown");
        let probability = detail.churn_probability.unwrap_or(0.0);

        let text = format!(
            "Customer Details:\n\n\
             Name: {}\n\
             Email: {}\n\
             Churn Risk: {}\n\
             Churn Probability: {:.1}%\n\
             Total Spent: ${:.2}\n\
             Transactions: {}\n",
            detail.record.name,
            detail.record.email,
            tier,
            probability * 100.0,
            detail.record.total_spent,
            detail.record.transaction_count
        );

        Ok(ChatResponse {
            text,
            data: Some(serde_json::to_value(&detail).unwrap_or_default()),
        })
    }

    fn help(&self) -> ChatResponse {
        ChatResponse::text_only(
            "I can help you with:\n\n\
             1. **Customer Risk Analysis**\n\
             \u{2022} \"Show me high-risk customers\"\n\
             \u{2022} \"Who is likely to churn?\"\n\n\
             2. **Statistics**\n\
             \u{2022} \"How many customers do we have?\"\n\
             \u{2022} \"What's our churn rate?\"\n\n\
             3. **Revenue Insights**\n\
             \u{2022} \"Show me revenue statistics\"\n\
             \u{2022} \"How much revenue is at risk?\"\n\n\
             4. **Customer Details**\n\
             \u{2022} \"Tell me about customer 123\"\n\
             \u{2022} \"Show customer information\"\n\n\
             5. **Recent Activity**\n\
             \u{2022} \"Show recent customer activity\"\n\
             \u{2022} \"Who are our latest customers?\"\n\n\
             Just ask me naturally, and I'll do my best to help!",
        )
    }

    fn unknown(&self) -> ChatResponse {
        ChatResponse::text_only(
            "I'm not sure I understand that question. Here are some things you can ask me:\n\n\
             \u{2022} 'Show me high-risk customers'\n\
             \u{2022} 'What's our churn rate?'\n\
             \u{2022} 'How many customers do we have?'\n\
             \u{2022} 'Tell me about customer 123'\n\n\
             Type 'help' to see all available queries.",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use churnguard_core::{
        CustomerDetail, CustomerRecord, DashboardStats, Error, HighRiskCustomer, Prediction,
        RecentCustomer,
    };

    /// Store stub with canned answers, for exercising templates in
    /// isolation.
    #[derive(Default)]
    struct StubStore {
        stats: DashboardStats,
        high_risk: Vec<HighRiskCustomer>,
        recent: Vec<RecentCustomer>,
        detail: Option<CustomerDetail>,
        fail: bool,
    }

    impl CustomerStore for StubStore {
        fn add_customers(&self, records: Vec<CustomerRecord>) -> Result<usize> {
            Ok(records.len())
        }

        fn add_churn_scores(&self, _predictions: &[Prediction]) -> Result<()> {
            Ok(())
        }

        fn get_high_risk_customers(&self, _threshold: f64) -> Result<Vec<HighRiskCustomer>> {
            if self.fail {
                return Err(Error::Store("connection reset".to_string()));
            }
            Ok(self.high_risk.clone())
        }

        fn get_customer_detail(&self, _id: i64) -> Result<Option<CustomerDetail>> {
            Ok(self.detail.clone())
        }

        fn get_recent_customers(&self, limit: usize) -> Result<Vec<RecentCustomer>> {
            Ok(self.recent.iter().take(limit).cloned().collect())
        }

        fn get_dashboard_stats(&self) -> Result<DashboardStats> {
            if self.fail {
                return Err(Error::Store("connection reset".to_string()));
            }
            Ok(self.stats.clone())
        }
    }

    fn high_risk_row(id: i64, name: &str, probability: f64) -> HighRiskCustomer {
        HighRiskCustomer {
            id,
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
            total_spent: 100.0,
            churn_probability: probability,
            risk_tier: RiskTier::High,
        }
    }

    #[test]
    fn test_total_customers_includes_tier_breakdown() {
        let store = StubStore {
            stats: DashboardStats {
                total_customers: 100,
                high_risk_count: 25,
                medium_risk_count: 30,
                low_risk_count: 45,
                ..Default::default()
            },
            ..Default::default()
        };

        let response =
            ResponseGenerator::new().respond(Intent::TotalCustomers, "how many customers", &store);

        for needle in ["100", "25", "30", "45"] {
            assert!(response.text.contains(needle), "missing {needle}");
        }
        assert!(response.data.is_some());
    }

    #[test]
    fn test_high_risk_lists_top_five_and_remainder() {
        let store = StubStore {
            high_risk: (0..7)
                .map(|i| high_risk_row(i, &format!("Customer {i}"), 0.9 - i as f64 * 0.01))
                .collect(),
            ..Default::default()
        };

        let response = ResponseGenerator::new().respond(Intent::HighRisk, "high risk", &store);

        assert!(response.text.contains("I found 7 high-risk customers"));
        assert!(response.text.contains("5. Customer 4"));
        assert!(!response.text.contains("6. Customer 5"));
        assert!(response.text.contains("...and 2 more."));
        assert!(response.text.contains("retention campaign"));
    }

    #[test]
    fn test_high_risk_empty_state() {
        let store = StubStore::default();

        let response = ResponseGenerator::new().respond(Intent::HighRisk, "at risk", &store);

        assert!(response.text.contains("no high-risk customers"));
        assert_eq!(response.data, Some(json!([])));
    }

    #[test]
    fn test_churn_rate_warning_threshold() {
        let calm = StubStore {
            stats: DashboardStats {
                total_customers: 100,
                high_risk_count: 10,
                ..Default::default()
            },
            ..Default::default()
        };
        let alarmed = StubStore {
            stats: DashboardStats {
                total_customers: 100,
                high_risk_count: 25,
                ..Default::default()
            },
            ..Default::default()
        };

        let generator = ResponseGenerator::new();
        let calm_response = generator.respond(Intent::ChurnRate, "churn rate", &calm);
        let alarmed_response = generator.respond(Intent::ChurnRate, "churn rate", &alarmed);

        assert!(calm_response.text.contains("under control"));
        assert!(alarmed_response.text.contains("Action needed"));
    }

    #[test]
    fn test_churn_rate_empty_store_is_zero() {
        let store = StubStore::default();

        let response = ResponseGenerator::new().respond(Intent::ChurnRate, "churn rate", &store);

        assert!(response.text.contains("(0.0%)"));
    }

    #[test]
    fn test_revenue_percent_at_risk() {
        let store = StubStore {
            stats: DashboardStats {
                total_revenue: 10_000.0,
                at_risk_revenue: 2_500.0,
                ..Default::default()
            },
            ..Default::default()
        };

        let response = ResponseGenerator::new().respond(Intent::Revenue, "revenue", &store);

        assert!(response.text.contains("$10000.00"));
        assert!(response.text.contains("$2500.00"));
        assert!(response.text.contains("25.0%"));
    }

    #[test]
    fn test_specific_customer_not_found() {
        let store = StubStore::default();

        let response =
            ResponseGenerator::new().respond(Intent::SpecificCustomer, "customer 42", &store);

        assert!(response.text.contains("42"));
        assert!(response.text.contains("not found"));
        assert!(response.data.is_none());
    }

    #[test]
    fn test_specific_customer_without_id_prompts() {
        let store = StubStore::default();

        let response = ResponseGenerator::new().respond(
            Intent::SpecificCustomer,
            "tell me about a customer",
            &store,
        );

        assert!(response.text.contains("specify a customer ID"));
    }

    #[test]
    fn test_specific_customer_detail_block() {
        let mut record = CustomerRecord::new("Nathan Cooper", "nathan.cooper@example.com")
            .transactions(4, 310.0);
        record.id = Some(9);

        let store = StubStore {
            detail: Some(CustomerDetail {
                record,
                churn_probability: Some(0.45),
                risk_tier: Some(RiskTier::Medium),
                features: None,
            }),
            ..Default::default()
        };

        let response =
            ResponseGenerator::new().respond(Intent::SpecificCustomer, "customer 9", &store);

        assert!(response.text.contains("Nathan Cooper"));
        assert!(response.text.contains("Medium"));
        assert!(response.text.contains("45.0%"));
        assert!(response.text.contains("$310.00"));
    }

    #[test]
    fn test_recent_activity_empty_state() {
        let store = StubStore::default();

        let response =
            ResponseGenerator::new().respond(Intent::RecentActivity, "recent activity", &store);

        assert!(response.text.contains("No recent customer data"));
    }

    #[test]
    fn test_store_failure_becomes_text() {
        let store = StubStore {
            fail: true,
            ..Default::default()
        };

        let response = ResponseGenerator::new().respond(Intent::HighRisk, "high risk", &store);

        assert!(response.text.contains("I encountered an error"));
        assert!(response.text.contains("connection reset"));
        assert!(response.data.is_none());
    }

    #[test]
    fn test_help_and_unknown_are_static() {
        let store = StubStore::default();
        let generator = ResponseGenerator::new();

        let help = generator.respond(Intent::Help, "help", &store);
        assert!(help.text.contains("Customer Risk Analysis"));

        let unknown = generator.respond(Intent::Unknown, "gibberish", &store);
        assert!(unknown.text.contains("not sure I understand"));
    }
}
