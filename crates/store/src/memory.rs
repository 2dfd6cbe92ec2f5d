//! `MemoryStore`: the in-memory `CustomerStore` implementation

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use chrono::Utc;
use parking_lot::RwLock;

use churnguard_core::{
    Campaign, CampaignStatus, ChurnScore, CustomerDetail, CustomerRecord, CustomerStore,
    DashboardStats, HighRiskCustomer, Prediction, RecentCustomer, Result, RiskTier,
};

#[derive(Default)]
struct Inner {
    customers: BTreeMap<i64, CustomerRecord>,
    /// Current score per customer; insertion replaces the prior entry
    scores: HashMap<i64, ChurnScore>,
    campaigns: Vec<Campaign>,
    next_customer_id: i64,
    next_campaign_id: i64,
}

/// Thread-safe in-memory store.
///
/// All reads take a shared lock and compute aggregates on the fly; the
/// dataset sizes this serves (uploaded CSV batches) make that cheap enough.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a retention campaign in `Active` status. Returns its id.
    pub fn create_campaign(
        &self,
        name: impl Into<String>,
        target_segment: impl Into<String>,
        channels: Vec<String>,
        message_template: impl Into<String>,
    ) -> i64 {
        let mut inner = self.inner.write();
        inner.next_campaign_id += 1;
        let id = inner.next_campaign_id;

        inner.campaigns.push(Campaign {
            id,
            name: name.into(),
            target_segment: target_segment.into(),
            channels,
            message_template: message_template.into(),
            status: CampaignStatus::Active,
            created_at: Utc::now(),
        });

        tracing::debug!(campaign_id = id, "created campaign");
        id
    }

    /// All customer records with their assigned ids, in insertion order.
    ///
    /// The ingestion pipeline reads records back through this after
    /// `add_customers` so batch predictions carry persisted identifiers.
    pub fn get_customers(&self) -> Vec<CustomerRecord> {
        self.inner.read().customers.values().cloned().collect()
    }

    /// Campaigns filtered by status; `None` returns all, newest first.
    pub fn get_campaigns(&self, status: Option<CampaignStatus>) -> Vec<Campaign> {
        let inner = self.inner.read();
        let mut campaigns: Vec<Campaign> = inner
            .campaigns
            .iter()
            .filter(|c| status.map_or(true, |s| c.status == s))
            .cloned()
            .collect();
        campaigns.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        campaigns
    }
}

impl CustomerStore for MemoryStore {
    fn add_customers(&self, records: Vec<CustomerRecord>) -> Result<usize> {
        let mut inner = self.inner.write();
        let count = records.len();

        for mut record in records {
            inner.next_customer_id += 1;
            let id = inner.next_customer_id;
            record.id = Some(id);
            inner.customers.insert(id, record);
        }

        tracing::debug!(count, "inserted customers");
        Ok(count)
    }

    fn add_churn_scores(&self, predictions: &[Prediction]) -> Result<()> {
        let mut inner = self.inner.write();

        for prediction in predictions {
            let Some(id) = prediction.customer_id else {
                tracing::warn!(name = %prediction.name, "skipping score for unpersisted customer");
                continue;
            };
            if !inner.customers.contains_key(&id) {
                tracing::warn!(customer_id = id, "skipping score for unknown customer");
                continue;
            }
            // Replace-on-write: the new score supersedes the prior one.
            inner.scores.insert(id, prediction.score.clone());
        }

        Ok(())
    }

    fn get_high_risk_customers(&self, threshold: f64) -> Result<Vec<HighRiskCustomer>> {
        let inner = self.inner.read();

        let mut rows: Vec<HighRiskCustomer> = inner
            .scores
            .iter()
            .filter(|(_, score)| score.probability >= threshold)
            .filter_map(|(id, score)| {
                inner.customers.get(id).map(|record| HighRiskCustomer {
                    id: *id,
                    name: record.name.clone(),
                    email: record.email.clone(),
                    total_spent: record.total_spent,
                    churn_probability: score.probability,
                    risk_tier: score.tier,
                })
            })
            .collect();

        rows.sort_by(|a, b| {
            b.churn_probability
                .partial_cmp(&a.churn_probability)
                .unwrap_or(Ordering::Equal)
        });

        Ok(rows)
    }

    fn get_customer_detail(&self, id: i64) -> Result<Option<CustomerDetail>> {
        let inner = self.inner.read();

        Ok(inner.customers.get(&id).map(|record| {
            let score = inner.scores.get(&id);
            CustomerDetail {
                record: record.clone(),
                churn_probability: score.map(|s| s.probability),
                risk_tier: score.map(|s| s.tier),
                features: score.map(|s| s.features),
            }
        }))
    }

    fn get_recent_customers(&self, limit: usize) -> Result<Vec<RecentCustomer>> {
        let inner = self.inner.read();

        let mut rows: Vec<RecentCustomer> = inner
            .customers
            .iter()
            .map(|(id, record)| {
                let score = inner.scores.get(id);
                RecentCustomer {
                    id: *id,
                    name: record.name.clone(),
                    email: record.email.clone(),
                    last_transaction_date: record.last_transaction_date,
                    churn_probability: score.map(|s| s.probability),
                    risk_tier: score.map(|s| s.tier),
                }
            })
            .collect();

        // Descending by last activity; customers with no recorded
        // transaction sort last.
        rows.sort_by(|a, b| b.last_transaction_date.cmp(&a.last_transaction_date));
        rows.truncate(limit);

        Ok(rows)
    }

    fn get_dashboard_stats(&self) -> Result<DashboardStats> {
        let inner = self.inner.read();

        let mut stats = DashboardStats {
            total_customers: inner.customers.len(),
            ..Default::default()
        };

        for (id, score) in &inner.scores {
            match score.tier {
                RiskTier::High => stats.high_risk_count += 1,
                RiskTier::Medium => stats.medium_risk_count += 1,
                RiskTier::Low => stats.low_risk_count += 1,
            }
            if score.tier.is_high() {
                if let Some(record) = inner.customers.get(id) {
                    stats.at_risk_revenue += record.total_spent;
                }
            }
        }

        stats.total_revenue = inner.customers.values().map(|r| r.total_spent).sum();
        stats.active_campaigns = inner
            .campaigns
            .iter()
            .filter(|c| c.status == CampaignStatus::Active)
            .count();

        Ok(stats)
    }
}
