//! Sample customer generation for demos and tests
//!
//! Generates a mixed base of roughly 25% high-risk, 25% medium-risk, and
//! 50% low-risk behavior patterns so dashboards and chatbot answers have
//! something realistic to show out of the box.

use chrono::{Duration, NaiveDate, Utc};
use rand::Rng;

use churnguard_core::CustomerRecord;

const SAMPLE_NAMES: &[&str] = &[
    "John Smith",
    "Emma Johnson",
    "Michael Brown",
    "Sarah Davis",
    "James Wilson",
    "Emily Taylor",
    "David Anderson",
    "Jessica Martinez",
    "Robert Thomas",
    "Ashley Garcia",
    "William Rodriguez",
    "Amanda Lopez",
    "Christopher Lee",
    "Melissa White",
    "Daniel Harris",
    "Jennifer Clark",
    "Matthew Lewis",
    "Stephanie Hall",
    "Joseph Allen",
    "Rebecca Young",
    "Ryan King",
    "Laura Wright",
    "Kevin Scott",
    "Michelle Green",
    "Brian Adams",
    "Kimberly Baker",
    "Jason Nelson",
    "Lisa Carter",
    "Andrew Mitchell",
    "Mary Roberts",
];

/// Generate `count` sample customers, dated relative to today.
pub fn generate_sample_customers(count: usize) -> Vec<CustomerRecord> {
    let mut rng = rand::rng();
    generate_with(&mut rng, count, Utc::now().date_naive())
}

/// Generator with injected randomness and reference date, for
/// deterministic tests.
pub fn generate_with<R: Rng>(rng: &mut R, count: usize, today: NaiveDate) -> Vec<CustomerRecord> {
    (0..count)
        .map(|i| {
            let name = SAMPLE_NAMES[i % SAMPLE_NAMES.len()];
            let email = format!("{}@example.com", name.to_lowercase().replace(' ', "."));

            // One high-risk and one medium-risk pattern per four customers,
            // the rest low risk.
            let (transactions, spent, inactive_days, engagement, tickets) = match i % 4 {
                0 => (
                    rng.random_range(0..=2),
                    rng.random_range(0.0..100.0),
                    rng.random_range(90..=365),
                    rng.random_range(10..=30),
                    rng.random_range(3..=8),
                ),
                1 => (
                    rng.random_range(3..=8),
                    rng.random_range(100.0..500.0),
                    rng.random_range(30..=90),
                    rng.random_range(40..=60),
                    rng.random_range(1..=3),
                ),
                _ => (
                    rng.random_range(10..=50),
                    rng.random_range(500.0..5000.0),
                    rng.random_range(1..=30),
                    rng.random_range(70..=95),
                    rng.random_range(0..=2),
                ),
            };

            let registered_days_ago = rng.random_range(180..=730);

            CustomerRecord::new(name, email)
                .phone(format!(
                    "+1-555-{:03}-{:04}",
                    rng.random_range(100..1000),
                    rng.random_range(1000..10000)
                ))
                .registered_on(today - Duration::days(registered_days_ago))
                .last_active_on(today - Duration::days(inactive_days))
                .transactions(transactions, (spent * 100.0_f64).round() / 100.0)
                .engagement(engagement)
                .tickets(tickets)
        })
        .collect()
}
