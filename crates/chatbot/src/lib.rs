//! Natural-language query chatbot for customer churn data
//!
//! Features:
//! - Intent classification over a fixed, ordered pattern table
//! - Deterministic response rendering per intent
//! - Store failures converted to user-facing text, never propagated

pub mod chatbot;
pub mod intent;
pub mod responder;

pub use chatbot::ChurnChatbot;
pub use intent::{extract_customer_id, Intent, IntentMatcher};
pub use responder::{ChatResponse, ResponseGenerator};
