//! Chatbot facade combining intent matching and response rendering

use std::sync::Arc;

use churnguard_core::CustomerStore;

use crate::intent::{Intent, IntentMatcher};
use crate::responder::{ChatResponse, ResponseGenerator};

/// Natural-language query chatbot over a customer store.
///
/// Holds no per-conversation state; the only shared data is the read-only
/// compiled pattern table, so one instance can serve any number of
/// concurrent callers.
pub struct ChurnChatbot {
    matcher: IntentMatcher,
    generator: ResponseGenerator,
    store: Arc<dyn CustomerStore>,
}

impl ChurnChatbot {
    pub fn new(store: Arc<dyn CustomerStore>) -> Self {
        Self {
            matcher: IntentMatcher::new(),
            generator: ResponseGenerator::new(),
            store,
        }
    }

    /// Classify a message without rendering a response.
    pub fn classify(&self, message: &str) -> Intent {
        self.matcher.classify(message)
    }

    /// Classify a message and render its response.
    ///
    /// Never fails: unmatched messages get the fallback response and store
    /// failures are rendered as text.
    pub fn respond(&self, message: &str) -> ChatResponse {
        let intent = self.matcher.classify(message);
        tracing::debug!(%intent, "classified chat message");

        self.generator.respond(intent, message, self.store.as_ref())
    }
}
