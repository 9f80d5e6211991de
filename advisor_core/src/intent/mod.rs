//! Intent classification - mapping free text to what the user wants.
//!
//! Classification is plain ordered substring matching on the lower-cased
//! query. The first intent with a matching trigger wins.

mod audience;
mod keyword;
mod topic;

pub use audience::*;
pub use keyword::*;
pub use topic::*;

use serde::{Deserialize, Serialize};

/// Purpose of a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Greeting,
    HowAreYou,
    WhoAreYou,
    Capabilities,
    ThankYou,
    Goodbye,
    Agriculture,
    Fallback,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Greeting => "greeting",
            Intent::HowAreYou => "how_are_you",
            Intent::WhoAreYou => "who_are_you",
            Intent::Capabilities => "capabilities",
            Intent::ThankYou => "thank_you",
            Intent::Goodbye => "goodbye",
            Intent::Agriculture => "agriculture",
            Intent::Fallback => "fallback",
        }
    }

    /// Conversational entry answering this intent, if it has a fixed one.
    pub fn greeting_subcategory(&self) -> Option<&'static str> {
        match self {
            Intent::Greeting => Some("greetings"),
            Intent::HowAreYou => Some("how_are_you"),
            Intent::WhoAreYou => Some("who_are_you"),
            Intent::Capabilities => Some("what_can_you_do"),
            Intent::ThankYou => Some("thank_you"),
            Intent::Goodbye => Some("goodbye"),
            Intent::Agriculture | Intent::Fallback => None,
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Words dropped from extracted keywords.
pub const QUESTION_WORDS: &[&str] = &[
    "how", "what", "why", "when", "where", "who", "which", "help", "tell", "explain", "give",
    "need", "want", "know",
];

/// A classified query with its extracted keywords.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedQuery {
    pub query: String,
    pub intent: Intent,
    pub keywords: Vec<String>,
}

/// Anything that can assign an intent to a query.
pub trait IntentClassifier: Send + Sync {
    fn classify(&self, query: &str) -> Intent;

    /// Classify and extract keywords in one pass.
    fn process(&self, query: &str) -> ProcessedQuery {
        ProcessedQuery {
            query: query.to_string(),
            intent: self.classify(query),
            keywords: extract_keywords(query),
        }
    }
}

/// Lower-cased content words longer than two characters.
pub fn extract_keywords(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .replace(['?', '!', '.'], " ")
        .split_whitespace()
        .filter(|word| word.chars().count() > 2 && !QUESTION_WORDS.contains(word))
        .map(str::to_string)
        .collect()
}
