//! # Advisor Core
//!
//! The conversational side of AgriGuard. This crate classifies farmer
//! questions, answers them from a multilingual knowledge table, runs
//! (simulated) leaf-image diagnosis, and fronts the `crop_rules` risk scorer.
//!
//! ## Core Components
//!
//! - **knowledge_base**: Reply table keyed by category, subcategory and language
//! - **intent**: Substring intent classifier, topic resolver, audience detection
//! - **responder**: Table lookup with English fallback and seeded variation
//! - **diagnosis**: Diagnostic providers with a simulated fallback
//! - **cache**: Bounded LRU cache for deterministic replies
//! - **assistant**: Facade tying the above together

pub mod assistant;
pub mod cache;
pub mod config;
pub mod diagnosis;
pub mod error;
pub mod intent;
pub mod knowledge_base;
pub mod responder;

pub use assistant::*;
pub use cache::*;
pub use config::*;
pub use diagnosis::*;
pub use error::AdvisorError;
pub use intent::*;
pub use knowledge_base::*;
pub use responder::*;
