//! Knowledge responder - turns a key into reply text.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

use crate::knowledge_base::{KnowledgeKey, KnowledgeTable};

/// Result of a knowledge lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Lookup {
    Found {
        /// Key that supplied the text. Its language may differ from the
        /// requested one when the English entry was used.
        key: KnowledgeKey,
        text: String,
        /// Whether the entry has several variants.
        varied: bool,
    },
    NotFound { key: KnowledgeKey },
}

impl Lookup {
    /// True when an entry supplied the text.
    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found { .. })
    }

    /// The reply text, or `""` when nothing was found.
    pub fn text_or_empty(&self) -> &str {
        match self {
            Lookup::Found { text, .. } => text,
            Lookup::NotFound { .. } => "",
        }
    }
}

/// Looks up replies and picks among variants with its own RNG.
#[derive(Debug, Clone)]
pub struct Responder {
    table: Arc<KnowledgeTable>,
    rng: StdRng,
}

impl Responder {
    /// A responder seeded from OS entropy.
    pub fn new(table: Arc<KnowledgeTable>) -> Self {
        Self {
            table,
            rng: StdRng::from_entropy(),
        }
    }

    /// A responder with reproducible variant picks.
    pub fn seeded(table: Arc<KnowledgeTable>, seed: u64) -> Self {
        Self {
            table,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Restart variant selection from a seed.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// The table replies are drawn from.
    pub fn table(&self) -> &KnowledgeTable {
        &self.table
    }

    /// Look up a key, falling back to English when the language is missing.
    pub fn respond(&mut self, key: &KnowledgeKey) -> Lookup {
        let Some((used, entry)) = self.table.resolve(key) else {
            debug!(%key, "no knowledge entry");
            return Lookup::NotFound { key: key.clone() };
        };

        match entry.pick(&mut self.rng) {
            Some(text) => Lookup::Found {
                varied: entry.is_varied(),
                text: text.to_string(),
                key: used,
            },
            None => Lookup::NotFound { key: key.clone() },
        }
    }
}
