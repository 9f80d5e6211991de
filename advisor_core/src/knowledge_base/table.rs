//! Knowledge table - flat, read-only map from keys to entries.

use serde::Deserialize;
use std::collections::HashMap;
use tracing::debug;

use super::{Category, KnowledgeEntry, KnowledgeKey, Language};
use crate::error::{AdvisorError, Result};

const BUILTIN_KNOWLEDGE: &str = include_str!("../../data/knowledge.toml");

#[derive(Debug, Deserialize)]
struct RawTable {
    #[serde(default)]
    entry: Vec<RawEntry>,
}

#[derive(Debug, Deserialize)]
struct RawEntry {
    category: Category,
    subcategory: String,
    language: Language,
    text: Option<String>,
    variants: Option<Vec<String>>,
}

impl RawEntry {
    fn into_parts(self) -> Result<(KnowledgeKey, KnowledgeEntry)> {
        let key = KnowledgeKey::new(self.category, self.subcategory, self.language);
        let entry = match (self.text, self.variants) {
            (Some(text), None) => KnowledgeEntry::Text(text),
            (None, Some(variants)) if !variants.is_empty() => KnowledgeEntry::Variants(variants),
            (None, Some(_)) => {
                return Err(AdvisorError::KnowledgeData(format!(
                    "{key}: variants must not be empty"
                )))
            }
            _ => {
                return Err(AdvisorError::KnowledgeData(format!(
                    "{key}: exactly one of `text` or `variants` is required"
                )))
            }
        };
        Ok((key, entry))
    }
}

/// The knowledge table. Built once, then only read.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeTable {
    entries: HashMap<KnowledgeKey, KnowledgeEntry>,
}

impl KnowledgeTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The table shipped with the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_KNOWLEDGE)
    }

    /// Parse a table from `[[entry]]` rows. Duplicate keys are rejected.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let raw: RawTable = toml::from_str(source)?;
        let mut table = Self::new();
        for row in raw.entry {
            let (key, entry) = row.into_parts()?;
            if table.entries.contains_key(&key) {
                return Err(AdvisorError::KnowledgeData(format!("duplicate entry {key}")));
            }
            table.entries.insert(key, entry);
        }
        debug!(entries = table.len(), "knowledge table loaded");
        Ok(table)
    }

    /// Add or replace an entry.
    pub fn with_entry(mut self, key: KnowledgeKey, entry: KnowledgeEntry) -> Self {
        self.entries.insert(key, entry);
        self
    }

    /// Exact lookup.
    pub fn get(&self, key: &KnowledgeKey) -> Option<&KnowledgeEntry> {
        self.entries.get(key)
    }

    /// Lookup that falls back to English when the requested language is absent.
    ///
    /// Returns the key actually used alongside the entry.
    pub fn resolve(&self, key: &KnowledgeKey) -> Option<(KnowledgeKey, &KnowledgeEntry)> {
        if let Some(entry) = self.entries.get(key) {
            return Some((key.clone(), entry));
        }
        if key.language == Language::En {
            return None;
        }
        let english = key.with_language(Language::En);
        self.entries.get(&english).map(|entry| (english, entry))
    }

    /// True when the exact key, language included, has an entry.
    pub fn contains(&self, key: &KnowledgeKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Distinct subcategories present for a category, sorted.
    pub fn subcategories(&self, category: Category) -> Vec<&str> {
        let mut subs: Vec<&str> = self
            .entries
            .keys()
            .filter(|k| k.category == category)
            .map(|k| k.subcategory.as_str())
            .collect();
        subs.sort_unstable();
        subs.dedup();
        subs
    }

    /// Languages with an entry for the given category and subcategory.
    pub fn languages_for(&self, category: Category, subcategory: &str) -> Vec<Language> {
        Language::ALL
            .into_iter()
            .filter(|lang| {
                self.entries
                    .contains_key(&KnowledgeKey::new(category, subcategory, *lang))
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
