//! Knowledge entries - the reply text stored under a key.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A stored reply: either fixed text or a set of interchangeable variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KnowledgeEntry {
    Text(String),
    Variants(Vec<String>),
}

impl KnowledgeEntry {
    pub fn text(text: impl Into<String>) -> Self {
        KnowledgeEntry::Text(text.into())
    }

    pub fn variants<I, S>(variants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        KnowledgeEntry::Variants(variants.into_iter().map(Into::into).collect())
    }

    /// Whether repeated picks may differ.
    pub fn is_varied(&self) -> bool {
        matches!(self, KnowledgeEntry::Variants(v) if v.len() > 1)
    }

    /// All strings this entry can produce.
    pub fn texts(&self) -> &[String] {
        match self {
            KnowledgeEntry::Text(text) => std::slice::from_ref(text),
            KnowledgeEntry::Variants(variants) => variants,
        }
    }

    /// Choose the reply text. Variants are picked uniformly at random.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        match self {
            KnowledgeEntry::Text(text) => Some(text),
            KnowledgeEntry::Variants(variants) => variants.choose(rng).map(String::as_str),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_text_pick() {
        let mut rng = StdRng::seed_from_u64(1);
        let entry = KnowledgeEntry::text("Use drip irrigation");
        assert_eq!(entry.pick(&mut rng), Some("Use drip irrigation"));
        assert!(!entry.is_varied());
    }

    #[test]
    fn test_variant_pick_stays_in_set() {
        let mut rng = StdRng::seed_from_u64(7);
        let entry = KnowledgeEntry::variants(["a", "b", "c"]);
        assert!(entry.is_varied());
        for _ in 0..50 {
            let picked = entry.pick(&mut rng).unwrap();
            assert!(entry.texts().iter().any(|t| t == picked));
        }
    }

    #[test]
    fn test_empty_variants() {
        let mut rng = StdRng::seed_from_u64(0);
        let entry = KnowledgeEntry::Variants(Vec::new());
        assert_eq!(entry.pick(&mut rng), None);
    }
}
