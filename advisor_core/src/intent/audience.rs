//! Audience identification - who is likely asking.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Audience {
    Farmer,
    Ngo,
    Government,
    #[default]
    General,
}

impl Audience {
    pub fn as_str(&self) -> &'static str {
        match self {
            Audience::Farmer => "farmer",
            Audience::Ngo => "ngo",
            Audience::Government => "government",
            Audience::General => "general",
        }
    }
}

impl std::fmt::Display for Audience {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Keyword lists per audience, in tie-break order.
pub static AUDIENCE_KEYWORDS: &[(Audience, &[&str])] = &[
    (
        Audience::Farmer,
        &["my farm", "my crop", "fertilizer", "pesticide", "yield", "harvest", "soil"],
    ),
    (
        Audience::Ngo,
        &["funding", "grant", "project", "community", "training", "workshop", "beneficiaries"],
    ),
    (
        Audience::Government,
        &["scheme", "subsidy", "policy", "regulation", "compliance", "report", "statistics"],
    ),
];

/// Score each audience by how many of its keywords occur; highest wins.
pub fn identify_audience(query: &str) -> Audience {
    let lowered = query.to_lowercase();
    let mut best = Audience::General;
    let mut best_score = 0;

    for (audience, keywords) in AUDIENCE_KEYWORDS {
        let score = keywords.iter().filter(|k| lowered.contains(*k)).count();
        if score > best_score {
            best = *audience;
            best_score = score;
        }
    }
    best
}
