//! Knowledge keys - the (category, subcategory, language) index of the table.

use serde::{Deserialize, Serialize};

use tracing::warn;

use crate::error::AdvisorError;

/// Top-level grouping of knowledge entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Conversational replies: greetings, small talk, capabilities.
    Greeting,
    Crop,
    Disease,
    Fertilizer,
    Irrigation,
    /// Government schemes and subsidies.
    Scheme,
    Climate,
    Soil,
    Yield,
    Planting,
    Fallback,
}

impl Category {
    /// Name used in the knowledge data and in key display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Greeting => "greeting",
            Category::Crop => "crop",
            Category::Disease => "disease",
            Category::Fertilizer => "fertilizer",
            Category::Irrigation => "irrigation",
            Category::Scheme => "scheme",
            Category::Climate => "climate",
            Category::Soil => "soil",
            Category::Yield => "yield",
            Category::Planting => "planting",
            Category::Fallback => "fallback",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Supported reply languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Hi,
    Ta,
    Te,
}

impl Language {
    pub const ALL: [Language; 4] = [Language::En, Language::Hi, Language::Ta, Language::Te];

    /// Two-letter ISO 639-1 code.
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
            Language::Ta => "ta",
            Language::Te => "te",
        }
    }

    /// Parse a language code, tolerating region suffixes such as `hi-IN`.
    pub fn from_code(code: &str) -> Result<Self, AdvisorError> {
        let primary = code
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match primary.as_str() {
            "en" => Ok(Language::En),
            "hi" => Ok(Language::Hi),
            "ta" => Ok(Language::Ta),
            "te" => Ok(Language::Te),
            _ => Err(AdvisorError::UnknownLanguage(code.to_string())),
        }
    }
}

impl Language {
    /// Parse a language code, using English for anything unsupported.
    pub fn from_code_or_default(code: &str) -> Self {
        Language::from_code(code).unwrap_or_else(|err| {
            warn!(error = %err, "falling back to English");
            Language::En
        })
    }
}

impl std::str::FromStr for Language {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(s)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Address of a single knowledge entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KnowledgeKey {
    pub category: Category,
    pub subcategory: String,
    pub language: Language,
}

impl KnowledgeKey {
    pub fn new(category: Category, subcategory: impl Into<String>, language: Language) -> Self {
        Self {
            category,
            subcategory: subcategory.into(),
            language,
        }
    }

    /// The generic fallback reply in a language.
    pub fn fallback(language: Language) -> Self {
        Self::new(Category::Fallback, "default", language)
    }

    /// Same category and subcategory in another language.
    pub fn with_language(&self, language: Language) -> Self {
        Self {
            language,
            ..self.clone()
        }
    }

    /// True for the generic fallback reply in any language.
    pub fn is_fallback(&self) -> bool {
        self.category == Category::Fallback
    }
}

impl std::fmt::Display for KnowledgeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}", self.category, self.subcategory, self.language)
    }
}
