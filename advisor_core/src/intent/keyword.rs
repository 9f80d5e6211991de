//! Substring-based intent classifier.

use tracing::debug;

use super::{Intent, IntentClassifier};

/// An intent and the phrases that trigger it, in priority order.
#[derive(Debug, Clone, Copy)]
pub struct IntentPattern {
    pub intent: Intent,
    pub triggers: &'static [&'static str],
}

/// Built-in patterns. Order is significant: short triggers such as `"hi"`
/// or `"po"` also match inside longer words.
pub static INTENT_PATTERNS: &[IntentPattern] = &[
    IntentPattern {
        intent: Intent::Greeting,
        triggers: &[
            "hello",
            "hi",
            "hey",
            "namaste",
            "good morning",
            "good evening",
            "vanakkam",
            "hola",
        ],
    },
    IntentPattern {
        intent: Intent::HowAreYou,
        triggers: &["how are you", "how do you do", "kaisa hai", "vela irukku", "ela unna"],
    },
    IntentPattern {
        intent: Intent::WhoAreYou,
        triggers: &["who are you", "what are you", "kon hai", "ne enga", "emi ledu"],
    },
    IntentPattern {
        intent: Intent::Capabilities,
        triggers: &["what can you do", "help me", "evaru cheyyalo", "unga support", "help"],
    },
    IntentPattern {
        intent: Intent::ThankYou,
        triggers: &["thank you", "thanks", "dhanyavad", "nandri", "shukriya"],
    },
    IntentPattern {
        intent: Intent::Goodbye,
        triggers: &["bye", "goodbye", "alvida", "po", "bye"],
    },
    IntentPattern {
        intent: Intent::Agriculture,
        triggers: &[
            "farming",
            "crop",
            "agriculture",
            "field",
            "farm",
            "plant",
            "kheti",
            "velanai",
            "paddy",
            "rice",
            "wheat",
            "disease",
            "fertilizer",
            "irrigation",
            "bajra",
            "jowar",
            "ragi",
            "sugarcane",
            "cotton",
            "vegetable",
            "fruit",
        ],
    },
];

/// Farming vocabulary consulted when no pattern matched.
pub static AGRICULTURE_KEYWORDS: &[&str] = &[
    "crop", "farm", "farming", "rice", "wheat", "maize", "sugarcane", "plant", "field",
    "agriculture", "paddy", "cotton", "pulses", "vegetable", "fruit", "irrigation", "water",
    "soil", "fertilizer", "pesticide", "disease", "pest", "harvest", "sow", "seed", "monsoon",
    "rainfall", "yield", "garden", "drip", "flood", "urea", "dap", "npk", "bajra", "jowar",
    "ragi", "gram", "tur", "moong", "urad", "mustard", "groundnut", "soybean", "tomato",
    "potato", "onion", "mango", "banana", "blight", "rust", "scheme", "subsidy", "weather",
    "climate", "temperature", "heat", "cold", "drought", "profit", "income", "production",
    "germination", "fungal", "bacterial", "infection", "acid", "alkaline",
];

/// Classifies by first matching trigger substring.
#[derive(Debug, Clone)]
pub struct KeywordClassifier {
    patterns: &'static [IntentPattern],
    agriculture_keywords: &'static [&'static str],
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordClassifier {
    /// Classifier over the built-in patterns and farming vocabulary.
    pub fn new() -> Self {
        Self {
            patterns: INTENT_PATTERNS,
            agriculture_keywords: AGRICULTURE_KEYWORDS,
        }
    }

    /// Use a custom pattern table.
    pub fn with_patterns(mut self, patterns: &'static [IntentPattern]) -> Self {
        self.patterns = patterns;
        self
    }

    /// Use a custom farming vocabulary.
    pub fn with_agriculture_keywords(mut self, keywords: &'static [&'static str]) -> Self {
        self.agriculture_keywords = keywords;
        self
    }

    /// True if the query mentions any farming keyword.
    pub fn is_agriculture_query(&self, query: &str) -> bool {
        let lowered = query.to_lowercase();
        self.agriculture_keywords
            .iter()
            .any(|keyword| lowered.contains(keyword))
    }
}

impl IntentClassifier for KeywordClassifier {
    fn classify(&self, query: &str) -> Intent {
        let lowered = query.trim().to_lowercase();
        if lowered.is_empty() {
            return Intent::Fallback;
        }

        for pattern in self.patterns {
            if let Some(trigger) = pattern.triggers.iter().find(|t| lowered.contains(*t)) {
                debug!(intent = %pattern.intent, trigger, "intent matched");
                return pattern.intent;
            }
        }

        if self.is_agriculture_query(&lowered) {
            debug!("farming keyword matched");
            return Intent::Agriculture;
        }
        Intent::Fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(query: &str) -> Intent {
        KeywordClassifier::new().classify(query)
    }

    #[test]
    fn test_greeting() {
        assert_eq!(classify("hello there"), Intent::Greeting);
        assert_eq!(classify("Vanakkam"), Intent::Greeting);
    }

    #[test]
    fn test_agriculture() {
        assert_eq!(classify("what is npk fertilizer"), Intent::Agriculture);
        assert_eq!(classify("best paddy variety"), Intent::Agriculture);
    }

    #[test]
    fn test_conversational_intents() {
        assert_eq!(classify("how are you"), Intent::HowAreYou);
        assert_eq!(classify("who are you"), Intent::WhoAreYou);
        assert_eq!(classify("what can you do"), Intent::Capabilities);
        assert_eq!(classify("help"), Intent::Capabilities);
        // "help" outranks the farming words that follow it
        assert_eq!(classify("help with rice disease"), Intent::Capabilities);
        assert_eq!(classify("thanks a lot"), Intent::ThankYou);
        assert_eq!(classify("nandri"), Intent::ThankYou);
        assert_eq!(classify("ok bye"), Intent::Goodbye);
    }

    #[test]
    fn test_order_decides_overlaps() {
        // "hi" inside "which" fires the greeting before anything else.
        assert_eq!(classify("which crop to sow"), Intent::Greeting);
        // "po" inside "potato" fires goodbye before the farming keywords.
        assert_eq!(classify("potato storage"), Intent::Goodbye);
    }

    #[test]
    fn test_keyword_list_fallthrough() {
        assert_eq!(classify("urea dose"), Intent::Agriculture);
        assert_eq!(classify("monsoon forecast"), Intent::Agriculture);
        assert_eq!(classify("drought plan"), Intent::Agriculture);
        assert_eq!(classify("increase profit"), Intent::Agriculture);
    }

    #[test]
    fn test_fallback() {
        assert_eq!(classify(""), Intent::Fallback);
        assert_eq!(classify("   "), Intent::Fallback);
        assert_eq!(classify("xyz"), Intent::Fallback);
    }

    #[test]
    fn test_custom_patterns() {
        static ONLY_THANKS: &[IntentPattern] = &[IntentPattern {
            intent: Intent::ThankYou,
            triggers: &["cheers"],
        }];
        let classifier = KeywordClassifier::new()
            .with_patterns(ONLY_THANKS)
            .with_agriculture_keywords(&[]);
        assert_eq!(classifier.classify("cheers mate"), Intent::ThankYou);
        assert_eq!(classifier.classify("hello"), Intent::Fallback);
    }
}
