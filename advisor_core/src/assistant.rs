//! The assistant facade: chat replies, image analysis and risk assessment.

use crop_rules::{FieldReadings, RiskAssessment, RiskScorer};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::cache::{CacheKey, ResponseCache};
use crate::config::AdvisorConfig;
use crate::diagnosis::{DiagnosisReport, Diagnostics};
use crate::error::Result;
use crate::intent::{
    identify_audience, scheme_overview, Audience, Intent, IntentClassifier, KeywordClassifier,
    TopicResolver,
};
use crate::knowledge_base::{Category, KnowledgeKey, KnowledgeTable, Language};
use crate::responder::{Lookup, Responder};

/// A chat question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub query: String,
    /// Reply language; the assistant default when absent.
    pub language: Option<Language>,
    /// Crop the user is asking about, used when the query names none.
    pub crop_hint: Option<String>,
}

impl ChatRequest {
    /// Question in the assistant's default language, without a crop hint.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            language: None,
            crop_hint: None,
        }
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    pub fn with_crop_hint(mut self, crop: impl Into<String>) -> Self {
        self.crop_hint = Some(crop.into());
        self
    }
}

/// The assistant's answer and how it was reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub intent: Intent,
    pub audience: Audience,
    pub keywords: Vec<String>,
    /// Knowledge entry the text came from.
    pub key: Option<KnowledgeKey>,
    pub text: String,
    /// True when served from the response cache.
    pub cached: bool,
}

/// Rule-based farming assistant.
pub struct Assistant {
    classifier: Box<dyn IntentClassifier>,
    topics: TopicResolver,
    responder: Responder,
    cache: ResponseCache<ChatReply>,
    diagnostics: Diagnostics,
    scorer: RiskScorer,
    language: Language,
}

impl std::fmt::Debug for Assistant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Assistant")
            .field("language", &self.language)
            .field("entries", &self.responder.table().len())
            .field("cache_capacity", &self.cache.capacity())
            .field("diagnostics", &self.diagnostics)
            .finish()
    }
}

impl Assistant {
    /// Assistant over a knowledge table with default components.
    pub fn new(table: Arc<KnowledgeTable>) -> Self {
        Self::with_responder(Responder::new(table), &AdvisorConfig::default())
    }

    fn with_responder(responder: Responder, config: &AdvisorConfig) -> Self {
        Self {
            classifier: Box::new(KeywordClassifier::new()),
            topics: TopicResolver::new(),
            responder,
            cache: ResponseCache::new(config.cache_capacity),
            diagnostics: Diagnostics::from_config(&config.diagnostics, config.seed),
            scorer: RiskScorer::default(),
            language: config.language(),
        }
    }

    /// Assistant over the built-in knowledge table.
    pub fn builtin() -> Result<Self> {
        Ok(Self::new(Arc::new(KnowledgeTable::builtin()?)))
    }

    /// Assistant configured from settings.
    pub fn from_config(config: &AdvisorConfig) -> Result<Self> {
        let table = Arc::new(KnowledgeTable::builtin()?);
        let responder = match config.seed {
            Some(seed) => Responder::seeded(table, seed),
            None => Responder::new(table),
        };
        info!(
            language = %config.language(),
            cache_capacity = config.cache_capacity,
            mode = ?config.diagnostics.mode,
            "assistant configured"
        );

        Ok(Self::with_responder(responder, config))
    }

    /// Replace the intent classifier.
    pub fn with_classifier(mut self, classifier: Box<dyn IntentClassifier>) -> Self {
        self.classifier = classifier;
        self
    }

    /// Default reply language for requests that name none.
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Replace the response cache; zero disables caching.
    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache = ResponseCache::new(capacity);
        self
    }

    /// Reseed reply variation.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.responder.reseed(seed);
        self
    }

    pub fn with_diagnostics(mut self, diagnostics: Diagnostics) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    pub fn with_scorer(mut self, scorer: RiskScorer) -> Self {
        self.scorer = scorer;
        self
    }

    /// Default reply language.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Answer a chat question.
    pub fn reply(&mut self, request: ChatRequest) -> ChatReply {
        let language = request.language.unwrap_or(self.language);
        let audience = identify_audience(&request.query);

        // Hinted requests can resolve differently, so only unhinted ones are cached.
        let cache_key = (self.cache.is_enabled()
            && request.crop_hint.is_none()
            && !request.query.trim().is_empty())
            .then(|| CacheKey::new(&request.query, audience, language));

        if let Some(key) = &cache_key {
            if let Some(mut hit) = self.cache.get(key) {
                debug!(query = %request.query, "reply served from cache");
                hit.cached = true;
                return hit;
            }
        }

        let processed = self.classifier.process(&request.query);
        let key = self.route(
            processed.intent,
            &request.query,
            request.crop_hint.as_deref(),
            audience,
            language,
        );

        let (key, text, varied) = match self.responder.respond(&key) {
            Lookup::Found { key, text, varied } => (Some(key), text, varied),
            Lookup::NotFound { key } if key.is_fallback() => {
                warn!(%key, "no fallback entry in the knowledge table");
                (None, String::new(), false)
            }
            Lookup::NotFound { key } => {
                warn!(%key, "no entry for resolved topic, using fallback reply");
                let fallback = self.responder.respond(&KnowledgeKey::fallback(language));
                let used = match &fallback {
                    Lookup::Found { key, .. } => Some(key.clone()),
                    Lookup::NotFound { .. } => None,
                };
                (used, fallback.text_or_empty().to_string(), false)
            }
        };

        let reply = ChatReply {
            intent: processed.intent,
            audience,
            keywords: processed.keywords,
            key,
            text,
            cached: false,
        };

        if let (Some(cache_key), false) = (cache_key, varied) {
            self.cache.put(cache_key, reply.clone());
            debug!(entries = self.cache.len(), "reply cached");
        }
        reply
    }

    fn route(
        &self,
        intent: Intent,
        query: &str,
        crop_hint: Option<&str>,
        audience: Audience,
        language: Language,
    ) -> KnowledgeKey {
        if let Some(subcategory) = intent.greeting_subcategory() {
            return KnowledgeKey::new(Category::Greeting, subcategory, language);
        }
        match intent {
            Intent::Agriculture => self
                .topics
                .resolve(query, crop_hint, audience, language)
                .unwrap_or_else(|| unmatched(audience, language)),
            _ => unmatched(audience, language),
        }
    }

    /// Analyze an uploaded leaf image.
    pub fn analyze_image(&mut self, file_id: &str) -> DiagnosisReport {
        self.diagnostics.analyze(file_id)
    }

    /// Score field readings for a crop.
    pub fn assess(&self, readings: &FieldReadings, crop_name: &str) -> RiskAssessment {
        self.scorer.evaluate(readings, crop_name)
    }
}

/// Entry for a query no topic claimed. Government users get the scheme
/// dashboard; everyone else gets the generic fallback.
fn unmatched(audience: Audience, language: Language) -> KnowledgeKey {
    match audience {
        Audience::Government => {
            KnowledgeKey::new(Category::Scheme, scheme_overview(audience), language)
        }
        _ => KnowledgeKey::fallback(language),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge_base::KnowledgeEntry;
    use crop_rules::RiskTier;

    fn assistant() -> Assistant {
        Assistant::builtin().unwrap().with_seed(17)
    }

    #[test]
    fn test_greeting_reply() {
        let mut assistant = assistant();
        let reply = assistant.reply(ChatRequest::new("hello there"));
        assert_eq!(reply.intent, Intent::Greeting);
        assert_eq!(
            reply.key,
            Some(KnowledgeKey::new(Category::Greeting, "greetings", Language::En))
        );
        assert!(!reply.text.is_empty());
    }

    #[test]
    fn test_fertilizer_reply() {
        let mut assistant = assistant();
        let reply = assistant.reply(ChatRequest::new("what is npk fertilizer"));
        assert_eq!(reply.intent, Intent::Agriculture);
        assert_eq!(
            reply.key,
            Some(KnowledgeKey::new(Category::Fertilizer, "npk", Language::En))
        );
        assert!(reply.text.starts_with("NPK Guide"));
        assert_eq!(reply.audience, Audience::Farmer);
    }

    #[test]
    fn test_language_selection() {
        let mut assistant = assistant().with_language(Language::Hi);
        let hindi = assistant.reply(ChatRequest::new("urea dose"));
        assert_eq!(hindi.key.as_ref().map(|k| k.language), Some(Language::Hi));

        let tamil = assistant.reply(ChatRequest::new("urea dose").with_language(Language::Ta));
        assert_eq!(tamil.key.as_ref().map(|k| k.language), Some(Language::Ta));
    }

    #[test]
    fn test_scheme_falls_back_to_english() {
        let mut assistant = assistant();
        let reply = assistant.reply(ChatRequest::new("kcc scheme details").with_language(Language::Te));
        assert_eq!(
            reply.key,
            Some(KnowledgeKey::new(Category::Scheme, "kcc", Language::En))
        );
    }

    #[test]
    fn test_empty_query_gets_fallback() {
        let mut assistant = assistant();
        let reply = assistant.reply(ChatRequest::new(""));
        assert_eq!(reply.intent, Intent::Fallback);
        assert_eq!(reply.key, Some(KnowledgeKey::fallback(Language::En)));
        assert!(!reply.cached);
    }

    #[test]
    fn test_crop_hint() {
        let mut assistant = assistant();
        let reply = assistant.reply(ChatRequest::new("best farming practice").with_crop_hint("Banana"));
        assert_eq!(
            reply.key,
            Some(KnowledgeKey::new(Category::Crop, "banana", Language::En))
        );
    }

    #[test]
    fn test_deterministic_replies_are_cached() {
        let mut assistant = assistant();
        let first = assistant.reply(ChatRequest::new("drip irrigation"));
        let second = assistant.reply(ChatRequest::new(" Drip IRRIGATION "));
        assert!(!first.cached);
        assert!(second.cached);
        assert_eq!(first.text, second.text);
    }

    #[test]
    fn test_cache_keeps_inner_whitespace() {
        let mut assistant = assistant();
        let first = assistant.reply(ChatRequest::new("who are you"));
        assert_eq!(first.intent, Intent::WhoAreYou);

        // "who  are you" matches no trigger, so it must not reuse the reply above.
        let second = assistant.reply(ChatRequest::new("who  are you"));
        assert!(!second.cached);
        assert_eq!(second.intent, Intent::Fallback);
        assert_eq!(second.key, Some(KnowledgeKey::fallback(Language::En)));
    }

    #[test]
    fn test_help_lists_capabilities() {
        let mut assistant = assistant();
        for query in ["help", "help with rice disease"] {
            let reply = assistant.reply(ChatRequest::new(query));
            assert_eq!(reply.intent, Intent::Capabilities);
            assert_eq!(
                reply.key,
                Some(KnowledgeKey::new(Category::Greeting, "what_can_you_do", Language::En))
            );
        }
    }

    #[test]
    fn test_scheme_overview_per_audience() {
        let mut assistant = assistant();
        let farmer = assistant.reply(ChatRequest::new("any subsidy for my farm"));
        assert_eq!(farmer.audience, Audience::Farmer);
        assert_eq!(
            farmer.key,
            Some(KnowledgeKey::new(Category::Scheme, "overview", Language::En))
        );

        let ngo = assistant.reply(ChatRequest::new("scheme funding for community project"));
        assert_eq!(ngo.audience, Audience::Ngo);
        assert_eq!(
            ngo.key,
            Some(KnowledgeKey::new(Category::Scheme, "overview_ngo", Language::En))
        );

        let government = assistant.reply(ChatRequest::new("subsidy statistics"));
        assert_eq!(government.audience, Audience::Government);
        assert_eq!(
            government.key,
            Some(KnowledgeKey::new(Category::Scheme, "overview_government", Language::En))
        );
        assert!(government.text.starts_with("Agricultural schemes dashboard"));
    }

    #[test]
    fn test_government_fallback_is_scheme_dashboard() {
        let mut assistant = assistant();
        let reply = assistant.reply(ChatRequest::new("regulation compliance statistics"));
        assert_eq!(reply.intent, Intent::Fallback);
        assert_eq!(reply.audience, Audience::Government);
        assert_eq!(
            reply.key,
            Some(KnowledgeKey::new(Category::Scheme, "overview_government", Language::En))
        );

        let general = assistant.reply(ChatRequest::new("xyz"));
        assert_eq!(general.key, Some(KnowledgeKey::fallback(Language::En)));
    }

    #[test]
    fn test_general_topic_replies() {
        let mut assistant = assistant();
        let cases = [
            ("soil ph advice", Category::Soil, "health"),
            ("monsoon forecast", Category::Climate, "weather"),
            ("drought plan", Category::Irrigation, "water"),
            ("increase profit", Category::Yield, "optimization"),
            ("seed germination", Category::Planting, "guide"),
            ("fungal infection", Category::Disease, "general"),
        ];
        for (query, category, subcategory) in cases {
            let reply = assistant.reply(ChatRequest::new(query));
            assert_eq!(reply.intent, Intent::Agriculture, "{query}");
            assert_eq!(
                reply.key,
                Some(KnowledgeKey::new(category, subcategory, Language::En)),
                "{query}"
            );
        }
    }

    #[test]
    fn test_disease_guide_for_hinted_crop() {
        let mut assistant = assistant();
        let reply = assistant.reply(ChatRequest::new("pest attack").with_crop_hint("Rice"));
        assert_eq!(
            reply.key,
            Some(KnowledgeKey::new(Category::Disease, "rice", Language::En))
        );
        assert!(reply.text.starts_with("Rice disease guide"));
    }

    #[test]
    fn test_varied_replies_are_not_cached() {
        let mut assistant = assistant();
        assistant.reply(ChatRequest::new("hello"));
        let again = assistant.reply(ChatRequest::new("hello"));
        assert!(!again.cached);
    }

    #[test]
    fn test_disabled_cache() {
        let mut assistant = assistant().with_cache_capacity(0);
        assistant.reply(ChatRequest::new("drip irrigation"));
        let again = assistant.reply(ChatRequest::new("drip irrigation"));
        assert!(!again.cached);
    }

    #[test]
    fn test_missing_topic_renders_fallback() {
        let table = KnowledgeTable::new().with_entry(
            KnowledgeKey::fallback(Language::En),
            KnowledgeEntry::text("Ask me about farming."),
        );
        let mut assistant = Assistant::new(Arc::new(table));
        let reply = assistant.reply(ChatRequest::new("wheat sowing"));

        assert_eq!(reply.intent, Intent::Agriculture);
        assert_eq!(reply.key, Some(KnowledgeKey::fallback(Language::En)));
        assert_eq!(reply.text, "Ask me about farming.");
    }

    #[test]
    fn test_empty_table_gives_empty_text() {
        let mut assistant = Assistant::new(Arc::new(KnowledgeTable::new()));
        let reply = assistant.reply(ChatRequest::new("wheat"));
        assert_eq!(reply.key, None);
        assert_eq!(reply.text, "");
    }

    #[test]
    fn test_from_config() {
        let config = AdvisorConfig::from_toml_str(
            "default_language = \"ta\"\nseed = 3\n[diagnostics]\nmode = \"model\"",
        )
        .unwrap();
        let mut assistant = Assistant::from_config(&config).unwrap();
        assert_eq!(assistant.language(), Language::Ta);

        let reply = assistant.reply(ChatRequest::new("rice"));
        assert_eq!(
            reply.key,
            Some(KnowledgeKey::new(Category::Crop, "rice", Language::Ta))
        );

        let report = assistant.analyze_image("leaf.jpg");
        assert!(report.fell_back);
    }

    #[test]
    fn test_assess_passes_through() {
        let assistant = assistant();
        let assessment = assistant.assess(&FieldReadings::new(30.0, 38.0, 90.0, 9.5), "Rice");
        assert_eq!(assessment.risk_tier, RiskTier::Critical);
    }
}
