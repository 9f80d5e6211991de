//! Topic resolution - picking the knowledge entry for a farming question.

use tracing::debug;

use super::Audience;
use crate::knowledge_base::{Category, KnowledgeKey, Language};

/// A knowledge topic and the substrings that select it.
#[derive(Debug, Clone, Copy)]
pub struct TopicRule {
    pub category: Category,
    pub subcategory: &'static str,
    pub triggers: &'static [&'static str],
}

impl TopicRule {
    const fn new(
        category: Category,
        subcategory: &'static str,
        triggers: &'static [&'static str],
    ) -> Self {
        Self {
            category,
            subcategory,
            triggers,
        }
    }

    fn matches(&self, lowered: &str) -> bool {
        self.triggers.iter().any(|t| lowered.contains(t))
    }
}

/// Specific topics, checked in order. Regional names sit beside English ones.
pub static TOPIC_RULES: &[TopicRule] = &[
    TopicRule::new(Category::Crop, "rice", &["rice", "paddy", "chawal"]),
    TopicRule::new(Category::Crop, "wheat", &["wheat", "gehu", "godambu"]),
    TopicRule::new(Category::Crop, "maize", &["maize", "corn", "makka"]),
    TopicRule::new(Category::Crop, "bajra", &["bajra", "pearl"]),
    TopicRule::new(Category::Crop, "jowar", &["jowar", "sorghum"]),
    TopicRule::new(Category::Crop, "ragi", &["ragi", "finger millet"]),
    TopicRule::new(Category::Crop, "sugarcane", &["sugarcane", "ganne", "karambu"]),
    TopicRule::new(Category::Crop, "cotton", &["cotton", "kapas"]),
    TopicRule::new(Category::Crop, "groundnut", &["groundnut", "peanut", "moongphali"]),
    TopicRule::new(Category::Crop, "mustard", &["mustard", "sarso"]),
    TopicRule::new(Category::Crop, "soybean", &["soybean", "soy"]),
    TopicRule::new(Category::Crop, "tomato", &["tomato", "tamatar"]),
    TopicRule::new(Category::Crop, "potato", &["potato", "aloo"]),
    TopicRule::new(Category::Crop, "onion", &["onion", "pyaaz"]),
    TopicRule::new(Category::Crop, "mango", &["mango", "aam"]),
    TopicRule::new(Category::Crop, "banana", &["banana", "kela"]),
    TopicRule::new(Category::Disease, "blast", &["blast", "blight"]),
    TopicRule::new(Category::Disease, "rust", &["rust"]),
    TopicRule::new(Category::Disease, "red_rot", &["red rot", "red_rot"]),
    TopicRule::new(Category::Fertilizer, "npk", &["npk", "nitrogen", "fertilizer"]),
    TopicRule::new(Category::Fertilizer, "urea", &["urea"]),
    TopicRule::new(Category::Irrigation, "drip", &["drip"]),
    TopicRule::new(Category::Irrigation, "flood", &["flood", "canal"]),
    TopicRule::new(Category::Scheme, "pm_kisan", &["pm-kisan", "pm kisan", "pmkisan"]),
    TopicRule::new(Category::Scheme, "pmfby", &["pmfby", "fasal bima", "crop insurance"]),
    TopicRule::new(Category::Scheme, "kcc", &["kcc", "kisan credit"]),
    TopicRule::new(Category::Scheme, "smam", &["smam", "mechanization", "mechanisation"]),
    TopicRule::new(Category::Scheme, "overview", &["scheme", "subsidy", "yojana"]),
];

/// Words that mark a question about plant health.
pub const DISEASE_TRIGGERS: &[&str] =
    &["disease", "infection", "fungal", "bacterial", "pest", "bug"];

/// Crops with their own disease guide.
pub const CROP_DISEASE_GUIDES: &[&str] = &["rice", "wheat", "maize", "sugarcane"];

/// Broad farming topics, checked in order after specific topics and the crop hint.
pub static GENERAL_TOPIC_RULES: &[TopicRule] = &[
    TopicRule::new(Category::Irrigation, "water", &["water", "irrigation", "rain", "drought"]),
    TopicRule::new(
        Category::Climate,
        "weather",
        &["temperature", "heat", "cold", "climate", "weather", "monsoon", "forecast"],
    ),
    TopicRule::new(Category::Soil, "health", &["soil", "ph", "acid", "alkaline"]),
    TopicRule::new(
        Category::Yield,
        "optimization",
        &["yield", "production", "harvest", "profit", "income"],
    ),
    TopicRule::new(Category::Planting, "guide", &["plant", "seed", "sow", "germination"]),
];

/// General farming words answered with the capabilities reply.
pub static GENERAL_FARMING_TRIGGERS: &[&str] =
    &["farming", "farm", "agriculture", "crop", "kheti", "velanai"];

/// Scheme overview written for an audience.
pub fn scheme_overview(audience: Audience) -> &'static str {
    match audience {
        Audience::Ngo => "overview_ngo",
        Audience::Government => "overview_government",
        Audience::Farmer | Audience::General => "overview",
    }
}

/// Maps farming questions to knowledge keys.
#[derive(Debug, Clone)]
pub struct TopicResolver {
    rules: &'static [TopicRule],
    general_rules: &'static [TopicRule],
    general: &'static [&'static str],
}

impl Default for TopicResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl TopicResolver {
    pub fn new() -> Self {
        Self {
            rules: TOPIC_RULES,
            general_rules: GENERAL_TOPIC_RULES,
            general: GENERAL_FARMING_TRIGGERS,
        }
    }

    /// First specific topic named in the text.
    pub fn specific_topic(&self, text: &str) -> Option<&'static TopicRule> {
        let lowered = text.to_lowercase();
        self.rules.iter().find(|rule| rule.matches(&lowered))
    }

    /// Resolve a farming question.
    ///
    /// Resolution order:
    /// 1. a specific topic named in the query (the scheme overview follows the audience);
    /// 2. plant-health words, answered with the hint crop's disease guide or the general one;
    /// 3. the crop hint;
    /// 4. broad topics such as water, weather or soil;
    /// 5. general farming words, answered with the capabilities reply.
    ///
    /// `None` means nothing matched.
    pub fn resolve(
        &self,
        query: &str,
        crop_hint: Option<&str>,
        audience: Audience,
        language: Language,
    ) -> Option<KnowledgeKey> {
        if let Some(rule) = self.specific_topic(query) {
            let subcategory = match (rule.category, rule.subcategory) {
                (Category::Scheme, "overview") => scheme_overview(audience),
                _ => rule.subcategory,
            };
            debug!(topic = subcategory, "topic matched");
            return Some(KnowledgeKey::new(rule.category, subcategory, language));
        }

        let lowered = query.to_lowercase();
        let hinted = crop_hint.and_then(|hint| self.crop_topic(hint));

        if DISEASE_TRIGGERS.iter().any(|t| lowered.contains(t)) {
            let subcategory = hinted
                .map(|rule| rule.subcategory)
                .filter(|crop| CROP_DISEASE_GUIDES.contains(crop))
                .unwrap_or("general");
            debug!(guide = subcategory, "disease guide selected");
            return Some(KnowledgeKey::new(Category::Disease, subcategory, language));
        }

        if let Some(rule) = hinted {
            debug!(topic = rule.subcategory, "topic taken from crop hint");
            return Some(KnowledgeKey::new(rule.category, rule.subcategory, language));
        }

        if let Some(rule) = self.general_rules.iter().find(|rule| rule.matches(&lowered)) {
            debug!(topic = rule.subcategory, "general topic matched");
            return Some(KnowledgeKey::new(rule.category, rule.subcategory, language));
        }

        if self.general.iter().any(|t| lowered.contains(t)) {
            return Some(KnowledgeKey::new(
                Category::Greeting,
                "what_can_you_do",
                language,
            ));
        }
        None
    }

    fn crop_topic(&self, hint: &str) -> Option<&'static TopicRule> {
        let lowered = hint.to_lowercase();
        self.rules
            .iter()
            .filter(|rule| rule.category == Category::Crop)
            .find(|rule| rule.matches(&lowered))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(query: &str) -> Option<String> {
        resolve_as(query, Audience::General)
    }

    fn resolve_as(query: &str, audience: Audience) -> Option<String> {
        TopicResolver::new()
            .resolve(query, None, audience, Language::En)
            .map(|key| format!("{}/{}", key.category, key.subcategory))
    }

    #[test]
    fn test_crop_topics() {
        assert_eq!(resolve("paddy nursery").as_deref(), Some("crop/rice"));
        assert_eq!(resolve("gehu ki kheti").as_deref(), Some("crop/wheat"));
        assert_eq!(resolve("aloo storage").as_deref(), Some("crop/potato"));
    }

    #[test]
    fn test_non_crop_topics() {
        assert_eq!(resolve("what is npk fertilizer").as_deref(), Some("fertilizer/npk"));
        assert_eq!(resolve("urea dose").as_deref(), Some("fertilizer/urea"));
        assert_eq!(resolve("leaf blight").as_deref(), Some("disease/blast"));
        assert_eq!(resolve("red rot symptoms").as_deref(), Some("disease/red_rot"));
        assert_eq!(resolve("drip setup").as_deref(), Some("irrigation/drip"));
        assert_eq!(resolve("pm kisan status").as_deref(), Some("scheme/pm_kisan"));
        assert_eq!(resolve("any subsidy").as_deref(), Some("scheme/overview"));
    }

    #[test]
    fn test_scheme_overview_follows_audience() {
        assert_eq!(
            resolve_as("any subsidy", Audience::Farmer).as_deref(),
            Some("scheme/overview")
        );
        assert_eq!(
            resolve_as("scheme funding for community project", Audience::Ngo).as_deref(),
            Some("scheme/overview_ngo")
        );
        assert_eq!(
            resolve_as("subsidy statistics", Audience::Government).as_deref(),
            Some("scheme/overview_government")
        );
        // named schemes stay specific for every audience
        assert_eq!(
            resolve_as("kcc scheme", Audience::Government).as_deref(),
            Some("scheme/kcc")
        );
    }

    #[test]
    fn test_general_topics() {
        assert_eq!(resolve("drought plan").as_deref(), Some("irrigation/water"));
        assert_eq!(resolve("how much water").as_deref(), Some("irrigation/water"));
        assert_eq!(resolve("monsoon forecast").as_deref(), Some("climate/weather"));
        assert_eq!(resolve("heat stress").as_deref(), Some("climate/weather"));
        assert_eq!(resolve("soil ph advice").as_deref(), Some("soil/health"));
        assert_eq!(resolve("alkaline land").as_deref(), Some("soil/health"));
        assert_eq!(resolve("increase profit").as_deref(), Some("yield/optimization"));
        assert_eq!(resolve("seed germination").as_deref(), Some("planting/guide"));
        assert_eq!(resolve("fungal infection").as_deref(), Some("disease/general"));
    }

    #[test]
    fn test_general_farming() {
        assert_eq!(resolve("farming tips").as_deref(), Some("greeting/what_can_you_do"));
        assert_eq!(resolve("xyz"), None);
    }

    #[test]
    fn test_crop_hint() {
        let resolver = TopicResolver::new();
        let key = resolver
            .resolve("when to sow", Some("Cotton"), Audience::General, Language::Hi)
            .unwrap();
        assert_eq!(key, KnowledgeKey::new(Category::Crop, "cotton", Language::Hi));

        // The query's own topic beats the hint.
        let key = resolver
            .resolve("urea dose", Some("Cotton"), Audience::General, Language::En)
            .unwrap();
        assert_eq!(key.subcategory, "urea");

        // Hints only select crops; the query then falls to the general topics.
        let key = resolver
            .resolve("when to sow", Some("drip"), Audience::General, Language::En)
            .unwrap();
        assert_eq!(key, KnowledgeKey::new(Category::Planting, "guide", Language::En));
    }

    #[test]
    fn test_every_topic_has_an_entry() {
        use crate::knowledge_base::KnowledgeTable;

        let table = KnowledgeTable::builtin().unwrap();
        let english = |category, subcategory: &str| {
            table.contains(&KnowledgeKey::new(category, subcategory, Language::En))
        };
        for rule in TOPIC_RULES.iter().chain(GENERAL_TOPIC_RULES) {
            assert!(english(rule.category, rule.subcategory), "{}", rule.subcategory);
        }
        for crop in CROP_DISEASE_GUIDES.iter().chain(&["general"]) {
            assert!(english(Category::Disease, crop), "disease/{crop}");
        }
        for audience in [Audience::Farmer, Audience::Ngo, Audience::Government] {
            assert!(english(Category::Scheme, scheme_overview(audience)), "{audience}");
        }
    }

    #[test]
    fn test_disease_guide_follows_crop_hint() {
        let resolver = TopicResolver::new();
        let guide = |crop: &str| {
            resolver
                .resolve("pest problem", Some(crop), Audience::Farmer, Language::En)
                .map(|key| key.subcategory)
        };
        assert_eq!(guide("Paddy").as_deref(), Some("rice"));
        assert_eq!(guide("Wheat").as_deref(), Some("wheat"));
        assert_eq!(guide("Maize").as_deref(), Some("maize"));
        assert_eq!(guide("Sugarcane").as_deref(), Some("sugarcane"));
        // no dedicated guide for tomato
        assert_eq!(guide("Tomato").as_deref(), Some("general"));
    }
}
