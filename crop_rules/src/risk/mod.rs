//! Risk scoring: tiers, disease pressure, and the ordered rule set.

mod rules;
mod scorer;

pub use rules::*;
pub use scorer::*;

use serde::{Deserialize, Serialize};

/// Discrete crop-risk tiers, ordered from best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskTier {
    Optimal,
    Moderate,
    High,
    Critical,
}

impl RiskTier {
    /// Map a cumulative score to a tier, checking from the top down.
    pub fn from_score(score: u32) -> Self {
        if score >= 70 {
            RiskTier::Critical
        } else if score >= 45 {
            RiskTier::High
        } else if score >= 25 {
            RiskTier::Moderate
        } else {
            RiskTier::Optimal
        }
    }

    /// Upper-case label used in reports, e.g. `CRITICAL`.
    pub fn label(&self) -> &'static str {
        match self {
            RiskTier::Optimal => "OPTIMAL",
            RiskTier::Moderate => "MODERATE",
            RiskTier::High => "HIGH",
            RiskTier::Critical => "CRITICAL",
        }
    }

    /// Expected yield loss for this tier.
    pub fn estimated_loss(&self) -> LossRange {
        match self {
            RiskTier::Optimal => LossRange::new(0, 10),
            RiskTier::Moderate => LossRange::new(15, 30),
            RiskTier::High => LossRange::new(40, 60),
            RiskTier::Critical => LossRange::new(70, 90),
        }
    }

    /// Fixed action plan for this tier.
    pub fn action_plan(&self) -> &'static str {
        match self {
            RiskTier::Critical => {
                "IMMEDIATE ACTION REQUIRED: Apply emergency irrigation, fungicides, and monitor field constantly. Consider late sowing if season permits."
            }
            RiskTier::High => {
                "Take precautionary measures: Adjust irrigation schedule, apply pest control, add missing nutrients. Field needs attention within 48 hours."
            }
            RiskTier::Moderate => {
                "Field conditions are okay but could improve. Follow recommended practices and monitor weather changes."
            }
            RiskTier::Optimal => {
                "Excellent conditions! Continue current management practices. Field health is optimal - expect good yield."
            }
        }
    }
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Yield loss range in whole percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LossRange {
    pub min_pct: u8,
    pub max_pct: u8,
}

impl LossRange {
    pub const fn new(min_pct: u8, max_pct: u8) -> Self {
        Self { min_pct, max_pct }
    }
}

impl std::fmt::Display for LossRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}%", self.min_pct, self.max_pct)
    }
}

/// Fungal/pest pressure implied by humidity and temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub enum DiseaseRisk {
    #[default]
    Low,
    Moderate,
    High,
}

impl DiseaseRisk {
    pub fn description(&self) -> &'static str {
        match self {
            DiseaseRisk::Low => "Low Risk",
            DiseaseRisk::Moderate => "Moderate Risk - Monitor for pests",
            DiseaseRisk::High => "High Risk - Fungal diseases likely",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(RiskTier::from_score(0), RiskTier::Optimal);
        assert_eq!(RiskTier::from_score(24), RiskTier::Optimal);
        assert_eq!(RiskTier::from_score(25), RiskTier::Moderate);
        assert_eq!(RiskTier::from_score(44), RiskTier::Moderate);
        assert_eq!(RiskTier::from_score(45), RiskTier::High);
        assert_eq!(RiskTier::from_score(69), RiskTier::High);
        assert_eq!(RiskTier::from_score(70), RiskTier::Critical);
        assert_eq!(RiskTier::from_score(140), RiskTier::Critical);
    }

    #[test]
    fn test_tier_ordering() {
        assert!(RiskTier::Optimal < RiskTier::Moderate);
        assert!(RiskTier::Moderate < RiskTier::High);
        assert!(RiskTier::High < RiskTier::Critical);
    }

    #[test]
    fn test_loss_range_display() {
        assert_eq!(RiskTier::Critical.estimated_loss().to_string(), "70-90%");
        assert_eq!(RiskTier::Optimal.estimated_loss().to_string(), "0-10%");
    }

    #[test]
    fn test_tier_serializes_uppercase() {
        let json = serde_json::to_string(&RiskTier::Critical).unwrap();
        assert_eq!(json, "\"CRITICAL\"");
    }
}
