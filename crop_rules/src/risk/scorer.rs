//! The risk scorer and its output record.

use serde::Serialize;
use tracing::debug;

use super::{DiseaseRisk, LossRange, RiskTier, RuleContext, ScoringRule, SCORING_RULES};
use crate::catalog::{CropCatalog, CropCategory, CropResolution, OptimalParameters};
use crate::readings::FieldReadings;

/// Full result of a risk evaluation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskAssessment {
    /// Crop whose thresholds were applied.
    pub crop: String,
    pub crop_resolution: CropResolution,
    pub score: u32,
    pub risk_tier: RiskTier,
    pub estimated_loss: LossRange,
    pub disease_risk: DiseaseRisk,
    pub action_plan: String,
    pub reasons: Vec<String>,
    pub recommendations: Vec<String>,
    pub analysis_notes: String,
    pub crop_category: CropCategory,
    pub optimal_parameters: OptimalParameters,
}

impl RiskAssessment {
    /// True when the requested crop was unknown and defaults were used.
    pub fn defaulted_unknown_crop(&self) -> bool {
        self.crop_resolution.is_defaulted()
    }

    /// Pretty-printed JSON report.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Scores field readings against the crop catalog.
#[derive(Debug, Clone)]
pub struct RiskScorer {
    catalog: CropCatalog,
    rules: &'static [ScoringRule],
}

impl Default for RiskScorer {
    fn default() -> Self {
        Self::new(CropCatalog::builtin())
    }
}

impl RiskScorer {
    pub fn new(catalog: CropCatalog) -> Self {
        Self {
            catalog,
            rules: SCORING_RULES,
        }
    }

    pub fn catalog(&self) -> &CropCatalog {
        &self.catalog
    }

    /// Evaluate readings for a crop.
    ///
    /// Every rule runs; all reasons and recommendations that fire are kept in
    /// rule order. Unknown crops are scored against the default crop and
    /// flagged in [`RiskAssessment::crop_resolution`].
    pub fn evaluate(&self, readings: &FieldReadings, crop_name: &str) -> RiskAssessment {
        let (threshold, crop_resolution) = self.catalog.resolve(crop_name);

        let mut score = 0u32;
        let mut disease_risk = DiseaseRisk::Low;
        let mut reasons = Vec::new();
        let mut recommendations = Vec::new();

        for rule in self.rules {
            let ctx = RuleContext {
                readings,
                threshold,
                score,
            };
            let Some(outcome) = (rule.apply)(&ctx) else {
                continue;
            };

            debug!(rule = rule.name, points = outcome.points, "rule fired");
            score += outcome.points;
            if let Some(reason) = outcome.reason {
                reasons.push(reason);
            }
            if let Some(recommendation) = outcome.recommendation {
                recommendations.push(recommendation);
            }
            if let Some(risk) = outcome.disease_risk {
                disease_risk = risk;
            }
        }

        let risk_tier = RiskTier::from_score(score);
        let analysis_notes = compose_notes(&reasons, threshold.category);

        debug!(
            crop = threshold.crop_name,
            score,
            tier = %risk_tier,
            "risk evaluated"
        );

        RiskAssessment {
            crop: threshold.crop_name.to_string(),
            crop_resolution,
            score,
            risk_tier,
            estimated_loss: risk_tier.estimated_loss(),
            disease_risk,
            action_plan: risk_tier.action_plan().to_string(),
            reasons,
            recommendations,
            analysis_notes,
            crop_category: threshold.category,
            optimal_parameters: threshold.optimal_parameters(),
        }
    }
}

fn compose_notes(reasons: &[String], category: CropCategory) -> String {
    let findings = if reasons.is_empty() {
        "All parameters within optimal range".to_string()
    } else {
        reasons.join(". ")
    };

    let mut notes = format!("{}. Crop Category: {}.", findings, category);
    if let Some(advice) = category.advice() {
        notes.push(' ');
        notes.push_str(advice);
    }
    notes
}
