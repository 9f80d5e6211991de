//! The ordered scoring rules.
//!
//! Each rule looks at the readings, the crop thresholds, and the score
//! accumulated so far, and may contribute points, a reason, a
//! recommendation, or a disease-pressure level. Rules never short-circuit
//! each other; the scorer runs all of them in table order.

use serde::Serialize;

use super::DiseaseRisk;
use crate::catalog::CropThreshold;
use crate::readings::FieldReadings;

/// Inputs visible to a rule.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub readings: &'a FieldReadings,
    pub threshold: &'a CropThreshold,
    /// Score accumulated by the rules that ran before this one.
    pub score: u32,
}

/// What a rule contributes when it fires.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RuleOutcome {
    pub points: u32,
    pub reason: Option<String>,
    pub recommendation: Option<String>,
    pub disease_risk: Option<DiseaseRisk>,
}

impl RuleOutcome {
    pub fn points(points: u32) -> Self {
        Self {
            points,
            ..Default::default()
        }
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    pub fn with_recommendation(mut self, recommendation: impl Into<String>) -> Self {
        self.recommendation = Some(recommendation.into());
        self
    }

    pub fn with_disease_risk(mut self, risk: DiseaseRisk) -> Self {
        self.disease_risk = Some(risk);
        self
    }
}

/// A named predicate-to-outcome rule.
#[derive(Clone, Copy)]
pub struct ScoringRule {
    pub name: &'static str,
    pub apply: fn(&RuleContext<'_>) -> Option<RuleOutcome>,
}

impl std::fmt::Debug for ScoringRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScoringRule").field("name", &self.name).finish()
    }
}

/// The rule set, in evaluation order. Order matters: the combined-stress
/// rule reads the running score left by everything before it.
pub static SCORING_RULES: &[ScoringRule] = &[
    ScoringRule {
        name: "rainfall_deficit",
        apply: rainfall_deficit,
    },
    ScoringRule {
        name: "temperature_stress",
        apply: temperature_stress,
    },
    ScoringRule {
        name: "soil_ph_imbalance",
        apply: soil_ph_imbalance,
    },
    ScoringRule {
        name: "humidity_deficit",
        apply: humidity_deficit,
    },
    ScoringRule {
        name: "disease_pressure",
        apply: disease_pressure,
    },
    ScoringRule {
        name: "combined_stress",
        apply: combined_stress,
    },
];

fn rainfall_deficit(ctx: &RuleContext<'_>) -> Option<RuleOutcome> {
    let rainfall = ctx.readings.rainfall_mm;
    if rainfall >= ctx.threshold.min_rainfall_mm {
        return None;
    }
    Some(
        RuleOutcome::points(30)
            .with_reason(format!(
                "Low rainfall ({}mm) - {} needs minimum {}mm",
                rainfall, ctx.threshold.crop_name, ctx.threshold.min_rainfall_mm
            ))
            .with_recommendation("Arrange supplemental irrigation - crop needs more water"),
    )
}

fn temperature_stress(ctx: &RuleContext<'_>) -> Option<RuleOutcome> {
    let temperature = ctx.readings.temperature_c;
    let max = ctx.threshold.max_temperature_c;

    if temperature > max {
        Some(
            RuleOutcome::points(25)
                .with_reason(format!(
                    "High temperature ({}C) - optimal is below {}C",
                    temperature, max
                ))
                .with_recommendation("Provide shade or mulching to reduce heat stress"),
        )
    } else if temperature < max - 10.0 {
        Some(
            RuleOutcome::points(10)
                .with_reason("Temperature is lower than ideal - may slow growth"),
        )
    } else {
        None
    }
}

fn soil_ph_imbalance(ctx: &RuleContext<'_>) -> Option<RuleOutcome> {
    let ph = ctx.readings.soil_ph;
    let ideal = ctx.threshold.ideal_ph;
    let diff = (ph - ideal).abs();

    if diff > 2.0 {
        Some(
            RuleOutcome::points(25)
                .with_reason(format!("Soil pH ({}) is far from ideal ({})", ph, ideal))
                .with_recommendation("Apply lime for acidic soil or gypsum for alkaline soil"),
        )
    } else if diff > 1.0 {
        Some(
            RuleOutcome::points(10)
                .with_reason("Soil pH slightly off ideal - minor adjustment needed"),
        )
    } else {
        None
    }
}

fn humidity_deficit(ctx: &RuleContext<'_>) -> Option<RuleOutcome> {
    let humidity = ctx.readings.humidity_pct;
    if humidity >= ctx.threshold.min_humidity_pct {
        return None;
    }
    Some(
        RuleOutcome::points(15)
            .with_reason(format!(
                "Low humidity ({}%) - {} prefers {}%+",
                humidity, ctx.threshold.crop_name, ctx.threshold.min_humidity_pct
            ))
            .with_recommendation("Use drip irrigation to maintain moisture"),
    )
}

fn disease_pressure(ctx: &RuleContext<'_>) -> Option<RuleOutcome> {
    let humidity = ctx.readings.humidity_pct;
    let temperature = ctx.readings.temperature_c;

    if humidity > 85.0 && temperature > 20.0 {
        Some(
            RuleOutcome::points(20)
                .with_disease_risk(DiseaseRisk::High)
                .with_recommendation(
                    "Apply preventive fungicide - conditions favorable for fungal growth",
                ),
        )
    } else if humidity > 70.0 && temperature > 25.0 {
        Some(
            RuleOutcome::points(10)
                .with_disease_risk(DiseaseRisk::Moderate)
                .with_recommendation("Regular monitoring for pest infestation"),
        )
    } else {
        None
    }
}

fn combined_stress(ctx: &RuleContext<'_>) -> Option<RuleOutcome> {
    if ctx.score > 50 && ctx.readings.humidity_pct > 80.0 {
        Some(
            RuleOutcome::points(10)
                .with_reason("Combined stress: Heat + High humidity increases disease risk"),
        )
    } else {
        None
    }
}
