//! Crop catalog: per-crop threshold records and lookup.

mod crops;

pub use crops::*;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::RulesError;
use crate::readings::FieldReadings;

/// Crop used when a requested crop is not in the catalog.
pub const DEFAULT_CROP: &str = "Rice";

/// Upper bound of the optimal rainfall band, in millimetres.
pub const OPTIMAL_RAINFALL_CEILING_MM: f64 = 500.0;

/// Upper bound of the optimal humidity band, in percent.
pub const OPTIMAL_HUMIDITY_CEILING_PCT: f64 = 90.0;

/// Width of the optimal temperature band below the crop maximum.
pub const OPTIMAL_TEMPERATURE_SPAN_C: f64 = 15.0;

/// Broad crop groups, each carrying a piece of management advice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CropCategory {
    Cereal,
    Pulse,
    /// Sugarcane and cotton. Has no dedicated advice line.
    CashCrop,
    Oilseed,
    Vegetable,
    Spice,
    Fruit,
    Commercial,
    Fodder,
}

impl CropCategory {
    /// Display label used in analysis notes.
    pub fn label(&self) -> &'static str {
        match self {
            CropCategory::Cereal => "Cereal",
            CropCategory::Pulse => "Pulse",
            CropCategory::CashCrop => "Cash Crop",
            CropCategory::Oilseed => "Oilseed",
            CropCategory::Vegetable => "Vegetable",
            CropCategory::Spice => "Spice",
            CropCategory::Fruit => "Fruit",
            CropCategory::Commercial => "Commercial",
            CropCategory::Fodder => "Fodder",
        }
    }

    /// Category-specific management advice, if any.
    pub fn advice(&self) -> Option<&'static str> {
        match self {
            CropCategory::Cereal => Some("Focus on nitrogen management and timely irrigation."),
            CropCategory::Pulse => {
                Some("Inoculate seeds with rhizobium culture for nitrogen fixation.")
            }
            CropCategory::Oilseed => Some("Ensure proper drainage to prevent waterlogging."),
            CropCategory::Vegetable => Some("Regular harvesting and pest monitoring essential."),
            CropCategory::Fruit => Some("Pruning and training needed for better yield."),
            CropCategory::Spice => Some("Shade management important for quality produce."),
            CropCategory::Commercial => {
                Some("Follow integrated pest management (IPM) practices.")
            }
            CropCategory::Fodder => Some("Cut at right stage for maximum nutrition."),
            CropCategory::CashCrop => None,
        }
    }
}

impl std::fmt::Display for CropCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for CropCategory {
    type Err = RulesError;

    /// Accepts the display label in any case, with or without the space.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_')
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "cereal" => Ok(CropCategory::Cereal),
            "pulse" => Ok(CropCategory::Pulse),
            "cashcrop" => Ok(CropCategory::CashCrop),
            "oilseed" => Ok(CropCategory::Oilseed),
            "vegetable" => Ok(CropCategory::Vegetable),
            "spice" => Ok(CropCategory::Spice),
            "fruit" => Ok(CropCategory::Fruit),
            "commercial" => Ok(CropCategory::Commercial),
            "fodder" => Ok(CropCategory::Fodder),
            _ => Err(RulesError::UnknownCropCategory(s.to_string())),
        }
    }
}

/// Environmental limits a crop tolerates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CropThreshold {
    pub crop_name: &'static str,
    pub min_rainfall_mm: f64,
    pub max_temperature_c: f64,
    pub ideal_ph: f64,
    pub min_humidity_pct: f64,
    pub category: CropCategory,
}

impl CropThreshold {
    /// The band of conditions reported as optimal for this crop.
    pub fn optimal_parameters(&self) -> OptimalParameters {
        OptimalParameters {
            rainfall_mm: Band::new(self.min_rainfall_mm, OPTIMAL_RAINFALL_CEILING_MM),
            temperature_c: Band::new(
                self.max_temperature_c - OPTIMAL_TEMPERATURE_SPAN_C,
                self.max_temperature_c,
            ),
            humidity_pct: Band::new(self.min_humidity_pct, OPTIMAL_HUMIDITY_CEILING_PCT),
            soil_ph: self.ideal_ph,
        }
    }
}

/// Closed numeric interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub low: f64,
    pub high: f64,
}

impl Band {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Centre of the band.
    pub fn midpoint(&self) -> f64 {
        (self.low + self.high) / 2.0
    }

    /// Inclusive range check.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.low && value <= self.high
    }
}

impl std::fmt::Display for Band {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.low, self.high)
    }
}

/// Optimal growing bands for a crop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptimalParameters {
    pub rainfall_mm: Band,
    pub temperature_c: Band,
    pub humidity_pct: Band,
    pub soil_ph: f64,
}

impl OptimalParameters {
    /// Readings sitting in the middle of every band.
    pub fn midpoint(&self) -> FieldReadings {
        FieldReadings {
            rainfall_mm: self.rainfall_mm.midpoint(),
            temperature_c: self.temperature_c.midpoint(),
            humidity_pct: self.humidity_pct.midpoint(),
            soil_ph: self.soil_ph,
        }
    }
}

/// How a requested crop name was resolved against the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CropResolution {
    /// The crop is in the catalog.
    Known,
    /// The crop was not found and the default crop's thresholds were used.
    DefaultedUnknownCrop { requested: String },
}

impl CropResolution {
    pub fn is_defaulted(&self) -> bool {
        matches!(self, CropResolution::DefaultedUnknownCrop { .. })
    }
}

/// Read-only catalog of crop thresholds.
#[derive(Debug, Clone, Copy)]
pub struct CropCatalog {
    entries: &'static [CropThreshold],
}

impl Default for CropCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl CropCatalog {
    /// The built-in catalog of Indian crops.
    pub fn builtin() -> Self {
        Self {
            entries: CROP_THRESHOLDS,
        }
    }

    /// Exact, case-sensitive lookup.
    pub fn get(&self, crop_name: &str) -> Option<&'static CropThreshold> {
        self.entries.iter().find(|t| t.crop_name == crop_name)
    }

    /// Look up a crop, substituting the default crop when it is unknown.
    pub fn resolve(&self, crop_name: &str) -> (&'static CropThreshold, CropResolution) {
        if let Some(threshold) = self.get(crop_name) {
            return (threshold, CropResolution::Known);
        }

        warn!(
            requested = crop_name,
            default = DEFAULT_CROP,
            "unknown crop, using default thresholds"
        );
        let fallback = self
            .get(DEFAULT_CROP)
            .unwrap_or(&CROP_THRESHOLDS[0]);
        (
            fallback,
            CropResolution::DefaultedUnknownCrop {
                requested: crop_name.to_string(),
            },
        )
    }

    /// Every crop, in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &'static CropThreshold> {
        self.entries.iter()
    }

    /// All crops belonging to a category, in catalog order.
    pub fn by_category(&self, category: CropCategory) -> Vec<&'static CropThreshold> {
        self.entries
            .iter()
            .filter(|t| t.category == category)
            .collect()
    }

    /// Crop names as accepted by [`CropCatalog::get`].
    pub fn crop_names(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|t| t.crop_name)
    }

    /// Number of crops in the catalog.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
