//! Field readings - the environmental measurements a risk assessment runs on.

use serde::{Deserialize, Serialize};

use crate::error::{Result, RulesError};

/// Environmental readings for a field.
///
/// The scorer assumes these are already well-formed numbers. Callers that
/// parse user input should run [`FieldReadings::validate`] first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldReadings {
    /// Seasonal rainfall in millimetres.
    pub rainfall_mm: f64,
    /// Air temperature in Celsius.
    pub temperature_c: f64,
    /// Relative humidity in percent.
    pub humidity_pct: f64,
    pub soil_ph: f64,
}

impl FieldReadings {
    pub fn new(rainfall_mm: f64, temperature_c: f64, humidity_pct: f64, soil_ph: f64) -> Self {
        Self {
            rainfall_mm,
            temperature_c,
            humidity_pct,
            soil_ph,
        }
    }

    /// Reject readings no sensor or form could sensibly produce.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("rainfall", self.rainfall_mm),
            ("temperature", self.temperature_c),
            ("humidity", self.humidity_pct),
            ("soil pH", self.soil_ph),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(RulesError::InvalidReading {
                    field,
                    value,
                    reason: "not a finite number",
                });
            }
        }

        if self.rainfall_mm < 0.0 {
            return Err(RulesError::InvalidReading {
                field: "rainfall",
                value: self.rainfall_mm,
                reason: "must not be negative",
            });
        }
        if !(0.0..=100.0).contains(&self.humidity_pct) {
            return Err(RulesError::InvalidReading {
                field: "humidity",
                value: self.humidity_pct,
                reason: "must be between 0 and 100",
            });
        }
        if !(0.0..=14.0).contains(&self.soil_ph) {
            return Err(RulesError::InvalidReading {
                field: "soil pH",
                value: self.soil_ph,
                reason: "must be between 0 and 14",
            });
        }

        Ok(())
    }
}
