//! Disease diagnosis from leaf images.
//!
//! Providers sit behind [`DiagnosticProvider`]. The [`Diagnostics`] service
//! owns one provider plus a simulated fallback, so analysis never fails.

mod model;
mod simulated;

pub use model::*;
pub use simulated::*;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::{DiagnosticsConfig, DiagnosticsMode};

/// Follow-up steps attached to every report.
pub const REPORT_RECOMMENDATIONS: &[&str] = &[
    "Monitor regularly",
    "Apply treatment if needed",
    "Maintain field hygiene",
    "Ensure proper nutrition",
];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiagnosisError {
    #[error("Diagnosis model unavailable: {0}")]
    ModelUnavailable(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    None,
    Mild,
    Moderate,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Severity::None => "None",
            Severity::Mild => "Mild",
            Severity::Moderate => "Moderate",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Treatment {
    pub chemical: String,
    pub organic: Option<String>,
    pub prevention: Option<String>,
}

/// A single disease finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnosis {
    pub disease: String,
    pub confidence_pct: u8,
    pub affected_area_pct: u8,
    pub severity: Severity,
    pub description: String,
    pub treatment: Treatment,
    pub recovery_time: String,
}

impl Diagnosis {
    pub fn is_healthy(&self) -> bool {
        self.severity == Severity::None
    }
}

/// Output of one image analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisReport {
    pub report_id: Uuid,
    pub file_id: String,
    /// Provider that produced the diagnosis.
    pub provider: String,
    /// True when the diagnosis is canned rather than inferred.
    pub simulated: bool,
    /// True when the configured provider failed and the simulated one answered.
    pub fell_back: bool,
    pub diagnosis: Diagnosis,
    pub recommendations: Vec<String>,
}

/// Something that can diagnose an uploaded image.
pub trait DiagnosticProvider: Send {
    fn name(&self) -> &str;

    /// Whether results are canned rather than inferred from the image.
    fn is_simulated(&self) -> bool {
        false
    }

    fn diagnose(&mut self, file_id: &str) -> Result<Diagnosis, DiagnosisError>;
}

/// Image analysis service with a simulated safety net.
pub struct Diagnostics {
    provider: Box<dyn DiagnosticProvider>,
    fallback: SimulatedDiagnostics,
}

impl std::fmt::Debug for Diagnostics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Diagnostics")
            .field("provider", &self.provider.name())
            .finish()
    }
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::simulated(None)
    }
}

impl Diagnostics {
    /// Simulated provider only.
    pub fn simulated(seed: Option<u64>) -> Self {
        Self {
            provider: Box::new(SimulatedDiagnostics::new(seed)),
            fallback: SimulatedDiagnostics::new(seed.map(|s| s.wrapping_add(1))),
        }
    }

    /// Use a custom provider, falling back to the simulated one on error.
    pub fn with_provider(provider: Box<dyn DiagnosticProvider>, seed: Option<u64>) -> Self {
        Self {
            provider,
            fallback: SimulatedDiagnostics::new(seed),
        }
    }

    /// Service for the configured mode. Model mode keeps the simulated
    /// provider as its fallback.
    pub fn from_config(config: &DiagnosticsConfig, seed: Option<u64>) -> Self {
        match config.mode {
            DiagnosticsMode::Simulated => Self::simulated(seed),
            DiagnosticsMode::Model => Self::with_provider(
                Box::new(ModelDiagnostics::new(config.endpoint.clone())),
                seed,
            ),
        }
    }

    /// Name of the primary provider.
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Analyze an image. Provider errors are logged and answered by the
    /// simulated fallback.
    pub fn analyze(&mut self, file_id: &str) -> DiagnosisReport {
        let (diagnosis, provider, simulated, fell_back) = match self.provider.diagnose(file_id) {
            Ok(diagnosis) => (
                diagnosis,
                self.provider.name().to_string(),
                self.provider.is_simulated(),
                false,
            ),
            Err(err) => {
                warn!(
                    provider = self.provider.name(),
                    error = %err,
                    "diagnosis provider failed, using simulated results"
                );
                (self.fallback.pick(), self.fallback.name().to_string(), true, true)
            }
        };

        debug!(file_id, disease = %diagnosis.disease, provider = %provider, "image analyzed");

        DiagnosisReport {
            report_id: Uuid::new_v4(),
            file_id: file_id.to_string(),
            provider,
            simulated,
            fell_back,
            diagnosis,
            recommendations: REPORT_RECOMMENDATIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}
