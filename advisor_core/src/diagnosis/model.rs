//! Placeholder for a trained disease model served over HTTP.

use super::{Diagnosis, DiagnosisError, DiagnosticProvider};

/// Model-backed provider. No model is wired up yet, so every call fails
/// and the [`Diagnostics`](super::Diagnostics) service falls back.
#[derive(Debug, Clone, Default)]
pub struct ModelDiagnostics {
    endpoint: Option<String>,
}

impl ModelDiagnostics {
    pub fn new(endpoint: Option<String>) -> Self {
        Self { endpoint }
    }

    /// Configured model endpoint, if any.
    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }
}

impl DiagnosticProvider for ModelDiagnostics {
    fn name(&self) -> &str {
        "model"
    }

    fn diagnose(&mut self, _file_id: &str) -> Result<Diagnosis, DiagnosisError> {
        let reason = match &self.endpoint {
            Some(endpoint) => format!("no inference client for {endpoint}"),
            None => "no model endpoint configured".to_string(),
        };
        Err(DiagnosisError::ModelUnavailable(reason))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_always_unavailable() {
        let mut provider = ModelDiagnostics::default();
        assert_eq!(
            provider.diagnose("leaf.jpg"),
            Err(DiagnosisError::ModelUnavailable(
                "no model endpoint configured".to_string()
            ))
        );
        assert!(!provider.is_simulated());
    }
}
