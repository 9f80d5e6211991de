//! Canned diagnoses for demos and tests. Never looks at the image.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::{Diagnosis, DiagnosisError, DiagnosticProvider, Severity, Treatment};

/// Provider that picks one of five fixed diagnoses at random.
#[derive(Debug, Clone)]
pub struct SimulatedDiagnostics {
    catalog: Vec<Diagnosis>,
    rng: StdRng,
}

impl SimulatedDiagnostics {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            catalog: simulated_catalog(),
            rng,
        }
    }

    /// Diagnoses this provider draws from.
    pub fn catalog(&self) -> &[Diagnosis] {
        &self.catalog
    }

    /// Pick a diagnosis uniformly at random.
    pub fn pick(&mut self) -> Diagnosis {
        self.catalog
            .choose(&mut self.rng)
            .cloned()
            .unwrap_or_else(healthy)
    }
}

impl DiagnosticProvider for SimulatedDiagnostics {
    fn name(&self) -> &str {
        "simulated"
    }

    fn is_simulated(&self) -> bool {
        true
    }

    fn diagnose(&mut self, _file_id: &str) -> Result<Diagnosis, DiagnosisError> {
        Ok(self.pick())
    }
}

fn diagnosis(
    disease: &str,
    confidence_pct: u8,
    affected_area_pct: u8,
    severity: Severity,
    description: &str,
    treatment: Treatment,
    recovery_time: &str,
) -> Diagnosis {
    Diagnosis {
        disease: disease.to_string(),
        confidence_pct,
        affected_area_pct,
        severity,
        description: description.to_string(),
        treatment,
        recovery_time: recovery_time.to_string(),
    }
}

fn treatment(chemical: &str, organic: Option<&str>, prevention: Option<&str>) -> Treatment {
    Treatment {
        chemical: chemical.to_string(),
        organic: organic.map(str::to_string),
        prevention: prevention.map(str::to_string),
    }
}

fn healthy() -> Diagnosis {
    diagnosis(
        "Healthy - No Disease",
        95,
        0,
        Severity::None,
        "Plant appears healthy with good green coloration.",
        treatment(
            "No treatment needed",
            Some("Continue current practices"),
            Some("Continue preventive measures, monitor regularly"),
        ),
        "N/A",
    )
}

/// The five canned diagnoses.
pub fn simulated_catalog() -> Vec<Diagnosis> {
    vec![
        diagnosis(
            "Leaf Blight",
            87,
            15,
            Severity::Moderate,
            "Fungal infection on leaf margins. Common in humid conditions.",
            treatment(
                "Mancozeb 75% WP @ 2.5g/L or Propiconazole 25% EC @ 1ml/L",
                Some("Neem oil spray 5ml/L, remove affected leaves"),
                Some("Avoid overhead irrigation, use resistant varieties, maintain field sanitation"),
            ),
            "7-14 days",
        ),
        diagnosis(
            "Nutrient Deficiency (Nitrogen)",
            92,
            30,
            Severity::Moderate,
            "Yellowing of older leaves indicates nitrogen deficiency.",
            treatment(
                "Urea 46% @ 2-3 kg/acre as top dressing",
                Some("Apply FYM 5-10 tonnes/acre"),
                Some("Regular soil testing, balanced fertilization, use of slow-release fertilizers"),
            ),
            "10-21 days",
        ),
        diagnosis(
            "Bacterial Spot",
            78,
            8,
            Severity::Mild,
            "Small water-soaked lesions that turn brown.",
            treatment(
                "Copper Oxychloride 50% WP @ 2.5g/L",
                None,
                Some("Use disease-free seeds, crop rotation, avoid overhead irrigation"),
            ),
            "7-10 days",
        ),
        diagnosis(
            "Powdery Mildew",
            85,
            20,
            Severity::Moderate,
            "White powdery coating on leaves and stems.",
            treatment(
                "Sulfur 80% WDG @ 2g/L",
                Some("Neem oil + garlic extract spray"),
                None,
            ),
            "7-14 days",
        ),
        healthy(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_contents() {
        let catalog = simulated_catalog();
        assert_eq!(catalog.len(), 5);
        assert_eq!(catalog.iter().filter(|d| d.is_healthy()).count(), 1);
        assert_eq!(catalog[2].severity, Severity::Mild);
        assert!(catalog[2].treatment.organic.is_none());
    }

    #[test]
    fn test_pick_is_seeded() {
        let mut a = SimulatedDiagnostics::new(Some(11));
        let mut b = SimulatedDiagnostics::new(Some(11));
        for _ in 0..10 {
            assert_eq!(a.pick(), b.pick());
        }
    }

    #[test]
    fn test_pick_covers_catalog() {
        let mut provider = SimulatedDiagnostics::new(Some(3));
        let seen: HashSet<String> = (0..200).map(|_| provider.pick().disease).collect();
        assert_eq!(seen.len(), 5);
    }

    #[test]
    fn test_ignores_file() {
        let mut provider = SimulatedDiagnostics::new(Some(0));
        assert!(provider.diagnose("").is_ok());
        assert!(provider.diagnose("missing/file.jpg").is_ok());
    }
}
