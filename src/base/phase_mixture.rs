use super::{check_non_negative, check_positive, check_same_len, check_volume_fractions, RockPhysError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Holds the properties of one constituent of a composite
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct Phase {
    /// Bulk modulus (GPa)
    pub k: f64,

    /// Shear modulus (GPa)
    pub g: f64,

    /// Volume fraction
    pub x: f64,

    /// Aspect ratio of the inclusion (α < 1 oblate, α > 1 prolate, α = 1 sphere)
    pub alpha: f64,
}

/// Holds the constituents of a composite (e.g., minerals and pores)
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct PhaseMixture {
    /// All constituents (ΣX = 1)
    pub phases: Vec<Phase>,
}

impl PhaseMixture {
    /// Allocates a new instance from the arrays of properties
    pub fn new(k: &[f64], g: &[f64], x: &[f64], alpha: &[f64]) -> Result<Self, RockPhysError> {
        check_same_len("K, G, X, alpha", &[k.len(), g.len(), x.len(), alpha.len()])?;
        let phases = (0..k.len())
            .map(|i| Phase {
                k: k[i],
                g: g[i],
                x: x[i],
                alpha: alpha[i],
            })
            .collect();
        Ok(PhaseMixture { phases })
    }

    /// Parses a JSON string
    pub fn from_json(json: &str) -> Result<Self, RockPhysError> {
        let mixture: PhaseMixture = serde_json::from_str(json)?;
        Ok(mixture)
    }

    /// Reads a JSON file
    pub fn read_json<P: AsRef<Path>>(full_path: P) -> Result<Self, RockPhysError> {
        let json = fs::read_to_string(full_path)?;
        PhaseMixture::from_json(&json)
    }

    /// Checks the phase-mixture invariants
    ///
    /// ΣXᵢ = 1, Xᵢ ≥ 0, Kᵢ ≥ 0, Gᵢ ≥ 0, and αᵢ > 0.
    pub fn validate(&self) -> Result<(), RockPhysError> {
        let (k, g, x, alpha) = self.columns();
        validate_phases(&k, &g, &x, &alpha)
    }

    /// Returns the arrays (K, G, X, alpha)
    pub fn columns(&self) -> (Vec<f64>, Vec<f64>, Vec<f64>, Vec<f64>) {
        let k = self.phases.iter().map(|p| p.k).collect();
        let g = self.phases.iter().map(|p| p.g).collect();
        let x = self.phases.iter().map(|p| p.x).collect();
        let alpha = self.phases.iter().map(|p| p.alpha).collect();
        (k, g, x, alpha)
    }
}

/// Checks the phase-mixture invariants given as separate arrays
pub(crate) fn validate_phases(k: &[f64], g: &[f64], x: &[f64], alpha: &[f64]) -> Result<(), RockPhysError> {
    check_same_len("K, G, X, alpha", &[k.len(), g.len(), x.len(), alpha.len()])?;
    check_non_negative("K", k)?;
    check_non_negative("G", g)?;
    check_volume_fractions("X", x)?;
    check_positive("alpha", alpha)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{Phase, PhaseMixture};

    #[test]
    fn new_works() {
        let mix = PhaseMixture::new(&[36.0, 0.0], &[45.0, 0.0], &[0.9, 0.1], &[1.0, 0.1]).unwrap();
        assert_eq!(mix.phases.len(), 2);
        assert_eq!(
            mix.phases[1],
            Phase {
                k: 0.0,
                g: 0.0,
                x: 0.1,
                alpha: 0.1
            }
        );
        let (k, g, x, alpha) = mix.columns();
        assert_eq!(k, &[36.0, 0.0]);
        assert_eq!(g, &[45.0, 0.0]);
        assert_eq!(x, &[0.9, 0.1]);
        assert_eq!(alpha, &[1.0, 0.1]);
        assert!(mix.validate().is_ok());

        assert!(PhaseMixture::new(&[36.0], &[45.0, 0.0], &[1.0], &[1.0]).is_err());
    }

    #[test]
    fn from_json_works() {
        let json = r#"{
            "phases": [
                { "k": 37.0, "g": 44.0, "x": 0.8, "alpha": 1.0 },
                { "k": 2.25, "g": 0.0, "x": 0.2, "alpha": 0.1 }
            ]
        }"#;
        let mix = PhaseMixture::from_json(json).unwrap();
        assert_eq!(mix.phases.len(), 2);
        assert_eq!(mix.phases[0].k, 37.0);
        assert_eq!(mix.phases[1].alpha, 0.1);
        assert!(mix.validate().is_ok());

        assert!(PhaseMixture::from_json("{ \"phases\": [ { \"k\": 1.0 } ] }").is_err());
        assert!(PhaseMixture::read_json("/tmp/rockphy/__does_not_exist__.json").is_err());
    }

    #[test]
    fn validate_captures_errors() {
        let mix = PhaseMixture::new(&[36.0, -1.0], &[45.0, 0.0], &[0.9, 0.1], &[1.0, 1.0]).unwrap();
        assert_eq!(
            mix.validate().err().unwrap().to_string(),
            "invalid parameter: K[1] = -1.0 is incorrect; it must be finite and ≥ 0.0"
        );
        let mix = PhaseMixture::new(&[36.0, 0.0], &[45.0, 0.0], &[0.9, 0.2], &[1.0, 1.0]).unwrap();
        assert!(mix.validate().is_err());
        let mix = PhaseMixture::new(&[36.0, 0.0], &[45.0, 0.0], &[0.9, 0.1], &[1.0, 0.0]).unwrap();
        assert_eq!(
            mix.validate().err().unwrap().to_string(),
            "invalid parameter: alpha[1] = 0.0 is incorrect; it must be finite and > 0.0"
        );
    }
}
