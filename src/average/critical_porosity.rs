use super::voigt_reuss_hill;
use crate::base::{check_fraction, Average, RockPhysError};

/// Computes the dry moduli of the frame using Nur's critical porosity model
///
/// ```text
/// K_dry = K0 (1 - φ/φc)
/// G_dry = G0 (1 - φ/φc)
/// ```
///
/// # Input
///
/// * `k0`, `g0` -- mineral bulk and shear moduli (GPa)
/// * `phi` -- porosity
/// * `phic` -- critical porosity
///
/// # Output
///
/// Returns `(k_dry, g_dry)`
///
/// # Reference
///
/// 1. Mavko G, Mukerji T, Dvorkin J (2009) The Rock Physics Handbook, 2nd edition, Section 7.1
pub fn critical_porosity(k0: f64, g0: f64, phi: f64, phic: f64) -> (f64, f64) {
    let c = 1.0 - phi / phic;
    (k0 * c, g0 * c)
}

/// Computes the modulus (or density) of a suspension at the critical porosity
///
/// In the suspension domain, the modulus is the Reuss (isostress) average of the solid
/// and the pore-filling phase. With [Average::Voigt], the mass-balance (density)
/// average is computed instead.
///
/// # Input
///
/// * `m0` -- modulus (or density) of the solid phase
/// * `mf` -- modulus (or density) of the pore-filling phase
/// * `phic` -- critical porosity
/// * `average` -- Reuss for moduli, Voigt for densities
pub fn critical_porosity_suspension(m0: f64, mf: f64, phic: f64, average: Average) -> Result<f64, RockPhysError> {
    check_fraction("phic", phic)?;
    let (m_voigt, m_reuss, _) = voigt_reuss_hill(&[1.0 - phic, phic], &[m0, mf])?;
    match average {
        Average::Voigt => Ok(m_voigt),
        Average::Reuss => Ok(m_reuss),
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{critical_porosity, critical_porosity_suspension};
    use crate::base::Average;
    use approx::assert_relative_eq;

    #[test]
    fn critical_porosity_works() {
        let (kk, gg) = critical_porosity(36.0, 45.0, 0.0, 0.4);
        assert_eq!(kk, 36.0);
        assert_eq!(gg, 45.0);
        let (kk, gg) = critical_porosity(36.0, 45.0, 0.2, 0.4);
        assert_eq!(kk, 18.0);
        assert_eq!(gg, 22.5);
        let (kk, gg) = critical_porosity(36.0, 45.0, 0.4, 0.4);
        assert_eq!(kk, 0.0);
        assert_eq!(gg, 0.0);
    }

    #[test]
    fn critical_porosity_suspension_works() {
        let kk = critical_porosity_suspension(36.0, 2.25, 0.4, Average::Reuss).unwrap();
        assert_relative_eq!(kk, 1.0 / (0.6 / 36.0 + 0.4 / 2.25), epsilon = 1e-14);
        let rho = critical_porosity_suspension(2.65, 1.0, 0.4, Average::Voigt).unwrap();
        assert_relative_eq!(rho, 0.6 * 2.65 + 0.4, epsilon = 1e-14);
        assert!(critical_porosity_suspension(36.0, 2.25, 1.4, Average::Reuss).is_err());
    }
}
