use crate::base::{poisson_ratio, stiffness_vti, LoadingPath, RockPhysError};
use nalgebra::Matrix6;
use std::f64::consts::PI;

/// Holds the response of a sphere pack under transversely isotropic strain
#[derive(Clone, Debug)]
pub struct StrainInducedAnisotropy {
    /// VTI stiffness matrix (GPa)
    pub stiffness: Matrix6<f64>,

    /// Stress along the symmetry axis (GPa; negative in compression)
    pub sigma33: f64,

    /// Stress normal to the symmetry axis, σ11 = σ22 (GPa; negative in compression)
    pub sigma11: f64,
}

/// Computes the stress-induced anisotropy of a pack of identical spheres (Johnson-Norris)
///
/// The applied strain is a hydrostatic strain ε plus a uniaxial strain ε₃ along x3 (both
/// negative in compression). With α = √(ε/ε₃), the stiffnesses follow from the integrals
///
/// ```text
///       1
/// Iₖ = ∫ xᵏ √(α² + x²) dx,   k = 0, 2, 4
///       0
/// ```
///
/// The stiffness does not depend on the loading path, but the stresses do.
///
/// # Input
///
/// * `k0`, `g0` -- moduli of the grain material (GPa)
/// * `n` -- coordination number
/// * `phi` -- porosity
/// * `epsilon` -- hydrostatic strain (< 0)
/// * `epsilon_axial` -- uniaxial strain along x3 (< 0)
/// * `path` -- order in which the strains are applied
///
/// # Reference
///
/// 1. Norris AN, Johnson DL (1997) Nonlinear elasticity of granular media, J. Appl. Mech.
///    64, 39-49
/// 2. Johnson DL, Schwartz LM, Elata D, Berryman JG, Hornby B, Norris AN (1998) Linear and
///    nonlinear elasticity of granular media: stress-induced anisotropy of a random sphere
///    pack, J. Appl. Mech. 65, 380-388
pub fn johnson(
    k0: f64,
    g0: f64,
    n: f64,
    phi: f64,
    epsilon: f64,
    epsilon_axial: f64,
    path: LoadingPath,
) -> Result<StrainInducedAnisotropy, RockPhysError> {
    if !(epsilon < 0.0) || !(epsilon_axial < 0.0) {
        return Err(RockPhysError::InvalidParameter(format!(
            "epsilon = {:?} and epsilon_axial = {:?} are incorrect; they must be < 0.0 (compression)",
            epsilon, epsilon_axial
        )));
    }

    // contact stiffnesses and compliances
    let nu0 = poisson_ratio(k0, g0);
    let c_n = 4.0 * g0 / (1.0 - nu0);
    let c_t = 8.0 * g0 / (2.0 - nu0);
    let bw = 2.0 / (PI * c_n);
    let cw = 4.0 / PI * (1.0 / c_t - 1.0 / c_n);
    let gamma = 3.0 / 32.0 * c_n * c_t * n * (1.0 - phi) * f64::sqrt(-epsilon);

    // integrals
    let alpha = f64::sqrt(epsilon / epsilon_axial);
    let a2 = alpha * alpha;
    let s = f64::powf(1.0 + a2, 1.5);
    let i0 = 0.5 * (f64::sqrt(1.0 + a2) + a2 * f64::asinh(1.0 / alpha));
    let i2 = 0.25 * (s - a2 * i0);
    let i4 = (s - 3.0 * a2 * i2) / 6.0;

    // stiffness
    let c = gamma / alpha;
    let c11 = c * (2.0 * bw * (i0 - i2) + 0.75 * cw * (i0 - 2.0 * i2 + i4));
    let c33 = c * (4.0 * bw * i2 + 2.0 * cw * i4);
    let c13 = c * cw * (i2 - i4);
    let c44 = c * (0.5 * bw * (i0 + i2) + cw * (i2 - i4));
    let c66 = c * (bw * (i0 - i2) + 0.25 * cw * (i0 - 2.0 * i2 + i4));

    // stresses
    let temp = -f64::powf(-epsilon, 1.5) * (1.0 - phi) * n / (4.0 * PI * alpha * a2);
    let j = a2 * i0 + (1.0 - a2) * i2 - i4;
    let tangential = match path {
        LoadingPath::Together => i2 - i4,
        LoadingPath::UniaxialThenIsotropic => 1.0 / 12.0,
        LoadingPath::IsotropicThenUniaxial => j - 2.0 * alpha * a2 / 3.0,
    };
    let sigma33 = 2.0 * temp * (c_t * tangential + c_n * (a2 * i2 + i4));
    let sigma11 = temp * (-c_t * tangential + c_n * j);

    Ok(StrainInducedAnisotropy {
        stiffness: stiffness_vti(c11, c33, c13, c44, c66),
        sigma33,
        sigma11,
    })
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
