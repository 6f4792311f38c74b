use nalgebra::Matrix6;
use serde::{Deserialize, Serialize};

/// Computes the azimuth-dependent PP reflectivity between two weakly anisotropic HTI media
///
/// Uses Rüger's approximation with the symmetry axis along x1. The azimuth is measured
/// from the symmetry axis. With α = √(C33/ρ), β = √(C44/ρ), G = ρβ² and the anisotropy
/// parameters
///
/// ```text
///        C11 - C33        (C13 + C55)² - (C33 - C55)²        C44 - C66
/// εᵛ = —————————,  δᵛ = ——————————————————————————,  γ = —————————
///         2 C33               2 C33 (C33 - C55)                2 C66
/// ```
///
/// the reflectivity is
///
/// ```text
///            1 ΔZ   1 ⎛ Δα   ⎛ 2β ⎞² ΔG   ⎛           ⎛ 2β ⎞²   ⎞      ⎞
/// Rpp(θ,φ) = — —— + — ⎜ —— - ⎜ —— ⎟  —— + ⎜ Δδᵛ + 2 ⎜ —— ⎟ Δγ ⎟ cos²φ ⎟ sin²θ
///            2 Z    2 ⎝ α    ⎝ α  ⎠  G    ⎝           ⎝ α  ⎠    ⎠      ⎠
///
///              1 ⎛ Δα                                 ⎞
///            + — ⎜ —— + Δεᵛ cos⁴φ + Δδᵛ sin²φ cos²φ ⎟ sin²θ tan²θ
///              2 ⎝ α                                  ⎠
/// ```
///
/// # Input
///
/// * `rho1`, `c1` -- density and 6×6 stiffness matrix of the upper medium
/// * `rho2`, `c2` -- density and 6×6 stiffness matrix of the lower medium
/// * `theta` -- angle of incidence (degrees)
/// * `azimuth` -- azimuth from the symmetry axis (degrees)
///
/// # Reference
///
/// 1. Rüger A (1997) P-wave reflection coefficients for transversely isotropic models with
///    vertical and horizontal axis of symmetry, Geophysics 62(3):713-722
pub fn ruger_hti(rho1: f64, c1: &Matrix6<f64>, rho2: f64, c2: &Matrix6<f64>, theta: f64, azimuth: f64) -> f64 {
    let upper = HtiProperties::new(rho1, c1);
    let lower = HtiProperties::new(rho2, c2);

    let z = 0.5 * (upper.z + lower.z);
    let alpha = 0.5 * (upper.alpha + lower.alpha);
    let beta = 0.5 * (upper.beta + lower.beta);
    let mu = 0.5 * (upper.mu + lower.mu);
    let dz = lower.z - upper.z;
    let dalpha = lower.alpha - upper.alpha;
    let dmu = lower.mu - upper.mu;
    let ddelta = lower.delta - upper.delta;
    let dgamma = lower.gamma - upper.gamma;
    let depsilon = lower.epsilon - upper.epsilon;

    let (sin_t, tan_t) = (f64::sin(theta.to_radians()), f64::tan(theta.to_radians()));
    let (sin_a, cos_a) = f64::sin_cos(azimuth.to_radians());
    let (s2, t2) = (sin_t * sin_t, tan_t * tan_t);
    let (sa2, ca2) = (sin_a * sin_a, cos_a * cos_a);
    let f = (2.0 * beta / alpha) * (2.0 * beta / alpha);

    0.5 * dz / z
        + 0.5 * (dalpha / alpha - f * dmu / mu + (ddelta + 2.0 * f * dgamma) * ca2) * s2
        + 0.5 * (dalpha / alpha + depsilon * ca2 * ca2 + ddelta * sa2 * ca2) * s2 * t2
}

/// Holds the vertical velocities and anisotropy parameters of an HTI medium
struct HtiProperties {
    z: f64,
    alpha: f64,
    beta: f64,
    mu: f64,
    epsilon: f64,
    delta: f64,
    gamma: f64,
}

impl HtiProperties {
    fn new(rho: f64, c: &Matrix6<f64>) -> Self {
        let (c11, c13, c33) = (c[(0, 0)], c[(0, 2)], c[(2, 2)]);
        let (c44, c55, c66) = (c[(3, 3)], c[(4, 4)], c[(5, 5)]);
        let alpha = f64::sqrt(c33 / rho);
        let beta = f64::sqrt(c44 / rho);
        HtiProperties {
            z: rho * alpha,
            alpha,
            beta,
            mu: rho * beta * beta,
            epsilon: (c11 - c33) / (2.0 * c33),
            delta: ((c13 + c55) * (c13 + c55) - (c33 - c55) * (c33 - c55)) / (2.0 * c33 * (c33 - c55)),
            gamma: (c44 - c66) / (2.0 * c66),
        }
    }
}

/// Holds the vertical velocities and Tsvankin's parameters of an orthorhombic layer
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct OrthoLayer {
    /// Vertical P-wave velocity
    pub vp: f64,

    /// Vertical S-wave velocity
    pub vs: f64,

    /// Density
    pub rho: f64,

    /// ε in the symmetry plane normal to x1 (the [x2,x3] plane)
    pub epsilon1: f64,

    /// δ in the symmetry plane normal to x1 (the [x2,x3] plane)
    pub delta1: f64,

    /// ε in the symmetry plane normal to x2 (the [x1,x3] plane)
    pub epsilon2: f64,

    /// δ in the symmetry plane normal to x2 (the [x1,x3] plane)
    pub delta2: f64,

    /// Shear-wave splitting parameter γ
    pub gamma: f64,
}

impl OrthoLayer {
    /// Returns an isotropic layer (all anisotropy parameters are zero)
    pub fn isotropic(vp: f64, vs: f64, rho: f64) -> Self {
        OrthoLayer {
            vp,
            vs,
            rho,
            epsilon1: 0.0,
            delta1: 0.0,
            epsilon2: 0.0,
            delta2: 0.0,
            gamma: 0.0,
        }
    }
}

/// Computes the PP reflectivity in the two vertical symmetry planes of orthorhombic media
///
/// # Output
///
/// Returns `(rxz, ryz)`, the reflectivity in the [x1,x3] and [x2,x3] planes.
///
/// # Reference
///
/// 1. Rüger A (1998) Variation of P-wave reflectivity with offset and azimuth in
///    anisotropic media, Geophysics 63(3):935-947
pub fn avo_ortho(theta: f64, upper: &OrthoLayer, lower: &OrthoLayer) -> (f64, f64) {
    let (z1, z2) = (upper.rho * upper.vp, lower.rho * lower.vp);
    let (g1, g2) = (upper.rho * upper.vs * upper.vs, lower.rho * lower.vs * lower.vs);
    let g = 0.5 * (g1 + g2);
    let dg = g2 - g1;
    let a = 0.5 * (upper.vp + lower.vp);
    let da = lower.vp - upper.vp;
    let b = 0.5 * (upper.vs + lower.vs);

    let theta = theta.to_radians();
    let s2 = f64::powi(f64::sin(theta), 2);
    let t2 = f64::powi(f64::tan(theta), 2);
    let f = (2.0 * b / a) * (2.0 * b / a);
    let r0 = (z2 - z1) / (z2 + z1);

    let rxz = r0
        + 0.5 * (da / a - f * (dg / g - 2.0 * (lower.gamma - upper.gamma)) + lower.delta2 - upper.delta2) * s2
        + 0.5 * (da / a + lower.epsilon2 - upper.epsilon2) * s2 * t2;
    let ryz = r0
        + 0.5 * (da / a - f * dg / g + lower.delta1 - upper.delta1) * s2
        + 0.5 * (da / a + lower.epsilon1 - upper.epsilon1) * s2 * t2;
    (rxz, ryz)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
