use crate::base::{lame_lambda, stiffness_ortho, HudsonOrder, SymmetryAxis, VtiConstants};
use nalgebra::Matrix6;
use std::f64::consts::PI;

/// Holds the background Lamé parameters and the crack response factors U1 and U3
struct HudsonTerms {
    lambda: f64,
    mu: f64,
    u1: f64,
    u3: f64,
}

impl HudsonTerms {
    /// Computes the terms for cracks with aspect ratio α filled by a material (Ki, Gi)
    ///
    /// ```text
    ///      (Ki + 4Gi/3)(λ + 2μ)           4 Gi (λ + μ)
    /// κ = ——————————————————————,   M = ————————————————————
    ///         π α μ (λ + μ)              π α μ (3λ + 4μ)
    ///
    ///         16 (λ + 2μ)                   4 (λ + 2μ)
    /// U1 = ————————————————————,   U3 = ———————————————————
    ///       3 (3λ + 4μ)(1 + M)            3 (λ + μ)(1 + κ)
    /// ```
    fn new(kk: f64, gg: f64, ki: f64, gi: f64, alpha: f64) -> Self {
        let lambda = lame_lambda(kk, gg);
        let mu = gg;
        let kappa = (ki + 4.0 * gi / 3.0) * (lambda + 2.0 * mu) / (PI * alpha * mu * (lambda + mu));
        let m = 4.0 * gi * (lambda + mu) / (PI * alpha * mu * (3.0 * lambda + 4.0 * mu));
        let u1 = 16.0 * (lambda + 2.0 * mu) / (3.0 * (3.0 * lambda + 4.0 * mu) * (1.0 + m));
        let u3 = 4.0 * (lambda + 2.0 * mu) / (3.0 * (lambda + mu) * (1.0 + kappa));
        HudsonTerms { lambda, mu, u1, u3 }
    }

    /// Returns the first order corrections (C11, C13, C33, C44) for one crack set normal to x3
    fn first_order(&self, crd: f64) -> (f64, f64, f64, f64) {
        let (l, m) = (self.lambda, self.mu);
        (
            -l * l * crd * self.u3 / m,
            -l * (l + 2.0 * m) * crd * self.u3 / m,
            -(l + 2.0 * m) * (l + 2.0 * m) * crd * self.u3 / m,
            -m * crd * self.u1,
        )
    }

    /// Returns the second order corrections (C11, C13, C33, C44) for one crack set normal to x3
    fn second_order(&self, crd: f64) -> (f64, f64, f64, f64) {
        let (l, m) = (self.lambda, self.mu);
        let q = 15.0 * l * l / (m * m) + 28.0 * l / m + 28.0;
        let e3 = crd * self.u3;
        let e1 = crd * self.u1;
        (
            q / 15.0 * l * l / (l + 2.0 * m) * e3 * e3,
            q / 15.0 * l * e3 * e3,
            q / 15.0 * (l + 2.0 * m) * e3 * e3,
            2.0 / 15.0 * m * (3.0 * l + 8.0 * m) / (l + 2.0 * m) * e1 * e1,
        )
    }
}

/// Computes the stiffness of a solid with one set of aligned penny-shaped cracks (Hudson)
///
/// The cracks are weak inclusions with normals along x3 (VTI result) or x1 (HTI result).
/// The second order correction is only meaningful for small crack densities (see Cheng, 1993).
///
/// # Input
///
/// * `kk`, `gg` -- moduli of the isotropic background (GPa)
/// * `ki`, `gi` -- moduli of the inclusion material (GPa); use 0 for dry cracks
/// * `alpha` -- crack aspect ratio
/// * `crd` -- crack density
/// * `order` -- order of the correction
/// * `axis` -- direction of the crack normals
///
/// # Output
///
/// Returns the 6×6 stiffness matrix (Voigt notation)
///
/// # Reference
///
/// 1. Hudson JA (1980) Overall properties of a cracked solid, Math. Proc. Camb. Phil. Soc.
///    88, 371-384
#[allow(clippy::too_many_arguments)]
pub fn hudson(
    kk: f64,
    gg: f64,
    ki: f64,
    gi: f64,
    alpha: f64,
    crd: f64,
    order: HudsonOrder,
    axis: SymmetryAxis,
) -> Matrix6<f64> {
    let terms = HudsonTerms::new(kk, gg, ki, gi, alpha);
    let (l, m) = (terms.lambda, terms.mu);
    let (c11_1, c13_1, c33_1, c44_1) = terms.first_order(crd);
    let (c11_2, c13_2, c33_2, c44_2) = match order {
        HudsonOrder::First => (0.0, 0.0, 0.0, 0.0),
        HudsonOrder::Second => terms.second_order(crd),
    };
    let cc = VtiConstants {
        c11: l + 2.0 * m + c11_1 + c11_2,
        c33: l + 2.0 * m + c33_1 + c33_2,
        c13: l + c13_1 + c13_2,
        c44: m + c44_1 + c44_2,
        c66: m,
    };
    match axis {
        SymmetryAxis::X3 => cc.to_vti(),
        SymmetryAxis::X1 => cc.to_hti(),
    }
}

/// Computes the moduli of a solid with randomly oriented penny-shaped cracks (Hudson)
///
/// Uses the first order isotropic average of Hudson's corrections:
///
/// ```text
/// μ₁ = -2 μ ε (3 U1 + 2 U3) / 15
/// λ₁ = (-(3λ + 2μ)² ε U3 / (3μ) - 2 μ₁) / 3
/// ```
///
/// # Output
///
/// Returns `(K_eff, G_eff)`
pub fn hudson_random(kk: f64, gg: f64, ki: f64, gi: f64, alpha: f64, crd: f64) -> (f64, f64) {
    let terms = HudsonTerms::new(kk, gg, ki, gi, alpha);
    let (l, m) = (terms.lambda, terms.mu);
    let mu_1 = -2.0 * m * crd * (3.0 * terms.u1 + 2.0 * terms.u3) / 15.0;
    let lambda_1 = (-(3.0 * l + 2.0 * m) * (3.0 * l + 2.0 * m) * crd * terms.u3 / (3.0 * m) - 2.0 * mu_1) / 3.0;
    let mu_eff = m + mu_1;
    let lambda_eff = l + lambda_1;
    (lambda_eff + 2.0 * mu_eff / 3.0, mu_eff)
}

/// Computes the stiffness of a solid with three orthogonal crack sets (Hudson, first order)
///
/// Set i has its normals along xᵢ, aspect ratio `alpha[i]` and crack density `crd[i]`.
/// The result is orthorhombic.
pub fn hudson_ortho(kk: f64, gg: f64, ki: f64, gi: f64, alpha: [f64; 3], crd: [f64; 3]) -> Matrix6<f64> {
    let mut c11_1 = [0.0; 3];
    let mut c13_1 = [0.0; 3];
    let mut c33_1 = [0.0; 3];
    let mut c44_1 = [0.0; 3];
    for i in 0..3 {
        let terms = HudsonTerms::new(kk, gg, ki, gi, alpha[i]);
        (c11_1[i], c13_1[i], c33_1[i], c44_1[i]) = terms.first_order(crd[i]);
    }
    let (l, m) = (lame_lambda(kk, gg), gg);
    // C12 = C11 - 2C66 for each set, with C66 uncorrected
    let c12_1 = c11_1;
    let p = l + 2.0 * m;
    stiffness_ortho(
        p + c33_1[0] + c11_1[1] + c11_1[2],
        p + c11_1[0] + c33_1[1] + c11_1[2],
        p + c11_1[0] + c11_1[1] + c33_1[2],
        l + c13_1[0] + c13_1[1] + c12_1[2],
        l + c13_1[0] + c12_1[1] + c13_1[2],
        l + c12_1[0] + c13_1[1] + c13_1[2],
        m + c44_1[1] + c44_1[2],
        m + c44_1[0] + c44_1[2],
        m + c44_1[0] + c44_1[1],
    )
}

/// Computes the stiffness of a solid whose crack normals form a cone around x3 (Hudson, first order)
///
/// The crack normals are randomly distributed at a fixed angle θ from the symmetry axis x3,
/// giving a transversely isotropic medium. With θ = 0, this model reduces to [hudson] with
/// a single crack set normal to x3.
///
/// # Input
///
/// * `crd` -- total crack density
/// * `theta` -- angle between the crack normals and x3 (degrees)
pub fn hudson_cone(kk: f64, gg: f64, ki: f64, gi: f64, alpha: f64, crd: f64, theta: f64) -> Matrix6<f64> {
    let terms = HudsonTerms::new(kk, gg, ki, gi, alpha);
    let (l, m, u1, u3) = (terms.lambda, terms.mu, terms.u1, terms.u3);
    let (s, c) = f64::sin_cos(theta.to_radians());
    let (s2, c2) = (s * s, c * c);
    let s4 = s2 * s2;
    let c11_1 = -crd / (2.0 * m)
        * (u3 * (2.0 * l * l + 4.0 * l * m * s2 + 3.0 * m * m * s4) + u1 * m * m * s2 * (4.0 - 3.0 * s2));
    let c33_1 = -crd / m * (u3 * (l + 2.0 * m * c2) * (l + 2.0 * m * c2) + u1 * m * m * 4.0 * c2 * s2);
    let c12_1 = -crd / (2.0 * m) * (u3 * (2.0 * l * l + 4.0 * l * m * s2 + m * m * s4) - u1 * m * m * s4);
    let c13_1 = -crd / m * (u3 * (l + m * s2) * (l + 2.0 * m * c2) - u1 * m * m * 2.0 * s2 * c2);
    let c44_1 = -crd / 2.0 * m * (u3 * 4.0 * s2 * c2 + u1 * (s2 + 2.0 * c2 - 4.0 * s2 * c2));
    let c66_1 = -crd / 2.0 * m * (u3 * 4.0 * s4 + u1 * s2 * (2.0 - s2));
    let c11 = l + 2.0 * m + c11_1;
    let c12 = l + c12_1;
    let c13 = l + c13_1;
    let c33 = l + 2.0 * m + c33_1;
    let c44 = m + c44_1;
    let c66 = m + c66_1;
    stiffness_ortho(c11, c11, c33, c12, c13, c13, c44, c44, c66)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
