use crate::base::{lame_lambda, poisson_ratio, MPA_TO_GPA};
use std::f64::consts::PI;

/// Computes the dry moduli of a random pack of identical spheres under hydrostatic stress (Hertz-Mindlin)
///
/// ```text
///        ⎛ C² (1 - φc)² G₀² σ ⎞ ⅓
/// K_HM = ⎜ ——————————————————— ⎟
///        ⎝  18 π² (1 - ν)²    ⎠
///
///        2 + 3f - ν(1 + 3f) ⎛ 3 C² (1 - φc)² G₀² σ ⎞ ⅓
/// G_HM = —————————————————— ⎜ ————————————————————— ⎟
///           5 (2 - ν)       ⎝   2 π² (1 - ν)²      ⎠
/// ```
///
/// # Input
///
/// * `k0`, `g0` -- moduli of the grain material (GPa)
/// * `phic` -- critical porosity
/// * `cn` -- coordination number (average number of contacts per grain)
/// * `sigma` -- effective stress (MPa)
/// * `f` -- shear reduction factor: 1 for no-slip (rough) contacts and 0 for frictionless (smooth) contacts
///
/// # Output
///
/// Returns `(K_dry, G_dry)` in GPa
///
/// # Reference
///
/// 1. Mavko G, Mukerji T, Dvorkin J (2009) The Rock Physics Handbook, Section 5.5
/// 2. Bachrach R, Avseth P (2008) Rock physics modeling of unconsolidated sands,
///    Geophysics 73(6), E197-E209
pub fn hertz_mindlin(k0: f64, g0: f64, phic: f64, cn: f64, sigma: f64, f: f64) -> (f64, f64) {
    let sigma = sigma * MPA_TO_GPA;
    let nu = poisson_ratio(k0, g0);
    let a = cn * cn * (1.0 - phic) * (1.0 - phic) * g0 * g0 * sigma;
    let b = PI * PI * (1.0 - nu) * (1.0 - nu);
    let k_dry = f64::cbrt(a / (18.0 * b));
    let g_dry = (2.0 + 3.0 * f - nu * (1.0 + 3.0 * f)) / (5.0 * (2.0 - nu)) * f64::cbrt(3.0 * a / (2.0 * b));
    (k_dry, g_dry)
}

/// Computes the dry moduli of a random pack of identical spheres under hydrostatic stress (Walton)
///
/// The smooth (frictionless) and rough (infinite friction) limits are linearly mixed by `f`:
///
/// ```text
/// G = f G_rough + (1 - f) G_smooth,   G_smooth = 3K/5,   G_rough = 3K/5 (5 - 4ν)/(2 - ν)
/// ```
///
/// # Reference
///
/// 1. Walton K (1987) The effective elastic moduli of a random packing of spheres,
///    J. Mech. Phys. Solids 35, 213-226
pub fn walton(k0: f64, g0: f64, phic: f64, cn: f64, sigma: f64, f: f64) -> (f64, f64) {
    let sigma = sigma * MPA_TO_GPA;
    let lambda = lame_lambda(k0, g0);
    let b = (1.0 / g0 + 1.0 / (g0 + lambda)) / (4.0 * PI);
    let kk = f64::cbrt(3.0 * (1.0 - phic) * (1.0 - phic) * cn * cn * sigma / (PI.powi(4) * b * b)) / 6.0;
    let nu = poisson_ratio(k0, g0);
    let g_smooth = 3.0 / 5.0 * kk;
    let g_rough = g_smooth * (5.0 - 4.0 * nu) / (2.0 - nu);
    (kk, f * g_rough + (1.0 - f) * g_smooth)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{hertz_mindlin, walton};
    use approx::assert_relative_eq;

    #[test]
    fn hertz_mindlin_works() {
        let (kk, gg) = hertz_mindlin(36.6, 45.0, 0.4, 8.6, 10.0, 1.0);
        assert_relative_eq!(kk, 1.513047076307085, max_relative = 1e-12);
        assert_relative_eq!(gg, 2.22458813381366, max_relative = 1e-12);
        let (_, gg) = hertz_mindlin(36.6, 45.0, 0.4, 8.6, 10.0, 0.0);
        assert_relative_eq!(gg, 0.9078282457842509, max_relative = 1e-12);
        assert_eq!(hertz_mindlin(36.6, 45.0, 0.4, 8.6, 0.0, 1.0), (0.0, 0.0));
    }

    #[test]
    fn moduli_grow_with_the_cube_root_of_stress() {
        let (k1, g1) = hertz_mindlin(36.6, 45.0, 0.4, 8.6, 10.0, 0.5);
        let (k8, g8) = hertz_mindlin(36.6, 45.0, 0.4, 8.6, 80.0, 0.5);
        assert_relative_eq!(k8 / k1, 2.0, epsilon = 1e-12);
        assert_relative_eq!(g8 / g1, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn walton_matches_hertz_mindlin_limits() {
        for f in [0.0, 0.3, 1.0] {
            let (k_w, g_w) = walton(36.6, 45.0, 0.4, 8.6, 10.0, f);
            let (k_hm, g_hm) = hertz_mindlin(36.6, 45.0, 0.4, 8.6, 10.0, f);
            assert_relative_eq!(k_w, k_hm, max_relative = 1e-12);
            assert_relative_eq!(g_w, g_hm, max_relative = 1e-12);
        }
    }
}
