use crate::base::{poisson_ratio, MPA_TO_GPA};
use std::f64::consts::PI;

/// Computes the dry moduli of a pack of initially bonded spheres (Digby)
///
/// The ratio x = d/R between the contact radius and the grain radius solves the cubic
///
/// ```text
///      3              3 π (1 - ν) σ
/// x³ + — a² x  = ————————————————
///      2           2 C (1 - φ) G₀
/// ```
///
/// where a = `a_r` is the ratio of the initially bonded radius to the grain radius. Then, with
/// b = √(x² + a²):
///
/// ```text
///        4 G₀ b          8 G₀ a          C (1 - φ) Sn          C (1 - φ) (Sn + 1.5 St)
/// Sn = ——————————,  St = ——————————,  K = ————————————,   G = ——————————————————————————
///        1 - ν           2 - ν             12 π                       20 π
/// ```
///
/// # Input
///
/// * `k0`, `g0` -- moduli of the grain material (GPa)
/// * `phi` -- porosity
/// * `cn` -- coordination number
/// * `sigma` -- effective stress (MPa)
/// * `a_r` -- ratio of the initially bonded radius to the grain radius
///
/// # Reference
///
/// 1. Digby PJ (1981) The effective elastic moduli of porous granular rocks, J. Appl. Mech.
///    48, 803-808
pub fn digby(k0: f64, g0: f64, phi: f64, cn: f64, sigma: f64, a_r: f64) -> (f64, f64) {
    let sigma = sigma * MPA_TO_GPA;
    let nu = poisson_ratio(k0, g0);
    let rhs = 3.0 * PI * (1.0 - nu) * sigma / (2.0 * cn * (1.0 - phi) * g0);
    let x = cubic_root(1.5 * a_r * a_r, rhs);
    let b = f64::sqrt(x * x + a_r * a_r);
    let sn = 4.0 * g0 * b / (1.0 - nu);
    let st = 8.0 * g0 * a_r / (2.0 - nu);
    let kk = cn * (1.0 - phi) * sn / (12.0 * PI);
    let gg = cn * (1.0 - phi) * (sn + 1.5 * st) / (20.0 * PI);
    (kk, gg)
}

/// Returns the real root of x³ + p x - q = 0 with p ≥ 0
///
/// The cubic is monotonic for p ≥ 0; thus the root is unique and has the sign of q.
/// Cardano's formula gives the first estimate, which is polished by Newton's method.
fn cubic_root(p: f64, q: f64) -> f64 {
    let d = f64::sqrt(q * q / 4.0 + p * p * p / 27.0);
    let mut x = f64::cbrt(q / 2.0 + d) + f64::cbrt(q / 2.0 - d);
    for _ in 0..3 {
        let df = 3.0 * x * x + p;
        if df == 0.0 {
            break;
        }
        x -= (x * x * x + p * x - q) / df;
    }
    x
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{cubic_root, digby};
    use crate::granular::hertz_mindlin;
    use approx::assert_relative_eq;

    #[test]
    fn cubic_root_works() {
        for (p, q) in [(0.0, 8.0), (1.5e-4, 1e-3), (1.5, 1e-9), (3.0, 0.0), (0.0, 0.0)] {
            let x = cubic_root(p, q);
            assert!(x >= 0.0);
            assert!(f64::abs(x * x * x + p * x - q) <= 1e-15 * f64::max(1.0, q));
        }
        assert_relative_eq!(cubic_root(0.0, 8.0), 2.0, epsilon = 1e-15);
    }

    #[test]
    fn digby_works() {
        let (kk, gg) = digby(36.6, 45.0, 0.36, 9.0, 10.0, 0.01);
        assert_relative_eq!(kk, 1.6283926874939696, max_relative = 1e-10);
        assert_relative_eq!(gg, 1.2327296425828724, max_relative = 1e-10);
    }

    #[test]
    fn unbonded_pack_reduces_to_frictionless_hertz_mindlin_bulk() {
        // with a = 0, Digby's bulk modulus equals the Hertz-Mindlin one
        let (kk, gg) = digby(36.6, 45.0, 0.36, 9.0, 10.0, 0.0);
        let (k_hm, _) = hertz_mindlin(36.6, 45.0, 0.36, 9.0, 10.0, 0.0);
        assert_relative_eq!(kk, k_hm, max_relative = 1e-12);
        assert_relative_eq!(gg, 0.6 * kk, max_relative = 1e-12);
    }
}
