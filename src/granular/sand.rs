use super::hertz_mindlin;
use crate::base::zeta;

/// Interpolates between a high-porosity end member and the mineral point (modified Hashin-Shtrikman)
///
/// ```text
///      ⎛     t            1 - t     ⎞⁻¹   4
/// K = ⎜ ————————————— + ————————————— ⎟   - — Gr
///      ⎝ Ke + 4 Gr/3     K₀ + 4 Gr/3 ⎠     3
///
///      ⎛   t          1 - t  ⎞⁻¹
/// G = ⎜ ——————— + ——————————— ⎟   - ζ(Kr, Gr)
///      ⎝ Ge + ζ      G₀ + ζ  ⎠
/// ```
///
/// where t = φ/φ_end, (Ke, Ge) is the end member, and (Kr, Gr) selects the bound: the end member
/// itself for the lower (softest) bound and the mineral for the upper (stiffest) bound.
pub(crate) fn modified_hashin_shtrikman(
    t: f64,
    k_end: f64,
    g_end: f64,
    k0: f64,
    g0: f64,
    k_ref: f64,
    g_ref: f64,
) -> (f64, f64) {
    let kk = 1.0 / (t / (k_end + 4.0 * g_ref / 3.0) + (1.0 - t) / (k0 + 4.0 * g_ref / 3.0)) - 4.0 * g_ref / 3.0;
    let z = zeta(k_ref, g_ref);
    let gg = 1.0 / (t / (g_end + z) + (1.0 - t) / (g0 + z)) - z;
    (kk, gg)
}

/// Computes the dry moduli of unconsolidated sand (soft-sand or friable-sand model)
///
/// The Hertz-Mindlin pack at the critical porosity is connected to the mineral point with the
/// modified lower Hashin-Shtrikman bound, modelling the sorting of the grains.
///
/// # Input
///
/// * `k0`, `g0` -- moduli of the grain material (GPa)
/// * `phi` -- porosity (0 ≤ φ ≤ φc)
/// * `phic` -- critical porosity
/// * `cn` -- coordination number
/// * `sigma` -- effective stress (MPa)
/// * `f` -- shear reduction factor (see [hertz_mindlin])
///
/// # Reference
///
/// 1. Avseth P, Mukerji T, Mavko G (2010) Quantitative Seismic Interpretation, Cambridge
///    University Press
pub fn soft_sand(k0: f64, g0: f64, phi: f64, phic: f64, cn: f64, sigma: f64, f: f64) -> (f64, f64) {
    let (k_hm, g_hm) = hertz_mindlin(k0, g0, phic, cn, sigma, f);
    modified_hashin_shtrikman(phi / phic, k_hm, g_hm, k0, g0, k_hm, g_hm)
}

/// Computes the dry moduli of sorted sand with the stiff-sand model
///
/// Counterpart of [soft_sand] using the modified upper Hashin-Shtrikman bound.
pub fn stiff_sand(k0: f64, g0: f64, phi: f64, phic: f64, cn: f64, sigma: f64, f: f64) -> (f64, f64) {
    let (k_hm, g_hm) = hertz_mindlin(k0, g0, phic, cn, sigma, f);
    modified_hashin_shtrikman(phi / phic, k_hm, g_hm, k0, g0, k0, g0)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{soft_sand, stiff_sand};
    use crate::granular::hertz_mindlin;
    use approx::assert_relative_eq;

    #[test]
    fn end_members_are_recovered() {
        let (k_hm, g_hm) = hertz_mindlin(36.6, 45.0, 0.4, 8.6, 10.0, 1.0);
        for model in [soft_sand, stiff_sand] {
            let (kk, gg) = model(36.6, 45.0, 0.4, 0.4, 8.6, 10.0, 1.0);
            assert_relative_eq!(kk, k_hm, max_relative = 1e-12);
            assert_relative_eq!(gg, g_hm, max_relative = 1e-12);
            let (kk, gg) = model(36.6, 45.0, 0.0, 0.4, 8.6, 10.0, 1.0);
            assert_relative_eq!(kk, 36.6, max_relative = 1e-12);
            assert_relative_eq!(gg, 45.0, max_relative = 1e-12);
        }
    }

    #[test]
    fn soft_sand_is_softer_than_stiff_sand() {
        let (k_soft, g_soft) = soft_sand(36.6, 45.0, 0.2, 0.4, 8.6, 10.0, 1.0);
        let (k_stiff, g_stiff) = stiff_sand(36.6, 45.0, 0.2, 0.4, 8.6, 10.0, 1.0);
        assert_relative_eq!(k_soft, 5.08119852286946, max_relative = 1e-10);
        assert_relative_eq!(g_soft, 5.719877945897053, max_relative = 1e-10);
        assert_relative_eq!(k_stiff, 15.163441062564715, max_relative = 1e-10);
        assert_relative_eq!(g_stiff, 16.515180978150227, max_relative = 1e-10);
    }
}
