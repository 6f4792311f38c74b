use super::modified_hashin_shtrikman;
use crate::base::{poisson_ratio, CementScheme};
use std::f64::consts::PI;

/// Computes the dry moduli of a cemented sphere pack (contact cement model)
///
/// The cement layer radius ratio α depends on the deposition scheme:
///
/// ```text
///             ⎛     φc - φ     ⎞ ¼                 ⎛ 2 (φc - φ) ⎞ ½
/// α = 2 ⎜ ——————————————— ⎟    (contacts),  α = ⎜ ——————————— ⎟    (coating)
///             ⎝ 3 C (1 - φc) ⎠                     ⎝ 3 (1 - φc) ⎠
/// ```
///
/// and the normal and tangential stiffness factors Sn and St are fitted quadratics in α.
///
/// # Input
///
/// * `k0`, `g0` -- moduli of the grain material (GPa)
/// * `kc`, `gc` -- moduli of the cement (GPa)
/// * `phi` -- porosity (φ ≤ φc)
/// * `phic` -- critical porosity
/// * `cn` -- coordination number
/// * `scheme` -- where the cement is deposited
///
/// # Reference
///
/// 1. Dvorkin J, Nur A (1996) Elasticity of high-porosity sandstones: Theory for two North
///    Sea data sets, Geophysics 61, 1363-1370
#[allow(clippy::too_many_arguments)]
pub fn contact_cement(
    k0: f64,
    g0: f64,
    kc: f64,
    gc: f64,
    phi: f64,
    phic: f64,
    cn: f64,
    scheme: CementScheme,
) -> (f64, f64) {
    let nu0 = poisson_ratio(k0, g0);
    let nuc = poisson_ratio(kc, gc);
    let alpha = match scheme {
        CementScheme::AtContacts => 2.0 * f64::powf((phic - phi) / (3.0 * cn * (1.0 - phic)), 0.25),
        CementScheme::GrainCoating => f64::sqrt(2.0 * (phic - phi) / (3.0 * (1.0 - phic))),
    };

    // normal stiffness factor
    let lambda_n = 2.0 * gc * (1.0 - nu0) * (1.0 - nuc) / (PI * g0 * (1.0 - 2.0 * nuc));
    let n1 = -0.024153 * f64::powf(lambda_n, -1.3646);
    let n2 = 0.20405 * f64::powf(lambda_n, -0.89008);
    let n3 = 0.00024649 * f64::powf(lambda_n, -1.9864);
    let sn = n1 * alpha * alpha + n2 * alpha + n3;

    // tangential stiffness factor
    let lambda_t = gc / (PI * g0);
    let nu2 = nu0 * nu0;
    let t1 = -1e-2 * (2.26 * nu2 + 2.07 * nu0 + 2.3) * f64::powf(lambda_t, 0.079 * nu2 + 0.1754 * nu0 - 1.342);
    let t2 = (0.0573 * nu2 + 0.0937 * nu0 + 0.202) * f64::powf(lambda_t, 0.0274 * nu2 + 0.0529 * nu0 - 0.8765);
    let t3 = 1e-4 * (9.654 * nu2 + 4.945 * nu0 + 3.1) * f64::powf(lambda_t, 0.01867 * nu2 + 0.4011 * nu0 - 1.8186);
    let st = t1 * alpha * alpha + t2 * alpha + t3;

    let k_dry = cn * (1.0 - phic) * (kc + 4.0 * gc / 3.0) * sn / 6.0;
    let g_dry = 3.0 * k_dry / 5.0 + 3.0 * cn * (1.0 - phic) * gc * st / 20.0;
    (k_dry, g_dry)
}

/// Computes the dry moduli of sandstones with a constant amount of contact cement (constant cement model)
///
/// The contact cement end member at porosity φb is connected to the mineral point with the
/// modified lower Hashin-Shtrikman bound, modelling sorting at constant cementation.
///
/// # Reference
///
/// 1. Avseth P, Dvorkin J, Mavko G, Rykkje J (2000) Rock physics diagnostic of North Sea
///    sands, Geophys. Res. Lett. 27, 2761-2764
#[allow(clippy::too_many_arguments)]
pub fn constant_cement(
    k0: f64,
    g0: f64,
    kc: f64,
    gc: f64,
    phi: f64,
    phi_b: f64,
    phic: f64,
    cn: f64,
    scheme: CementScheme,
) -> (f64, f64) {
    let (k_b, g_b) = contact_cement(k0, g0, kc, gc, phi_b, phic, cn, scheme);
    modified_hashin_shtrikman(phi / phi_b, k_b, g_b, k0, g0, k_b, g_b)
}

/// Computes the dry moduli of sandstones with increasing cementation (increasing cement model)
///
/// The contact cement end member at porosity φb is connected to the mineral point with the
/// modified upper Hashin-Shtrikman bound.
///
/// # Reference
///
/// 1. Avseth P, Mukerji T, Mavko G (2010) Quantitative Seismic Interpretation, Cambridge
///    University Press
#[allow(clippy::too_many_arguments)]
pub fn increasing_cement(
    k0: f64,
    g0: f64,
    kc: f64,
    gc: f64,
    phi: f64,
    phi_b: f64,
    phic: f64,
    cn: f64,
    scheme: CementScheme,
) -> (f64, f64) {
    let (k_b, g_b) = contact_cement(k0, g0, kc, gc, phi_b, phic, cn, scheme);
    modified_hashin_shtrikman(phi / phi_b, k_b, g_b, k0, g0, k0, g0)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{constant_cement, contact_cement, increasing_cement};
    use crate::base::CementScheme;
    use approx::assert_relative_eq;

    #[test]
    fn contact_cement_works() {
        let (kk, gg) = contact_cement(36.6, 45.0, 36.6, 45.0, 0.35, 0.4, 8.6, CementScheme::AtContacts);
        assert_relative_eq!(kk, 11.241203543601825, max_relative = 1e-10);
        assert_relative_eq!(gg, 15.345478318451086, max_relative = 1e-10);
        let (kk, gg) = contact_cement(36.6, 45.0, 36.6, 45.0, 0.35, 0.4, 8.6, CementScheme::GrainCoating);
        assert_relative_eq!(kk, 5.792057211985882, max_relative = 1e-10);
        assert_relative_eq!(gg, 7.996023912233923, max_relative = 1e-10);
    }

    #[test]
    fn more_cement_gives_stiffer_rock() {
        let scheme = CementScheme::GrainCoating;
        let (k1, g1) = contact_cement(36.6, 45.0, 36.6, 45.0, 0.38, 0.4, 8.6, scheme);
        let (k2, g2) = contact_cement(36.6, 45.0, 36.6, 45.0, 0.34, 0.4, 8.6, scheme);
        assert!(k2 > k1);
        assert!(g2 > g1);
    }

    #[test]
    fn cement_trends_work() {
        let scheme = CementScheme::GrainCoating;
        let (kk, gg) = constant_cement(36.6, 45.0, 36.6, 45.0, 0.2, 0.35, 0.4, 8.6, scheme);
        assert_relative_eq!(kk, 12.170630001799026, max_relative = 1e-10);
        assert_relative_eq!(gg, 14.602530510615695, max_relative = 1e-10);
        let (kk, gg) = increasing_cement(36.6, 45.0, 36.6, 45.0, 0.2, 0.35, 0.4, 8.6, scheme);
        assert_relative_eq!(kk, 16.208299085026553, max_relative = 1e-10);
        assert_relative_eq!(gg, 19.063131216414902, max_relative = 1e-10);

        // both trends start at the contact cement end member
        let (k_b, g_b) = contact_cement(36.6, 45.0, 36.6, 45.0, 0.35, 0.4, 8.6, scheme);
        let (kk, gg) = constant_cement(36.6, 45.0, 36.6, 45.0, 0.35, 0.35, 0.4, 8.6, scheme);
        assert_relative_eq!(kk, k_b, max_relative = 1e-12);
        assert_relative_eq!(gg, g_b, max_relative = 1e-12);
        let (kk, gg) = increasing_cement(36.6, 45.0, 36.6, 45.0, 0.35, 0.35, 0.4, 8.6, scheme);
        assert_relative_eq!(kk, k_b, max_relative = 1e-12);
        assert_relative_eq!(gg, g_b, max_relative = 1e-12);
    }
}
