use super::{Contrast, IsotropicLayer};

/// Holds the results of the Aki-Richards approximation
#[derive(Clone, Copy, Debug)]
pub struct AkiRichards {
    /// PP reflection coefficient
    pub rpp: f64,

    /// PS reflection coefficient
    pub rps: f64,

    /// PP reflectivity at normal incidence
    pub intercept: f64,

    /// Sum of the sin²θ and tan²θ coefficients
    pub gradient: f64,
}

/// Computes the PP and PS reflectivity for small contrasts with the Aki-Richards approximation
///
/// ```text
/// Rpp(θ) = R₀ + M sin²θ + N tan²θ
///
///      1 ⎛ Δρ   ΔVp ⎞          ⎛ Vs ⎞² ⎛ 2ΔVs   Δρ ⎞        1 ΔVp
/// R₀ = — ⎜ —— + ——— ⎟,  M = -2 ⎜ —— ⎟  ⎜ ———— + —— ⎟,  N = — ———
///      2 ⎝ ρ    Vp  ⎠          ⎝ Vp ⎠  ⎝  Vs    ρ  ⎠        2  Vp
/// ```
///
/// # Input
///
/// * `theta` -- angle of incidence (degrees)
/// * `upper`, `lower` -- the layers above and below the interface
///
/// # Reference
///
/// 1. Aki K, Richards PG (1980) Quantitative Seismology, W.H. Freeman
pub fn aki_richards(theta: f64, upper: &IsotropicLayer, lower: &IsotropicLayer) -> AkiRichards {
    let theta = theta.to_radians();
    let m = Contrast::new(upper, lower);
    let (sin, cos) = f64::sin_cos(theta);
    let tan = f64::tan(theta);

    let intercept = 0.5 * (m.drho / m.rho + m.dvp / m.vp);
    let mm = -2.0 * (m.vs / m.vp) * (m.vs / m.vp) * (2.0 * m.dvs / m.vs + m.drho / m.rho);
    let nn = 0.5 * m.dvp / m.vp;
    let rpp = intercept + mm * sin * sin + nn * tan * tan;

    // converted wave
    let p = sin / upper.vp;
    let cos_s = f64::sqrt(1.0 - sin * sin * (upper.vs * upper.vs) / (upper.vp * upper.vp));
    let vs2 = m.vs * m.vs;
    let q = 2.0 * vs2 * cos / m.vp * cos_s / m.vs;
    let rps = -0.5 * p * m.vp / cos_s
        * ((1.0 - 2.0 * vs2 * p * p + q) * m.drho / m.rho - (4.0 * p * p * vs2 - 2.0 * q) * m.dvs / m.vs);

    AkiRichards {
        rpp,
        rps,
        intercept,
        gradient: mm + nn,
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::aki_richards;
    use crate::avo::IsotropicLayer;
    use approx::assert_relative_eq;

    #[test]
    fn normal_incidence_gives_the_intercept() {
        let upper = IsotropicLayer::new(3000.0, 1500.0, 2.4);
        let lower = IsotropicLayer::new(3300.0, 1800.0, 2.5);
        let res = aki_richards(0.0, &upper, &lower);
        assert_eq!(res.rpp, res.intercept);
        assert_eq!(res.rps, 0.0);
        assert_relative_eq!(res.intercept, 0.5 * (0.1 / 2.45 + 300.0 / 3150.0), epsilon = 1e-15);
    }

    #[test]
    fn identical_layers_do_not_reflect() {
        let layer = IsotropicLayer::new(3000.0, 1500.0, 2.4);
        let res = aki_richards(30.0, &layer, &layer);
        assert_eq!(res.rpp, 0.0);
        assert_eq!(res.rps, 0.0);
        assert_eq!(res.gradient, 0.0);
    }

    #[test]
    fn small_angles_follow_the_two_term_approximation() {
        let upper = IsotropicLayer::new(3000.0, 1500.0, 2.4);
        let lower = IsotropicLayer::new(2800.0, 1600.0, 2.3);
        let res = aki_richards(5.0, &upper, &lower);
        let s2 = f64::powi(f64::sin(5.0_f64.to_radians()), 2);
        assert_relative_eq!(res.rpp, res.intercept + res.gradient * s2, epsilon = 1e-5);
    }
}
