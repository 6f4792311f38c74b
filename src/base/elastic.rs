/// Calculates Poisson's ratio from the bulk and shear moduli
///
/// ```text
///       3K - 2G
/// ν = ——————————
///      6K + 2G
/// ```
#[inline]
pub fn poisson_ratio(kk: f64, gg: f64) -> f64 {
    (3.0 * kk - 2.0 * gg) / (6.0 * kk + 2.0 * gg)
}

/// Calculates Lamé's first parameter λ = K - 2G/3
#[inline]
pub fn lame_lambda(kk: f64, gg: f64) -> f64 {
    kk - 2.0 * gg / 3.0
}

/// Calculates the P-wave modulus M = K + 4G/3
#[inline]
pub fn p_wave_modulus(kk: f64, gg: f64) -> f64 {
    kk + 4.0 * gg / 3.0
}

/// Calculates the Hashin-Shtrikman-Walpole shear auxiliary term
///
/// ```text
///      G   9K + 8G
/// ζ = ——— ————————
///      6   K + 2G
/// ```
///
/// This term appears in the spherical inclusion limit of the shape factors and in
/// the modified Hashin-Shtrikman interpolations of the granular models.
#[inline]
pub fn zeta(kk: f64, gg: f64) -> f64 {
    gg / 6.0 * (9.0 * kk + 8.0 * gg) / (kk + 2.0 * gg)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{lame_lambda, p_wave_modulus, poisson_ratio, zeta};
    use approx::assert_relative_eq;

    #[test]
    fn poisson_ratio_works() {
        // quartz
        assert_relative_eq!(poisson_ratio(36.6, 45.0), 19.8 / 309.6, epsilon = 1e-14);
        // fluid
        assert_eq!(poisson_ratio(2.25, 0.0), 0.5);
        // K = 2G/3 gives ν = 0
        assert_eq!(poisson_ratio(2.0, 3.0), 0.0);
    }

    #[test]
    fn moduli_relations_work() {
        let (kk, gg) = (37.0, 44.0);
        let lambda = lame_lambda(kk, gg);
        assert_relative_eq!(lambda + 2.0 * gg, p_wave_modulus(kk, gg), epsilon = 1e-14);
        let nu = poisson_ratio(kk, gg);
        assert_relative_eq!(lambda / (2.0 * (lambda + gg)), nu, epsilon = 1e-14);
        assert_eq!(zeta(kk, 0.0), 0.0);
    }
}
