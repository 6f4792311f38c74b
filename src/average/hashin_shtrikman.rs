use crate::base::{check_fraction, check_non_negative, Bound, RockPhysError};

/// Computes the Hashin-Shtrikman bounds of the moduli of a two-phase composite
///
/// Upper bound (phase 1 as reference):
///
/// ```text
///                    1 - f
/// K = K1 + ———————————————————————————
///          (K2 - K1)⁻¹ + f (K1 + 4G1/3)⁻¹
///
///                      1 - f                         K1 + 2G1
/// G = G1 + ———————————————————————————,   T = ————————————————————
///          (G2 - G1)⁻¹ + 2 f T                 5 G1 (K1 + 4G1/3)
/// ```
///
/// The lower bound swaps the roles of the phases, with weight f ↔ 1 - f.
///
/// # Input
///
/// * `f` -- volume fraction of phase 1 (the stiff material)
/// * `k1`, `g1` -- bulk and shear moduli of phase 1 (stiff)
/// * `k2`, `g2` -- bulk and shear moduli of phase 2 (soft)
/// * `bound` -- upper or lower bound
///
/// # Output
///
/// Returns `(k, g)`
///
/// **Note:** The phases are not reordered; phase 1 must be the stiffer one for the upper
/// bound to be an upper bound. The zero-shear soft phase (fluid or empty pore) yields a
/// NaN lower shear bound, whose limit value is zero.
pub fn hashin_shtrikman(f: f64, k1: f64, k2: f64, g1: f64, g2: f64, bound: Bound) -> Result<(f64, f64), RockPhysError> {
    check_fraction("f", f)?;
    check_non_negative("moduli", &[k1, k2, g1, g2])?;
    let (kk, gg) = match bound {
        Bound::Upper => {
            let kk = k1 + (1.0 - f) / (1.0 / (k2 - k1) + f / (k1 + 4.0 * g1 / 3.0));
            let temp = (k1 + 2.0 * g1) / (5.0 * g1 * (k1 + 4.0 * g1 / 3.0));
            let gg = g1 + (1.0 - f) / (1.0 / (g2 - g1) + 2.0 * f * temp);
            (kk, gg)
        }
        Bound::Lower => {
            let kk = k2 + f / (1.0 / (k1 - k2) + (1.0 - f) / (k2 + 4.0 * g2 / 3.0));
            let temp = (k2 + 2.0 * g2) / (5.0 * g2 * (k2 + 4.0 * g2 / 3.0));
            let gg = g2 + f / (1.0 / (g1 - g2) + 2.0 * (1.0 - f) * temp);
            (kk, gg)
        }
    };
    Ok((kk, gg))
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::hashin_shtrikman;
    use crate::average::voigt_reuss_hill;
    use crate::base::Bound;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn hashin_shtrikman_captures_errors() {
        assert_eq!(
            hashin_shtrikman(1.1, 36.0, 2.2, 45.0, 0.0, Bound::Upper)
                .err()
                .unwrap()
                .to_string(),
            "invalid parameter: f = 1.1 is incorrect; it must be 0.0 ≤ f ≤ 1.0"
        );
        assert!(hashin_shtrikman(0.5, 36.0, -2.2, 45.0, 0.0, Bound::Lower).is_err());
    }

    #[test]
    fn end_members_are_recovered() {
        let (k1, k2, g1, g2) = (36.0, 21.0, 45.0, 7.0);
        for bound in [Bound::Upper, Bound::Lower] {
            let (kk, gg) = hashin_shtrikman(1.0, k1, k2, g1, g2, bound).unwrap();
            assert_relative_eq!(kk, k1, epsilon = 1e-13);
            assert_relative_eq!(gg, g1, epsilon = 1e-13);
            let (kk, gg) = hashin_shtrikman(0.0, k1, k2, g1, g2, bound).unwrap();
            assert_relative_eq!(kk, k2, epsilon = 1e-13);
            assert_relative_eq!(gg, g2, epsilon = 1e-13);
        }
    }

    #[test]
    fn dry_pores_work() {
        let (ku, gu) = hashin_shtrikman(0.9, 36.0, 0.0, 45.0, 0.0, Bound::Upper).unwrap();
        assert_relative_eq!(ku, 30.566037735849058, epsilon = 1e-12);
        assert_relative_eq!(gu, 36.46919431279621, epsilon = 1e-12);
        let (kl, gl) = hashin_shtrikman(0.9, 36.0, 0.0, 45.0, 0.0, Bound::Lower).unwrap();
        assert_eq!(kl, 0.0);
        assert!(gl.is_nan());
    }

    proptest! {
        #[test]
        fn upper_is_greater_than_lower(
            f in 0.0f64..=1.0,
            (k1, k2) in (0.1f64..100.0, 0.01f64..1.0).prop_map(|(k1, s)| (k1, s * k1)),
            (g1, g2) in (0.1f64..100.0, 0.01f64..1.0).prop_map(|(g1, s)| (g1, s * g1)),
        ) {
            let (ku, gu) = hashin_shtrikman(f, k1, k2, g1, g2, Bound::Upper).unwrap();
            let (kl, gl) = hashin_shtrikman(f, k1, k2, g1, g2, Bound::Lower).unwrap();
            let tol = 1e-12 * (k1 + g1);
            prop_assert!(ku >= kl - tol);
            prop_assert!(gu >= gl - tol);
            // the bounds are tighter than Voigt-Reuss
            let (kv, kr, _) = voigt_reuss_hill(&[f, 1.0 - f], &[k1, k2]).unwrap();
            prop_assert!(ku <= kv + tol);
            prop_assert!(kl >= kr - tol);
        }
    }
}
