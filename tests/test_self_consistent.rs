use approx::assert_relative_eq;
use proptest::prelude::*;
use rockphy::average::hashin_shtrikman;
use rockphy::base::{Bound, PhaseMixture, RockPhysError};
use rockphy::effective::{berryman_self_consistent, oconnell_budiansky, oconnell_budiansky_fluid};
use rockphy::solver::SolverControl;
use serde::Deserialize;
use std::path::Path;

#[derive(Deserialize)]
struct Input {
    #[serde(flatten)]
    mixture: PhaseMixture,

    #[serde(default)]
    control: SolverControl,
}

#[test]
fn test_sandstone_input_file() -> Result<(), RockPhysError> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data").join("sandstone.json");
    let json = std::fs::read_to_string(&path)?;
    let input: Input = serde_json::from_str(&json)?;
    input.mixture.validate()?;
    assert_eq!(input.control.n_max_iterations, 50);
    assert_eq!(input.control.tol_abs_residual, SolverControl::new().tol_abs_residual);

    let (k, g, x, alpha) = input.mixture.columns();
    let (k_sc, g_sc) = berryman_self_consistent(&k, &g, &x, &alpha, &input.control)?;
    assert_relative_eq!(k_sc, 16.140369075872226, max_relative = 1e-8);
    assert_relative_eq!(g_sc, 13.287830290407966, max_relative = 1e-8);

    // the same data is readable without the control section
    let mixture = PhaseMixture::read_json(&path)?;
    assert_eq!(mixture, input.mixture);
    Ok(())
}

#[test]
fn test_dry_cracks_soften_like_oconnell_budiansky() -> Result<(), RockPhysError> {
    let control = SolverControl::new();
    let (k0, g0) = (37.0, 44.0);

    // dry cracks are weaker than fluid-saturated ones
    let (k_dry, g_dry) = oconnell_budiansky(k0, g0, 0.1);
    let (k_sat, g_sat) = oconnell_budiansky_fluid(k0, g0, 2.25, 0.1, 0.01, &control)?;
    assert!(k_sat > k_dry);
    assert!(g_sat > g_dry);
    assert!(k_sat < k0 && g_sat < g0);

    // more porosity in cracks means softer rock in the self-consistent scheme too
    let (k1, g1) = berryman_self_consistent(&[k0, 0.0], &[g0, 0.0], &[0.99, 0.01], &[1.0, 0.05], &control)?;
    let (k2, g2) = berryman_self_consistent(&[k0, 0.0], &[g0, 0.0], &[0.98, 0.02], &[1.0, 0.05], &control)?;
    assert!(k2 < k1 && k1 < k0);
    assert!(g2 < g1 && g1 < g0);
    Ok(())
}

#[test]
fn test_failure_keeps_the_last_iterate() {
    let mut control = SolverControl::new();
    control.n_max_iterations = 1;
    let err = berryman_self_consistent(&[37.0, 2.25], &[44.0, 0.0], &[0.8, 0.2], &[1.0, 0.1], &control)
        .err()
        .unwrap();
    assert!(err.is_convergence_failure());
    let x = err.last_iterate().unwrap();
    assert_eq!(x.len(), 2);
    assert!(x[0] > 0.0 && x[1] > 0.0);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn spherical_composites_lie_within_the_hashin_shtrikman_bounds(
        k1 in 30.0..80.0_f64,
        g1 in 20.0..50.0_f64,
        k2 in 1.0..20.0_f64,
        g2 in 1.0..15.0_f64,
        f in 0.05..0.95_f64,
    ) {
        let control = SolverControl::new();
        let (k_sc, g_sc) = berryman_self_consistent(&[k1, k2], &[g1, g2], &[f, 1.0 - f], &[1.0, 1.0], &control).unwrap();
        let (k_up, g_up) = hashin_shtrikman(f, k1, k2, g1, g2, Bound::Upper).unwrap();
        let (k_lo, g_lo) = hashin_shtrikman(f, k1, k2, g1, g2, Bound::Lower).unwrap();
        let tol = 1e-9;
        prop_assert!(k_sc <= k_up * (1.0 + tol) && k_sc >= k_lo * (1.0 - tol));
        prop_assert!(g_sc <= g_up * (1.0 + tol) && g_sc >= g_lo * (1.0 - tol));
    }

    #[test]
    fn identical_phases_are_returned_unchanged(
        k in 1.0..80.0_f64,
        g in 1.0..50.0_f64,
        f in 0.1..0.9_f64,
        alpha in 0.01..5.0_f64,
    ) {
        let control = SolverControl::new();
        let (k_sc, g_sc) = berryman_self_consistent(&[k, k], &[g, g], &[f, 1.0 - f], &[1.0, alpha], &control).unwrap();
        prop_assert!(f64::abs(k_sc - k) <= 1e-10 * k);
        prop_assert!(f64::abs(g_sc - g) <= 1e-10 * g);
    }
}
