use crate::base::{
    check_non_negative, check_positive, check_same_len, check_scalar_positive, zeta, RockPhysError,
    SPHERE_ASPECT_CLAMP,
};

/// Computes the geometric strain concentration factors P and Q of spheroidal inclusions
///
/// The factors follow Berryman (1980) for oblate (α < 1) and prolate (α > 1) spheroids
/// embedded in a matrix with moduli (Km, Gm). The shape integral θ is
///
/// ```text
///             α
/// θ = ————————————— (arccos α - α √(1-α²))      if α < 1
///      (1 - α²)^1.5
///
///             α
/// θ = ————————————— (α √(α²-1) - arccosh α)     if α > 1
///      (α² - 1)^1.5
/// ```
///
/// Since θ is undefined at α = 1, the general formulas are evaluated with α = 0.999 and the
/// spherical inclusions are then overwritten by the exact closed forms:
///
/// ```text
///      Km + 4Gm/3          Gm + ζ
/// P = ————————————,   Q = ————————,   ζ = Gm/6 (9Km + 8Gm)/(Km + 2Gm)
///      Ki + 4Gm/3          Gi + ζ
/// ```
///
/// # Input
///
/// * `km`, `gm` -- bulk and shear moduli of the matrix (for the self-consistent schemes,
///   these are the trial effective moduli)
/// * `ki`, `gi` -- bulk and shear moduli of the N inclusions
/// * `alpha` -- aspect ratios of the N inclusions
///
/// # Output
///
/// Returns `(p, q)`, both with length N and aligned with `alpha`
///
/// # Reference
///
/// 1. Berryman JG (1980) Long-wavelength propagation in composite elastic media II.
///    Ellipsoidal inclusions, J. Acoust. Soc. Am. 68(6), 1820-1831
pub fn shape_factors(
    km: f64,
    gm: f64,
    ki: &[f64],
    gi: &[f64],
    alpha: &[f64],
) -> Result<(Vec<f64>, Vec<f64>), RockPhysError> {
    check_same_len("Ki, Gi, alpha", &[ki.len(), gi.len(), alpha.len()])?;
    check_scalar_positive("Km", km)?;
    check_scalar_positive("Gm", gm)?;
    check_non_negative("Ki", ki)?;
    check_non_negative("Gi", gi)?;
    check_positive("alpha", alpha)?;
    Ok(shape_factors_unchecked(km, gm, ki, gi, alpha))
}

/// Computes P and Q without validating the input
///
/// The arrays must have the same length. Non-physical matrix moduli (e.g., trial iterates
/// of a solver) yield NaN or Inf entries instead of an error.
pub(crate) fn shape_factors_unchecked(
    km: f64,
    gm: f64,
    ki: &[f64],
    gi: &[f64],
    alpha: &[f64],
) -> (Vec<f64>, Vec<f64>) {
    let n = alpha.len();

    // private copy of the aspect ratios without the α = 1 singularity
    let clamped: Vec<f64> = alpha
        .iter()
        .map(|a| if *a == 1.0 { SPHERE_ASPECT_CLAMP } else { *a })
        .collect();

    // general spheroids
    let rr = gm / (km + 4.0 * gm / 3.0);
    let mut p = vec![0.0; n];
    let mut q = vec![0.0; n];
    for i in 0..n {
        let (pi, qi) = spheroid_pq(km, gm, ki[i], gi[i], clamped[i], rr);
        p[i] = pi;
        q[i] = qi;
    }

    // spheres
    let z = zeta(km, gm);
    for i in 0..n {
        if alpha[i] == 1.0 {
            p[i] = (km + 4.0 * gm / 3.0) / (ki[i] + 4.0 * gm / 3.0);
            q[i] = (gm + z) / (gi[i] + z);
        }
    }
    (p, q)
}

/// Computes the shape integral θ of a spheroid with α ≠ 1
fn shape_integral(a: f64) -> f64 {
    if a < 1.0 {
        let s = 1.0 - a * a;
        a / f64::powf(s, 1.5) * (f64::acos(a) - a * f64::sqrt(s))
    } else {
        let s = a * a - 1.0;
        a / f64::powf(s, 1.5) * (a * f64::sqrt(s) - f64::acosh(a))
    }
}

/// Computes P and Q of a single spheroidal inclusion with α ≠ 1
///
/// `rr` is the matrix term R = Gm/(Km + 4Gm/3).
#[rustfmt::skip]
fn spheroid_pq(km: f64, gm: f64, ki: f64, gi: f64, a: f64, rr: f64) -> (f64, f64) {
    let th = shape_integral(a);
    let f = a * a * (3.0 * th - 2.0) / (1.0 - a * a);
    let aa = gi / gm - 1.0;
    let bb = (ki / km - gi / gm) / 3.0;
    let r = rr;
    let f1 = 1.0 + aa * (1.5 * (f + th) - r * (1.5 * f + 2.5 * th - 4.0 / 3.0));
    let f2 = 1.0 + aa * (1.0 + 1.5 * (f + th) - r * (1.5 * f + 2.5 * th))
        + bb * (3.0 - 4.0 * r)
        + aa * (aa + 3.0 * bb) * (1.5 - 2.0 * r) * (f + th - r * (f - th + 2.0 * th * th));
    let f3 = 1.0 + aa * (1.0 - f - 1.5 * th + r * (f + th));
    let f4 = 1.0 + (aa / 4.0) * (f + 3.0 * th - r * (f - th));
    let f5 = aa * (-f + r * (f + th - 4.0 / 3.0)) + bb * th * (3.0 - 4.0 * r);
    let f6 = 1.0 + aa * (1.0 + f - r * (f + th)) + bb * (1.0 - th) * (3.0 - 4.0 * r);
    let f7 = 2.0 + (aa / 4.0) * (3.0 * f + 9.0 * th - r * (3.0 * f + 5.0 * th)) + bb * th * (3.0 - 4.0 * r);
    let f8 = aa * (1.0 - 2.0 * r + (f / 2.0) * (r - 1.0) + (th / 2.0) * (5.0 * r - 3.0))
        + bb * (1.0 - th) * (3.0 - 4.0 * r);
    let f9 = aa * ((r - 1.0) * f - r * th) + bb * th * (3.0 - 4.0 * r);
    let tiijj = 3.0 * f1 / f2;
    let tijij = tiijj / 3.0 + 2.0 / f3 + 1.0 / f4 + (f4 * f5 + f6 * f7 - f8 * f9) / (f2 * f4);
    let p = tiijj / 3.0;
    let q = (tijij - p) / 5.0;
    (p, q)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
