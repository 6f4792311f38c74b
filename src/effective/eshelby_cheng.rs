use crate::base::{check_fraction, lame_lambda, poisson_ratio, RockPhysError, VtiConstants, SPHERE_ASPECT_CLAMP};
use std::f64::consts::PI;

/// Computes the stiffness of a rock with one set of aligned ellipsoidal cracks (Eshelby-Cheng)
///
/// The cracks are oblate spheroids with normals along x3; thus the result is VTI. The effective
/// stiffness is the isotropic background minus a first order correction in porosity:
///
/// ```text
/// C = C⁰ - φ C¹
/// ```
///
/// where C¹ follows from the Eshelby tensor of the spheroid and the fluid term
/// c = K_f / (3 (K - K_f)). Aspect ratios equal to one are evaluated at 0.999.
///
/// # Input
///
/// * `kk`, `gg` -- moduli of the isotropic matrix (GPa)
/// * `phi` -- crack porosity
/// * `alpha` -- crack aspect ratio (0 < α ≤ 1)
/// * `kf` -- bulk modulus of the fluid (GPa); use 0 for dry cracks
///
/// # Reference
///
/// 1. Cheng CH (1993) Crack models for a transversely anisotropic medium, J. Geophys. Res.
///    98(B1), 675-684
/// 2. Mavko G, Mukerji T, Dvorkin J (2009) The Rock Physics Handbook, Section 4.14
pub fn eshelby_cheng(kk: f64, gg: f64, phi: f64, alpha: f64, kf: f64) -> Result<VtiConstants, RockPhysError> {
    check_fraction("phi", phi)?;
    if !(alpha > 0.0 && alpha <= 1.0) {
        return Err(RockPhysError::InvalidParameter(format!(
            "alpha = {:?} is incorrect; it must be 0.0 < alpha ≤ 1.0",
            alpha
        )));
    }
    if !(kf >= 0.0 && kf < kk) {
        return Err(RockPhysError::InvalidParameter(format!(
            "Kf = {:?} is incorrect; it must be 0.0 ≤ Kf < K = {:?}",
            kf, kk
        )));
    }
    let a = if alpha == 1.0 { SPHERE_ASPECT_CLAMP } else { alpha };
    let lambda = lame_lambda(kk, gg);
    let mu = gg;

    // Eshelby tensor of the oblate spheroid
    let nu = poisson_ratio(kk, gg);
    let r = (1.0 - 2.0 * nu) / (8.0 * PI * (1.0 - nu));
    let q = 3.0 * r / (1.0 - 2.0 * nu);
    let sa = f64::sqrt(1.0 - a * a);
    let ia = 2.0 * PI * a * (f64::acos(a) - a * sa) / (sa * sa * sa);
    let ic = 4.0 * PI - 2.0 * ia;
    let iac = (ic - ia) / (3.0 * sa * sa);
    let iaa = PI - 3.0 * iac / 4.0;
    let iab = iaa / 3.0;
    let s11 = q * iaa + r * ia;
    let s33 = q * (4.0 * PI / 3.0 - 2.0 * iac * a * a) + ic * r;
    let s12 = q * iab - r * ia;
    let s13 = q * iac * a * a - r * ia;
    let s31 = q * iac - r * ic;
    let s1212 = q * iab + r * ia;
    let s1313 = q * (1.0 + a * a) * iac / 2.0 + r * (ia + ic) / 2.0;

    // corrections
    let c = kf / (3.0 * (kk - kf));
    let d = s33 * s11 + s33 * s12 - 2.0 * s31 * s13 - (s11 + s12 + s33 - 1.0 - 3.0 * c)
        - c * (s11 + s12 + 2.0 * (s33 - s13 - s31));
    let e = s33 * s11 - s31 * s13 - (s33 + s11 - 2.0 * c - 1.0) + c * (s31 + s13 - s11 - s33);
    let c11_1 = (lambda * (s31 - s33 + 1.0) + 2.0 * mu * e / (s12 - s11 + 1.0)) / d;
    let c33_1 = ((lambda + 2.0 * mu) * (1.0 - s12 - s11) + 2.0 * lambda * s13 + 4.0 * mu * c) / d;
    let c13_1 = ((lambda + 2.0 * mu) * (s13 + s31) - 4.0 * mu * c + lambda * (s13 - s12 - s11 - s33 + 2.0)) / (2.0 * d);
    let c44_1 = mu / (1.0 - 2.0 * s1313);
    let c66_1 = mu / (1.0 - 2.0 * s1212);
    Ok(VtiConstants {
        c11: lambda + 2.0 * mu - phi * c11_1,
        c33: lambda + 2.0 * mu - phi * c33_1,
        c13: lambda - phi * c13_1,
        c44: mu - phi * c44_1,
        c66: mu - phi * c66_1,
    })
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
