use super::IsotropicLayer;

/// Computes the exact PP and PS reflection coefficients from the Zoeppritz equations
///
/// The ray parameter is p = sin(θ)/Vp₁ and the transmitted/converted angles follow Snell's law.
///
/// # Input
///
/// * `theta` -- angle of incidence (degrees)
/// * `upper`, `lower` -- the layers above and below the interface
///
/// # Output
///
/// Returns `(rpp, rps)`. Beyond a critical angle the transmitted angles are undefined and
/// the coefficients are NaN.
///
/// # Reference
///
/// 1. Mavko G, Mukerji T, Dvorkin J (2009) The Rock Physics Handbook, 2nd ed., Cambridge, Section 3.4
pub fn zoeppritz(theta: f64, upper: &IsotropicLayer, lower: &IsotropicLayer) -> (f64, f64) {
    let (vp1, vs1, rho1) = (upper.vp, upper.vs, upper.rho);
    let (vp2, vs2, rho2) = (lower.vp, lower.vs, lower.rho);

    let theta1 = theta.to_radians();
    let p = f64::sin(theta1) / vp1;
    let theta2 = f64::asin(p * vp2);
    let phi1 = f64::asin(p * vs1);
    let phi2 = f64::asin(p * vs2);

    let (cos_t1, cos_t2) = (f64::cos(theta1), f64::cos(theta2));
    let (cos_p1, cos_p2) = (f64::cos(phi1), f64::cos(phi2));
    let sin2_p1 = f64::powi(f64::sin(phi1), 2);
    let sin2_p2 = f64::powi(f64::sin(phi2), 2);

    let a = rho2 * (1.0 - 2.0 * sin2_p2) - rho1 * (1.0 - 2.0 * sin2_p1);
    let b = rho2 * (1.0 - 2.0 * sin2_p2) + 2.0 * rho1 * sin2_p1;
    let c = rho1 * (1.0 - 2.0 * sin2_p1) + 2.0 * rho2 * sin2_p2;
    let d = 2.0 * (rho2 * vs2 * vs2 - rho1 * vs1 * vs1);

    let e = b * cos_t1 / vp1 + c * cos_t2 / vp2;
    let f = b * cos_p1 / vs1 + c * cos_p2 / vs2;
    let g = a - d * cos_t1 / vp1 * cos_p2 / vs2;
    let h = a - d * cos_t2 / vp2 * cos_p2 / vs2;
    let dd = e * f + g * h * p * p;

    let rpp = ((b * cos_t1 / vp1 - c * cos_t2 / vp2) * f - (a + d * cos_t1 / vp1 * cos_p2 / vs2) * h * p * p) / dd;
    let rps = -2.0 * cos_t1 / vp1 * (a * b + c * d * cos_t2 / vp2 * cos_p2 / vs2) * p * vp1 / (vs1 * dd);
    (rpp, rps)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
