use super::{Contrast, IsotropicLayer};

/// Holds the intercept and gradients of the linearized reflectivity
#[derive(Clone, Copy, Debug)]
pub struct AvoAttributes {
    /// PP intercept (normal incidence reflectivity)
    pub a: f64,

    /// PP gradient following Shuey's form written with the Poisson ratio
    ///
    /// Undefined (NaN or infinite) when the intercept vanishes.
    pub b1: f64,

    /// PP gradient following Castagna's form of Shuey's approximation
    pub b2: f64,

    /// PS gradient (Gonzalez)
    pub e1: f64,

    /// PS gradient using the upper layer's Vs/Vp ratio
    pub e2: f64,
}

/// Computes the AVO intercept and the PP/PS gradients across an interface
///
/// # Input
///
/// * `upper`, `lower` -- the layers above and below the interface
///
/// # Reference
///
/// 1. Shuey RT (1985) A simplification of the Zoeppritz equations, Geophysics 50(4):609-614
/// 2. Castagna JP, Swan HW, Foster DJ (1998) Framework for AVO gradient and intercept
///    interpretation, Geophysics 63(3):948-956
pub fn avo_attributes(upper: &IsotropicLayer, lower: &IsotropicLayer) -> AvoAttributes {
    let m = Contrast::new(upper, lower);
    let a = 0.5 * (m.dvp / m.vp + m.drho / m.rho);

    let poisson = |vp: f64, vs: f64| {
        let r2 = (vp / vs) * (vp / vs);
        (0.5 * r2 - 1.0) / (r2 - 1.0)
    };
    let nu1 = poisson(upper.vp, upper.vs);
    let nu2 = poisson(lower.vp, lower.vs);
    let nu = 0.5 * (nu1 + nu2);
    let dnu = nu2 - nu1;
    let bx = (m.dvp / m.vp) / (m.dvp / m.vp + m.drho / m.rho);
    let ax = bx - 2.0 * (1.0 + bx) * (1.0 - 2.0 * nu) / (1.0 - nu);
    let b1 = ax * a + dnu / ((1.0 - nu) * (1.0 - nu));

    let b2 = -2.0 * m.vs * m.vs * m.drho / (m.vp * m.vp * m.rho) + 0.5 * m.dvp / m.vp
        - 4.0 * m.vs * m.dvs / (m.vp * m.vp);

    let r = m.vs / m.vp;
    let e1 = -0.5 * m.drho / m.rho - r * (m.drho / m.rho + 2.0 * m.dvs / m.vs)
        + r * r * r * (0.5 * m.drho / m.rho + m.dvs / m.vs);
    let e2 = -2.0 * (upper.vs / upper.vp) * (m.drho / m.rho * (0.5 + 0.25 * m.vp / m.vs) + m.dvs / m.vs);

    AvoAttributes { a, b1, b2, e1, e2 }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
