use serde::{Deserialize, Serialize};

/// Holds the properties of an isotropic elastic layer
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct IsotropicLayer {
    /// P-wave velocity
    pub vp: f64,

    /// S-wave velocity
    pub vs: f64,

    /// Density
    pub rho: f64,
}

impl IsotropicLayer {
    /// Allocates a new instance
    pub fn new(vp: f64, vs: f64, rho: f64) -> Self {
        IsotropicLayer { vp, vs, rho }
    }

    /// Returns the P-wave (acoustic) impedance ρ Vp
    pub fn p_impedance(&self) -> f64 {
        self.rho * self.vp
    }
}

/// Holds the averages and contrasts of the properties across an interface
///
/// The contrasts are Δ = lower - upper and the averages are (upper + lower)/2.
pub(crate) struct Contrast {
    pub vp: f64,
    pub vs: f64,
    pub rho: f64,
    pub dvp: f64,
    pub dvs: f64,
    pub drho: f64,
}

impl Contrast {
    pub(crate) fn new(upper: &IsotropicLayer, lower: &IsotropicLayer) -> Self {
        Contrast {
            vp: 0.5 * (upper.vp + lower.vp),
            vs: 0.5 * (upper.vs + lower.vs),
            rho: 0.5 * (upper.rho + lower.rho),
            dvp: lower.vp - upper.vp,
            dvs: lower.vs - upper.vs,
            drho: lower.rho - upper.rho,
        }
    }
}
