use super::{contact_cement, hertz_mindlin, increasing_cement, modified_hashin_shtrikman};
use crate::average::hashin_shtrikman;
use crate::base::{check_fraction, check_scalar_positive, Bound, CementScheme, Mixing, RockPhysError};
use serde::{Deserialize, Serialize};

/// Holds the parameters of the patchy cement model
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct PatchyCement {
    /// Bulk modulus of the grain material (GPa)
    pub k0: f64,

    /// Shear modulus of the grain material (GPa)
    pub g0: f64,

    /// Bulk modulus of the cement (GPa)
    pub kc: f64,

    /// Shear modulus of the cement (GPa)
    pub gc: f64,

    /// Critical (depositional) porosity
    pub phic: f64,

    /// Coordination number
    pub cn: f64,

    /// Effective stress acting on the unconsolidated sand (MPa)
    pub sigma: f64,

    /// Shear reduction factor of the unconsolidated sand
    pub f_slip: f64,

    /// Cement fraction of the cemented sand; its porosity is φc - v_cem
    pub v_cem: f64,

    /// Cement fraction above which the increasing cement model replaces the contact cement model
    pub v_ci: f64,

    /// Where the cement is deposited
    pub scheme: CementScheme,

    /// How the cemented and unconsolidated sands are mixed
    pub mixing: Mixing,
}

impl PatchyCement {
    /// Allocates a new instance with the usual quartz-cemented sandstone parameters
    ///
    /// Uses φc = 0.4, C = 8.6, σ = 20 MPa, f = 0.5, v_cem = 0.1, v_ci = 0.1, grain coating
    /// cement and stiff mixing.
    pub fn new(k0: f64, g0: f64, kc: f64, gc: f64) -> Self {
        PatchyCement {
            k0,
            g0,
            kc,
            gc,
            phic: 0.4,
            cn: 8.6,
            sigma: 20.0,
            f_slip: 0.5,
            v_cem: 0.1,
            v_ci: 0.1,
            scheme: CementScheme::GrainCoating,
            mixing: Mixing::Stiff,
        }
    }

    /// Validates all data
    pub fn validate(&self) -> Result<(), RockPhysError> {
        check_scalar_positive("k0", self.k0)?;
        check_scalar_positive("g0", self.g0)?;
        check_scalar_positive("kc", self.kc)?;
        check_scalar_positive("gc", self.gc)?;
        check_scalar_positive("cn", self.cn)?;
        check_fraction("phic", self.phic)?;
        check_fraction("f_slip", self.f_slip)?;
        if !(self.v_cem > 0.0 && self.v_cem < self.phic) {
            return Err(RockPhysError::InvalidParameter(format!(
                "v_cem = {:?} is incorrect; it must be 0.0 < v_cem < phic = {:?}",
                self.v_cem, self.phic
            )));
        }
        if !(self.v_ci > 0.0 && self.v_ci < self.phic) {
            return Err(RockPhysError::InvalidParameter(format!(
                "v_ci = {:?} is incorrect; it must be 0.0 < v_ci < phic = {:?}",
                self.v_ci, self.phic
            )));
        }
        if !(self.sigma >= 0.0) {
            return Err(RockPhysError::InvalidParameter(format!(
                "sigma = {:?} is incorrect; it must be ≥ 0.0",
                self.sigma
            )));
        }
        Ok(())
    }

    /// Returns the moduli of the unconsolidated end member (Hertz-Mindlin at φc)
    pub fn unconsolidated(&self) -> (f64, f64) {
        hertz_mindlin(self.k0, self.g0, self.phic, self.cn, self.sigma, self.f_slip)
    }

    /// Returns the moduli of the cemented end member at porosity φc - v_cem
    ///
    /// The contact cement model is used up to v_ci; beyond that, the increasing cement model
    /// continues from the contact cement point at φc - v_ci.
    pub fn cemented(&self) -> (f64, f64) {
        let (k0, g0, kc, gc) = (self.k0, self.g0, self.kc, self.gc);
        let phi = self.phic - self.v_cem;
        if self.v_cem <= self.v_ci {
            contact_cement(k0, g0, kc, gc, phi, self.phic, self.cn, self.scheme)
        } else {
            let phi_b = self.phic - self.v_ci;
            increasing_cement(k0, g0, kc, gc, phi, phi_b, self.phic, self.cn, self.scheme)
        }
    }

    /// Computes the dry moduli of the patchy cemented sandstone
    ///
    /// The cemented and unconsolidated end members are first mixed with the Hashin-Shtrikman
    /// bounds (upper bound for stiff mixing, with the cemented sand as the shell; lower bound
    /// for soft mixing). The mixture at φc is then connected to the mineral point with the
    /// modified lower Hashin-Shtrikman bound.
    ///
    /// # Input
    ///
    /// * `f` -- volume fraction of cemented sand in the mixture
    /// * `phi` -- porosity (0 ≤ φ ≤ φc)
    ///
    /// # Reference
    ///
    /// 1. Avseth P, Skjei N, Mavko G (2016) Rock-physics modeling of stress sensitivity and 4D
    ///    time-shifts in patchy cemented sandstones, The Leading Edge 35, 868-878
    pub fn moduli(&self, f: f64, phi: f64) -> Result<(f64, f64), RockPhysError> {
        self.validate()?;
        check_fraction("phi", phi)?;
        let (k_unc, g_unc) = self.unconsolidated();
        let (k_cem, g_cem) = self.cemented();
        let bound = match self.mixing {
            Mixing::Stiff => Bound::Upper,
            Mixing::Soft => Bound::Lower,
        };
        let (kp, gp) = hashin_shtrikman(f, k_cem, k_unc, g_cem, g_unc, bound)?;
        Ok(modified_hashin_shtrikman(phi / self.phic, kp, gp, self.k0, self.g0, kp, gp))
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
