use crate::base::{check_scalar_non_negative, check_scalar_positive, poisson_ratio, RockPhysError};
use crate::solver::{solve, ResidualFunction, Solution, SolverControl};
use std::f64::consts::PI;

/// Computes the dry moduli of a solid with randomly oriented penny-shaped cracks (O'Connell-Budiansky)
///
/// Self-consistent approximation for dry cracks with vanishing aspect ratio:
///
/// ```text
/// ν = ν₀ (1 - 16 ε / 9)
///
///            16 (1 - ν²) ε                  32 (1 - ν)(5 - ν) ε
/// K = K₀ (1 - ——————————————),   G = G₀ (1 - ————————————————————)
///             9 (1 - 2ν)                        45 (2 - ν)
/// ```
///
/// # Input
///
/// * `k0`, `g0` -- moduli of the uncracked solid (GPa)
/// * `crd` -- crack density ε
///
/// # Output
///
/// Returns `(K_dry, G_dry)`
///
/// # Reference
///
/// 1. O'Connell RJ, Budiansky B (1974) Seismic velocities in dry and saturated cracked
///    solids, J. Geophys. Res. 79(35), 5412-5426
pub fn oconnell_budiansky(k0: f64, g0: f64, crd: f64) -> (f64, f64) {
    let nu0 = poisson_ratio(k0, g0);
    let nu = nu0 * (1.0 - 16.0 * crd / 9.0);
    let k_dry = k0 * (1.0 - 16.0 * (1.0 - nu * nu) * crd / (9.0 * (1.0 - 2.0 * nu)));
    let g_dry = g0 * (1.0 - 32.0 * (1.0 - nu) * (5.0 - nu) * crd / (45.0 * (2.0 - nu)));
    (k_dry, g_dry)
}

/// Holds the fixed parameters of the O'Connell-Budiansky equations for fluid-saturated cracks
///
/// The unknowns are x = (ν, D), i.e., the effective Poisson's ratio and the fluid
/// saturation parameter, and the residuals are
///
/// ```text
///       45 (ν₀ - ν)          (2 - ν)
/// R₀ = ———— ————————— ——————————————————————————————— - ε
///       16   (1 - ν²)  D (1 + 3ν₀)(2 - ν) - 2 (1 - 2ν₀)
///
///                 9 (1 - 2ν)     3 w            9 (1 - 2ν)
/// R₁ = ε D² - (ε + ——————————— + ————) D + ——— ——————————
///                 16 (1 - ν₀²)   4 π        16  (1 - ν₀²)
/// ```
///
/// where ε is the crack density and w = K_fl / (α K₀) is the softness indicator.
pub struct OConnellBudianskyFluid {
    crd: f64,
    nu0: f64,
    w: f64,
}

impl OConnellBudianskyFluid {
    /// Allocates a new instance
    ///
    /// # Input
    ///
    /// * `k0`, `g0` -- moduli of the uncracked solid (GPa)
    /// * `kfl` -- bulk modulus of the pore fluid (GPa)
    /// * `crd` -- crack density
    /// * `alpha` -- crack aspect ratio
    pub fn new(k0: f64, g0: f64, kfl: f64, crd: f64, alpha: f64) -> Result<Self, RockPhysError> {
        check_scalar_positive("K0", k0)?;
        check_scalar_positive("G0", g0)?;
        check_scalar_positive("alpha", alpha)?;
        check_scalar_non_negative("Kfl", kfl)?;
        check_scalar_non_negative("crd", crd)?;
        Ok(OConnellBudianskyFluid {
            crd,
            nu0: poisson_ratio(k0, g0),
            w: kfl / (alpha * k0),
        })
    }

    /// Returns the softness indicator w = K_fl / (α K₀)
    pub fn softness(&self) -> f64 {
        self.w
    }

    /// Solves for (ν, D) starting from (0.2, 0.9)
    pub fn solve(&self, control: &SolverControl) -> Result<Solution, RockPhysError> {
        solve(&[0.2, 0.9], self, control)
    }
}

impl ResidualFunction for OConnellBudianskyFluid {
    fn ndim(&self) -> usize {
        2
    }

    fn residual(&self, x: &[f64], r: &mut [f64]) -> Result<(), RockPhysError> {
        let (nu, d) = (x[0], x[1]);
        let (crd, nu0, w) = (self.crd, self.nu0, self.w);
        let c = 9.0 / 16.0 * (1.0 - 2.0 * nu) / (1.0 - nu0 * nu0);
        r[0] = 45.0 / 16.0 * (nu0 - nu) / (1.0 - nu * nu) * (2.0 - nu)
            / (d * (1.0 + 3.0 * nu0) * (2.0 - nu) - 2.0 * (1.0 - 2.0 * nu0))
            - crd;
        r[1] = crd * d * d - (crd + c + 3.0 * w / (4.0 * PI)) * d + c;
        Ok(())
    }
}

/// Computes the saturated moduli of a solid with fluid-filled penny-shaped cracks (O'Connell-Budiansky)
///
/// Solves the coupled equations for the effective Poisson's ratio ν and the saturation
/// parameter D (see [OConnellBudianskyFluid]) and then computes
///
/// ```text
///                16 (1 - ν²) ε D                   32                   3
/// K = K₀ (1 - ————————————————),   G = G₀ (1 - ———— (1 - ν) (D + —————) ε)
///                 9 (1 - 2ν)                        45                 2 - ν
/// ```
///
/// The model assumes small aspect ratios and soft fluids (w of order one or smaller).
///
/// # Input
///
/// * `k0`, `g0` -- moduli of the uncracked solid (GPa)
/// * `kfl` -- bulk modulus of the pore fluid (GPa)
/// * `crd` -- crack density
/// * `alpha` -- crack aspect ratio
/// * `control` -- options for the nonlinear solver
///
/// # Output
///
/// Returns `(K_sat, G_sat)`
///
/// # Reference
///
/// 1. O'Connell RJ, Budiansky B (1974) Seismic velocities in dry and saturated cracked
///    solids, J. Geophys. Res. 79(35), 5412-5426
pub fn oconnell_budiansky_fluid(
    k0: f64,
    g0: f64,
    kfl: f64,
    crd: f64,
    alpha: f64,
    control: &SolverControl,
) -> Result<(f64, f64), RockPhysError> {
    let model = OConnellBudianskyFluid::new(k0, g0, kfl, crd, alpha)?;
    let sol = model.solve(control)?;
    let (nu, d) = (sol.x[0], sol.x[1]);
    let k_sat = k0 * (1.0 - 16.0 * (1.0 - nu * nu) * crd * d / (9.0 * (1.0 - 2.0 * nu)));
    let g_sat = g0 * (1.0 - 32.0 / 45.0 * (1.0 - nu) * (d + 3.0 / (2.0 - nu)) * crd);
    Ok((k_sat, g_sat))
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
