use crate::base::{validate_phases, RockPhysError};
use crate::shape::shape_factors_unchecked;
use crate::solver::{solve, ResidualFunction, Solution, SolverControl};

/// Holds the phases of a composite for Berryman's self-consistent scheme
///
/// The unknowns are x = (K_sc, G_sc) and the residuals are
///
/// ```text
/// R₀ = Σᵢ Xᵢ (Kᵢ - K_sc) Pᵢ
/// R₁ = Σᵢ Xᵢ (Gᵢ - G_sc) Qᵢ
/// ```
///
/// where Pᵢ and Qᵢ are the shape factors of phase i embedded in a matrix with the trial
/// moduli (K_sc, G_sc).
pub struct BerrymanSelfConsistent<'a> {
    k: &'a [f64],
    g: &'a [f64],
    x: &'a [f64],
    alpha: &'a [f64],
}

impl<'a> BerrymanSelfConsistent<'a> {
    /// Allocates a new instance after validating the phases
    ///
    /// # Input
    ///
    /// * `k` -- bulk moduli of the N phases (GPa)
    /// * `g` -- shear moduli of the N phases (GPa)
    /// * `x` -- volume fractions of the N phases (must sum up to one)
    /// * `alpha` -- aspect ratios of the N phases (α < 1 oblate, α = 1 sphere, α > 1 prolate)
    pub fn new(k: &'a [f64], g: &'a [f64], x: &'a [f64], alpha: &'a [f64]) -> Result<Self, RockPhysError> {
        validate_phases(k, g, x, alpha)?;
        Ok(BerrymanSelfConsistent { k, g, x, alpha })
    }

    /// Returns the initial guess (arithmetic means of the moduli)
    pub fn initial_guess(&self) -> [f64; 2] {
        let n = self.k.len() as f64;
        [self.k.iter().sum::<f64>() / n, self.g.iter().sum::<f64>() / n]
    }

    /// Solves the self-consistent equations
    pub fn solve(&self, control: &SolverControl) -> Result<Solution, RockPhysError> {
        solve(&self.initial_guess(), self, control)
    }
}

impl<'a> ResidualFunction for BerrymanSelfConsistent<'a> {
    fn ndim(&self) -> usize {
        2
    }

    fn residual(&self, x: &[f64], r: &mut [f64]) -> Result<(), RockPhysError> {
        let (k_sc, g_sc) = (x[0], x[1]);
        let (p, q) = shape_factors_unchecked(k_sc, g_sc, self.k, self.g, self.alpha);
        r[0] = 0.0;
        r[1] = 0.0;
        for i in 0..self.k.len() {
            r[0] += self.x[i] * (self.k[i] - k_sc) * p[i];
            r[1] += self.x[i] * (self.g[i] - g_sc) * q[i];
        }
        Ok(())
    }
}

/// Computes the effective moduli of a multi-phase composite using Berryman's self-consistent scheme
///
/// Also known as the coherent potential approximation. Each phase is treated as a spheroidal
/// inclusion embedded in the (unknown) effective medium.
///
/// # Input
///
/// * `k` -- bulk moduli of the N phases (GPa); use 0 for empty pores
/// * `g` -- shear moduli of the N phases (GPa)
/// * `x` -- volume fractions of the N phases (must sum up to one)
/// * `alpha` -- aspect ratios of the N phases
/// * `control` -- options for the nonlinear solver
///
/// # Output
///
/// Returns `(K_sc, G_sc)`
///
/// # Errors
///
/// Returns `ConvergenceFailure` (with the last iterate) if the solver does not converge.
///
/// # Reference
///
/// 1. Berryman JG (1980) Long-wavelength propagation in composite elastic media II.
///    Ellipsoidal inclusions, J. Acoust. Soc. Am. 68(6), 1820-1831
pub fn berryman_self_consistent(
    k: &[f64],
    g: &[f64],
    x: &[f64],
    alpha: &[f64],
    control: &SolverControl,
) -> Result<(f64, f64), RockPhysError> {
    let sol = BerrymanSelfConsistent::new(k, g, x, alpha)?.solve(control)?;
    Ok((sol.x[0], sol.x[1]))
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
