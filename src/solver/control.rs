use crate::StrError;
use serde::{Deserialize, Serialize};

/// Defines the smallest allowed tolerance (SolverControl)
pub const CONTROL_MIN_TOL: f64 = 1e-15;

/// Holds the options to control the nonlinear iterations
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct SolverControl {
    /// Maximum number of Newton iterations
    pub n_max_iterations: usize,

    /// Maximum number of step halvings in the line search
    pub n_max_backtracking: usize,

    /// Absolute tolerance for the max-norm of the residual vector
    pub tol_abs_residual: f64,

    /// Relative tolerance for the iterative increment below which the iterations are stagnated
    pub tol_rel_step: f64,

    /// Verbose mode during iterations
    pub verbose_iterations: bool,
}

impl SolverControl {
    /// Allocates a new instance with default values
    pub fn new() -> Self {
        SolverControl {
            n_max_iterations: 100,
            n_max_backtracking: 30,
            tol_abs_residual: 1e-10,
            tol_rel_step: 1e-14,
            verbose_iterations: false,
        }
    }

    /// Validates all data
    ///
    /// Returns a message with the inconsistent data, or returns None if everything is all right.
    pub fn validate(&self) -> Option<String> {
        if self.n_max_iterations < 1 {
            return Some(format!(
                "n_max_iterations = {} is incorrect; it must be ≥ 1",
                self.n_max_iterations
            ));
        }
        if self.n_max_backtracking < 1 {
            return Some(format!(
                "n_max_backtracking = {} is incorrect; it must be ≥ 1",
                self.n_max_backtracking
            ));
        }
        if !(self.tol_abs_residual >= CONTROL_MIN_TOL) {
            return Some(format!(
                "tol_abs_residual = {:?} is incorrect; it must be ≥ {:e}",
                self.tol_abs_residual, CONTROL_MIN_TOL
            ));
        }
        if !(self.tol_rel_step >= CONTROL_MIN_TOL) {
            return Some(format!(
                "tol_rel_step = {:?} is incorrect; it must be ≥ {:e}",
                self.tol_rel_step, CONTROL_MIN_TOL
            ));
        }
        None // all good
    }

    /// Sets the maximum number of iterations
    pub fn set_n_max_iterations(&mut self, value: usize) -> Result<&mut Self, StrError> {
        if value < 1 {
            return Err("n_max_iterations must be ≥ 1");
        }
        self.n_max_iterations = value;
        Ok(self)
    }

    /// Sets the maximum number of step halvings in the line search
    pub fn set_n_max_backtracking(&mut self, value: usize) -> Result<&mut Self, StrError> {
        if value < 1 {
            return Err("n_max_backtracking must be ≥ 1");
        }
        self.n_max_backtracking = value;
        Ok(self)
    }

    /// Sets the absolute tolerance for the residual vector
    pub fn set_tol_abs_residual(&mut self, value: f64) -> Result<&mut Self, StrError> {
        if !(value >= CONTROL_MIN_TOL) {
            return Err("tol_abs_residual must be ≥ 1e-15");
        }
        self.tol_abs_residual = value;
        Ok(self)
    }

    /// Sets the relative tolerance for the iterative increment
    pub fn set_tol_rel_step(&mut self, value: f64) -> Result<&mut Self, StrError> {
        if !(value >= CONTROL_MIN_TOL) {
            return Err("tol_rel_step must be ≥ 1e-15");
        }
        self.tol_rel_step = value;
        Ok(self)
    }

    /// Enables or disables the iteration tables
    pub fn set_verbose_iterations(&mut self, flag: bool) -> &mut Self {
        self.verbose_iterations = flag;
        self
    }
}

impl Default for SolverControl {
    fn default() -> Self {
        Self::new()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
