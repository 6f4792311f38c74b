use crate::StrError;
use thiserror::Error;

/// Holds all failure modes of the rock physics functions
#[derive(Debug, Error)]
pub enum RockPhysError {
    /// Malformed or non-physical input (mismatched lengths, negative moduli, ...)
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The nonlinear solver could not reduce the residuals below the tolerance
    ///
    /// The last iterate is kept so that the caller may decide to use it anyway.
    #[error("solver did not converge after {iterations} iterations: {reason} (‖F‖∞ = {residual_norm:.2e}, x = {last_iterate:?})")]
    ConvergenceFailure {
        /// Last iterate computed by the solver
        last_iterate: Vec<f64>,

        /// Max-norm of the residual at the last iterate
        residual_norm: f64,

        /// Number of iterations performed
        iterations: usize,

        /// Reason for stopping
        reason: StrError,
    },

    /// Reading an input file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Parsing an input file failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RockPhysError {
    /// Returns the last iterate if this is a convergence failure
    pub fn last_iterate(&self) -> Option<&[f64]> {
        match self {
            RockPhysError::ConvergenceFailure { last_iterate, .. } => Some(last_iterate),
            _ => None,
        }
    }

    /// Indicates a convergence failure
    pub fn is_convergence_failure(&self) -> bool {
        matches!(self, RockPhysError::ConvergenceFailure { .. })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
