//! Implements a damped Newton root finder for small nonlinear systems

mod control;
mod convergence;
mod newton;
mod residual;
pub use crate::solver::control::*;
pub use crate::solver::convergence::*;
pub use crate::solver::newton::*;
pub use crate::solver::residual::*;
