//! Makes available the most common structures and functions
//!
//! You may write `use rockphy::prelude::*` in your code and obtain
//! access to commonly used functionality.

pub use crate::average::{hashin_shtrikman, voigt_reuss_hill};
pub use crate::base::{Bound, PhaseMixture, RockPhysError, VtiConstants};
pub use crate::effective::{berryman_self_consistent, oconnell_budiansky, oconnell_budiansky_fluid};
pub use crate::shape::shape_factors;
pub use crate::solver::SolverControl;
