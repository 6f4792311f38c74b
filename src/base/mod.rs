//! Implements the base structures shared by all models

mod checks;
mod constants;
mod elastic;
mod enums;
mod error;
mod phase_mixture;
mod stiffness;
pub(crate) use crate::base::checks::*;
pub use crate::base::constants::*;
pub use crate::base::elastic::*;
pub use crate::base::enums::*;
pub use crate::base::error::*;
pub use crate::base::phase_mixture::*;
pub use crate::base::stiffness::*;
