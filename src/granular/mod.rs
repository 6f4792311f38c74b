//! Implements contact models of granular media and cemented sandstones
//!
//! Effective stresses are given in MPa and all moduli in GPa.

mod contact_cement;
mod digby;
mod hertz_mindlin;
mod johnson;
mod patchy_cement;
mod sand;
pub use crate::granular::contact_cement::*;
pub use crate::granular::digby::*;
pub use crate::granular::hertz_mindlin::*;
pub use crate::granular::johnson::*;
pub use crate::granular::patchy_cement::*;
pub use crate::granular::sand::*;
