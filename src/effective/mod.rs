//! Implements effective medium models of rocks with inclusions and cracks

mod berryman;
mod eshelby_cheng;
mod hudson;
mod oconnell_budiansky;
pub use crate::effective::berryman::*;
pub use crate::effective::eshelby_cheng::*;
pub use crate::effective::hudson::*;
pub use crate::effective::oconnell_budiansky::*;
