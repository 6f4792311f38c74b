//! Implements elastic averages and bounds of mixtures

mod backus;
mod critical_porosity;
mod hashin_shtrikman;
mod voigt_reuss_hill;
pub use crate::average::backus::*;
pub use crate::average::critical_porosity::*;
pub use crate::average::hashin_shtrikman::*;
pub use crate::average::voigt_reuss_hill::*;
