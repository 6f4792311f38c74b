//! Implements amplitude-versus-angle (AVO) reflectivity and elastic impedance
//!
//! Angles are given in degrees. Velocities and densities may use any consistent units.

mod aki_richards;
mod anisotropic;
mod avo_attributes;
mod elastic_impedance;
mod layer;
mod zoeppritz;
pub use crate::avo::aki_richards::*;
pub use crate::avo::anisotropic::*;
pub use crate::avo::avo_attributes::*;
pub use crate::avo::elastic_impedance::*;
pub use crate::avo::layer::*;
pub use crate::avo::zoeppritz::*;
