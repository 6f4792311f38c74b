//! Rockphy implements rock physics models relating the composition, pore geometry and stress
//! state of rocks to their elastic moduli and seismic reflectivity
//!
//! The modules are:
//!
//! * [average] -- Voigt-Reuss-Hill and Hashin-Shtrikman bounds, critical porosity and Backus averages
//! * [shape] -- strain concentration factors P and Q of spheroidal inclusions
//! * [effective] -- Berryman self-consistent, O'Connell-Budiansky, Hudson and Eshelby-Cheng models
//! * [granular] -- Hertz-Mindlin, Walton, Digby, soft/stiff sand and cemented sand models
//! * [avo] -- Aki-Richards, Zoeppritz, Rüger and elastic impedance reflectivity
//! * [solver] -- the damped Newton root finder used by the self-consistent models
//!
//! Moduli are given in GPa, stresses in MPa and angles in degrees unless noted otherwise.
//!
//! # Example
//!
//! ```
//! use rockphy::average::voigt_reuss_hill;
//! use rockphy::StrError;
//!
//! fn main() -> Result<(), StrError> {
//!     // quartz and water
//!     let (kv, kr, kh) = voigt_reuss_hill(&[0.8, 0.2], &[36.6, 2.2]).map_err(|_| "cannot compute bounds")?;
//!     assert!(kr < kh && kh < kv);
//!     Ok(())
//! }
//! ```

/// Defines a type alias for the error type as a static string
pub type StrError = &'static str;

pub mod average;
pub mod avo;
pub mod base;
pub mod effective;
pub mod granular;
pub mod prelude;
pub mod shape;
pub mod solver;
