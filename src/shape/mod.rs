//! Implements the geometric strain concentration factors of spheroidal inclusions

mod shape_factors;
pub use crate::shape::shape_factors::*;
