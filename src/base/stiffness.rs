use nalgebra::Matrix6;
use serde::{Deserialize, Serialize};

/// Holds the five independent stiffnesses of a transversely isotropic medium (GPa)
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct VtiConstants {
    /// Stiffness in the isotropy plane
    pub c11: f64,

    /// Stiffness along the symmetry axis
    pub c33: f64,

    /// Coupling stiffness
    pub c13: f64,

    /// Shear stiffness in planes containing the symmetry axis
    pub c44: f64,

    /// Shear stiffness in the isotropy plane
    pub c66: f64,
}

impl VtiConstants {
    /// Returns the 6×6 stiffness matrix with the symmetry axis along x3
    pub fn to_vti(&self) -> Matrix6<f64> {
        stiffness_vti(self.c11, self.c33, self.c13, self.c44, self.c66)
    }

    /// Returns the 6×6 stiffness matrix with the symmetry axis along x1
    pub fn to_hti(&self) -> Matrix6<f64> {
        stiffness_hti(self.c11, self.c33, self.c13, self.c44, self.c66)
    }
}

/// Builds the 6×6 stiffness matrix (Voigt notation) of a VTI medium (symmetry axis x3)
///
/// C12 is not independent: C12 = C11 - 2 C66.
#[rustfmt::skip]
pub fn stiffness_vti(c11: f64, c33: f64, c13: f64, c44: f64, c66: f64) -> Matrix6<f64> {
    let c12 = c11 - 2.0 * c66;
    Matrix6::new(
        c11, c12, c13, 0.0, 0.0, 0.0,
        c12, c11, c13, 0.0, 0.0, 0.0,
        c13, c13, c33, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, c44, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, c44, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0, c66,
    )
}

/// Builds the 6×6 stiffness matrix of an HTI medium (symmetry axis x1)
///
/// The input constants are the ones of the equivalent VTI medium, i.e., `c33` is the
/// stiffness along the symmetry axis, `c11` is the stiffness in the isotropy plane,
/// `c44` is the shear stiffness in planes containing the symmetry axis and `c66` is the
/// shear stiffness in the isotropy plane. Rotating the symmetry axis from x3 to x1 gives:
///
/// ```text
/// C11ʰ = c33,  C22ʰ = C33ʰ = c11,  C12ʰ = C13ʰ = c13,  C23ʰ = c11 - 2c66
/// C44ʰ = c66,  C55ʰ = C66ʰ = c44
/// ```
#[rustfmt::skip]
pub fn stiffness_hti(c11: f64, c33: f64, c13: f64, c44: f64, c66: f64) -> Matrix6<f64> {
    let c23 = c11 - 2.0 * c66;
    Matrix6::new(
        c33, c13, c13, 0.0, 0.0, 0.0,
        c13, c11, c23, 0.0, 0.0, 0.0,
        c13, c23, c11, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, c66, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, c44, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0, c44,
    )
}

/// Builds the 6×6 stiffness matrix of an orthorhombic medium
#[rustfmt::skip]
#[allow(clippy::too_many_arguments)]
pub fn stiffness_ortho(
    c11: f64, c22: f64, c33: f64,
    c12: f64, c13: f64, c23: f64,
    c44: f64, c55: f64, c66: f64,
) -> Matrix6<f64> {
    Matrix6::new(
        c11, c12, c13, 0.0, 0.0, 0.0,
        c12, c22, c23, 0.0, 0.0, 0.0,
        c13, c23, c33, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, c44, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, c55, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0, c66,
    )
}

/// Builds the 6×6 stiffness matrix of an isotropic medium
pub fn stiffness_isotropic(kk: f64, gg: f64) -> Matrix6<f64> {
    let m = kk + 4.0 * gg / 3.0;
    stiffness_vti(m, m, m - 2.0 * gg, gg, gg)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
