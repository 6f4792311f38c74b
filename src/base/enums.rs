use serde::{Deserialize, Serialize};

/// Selects one of the Hashin-Shtrikman bounds
///
/// The two branches are distinct closed forms; the upper one takes the first
/// (stiff) phase as reference and the lower one takes the second (soft) phase.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub enum Bound {
    /// Stiff phase as reference material
    Upper,

    /// Soft phase as reference material
    Lower,
}

/// Selects the isostrain (Voigt) or isostress (Reuss) average
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub enum Average {
    /// Arithmetic (mass balance) average
    Voigt,

    /// Harmonic average
    Reuss,
}

/// Defines where the cement is deposited in the contact cement model
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub enum CementScheme {
    /// Cement deposited at the grain contacts
    AtContacts,

    /// Cement evenly deposited on the grain surfaces
    GrainCoating,
}

/// Defines the order of the corrections in Hudson's crack model
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub enum HudsonOrder {
    /// First order correction
    First,

    /// First and second order corrections (see Cheng, 1993, for its limitations)
    Second,
}

/// Defines the axis of symmetry of a transversely isotropic medium
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub enum SymmetryAxis {
    /// Symmetry axis along x1; the stiffness is HTI
    X1,

    /// Symmetry axis along x3; the stiffness is VTI
    X3,
}

/// Defines how the cemented and unconsolidated end members are mixed in the patchy cement model
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub enum Mixing {
    /// Cemented sand as the outer shell (upper Hashin-Shtrikman)
    Stiff,

    /// Unconsolidated sand as the outer shell (lower Hashin-Shtrikman)
    Soft,
}

/// Defines the order in which the hydrostatic and uniaxial strains are applied (Johnson's model)
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub enum LoadingPath {
    /// Hydrostatic and uniaxial strains applied simultaneously
    Together,

    /// Uniaxial strain first, followed by the hydrostatic strain
    UniaxialThenIsotropic,

    /// Hydrostatic strain first, followed by the uniaxial strain
    IsotropicThenUniaxial,
}
