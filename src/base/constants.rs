/// Aspect ratio used in place of α = 1 when evaluating the general spheroid formulas
///
/// The closed forms for oblate and prolate spheroids are 0/0 at α = 1.
pub const SPHERE_ASPECT_CLAMP: f64 = 0.999;

/// Allowed deviation of ΣXᵢ from 1.0 for the inputs of the self-consistent solvers
pub const VOLUME_SUM_TOLERANCE: f64 = 1e-6;

/// Converts MPa (effective stress inputs) into GPa (moduli)
pub const MPA_TO_GPA: f64 = 1e-3;
