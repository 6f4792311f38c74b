use crate::base::{check_non_negative, check_same_len, RockPhysError, VtiConstants};

/// Computes the stiffnesses of a medium made of thin isotropic layers (Backus average)
///
/// ```text
/// C33 = ⟨1/(λ+2G)⟩⁻¹
/// C44 = ⟨1/G⟩⁻¹
/// C66 = ⟨G⟩
/// C13 = ⟨1/(λ+2G)⟩⁻¹ ⟨λ/(λ+2G)⟩
/// C11 = ⟨4G(λ+G)/(λ+2G)⟩ + ⟨1/(λ+2G)⟩⁻¹ ⟨λ/(λ+2G)⟩²
/// ```
///
/// where ⟨·⟩ is the volume-weighted average.
///
/// # Input
///
/// * `volumes` -- volume fractions of the N layering materials
/// * `lambda` -- Lamé coefficients of the N materials (GPa)
/// * `gg` -- shear moduli of the N materials (GPa)
///
/// # Output
///
/// Returns the constants of the resulting VTI medium
pub fn backus(volumes: &[f64], lambda: &[f64], gg: &[f64]) -> Result<VtiConstants, RockPhysError> {
    check_same_len("volumes, lambda, G", &[volumes.len(), lambda.len(), gg.len()])?;
    check_non_negative("volumes", volumes)?;
    check_non_negative("G", gg)?;
    let avg = |fun: &dyn Fn(f64, f64) -> f64| -> f64 {
        volumes
            .iter()
            .zip(lambda.iter().zip(gg))
            .map(|(v, (l, g))| v * fun(*l, *g))
            .sum()
    };
    let c33 = 1.0 / avg(&|l, g| 1.0 / (l + 2.0 * g));
    let c44 = 1.0 / avg(&|_, g| 1.0 / g);
    let c66 = avg(&|_, g| g);
    let ratio = avg(&|l, g| l / (l + 2.0 * g));
    let c13 = c33 * ratio;
    let c11 = avg(&|l, g| 4.0 * g * (l + g) / (l + 2.0 * g)) + c33 * ratio * ratio;
    Ok(VtiConstants { c11, c33, c13, c44, c66 })
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
