use crate::base::{check_non_negative, check_same_len, RockPhysError};

/// Computes the Voigt, Reuss, and Hill averages of the moduli of N phases
///
/// ```text
/// Mᵥ = Σ vᵢ Mᵢ
///
///        1
/// Mᵣ = —————————
///      Σ vᵢ / Mᵢ
///
/// Mₕ = (Mᵥ + Mᵣ) / 2
/// ```
///
/// # Input
///
/// * `volumes` -- volume fractions of the N phases
/// * `moduli` -- elastic moduli of the N phases
///
/// # Output
///
/// Returns `(m_voigt, m_reuss, m_hill)`
///
/// **Note:** The volume fractions are not required to sum up to one. A zero modulus
/// makes the Reuss average equal to zero (e.g., dry pores).
pub fn voigt_reuss_hill(volumes: &[f64], moduli: &[f64]) -> Result<(f64, f64, f64), RockPhysError> {
    check_same_len("volumes, moduli", &[volumes.len(), moduli.len()])?;
    check_non_negative("volumes", volumes)?;
    check_non_negative("moduli", moduli)?;
    let m_voigt: f64 = volumes.iter().zip(moduli).map(|(v, m)| v * m).sum();
    let inv: f64 = volumes.iter().zip(moduli).map(|(v, m)| v * (1.0 / m)).sum();
    let m_reuss = 1.0 / inv;
    let m_hill = 0.5 * (m_reuss + m_voigt);
    Ok((m_voigt, m_reuss, m_hill))
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
