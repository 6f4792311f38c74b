use super::{RockPhysError, VOLUME_SUM_TOLERANCE};

/// Checks that all arrays have the same (non-zero) length and returns it
pub(crate) fn check_same_len(names: &str, lens: &[usize]) -> Result<usize, RockPhysError> {
    let n = lens.first().copied().unwrap_or(0);
    if n == 0 {
        return Err(RockPhysError::InvalidParameter(format!("{} must not be empty", names)));
    }
    if lens.iter().any(|len| *len != n) {
        return Err(RockPhysError::InvalidParameter(format!(
            "{} must have the same length; found {:?}",
            names, lens
        )));
    }
    Ok(n)
}

/// Checks that all values are finite and ≥ 0.0
pub(crate) fn check_non_negative(name: &str, values: &[f64]) -> Result<(), RockPhysError> {
    for (i, v) in values.iter().enumerate() {
        if !v.is_finite() || *v < 0.0 {
            return Err(RockPhysError::InvalidParameter(format!(
                "{}[{}] = {:?} is incorrect; it must be finite and ≥ 0.0",
                name, i, v
            )));
        }
    }
    Ok(())
}

/// Checks that all values are finite and > 0.0
pub(crate) fn check_positive(name: &str, values: &[f64]) -> Result<(), RockPhysError> {
    for (i, v) in values.iter().enumerate() {
        if !v.is_finite() || *v <= 0.0 {
            return Err(RockPhysError::InvalidParameter(format!(
                "{}[{}] = {:?} is incorrect; it must be finite and > 0.0",
                name, i, v
            )));
        }
    }
    Ok(())
}

/// Checks that a scalar is finite and > 0.0
pub(crate) fn check_scalar_positive(name: &str, value: f64) -> Result<(), RockPhysError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(RockPhysError::InvalidParameter(format!(
            "{} = {:?} is incorrect; it must be finite and > 0.0",
            name, value
        )));
    }
    Ok(())
}

/// Checks that a scalar is finite and ≥ 0.0
pub(crate) fn check_scalar_non_negative(name: &str, value: f64) -> Result<(), RockPhysError> {
    if !value.is_finite() || value < 0.0 {
        return Err(RockPhysError::InvalidParameter(format!(
            "{} = {:?} is incorrect; it must be finite and ≥ 0.0",
            name, value
        )));
    }
    Ok(())
}

/// Checks that a scalar lies in [0, 1]
pub(crate) fn check_fraction(name: &str, value: f64) -> Result<(), RockPhysError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(RockPhysError::InvalidParameter(format!(
            "{} = {:?} is incorrect; it must be 0.0 ≤ {} ≤ 1.0",
            name, value, name
        )));
    }
    Ok(())
}

/// Checks that volume fractions are in [0, 1] and sum up to one
pub(crate) fn check_volume_fractions(name: &str, values: &[f64]) -> Result<(), RockPhysError> {
    for (i, v) in values.iter().enumerate() {
        check_fraction(&format!("{}[{}]", name, i), *v)?;
    }
    let sum: f64 = values.iter().sum();
    if f64::abs(sum - 1.0) > VOLUME_SUM_TOLERANCE {
        return Err(RockPhysError::InvalidParameter(format!(
            "the sum of {} = {:?} is incorrect; it must be equal to 1.0",
            name, sum
        )));
    }
    Ok(())
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
