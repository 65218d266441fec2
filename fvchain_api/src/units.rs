//! Conversion between display amounts (FVC) and the chain's smallest unit.

use thiserror::Error;

/// Smallest units per FVC.
pub const SMALLEST_UNITS_PER_FVC: f64 = 1e18;

/// Errors from unit conversion.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UnitError {
    #[error("Amount is not a finite number: {0}")]
    NotFinite(f64),
    #[error("Amount is out of range for smallest units: {0}")]
    Overflow(f64),
    #[error("Invalid smallest-unit value: {0}")]
    Parse(String),
}

/// Converts an FVC amount to a decimal string of smallest units.
///
/// The scaled value is truncated toward zero. Values whose scaled form does
/// not fit an `i128` are rejected.
pub fn to_smallest_unit(amount: f64) -> Result<String, UnitError> {
    if !amount.is_finite() {
        return Err(UnitError::NotFinite(amount));
    }
    let scaled = amount * SMALLEST_UNITS_PER_FVC;
    // i128::MAX as f64 rounds up to 2^127, which is already out of range.
    if scaled >= i128::MAX as f64 || scaled < i128::MIN as f64 {
        return Err(UnitError::Overflow(amount));
    }
    Ok((scaled as i128).to_string())
}

/// Converts a smallest-unit value (decimal or float notation) to FVC.
pub fn from_smallest_unit(value: &str) -> Result<f64, UnitError> {
    let trimmed = value.trim();
    let parsed = trimmed
        .parse::<f64>()
        .map_err(|_| UnitError::Parse(value.to_string()))?;
    Ok(parsed / SMALLEST_UNITS_PER_FVC)
}

/// Converts an integer smallest-unit value to FVC.
pub fn from_smallest_unit_int(value: u128) -> f64 {
    value as f64 / SMALLEST_UNITS_PER_FVC
}
