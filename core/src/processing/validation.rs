//! Input guards run before any numeric work on a sweep.
//!
//! Checks run in a fixed order and the first failure wins: dimensionality,
//! equal length, non-empty, NaN, infinity.

use crate::prelude::{TransferError, TransferResult};
use ndarray::{Array1, ArrayViewD, Ix1};

pub(crate) const VG_LABEL: &str = "Vg";
pub(crate) const I_LABEL: &str = "I";

/// Validates a raw (Vg, I) pair and returns owned one-dimensional copies.
pub fn validate_sweep(
    vg: ArrayViewD<f64>,
    current: ArrayViewD<f64>,
) -> TransferResult<(Array1<f64>, Array1<f64>)> {
    if vg.ndim() != 1 || current.ndim() != 1 {
        return Err(TransferError::Shape(format!(
            "Vg and I must be one-dimensional (got {}-D and {}-D)",
            vg.ndim(),
            current.ndim()
        )));
    }
    let vg = vg
        .into_dimensionality::<Ix1>()
        .map_err(|err| TransferError::Shape(err.to_string()))?;
    let current = current
        .into_dimensionality::<Ix1>()
        .map_err(|err| TransferError::Shape(err.to_string()))?;

    if vg.len() != current.len() {
        return Err(TransferError::Shape(format!(
            "Vg and I must have the same length ({} vs {})",
            vg.len(),
            current.len()
        )));
    }
    if vg.is_empty() || current.is_empty() {
        return Err(TransferError::EmptyInput);
    }
    if vg.iter().any(|v| v.is_nan()) {
        return Err(TransferError::NanValue { input: VG_LABEL });
    }
    if current.iter().any(|v| v.is_nan()) {
        return Err(TransferError::NanValue { input: I_LABEL });
    }
    if vg.iter().any(|v| v.is_infinite()) {
        return Err(TransferError::InfiniteValue { input: VG_LABEL });
    }
    if current.iter().any(|v| v.is_infinite()) {
        return Err(TransferError::InfiniteValue { input: I_LABEL });
    }

    Ok((vg.to_owned(), current.to_owned()))
}
