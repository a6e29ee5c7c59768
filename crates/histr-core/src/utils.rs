//! Utility functions for working with sample slices

use crate::{Error, Result};
use num_traits::ToPrimitive;

/// Smallest and largest value of a non-empty, finite slice
///
/// Fails on empty input and on any NaN or infinite value, since no
/// range can be derived from such data.
///
/// # Examples
///
/// ```rust
/// use histr_core::utils::finite_min_max;
///
/// assert_eq!(finite_min_max(&[2.0, 1.0, 2.04]).unwrap(), (1.0, 2.04));
/// assert!(finite_min_max(&[]).is_err());
/// ```
pub fn finite_min_max(data: &[f64]) -> Result<(f64, f64)> {
    if data.is_empty() {
        return Err(Error::empty_input("range"));
    }

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &value in data {
        if !value.is_finite() {
            return Err(Error::non_finite_input("samples"));
        }
        min = min.min(value);
        max = max.max(value);
    }
    Ok((min, max))
}

/// Fail if any value is NaN
pub fn ensure_no_nan(data: &[f64], context: &str) -> Result<()> {
    if data.iter().any(|x| x.is_nan()) {
        return Err(Error::InvalidInput(format!("NaNs in the {context}")));
    }
    Ok(())
}

/// Check that a slice is strictly increasing
///
/// Empty and single-element slices are trivially increasing. Any NaN
/// breaks the ordering.
///
/// ```rust
/// use histr_core::utils::is_strictly_increasing;
///
/// assert!(is_strictly_increasing(&[1.0, 1.2, 1.4]));
/// assert!(!is_strictly_increasing(&[1.0, 1.0]));
/// ```
pub fn is_strictly_increasing(data: &[f64]) -> bool {
    data.windows(2).all(|w| w[0] < w[1])
}

/// Convert samples of any primitive numeric type to `f64`
pub fn to_f64_samples<T: ToPrimitive>(data: &[T]) -> Result<Vec<f64>> {
    data.iter()
        .enumerate()
        .map(|(i, value)| {
            value.to_f64().ok_or_else(|| {
                Error::InvalidInput(format!("sample at index {i} cannot be represented as f64"))
            })
        })
        .collect()
}
