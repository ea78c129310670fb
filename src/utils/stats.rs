//! Statistical utility functions.

use crate::error::{ForecastError, Result};

/// Calculate the mean of a slice.
///
/// # Errors
/// Returns `EmptyData` for an empty slice.
pub fn mean(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(ForecastError::EmptyData);
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample variance with an `n - 1` denominator, matching spreadsheet `VAR.S`.
///
/// # Example
/// ```
/// use supplychain_forecast::utils::sample_variance;
///
/// let var = sample_variance(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
/// assert!((var - 2.5).abs() < 1e-12);
/// ```
pub fn sample_variance(values: &[f64]) -> Result<f64> {
    variance_with_ddof(values, 1)
}

/// Variance with `n - ddof` in the denominator.
///
/// Non-finite values (NaN, ±∞) are skipped, as blank or error cells are in a
/// spreadsheet. `ddof = 0` gives the population variance.
///
/// # Errors
/// Returns `EmptyData` if no finite values remain, and `InsufficientData`
/// if there are not more than `ddof` of them.
pub fn variance_with_ddof(values: &[f64], ddof: usize) -> Result<f64> {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    let n = finite.len();

    if n == 0 {
        return Err(ForecastError::EmptyData);
    }
    if n <= ddof {
        return Err(ForecastError::InsufficientData {
            needed: ddof + 1,
            got: n,
        });
    }

    let m = finite.iter().sum::<f64>() / n as f64;
    let sum_sq: f64 = finite.iter().map(|x| (x - m).powi(2)).sum();
    Ok(sum_sq / (n - ddof) as f64)
}
