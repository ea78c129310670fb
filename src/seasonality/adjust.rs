//! Removing and reapplying multiplicative seasonal factors.

use crate::error::{ForecastError, Result};

/// Remove the seasonal component: `value / seasonal_index`.
///
/// # Errors
/// Returns `InvalidParameter` if the index is zero or not finite.
pub fn deseasonalize(value: f64, seasonal_index: f64) -> Result<f64> {
    check_index(seasonal_index)?;
    Ok(value / seasonal_index)
}

/// Reapply the seasonal component: `value × seasonal_index`.
///
/// # Errors
/// Returns `InvalidParameter` if the index is zero or not finite.
pub fn reseasonalize(value: f64, seasonal_index: f64) -> Result<f64> {
    check_index(seasonal_index)?;
    Ok(value * seasonal_index)
}

/// Element-wise [`deseasonalize`] over aligned slices.
pub fn deseasonalize_series(values: &[f64], indices: &[f64]) -> Result<Vec<f64>> {
    zip_checked(values, indices, deseasonalize)
}

/// Element-wise [`reseasonalize`] over aligned slices.
pub fn reseasonalize_series(values: &[f64], indices: &[f64]) -> Result<Vec<f64>> {
    zip_checked(values, indices, reseasonalize)
}

fn zip_checked(
    values: &[f64],
    indices: &[f64],
    op: fn(f64, f64) -> Result<f64>,
) -> Result<Vec<f64>> {
    if values.len() != indices.len() {
        return Err(ForecastError::DimensionMismatch {
            expected: values.len(),
            got: indices.len(),
        });
    }
    values
        .iter()
        .zip(indices.iter())
        .map(|(&v, &s)| op(v, s))
        .collect()
}

fn check_index(seasonal_index: f64) -> Result<()> {
    if seasonal_index == 0.0 || !seasonal_index.is_finite() {
        return Err(ForecastError::InvalidParameter(format!(
            "seasonal index must be finite and non-zero, got {seasonal_index}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn scalar_adjustment() {
        assert_relative_eq!(deseasonalize(120.0, 1.2).unwrap(), 100.0, epsilon = 1e-10);
        assert_relative_eq!(reseasonalize(100.0, 1.2).unwrap(), 120.0, epsilon = 1e-10);
    }

    #[test]
    fn round_trip_restores_value() {
        for &(x, idx) in &[(37.5, 0.8), (-12.0, 1.35), (0.0, 2.0), (1e6, 0.013)] {
            let back = reseasonalize(deseasonalize(x, idx).unwrap(), idx).unwrap();
            assert_relative_eq!(back, x, max_relative = 1e-12);
        }
    }

    #[test]
    fn zero_index_is_rejected() {
        assert!(matches!(
            deseasonalize(10.0, 0.0),
            Err(ForecastError::InvalidParameter(_))
        ));
        assert!(matches!(
            reseasonalize(10.0, f64::NAN),
            Err(ForecastError::InvalidParameter(_))
        ));
    }

    #[test]
    fn series_forms_check_lengths() {
        let result = deseasonalize_series(&[1.0, 2.0], &[1.0]);
        assert!(matches!(
            result,
            Err(ForecastError::DimensionMismatch {
                expected: 2,
                got: 1
            })
        ));
    }

    #[test]
    fn series_forms_apply_elementwise() {
        let adjusted = deseasonalize_series(&[50.0, 150.0], &[0.5, 1.5]).unwrap();
        assert_eq!(adjusted, vec![100.0, 100.0]);

        let restored = reseasonalize_series(&adjusted, &[0.5, 1.5]).unwrap();
        assert_eq!(restored, vec![50.0, 150.0]);
    }

    #[test]
    fn series_forms_propagate_bad_index() {
        let result = reseasonalize_series(&[1.0, 2.0], &[1.0, 0.0]);
        assert!(result.is_err());
    }
}
