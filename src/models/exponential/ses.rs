//! Simple exponential smoothing with an analyst-chosen coefficient.
//!
//! The forecast recurrence is:
//! `F(t) = α × A(t-1) + (1-α) × F(t-1)`, seeded with `F(1) = A(1)`.

use crate::error::{ForecastError, Result};
use crate::models::SeriesForecaster;

/// One smoothing step: the forecast for the next period.
///
/// # Errors
/// Returns `InvalidParameter` unless `0 < alpha <= 1`.
pub fn exponential_smoothing(prev_actual: f64, prev_forecast: f64, alpha: f64) -> Result<f64> {
    check_alpha(alpha)?;
    Ok(step(prev_actual, prev_forecast, alpha))
}

/// Full forecast sequence for `actuals`, one entry per actual.
///
/// The first forecast is seeded from the first actual.
///
/// # Errors
/// - `InvalidParameter` unless `0 < alpha <= 1`
/// - `EmptyData` if `actuals` is empty
///
/// # Example
/// ```
/// use supplychain_forecast::models::exponential_smoothing_series;
///
/// let f = exponential_smoothing_series(&[10.0, 12.0, 11.0, 13.0, 12.0], 0.3).unwrap();
/// let expected = [10.0, 10.0, 10.6, 10.72, 11.404];
/// for (got, want) in f.iter().zip(expected) {
///     assert!((got - want).abs() < 1e-9);
/// }
/// ```
pub fn exponential_smoothing_series(actuals: &[f64], alpha: f64) -> Result<Vec<f64>> {
    check_alpha(alpha)?;
    let first = *actuals.first().ok_or(ForecastError::EmptyData)?;

    let mut forecasts = Vec::with_capacity(actuals.len());
    forecasts.push(first);
    for t in 1..actuals.len() {
        let next = step(actuals[t - 1], forecasts[t - 1], alpha);
        forecasts.push(next);
    }
    Ok(forecasts)
}

#[inline]
fn step(prev_actual: f64, prev_forecast: f64, alpha: f64) -> f64 {
    alpha * prev_actual + (1.0 - alpha) * prev_forecast
}

pub(crate) fn check_alpha(alpha: f64) -> Result<()> {
    if !(alpha > 0.0 && alpha <= 1.0) {
        return Err(ForecastError::InvalidParameter(format!(
            "alpha must be in (0, 1], got {alpha}"
        )));
    }
    Ok(())
}

/// Exponential smoothing forecaster with a fixed smoothing coefficient.
///
/// # Example
/// ```
/// use supplychain_forecast::models::{ExponentialSmoothing, SeriesForecaster};
///
/// let model = ExponentialSmoothing::new(1.0).unwrap();
/// // With alpha = 1 the next forecast is the last actual.
/// assert_eq!(model.forecast_next(&[3.0, 5.0, 4.0]).unwrap(), 4.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExponentialSmoothing {
    alpha: f64,
}

impl ExponentialSmoothing {
    /// Create a model with smoothing coefficient `alpha` in `(0, 1]`.
    pub fn new(alpha: f64) -> Result<Self> {
        check_alpha(alpha)?;
        Ok(Self { alpha })
    }

    /// Get the smoothing parameter.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

impl SeriesForecaster for ExponentialSmoothing {
    fn forecast_in_sample(&self, actuals: &[f64]) -> Result<Vec<Option<f64>>> {
        let forecasts = exponential_smoothing_series(actuals, self.alpha)?;
        Ok(forecasts.into_iter().map(Some).collect())
    }

    fn forecast_next(&self, actuals: &[f64]) -> Result<f64> {
        let forecasts = exponential_smoothing_series(actuals, self.alpha)?;
        let n = actuals.len();
        Ok(step(actuals[n - 1], forecasts[n - 1], self.alpha))
    }

    fn name(&self) -> &str {
        "ExponentialSmoothing"
    }
}
