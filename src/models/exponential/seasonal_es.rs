//! Seasonally adjusted exponential smoothing.
//!
//! Actuals are deseasonalized with their week's factor, smoothed, and each
//! forecast is reseasonalized with the factor of the week it forecasts.
//!
//! A week whose factor is zero (the product never sells in that week of the
//! cycle) is forecast as zero and leaves the smoothed level untouched.

use super::ses::check_alpha;
use crate::core::TimeSeries;
use crate::error::{ForecastError, Result};
use crate::seasonality::{deseasonalize, reseasonalize, SeasonalIndex};

/// Seasonally adjusted forecast sequence over aligned actuals and factors.
///
/// The level is seeded by the first week with a non-zero factor.
///
/// # Errors
/// - `InvalidParameter` for an out-of-range `alpha` or a non-finite factor
/// - `DimensionMismatch` if `actuals` and `indices` differ in length
/// - `EmptyData` if `actuals` is empty
pub fn seasonal_exponential_smoothing_series(
    actuals: &[f64],
    indices: &[f64],
    alpha: f64,
) -> Result<Vec<f64>> {
    check_alpha(alpha)?;
    if actuals.is_empty() {
        return Err(ForecastError::EmptyData);
    }
    if actuals.len() != indices.len() {
        return Err(ForecastError::DimensionMismatch {
            expected: actuals.len(),
            got: indices.len(),
        });
    }

    let mut forecasts = Vec::with_capacity(actuals.len());
    let mut level: Option<f64> = None;
    for (&actual, &factor) in actuals.iter().zip(indices) {
        if factor == 0.0 {
            forecasts.push(0.0);
            continue;
        }
        let adjusted = deseasonalize(actual, factor)?;
        let current = level.unwrap_or(adjusted);
        forecasts.push(reseasonalize(current, factor)?);
        level = Some(alpha * adjusted + (1.0 - alpha) * current);
    }
    Ok(forecasts)
}

/// Exponential smoothing on a deseasonalized weekly series.
#[derive(Debug, Clone)]
pub struct SeasonalExponentialSmoothing {
    alpha: f64,
    index: SeasonalIndex,
}

impl SeasonalExponentialSmoothing {
    /// Create a model with smoothing coefficient `alpha` in `(0, 1]`.
    pub fn new(alpha: f64, index: SeasonalIndex) -> Result<Self> {
        check_alpha(alpha)?;
        Ok(Self { alpha, index })
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn index(&self) -> &SeasonalIndex {
        &self.index
    }

    /// Forecast sequence aligned with the weeks of `series`.
    ///
    /// # Errors
    /// Returns `InvalidParameter` if a week has no seasonal factor.
    pub fn forecast_series(&self, series: &TimeSeries) -> Result<Vec<f64>> {
        let factors = self.index.factors_for(series.weeks())?;
        seasonal_exponential_smoothing_series(series.values(), &factors, self.alpha)
    }
}
