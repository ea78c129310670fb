//! Accuracy metrics for forecast evaluation.

use crate::error::{ForecastError, Result};

/// MAPE together with the observations it was computed over.
///
/// Periods with a zero actual, or with a non-finite actual or forecast, are
/// left out of the average; `excluded` reports how many were dropped so a
/// shrinking `n` stays visible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapeSummary {
    /// Mean Absolute Percentage Error, in percent.
    pub mape: f64,
    /// Observations included in the average.
    pub included: usize,
    /// Observations skipped because the actual was zero or a value was not
    /// finite.
    pub excluded: usize,
}

impl MapeSummary {
    /// Total observations offered.
    pub fn total(&self) -> usize {
        self.included + self.excluded
    }
}

/// Mean Absolute Percentage Error, in percent.
///
/// `100 / n × Σ |a - f| / |a|` over pairs with `a != 0` and both values
/// finite, where `n` counts only those pairs.
///
/// # Example
/// ```
/// use supplychain_forecast::utils::mape;
///
/// let value = mape(&[100.0, 0.0, 50.0], &[110.0, 5.0, 45.0]).unwrap();
/// assert!((value - 10.0).abs() < 1e-10);
/// ```
pub fn mape(actuals: &[f64], forecasts: &[f64]) -> Result<f64> {
    mape_summary(actuals, forecasts).map(|s| s.mape)
}

/// MAPE with the counts of included and excluded observations.
///
/// # Errors
/// - `EmptyData` if either slice is empty
/// - `DimensionMismatch` if the slices differ in length
/// - `NoValidObservations` if no pair has a non-zero actual and finite values
pub fn mape_summary(actuals: &[f64], forecasts: &[f64]) -> Result<MapeSummary> {
    if actuals.is_empty() || forecasts.is_empty() {
        return Err(ForecastError::EmptyData);
    }

    if actuals.len() != forecasts.len() {
        return Err(ForecastError::DimensionMismatch {
            expected: actuals.len(),
            got: forecasts.len(),
        });
    }

    let mut sum = 0.0;
    let mut included = 0usize;
    for (a, f) in actuals.iter().zip(forecasts.iter()) {
        if *a == 0.0 || !a.is_finite() || !f.is_finite() {
            continue;
        }
        sum += (a - f).abs() / a.abs();
        included += 1;
    }

    if included == 0 {
        return Err(ForecastError::NoValidObservations);
    }

    Ok(MapeSummary {
        mape: 100.0 * sum / included as f64,
        included,
        excluded: actuals.len() - included,
    })
}

/// MAPE over aligned slices where some forecasts are undefined.
///
/// Pairs with a `None` forecast are dropped before the MAPE is computed and
/// are not counted as excluded.
pub fn mape_partial(actuals: &[f64], forecasts: &[Option<f64>]) -> Result<MapeSummary> {
    if actuals.len() != forecasts.len() {
        return Err(ForecastError::DimensionMismatch {
            expected: actuals.len(),
            got: forecasts.len(),
        });
    }

    let (a, f): (Vec<f64>, Vec<f64>) = actuals
        .iter()
        .zip(forecasts.iter())
        .filter_map(|(a, f)| f.map(|f| (*a, f)))
        .unzip();

    mape_summary(&a, &f)
}
