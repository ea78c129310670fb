//! Simple moving average forecasting.
//!
//! The forecast for period `t` is the mean of the `window` actuals before it.

use crate::error::{ForecastError, Result};
use crate::models::SeriesForecaster;

/// Forecast the period after the last actual as the mean of the last
/// `window` actuals.
///
/// # Errors
/// - `InvalidParameter` if `window` is zero
/// - `InsufficientData` if there are fewer than `window` actuals
///
/// # Example
/// ```
/// use supplychain_forecast::models::moving_average;
///
/// let next = moving_average(&[10.0, 12.0, 11.0, 13.0], 2).unwrap();
/// assert!((next - 12.0).abs() < 1e-12);
/// ```
pub fn moving_average(actuals: &[f64], window: usize) -> Result<f64> {
    check_window(window)?;
    if actuals.len() < window {
        return Err(ForecastError::InsufficientData {
            needed: window,
            got: actuals.len(),
        });
    }
    let tail = &actuals[actuals.len() - window..];
    Ok(tail.iter().sum::<f64>() / window as f64)
}

/// Moving-average forecasts aligned with `actuals`.
///
/// Entry `t` is the mean of `actuals[t - window..t]`, and `None` for
/// `t < window`.
///
/// # Errors
/// - `InvalidParameter` if `window` is zero
/// - `EmptyData` if `actuals` is empty
pub fn moving_average_series(actuals: &[f64], window: usize) -> Result<Vec<Option<f64>>> {
    check_window(window)?;
    if actuals.is_empty() {
        return Err(ForecastError::EmptyData);
    }

    let mut forecasts = Vec::with_capacity(actuals.len());
    let mut running = 0.0;
    for (t, &value) in actuals.iter().enumerate() {
        if t < window {
            forecasts.push(None);
        } else {
            forecasts.push(Some(running / window as f64));
            running -= actuals[t - window];
        }
        running += value;
    }
    Ok(forecasts)
}

fn check_window(window: usize) -> Result<()> {
    if window == 0 {
        return Err(ForecastError::InvalidParameter(
            "window must be positive".to_string(),
        ));
    }
    Ok(())
}

/// Moving average forecaster with a fixed window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovingAverage {
    window: usize,
}

impl MovingAverage {
    /// Create a moving average over the given number of periods.
    pub fn new(window: usize) -> Result<Self> {
        check_window(window)?;
        Ok(Self { window })
    }

    /// Get the window size.
    pub fn window(&self) -> usize {
        self.window
    }
}

impl SeriesForecaster for MovingAverage {
    fn forecast_in_sample(&self, actuals: &[f64]) -> Result<Vec<Option<f64>>> {
        moving_average_series(actuals, self.window)
    }

    fn forecast_next(&self, actuals: &[f64]) -> Result<f64> {
        moving_average(actuals, self.window)
    }

    fn name(&self) -> &str {
        "MovingAverage"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn moving_average_uses_last_window() {
        let values = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        assert_relative_eq!(moving_average(&values, 3).unwrap(), 4.0, epsilon = 1e-12);
        assert_relative_eq!(moving_average(&values, 5).unwrap(), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn moving_average_rejects_zero_window() {
        let result = moving_average(&[1.0, 2.0], 0);
        assert!(matches!(result, Err(ForecastError::InvalidParameter(_))));
        assert!(MovingAverage::new(0).is_err());
    }

    #[test]
    fn moving_average_needs_enough_data() {
        let result = moving_average(&[1.0, 2.0], 3);
        assert_eq!(
            result,
            Err(ForecastError::InsufficientData { needed: 3, got: 2 })
        );
    }

    #[test]
    fn series_is_undefined_before_window() {
        let values = vec![10.0, 12.0, 11.0, 13.0, 12.0];
        let forecasts = moving_average_series(&values, 2).unwrap();

        assert_eq!(forecasts.len(), values.len());
        assert!(forecasts[0].is_none());
        assert!(forecasts[1].is_none());
        assert_relative_eq!(forecasts[2].unwrap(), 11.0, epsilon = 1e-12);
        assert_relative_eq!(forecasts[3].unwrap(), 11.5, epsilon = 1e-12);
        assert_relative_eq!(forecasts[4].unwrap(), 12.0, epsilon = 1e-12);
    }

    #[test]
    fn series_shorter_than_window_is_all_none() {
        let forecasts = moving_average_series(&[1.0, 2.0], 4).unwrap();
        assert_eq!(forecasts, vec![None, None]);
    }

    #[test]
    fn series_empty_is_an_error() {
        assert_eq!(moving_average_series(&[], 2), Err(ForecastError::EmptyData));
    }

    #[test]
    fn forecaster_matches_free_functions() {
        let values = vec![4.0, 8.0, 6.0, 10.0];
        let model = MovingAverage::new(2).unwrap();

        assert_eq!(model.window(), 2);
        assert_eq!(model.name(), "MovingAverage");
        assert_eq!(
            model.forecast_in_sample(&values).unwrap(),
            moving_average_series(&values, 2).unwrap()
        );
        assert_relative_eq!(model.forecast_next(&values).unwrap(), 8.0, epsilon = 1e-12);
    }
}
