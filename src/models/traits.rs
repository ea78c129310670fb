//! Forecaster trait defining the common interface for smoothing models.

use crate::error::Result;

/// Common interface for one-step-ahead forecasters.
///
/// Forecasters are stateless: the same model can be applied to any number
/// of series. The trait is object-safe and can be used with
/// `Box<dyn SeriesForecaster>`.
pub trait SeriesForecaster {
    /// In-sample one-step-ahead forecasts aligned with `actuals`.
    ///
    /// Entry `t` is the forecast for period `t` made from periods before it;
    /// `None` where the model has no forecast yet.
    fn forecast_in_sample(&self, actuals: &[f64]) -> Result<Vec<Option<f64>>>;

    /// Forecast for the period following the last actual.
    fn forecast_next(&self, actuals: &[f64]) -> Result<f64>;

    /// Get the model name.
    fn name(&self) -> &str;
}

/// Type alias for boxed forecaster trait objects.
///
/// # Example
///
/// ```
/// use supplychain_forecast::models::{
///     BoxedForecaster, ExponentialSmoothing, MovingAverage, SeriesForecaster,
/// };
///
/// let models: Vec<BoxedForecaster> = vec![
///     Box::new(MovingAverage::new(3).unwrap()),
///     Box::new(ExponentialSmoothing::new(0.3).unwrap()),
/// ];
/// let names: Vec<&str> = models.iter().map(|m| m.name()).collect();
/// assert_eq!(names, ["MovingAverage", "ExponentialSmoothing"]);
/// ```
pub type BoxedForecaster = Box<dyn SeriesForecaster>;
