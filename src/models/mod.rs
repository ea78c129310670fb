//! Forecasting models.

mod traits;

pub mod baseline;
pub mod exponential;

pub use baseline::{moving_average, moving_average_series, MovingAverage};
pub use exponential::{
    exponential_smoothing, exponential_smoothing_series, seasonal_exponential_smoothing_series,
    ExponentialSmoothing, SeasonalExponentialSmoothing,
};
pub use traits::{BoxedForecaster, SeriesForecaster};
