//! Baseline forecasting models.

mod sma;

pub use sma::{moving_average, moving_average_series, MovingAverage};
