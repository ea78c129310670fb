//! Exponential smoothing models.
//!
//! - Simple exponential smoothing with a fixed coefficient
//! - Seasonally adjusted exponential smoothing over a weekly index

mod seasonal_es;
mod ses;

pub use seasonal_es::{seasonal_exponential_smoothing_series, SeasonalExponentialSmoothing};
pub use ses::{exponential_smoothing, exponential_smoothing_series, ExponentialSmoothing};
