//! Metric and statistics helpers shared by the forecasting modules.

pub mod metrics;
pub mod stats;

pub use metrics::{mape, mape_partial, mape_summary, MapeSummary};
pub use stats::{mean, sample_variance, variance_with_ddof};
