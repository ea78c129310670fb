//! # supplychain-forecast
//!
//! Retrospective forecast-accuracy metrics and smoothing forecasts for
//! weekly sales and shipment data in a multi-tier supply chain.
//!
//! Provides MAPE with explicit zero-actual handling, moving-average and
//! exponential-smoothing forecasters, weekly seasonal indices with
//! deseasonalize/reseasonalize, and bullwhip-effect measurement, plus CSV
//! ingestion and a batch analysis that renders text summary tables.
//!
//! # Example
//! ```
//! use supplychain_forecast::prelude::*;
//!
//! let actuals = [10.0, 12.0, 11.0, 13.0, 12.0];
//! let forecasts = exponential_smoothing_series(&actuals, 0.3).unwrap();
//! let summary = mape_summary(&actuals[1..], &forecasts[1..]).unwrap();
//! assert_eq!(summary.included, 4);
//! ```

pub mod analysis;
pub mod bullwhip;
pub mod core;
pub mod data;
pub mod error;
pub mod models;
pub mod report;
pub mod seasonality;
pub mod utils;

pub use error::{ForecastError, Result};

pub mod prelude {
    pub use crate::analysis::{analyze, AnalysisConfig, AnalysisReport};
    pub use crate::bullwhip::{bullwhip_ratio, measure_bullwhip_effect, BullwhipConfig};
    pub use crate::core::{PairKey, Period, ShipmentRecord, TimeSeries, WeeklyObservation};
    pub use crate::error::{ForecastError, Result};
    pub use crate::models::{
        exponential_smoothing, exponential_smoothing_series, moving_average, SeriesForecaster,
    };
    pub use crate::seasonality::{deseasonalize, reseasonalize, SeasonalIndex};
    pub use crate::utils::{mape, mape_summary, sample_variance, MapeSummary};
}
