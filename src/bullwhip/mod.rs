//! Bullwhip-effect measurement.
//!
//! The bullwhip ratio compares the variance of shipments (upstream) with the
//! variance of sales (downstream) over matching periods. A ratio above one
//! means variability is amplified moving up the supply chain.

mod measure;

pub use measure::{
    bullwhip_ratio, bullwhip_ratio_from_series, measure_bullwhip_effect, BullwhipConfig,
    BullwhipMeasurement,
};
