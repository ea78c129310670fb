//! Seasonal adjustment.
//!
//! - Seasonal index estimation per product (week-of-cycle factors)
//! - Deseasonalize / reseasonalize with a multiplicative factor

mod adjust;
mod index;

pub use adjust::{deseasonalize, deseasonalize_series, reseasonalize, reseasonalize_series};
pub use index::{SeasonalIndex, SeasonalIndexConfig, SeasonalIndexTable};
