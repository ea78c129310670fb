//! Core data structures for weekly supply-chain series.

mod observation;
mod period;
mod time_series;

pub use observation::{PairKey, ShipmentRecord, WeeklyObservation};
pub use period::{week_of_cycle, Period, PeriodKey};
pub use time_series::TimeSeries;
