//! Calendar period granularity used for aggregation.

use chrono::{Datelike, NaiveDate};
use std::fmt;

/// Granularity to which weekly values are aggregated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Period {
    /// ISO week.
    Week,
    /// Calendar month.
    #[default]
    Month,
    /// Calendar quarter.
    Quarter,
}

impl Period {
    /// The period a date falls into.
    pub fn key(self, date: NaiveDate) -> PeriodKey {
        match self {
            Period::Week => {
                let iso = date.iso_week();
                PeriodKey {
                    period: self,
                    year: iso.year(),
                    index: iso.week(),
                }
            }
            Period::Month => PeriodKey {
                period: self,
                year: date.year(),
                index: date.month(),
            },
            Period::Quarter => PeriodKey {
                period: self,
                year: date.year(),
                index: (date.month() - 1) / 3 + 1,
            },
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Period::Week => "week",
            Period::Month => "month",
            Period::Quarter => "quarter",
        };
        f.write_str(name)
    }
}

/// Identifies one calendar period; orders chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PeriodKey {
    pub year: i32,
    pub index: u32,
    pub period: Period,
}

impl fmt::Display for PeriodKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.period {
            Period::Week => write!(f, "{}-W{:02}", self.year, self.index),
            Period::Month => write!(f, "{}-{:02}", self.year, self.index),
            Period::Quarter => write!(f, "{}-Q{}", self.year, self.index),
        }
    }
}

/// Week-of-cycle used by seasonal indices: the ISO week number (1..=53).
pub fn week_of_cycle(date: NaiveDate) -> u32 {
    date.iso_week().week()
}
