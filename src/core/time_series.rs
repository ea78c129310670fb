//! Weekly time series for a single product/wholesaler pair.

use crate::core::period::{Period, PeriodKey};
use crate::error::{ForecastError, Result};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// A weekly time series: week-start dates with one value per week.
///
/// Weeks are strictly increasing. Gaps between weeks are allowed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeSeries {
    weeks: Vec<NaiveDate>,
    values: Vec<f64>,
}

impl TimeSeries {
    /// Create a series from aligned week and value vectors.
    ///
    /// # Errors
    /// Returns `DimensionMismatch` if the lengths differ and `TimestampError`
    /// if the weeks are not strictly increasing.
    pub fn new(weeks: Vec<NaiveDate>, values: Vec<f64>) -> Result<Self> {
        if weeks.len() != values.len() {
            return Err(ForecastError::DimensionMismatch {
                expected: weeks.len(),
                got: values.len(),
            });
        }

        for i in 1..weeks.len() {
            if weeks[i] <= weeks[i - 1] {
                return Err(ForecastError::TimestampError(format!(
                    "weeks must be strictly increasing ({} follows {})",
                    weeks[i],
                    weeks[i - 1]
                )));
            }
        }

        Ok(Self { weeks, values })
    }

    /// Build a series from unordered points, summing values that share a week.
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = (NaiveDate, f64)>,
    {
        let mut by_week: BTreeMap<NaiveDate, f64> = BTreeMap::new();
        for (week, value) in points {
            *by_week.entry(week).or_insert(0.0) += value;
        }
        let (weeks, values) = by_week.into_iter().unzip();
        Self { weeks, values }
    }

    /// Get the number of observations.
    pub fn len(&self) -> usize {
        self.weeks.len()
    }

    /// Check if the series is empty.
    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }

    /// Week-start dates, ascending.
    pub fn weeks(&self) -> &[NaiveDate] {
        &self.weeks
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Iterate over `(week, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, f64)> + '_ {
        self.weeks.iter().copied().zip(self.values.iter().copied())
    }

    /// First and last week covered, if any.
    pub fn span(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((*self.weeks.first()?, *self.weeks.last()?))
    }

    /// Sum values into calendar periods, ascending by period.
    pub fn aggregate(&self, period: Period) -> BTreeMap<PeriodKey, f64> {
        let mut totals = BTreeMap::new();
        for (week, value) in self.iter() {
            *totals.entry(period.key(week)).or_insert(0.0) += value;
        }
        totals
    }
}
