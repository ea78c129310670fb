//! Multiplicative seasonal indices per product.
//!
//! A product's sales are summed across wholesalers for each week. The index
//! for a week-of-cycle (ISO week number) is the average weekly total in that
//! week-of-cycle divided by the mean weekly total over the whole series.
//! A week-of-cycle with no sales gets a factor of zero.

use crate::core::{week_of_cycle, TimeSeries, WeeklyObservation};
use crate::error::{ForecastError, Result};
use crate::utils::stats::{mean, sample_variance};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Configuration for seasonal index estimation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonalIndexConfig {
    /// Minimum number of distinct weeks-of-cycle a product needs.
    pub min_periods: usize,
}

impl Default for SeasonalIndexConfig {
    fn default() -> Self {
        Self { min_periods: 2 }
    }
}

/// Seasonal factor per week-of-cycle for one product.
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonalIndex {
    factors: BTreeMap<u32, f64>,
}

impl SeasonalIndex {
    /// Estimate the index from one or more series of the same product.
    ///
    /// # Errors
    /// - `EmptyData` if every series is empty
    /// - `InsufficientData` if fewer than `config.min_periods` distinct
    ///   weeks-of-cycle are covered
    /// - `NoValidObservations` if the mean weekly total is zero
    pub fn estimate<'a, I>(series: I, config: &SeasonalIndexConfig) -> Result<Self>
    where
        I: IntoIterator<Item = &'a TimeSeries>,
    {
        let aggregate = TimeSeries::from_points(series.into_iter().flat_map(|s| s.iter()));
        if aggregate.is_empty() {
            return Err(ForecastError::EmptyData);
        }

        let mut by_cycle: BTreeMap<u32, Vec<f64>> = BTreeMap::new();
        for (week, total) in aggregate.iter() {
            by_cycle.entry(week_of_cycle(week)).or_default().push(total);
        }

        let min_periods = config.min_periods.max(1);
        if by_cycle.len() < min_periods {
            return Err(ForecastError::InsufficientData {
                needed: min_periods,
                got: by_cycle.len(),
            });
        }

        let overall = mean(aggregate.values())?;
        if overall == 0.0 || !overall.is_finite() {
            return Err(ForecastError::NoValidObservations);
        }

        let mut factors = BTreeMap::new();
        for (cycle, totals) in by_cycle {
            factors.insert(cycle, mean(&totals)? / overall);
        }
        Ok(Self { factors })
    }

    /// Build an index from precomputed factors keyed by week-of-cycle.
    pub fn from_factors(factors: BTreeMap<u32, f64>) -> Self {
        Self { factors }
    }

    /// Factor for a week-of-cycle.
    pub fn factor(&self, cycle: u32) -> Option<f64> {
        self.factors.get(&cycle).copied()
    }

    /// Factor for the week-of-cycle a date falls in.
    pub fn factor_for_date(&self, date: NaiveDate) -> Option<f64> {
        self.factor(week_of_cycle(date))
    }

    /// Factors aligned with the given weeks.
    ///
    /// # Errors
    /// Returns `InvalidParameter` if a week's cycle has no factor.
    pub fn factors_for(&self, weeks: &[NaiveDate]) -> Result<Vec<f64>> {
        weeks
            .iter()
            .map(|&week| {
                self.factor_for_date(week).ok_or_else(|| {
                    ForecastError::InvalidParameter(format!(
                        "no seasonal factor for week {} of {week}",
                        week_of_cycle(week)
                    ))
                })
            })
            .collect()
    }

    /// `(week_of_cycle, factor)` pairs in ascending week order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.factors.iter().map(|(&k, &v)| (k, v))
    }

    pub fn len(&self) -> usize {
        self.factors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }

    /// Seasonal strength: sample variance of the factors.
    ///
    /// Higher values mean stronger seasonality.
    pub fn strength(&self) -> Result<f64> {
        let values: Vec<f64> = self.factors.values().copied().collect();
        sample_variance(&values)
    }
}

/// Seasonal indices for every product in a dataset.
///
/// Products that could not be indexed are kept with the reason, so callers
/// see "no index available" instead of a guessed factor.
#[derive(Debug, Clone, Default)]
pub struct SeasonalIndexTable {
    indices: BTreeMap<String, SeasonalIndex>,
    excluded: BTreeMap<String, ForecastError>,
}

impl SeasonalIndexTable {
    /// Estimate one index per product from weekly sales observations.
    pub fn from_observations(
        observations: &[WeeklyObservation],
        config: &SeasonalIndexConfig,
    ) -> Self {
        let mut by_product: BTreeMap<&str, Vec<(NaiveDate, f64)>> = BTreeMap::new();
        for obs in observations {
            by_product
                .entry(obs.product.as_str())
                .or_default()
                .push((obs.week_start, obs.sales));
        }

        let mut table = Self::default();
        for (product, points) in by_product {
            let series = TimeSeries::from_points(points);
            match SeasonalIndex::estimate([&series], config) {
                Ok(index) => {
                    table.indices.insert(product.to_string(), index);
                }
                Err(err) => {
                    table.excluded.insert(product.to_string(), err);
                }
            }
        }
        table
    }

    /// Index for a product, if one is available.
    pub fn index(&self, product: &str) -> Option<&SeasonalIndex> {
        self.indices.get(product)
    }

    /// Index for a product.
    ///
    /// # Errors
    /// Returns `MissingIndex` if the product was excluded or never seen.
    pub fn get(&self, product: &str) -> Result<&SeasonalIndex> {
        self.index(product)
            .ok_or_else(|| ForecastError::MissingIndex(product.to_string()))
    }

    /// Indexed products in name order.
    pub fn indices(&self) -> impl Iterator<Item = (&str, &SeasonalIndex)> {
        self.indices.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Products without an index and the reason they were excluded.
    pub fn excluded(&self) -> impl Iterator<Item = (&str, &ForecastError)> {
        self.excluded.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}
