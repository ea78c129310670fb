//! Variance-ratio computation and period aggregation.

use crate::core::{Period, TimeSeries};
use crate::error::{ForecastError, Result};
use crate::utils::stats::variance_with_ddof;

/// Configuration for bullwhip measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BullwhipConfig {
    /// Granularity both series are summed to before comparing variances.
    pub period: Period,
    /// Delta degrees of freedom for the variances (1 = sample variance).
    pub ddof: usize,
    /// Floor applied to the demand variance; 0 disables it.
    pub epsilon: f64,
}

impl Default for BullwhipConfig {
    fn default() -> Self {
        Self {
            period: Period::Month,
            ddof: 1,
            epsilon: 0.0,
        }
    }
}

/// Result of a bullwhip measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BullwhipMeasurement {
    /// `var_shipments / var_demand`
    pub ratio: f64,
    pub var_shipments: f64,
    pub var_demand: f64,
    /// Periods present in both series with finite totals after aggregation.
    pub n_periods: usize,
}

impl BullwhipMeasurement {
    /// Whether variability grows moving upstream.
    pub fn amplifies(&self) -> bool {
        self.ratio > 1.0
    }
}

/// Ratio of upstream (shipment) variance to downstream (demand) variance.
///
/// # Errors
/// - `InvalidParameter` if either variance is negative or not finite
/// - `ZeroVariance` if the downstream variance is zero
///
/// # Example
/// ```
/// use supplychain_forecast::bullwhip::bullwhip_ratio;
///
/// assert_eq!(bullwhip_ratio(4.0, 4.0).unwrap(), 1.0);
/// assert!(bullwhip_ratio(9.0, 3.0).unwrap() > 1.0);
/// ```
pub fn bullwhip_ratio(upstream_variance: f64, downstream_variance: f64) -> Result<f64> {
    ratio_with_floor(upstream_variance, downstream_variance, 0.0)
}

fn ratio_with_floor(upstream: f64, downstream: f64, epsilon: f64) -> Result<f64> {
    for (name, v) in [("upstream", upstream), ("downstream", downstream)] {
        if !v.is_finite() || v < 0.0 {
            return Err(ForecastError::InvalidParameter(format!(
                "{name} variance must be finite and non-negative, got {v}"
            )));
        }
    }

    let denom = if downstream > epsilon {
        downstream
    } else {
        epsilon
    };
    if denom == 0.0 {
        return Err(ForecastError::ZeroVariance(
            "demand variance is zero; bullwhip ratio undefined".to_string(),
        ));
    }
    Ok(upstream / denom)
}

/// Bullwhip ratio from raw shipment and demand values, without aggregation.
///
/// The two slices need not be the same length.
pub fn bullwhip_ratio_from_series(
    shipments: &[f64],
    demand: &[f64],
    config: &BullwhipConfig,
) -> Result<f64> {
    check_epsilon(config.epsilon)?;
    let var_ship = variance_with_ddof(shipments, config.ddof)?;
    let var_demand = variance_with_ddof(demand, config.ddof)?;
    ratio_with_floor(var_ship, var_demand, config.epsilon)
}

/// Aggregate weekly demand and shipments to `config.period` and compare
/// their variances over the periods both series cover.
///
/// A shared period is dropped from both sides when either total is not
/// finite, so the variances and `n_periods` always describe the same periods.
///
/// # Errors
/// - `EmptyData` if the series share no period with finite totals
/// - `InsufficientData` if too few shared periods remain for the variance
/// - `ZeroVariance` if aggregated demand is constant
pub fn measure_bullwhip_effect(
    demand: &TimeSeries,
    shipments: &TimeSeries,
    config: &BullwhipConfig,
) -> Result<BullwhipMeasurement> {
    check_epsilon(config.epsilon)?;

    let demand_totals = demand.aggregate(config.period);
    let shipment_totals = shipments.aggregate(config.period);

    let (demand_values, shipment_values): (Vec<f64>, Vec<f64>) = demand_totals
        .iter()
        .filter_map(|(key, d)| shipment_totals.get(key).map(|s| (*d, *s)))
        .filter(|(d, s)| d.is_finite() && s.is_finite())
        .unzip();

    if demand_values.is_empty() {
        return Err(ForecastError::EmptyData);
    }

    let var_demand = variance_with_ddof(&demand_values, config.ddof)?;
    let var_shipments = variance_with_ddof(&shipment_values, config.ddof)?;
    let ratio = ratio_with_floor(var_shipments, var_demand, config.epsilon)?;

    Ok(BullwhipMeasurement {
        ratio,
        var_shipments,
        var_demand,
        n_periods: demand_values.len(),
    })
}

fn check_epsilon(epsilon: f64) -> Result<()> {
    if !epsilon.is_finite() || epsilon < 0.0 {
        return Err(ForecastError::InvalidParameter(format!(
            "epsilon must be finite and non-negative, got {epsilon}"
        )));
    }
    Ok(())
}
