//! Configuration for the batch analysis.

use crate::bullwhip::BullwhipConfig;
use crate::core::Period;
use crate::error::{ForecastError, Result};
use crate::models::{ExponentialSmoothing, MovingAverage};
use crate::seasonality::SeasonalIndexConfig;

/// Parameters for [`analyze`](super::analyze).
///
/// # Example
/// ```
/// use supplychain_forecast::analysis::AnalysisConfig;
/// use supplychain_forecast::core::Period;
///
/// let config = AnalysisConfig::builder()
///     .alpha(0.2)
///     .ma_window(3)
///     .period(Period::Quarter)
///     .build()
///     .unwrap();
/// assert_eq!(config.ma_window, 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    /// Smoothing coefficient for exponential smoothing, in `(0, 1]`.
    pub alpha: f64,
    /// Window of the moving-average forecaster.
    pub ma_window: usize,
    pub bullwhip: BullwhipConfig,
    pub seasonal: SeasonalIndexConfig,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            alpha: 0.3,
            ma_window: 4,
            bullwhip: BullwhipConfig::default(),
            seasonal: SeasonalIndexConfig::default(),
        }
    }
}

impl AnalysisConfig {
    pub fn builder() -> AnalysisConfigBuilder {
        AnalysisConfigBuilder::new()
    }

    /// Check every parameter is in range.
    pub fn validate(&self) -> Result<()> {
        ExponentialSmoothing::new(self.alpha)?;
        MovingAverage::new(self.ma_window)?;

        let epsilon = self.bullwhip.epsilon;
        if !epsilon.is_finite() || epsilon < 0.0 {
            return Err(ForecastError::InvalidParameter(format!(
                "epsilon must be finite and non-negative, got {epsilon}"
            )));
        }
        if self.seasonal.min_periods == 0 {
            return Err(ForecastError::InvalidParameter(
                "min_periods must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for [`AnalysisConfig`].
#[derive(Debug, Clone, Default)]
pub struct AnalysisConfigBuilder {
    config: AnalysisConfig,
}

impl AnalysisConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alpha(mut self, alpha: f64) -> Self {
        self.config.alpha = alpha;
        self
    }

    pub fn ma_window(mut self, window: usize) -> Self {
        self.config.ma_window = window;
        self
    }

    /// Aggregation period for the bullwhip measurement.
    pub fn period(mut self, period: Period) -> Self {
        self.config.bullwhip.period = period;
        self
    }

    pub fn ddof(mut self, ddof: usize) -> Self {
        self.config.bullwhip.ddof = ddof;
        self
    }

    pub fn epsilon(mut self, epsilon: f64) -> Self {
        self.config.bullwhip.epsilon = epsilon;
        self
    }

    /// Minimum distinct weeks-of-cycle for a seasonal index.
    pub fn min_periods(mut self, min_periods: usize) -> Self {
        self.config.seasonal.min_periods = min_periods;
        self
    }

    pub fn build(self) -> Result<AnalysisConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = AnalysisConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.alpha, 0.3);
        assert_eq!(config.ma_window, 4);
        assert_eq!(config.bullwhip.period, Period::Month);
        assert_eq!(config.bullwhip.ddof, 1);
        assert_eq!(config.seasonal.min_periods, 2);
    }

    #[test]
    fn builder_sets_fields() {
        let config = AnalysisConfig::builder()
            .alpha(1.0)
            .ma_window(2)
            .period(Period::Week)
            .ddof(0)
            .epsilon(1e-9)
            .min_periods(4)
            .build()
            .unwrap();

        assert_eq!(config.alpha, 1.0);
        assert_eq!(config.ma_window, 2);
        assert_eq!(config.bullwhip.period, Period::Week);
        assert_eq!(config.bullwhip.ddof, 0);
        assert_eq!(config.bullwhip.epsilon, 1e-9);
        assert_eq!(config.seasonal.min_periods, 4);
    }

    #[test]
    fn builder_rejects_out_of_range_values() {
        assert!(AnalysisConfig::builder().alpha(0.0).build().is_err());
        assert!(AnalysisConfig::builder().ma_window(0).build().is_err());
        assert!(AnalysisConfig::builder().epsilon(-1.0).build().is_err());
        assert!(AnalysisConfig::builder().min_periods(0).build().is_err());
    }

    #[test]
    fn struct_update_syntax() {
        let config = AnalysisConfig {
            alpha: 0.5,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
        assert_eq!(config.ma_window, 4);
    }
}
