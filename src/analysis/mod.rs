//! Batch analysis over a sales table and a shipment table.
//!
//! Every pair is analyzed independently. A failure for one pair is kept in
//! that pair's row and does not stop the batch.

mod config;

pub use config::{AnalysisConfig, AnalysisConfigBuilder};

use crate::bullwhip::{measure_bullwhip_effect, BullwhipMeasurement};
use crate::core::{PairKey, Period, ShipmentRecord, TimeSeries, WeeklyObservation};
use crate::data::{group_sales, group_shipments, SalesSeries};
use crate::error::{ForecastError, Result};
use crate::models::{
    seasonal_exponential_smoothing_series, BoxedForecaster, ExponentialSmoothing, MovingAverage,
};
use crate::seasonality::{SeasonalIndex, SeasonalIndexTable};
use crate::utils::metrics::{mape_partial, mape_summary, MapeSummary};
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, warn};

/// Name under which the seasonally adjusted model is scored.
pub const SEASONAL_MODEL_NAME: &str = "SeasonalExponentialSmoothing";

/// MAPE of one forecaster on one pair.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelScore {
    pub model: String,
    pub result: Result<MapeSummary>,
}

/// Forecast accuracy for one product/wholesaler pair.
#[derive(Debug, Clone, PartialEq)]
pub struct PairAccuracy {
    pub pair: PairKey,
    /// Weeks of sales recorded for the pair.
    pub weeks: usize,
    /// MAPE of the one-week forecast supplied with the data.
    pub given: Result<MapeSummary>,
    /// MAPE of each in-sample forecaster, in evaluation order.
    pub models: Vec<ModelScore>,
}

impl PairAccuracy {
    /// Score of a model by name.
    pub fn model(&self, name: &str) -> Option<&Result<MapeSummary>> {
        self.models
            .iter()
            .find(|m| m.model == name)
            .map(|m| &m.result)
    }

    /// Model with the lowest MAPE, if any model could be scored.
    pub fn best_model(&self) -> Option<(&str, f64)> {
        self.models
            .iter()
            .filter_map(|m| m.result.as_ref().ok().map(|s| (m.model.as_str(), s.mape)))
            .min_by(|a, b| a.1.total_cmp(&b.1))
    }
}

/// Bullwhip measurement for one pair.
#[derive(Debug, Clone, PartialEq)]
pub struct PairBullwhip {
    pub pair: PairKey,
    pub result: Result<BullwhipMeasurement>,
}

/// Everything computed by [`analyze`].
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    /// MAPE of the supplied forecast over all rows.
    pub overall: Result<MapeSummary>,
    pub accuracy: Vec<PairAccuracy>,
    pub seasonal: SeasonalIndexTable,
    pub bullwhip: Vec<PairBullwhip>,
    /// Aggregation period used for the bullwhip measurement.
    pub period: Period,
}

/// Run the full analysis.
///
/// # Errors
/// Returns `InvalidParameter` if `config` fails validation. Per-pair
/// problems are reported inside the returned rows.
pub fn analyze(
    sales: &[WeeklyObservation],
    shipments: &[ShipmentRecord],
    config: &AnalysisConfig,
) -> Result<AnalysisReport> {
    config.validate()?;

    let actuals: Vec<f64> = sales.iter().map(|o| o.sales).collect();
    let forecasts: Vec<f64> = sales.iter().map(|o| o.forecast).collect();
    let overall = mape_summary(&actuals, &forecasts);

    let seasonal = SeasonalIndexTable::from_observations(sales, &config.seasonal);
    for (product, reason) in seasonal.excluded() {
        warn!(product, %reason, "no seasonal index available");
    }

    let sales_by_pair = group_sales(sales);
    let shipments_by_pair = group_shipments(shipments);

    let models: Vec<BoxedForecaster> = vec![
        Box::new(MovingAverage::new(config.ma_window)?),
        Box::new(ExponentialSmoothing::new(config.alpha)?),
    ];

    let accuracy = sales_by_pair
        .iter()
        .map(|(pair, series)| {
            let index = seasonal.index(&pair.product);
            pair_accuracy(pair, series, &models, index, config.alpha)
        })
        .collect();

    let bullwhip = bullwhip_by_pair(&sales_by_pair, &shipments_by_pair, config);

    debug!(
        rows = sales.len(),
        pairs = sales_by_pair.len(),
        indexed_products = seasonal.len(),
        "analysis complete"
    );

    Ok(AnalysisReport {
        overall,
        accuracy,
        seasonal,
        bullwhip,
        period: config.bullwhip.period,
    })
}

fn pair_accuracy(
    pair: &PairKey,
    series: &SalesSeries,
    models: &[BoxedForecaster],
    index: Option<&SeasonalIndex>,
    alpha: f64,
) -> PairAccuracy {
    let actuals = series.sales.values();
    let given = mape_summary(actuals, series.forecast.values());

    let mut scores: Vec<ModelScore> = models
        .iter()
        .map(|model| ModelScore {
            model: model.name().to_string(),
            result: model
                .forecast_in_sample(actuals)
                .and_then(|f| score_after_seed(actuals, f)),
        })
        .collect();

    let seasonal_result = match index {
        Some(index) => seasonal_forecasts(&series.sales, index, alpha)
            .and_then(|f| score_after_seed(actuals, f.into_iter().map(Some).collect())),
        None => Err(ForecastError::MissingIndex(pair.product.clone())),
    };
    scores.push(ModelScore {
        model: SEASONAL_MODEL_NAME.to_string(),
        result: seasonal_result,
    });

    debug!(pair = %pair, weeks = actuals.len(), "scored forecasters");

    PairAccuracy {
        pair: pair.clone(),
        weeks: actuals.len(),
        given,
        models: scores,
    }
}

fn seasonal_forecasts(sales: &TimeSeries, index: &SeasonalIndex, alpha: f64) -> Result<Vec<f64>> {
    let factors = index.factors_for(sales.weeks())?;
    seasonal_exponential_smoothing_series(sales.values(), &factors, alpha)
}

/// MAPE of in-sample forecasts, leaving out the first period, which only
/// seeds the recurrences.
fn score_after_seed(actuals: &[f64], mut forecasts: Vec<Option<f64>>) -> Result<MapeSummary> {
    if let Some(first) = forecasts.first_mut() {
        *first = None;
    }
    mape_partial(actuals, &forecasts)
}

fn bullwhip_by_pair(
    sales: &BTreeMap<PairKey, SalesSeries>,
    shipments: &BTreeMap<PairKey, TimeSeries>,
    config: &AnalysisConfig,
) -> Vec<PairBullwhip> {
    let pairs: BTreeSet<&PairKey> = sales.keys().chain(shipments.keys()).collect();

    pairs
        .into_iter()
        .map(|pair| {
            let result = match (sales.get(pair), shipments.get(pair)) {
                (Some(demand), Some(shipped)) => {
                    measure_bullwhip_effect(&demand.sales, shipped, &config.bullwhip)
                }
                (None, _) => Err(ForecastError::MissingSeries {
                    kind: "sales",
                    pair: pair.to_string(),
                }),
                (_, None) => Err(ForecastError::MissingSeries {
                    kind: "shipments",
                    pair: pair.to_string(),
                }),
            };
            if let Err(err) = &result {
                debug!(pair = %pair, error = %err, "bullwhip ratio unavailable");
            }
            PairBullwhip {
                pair: pair.clone(),
                result,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::{Duration, NaiveDate};

    fn monday(week: i64) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + Duration::weeks(week)
    }

    fn sale(wholesaler: &str, week: i64, sales: f64, forecast: f64) -> WeeklyObservation {
        WeeklyObservation {
            week_start: monday(week),
            wholesaler: wholesaler.to_string(),
            product: "Lager".to_string(),
            sales,
            forecast,
        }
    }

    #[test]
    fn score_after_seed_ignores_first_period() {
        let summary = score_after_seed(&[10.0, 20.0], vec![Some(0.0), Some(18.0)]).unwrap();
        assert_relative_eq!(summary.mape, 10.0, epsilon = 1e-12);
        assert_eq!(summary.included, 1);
    }

    #[test]
    fn pair_without_shipments_is_reported() {
        let sales = vec![sale("W1", 0, 10.0, 10.0), sale("W1", 1, 12.0, 11.0)];
        let report = analyze(&sales, &[], &AnalysisConfig::default()).unwrap();

        assert_eq!(report.bullwhip.len(), 1);
        assert!(matches!(
            report.bullwhip[0].result,
            Err(ForecastError::MissingSeries { kind: "shipments", .. })
        ));
    }

    #[test]
    fn given_forecast_mape_per_pair() {
        let sales = vec![
            sale("W1", 0, 100.0, 90.0),
            sale("W1", 1, 0.0, 5.0),
            sale("W2", 0, 50.0, 60.0),
        ];
        let report = analyze(&sales, &[], &AnalysisConfig::default()).unwrap();

        let overall = report.overall.unwrap();
        assert_relative_eq!(overall.mape, 15.0, epsilon = 1e-10);
        assert_eq!(overall.excluded, 1);

        let w1 = report.accuracy[0].given.as_ref().unwrap();
        assert_relative_eq!(w1.mape, 10.0, epsilon = 1e-10);
        assert_eq!(w1.excluded, 1);

        let w2 = report.accuracy[1].given.as_ref().unwrap();
        assert_relative_eq!(w2.mape, 20.0, epsilon = 1e-10);
    }

    #[test]
    fn week_without_sales_keeps_seasonal_model_scored() {
        let sales: Vec<WeeklyObservation> = [10.0, 12.0, 0.0, 11.0, 13.0, 12.0]
            .iter()
            .enumerate()
            .map(|(week, &value)| sale("W1", week as i64, value, value))
            .collect();
        let report = analyze(&sales, &[], &AnalysisConfig::default()).unwrap();

        assert!(report.seasonal.index("Lager").is_some());
        let seasonal = report.accuracy[0].model(SEASONAL_MODEL_NAME).unwrap();
        let summary = seasonal.as_ref().unwrap();
        assert_eq!(summary.included, 4);
        assert_eq!(summary.excluded, 1);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = AnalysisConfig {
            alpha: 2.0,
            ..Default::default()
        };
        assert!(analyze(&[], &[], &config).is_err());
    }

    #[test]
    fn best_model_picks_lowest_mape() {
        let accuracy = PairAccuracy {
            pair: PairKey::new("Lager", "W1"),
            weeks: 3,
            given: Err(ForecastError::EmptyData),
            models: vec![
                ModelScore {
                    model: "A".to_string(),
                    result: Ok(MapeSummary {
                        mape: 12.0,
                        included: 2,
                        excluded: 0,
                    }),
                },
                ModelScore {
                    model: "B".to_string(),
                    result: Ok(MapeSummary {
                        mape: 8.0,
                        included: 2,
                        excluded: 0,
                    }),
                },
                ModelScore {
                    model: "C".to_string(),
                    result: Err(ForecastError::NoValidObservations),
                },
            ],
        };
        assert_eq!(accuracy.best_model(), Some(("B", 8.0)));
        assert!(accuracy.model("C").unwrap().is_err());
        assert!(accuracy.model("D").is_none());
    }
}
