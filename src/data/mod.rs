//! Ingestion of the sales and shipment tables and grouping into per-pair
//! series.

mod loader;

pub use loader::{load_sales, load_sales_file, load_shipments, load_shipments_file};

use crate::core::{PairKey, ShipmentRecord, TimeSeries, WeeklyObservation};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Actual sales and the one-week forecast for one pair, aligned by week.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SalesSeries {
    pub sales: TimeSeries,
    pub forecast: TimeSeries,
}

/// Group sales observations into one [`SalesSeries`] per product/wholesaler.
///
/// Rows sharing a pair and week are summed.
pub fn group_sales(observations: &[WeeklyObservation]) -> BTreeMap<PairKey, SalesSeries> {
    let mut points: BTreeMap<PairKey, Vec<(NaiveDate, f64, f64)>> = BTreeMap::new();
    for obs in observations {
        points
            .entry(obs.pair())
            .or_default()
            .push((obs.week_start, obs.sales, obs.forecast));
    }

    points
        .into_iter()
        .map(|(pair, rows)| {
            let sales = TimeSeries::from_points(rows.iter().map(|&(w, s, _)| (w, s)));
            let forecast = TimeSeries::from_points(rows.iter().map(|&(w, _, f)| (w, f)));
            (pair, SalesSeries { sales, forecast })
        })
        .collect()
}

/// Group shipment records into one shipped-volume series per pair.
pub fn group_shipments(records: &[ShipmentRecord]) -> BTreeMap<PairKey, TimeSeries> {
    let mut points: BTreeMap<PairKey, Vec<(NaiveDate, f64)>> = BTreeMap::new();
    for record in records {
        points
            .entry(record.pair())
            .or_default()
            .push((record.week_start, record.volume));
    }

    points
        .into_iter()
        .map(|(pair, rows)| (pair, TimeSeries::from_points(rows)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn obs(
        product: &str,
        wholesaler: &str,
        day: u32,
        sales: f64,
        forecast: f64,
    ) -> WeeklyObservation {
        WeeklyObservation {
            week_start: date(day),
            wholesaler: wholesaler.to_string(),
            product: product.to_string(),
            sales,
            forecast,
        }
    }

    #[test]
    fn group_sales_splits_pairs_and_sorts_weeks() {
        let rows = vec![
            obs("Lager", "W1", 8, 12.0, 11.0),
            obs("Lager", "W1", 1, 10.0, 9.0),
            obs("Lager", "W2", 1, 5.0, 6.0),
            obs("Lager", "W1", 8, 3.0, 1.0),
        ];
        let grouped = group_sales(&rows);

        assert_eq!(grouped.len(), 2);
        let w1 = &grouped[&PairKey::new("Lager", "W1")];
        assert_eq!(w1.sales.weeks(), &[date(1), date(8)]);
        assert_eq!(w1.sales.values(), &[10.0, 15.0]);
        assert_eq!(w1.forecast.values(), &[9.0, 12.0]);
    }

    #[test]
    fn group_shipments_by_pair() {
        let records = vec![
            ShipmentRecord {
                year: 2024,
                month: 1,
                week_start: date(8),
                wholesaler: "W1".to_string(),
                product: "Lager".to_string(),
                volume: 7.0,
            },
            ShipmentRecord {
                year: 2024,
                month: 1,
                week_start: date(1),
                wholesaler: "W1".to_string(),
                product: "Lager".to_string(),
                volume: 3.0,
            },
        ];
        let grouped = group_shipments(&records);
        let series = &grouped[&PairKey::new("Lager", "W1")];
        assert_eq!(series.values(), &[3.0, 7.0]);
    }

    #[test]
    fn empty_inputs_give_empty_groups() {
        assert!(group_sales(&[]).is_empty());
        assert!(group_shipments(&[]).is_empty());
    }
}
