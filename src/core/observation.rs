//! Row types of the sales and shipment tables.

use chrono::NaiveDate;
use serde::Deserialize;
use std::fmt;

/// One week of sales for a product at a wholesaler, with the forecast that
/// was made for it one week ahead.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WeeklyObservation {
    pub week_start: NaiveDate,
    pub wholesaler: String,
    pub product: String,
    /// Actual weekly sales (barrels).
    pub sales: f64,
    /// One-week-ahead forecast demand.
    pub forecast: f64,
}

impl WeeklyObservation {
    pub fn pair(&self) -> PairKey {
        PairKey::new(&self.product, &self.wholesaler)
    }
}

/// One week of shipped volume from the brewer to a wholesaler.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ShipmentRecord {
    pub year: i32,
    pub month: u32,
    pub week_start: NaiveDate,
    pub wholesaler: String,
    pub product: String,
    pub volume: f64,
}

impl ShipmentRecord {
    pub fn pair(&self) -> PairKey {
        PairKey::new(&self.product, &self.wholesaler)
    }
}

/// A product/wholesaler combination. Orders by product, then wholesaler.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PairKey {
    pub product: String,
    pub wholesaler: String,
}

impl PairKey {
    pub fn new(product: impl Into<String>, wholesaler: impl Into<String>) -> Self {
        Self {
            product: product.into(),
            wholesaler: wholesaler.into(),
        }
    }
}

impl fmt::Display for PairKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.product, self.wholesaler)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_keys_order_by_product_first() {
        let a = PairKey::new("Amber", "W2");
        let b = PairKey::new("Lager", "W1");
        assert!(a < b);
        assert_eq!(a.to_string(), "Amber / W2");
    }

    #[test]
    fn observation_pair() {
        let obs = WeeklyObservation {
            week_start: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            wholesaler: "W1".to_string(),
            product: "Lager".to_string(),
            sales: 10.0,
            forecast: 11.0,
        };
        assert_eq!(obs.pair(), PairKey::new("Lager", "W1"));
    }
}
