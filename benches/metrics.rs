//! Benchmarks for the metric and smoothing functions.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use supplychain_forecast::bullwhip::{measure_bullwhip_effect, BullwhipConfig};
use supplychain_forecast::core::TimeSeries;
use supplychain_forecast::models::{exponential_smoothing_series, moving_average_series};
use supplychain_forecast::utils::{mape, sample_variance};

fn generate_weekly_sales(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| 100.0 + 20.0 * (2.0 * std::f64::consts::PI * i as f64 / 52.0).sin())
        .collect()
}

fn weekly_series(values: &[f64]) -> TimeSeries {
    let base = chrono::NaiveDate::from_ymd_opt(2020, 1, 6).unwrap();
    let weeks = (0..values.len())
        .map(|i| base + chrono::Duration::weeks(i as i64))
        .collect();
    TimeSeries::new(weeks, values.to_vec()).unwrap()
}

fn bench_metrics(c: &mut Criterion) {
    let mut group = c.benchmark_group("metrics");

    for size in [52, 260, 1040].iter() {
        let actuals = generate_weekly_sales(*size);
        let forecasts: Vec<f64> = actuals.iter().map(|a| a * 1.05).collect();

        group.bench_with_input(BenchmarkId::new("mape", size), size, |b, _| {
            b.iter(|| mape(black_box(&actuals), black_box(&forecasts)))
        });

        group.bench_with_input(BenchmarkId::new("sample_variance", size), size, |b, _| {
            b.iter(|| sample_variance(black_box(&actuals)))
        });
    }

    group.finish();
}

fn bench_smoothing(c: &mut Criterion) {
    let mut group = c.benchmark_group("smoothing");

    for size in [52, 260, 1040].iter() {
        let actuals = generate_weekly_sales(*size);

        group.bench_with_input(BenchmarkId::new("exponential", size), size, |b, _| {
            b.iter(|| exponential_smoothing_series(black_box(&actuals), 0.3))
        });

        group.bench_with_input(BenchmarkId::new("moving_average", size), size, |b, _| {
            b.iter(|| moving_average_series(black_box(&actuals), 4))
        });
    }

    group.finish();
}

fn bench_bullwhip(c: &mut Criterion) {
    let demand = weekly_series(&generate_weekly_sales(520));
    let shipped: Vec<f64> = demand
        .values()
        .iter()
        .enumerate()
        .map(|(i, d)| if i % 4 == 0 { d * 4.0 } else { 0.0 })
        .collect();
    let shipments = weekly_series(&shipped);
    let config = BullwhipConfig::default();

    c.bench_function("bullwhip_monthly_10y", |b| {
        b.iter(|| measure_bullwhip_effect(black_box(&demand), black_box(&shipments), &config))
    });
}

criterion_group!(benches, bench_metrics, bench_smoothing, bench_bullwhip);
criterion_main!(benches);
