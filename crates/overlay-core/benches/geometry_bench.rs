use chrono::{Duration, TimeZone, Utc};
use criterion::{criterion_group, criterion_main, black_box, BenchmarkId, Criterion};
use overlay_core::{build_chart, Bar, IndicatorConfig, Viewport};

fn gen_bars(n: usize) -> Vec<Bar> {
    let t0 = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let mut v = Vec::with_capacity(n);
    let mut price = 100.0f64;
    for i in 0..n {
        let open = price;
        let close = open + (i as f64 * 0.01).sin();
        let high = open.max(close) + 0.5;
        let low = open.min(close) - 0.5;
        price = close;
        v.push(Bar { timestamp: t0 + Duration::hours(i as i64), open, high, low, close, volume: None });
    }
    v
}

fn bench_build_chart(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_chart");
    let vp = Viewport::default();
    let cfg = IndicatorConfig::default().with_bollinger(20, 2.0);
    for &n in &[1_000usize, 5_000usize] {
        let bars = gen_bars(n);
        group.bench_with_input(BenchmarkId::from_parameter(format!("n{n}")), &bars, |b, bars| {
            b.iter(|| black_box(build_chart(bars, &cfg, &vp)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build_chart);
criterion_main!(benches);
