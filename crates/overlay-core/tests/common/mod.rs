// File: crates/overlay-core/tests/common/mod.rs
// Purpose: Shared bar fixtures for integration tests.

#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use overlay_core::Bar;

pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

/// Hourly bar `i` with the given OHLC and no volume.
pub fn bar(i: i64, o: f64, h: f64, l: f64, c: f64) -> Bar {
    Bar { timestamp: t0() + Duration::hours(i), open: o, high: h, low: l, close: c, volume: None }
}

/// The three-bar fixture: o/h/l/c = 10/12/9/11, 11/13/10/12, 12/12/11/11.5.
pub fn three_bars() -> Vec<Bar> {
    vec![
        bar(0, 10.0, 12.0, 9.0, 11.0),
        bar(1, 11.0, 13.0, 10.0, 12.0),
        bar(2, 12.0, 12.0, 11.0, 11.5),
    ]
}

/// Bars whose closes follow `closes`, with a one-unit range around open/close.
pub fn bars_from_closes(closes: &[f64]) -> Vec<Bar> {
    let mut prev = closes.first().copied().unwrap_or(0.0);
    closes
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            let o = prev;
            prev = c;
            bar(i as i64, o, o.max(c) + 1.0, o.min(c) - 1.0, c)
        })
        .collect()
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
