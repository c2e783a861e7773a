// File: crates/overlay-core/tests/indicators.rs
// Purpose: EMA and Bollinger band numerics, warm-up policy and alignment.

mod common;

use common::{approx, bars_from_closes};
use overlay_core::{bollinger, ema, IndicatorConfig, OverlaySet};

#[test]
fn ema_keeps_length_and_first_value() {
    let values = [3.0, 7.5, 1.25, 9.0, 4.0, 4.0, 12.0];
    for period in [1usize, 2, 5, 20] {
        let out = ema(&values, period);
        assert_eq!(out.len(), values.len());
        assert_eq!(out[0], values[0]);
    }
}

#[test]
fn ema_flat_series_stays_flat() {
    assert_eq!(ema(&[5.0, 5.0, 5.0, 5.0], 3), vec![5.0, 5.0, 5.0, 5.0]);
}

#[test]
fn ema_empty_input_is_empty() {
    assert!(ema(&[], 20).is_empty());
}

#[test]
fn ema_recurrence() {
    // k = 2 / (3 + 1) = 0.5
    let out = ema(&[2.0, 4.0, 8.0], 3);
    assert!(approx(out[1], 4.0 * 0.5 + 2.0 * 0.5));
    assert!(approx(out[2], 8.0 * 0.5 + 3.0 * 0.5));
}

#[test]
fn ema_period_one_tracks_input() {
    let values = [1.0, 4.0, 2.0, 8.0];
    assert_eq!(ema(&values, 1), values.to_vec());
}

#[test]
fn bollinger_warm_up_is_undefined() {
    let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    let out = bollinger(&values, 4, 2.0);
    assert_eq!(out.len(), values.len());
    for p in &out[..3] {
        assert!(p.moving_average.is_nan());
        assert!(p.upper_band.is_nan());
        assert!(p.lower_band.is_nan());
        assert!(!p.is_defined());
    }
    assert!(out[3..].iter().all(|p| p.is_defined()));
}

#[test]
fn bollinger_population_stddev() {
    let out = bollinger(&[1.0, 2.0, 3.0, 4.0, 5.0], 3, 2.0);
    // window [1, 2, 3]: mean 2, variance 2/3
    let std = (2.0f64 / 3.0).sqrt();
    assert!(approx(out[2].moving_average, 2.0));
    assert!(approx(out[2].upper_band, 2.0 + 2.0 * std));
    assert!(approx(out[2].lower_band, 2.0 - 2.0 * std));
    // window slides: [3, 4, 5]
    assert!(approx(out[4].moving_average, 4.0));
}

#[test]
fn bollinger_bands_are_symmetric() {
    let values = [10.0, 10.5, 9.75, 11.0, 12.25, 11.5, 10.0, 13.0, 12.5];
    let period = 4;
    let mult = 2.5;
    let out = bollinger(&values, period, mult);
    for i in (period - 1)..values.len() {
        let win = &values[i + 1 - period..=i];
        let mean = win.iter().sum::<f64>() / period as f64;
        let std = (win.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / period as f64).sqrt();
        let p = out[i];
        let up = p.upper_band - p.moving_average;
        let down = p.moving_average - p.lower_band;
        assert!((up - down).abs() < 1e-9, "asymmetric at {i}");
        assert!((up - mult * std).abs() < 1e-9, "width mismatch at {i}");
    }
}

#[test]
fn bollinger_flat_series_has_zero_width() {
    let out = bollinger(&[7.0; 6], 3, 2.0);
    for p in &out[2..] {
        assert!(approx(p.upper_band, 7.0));
        assert!(approx(p.lower_band, 7.0));
    }
}

#[test]
fn bollinger_shorter_than_period_is_all_undefined() {
    let out = bollinger(&[1.0, 2.0], 20, 2.0);
    assert_eq!(out.len(), 2);
    assert!(out.iter().all(|p| !p.is_defined()));
}

#[test]
fn overlay_set_respects_enabled_flags() {
    let bars = bars_from_closes(&[1.0, 2.0, 3.0, 4.0]);

    let none = OverlaySet::compute(&bars, &IndicatorConfig::none());
    assert!(none.is_empty());
    assert!(none.ema_at(0).is_nan());

    let both = OverlaySet::compute(&bars, &IndicatorConfig::none().with_ema(2).with_bollinger(2, 2.0));
    assert_eq!(both.ema.as_ref().map(Vec::len), Some(4));
    assert_eq!(both.bollinger.as_ref().map(Vec::len), Some(4));
    assert_eq!(both.ema_at(0), 1.0);
    assert!(!both.bollinger_at(0).is_defined());
    assert!(both.bollinger_at(1).is_defined());
    assert!(!both.bollinger_at(99).is_defined());
}
