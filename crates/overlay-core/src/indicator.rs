// File: crates/overlay-core/src/indicator.rs
// Summary: Overlay indicators (EMA, Bollinger bands) over a flat price series.
// Every output is index-aligned with its input; NaN marks "not enough history yet".

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// One Bollinger sample. All three fields are NaN during warm-up.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BollingerPoint {
    pub moving_average: f64,
    pub upper_band: f64,
    pub lower_band: f64,
}

impl BollingerPoint {
    pub const UNDEFINED: Self = Self { moving_average: f64::NAN, upper_band: f64::NAN, lower_band: f64::NAN };

    pub fn is_defined(&self) -> bool { !self.moving_average.is_nan() }
}

/// Exponential moving average with smoothing factor `k = 2 / (period + 1)`.
///
/// The running average is seeded with the first value, so there is no
/// leading gap: the output always has the input's length and
/// `out[0] == values[0]`.
pub fn ema(values: &[f64], period: usize) -> Vec<f64> {
    let k = 2.0 / (period as f64 + 1.0);
    let mut out = Vec::with_capacity(values.len());
    let mut prev: Option<f64> = None;
    for &v in values {
        let p = prev.unwrap_or(v);
        let next = v * k + p * (1.0 - k);
        out.push(next);
        prev = Some(next);
    }
    out
}

/// Bollinger bands over a FIFO window of at most `period` values.
///
/// Entries before the window first fills are [`BollingerPoint::UNDEFINED`].
/// Standard deviation is the population one (divide by window size).
pub fn bollinger(values: &[f64], period: usize, multiplier: f64) -> Vec<BollingerPoint> {
    let mut out = Vec::with_capacity(values.len());
    let mut win: VecDeque<f64> = VecDeque::with_capacity(period.min(values.len()) + 1);
    let mut sum = 0.0f64;
    for &v in values {
        win.push_back(v);
        sum += v;
        if win.len() > period {
            if let Some(old) = win.pop_front() { sum -= old; }
        }
        // period == 0 drains the window every step; 0/0 keeps the entry NaN.
        let full = win.len() >= period;
        let n = win.len() as f64;
        let ma = if full { sum / n } else { f64::NAN };
        let std = if full {
            (win.iter().map(|x| (x - ma) * (x - ma)).sum::<f64>() / n).sqrt()
        } else {
            f64::NAN
        };
        out.push(BollingerPoint {
            moving_average: ma,
            upper_band: ma + multiplier * std,
            lower_band: ma - multiplier * std,
        });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ema_single_value() {
        assert_eq!(ema(&[42.0], 20), vec![42.0]);
    }

    #[test]
    fn bollinger_period_zero_is_all_nan() {
        let out = bollinger(&[1.0, 2.0, 3.0], 0, 2.0);
        assert_eq!(out.len(), 3);
        assert!(out.iter().all(|p| !p.is_defined()));
    }
}
