// File: crates/overlay-core/src/overlay.rs
// Summary: Computes the enabled overlay series for a bar sequence.

use tracing::debug;

use crate::bar::{closes, Bar};
use crate::config::IndicatorConfig;
use crate::indicator::{bollinger, ema, BollingerPoint};

/// Overlay series aligned with the bars they were computed from.
/// `None` means the indicator is disabled.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OverlaySet {
    pub ema: Option<Vec<f64>>,
    pub bollinger: Option<Vec<BollingerPoint>>,
    /// Emit the Bollinger moving average as its own polyline.
    pub show_bollinger_middle: bool,
}

impl OverlaySet {
    pub fn compute(bars: &[Bar], config: &IndicatorConfig) -> Self {
        let values = closes(bars);
        let ema_series = config.ema.enabled.then(|| ema(&values, config.ema.period));
        let bb_series = config
            .bollinger
            .enabled
            .then(|| bollinger(&values, config.bollinger.period, config.bollinger.multiplier));
        debug!(
            bars = bars.len(),
            ema = ema_series.is_some(),
            bollinger = bb_series.is_some(),
            "computed overlays"
        );
        Self {
            ema: ema_series,
            bollinger: bb_series,
            show_bollinger_middle: config.bollinger.show_middle,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ema.is_none() && self.bollinger.is_none()
    }

    /// EMA value at `i`, NaN when disabled or out of range.
    pub fn ema_at(&self, i: usize) -> f64 {
        self.ema.as_ref().and_then(|s| s.get(i).copied()).unwrap_or(f64::NAN)
    }

    /// Bollinger sample at `i`, undefined when disabled or out of range.
    pub fn bollinger_at(&self, i: usize) -> BollingerPoint {
        self.bollinger
            .as_ref()
            .and_then(|s| s.get(i).copied())
            .unwrap_or(BollingerPoint::UNDEFINED)
    }
}
