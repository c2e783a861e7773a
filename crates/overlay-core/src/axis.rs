// File: crates/overlay-core/src/axis.rs
// Summary: Value-axis ticks: gridline positions with price labels.

use serde::{Deserialize, Serialize};

use crate::grid::{linspace, TICK_COUNT};
use crate::types::{Point, Rect, Segment};

/// Length of the tick mark drawn left of the plot frame.
pub const TICK_MARK_LEN: f64 = 5.0;

/// One horizontal gridline of the value axis.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    /// Fraction of the inner height from the top, in `[0, 1]`.
    pub ratio: f64,
    /// Vertical position on the canvas.
    pub y: f64,
    /// Domain value at `y`.
    pub value: f64,
    /// `value` rounded to zero decimals.
    pub label: String,
    /// Short mark just outside the left edge of the plot.
    pub mark: Segment,
}

/// Five evenly spaced ticks over `plot`, labelled by interpolating the
/// value domain from `max` at the top to `min` at the bottom.
pub fn value_ticks(plot: &Rect, min: f64, max: f64) -> Vec<AxisTick> {
    linspace(0.0, 1.0, TICK_COUNT)
        .into_iter()
        .map(|ratio| {
            let y = plot.y + plot.height * ratio;
            let value = min + (max - min) * (1.0 - ratio);
            AxisTick {
                ratio,
                y,
                value,
                label: format_price(value),
                mark: Segment::new(Point::new(plot.x - TICK_MARK_LEN, y), Point::new(plot.x, y)),
            }
        })
        .collect()
}

/// Zero-decimal label. Halves round away from zero and `-0` prints as `0`.
pub fn format_price(value: f64) -> String {
    if !value.is_finite() {
        return String::from("-");
    }
    let r = value.round();
    let r = if r == 0.0 { 0.0 } else { r };
    format!("{r:.0}")
}
