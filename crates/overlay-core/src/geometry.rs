// File: crates/overlay-core/src/geometry.rs
// Summary: Turns bars plus overlay series into renderer-agnostic drawing primitives.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::axis::{value_ticks, AxisTick};
use crate::bar::Bar;
use crate::overlay::OverlaySet;
use crate::scale::LinearScale;
use crate::types::{Point, Rect, Segment, Viewport};

/// Fraction of the value span added above and below the data.
pub const DOMAIN_MARGIN: f64 = 0.02;
/// Body width as a fraction of the per-bar spacing.
pub const BODY_WIDTH_RATIO: f64 = 0.6;
pub const MIN_BODY_WIDTH: f64 = 1.5;
pub const MIN_BODY_HEIGHT: f64 = 1.0;

/// Shape of one bar: a wick from high to low and a body from open to close.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CandleGeometry {
    pub index: usize,
    /// `from` is the high end, `to` the low end. Both share the same x.
    pub wick: Segment,
    pub body: Rect,
    pub bullish: bool,
}

impl CandleGeometry {
    pub fn wick_x(&self) -> f64 { self.wick.from.x }
    pub fn y_high(&self) -> f64 { self.wick.from.y }
    pub fn y_low(&self) -> f64 { self.wick.to.y }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OverlayKind {
    Ema,
    BollingerUpper,
    BollingerMiddle,
    BollingerLower,
}

impl OverlayKind {
    pub fn label(&self) -> &'static str {
        match self {
            OverlayKind::Ema => "EMA",
            OverlayKind::BollingerUpper => "BB upper",
            OverlayKind::BollingerMiddle => "BB middle",
            OverlayKind::BollingerLower => "BB lower",
        }
    }
}

/// Ordered points of one overlay. Undefined samples are skipped, so
/// consecutive points are not necessarily consecutive bars.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    pub kind: OverlayKind,
    pub points: Vec<Point>,
}

impl Polyline {
    /// SVG path data: `M x,y L x,y ...`; empty for no points.
    pub fn to_path_data(&self) -> String {
        path_data(&self.points)
    }

    /// Drawable as a line (at least two points).
    pub fn is_drawable(&self) -> bool { self.points.len() > 1 }
}

pub fn path_data(points: &[Point]) -> String {
    let mut out = String::new();
    for (i, p) in points.iter().enumerate() {
        if i == 0 {
            out.push('M');
        } else {
            out.push_str(" L");
        }
        out.push_str(&format!("{},{}", p.x, p.y));
    }
    out
}

/// Everything a renderer needs for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct PrimitiveSet {
    pub viewport: Viewport,
    /// Inner plot rectangle.
    pub plot: Rect,
    /// Vertical value domain after margin expansion, `[min, max]`.
    pub value_domain: [f64; 2],
    pub x_scale: LinearScale,
    pub y_scale: LinearScale,
    pub candles: Vec<CandleGeometry>,
    pub polylines: Vec<Polyline>,
    /// Closed polygon between the Bollinger bands: upper band left to right,
    /// then lower band right to left.
    pub band_fill: Option<Vec<Point>>,
    pub ticks: Vec<AxisTick>,
    /// Left and bottom edges of the plot frame.
    pub frame: [Segment; 2],
}

impl PrimitiveSet {
    /// No data-derived shapes. The frame is viewport chrome and not counted.
    pub fn is_empty(&self) -> bool {
        self.candles.is_empty() && self.polylines.is_empty() && self.ticks.is_empty()
    }

    pub fn polyline(&self, kind: OverlayKind) -> Option<&Polyline> {
        self.polylines.iter().find(|p| p.kind == kind)
    }
}

fn frame_of(plot: &Rect) -> [Segment; 2] {
    let bl = Point::new(plot.x, plot.bottom());
    [
        Segment::new(Point::new(plot.x, plot.y), bl),
        Segment::new(bl, Point::new(plot.right(), plot.bottom())),
    ]
}

/// Vertical domain `[min, max]` covering bars and enabled overlays, with
/// margin. Undefined overlay samples fall back to the bar's own low, high
/// or close so they cannot distort the range.
pub fn value_domain(bars: &[Bar], overlays: &OverlaySet) -> [f64; 2] {
    if bars.is_empty() {
        return [0.0, 1.0];
    }
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    let mut take = |v: f64| {
        lo = lo.min(v);
        hi = hi.max(v);
    };
    for (i, b) in bars.iter().enumerate() {
        take(b.low);
        take(b.high);
        if overlays.bollinger.is_some() {
            let bb = overlays.bollinger_at(i);
            take(defined_or(bb.lower_band, b.low));
            take(defined_or(bb.upper_band, b.high));
        }
        if overlays.ema.is_some() {
            take(defined_or(overlays.ema_at(i), b.close));
        }
    }
    if !(lo.is_finite() && hi.is_finite()) {
        lo = bars.iter().map(|b| b.low).fold(f64::INFINITY, f64::min);
        hi = bars.iter().map(|b| b.high).fold(f64::NEG_INFINITY, f64::max);
    }
    if !(lo.is_finite() && hi.is_finite()) {
        return [0.0, 1.0];
    }
    let span = hi - lo;
    let pad = if span == 0.0 { 1.0 } else { span * DOMAIN_MARGIN };
    [lo - pad, hi + pad]
}

fn overlay_line(
    kind: OverlayKind,
    values: impl Iterator<Item = f64>,
    x_scale: &LinearScale,
    y_scale: &LinearScale,
) -> Polyline {
    let points = values
        .enumerate()
        .filter(|(_, v)| v.is_finite())
        .map(|(i, v)| Point::new(x_scale.apply(i as f64), y_scale.apply(v)))
        .collect();
    Polyline { kind, points }
}

#[inline]
fn defined_or(v: f64, fallback: f64) -> f64 {
    if v.is_nan() { fallback } else { v }
}

/// Build the full primitive set for one render pass.
pub fn build_geometry(bars: &[Bar], overlays: &OverlaySet, viewport: &Viewport) -> PrimitiveSet {
    let plot = viewport.plot_rect();
    let frame = frame_of(&plot);

    if bars.is_empty() {
        debug!("no bars; returning empty primitive set");
        return PrimitiveSet {
            viewport: *viewport,
            plot,
            value_domain: [0.0, 1.0],
            x_scale: LinearScale::identity(),
            y_scale: LinearScale::identity(),
            candles: Vec::new(),
            polylines: Vec::new(),
            band_fill: None,
            ticks: Vec::new(),
            frame,
        };
    }

    let n = bars.len();
    let [min, max] = value_domain(bars, overlays);
    let x_scale = LinearScale::new([0.0, (n.saturating_sub(1)).max(1) as f64], [plot.x, plot.right()]);
    let y_scale = LinearScale::new([min, max], [plot.bottom(), plot.y]);

    let spacing = plot.width / n as f64;
    let body_w = (spacing * BODY_WIDTH_RATIO).max(MIN_BODY_WIDTH);

    let candles = bars
        .iter()
        .enumerate()
        .map(|(i, b)| {
            let x = x_scale.apply(i as f64);
            let y_o = y_scale.apply(b.open);
            let y_c = y_scale.apply(b.close);
            let top = y_o.min(y_c);
            let height = (y_o - y_c).abs().max(MIN_BODY_HEIGHT);
            CandleGeometry {
                index: i,
                wick: Segment::new(Point::new(x, y_scale.apply(b.high)), Point::new(x, y_scale.apply(b.low))),
                body: Rect::from_ltwh(x - body_w / 2.0, top, body_w, height),
                bullish: b.is_bullish(),
            }
        })
        .collect::<Vec<_>>();

    let mut polylines = Vec::new();
    let mut band_fill = None;
    if let Some(bb) = &overlays.bollinger {
        let upper = overlay_line(OverlayKind::BollingerUpper, bb.iter().map(|p| p.upper_band), &x_scale, &y_scale);
        let lower = overlay_line(OverlayKind::BollingerLower, bb.iter().map(|p| p.lower_band), &x_scale, &y_scale);
        if upper.is_drawable() && lower.is_drawable() {
            let mut poly = upper.points.clone();
            poly.extend(lower.points.iter().rev().copied());
            band_fill = Some(poly);
        }
        polylines.push(upper);
        if overlays.show_bollinger_middle {
            polylines.push(overlay_line(
                OverlayKind::BollingerMiddle,
                bb.iter().map(|p| p.moving_average),
                &x_scale,
                &y_scale,
            ));
        }
        polylines.push(lower);
    }
    if let Some(ema) = &overlays.ema {
        polylines.push(overlay_line(OverlayKind::Ema, ema.iter().copied(), &x_scale, &y_scale));
    }

    let ticks = value_ticks(&plot, min, max);

    debug!(
        bars = n,
        polylines = polylines.len(),
        domain_min = min,
        domain_max = max,
        body_width = body_w,
        "built chart geometry"
    );

    PrimitiveSet {
        viewport: *viewport,
        plot,
        value_domain: [min, max],
        x_scale,
        y_scale,
        candles,
        polylines,
        band_fill,
        ticks,
        frame,
    }
}
