// File: crates/overlay-core/src/types.rs
// Summary: Shared types and constants (canvas size, paddings, points).

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default logical canvas width.
pub const WIDTH: f64 = 1000.0;
/// Default logical canvas height.
pub const HEIGHT: f64 = 420.0;

/// Canvas margins around the inner plot rectangle, in logical units.
/// Contract: all fields are finite and non-negative (see [`Viewport::validate`]).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Insets {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Insets {
    pub const fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self { left, right, top, bottom }
    }
    pub const fn zero() -> Self { Self::new(0.0, 0.0, 0.0, 0.0) }
    /// Total horizontal inset (left + right).
    pub fn hsum(&self) -> f64 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub fn vsum(&self) -> f64 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(50.0, 20.0, 20.0, 30.0)
    }
}

/// Fixed logical drawing surface: canvas size plus padding.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub padding: Insets,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { width: WIDTH, height: HEIGHT, padding: Insets::default() }
    }
}

impl Viewport {
    pub fn new(width: f64, height: f64, padding: Insets) -> Self {
        Self { width, height, padding }
    }

    pub fn inner_width(&self) -> f64 { self.width - self.padding.hsum() }
    pub fn inner_height(&self) -> f64 { self.height - self.padding.vsum() }

    /// Inner plot rectangle, where candles and overlays are drawn.
    pub fn plot_rect(&self) -> Rect {
        Rect::from_ltwh(self.padding.left, self.padding.top, self.inner_width(), self.inner_height())
    }

    /// Reject sizes that are non-finite or leave no inner plot area.
    /// Geometry building itself never calls this; it is for config loaders.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = &self.padding;
        let all = [self.width, self.height, p.left, p.right, p.top, p.bottom];
        if all.iter().any(|v| !v.is_finite()) {
            return Err(ConfigError::NonFiniteViewport);
        }
        if [p.left, p.right, p.top, p.bottom].iter().any(|v| *v < 0.0) {
            return Err(ConfigError::NegativePadding);
        }
        if self.inner_width() <= 0.0 || self.inner_height() <= 0.0 {
            return Err(ConfigError::EmptyPlotArea { width: self.width, height: self.height });
        }
        Ok(())
    }
}

/// A position on the drawing surface.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self { Self { x, y } }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn from_ltwh(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }
    pub fn right(&self) -> f64 { self.x + self.width }
    pub fn bottom(&self) -> f64 { self.y + self.height }
}

/// Straight line segment between two points.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

impl Segment {
    pub const fn new(from: Point, to: Point) -> Self { Self { from, to } }
}
