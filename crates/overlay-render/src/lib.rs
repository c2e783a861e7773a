// File: crates/overlay-render/src/lib.rs
// Summary: Renderers for overlay-core primitive sets (SVG always, PNG with `raster`).

pub mod svg;
pub mod theme;
#[cfg(feature = "raster")]
pub mod raster;

pub use svg::SvgRenderer;
pub use theme::{Rgba, Theme};
#[cfg(feature = "raster")]
pub use raster::RasterRenderer;

/// Drawing options shared by all backends.
#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub theme: Theme,
    /// Draw price labels next to the value ticks. Off keeps output free of
    /// font-dependent pixels.
    pub draw_labels: bool,
    /// Prepended to every tick label.
    pub label_prefix: String,
    pub font_size: f32,
    pub ema_width: f32,
    pub band_width: f32,
    /// Dash on/off lengths for the Bollinger band strokes.
    pub band_dash: [f32; 2],
    pub wick_width: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            draw_labels: true,
            label_prefix: String::from("$"),
            font_size: 10.0,
            ema_width: 2.0,
            band_width: 1.5,
            band_dash: [4.0, 4.0],
            wick_width: 1.5,
        }
    }
}
