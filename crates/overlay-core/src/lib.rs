// File: crates/overlay-core/src/lib.rs
// Summary: Core library entry point; indicator math, scales and chart geometry.

pub mod axis;
pub mod bar;
pub mod chart;
pub mod config;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod indicator;
pub mod overlay;
pub mod scale;
pub mod types;

pub use axis::AxisTick;
pub use bar::{closes, Bar};
pub use chart::{build_chart, Chart};
pub use config::{BollingerConfig, EmaConfig, IndicatorConfig};
pub use error::{BarError, ConfigError};
pub use geometry::{build_geometry, value_domain, CandleGeometry, OverlayKind, Polyline, PrimitiveSet};
pub use indicator::{bollinger, ema, BollingerPoint};
pub use overlay::OverlaySet;
pub use scale::{make_scale, LinearScale};
pub use types::{Insets, Point, Rect, Segment, Viewport};
