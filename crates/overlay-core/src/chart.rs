// File: crates/overlay-core/src/chart.rs
// Summary: Chart input bundle and the bars -> overlays -> primitives pipeline.

use crate::bar::Bar;
use crate::config::IndicatorConfig;
use crate::geometry::{build_geometry, PrimitiveSet};
use crate::overlay::OverlaySet;
use crate::types::Viewport;

/// Everything one render pass depends on. Holds no derived state:
/// [`Chart::primitives`] recomputes from scratch on every call.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Chart {
    pub bars: Vec<Bar>,
    pub indicators: IndicatorConfig,
    pub viewport: Viewport,
}

impl Chart {
    pub fn new(bars: Vec<Bar>) -> Self {
        Self { bars, ..Self::default() }
    }

    pub fn with_indicators(mut self, indicators: IndicatorConfig) -> Self {
        self.indicators = indicators;
        self
    }

    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    pub fn overlays(&self) -> OverlaySet {
        OverlaySet::compute(&self.bars, &self.indicators)
    }

    pub fn primitives(&self) -> PrimitiveSet {
        build_chart(&self.bars, &self.indicators, &self.viewport)
    }
}

/// Compute enabled overlays and the drawing geometry in one go.
pub fn build_chart(bars: &[Bar], indicators: &IndicatorConfig, viewport: &Viewport) -> PrimitiveSet {
    let overlays = OverlaySet::compute(bars, indicators);
    build_geometry(bars, &overlays, viewport)
}
