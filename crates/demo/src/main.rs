// File: crates/demo/src/main.rs
// Summary: Demo loads OHLCV bars, computes EMA/Bollinger overlays and renders the chart.

mod load;

use std::path::{Path, PathBuf};

use anyhow::Result;
use overlay_core::Chart;
use overlay_render::{RenderOptions, SvgRenderer, Theme};
use tracing::{info, warn};

use crate::load::{load_bars, load_settings, DemoSettings};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let Some(input) = args.next().map(PathBuf::from) else {
        anyhow::bail!("usage: overlay-demo <bars.csv|bars.json> [settings.json]");
    };
    let settings = match args.next() {
        Some(p) => load_settings(Path::new(&p))?,
        None => DemoSettings::default(),
    };

    let bars = load_bars(&input)?;
    info!(path = %input.display(), bars = bars.len(), "loaded bars");
    if bars.is_empty() {
        anyhow::bail!("no bars loaded; check headers/delimiter.");
    }

    let chart = Chart::new(bars)
        .with_indicators(settings.indicators)
        .with_viewport(settings.viewport);
    let set = chart.primitives();
    let [lo, hi] = set.value_domain;
    info!(candles = set.candles.len(), overlays = set.polylines.len(), lo, hi, "built geometry");

    let theme = Theme::by_name(&settings.theme).unwrap_or_else(|| {
        warn!(theme = %settings.theme, known = ?Theme::NAMES, "unknown theme; using dark");
        Theme::dark()
    });
    let opts = RenderOptions {
        theme,
        draw_labels: settings.draw_labels,
        ..RenderOptions::default()
    };

    let out_svg = out_name(&input, "svg");
    SvgRenderer::new(opts.clone()).write_svg(&set, &out_svg)?;
    info!(path = %out_svg.display(), "wrote svg");

    #[cfg(feature = "raster")]
    {
        let out_png = out_name(&input, "png");
        overlay_render::RasterRenderer::new(opts).render_to_png(&set, &out_png)?;
        info!(path = %out_png.display(), "wrote png");
    }

    Ok(())
}

/// Produce output file name like target/out/chart_<stem>.<ext>
fn out_name(input: &Path, ext: &str) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    let mut out = PathBuf::from("target/out");
    out.push(format!("chart_{stem}.{ext}"));
    out
}
