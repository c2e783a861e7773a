// File: crates/overlay-render/src/raster.rs
// Summary: Headless PNG rendering of a primitive set using Skia CPU raster surfaces.

use std::path::Path;

use anyhow::Result;
use overlay_core::{OverlayKind, Point, PrimitiveSet, Segment};
use skia_safe as skia;
use tracing::debug;

use crate::theme::Rgba;
use crate::RenderOptions;

#[derive(Clone, Debug, Default)]
pub struct RasterRenderer {
    pub options: RenderOptions,
}

impl RasterRenderer {
    pub fn new(options: RenderOptions) -> Self { Self { options } }

    /// Render to PNG bytes. The surface is the viewport size rounded up to whole pixels.
    pub fn render_png_bytes(&self, set: &PrimitiveSet) -> Result<Vec<u8>> {
        let w = set.viewport.width.ceil().max(1.0) as i32;
        let h = set.viewport.height.ceil().max(1.0) as i32;
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        self.draw(surface.canvas(), set);

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        debug!(width = w, height = h, bytes = data.as_bytes().len(), "rendered png");
        Ok(data.as_bytes().to_vec())
    }

    /// Render the chart to a PNG at `output_png_path`.
    pub fn render_to_png(&self, set: &PrimitiveSet, output_png_path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.render_png_bytes(set)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    fn draw(&self, canvas: &skia::Canvas, set: &PrimitiveSet) {
        let o = &self.options;
        let t = &o.theme;
        canvas.clear(color(t.background));

        // Grid & axes
        let grid = stroke_paint(t.grid, 0.5);
        for tick in &set.ticks {
            canvas.draw_line(
                (set.plot.x as f32, tick.y as f32),
                (set.plot.right() as f32, tick.y as f32),
                &grid,
            );
        }
        let axis = stroke_paint(t.axis_line, 1.5);
        for seg in &set.frame {
            draw_segment(canvas, seg, &axis);
        }

        // Overlays
        if let Some(poly) = &set.band_fill {
            let mut path = polyline_path(poly);
            path.close();
            let mut paint = skia::Paint::default();
            paint.set_anti_alias(true);
            paint.set_style(skia::paint::Style::Fill);
            paint.set_color(color(t.band_fill));
            canvas.draw_path(&path, &paint);
        }
        for pl in set.polylines.iter().filter(|p| p.is_drawable()) {
            let paint = match pl.kind {
                OverlayKind::Ema => stroke_paint(t.ema_stroke, o.ema_width),
                OverlayKind::BollingerMiddle => stroke_paint(t.band_stroke, o.band_width),
                OverlayKind::BollingerUpper | OverlayKind::BollingerLower => {
                    let mut p = stroke_paint(t.band_stroke, o.band_width);
                    p.set_path_effect(skia::PathEffect::dash(&o.band_dash, 0.0));
                    p
                }
            };
            canvas.draw_path(&polyline_path(&pl.points), &paint);
        }

        // Candles
        let wick = stroke_paint(t.wick, o.wick_width);
        let mut body = skia::Paint::default();
        body.set_anti_alias(true);
        body.set_style(skia::paint::Style::Fill);
        for c in &set.candles {
            draw_segment(canvas, &c.wick, &wick);
            body.set_color(color(t.candle(c.bullish)));
            let rect = skia::Rect::from_xywh(
                c.body.x as f32,
                c.body.y as f32,
                c.body.width as f32,
                c.body.height as f32,
            );
            canvas.draw_rect(rect, &body);
        }

        // Ticks and labels
        let tick_paint = stroke_paint(t.tick, 1.0);
        let mut text_paint = skia::Paint::default();
        text_paint.set_anti_alias(true);
        text_paint.set_color(color(t.axis_label));
        let mut font = skia::Font::default();
        font.set_size(o.font_size);
        for tick in &set.ticks {
            draw_segment(canvas, &tick.mark, &tick_paint);
            if o.draw_labels {
                let text = format!("{}{}", o.label_prefix, tick.label);
                let (width, _) = font.measure_str(&text, Some(&text_paint));
                let x = tick.mark.from.x as f32 - 3.0 - width;
                canvas.draw_str(&text, (x, tick.y as f32 + 4.0), &font, &text_paint);
            }
        }
    }
}

// ---- helpers ----------------------------------------------------------------

fn color(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn stroke_paint(c: Rgba, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color(c));
    paint
}

fn draw_segment(canvas: &skia::Canvas, seg: &Segment, paint: &skia::Paint) {
    canvas.draw_line(
        (seg.from.x as f32, seg.from.y as f32),
        (seg.to.x as f32, seg.to.y as f32),
        paint,
    );
}

fn polyline_path(points: &[Point]) -> skia::Path {
    let mut path = skia::Path::new();
    if let Some((first, rest)) = points.split_first() {
        path.move_to((first.x as f32, first.y as f32));
        for p in rest {
            path.line_to((p.x as f32, p.y as f32));
        }
    }
    path
}
