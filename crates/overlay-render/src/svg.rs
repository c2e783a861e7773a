// File: crates/overlay-render/src/svg.rs
// Summary: SVG document writer for a primitive set. Pure geometry-to-markup; no layout decisions.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use overlay_core::geometry::path_data;
use overlay_core::{OverlayKind, Point, PrimitiveSet, Segment};
use tracing::debug;

use crate::theme::Rgba;
use crate::RenderOptions;

#[derive(Clone, Debug, Default)]
pub struct SvgRenderer {
    pub options: RenderOptions,
}

impl SvgRenderer {
    pub fn new(options: RenderOptions) -> Self { Self { options } }

    /// Render the whole chart as a standalone SVG document.
    pub fn render(&self, set: &PrimitiveSet) -> String {
        let o = &self.options;
        let t = &o.theme;
        let vp = &set.viewport;
        let mut out = String::with_capacity(4096 + set.candles.len() * 256);

        // writeln! into a String cannot fail
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" width="{w}" height="{h}" role="img" aria-label="Candlestick chart">"#,
            w = num(vp.width),
            h = num(vp.height),
        );
        let _ = writeln!(out, r#"<rect width="100%" height="100%" {}/>"#, fill(t.background));

        // Gridlines at the value ticks
        out.push_str("<g class=\"grid\">\n");
        for tick in &set.ticks {
            let row = Segment::new(Point::new(set.plot.x, tick.y), Point::new(set.plot.right(), tick.y));
            line(&mut out, &row, t.grid, 0.5);
        }
        out.push_str("</g>\n");

        out.push_str("<g class=\"axes\">\n");
        for seg in &set.frame {
            line(&mut out, seg, t.axis_line, 1.5);
        }
        out.push_str("</g>\n");

        if let Some(poly) = &set.band_fill {
            let _ = writeln!(out, r#"<path class="band-fill" d="{} Z" {}/>"#, path_data(poly), fill(t.band_fill));
        }

        for pl in set.polylines.iter().filter(|p| p.is_drawable()) {
            let (color, width, dash) = match pl.kind {
                OverlayKind::Ema => (t.ema_stroke, o.ema_width, None),
                OverlayKind::BollingerMiddle => (t.band_stroke, o.band_width, None),
                OverlayKind::BollingerUpper | OverlayKind::BollingerLower => {
                    (t.band_stroke, o.band_width, Some(o.band_dash))
                }
            };
            let _ = write!(
                out,
                r#"<path class="{}" d="{}" fill="none" {}"#,
                class_of(pl.kind),
                pl.to_path_data(),
                stroke(color, width),
            );
            if let Some([on, off]) = dash {
                let _ = write!(out, r#" stroke-dasharray="{},{}""#, on, off);
            }
            let _ = writeln!(out, "><title>{}</title></path>", escape(pl.kind.label()));
        }

        out.push_str("<g class=\"candles\">\n");
        for c in &set.candles {
            let color = t.candle(c.bullish);
            line(&mut out, &c.wick, t.wick, o.wick_width);
            let _ = writeln!(
                out,
                r#"<rect x="{}" y="{}" width="{}" height="{}" rx="1" {} {}/>"#,
                num(c.body.x),
                num(c.body.y),
                num(c.body.width),
                num(c.body.height),
                fill(color),
                stroke(color, 0.5),
            );
        }
        out.push_str("</g>\n");

        out.push_str("<g class=\"ticks\">\n");
        for tick in &set.ticks {
            line(&mut out, &tick.mark, t.tick, 1.0);
            if o.draw_labels {
                let _ = writeln!(
                    out,
                    r#"<text x="{}" y="{}" text-anchor="end" font-size="{}" font-family="monospace" {}>{}</text>"#,
                    num(tick.mark.from.x - 3.0),
                    num(tick.y + 4.0),
                    o.font_size,
                    fill(t.axis_label),
                    escape(&format!("{}{}", o.label_prefix, tick.label)),
                );
            }
        }
        out.push_str("</g>\n</svg>\n");

        debug!(candles = set.candles.len(), bytes = out.len(), "rendered svg");
        out
    }

    pub fn write_svg(&self, set: &PrimitiveSet, output_path: impl AsRef<Path>) -> Result<()> {
        let path = output_path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.render(set)).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }
}

// ---- helpers ----------------------------------------------------------------

fn class_of(kind: OverlayKind) -> &'static str {
    match kind {
        OverlayKind::Ema => "ema",
        OverlayKind::BollingerUpper => "bb-upper",
        OverlayKind::BollingerMiddle => "bb-middle",
        OverlayKind::BollingerLower => "bb-lower",
    }
}

fn line(out: &mut String, seg: &Segment, color: Rgba, width: f32) {
    let _ = writeln!(
        out,
        r#"<line x1="{}" y1="{}" x2="{}" y2="{}" {}/>"#,
        num(seg.from.x),
        num(seg.from.y),
        num(seg.to.x),
        num(seg.to.y),
        stroke(color, width),
    );
}

fn fill(c: Rgba) -> String {
    if c.a == 255 {
        format!(r#"fill="{}""#, c.hex())
    } else {
        format!(r#"fill="{}" fill-opacity="{:.3}""#, c.hex(), c.opacity())
    }
}

fn stroke(c: Rgba, width: f32) -> String {
    if c.a == 255 {
        format!(r#"stroke="{}" stroke-width="{}""#, c.hex(), width)
    } else {
        format!(r#"stroke="{}" stroke-width="{}" stroke-opacity="{:.3}""#, c.hex(), width, c.opacity())
    }
}

/// Two decimals, trailing zeros trimmed.
fn num(v: f64) -> String {
    let s = format!("{v:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { String::from("0") } else { s.to_string() }
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn num_trims_trailing_zeros() {
        assert_eq!(num(50.0), "50");
        assert_eq!(num(12.5), "12.5");
        assert_eq!(num(-0.001), "0");
    }
}
