// File: crates/overlay-render/tests/svg.rs
// Purpose: SVG output carries every primitive and honors render options.

use chrono::{Duration, TimeZone, Utc};
use overlay_core::{build_chart, Bar, IndicatorConfig, Viewport};
use overlay_render::{RenderOptions, SvgRenderer, Theme};

fn bars(closes: &[f64]) -> Vec<Bar> {
    let t0 = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let mut prev = closes[0];
    closes
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            let open = prev;
            prev = c;
            Bar {
                timestamp: t0 + Duration::hours(i as i64),
                open,
                high: open.max(c) + 1.0,
                low: open.min(c) - 1.0,
                close: c,
                volume: Some(1.0),
            }
        })
        .collect()
}

#[test]
fn svg_contains_candles_overlays_and_ticks() {
    let data = bars(&[100.0, 102.0, 101.0, 104.0, 103.0, 106.0]);
    let cfg = IndicatorConfig::default().with_bollinger(3, 2.0);
    let set = build_chart(&data, &cfg, &Viewport::default());
    let svg = SvgRenderer::default().render(&set);

    assert!(svg.starts_with("<svg "));
    assert!(svg.trim_end().ends_with("</svg>"));
    assert!(svg.contains(r#"viewBox="0 0 1000 420""#));
    assert_eq!(svg.matches("<rect x=").count(), data.len());
    assert!(svg.contains(r#"class="ema""#));
    assert!(svg.contains(r#"class="bb-upper""#));
    assert!(svg.contains(r#"class="bb-lower""#));
    assert!(svg.contains(r#"class="band-fill""#));
    assert!(svg.contains("<title>EMA</title></path>"));
    assert!(svg.contains("<title>BB upper</title></path>"));
    assert!(svg.contains("stroke-dasharray=\"4,4\""));
    assert_eq!(svg.matches("<text ").count(), 5);
    assert!(svg.contains(&format!(">${}</text>", set.ticks[0].label)));
}

#[test]
fn labels_can_be_disabled() {
    let set = build_chart(&bars(&[1.0, 2.0, 3.0]), &IndicatorConfig::none(), &Viewport::default());
    let opts = RenderOptions { draw_labels: false, theme: Theme::light(), ..RenderOptions::default() };
    let svg = SvgRenderer::new(opts).render(&set);
    assert!(!svg.contains("<text"));
    assert!(!svg.contains("class=\"ema\""));
    assert!(svg.contains(&Theme::light().background.hex()));
}

#[test]
fn empty_chart_still_renders_frame() {
    let set = build_chart(&[], &IndicatorConfig::default(), &Viewport::default());
    let svg = SvgRenderer::default().render(&set);
    assert_eq!(svg.matches("<line ").count(), 2);
    assert!(!svg.contains("<rect x="));
}

#[test]
fn write_svg_creates_file() {
    let set = build_chart(&bars(&[5.0, 6.0]), &IndicatorConfig::default(), &Viewport::default());
    let out = std::path::PathBuf::from("target/test_out/chart.svg");
    SvgRenderer::default().write_svg(&set, &out).expect("write svg");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "svg should be non-empty");
}

#[test]
fn theme_lookup_by_name() {
    assert_eq!(Theme::by_name("LIGHT").map(|t| t.name), Some("light"));
    assert_eq!(Theme::by_name("nope"), None);
    assert_eq!(Theme::by_name("nope").unwrap_or_default().name, "dark");
}
