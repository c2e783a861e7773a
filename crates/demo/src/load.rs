// File: crates/demo/src/load.rs
// Summary: OHLCV loaders (Binance-like CSV, data-service JSON) and the demo settings file.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};
use overlay_core::bar::timestamp;
use overlay_core::{Bar, IndicatorConfig, Viewport};
use serde::Deserialize;
use tracing::{debug, warn};

/// Settings file for one demo run. Every field is optional.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct DemoSettings {
    pub indicators: IndicatorConfig,
    pub viewport: Viewport,
    pub theme: String,
    pub draw_labels: bool,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            indicators: IndicatorConfig::default().with_bollinger(20, 2.0),
            viewport: Viewport::default(),
            theme: String::from("dark"),
            draw_labels: true,
        }
    }
}

pub fn load_settings(path: &Path) -> Result<DemoSettings> {
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let settings: DemoSettings =
        serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;
    settings.indicators.validate()?;
    settings.viewport.validate()?;
    Ok(settings)
}

/// Load bars from `.json` (array of `{ts, open, high, low, close, volume}`) or CSV.
pub fn load_bars(path: &Path) -> Result<Vec<Bar>> {
    let is_json = path
        .extension()
        .map(|e| e.to_string_lossy().eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    if is_json {
        let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        load_json(&text)
    } else {
        let rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(path)
            .with_context(|| format!("opening {}", path.display()))?;
        load_csv(rdr)
    }
}

pub fn load_json(text: &str) -> Result<Vec<Bar>> {
    let bars: Vec<Bar> = serde_json::from_str(text).context("decoding bar JSON")?;
    Ok(keep_valid(bars))
}

/// Read OHLCV rows, matching common column names case-insensitively.
/// Rows without a usable time column are stamped by row index (seconds from epoch).
pub fn load_csv<R: std::io::Read>(mut rdr: csv::Reader<R>) -> Result<Vec<Bar>> {
    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();
    debug!(?headers, "csv headers");

    let idx = |names: &[&str]| -> Option<usize> { headers.iter().position(|h| names.contains(&h.as_str())) };

    let i_time = idx(&["time", "timestamp", "ts", "open_time", "date", "datetime"]);
    let i_open = idx(&["open", "o"]);
    let i_high = idx(&["high", "h"]);
    let i_low = idx(&["low", "l"]);
    let i_close = idx(&["close", "c", "adj_close", "close_price"]);
    let i_volume = idx(&["volume", "vol", "v"]);

    let (Some(i_open), Some(i_high), Some(i_low), Some(i_close)) = (i_open, i_high, i_low, i_close) else {
        anyhow::bail!("missing one of open/high/low/close columns in {:?}", headers);
    };

    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let num = |i: usize| rec.get(i).and_then(|s| s.trim().parse::<f64>().ok());
        let ts = i_time
            .and_then(|ix| rec.get(ix))
            .and_then(timestamp::parse)
            .unwrap_or_else(|| row_stamp(row));
        match (num(i_open), num(i_high), num(i_low), num(i_close)) {
            (Some(open), Some(high), Some(low), Some(close)) => {
                let volume = i_volume.and_then(num);
                out.push(Bar { timestamp: ts, open, high, low, close, volume });
            }
            _ => warn!(row, "skipping row with unparsable prices"),
        }
    }
    Ok(keep_valid(out))
}

fn row_stamp(row: usize) -> DateTime<Utc> {
    DateTime::<Utc>::UNIX_EPOCH + Duration::seconds(row as i64)
}

/// Drop bars that break the OHLC invariant; the chart core trusts its input.
fn keep_valid(bars: Vec<Bar>) -> Vec<Bar> {
    let total = bars.len();
    let kept: Vec<Bar> = bars
        .into_iter()
        .filter(|b| match Bar::try_new(b.timestamp, b.open, b.high, b.low, b.close, b.volume) {
            Ok(_) => true,
            Err(e) => {
                warn!(ts = %b.timestamp, error = %e, "dropping malformed bar");
                false
            }
        })
        .collect();
    if kept.len() != total {
        warn!(dropped = total - kept.len(), "some bars were dropped");
    }
    kept
}
