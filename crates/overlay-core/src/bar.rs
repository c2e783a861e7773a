// File: crates/overlay-core/src/bar.rs
// Summary: OHLCV bar model as delivered by the price data service.
// Notes:
// - Struct literals are unchecked; the geometry code trusts its input.
//   `Bar::try_new` is the checked constructor for loaders that want it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::BarError;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    #[serde(rename = "ts", with = "timestamp")]
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
}

impl Bar {
    /// Construct a bar enforcing the OHLC invariant:
    /// low <= min(open, close) <= max(open, close) <= high.
    pub fn try_new(
        timestamp: DateTime<Utc>,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: Option<f64>,
    ) -> Result<Self, BarError> {
        if ![open, high, low, close].iter().all(|v| v.is_finite()) {
            return Err(BarError::NonFinite);
        }
        let body_low = open.min(close);
        let body_high = open.max(close);
        if low > high { return Err(BarError::LowAboveHigh { low, high }); }
        if low > body_low { return Err(BarError::LowAboveBody { low, body_low }); }
        if high < body_high { return Err(BarError::HighBelowBody { high, body_high }); }
        Ok(Self { timestamp, open, high, low, close, volume })
    }

    /// Close at or above open.
    #[inline]
    pub fn is_bullish(&self) -> bool { self.close >= self.open }
}

/// Closing prices in bar order, the input series for every indicator.
pub fn closes(bars: &[Bar]) -> Vec<f64> {
    bars.iter().map(|b| b.close).collect()
}

/// Serde adapter for bar timestamps.
///
/// Writes RFC 3339. Reads RFC 3339, naive ISO-8601 (`2024-01-01T00:00:00`,
/// as emitted by the data service, taken as UTC) or epoch milliseconds.
pub mod timestamp {
    use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
    use serde::de::{self, Visitor};
    use serde::{Deserializer, Serializer};
    use std::fmt;

    pub fn serialize<S: Serializer>(ts: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&ts.to_rfc3339())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        d.deserialize_any(TsVisitor)
    }

    /// Parse a timestamp string in any of the accepted textual forms.
    pub fn parse(s: &str) -> Option<DateTime<Utc>> {
        let s = s.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(dt.with_timezone(&Utc));
        }
        for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
            if let Ok(n) = NaiveDateTime::parse_from_str(s, fmt) {
                return Some(Utc.from_utc_datetime(&n));
            }
        }
        s.parse::<i64>().ok().and_then(from_epoch)
    }

    /// Epoch seconds or milliseconds (values above 10^12 are taken as ms).
    pub fn from_epoch(n: i64) -> Option<DateTime<Utc>> {
        if n.abs() > 10_i64.pow(12) {
            DateTime::from_timestamp_millis(n)
        } else {
            DateTime::from_timestamp(n, 0)
        }
    }

    struct TsVisitor;

    impl<'de> Visitor<'de> for TsVisitor {
        type Value = DateTime<Utc>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("an ISO-8601 timestamp or epoch number")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            parse(v).ok_or_else(|| E::custom(format!("unrecognized timestamp '{v}'")))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
            from_epoch(v).ok_or_else(|| E::custom(format!("timestamp out of range: {v}")))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
            let n = i64::try_from(v).map_err(|_| E::custom("timestamp out of range"))?;
            self.visit_i64(n)
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
            self.visit_i64(v as i64)
        }
    }
}
