// File: crates/overlay-core/src/error.rs
// Summary: Error types for checked constructors and config validation.
// The geometry and indicator functions are total and never return these.

use thiserror::Error;

/// OHLC invariant violations reported by [`crate::Bar::try_new`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BarError {
    #[error("low {low} above min(open, close) {body_low}")]
    LowAboveBody { low: f64, body_low: f64 },
    #[error("high {high} below max(open, close) {body_high}")]
    HighBelowBody { high: f64, body_high: f64 },
    #[error("low {low} above high {high}")]
    LowAboveHigh { low: f64, high: f64 },
    #[error("non-finite price field")]
    NonFinite,
}

/// Rejected indicator or viewport settings.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{indicator} period must be at least 1")]
    ZeroPeriod { indicator: &'static str },
    #[error("bollinger multiplier must be finite and positive, got {0}")]
    BadMultiplier(f64),
    #[error("viewport dimensions must be finite")]
    NonFiniteViewport,
    #[error("viewport padding must be non-negative")]
    NegativePadding,
    #[error("padding leaves no plot area inside {width}x{height}")]
    EmptyPlotArea { width: f64, height: f64 },
}
