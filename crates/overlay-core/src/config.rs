// File: crates/overlay-core/src/config.rs
// Summary: Overlay configuration, one explicit field per supported indicator.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmaConfig {
    pub enabled: bool,
    pub period: usize,
}

impl Default for EmaConfig {
    fn default() -> Self { Self { enabled: true, period: 20 } }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BollingerConfig {
    pub enabled: bool,
    pub period: usize,
    pub multiplier: f64,
    /// Also emit the moving-average line between the bands.
    pub show_middle: bool,
}

impl Default for BollingerConfig {
    fn default() -> Self {
        Self { enabled: false, period: 20, multiplier: 2.0, show_middle: false }
    }
}

/// Which overlays to compute and with what parameters.
///
/// Defaults match the dashboard: EMA(20) on, Bollinger(20, 2.0) off.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorConfig {
    pub ema: EmaConfig,
    pub bollinger: BollingerConfig,
}

impl IndicatorConfig {
    /// Config with every overlay disabled.
    pub fn none() -> Self {
        Self {
            ema: EmaConfig { enabled: false, ..EmaConfig::default() },
            bollinger: BollingerConfig { enabled: false, ..BollingerConfig::default() },
        }
    }

    pub fn with_ema(mut self, period: usize) -> Self {
        self.ema = EmaConfig { enabled: true, period };
        self
    }

    pub fn with_bollinger(mut self, period: usize, multiplier: f64) -> Self {
        self.bollinger = BollingerConfig { enabled: true, period, multiplier, ..self.bollinger };
        self
    }

    /// Check parameters of the enabled indicators. Disabled ones are ignored.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ema.enabled && self.ema.period == 0 {
            return Err(ConfigError::ZeroPeriod { indicator: "ema" });
        }
        if self.bollinger.enabled {
            if self.bollinger.period == 0 {
                return Err(ConfigError::ZeroPeriod { indicator: "bollinger" });
            }
            let m = self.bollinger.multiplier;
            if !m.is_finite() || m <= 0.0 {
                return Err(ConfigError::BadMultiplier(m));
            }
        }
        Ok(())
    }
}
