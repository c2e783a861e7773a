// File: crates/overlay-render/src/theme.rs
// Summary: Color palettes for candles, overlays and axis chrome.

/// Straight (non-premultiplied) RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from a `0xRRGGBB` literal.
    pub const fn rgb(hex: u32) -> Self {
        Self::from_argb(255, (hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }

    /// Same color at alpha `a`.
    pub const fn alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// `#rrggbb` for SVG attributes; alpha goes in a separate opacity attribute.
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn opacity(&self) -> f32 {
        self.a as f32 / 255.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgba,
    pub grid: Rgba,
    pub axis_line: Rgba,
    pub axis_label: Rgba,
    pub tick: Rgba,
    pub wick: Rgba,
    pub candle_up: Rgba,
    pub candle_down: Rgba,
    pub ema_stroke: Rgba,
    pub band_stroke: Rgba,
    pub band_fill: Rgba,
}

impl Theme {
    /// Names accepted by [`Theme::by_name`].
    pub const NAMES: [&'static str; 4] = ["dark", "light", "solarized-dark", "high-contrast-dark"];

    pub fn dark() -> Self {
        let blue = Rgba::rgb(0x40a0ff);
        Self {
            name: "dark",
            background: Rgba::rgb(0x121214),
            grid: Rgba::rgb(0x28282d),
            axis_line: Rgba::rgb(0xb4b4be),
            axis_label: Rgba::rgb(0xebebf5),
            tick: Rgba::rgb(0x9696a0),
            wick: Rgba::rgb(0xaaaab4).alpha(204),
            candle_up: Rgba::rgb(0x28c878),
            candle_down: Rgba::rgb(0xdc5050),
            ema_stroke: Rgba::rgb(0xf5b428).alpha(230),
            band_stroke: blue.alpha(178),
            band_fill: blue.alpha(26),
        }
    }

    pub fn light() -> Self {
        let blue = Rgba::rgb(0x2078c8);
        Self {
            name: "light",
            background: Rgba::rgb(0xfafafc),
            grid: Rgba::rgb(0xe6e6eb),
            axis_line: Rgba::rgb(0x3c3c46),
            axis_label: Rgba::rgb(0x14141e),
            tick: Rgba::rgb(0x64646e),
            wick: Rgba::rgb(0x5a5a64).alpha(204),
            candle_up: Rgba::rgb(0x14a05a),
            candle_down: Rgba::rgb(0xc83c3c),
            ema_stroke: Rgba::rgb(0xd7820a).alpha(230),
            band_stroke: blue.alpha(178),
            band_fill: blue.alpha(26),
        }
    }

    pub fn solarized_dark() -> Self {
        let blue = Rgba::rgb(0x268bd2);
        let base0 = Rgba::rgb(0x839496);
        Self {
            name: "solarized-dark",
            background: Rgba::rgb(0x002b36),
            grid: Rgba::rgb(0x073642),
            axis_line: Rgba::rgb(0x93a1a1),
            axis_label: Rgba::rgb(0xeee8d5),
            tick: base0,
            wick: base0.alpha(204),
            candle_up: Rgba::rgb(0x2aa198),
            candle_down: Rgba::rgb(0xdc322f),
            ema_stroke: Rgba::rgb(0xb58900).alpha(230),
            band_stroke: blue.alpha(178),
            band_fill: blue.alpha(26),
        }
    }

    pub fn high_contrast_dark() -> Self {
        let blue = Rgba::rgb(0x00aaff);
        Self {
            name: "high-contrast-dark",
            background: Rgba::rgb(0x000000),
            grid: Rgba::rgb(0x222222),
            axis_line: Rgba::rgb(0xffffff),
            axis_label: Rgba::rgb(0xffffff),
            tick: Rgba::rgb(0xcccccc),
            wick: Rgba::rgb(0xcccccc),
            candle_up: Rgba::rgb(0x00ff00),
            candle_down: Rgba::rgb(0xff0000),
            ema_stroke: Rgba::rgb(0xffff00),
            band_stroke: blue,
            band_fill: blue.alpha(40),
        }
    }

    /// Built-in palette by name, ignoring ASCII case. `None` for unknown names.
    pub fn by_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "dark" => Some(Self::dark()),
            "light" => Some(Self::light()),
            "solarized-dark" => Some(Self::solarized_dark()),
            "high-contrast-dark" => Some(Self::high_contrast_dark()),
            _ => None,
        }
    }

    pub fn candle(&self, bullish: bool) -> Rgba {
        if bullish { self.candle_up } else { self.candle_down }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::dark() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_literal_splits_channels() {
        let c = Rgba::rgb(0x40a0ff).alpha(26);
        assert_eq!((c.r, c.g, c.b, c.a), (0x40, 0xa0, 0xff, 26));
        assert_eq!(c.hex(), "#40a0ff");
    }

    #[test]
    fn every_listed_name_resolves() {
        for name in Theme::NAMES {
            assert_eq!(Theme::by_name(name).map(|t| t.name), Some(name));
        }
    }
}
