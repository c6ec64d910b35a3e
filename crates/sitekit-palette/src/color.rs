use std::fmt;
use std::str::FromStr;

use crate::error::ColorError;

// ── Color ─────────────────────────────────────────────────────────────────

/// A 24-bit sRGB color.
///
/// The canonical text form is `#RRGGBB` with uppercase digits; that is what
/// [`Display`](fmt::Display) and [`Color::to_hex`] produce.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#RRGGBB`. Either digit case is accepted; nothing is trimmed.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let digits = match hex.strip_prefix('#') {
            Some(rest) => rest,
            None => {
                log::debug!("rejected color {:?}: missing '#'", hex);
                return Err(ColorError::MissingHash);
            }
        };
        if digits.len() != 6 {
            log::debug!("rejected color {:?}: {} digits", hex, digits.len());
            return Err(ColorError::InvalidLength(digits.len()));
        }
        if !digits.bytes().all(|c| c.is_ascii_hexdigit()) {
            log::debug!("rejected color {:?}: non-hex digit", hex);
            return Err(ColorError::InvalidHex);
        }

        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| ColorError::InvalidHex)
        };
        Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Canonical `#RRGGBB` form.
    #[must_use]
    pub fn to_hex(self) -> String {
        self.to_string()
    }

    /// Converts to HSL (hue in degrees, saturation and lightness in percent).
    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        let r = self.r as f64 / 255.0;
        let g = self.g as f64 / 255.0;
        let b = self.b as f64 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return Hsl { h: 0.0, s: 0.0, l: l * 100.0 };
        }

        let d = max - min;
        let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };

        // red wins ties, then green
        let h = if max == r {
            ((g - b) / d + if g < b { 6.0 } else { 0.0 }) / 6.0
        } else if max == g {
            ((b - r) / d + 2.0) / 6.0
        } else {
            ((r - g) / d + 4.0) / 6.0
        };

        Hsl { h: h * 360.0, s: s * 100.0, l: l * 100.0 }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ColorError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_hex(s)
    }
}

impl TryFrom<&str> for Color {
    type Error = ColorError;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Color::from_hex(value)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

// ── Hsl ───────────────────────────────────────────────────────────────────

/// Hue in degrees, saturation and lightness in percent.
///
/// Values are not normalized on construction; [`Hsl::to_color`] wraps the hue
/// and clamps the percentages.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    #[inline]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Same saturation and lightness, hue rotated by `degrees`.
    #[must_use]
    #[inline]
    pub fn rotate(self, degrees: f64) -> Self {
        Self { h: self.h + degrees, ..self }
    }

    /// Same hue and saturation, lightness replaced.
    #[must_use]
    #[inline]
    pub fn with_lightness(self, l: f64) -> Self {
        Self { l, ..self }
    }

    #[must_use]
    pub fn to_color(self) -> Color {
        let mut h = self.h % 360.0;
        if h < 0.0 {
            h += 360.0;
        }
        // -1e-15 + 360.0 rounds up to 360.0
        if h >= 360.0 {
            h = 0.0;
        }
        let s = self.s.clamp(0.0, 100.0) / 100.0;
        let l = self.l.clamp(0.0, 100.0) / 100.0;

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = match h {
            0.0..60.0 => (c, x, 0.0),
            60.0..120.0 => (x, c, 0.0),
            120.0..180.0 => (0.0, c, x),
            180.0..240.0 => (0.0, x, c),
            240.0..300.0 => (x, 0.0, c),
            _ => (c, 0.0, x), // 300.0..360.0
        };

        let channel = |v: f64| ((v + m) * 255.0 + 0.5).floor().clamp(0.0, 255.0) as u8;
        Color::rgb(channel(r), channel(g), channel(b))
    }
}

impl From<Color> for Hsl {
    fn from(color: Color) -> Self {
        color.to_hsl()
    }
}

impl From<Hsl> for Color {
    fn from(hsl: Hsl) -> Self {
        hsl.to_color()
    }
}

// ── string-level conversions ──────────────────────────────────────────────

/// `#RRGGBB` → `(h, s, l)`.
pub fn hex_to_hsl(hex: &str) -> Result<Hsl, ColorError> {
    Ok(Color::from_hex(hex)?.to_hsl())
}

/// `(h, s, l)` → uppercase `#RRGGBB`.
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> String {
    Hsl::new(h, s, l).to_color().to_hex()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(hex: &str) -> Color {
        Color::from_hex(hex).unwrap()
    }

    fn within_one(a: Color, b: Color) -> bool {
        a.r.abs_diff(b.r) <= 1 && a.g.abs_diff(b.g) <= 1 && a.b.abs_diff(b.b) <= 1
    }

    // ── parsing ───────────────────────────────────────────────────────────

    #[test]
    fn parses_upper_and_lower_case() {
        assert_eq!(c("#3B82F6"), Color::rgb(0x3b, 0x82, 0xf6));
        assert_eq!(c("#3b82f6"), Color::rgb(0x3b, 0x82, 0xf6));
    }

    #[test]
    fn display_is_uppercase_padded() {
        assert_eq!(Color::rgb(0x0a, 0x00, 0xff).to_string(), "#0A00FF");
        assert_eq!(c("#abcdef").to_hex(), "#ABCDEF");
    }

    #[test]
    fn rejects_missing_hash() {
        assert_eq!(Color::from_hex("3B82F6"), Err(ColorError::MissingHash));
    }

    #[test]
    fn rejects_wrong_length() {
        assert_eq!(Color::from_hex("#FFF"), Err(ColorError::InvalidLength(3)));
        assert_eq!(Color::from_hex("#FFFFFFFF"), Err(ColorError::InvalidLength(8)));
        assert_eq!(Color::from_hex(""), Err(ColorError::MissingHash));
        assert_eq!(Color::from_hex(" #FFFFFF"), Err(ColorError::MissingHash));
    }

    #[test]
    fn rejects_non_hex_digits() {
        assert_eq!(Color::from_hex("#GG0000"), Err(ColorError::InvalidHex));
        assert_eq!(Color::from_hex("#+12345"), Err(ColorError::InvalidHex));
    }

    #[test]
    fn from_str_and_try_from_agree() {
        let a: Color = "#112233".parse().unwrap();
        let b = Color::try_from("#112233").unwrap();
        assert_eq!(a, b);
    }

    // ── hex → hsl ─────────────────────────────────────────────────────────

    #[test]
    fn primaries_to_hsl() {
        assert_eq!(c("#FF0000").to_hsl(), Hsl::new(0.0, 100.0, 50.0));
        assert_eq!(c("#00FF00").to_hsl(), Hsl::new(120.0, 100.0, 50.0));
        assert_eq!(c("#0000FF").to_hsl(), Hsl::new(240.0, 100.0, 50.0));
    }

    #[test]
    fn grays_have_zero_saturation() {
        assert_eq!(c("#000000").to_hsl(), Hsl::new(0.0, 0.0, 0.0));
        assert_eq!(c("#FFFFFF").to_hsl(), Hsl::new(0.0, 0.0, 100.0));
        let gray = c("#808080").to_hsl();
        assert_eq!(gray.s, 0.0);
        assert_eq!(gray.h, 0.0);
    }

    #[test]
    fn magenta_hue_wraps_into_range() {
        // red is max and g < b
        let hsl = c("#FF00FF").to_hsl();
        assert_eq!(hsl.h, 300.0);
    }

    #[test]
    fn hex_to_hsl_propagates_errors() {
        assert_eq!(hex_to_hsl("#12"), Err(ColorError::InvalidLength(2)));
    }

    // ── hsl → hex ─────────────────────────────────────────────────────────

    #[test]
    fn hsl_to_hex_primaries() {
        assert_eq!(hsl_to_hex(0.0, 100.0, 50.0), "#FF0000");
        assert_eq!(hsl_to_hex(120.0, 100.0, 50.0), "#00FF00");
        assert_eq!(hsl_to_hex(240.0, 100.0, 50.0), "#0000FF");
        assert_eq!(hsl_to_hex(0.0, 0.0, 100.0), "#FFFFFF");
        assert_eq!(hsl_to_hex(0.0, 0.0, 0.0), "#000000");
    }

    #[test]
    fn hsl_to_hex_wraps_hue() {
        assert_eq!(hsl_to_hex(360.0, 100.0, 50.0), "#FF0000");
        assert_eq!(hsl_to_hex(-120.0, 100.0, 50.0), "#0000FF");
        assert_eq!(hsl_to_hex(480.0, 100.0, 50.0), "#00FF00");
        assert_eq!(hsl_to_hex(-1e-15, 100.0, 50.0), "#FF0000");
    }

    #[test]
    fn hsl_to_hex_clamps_percentages() {
        assert_eq!(hsl_to_hex(0.0, 150.0, 50.0), "#FF0000");
        assert_eq!(hsl_to_hex(0.0, 100.0, 120.0), "#FFFFFF");
        assert_eq!(hsl_to_hex(0.0, -5.0, -5.0), "#000000");
    }

    #[test]
    fn round_trip_exact_for_grid_points() {
        for hex in ["#FF0000", "#00FF00", "#0000FF", "#FFFFFF", "#000000"] {
            assert_eq!(c(hex).to_hsl().to_color().to_hex(), hex);
        }
    }

    #[test]
    fn round_trip_within_one_per_channel() {
        // coarse sweep of the cube
        for r in (0..=255u16).step_by(15) {
            for g in (0..=255u16).step_by(17) {
                for b in (0..=255u16).step_by(51) {
                    let color = Color::rgb(r as u8, g as u8, b as u8);
                    let back = color.to_hsl().to_color();
                    assert!(within_one(color, back), "{} -> {}", color, back);
                }
            }
        }
    }
}
