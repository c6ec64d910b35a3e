use std::collections::BTreeMap;

use crate::color::Color;
use crate::error::ColorError;

/// Shade keys in ramp order, lightest first.
pub const SHADE_KEYS: [u16; 11] = [50, 100, 150, 200, 300, 400, 500, 600, 700, 800, 900];

/// HSL lightness (percent) emitted for the key at the same index in [`SHADE_KEYS`].
pub const SHADE_LIGHTNESS: [f64; 11] =
    [95.0, 90.0, 85.0, 80.0, 70.0, 60.0, 50.0, 40.0, 30.0, 20.0, 10.0];

/// Shade key → color, iterated in ascending key order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ShadeRamp {
    shades: BTreeMap<u16, Color>,
}

impl ShadeRamp {
    /// Holds hue and saturation of `base` and walks [`SHADE_LIGHTNESS`].
    pub fn from_color(base: Color) -> Self {
        let hsl = base.to_hsl();
        let shades = SHADE_KEYS
            .iter()
            .zip(SHADE_LIGHTNESS)
            .map(|(&key, l)| (key, hsl.with_lightness(l).to_color()))
            .collect();
        Self { shades }
    }

    pub fn get(&self, key: u16) -> Option<Color> {
        self.shades.get(&key).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u16, Color)> + '_ {
        self.shades.iter().map(|(&k, &c)| (k, c))
    }

    pub fn len(&self) -> usize {
        self.shades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shades.is_empty()
    }

    /// Key-wise union where `other` wins on shared keys.
    #[must_use]
    pub fn merged(mut self, other: &ShadeRamp) -> Self {
        self.shades.extend(other.iter());
        self
    }
}

/// Ramp for a `#RRGGBB` string.
pub fn generate_shade_ramp(hex: &str) -> Result<ShadeRamp, ColorError> {
    Ok(ShadeRamp::from_color(Color::from_hex(hex)?))
}
