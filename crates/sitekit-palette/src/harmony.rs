use std::fmt;
use std::str::FromStr;

use crate::color::{Color, Hsl};
use crate::error::ColorError;

/// How the secondary color is derived from the primary.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum HarmonyMode {
    /// Hue + 180°.
    #[default]
    Complementary,
    /// Hue + 30°.
    Analogous,
    /// Hue + 240°.
    Triadic,
}

impl HarmonyMode {
    pub const ALL: [HarmonyMode; 3] =
        [HarmonyMode::Complementary, HarmonyMode::Analogous, HarmonyMode::Triadic];

    pub fn as_str(self) -> &'static str {
        match self {
            HarmonyMode::Complementary => "complementary",
            HarmonyMode::Analogous => "analogous",
            HarmonyMode::Triadic => "triadic",
        }
    }
}

impl fmt::Display for HarmonyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown harmony mode name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownHarmonyMode(pub String);

impl fmt::Display for UnknownHarmonyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown harmony mode {:?} (expected complementary, analogous or triadic)",
            self.0
        )
    }
}

impl std::error::Error for UnknownHarmonyMode {}

impl FromStr for HarmonyMode {
    type Err = UnknownHarmonyMode;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HarmonyMode::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownHarmonyMode(s.to_string()))
    }
}

// ── derivations ───────────────────────────────────────────────────────────

impl Color {
    #[must_use]
    pub fn complementary(self) -> Color {
        self.to_hsl().rotate(180.0).to_color()
    }

    /// `[+30°, −30°]`.
    #[must_use]
    pub fn analogous_pair(self) -> [Color; 2] {
        let hsl = self.to_hsl();
        // (h - 30 + 360) % 360, not h + 330: the rounding differs by a channel step
        let sibling = Hsl { h: (hsl.h - 30.0 + 360.0) % 360.0, ..hsl };
        [hsl.rotate(30.0).to_color(), sibling.to_color()]
    }

    /// `[+120°, +240°]`.
    #[must_use]
    pub fn triadic_pair(self) -> [Color; 2] {
        let hsl = self.to_hsl();
        [hsl.rotate(120.0).to_color(), hsl.rotate(240.0).to_color()]
    }

    /// Analogous takes the first candidate, triadic the second.
    #[must_use]
    pub fn secondary(self, mode: HarmonyMode) -> Color {
        match mode {
            HarmonyMode::Complementary => self.complementary(),
            HarmonyMode::Analogous => self.analogous_pair()[0],
            HarmonyMode::Triadic => self.triadic_pair()[1],
        }
    }
}

pub fn complementary(hex: &str) -> Result<String, ColorError> {
    Ok(Color::from_hex(hex)?.complementary().to_hex())
}

pub fn analogous_pair(hex: &str) -> Result<[String; 2], ColorError> {
    Ok(Color::from_hex(hex)?.analogous_pair().map(Color::to_hex))
}

pub fn triadic_pair(hex: &str) -> Result<[String; 2], ColorError> {
    Ok(Color::from_hex(hex)?.triadic_pair().map(Color::to_hex))
}

pub fn derive_secondary(hex: &str, mode: HarmonyMode) -> Result<String, ColorError> {
    Ok(Color::from_hex(hex)?.secondary(mode).to_hex())
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── known vectors ─────────────────────────────────────────────────────

    #[test]
    fn blue_harmonies() {
        assert_eq!(complementary("#3B82F6").unwrap(), "#F6AF3B");
        assert_eq!(analogous_pair("#3B82F6").unwrap(), ["#513BF6", "#3BDFF6"]);
        assert_eq!(triadic_pair("#3B82F6").unwrap(), ["#F63B82", "#82F63B"]);
    }

    #[test]
    fn primary_harmonies() {
        assert_eq!(complementary("#FF0000").unwrap(), "#00FFFF");
        assert_eq!(analogous_pair("#FF0000").unwrap(), ["#FF8000", "#FF0080"]);
        assert_eq!(triadic_pair("#00FF00").unwrap(), ["#0000FF", "#FF0000"]);
        assert_eq!(complementary("#0000FF").unwrap(), "#FFFF00");
    }

    #[test]
    fn analogous_sibling_rounds_like_a_wrapped_subtraction() {
        assert_eq!(analogous_pair("#3980C0").unwrap()[1], "#39C0BD");
        assert_eq!(analogous_pair("#004079").unwrap()[1], "#007976");
    }

    #[test]
    fn complementary_twice_returns_to_start() {
        assert_eq!(complementary(&complementary("#3B82F6").unwrap()).unwrap(), "#3B82F6");
        // coarse sweep of the cube, ±1 per channel
        for r in (0..=255u16).step_by(15) {
            for g in (0..=255u16).step_by(17) {
                for b in (0..=255u16).step_by(51) {
                    let color = Color::rgb(r as u8, g as u8, b as u8);
                    let back = color.complementary().complementary();
                    assert!(
                        color.r.abs_diff(back.r) <= 1
                            && color.g.abs_diff(back.g) <= 1
                            && color.b.abs_diff(back.b) <= 1,
                        "{} -> {}",
                        color,
                        back
                    );
                }
            }
        }
    }

    // ── derive_secondary ──────────────────────────────────────────────────

    #[test]
    fn derive_secondary_complementary_matches_complementary() {
        assert_eq!(
            derive_secondary("#3B82F6", HarmonyMode::Complementary).unwrap(),
            complementary("#3B82F6").unwrap()
        );
    }

    #[test]
    fn derive_secondary_picks_first_analogous_and_second_triadic() {
        let analogous = analogous_pair("#3B82F6").unwrap();
        let triadic = triadic_pair("#3B82F6").unwrap();
        assert_eq!(derive_secondary("#3B82F6", HarmonyMode::Analogous).unwrap(), analogous[0]);
        assert_eq!(derive_secondary("#3B82F6", HarmonyMode::Triadic).unwrap(), triadic[1]);
    }

    #[test]
    fn gray_has_no_harmony() {
        assert_eq!(complementary("#808080").unwrap(), "#808080");
    }

    #[test]
    fn invalid_input_is_an_error() {
        assert_eq!(complementary("#XYZXYZ"), Err(ColorError::InvalidHex));
        assert!(derive_secondary("", HarmonyMode::Triadic).is_err());
    }

    // ── HarmonyMode ───────────────────────────────────────────────────────

    #[test]
    fn mode_parses_case_insensitively() {
        assert_eq!("Triadic".parse::<HarmonyMode>().unwrap(), HarmonyMode::Triadic);
        assert_eq!("ANALOGOUS".parse::<HarmonyMode>().unwrap(), HarmonyMode::Analogous);
        assert!("split".parse::<HarmonyMode>().is_err());
    }

    #[test]
    fn mode_display_round_trips() {
        for mode in HarmonyMode::ALL {
            assert_eq!(mode.to_string().parse::<HarmonyMode>().unwrap(), mode);
        }
        assert_eq!(HarmonyMode::default(), HarmonyMode::Complementary);
    }
}
