//! Color engine for site theming: hex ⇄ HSL conversion, shade ramps, and
//! harmony-derived secondary colors.
//!
//! Everything here is a pure function of its arguments. Malformed hex input is
//! reported as a [`ColorError`] instead of producing garbage channels.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`color`] | `Color`, `Hsl`, `hex_to_hsl`, `hsl_to_hex` |
//! | [`error`] | `ColorError` |
//! | [`harmony`] | `HarmonyMode`, complementary / analogous / triadic derivation |
//! | [`palette`] | `Palette`, `PaletteBook` |
//! | [`shade`] | `ShadeRamp`, `generate_shade_ramp` |
//!
//! # Quick start
//!
//! ```rust
//! use sitekit_palette::{derive_secondary, generate_shade_ramp, HarmonyMode};
//!
//! let secondary = derive_secondary("#3B82F6", HarmonyMode::Complementary).unwrap();
//! assert_eq!(secondary, "#F6AF3B");
//!
//! let ramp = generate_shade_ramp("#3B82F6").unwrap();
//! assert_eq!(ramp.get(50).unwrap().to_hex(), "#E7EFFE");
//! ```

pub mod color;
pub mod error;
pub mod harmony;
pub mod palette;
pub mod shade;

pub use color::{Color, Hsl, hex_to_hsl, hsl_to_hex};
pub use error::ColorError;
pub use harmony::{
    HarmonyMode, UnknownHarmonyMode, analogous_pair, complementary, derive_secondary, triadic_pair,
};
pub use palette::{Palette, PaletteBook};
pub use shade::{SHADE_KEYS, SHADE_LIGHTNESS, ShadeRamp, generate_shade_ramp};
