//! Sitekit: color palettes and Markdown previews for site-builder forms.
//!
//! Re-exports the two leaf libraries and adds the small amount of caller
//! state a form needs on top of them.
//!
//! # Quick start
//!
//! ```rust
//! use sitekit::prelude::*;
//!
//! let mut generator = PaletteGenerator::default();
//! generator.set_mode(HarmonyMode::Analogous);
//! generator.set_palette_name("Brand");
//! assert!(generator.save_palette().is_some());
//!
//! let mut editor = MarkdownEditor::new(RenderConfig::default());
//! editor.set_source("# About us");
//! assert_eq!(editor.preview(), "<h1>About us</h1>");
//! ```

pub mod editor;
pub mod generator;
pub mod logging;

pub use editor::MarkdownEditor;
pub use generator::PaletteGenerator;
pub use sitekit_markdown as markdown;
pub use sitekit_palette as palette;

/// Common imports.
pub mod prelude {
    pub use crate::editor::MarkdownEditor;
    pub use crate::generator::PaletteGenerator;
    pub use crate::logging::{LoggingConfig, init_logging};
    pub use sitekit_markdown::{RenderConfig, Renderer, render_markdown};
    pub use sitekit_palette::{Color, ColorError, HarmonyMode, Palette, PaletteBook, ShadeRamp};
}
