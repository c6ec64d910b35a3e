//! Markdown subset → HTML fragment renderer.
//!
//! Not a parser: the source goes through a fixed, ordered list of regex
//! substitutions ([`Rule::ORDER`]), then newlines become `<br />`. Ambiguous
//! input is resolved by rule order alone.
//!
//! Supported: `#`/`##`/`###` headings, `***bold italic***`, `**bold**`,
//! `*italic*`, `[label](url)`, and `-`/`*` list items (emitted as bare `<li>`
//! siblings with no `<ul>` wrapper).
//!
//! Output is not sanitized and must only be embedded from trusted sources.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`config`] | `RenderConfig` |
//! | [`render`] | `Renderer`, `render_markdown`, `render_preview` |
//! | [`rules`] | `Rule` |
//!
//! # Quick start
//!
//! ```rust
//! use sitekit_markdown::render_markdown;
//!
//! let html = render_markdown("# Hello\n**world**");
//! assert_eq!(html, "<h1>Hello</h1><br /><strong>world</strong>");
//! ```

pub mod config;
pub mod render;
pub mod rules;

pub use config::RenderConfig;
pub use render::{PREVIEW_PLACEHOLDER, Renderer, render_markdown, render_preview};
pub use rules::Rule;
