use crate::config::RenderConfig;
use crate::rules::{Rule, convert_newlines, strip_trailing_item_break};

/// Shown by [`render_preview`] when there is no source to render.
pub const PREVIEW_PLACEHOLDER: &str =
    r#"<span class="text-muted-foreground">Nothing to preview</span>"#;

/// Runs the substitution pipeline with a fixed [`RenderConfig`].
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Converts `source` to an HTML fragment.
    ///
    /// The output is not sanitized: raw HTML in `source` passes through.
    pub fn render(&self, source: &str) -> String {
        if source.is_empty() {
            return String::new();
        }

        let mut html = Rule::ORDER
            .iter()
            .fold(source.to_owned(), |text, rule| rule.apply(&text, &self.config));
        html = convert_newlines(&html);
        html = strip_trailing_item_break(&html);

        log::trace!(
            "rendered {} bytes of markdown into {} bytes of html",
            source.len(),
            html.len()
        );
        html
    }

    /// Like [`render`](Self::render), but empty source yields [`PREVIEW_PLACEHOLDER`].
    pub fn preview(&self, source: &str) -> String {
        if source.is_empty() {
            PREVIEW_PLACEHOLDER.to_owned()
        } else {
            self.render(source)
        }
    }
}

/// Renders with bare tags.
pub fn render_markdown(source: &str) -> String {
    Renderer::default().render(source)
}

/// Renders for a preview pane, substituting [`PREVIEW_PLACEHOLDER`] for empty input.
pub fn render_preview(source: &str, config: &RenderConfig) -> String {
    Renderer::new(config.clone()).preview(source)
}
