use sitekit_markdown::{RenderConfig, Renderer};

/// A Markdown text field with a rendered preview.
#[derive(Debug, Clone, Default)]
pub struct MarkdownEditor {
    source: String,
    renderer: Renderer,
}

impl MarkdownEditor {
    pub fn new(config: RenderConfig) -> Self {
        Self { source: String::new(), renderer: Renderer::new(config) }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn set_source(&mut self, source: impl Into<String>) {
        self.source = source.into();
    }

    /// Rendered HTML, or the placeholder while the source is empty.
    pub fn preview(&self) -> String {
        self.renderer.preview(&self.source)
    }
}
