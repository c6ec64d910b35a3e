/// Optional `class` attributes for the elements the renderer emits.
///
/// `None` emits the bare tag. Class values are inserted verbatim inside
/// double quotes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderConfig {
    pub h1_class: Option<String>,
    pub h2_class: Option<String>,
    pub h3_class: Option<String>,
    pub link_class: Option<String>,
    pub list_item_class: Option<String>,
}

impl RenderConfig {
    /// The utility-class set used by the site builder's preview pane.
    pub fn styled() -> Self {
        Self {
            h1_class: Some("text-2xl font-bold mt-4 mb-2".into()),
            h2_class: Some("text-xl font-semibold mt-4 mb-2".into()),
            h3_class: Some("text-lg font-semibold mt-4 mb-2".into()),
            link_class: Some("text-primary underline".into()),
            list_item_class: Some("ml-4".into()),
        }
    }
}

/// ` class="…"` or the empty string.
pub(crate) fn class_attr(class: Option<&str>) -> String {
    match class {
        Some(c) => format!(" class=\"{}\"", c),
        None => String::new(),
    }
}
