use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::config::{RenderConfig, class_attr};

// ── Rule ──────────────────────────────────────────────────────────────────

/// One substitution step. [`Rule::ORDER`] is the order they run in.
///
/// Patterns use CRLF mode (`R`) so `.` never eats a `\r` and `^`/`$` treat
/// `\r\n` as one line break.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Rule {
    /// `### text` at line start.
    Heading3,
    /// `## text` at line start.
    Heading2,
    /// `# text` at line start.
    Heading1,
    /// `***text***`
    BoldItalic,
    /// `**text**`
    Bold,
    /// `*text*`
    Italic,
    /// `[label](url)`
    Link,
    /// `- text` or `* text` at line start. Items are not wrapped in `<ul>`.
    ///
    /// A line start also counts between `\r` and `\n`, so leading whitespace
    /// may swallow the `\n` of a CRLF pair.
    ListItem,
}

impl Rule {
    /// Longest heading marker first, then longest emphasis marker first.
    pub const ORDER: [Rule; 8] = [
        Rule::Heading3,
        Rule::Heading2,
        Rule::Heading1,
        Rule::BoldItalic,
        Rule::Bold,
        Rule::Italic,
        Rule::Link,
        Rule::ListItem,
    ];

    pub fn pattern(self) -> &'static str {
        match self {
            Rule::Heading3 => r"(?miR)^### (.*)$",
            Rule::Heading2 => r"(?miR)^## (.*)$",
            Rule::Heading1 => r"(?miR)^# (.*)$",
            Rule::BoldItalic => r"(?R)\*\*\*(.*?)\*\*\*",
            Rule::Bold => r"(?R)\*\*(.*?)\*\*",
            Rule::Italic => r"(?R)\*(.*?)\*",
            Rule::Link => r"(?R)\[(.*?)\]\((.*?)\)",
            Rule::ListItem => r"(?mR)(^|\r)\s*[-*]\s+(.*)$",
        }
    }

    fn regex(self) -> &'static Regex {
        &COMPILED[self as usize]
    }

    fn substitute(self, caps: &Captures<'_>, config: &RenderConfig) -> String {
        let class = |c: &Option<String>| class_attr(c.as_deref());
        match self {
            Rule::Heading3 => format!("<h3{}>{}</h3>", class(&config.h3_class), &caps[1]),
            Rule::Heading2 => format!("<h2{}>{}</h2>", class(&config.h2_class), &caps[1]),
            Rule::Heading1 => format!("<h1{}>{}</h1>", class(&config.h1_class), &caps[1]),
            Rule::BoldItalic => format!("<strong><em>{}</em></strong>", &caps[1]),
            Rule::Bold => format!("<strong>{}</strong>", &caps[1]),
            Rule::Italic => format!("<em>{}</em>", &caps[1]),
            Rule::Link => {
                format!("<a href=\"{}\"{}>{}</a>", &caps[2], class(&config.link_class), &caps[1])
            }
            // group 1 is the `\r` the match may have started on; it stays in the output
            Rule::ListItem => format!(
                "{}<li{}>{}</li>",
                &caps[1],
                class(&config.list_item_class),
                &caps[2]
            ),
        }
    }

    /// Applies this rule to every match in `input`.
    pub fn apply(self, input: &str, config: &RenderConfig) -> String {
        self.regex()
            .replace_all(input, |caps: &Captures<'_>| self.substitute(caps, config))
            .into_owned()
    }
}

// Indexed by `Rule as usize`; `ORDER` lists the variants in declaration order.
static COMPILED: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    Rule::ORDER
        .iter()
        .map(|rule| Regex::new(rule.pattern()).expect("markdown rule pattern should compile"))
        .collect()
});

// ── post-passes ───────────────────────────────────────────────────────────

pub(crate) const LINE_BREAK: &str = "<br />";

// Greedy: spans from the first `<li` to the last `</li>` on the (single) line.
static TRAILING_ITEM_BREAK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?R)(<li.*</li>)(<br />)?").expect("list break pattern should compile")
});

/// Every `\n` becomes [`LINE_BREAK`].
pub(crate) fn convert_newlines(input: &str) -> String {
    input.replace('\n', LINE_BREAK)
}

/// Drops the single `<br />` that directly follows the last `</li>`.
pub(crate) fn strip_trailing_item_break(input: &str) -> String {
    TRAILING_ITEM_BREAK.replace_all(input, "${1}").into_owned()
}
