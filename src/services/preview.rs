//! Word-bounded previews of rich-text content.
//!
//! Content bodies are stored as HTML fragments (trusted, sanitized
//! upstream). A collapsed card strips the markup and shows the first N
//! words followed by an ellipsis; an expanded card shows the original
//! fragment with markup intact. The limit is always a parameter: 60
//! words for article-style content and 70 for member profiles by
//! default, both carried in config.

use once_cell::sync::Lazy;
use regex::Regex;

// Statically compiled - avoids runtime panic and improves performance.
static TAG_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[^>]*>").expect("Invalid tag regex pattern"));

/// Marker appended when a preview was actually truncated.
pub const ELLIPSIS: char = '…';

/// Remove every `<...>` run and trim surrounding whitespace. Markup is
/// replaced with nothing, never sanitized or rewritten.
pub fn strip_tags(html: &str) -> String {
    TAG_REGEX.replace_all(html, "").trim().to_string()
}

/// Count words in the stripped text. An empty or all-whitespace body
/// counts zero.
pub fn word_count(html: &str) -> usize {
    let text = strip_tags(html);
    if text.is_empty() {
        0
    } else {
        text.split_whitespace().count()
    }
}

/// The collapsed plain-text rendering. Bodies at or under the limit
/// come back whole, joined by single spaces, with no ellipsis; longer
/// bodies are cut to exactly `limit` words plus the ellipsis marker.
pub fn preview(html: &str, limit: usize) -> String {
    let text = strip_tags(html);
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() <= limit {
        words.join(" ")
    } else {
        let mut out = words[..limit].join(" ");
        out.push(ELLIPSIS);
        out
    }
}

/// Strictly greater-than: a body of exactly `limit` words is never
/// truncated.
pub fn needs_truncation(html: &str, limit: usize) -> bool {
    word_count(html) > limit
}

/// What a card should render for one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered<'a> {
    /// The original HTML fragment, markup preserved.
    Full(&'a str),
    /// The stripped, word-bounded preview text.
    Preview(String),
}

impl Rendered<'_> {
    pub fn as_str(&self) -> &str {
        match self {
            Rendered::Full(html) => html,
            Rendered::Preview(text) => text,
        }
    }
}

/// Per-item expand/collapse state. Each rendered item owns its own
/// state, starting collapsed; it resets whenever the list is reloaded.
#[derive(Debug, Clone, Default)]
pub struct PreviewState {
    expanded: bool,
}

impl PreviewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    /// Full markup when expanded or when the body fits the limit;
    /// otherwise the plain-text preview.
    pub fn render<'a>(&self, html: &'a str, limit: usize) -> Rendered<'a> {
        if self.expanded || !needs_truncation(html, limit) {
            Rendered::Full(html)
        } else {
            Rendered::Preview(preview(html, limit))
        }
    }

    /// Whether a toggle control belongs next to this item. Bodies that
    /// fit the limit get no control at all.
    pub fn shows_toggle(&self, html: &str, limit: usize) -> bool {
        needs_truncation(html, limit)
    }

    pub fn toggle_label(&self) -> &'static str {
        if self.expanded {
            "Show less"
        } else {
            "Read more"
        }
    }
}
