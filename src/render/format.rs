//! Inline formatting helpers shared by the renderers.

use regex::Regex;
use std::sync::OnceLock;

fn bold_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\*\*(.*?)\*\*").unwrap())
}

fn italic_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\*(.*?)\*").unwrap())
}

/// Escape text for use inside HTML element content or attribute values.
pub fn escape_html(text: &str) -> String {
    html_escape::encode_double_quoted_attribute(text).to_string()
}

/// Convert `**bold**` and `*italic*` markers to HTML.
///
/// The text is escaped first, so markup coming back from the service is
/// shown literally rather than injected into the page.
///
/// ```
/// use pdfstudy::render::inline_markdown_to_html;
///
/// assert_eq!(
///     inline_markdown_to_html("**Day 1:** read <ch. 1>"),
///     "<strong>Day 1:</strong> read &lt;ch. 1&gt;"
/// );
/// ```
pub fn inline_markdown_to_html(text: &str) -> String {
    let escaped = escape_html(text);
    let bold = bold_regex().replace_all(&escaped, "<strong>$1</strong>");
    italic_regex().replace_all(&bold, "<em>$1</em>").to_string()
}

/// Remove `**` and `*` emphasis markers, keeping the text.
pub fn strip_emphasis(text: &str) -> String {
    text.replace('*', "")
}
