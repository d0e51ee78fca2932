use std::borrow::Cow;

/// Fenced code block with owned delimiter and markup.
///
/// Fences do not nest: any line starting with [`CodeFence::MARKER`] opens a
/// block when none is open and closes the open one otherwise.
pub struct CodeFence;

impl CodeFence {
    pub const MARKER: &'static str = "```";
    pub const CLOSE: &'static str = "</code></pre>";

    /// Returns the language tag if `line` is a fence delimiter.
    ///
    /// The tag is whatever follows the marker, trimmed; it may be empty.
    pub fn sig(line: &str) -> Option<&str> {
        line.strip_prefix(Self::MARKER).map(str::trim)
    }

    pub fn open_tag(language: &str) -> String {
        format!("<pre><code class=\"language-{language}\">")
    }

    /// Escapes `&`, `<` and `>` in a content line. Nothing else is touched.
    pub fn escape(line: &str) -> Cow<'_, str> {
        html_escape::encode_text(line)
    }
}
