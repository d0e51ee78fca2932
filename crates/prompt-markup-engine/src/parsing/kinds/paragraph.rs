/// Paragraph block type.
///
/// Paragraphs have no delimiters - they are the default when no other
/// construct matches. Inline formatting is applied to paragraph content
/// before wrapping.
pub struct Paragraph;

impl Paragraph {
    /// Emitted for a blank line instead of a paragraph.
    pub const LINE_BREAK: &'static str = "<br>";

    /// Opening tags that suppress paragraph wrapping when already present.
    pub const BLOCK_TAGS: [&'static str; 7] = ["<h1>", "<h2>", "<h3>", "<h4>", "<ul>", "<ol>", "<li>"];

    pub fn contains_block_tag(formatted: &str) -> bool {
        Self::BLOCK_TAGS.iter().any(|tag| formatted.contains(tag))
    }

    /// Wraps `formatted` in `<p>` unless it already carries a block tag.
    pub fn render(formatted: &str) -> String {
        if Self::contains_block_tag(formatted) {
            formatted.to_string()
        } else {
            format!("<p>{formatted}</p>")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_plain_text() {
        assert_eq!(Paragraph::render("hello"), "<p>hello</p>");
    }

    #[test]
    fn leaves_block_tags_unwrapped() {
        assert_eq!(Paragraph::render("see <li>here</li>"), "see <li>here</li>");
        assert_eq!(Paragraph::render("<h4>raw</h4>"), "<h4>raw</h4>");
    }

    #[test]
    fn other_tags_are_still_wrapped() {
        assert_eq!(
            Paragraph::render("<strong>x</strong> <h5>y</h5>"),
            "<p><strong>x</strong> <h5>y</h5></p>"
        );
    }

    #[test]
    fn closing_tag_alone_does_not_count() {
        assert_eq!(Paragraph::render("</ul>"), "<p></ul></p>");
    }
}
