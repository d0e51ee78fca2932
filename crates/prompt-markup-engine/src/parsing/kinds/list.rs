/// The two kinds of flat list. Runs of different kinds never merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// `- item`, rendered as `<ul>`.
    Unordered,
    /// `1. item` (single digit), rendered as `<ol>`.
    Ordered,
}

impl ListKind {
    pub fn open_tag(self) -> &'static str {
        match self {
            ListKind::Unordered => "<ul>",
            ListKind::Ordered => "<ol>",
        }
    }

    pub fn close_tag(self) -> &'static str {
        match self {
            ListKind::Unordered => "</ul>",
            ListKind::Ordered => "</ol>",
        }
    }
}

/// List item markers.
pub struct ListMarker;

impl ListMarker {
    pub const BULLET: &'static str = "- ";
    pub const ORDINAL_SEPARATOR: &'static str = ". ";

    /// Returns the list kind and item text if `line` is a list item.
    ///
    /// Ordered items need exactly one ASCII digit before the separator, so
    /// `10. ten` is not an item.
    pub fn parse(line: &str) -> Option<(ListKind, &str)> {
        if let Some(text) = line.strip_prefix(Self::BULLET) {
            return Some((ListKind::Unordered, text));
        }

        let first = *line.as_bytes().first()?;
        if !first.is_ascii_digit() {
            return None;
        }
        line[1..]
            .strip_prefix(Self::ORDINAL_SEPARATOR)
            .map(|text| (ListKind::Ordered, text))
    }

    pub fn render_item(text: &str) -> String {
        format!("<li>{text}</li>")
    }
}
