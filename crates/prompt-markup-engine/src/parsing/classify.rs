use super::kinds::{CodeFence, Heading, ListKind, ListMarker};

/// Classification of a single line containing only local facts.
///
/// Each line is classified independently without reference to surrounding
/// lines or to whether a fence is open. Precedence is fence delimiter,
/// heading, list item, then plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// A line starting with the fence marker; `language` may be empty.
    FenceDelimiter { language: &'a str },
    /// A level 1-4 heading with its marker stripped.
    Heading { level: u8, text: &'a str },
    /// A flat list item with its marker stripped.
    ListItem { kind: ListKind, text: &'a str },
    /// Anything else. Blank means empty or whitespace only.
    Text { is_blank: bool },
}

impl LineClass<'_> {
    /// The list kind of this line, if it is a list item.
    pub fn list_kind(&self) -> Option<ListKind> {
        match self {
            LineClass::ListItem { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

/// Classifies individual lines.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line into a [`LineClass`].
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        if let Some(language) = CodeFence::sig(line) {
            return LineClass::FenceDelimiter { language };
        }
        if let Some((level, text)) = Heading::parse(line) {
            return LineClass::Heading { level, text };
        }
        if let Some((kind, text)) = ListMarker::parse(line) {
            return LineClass::ListItem { kind, text };
        }
        LineClass::Text {
            is_blank: line.trim().is_empty(),
        }
    }
}
