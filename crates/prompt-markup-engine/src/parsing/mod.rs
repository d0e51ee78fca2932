//! # Line Parsing
//!
//! Single-pass, line-oriented parsing of the supported Markdown subset.
//!
//! ## Parsing Phases
//!
//! 1. **Line Splitting** (`lines`): The input is split on `\n` into borrowed lines.
//!
//! 2. **Line Classification** (`classify`): Each line is classified into a `LineClass`
//!    containing only local facts (fence delimiter, heading level, list marker, blank status).
//!    Classification never looks at neighbouring lines or fence state.
//!
//! Context (fence state, list runs) is resolved later by the
//! [`HtmlBuilder`](crate::render::HtmlBuilder).
//!
//! ## Modules
//!
//! - **`kinds`**: Construct-specific types with owned delimiters (CodeFence, Heading, ListMarker, Paragraph)
//! - **`classify`**: `MarkdownLineClassifier` produces a `LineClass` for each line
//! - **`inline`**: Bold, italic and link rewriting for plain-text lines
//! - **`lines`**: Input splitting

pub mod classify;
pub mod inline;
pub mod kinds;
pub mod lines;

pub use classify::{LineClass, MarkdownLineClassifier};
pub use kinds::ListKind;
pub use lines::split_lines;

/// Classifies every line of `text` in document order.
///
/// Entry `i` classifies `split_lines(text)[i]`.
pub fn classify_document(text: &str) -> Vec<LineClass<'_>> {
    let classifier = MarkdownLineClassifier;
    split_lines(text)
        .into_iter()
        .map(|line| classifier.classify(line))
        .collect()
}
