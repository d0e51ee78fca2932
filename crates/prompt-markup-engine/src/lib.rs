pub mod io;
pub mod parsing;
pub mod render;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use io::*;
pub use parsing::{LineClass, ListKind, MarkdownLineClassifier};
pub use render::{HtmlBuilder, convert};
