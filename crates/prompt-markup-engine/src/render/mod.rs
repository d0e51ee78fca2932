//! # HTML Rendering
//!
//! Drives the index-based scan over classified lines and feeds each line,
//! with its neighbours, into an [`HtmlBuilder`].
//!
//! ## Key Invariants
//!
//! - Conversion is total: every input produces output, nothing errors
//! - Fences never nest, and an unterminated fence is closed at end of input
//! - Each contiguous run of same-kind list items gets exactly one wrapper pair
//! - No state survives a call; concurrent calls share nothing mutable

pub mod builder;

pub use builder::{HtmlBuilder, LineContext};

use crate::parsing::{classify_document, split_lines};

/// Converts Markdown-subset `text` into an HTML fragment.
///
/// Empty input yields an empty string. Fragments are joined with `\n`.
pub fn convert(text: &str) -> String {
    let lines = split_lines(text);
    let classes = classify_document(text);
    debug_assert_eq!(lines.len(), classes.len());

    let mut builder = HtmlBuilder::new();
    let len = lines.len();
    let mut cursor = 0;
    while cursor < len {
        let class = classes[cursor];
        log::trace!("line {cursor}: {class:?}");

        let prev = if cursor == 0 {
            None
        } else {
            Some(classes[cursor - 1])
        };
        let next = if cursor == len - 1 {
            None
        } else {
            Some(classes[cursor + 1])
        };

        builder.push(&LineContext {
            raw: lines[cursor],
            class,
            prev,
            next,
        });
        cursor += 1;
    }

    builder.finish()
}
