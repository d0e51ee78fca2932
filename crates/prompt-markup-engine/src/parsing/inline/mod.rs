//! # Inline Formatting
//!
//! Rewrites inline spans in plain-text lines by plain string substitution.
//! There is no tokenizer and no balanced-pair matching.
//!
//! ## Order
//!
//! 1. **Bold**: the first `**` becomes `<strong>`, the next `**` becomes `</strong>`
//! 2. **Italic**: the first remaining `*` becomes `<em>`, the next `*` becomes `</em>`
//! 3. **Links**: every `[text](url)` becomes `<a href="url">text</a>`
//!
//! Bold and italic convert at most one span per line; later delimiters stay
//! literal. `**a** and **b**` therefore renders as
//! `<strong>a</strong> and **b**`. Links are rewritten globally.
//!
//! Nothing is escaped here. Fenced code never reaches this module.

pub mod emphasis;
pub mod link;

pub use emphasis::Emphasis;
pub use link::rewrite_links;

/// Applies bold, italic and link rewriting to a single line.
pub fn format_inline(line: &str) -> String {
    let line = Emphasis::STRONG.apply(line);
    let line = Emphasis::EM.apply(&line);
    rewrite_links(&line).into_owned()
}
