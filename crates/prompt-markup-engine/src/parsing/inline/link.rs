use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;

/// `[text](url)`: text is one or more non-`]` chars, url one or more non-`)` chars.
const LINK_PATTERN: &str = r"\[([^\]]+)\]\(([^)]+)\)";

fn link_regex() -> &'static Regex {
    static LINK_REGEX: OnceLock<Regex> = OnceLock::new();
    LINK_REGEX.get_or_init(|| Regex::new(LINK_PATTERN).expect("Invalid link regex"))
}

/// Rewrites every `[text](url)` in `line` into an anchor element.
///
/// Neither the text nor the URL is escaped.
pub fn rewrite_links(line: &str) -> Cow<'_, str> {
    link_regex().replace_all(line, r#"<a href="${2}">${1}</a>"#)
}
