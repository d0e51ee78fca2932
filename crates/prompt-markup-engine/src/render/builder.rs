use crate::parsing::{
    LineClass,
    inline::format_inline,
    kinds::{CodeFence, Heading, ListKind, ListMarker, Paragraph},
};

/// One input line together with the classification of its neighbours.
///
/// `prev`/`next` are `None` at the document boundaries. They carry only the
/// context-free classification, which is all list-run detection needs.
#[derive(Debug, Clone, Copy)]
pub struct LineContext<'a> {
    pub raw: &'a str,
    pub class: LineClass<'a>,
    pub prev: Option<LineClass<'a>>,
    pub next: Option<LineClass<'a>>,
}

impl LineContext<'_> {
    fn run_starts_here(&self, kind: ListKind) -> bool {
        self.prev.and_then(|c| c.list_kind()) != Some(kind)
    }

    fn run_ends_here(&self, kind: ListKind) -> bool {
        self.next.and_then(|c| c.list_kind()) != Some(kind)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FenceState<'a> {
    Closed,
    Open { language: &'a str },
}

/// Turns classified lines into HTML fragments.
///
/// Holds the only cross-line state of a conversion: whether a code fence is
/// open. Fragments are append-only and joined with `\n` by [`finish`].
///
/// [`finish`]: HtmlBuilder::finish
pub struct HtmlBuilder<'a> {
    fence: FenceState<'a>,
    out: Vec<String>,
}

impl<'a> HtmlBuilder<'a> {
    pub fn new() -> Self {
        Self {
            fence: FenceState::Closed,
            out: vec![],
        }
    }

    pub fn push(&mut self, line: &LineContext<'a>) {
        match (self.in_fence(), line.class) {
            (_, LineClass::FenceDelimiter { language }) => self.toggle_fence(language),
            (true, _) => self.push_code_line(line.raw),
            (false, LineClass::Heading { level, text }) => {
                self.out.push(Heading::render(level, text));
            }
            (false, LineClass::ListItem { kind, text }) => self.push_list_item(line, kind, text),
            (false, LineClass::Text { is_blank }) => self.push_text(line.raw, is_blank),
        }
    }

    /// Closes any fence still open and joins the fragments.
    pub fn finish(mut self) -> String {
        if let FenceState::Open { language } = self.fence {
            log::debug!("closing unterminated fence (language {language:?}) at end of input");
            self.out.push(CodeFence::CLOSE.to_string());
        }
        self.out.join("\n")
    }

    #[cfg(test)]
    fn fragments(&self) -> &[String] {
        &self.out
    }

    pub fn in_fence(&self) -> bool {
        matches!(self.fence, FenceState::Open { .. })
    }

    fn toggle_fence(&mut self, language: &'a str) {
        match self.fence {
            FenceState::Closed => {
                log::debug!("opening fence (language {language:?})");
                self.out.push(CodeFence::open_tag(language));
                self.fence = FenceState::Open { language };
            }
            FenceState::Open { language: opened } => {
                log::debug!("closing fence (language {opened:?})");
                self.out.push(CodeFence::CLOSE.to_string());
                self.fence = FenceState::Closed;
            }
        }
    }

    fn push_code_line(&mut self, raw: &str) {
        self.out.push(CodeFence::escape(raw).into_owned());
    }

    fn push_list_item(&mut self, line: &LineContext<'a>, kind: ListKind, text: &str) {
        if line.run_starts_here(kind) {
            self.out.push(kind.open_tag().to_string());
        }
        self.out.push(ListMarker::render_item(text));
        if line.run_ends_here(kind) {
            self.out.push(kind.close_tag().to_string());
        }
    }

    fn push_text(&mut self, raw: &str, is_blank: bool) {
        if is_blank {
            self.out.push(Paragraph::LINE_BREAK.to_string());
            return;
        }
        let formatted = format_inline(raw);
        self.out.push(Paragraph::render(&formatted));
    }
}

impl Default for HtmlBuilder<'_> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::MarkdownLineClassifier;

    fn ctx<'a>(raw: &'a str, prev: Option<&'a str>, next: Option<&'a str>) -> LineContext<'a> {
        let c = MarkdownLineClassifier;
        LineContext {
            raw,
            class: c.classify(raw),
            prev: prev.map(|p| c.classify(p)),
            next: next.map(|n| c.classify(n)),
        }
    }

    #[test]
    fn new_builder_is_empty() {
        let b = HtmlBuilder::new();
        assert!(!b.in_fence());
        assert!(b.fragments().is_empty());
        assert_eq!(b.finish(), "");
    }

    #[test]
    fn fence_toggles_state() {
        let mut b = HtmlBuilder::new();
        b.push(&ctx("```rust", None, None));
        assert!(b.in_fence());
        b.push(&ctx("```", None, None));
        assert!(!b.in_fence());
        assert_eq!(
            b.fragments(),
            [r#"<pre><code class="language-rust">"#, "</code></pre>"]
        );
    }

    #[test]
    fn lines_inside_fence_are_escaped_not_classified() {
        let mut b = HtmlBuilder::new();
        b.push(&ctx("```", None, None));
        b.push(&ctx("# not a heading", None, None));
        b.push(&ctx("- <b>", None, None));
        b.push(&ctx("**x**", None, None));
        assert_eq!(
            b.fragments()[1..],
            ["# not a heading", "- &lt;b&gt;", "**x**"]
        );
    }

    #[test]
    fn finish_closes_open_fence() {
        let mut b = HtmlBuilder::new();
        b.push(&ctx("```sh", None, None));
        b.push(&ctx("ls", None, None));
        assert_eq!(
            b.finish(),
            "<pre><code class=\"language-sh\">\nls\n</code></pre>"
        );
    }

    #[test]
    fn single_item_opens_and_closes_run() {
        let mut b = HtmlBuilder::new();
        b.push(&ctx("- only", None, None));
        assert_eq!(b.fragments(), ["<ul>", "<li>only</li>", "</ul>"]);
    }

    #[test]
    fn middle_item_emits_no_wrapper() {
        let mut b = HtmlBuilder::new();
        b.push(&ctx("2. mid", Some("1. a"), Some("3. c")));
        assert_eq!(b.fragments(), ["<li>mid</li>"]);
    }

    #[test]
    fn different_kind_neighbours_do_not_continue_run() {
        let mut b = HtmlBuilder::new();
        b.push(&ctx("1. a", Some("- x"), Some("- y")));
        assert_eq!(b.fragments(), ["<ol>", "<li>a</li>", "</ol>"]);
    }

    #[test]
    fn blank_line_is_line_break() {
        let mut b = HtmlBuilder::new();
        b.push(&ctx("   ", None, None));
        assert_eq!(b.fragments(), ["<br>"]);
    }

    #[test]
    fn heading_text_is_not_formatted() {
        let mut b = HtmlBuilder::new();
        b.push(&ctx("## **Bold** heading", None, None));
        assert_eq!(b.fragments(), ["<h2>**Bold** heading</h2>"]);
    }
}
