use prompt_markup_engine::convert;

/// Title used when neither the command line, the config, nor the input
/// file name provides one.
pub const DEFAULT_TITLE: &str = "prompt-markup";

/// Embeds converted markup in a minimal HTML5 page.
///
/// The title is escaped; `body` is inserted verbatim.
pub fn render_page(title: &str, body: &str) -> String {
    let title = html_escape::encode_text(title);
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n</head>\n<body>\n{body}\n</body>\n</html>\n"
    )
}

/// How converted markup is finished before it is written out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageOptions {
    pub standalone: bool,
    pub title: Option<String>,
}

impl PageOptions {
    /// Converts `markdown` and, for standalone output, wraps it in a page.
    pub fn render(&self, markdown: &str, fallback_title: &str) -> String {
        self.finish(convert(markdown), fallback_title)
    }

    /// Renders a failure message as ordinary content, so it shows up in the
    /// output like any converted answer would.
    pub fn render_failure(&self, message: &str, fallback_title: &str) -> String {
        self.render(message, fallback_title)
    }

    fn finish(&self, body: String, fallback_title: &str) -> String {
        if !self.standalone {
            return body;
        }
        let title = self.title.as_deref().unwrap_or(fallback_title);
        render_page(title, &body)
    }
}
