/// An emphasis style with its delimiter and replacement tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Emphasis {
    pub delimiter: &'static str,
    pub open: &'static str,
    pub close: &'static str,
}

impl Emphasis {
    pub const STRONG: Emphasis = Emphasis {
        delimiter: "**",
        open: "<strong>",
        close: "</strong>",
    };

    pub const EM: Emphasis = Emphasis {
        delimiter: "*",
        open: "<em>",
        close: "</em>",
    };

    /// Replaces the first delimiter with the open tag, then the next one with
    /// the close tag. Each step is an independent single replacement, so a
    /// lone delimiter still becomes an open tag.
    pub fn apply(&self, line: &str) -> String {
        line.replacen(self.delimiter, self.open, 1)
            .replacen(self.delimiter, self.close, 1)
    }
}
