/// ATX-style heading, limited to levels 1 through 4.
///
/// A heading is 1-4 `#` characters followed by a single space. Five or more
/// leading `#` characters are not a heading at all.
pub struct Heading;

impl Heading {
    pub const MARKER: u8 = b'#';
    pub const MAX_LEVEL: usize = 4;

    /// Returns `(level, text)` if `line` is a heading.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        let level = line.bytes().take_while(|&b| b == Self::MARKER).count();
        if level == 0 || level > Self::MAX_LEVEL {
            return None;
        }
        let text = line[level..].strip_prefix(' ')?;
        Some((level as u8, text))
    }

    pub fn render(level: u8, text: &str) -> String {
        format!("<h{level}>{text}</h{level}>")
    }
}
