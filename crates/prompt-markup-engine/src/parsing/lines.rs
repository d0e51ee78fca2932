/// Splits input text into lines.
///
/// Lines are delimited by `\n`; a trailing `\r` is dropped so CRLF input
/// classifies the same as LF input. A trailing newline produces a final empty
/// line. Empty input produces no lines at all.
pub fn split_lines(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return vec![];
    }
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_has_no_lines() {
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn single_line_without_newline() {
        assert_eq!(split_lines("hello"), vec!["hello"]);
    }

    #[test]
    fn trailing_newline_yields_empty_last_line() {
        assert_eq!(split_lines("a\nb\n"), vec!["a", "b", ""]);
    }

    #[test]
    fn crlf_is_stripped() {
        assert_eq!(split_lines("a\r\nb\r\n"), vec!["a", "b", ""]);
    }

    #[test]
    fn lone_newline_is_two_blank_lines() {
        assert_eq!(split_lines("\n"), vec!["", ""]);
    }

    #[test]
    fn interior_carriage_return_is_kept() {
        assert_eq!(split_lines("a\rb"), vec!["a\rb"]);
    }
}
