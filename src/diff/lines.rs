//! Added/removed line extraction from a hunk body.

use super::model::ChangedLine;

/// Keep only `+` and `-` lines from a hunk body, in order.
///
/// The marker is stripped and the remaining text trimmed. Context lines
/// (leading space), blank lines and anything else are dropped.
pub(super) fn classify_lines(body: &str) -> Vec<ChangedLine> {
    body.lines()
        .filter_map(|line| {
            if let Some(content) = line.strip_prefix('+') {
                Some(ChangedLine::added(content.trim()))
            } else {
                line.strip_prefix('-')
                    .map(|content| ChangedLine::removed(content.trim()))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_marker_and_surrounding_whitespace() {
        let lines = classify_lines("+  foo(bar);  \n");
        assert_eq!(lines, vec![ChangedLine::added("foo(bar);")]);
    }

    #[test]
    fn inner_spacing_is_preserved() {
        let lines = classify_lines("-\tlet  x =  1;\n");
        assert_eq!(lines, vec![ChangedLine::removed("let  x =  1;")]);
    }

    #[test]
    fn context_and_blank_lines_are_dropped() {
        let body = " fn main() {\n\n-old\n context\n+new\n\\ No newline at end of file\n";
        let lines = classify_lines(body);

        assert_eq!(
            lines,
            vec![ChangedLine::removed("old"), ChangedLine::added("new")]
        );
    }

    #[test]
    fn marker_only_line_has_empty_content() {
        let lines = classify_lines("+\n-   \n");
        assert_eq!(
            lines,
            vec![ChangedLine::added(""), ChangedLine::removed("")]
        );
    }

    #[test]
    fn crlf_line_endings_are_handled() {
        let lines = classify_lines("+a\r\n-b\r\n");
        assert_eq!(
            lines,
            vec![ChangedLine::added("a"), ChangedLine::removed("b")]
        );
    }
}
