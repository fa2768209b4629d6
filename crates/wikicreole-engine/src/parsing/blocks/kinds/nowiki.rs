use std::borrow::Cow;

use crate::parsing::chars::skip_blanks;

/// Nowiki (verbatim) regions: `{{{ ... }}}`, inline or spanning lines.
///
/// Inside the region `~}}}` stands for a literal `}}}` and does not close it.
pub struct Nowiki;

impl Nowiki {
    pub const OPEN: &'static [u8; 3] = b"{{{";
    pub const CLOSE: &'static [u8; 3] = b"}}}";
    pub const ESCAPED_CLOSE: &'static str = "~}}}";

    /// Offset of the closing fence for content starting at `from`.
    ///
    /// Skips any `}` preceded by `~`. When more than three `}` follow each
    /// other, the fence is the last three of the run so the extra braces
    /// stay in the content.
    pub fn find_close(bytes: &[u8], from: usize) -> Option<usize> {
        let mut p = from;
        while p + Self::CLOSE.len() <= bytes.len() {
            let escaped = p > 0 && bytes[p - 1] == b'~';
            if !escaped && bytes[p..].starts_with(Self::CLOSE) {
                while bytes.get(p + Self::CLOSE.len()) == Some(&b'}') {
                    p += 1;
                }
                return Some(p);
            }
            p += 1;
        }
        None
    }

    /// Removes the escape from every `~}}}` in the content.
    pub fn unescape(raw: &str) -> Cow<'_, str> {
        if raw.contains(Self::ESCAPED_CLOSE) {
            Cow::Owned(raw.replace(Self::ESCAPED_CLOSE, "}}}"))
        } else {
            Cow::Borrowed(raw)
        }
    }

    /// Trims multi-line content to its verbatim body.
    ///
    /// Blanks and one newline after the opening fence are dropped, as is one
    /// newline before the closing fence. Returns `None` for an empty body.
    pub fn block_body(raw: &str) -> Option<&str> {
        let bytes = raw.as_bytes();
        let mut start = skip_blanks(bytes, 0);
        if bytes.get(start) == Some(&b'\n') {
            start += 1;
        }
        let mut end = bytes.len();
        if end > start && bytes[end - 1] == b'\n' {
            end -= 1;
            if end > start && bytes[end - 1] == b'\r' {
                end -= 1;
            }
        }
        (end > start).then(|| &raw[start..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("abc}}}", Some(3))]
    #[case("abc", None)]
    #[case("a~}}} b}}}", Some(7))]
    #[case("code}}}}}", Some(6))]
    #[case("}}", None)]
    #[case("}}}", Some(0))]
    fn find_close_cases(#[case] content: &str, #[case] expected: Option<usize>) {
        assert_eq!(Nowiki::find_close(content.as_bytes(), 0), expected);
    }

    #[test]
    fn find_close_ignores_tilde_before_search_start() {
        let text = "{{{}}}";
        assert_eq!(Nowiki::find_close(text.as_bytes(), 3), Some(3));
    }

    #[test]
    fn unescape_only_touches_escaped_fences() {
        assert_eq!(Nowiki::unescape("a ~}}} b"), "a }}} b");
        assert_eq!(Nowiki::unescape("a ~} b"), "a ~} b");
        assert!(matches!(Nowiki::unescape("plain"), Cow::Borrowed(_)));
    }

    #[rstest]
    #[case("\ncode\n", Some("code"))]
    #[case("  \nline 1\nline 2\n", Some("line 1\nline 2"))]
    #[case("\r\ncode\r\n", Some("code"))]
    #[case("\n\nx\n", Some("\nx"))]
    #[case("\n", None)]
    #[case("abc", Some("abc"))]
    #[case("", None)]
    fn block_body_trims_fence_newlines(#[case] raw: &str, #[case] expected: Option<&str>) {
        assert_eq!(Nowiki::block_body(raw), expected);
    }
}
