/// Bare `http://` and `https://` URLs in running text.
pub struct AutoLink;

impl AutoLink {
    pub const SCHEMES: [&'static [u8]; 2] = [b"http://", b"https://"];

    /// Length of the scheme prefix (including `://`) at the start of `rest`.
    pub fn scheme_len(rest: &[u8]) -> Option<usize> {
        Self::SCHEMES
            .iter()
            .find(|scheme| rest.starts_with(scheme))
            .map(|scheme| scheme.len())
    }

    pub fn is_url_byte(b: u8) -> bool {
        b.is_ascii_alphanumeric() || b"/?@&=+,-_.!~()%#;:$*".contains(&b)
    }

    /// Punctuation more likely to end the sentence than the URL.
    pub fn is_trailing_punct(b: u8) -> bool {
        b",.;:?!%)".contains(&b)
    }

    /// Length of the URL starting at `rest[0]`, or `None` if nothing follows the scheme.
    pub fn url_len(rest: &[u8]) -> Option<usize> {
        let scheme = Self::scheme_len(rest)?;
        let mut end = scheme
            + rest[scheme..]
                .iter()
                .take_while(|&&b| Self::is_url_byte(b))
                .count();
        while end > scheme && Self::is_trailing_punct(rest[end - 1]) {
            end -= 1;
        }
        (end > scheme).then_some(end)
    }
}
