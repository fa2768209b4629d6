/// `[[target|title]]`
pub struct Link;

impl Link {
    pub const OPEN: &'static [u8; 2] = b"[[";
    pub const CLOSE: &'static [u8; 2] = b"]]";
}

/// `{{src|title}}`
pub struct Image;

impl Image {
    pub const OPEN: &'static [u8; 2] = b"{{";
    pub const CLOSE: &'static [u8; 2] = b"}}";
}

pub const TITLE_SEPARATOR: char = '|';

/// Splits link or image content on its first `|`; an empty title counts as none.
pub fn split_title(content: &str) -> (&str, Option<&str>) {
    match content.split_once(TITLE_SEPARATOR) {
        Some((target, title)) if !title.is_empty() => (target, Some(title)),
        Some((target, _)) => (target, None),
        None => (content, None),
    }
}
