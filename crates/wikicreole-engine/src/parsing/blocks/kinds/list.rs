use serde::Serialize;

/// Deepest list nesting the parser will open; deeper markers become text.
pub const MAX_LIST_DEPTH: usize = 128;

/// Line-leading marker that opens or continues a list scope.
///
/// `*` and `#` double as formatting toggles when doubled, so a run of two
/// never opens a new level. The quote-like markers (`>`, `:`, `!`) describe
/// running text rather than items and absorb any repetition of themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ListMarker {
    /// `*` unordered list
    Bullet,
    /// `-` unordered list
    Dash,
    /// `#` ordered list
    Numbered,
    /// `>` block quote
    Quote,
    /// `:` indented block
    Indent,
    /// `!` centered block
    Center,
}

impl ListMarker {
    pub const ALL: [ListMarker; 6] = [
        ListMarker::Bullet,
        ListMarker::Dash,
        ListMarker::Numbered,
        ListMarker::Quote,
        ListMarker::Indent,
        ListMarker::Center,
    ];

    pub fn from_byte(b: u8) -> Option<Self> {
        match b {
            b'*' => Some(Self::Bullet),
            b'-' => Some(Self::Dash),
            b'#' => Some(Self::Numbered),
            b'>' => Some(Self::Quote),
            b':' => Some(Self::Indent),
            b'!' => Some(Self::Center),
            _ => None,
        }
    }

    pub fn as_byte(self) -> u8 {
        match self {
            Self::Bullet => b'*',
            Self::Dash => b'-',
            Self::Numbered => b'#',
            Self::Quote => b'>',
            Self::Indent => b':',
            Self::Center => b'!',
        }
    }

    pub fn as_char(self) -> char {
        self.as_byte() as char
    }

    pub fn is_quote_like(self) -> bool {
        matches!(self, Self::Quote | Self::Indent | Self::Center)
    }

    /// Whether a doubled marker is a formatting toggle rather than structure.
    pub fn doubles_as_format(self) -> bool {
        matches!(self, Self::Bullet | Self::Numbered)
    }

    /// Whether the marker at `pos` opens a new nesting level.
    ///
    /// Item markers must not be doubled (`**` is bold, `--` is text);
    /// quote-like markers always open.
    pub fn opens_level(self, bytes: &[u8], pos: usize) -> bool {
        self.is_quote_like() || bytes.get(pos + 1) != Some(&self.as_byte())
    }
}
