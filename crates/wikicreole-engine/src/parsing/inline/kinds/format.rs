use serde::Serialize;

/// Inline formatting toggled by a doubled character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FormatKind {
    /// `**`
    Strong,
    /// `//`
    Emphasis,
    /// `__`
    Underline,
    /// `##`
    Monospace,
}

impl FormatKind {
    pub fn from_byte(b: u8) -> Option<Self> {
        match b {
            b'*' => Some(Self::Strong),
            b'/' => Some(Self::Emphasis),
            b'_' => Some(Self::Underline),
            b'#' => Some(Self::Monospace),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Self::Strong => '*',
            Self::Emphasis => '/',
            Self::Underline => '_',
            Self::Monospace => '#',
        }
    }
}
