use super::FormatKind;
use crate::parsing::blocks::classify::escapes_block_markup;

/// The `~` escape character.
pub struct Escape;

impl Escape {
    pub const CHAR: u8 = b'~';

    /// Whether `~` escapes `next` (followed by `after`).
    ///
    /// Inline markup is only escaped in the doubled form that would have
    /// triggered it; block markup only at the start of a line.
    pub fn applies(next: u8, after: Option<u8>, at_line_start: bool) -> bool {
        let doubled = after == Some(next);
        next == Self::CHAR
            || (doubled && FormatKind::from_byte(next).is_some())
            || (doubled && matches!(next, b'{' | b'[' | b'\\' | b'<' | b'-'))
            || (at_line_start && escapes_block_markup(next))
    }
}
