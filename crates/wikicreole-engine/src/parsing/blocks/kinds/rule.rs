use crate::parsing::chars::{at_line_end, skip_blanks};

/// Horizontal rule: four or more `-` with nothing but blanks after them.
pub struct HorizontalRule;

impl HorizontalRule {
    pub const MARKER: u8 = b'-';
    pub const MIN_RUN: usize = 4;

    pub fn matches(bytes: &[u8], pos: usize) -> bool {
        let run = bytes[pos.min(bytes.len())..]
            .iter()
            .take_while(|&&b| b == Self::MARKER)
            .count();
        run >= Self::MIN_RUN && at_line_end(bytes, skip_blanks(bytes, pos + run))
    }
}
