use crate::parsing::chars::{at_line_end, is_blank, skip_blanks};

/// Heading syntax: a run of `=` at line start, optionally mirrored at the end.
pub struct Heading;

impl Heading {
    pub const MARKER: u8 = b'=';
    pub const MAX_LEVEL: u8 = 6;

    /// Level for a run of `run` opening markers, capped at [`Self::MAX_LEVEL`].
    pub fn level(run: usize) -> u8 {
        run.clamp(1, Self::MAX_LEVEL as usize) as u8
    }

    /// Length of the `=` run starting at `pos`.
    pub fn run_len(bytes: &[u8], pos: usize) -> usize {
        bytes[pos.min(bytes.len())..]
            .iter()
            .take_while(|&&b| b == Self::MARKER)
            .count()
    }

    /// If `pos` starts a closing trailer (`=` run then blanks to end of line),
    /// returns the offset of the line terminator after it.
    pub fn trailer_end(bytes: &[u8], pos: usize) -> Option<usize> {
        if bytes.get(pos) != Some(&Self::MARKER) {
            return None;
        }
        let end = skip_blanks(bytes, pos + Self::run_len(bytes, pos));
        at_line_end(bytes, end).then_some(end)
    }

    /// End of the heading text in `content..end`, with a closing `=` run and
    /// the blanks around it removed.
    pub fn content_end(bytes: &[u8], content: usize, end: usize) -> usize {
        let mut stop = end;
        while stop > content && is_blank(bytes[stop - 1]) {
            stop -= 1;
        }
        let mut trailer = stop;
        while trailer > content && bytes[trailer - 1] == Self::MARKER {
            trailer -= 1;
        }
        if trailer == stop || Self::trailer_end(bytes, trailer).is_none() {
            return end;
        }
        while trailer > content && is_blank(bytes[trailer - 1]) {
            trailer -= 1;
        }
        trailer
    }
}
