//! Byte-level character classes shared by the block and inline parsers.
//!
//! Creole treats every control byte and the space as layout whitespace,
//! except the newline which always carries structure.

/// Returns true for bytes skipped as whitespace: `1..=b' '` minus `\n`.
#[inline]
pub fn is_blank(b: u8) -> bool {
    b != 0 && b <= b' ' && b != b'\n'
}

/// Advances `pos` past blank bytes, stopping at a newline or end of input.
pub fn skip_blanks(bytes: &[u8], mut pos: usize) -> usize {
    while pos < bytes.len() && is_blank(bytes[pos]) {
        pos += 1;
    }
    pos
}

/// Byte offset of the next `\n` at or after `pos`, or the end of input.
pub fn line_end(bytes: &[u8], pos: usize) -> usize {
    bytes[pos.min(bytes.len())..]
        .iter()
        .position(|&b| b == b'\n')
        .map_or(bytes.len(), |i| pos + i)
}

/// Searches for `delim` between `from` and the end of that line.
pub fn find_on_line(bytes: &[u8], from: usize, delim: &[u8]) -> Option<usize> {
    let end = line_end(bytes, from);
    bytes[from..end]
        .windows(delim.len())
        .position(|w| w == delim)
        .map(|i| from + i)
}

/// True when `pos` sits at a line terminator (`\n`, `\r\n`) or end of input.
pub fn at_line_end(bytes: &[u8], pos: usize) -> bool {
    match bytes.get(pos) {
        None | Some(b'\n') => true,
        Some(b'\r') => matches!(bytes.get(pos + 1), None | Some(b'\n')),
        _ => false,
    }
}
