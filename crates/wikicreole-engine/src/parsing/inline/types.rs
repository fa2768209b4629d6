/// The construct whose text the inline parser is scanning.
///
/// The context decides what ends the scan: headings and table cells never
/// continue past a newline, `|` only ends a table cell, trailing `=` only
/// matters in a heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemContext {
    Paragraph,
    ListItem,
    TableCell,
    Heading,
}

/// Why the inline scan stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineEnd {
    /// A `|` inside a table cell; the cursor rests on it.
    Cell,
    /// End of the enclosing block: end of input, a blank line, a line that
    /// starts other block markup, or end of line in a heading or cell.
    Block,
}
