/// Table row syntax: `|` separated cells, `|=` marks a header cell.
pub struct TableRow;

impl TableRow {
    pub const SEPARATOR: u8 = b'|';
    pub const HEADER: u8 = b'=';
    pub const MAX_COLSPAN: usize = 99;

    /// Colspan text for `run` consecutive separators.
    pub fn colspan(run: usize) -> String {
        run.clamp(1, Self::MAX_COLSPAN).to_string()
    }
}
