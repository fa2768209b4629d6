use super::kinds::ListMarker;

/// Stack of open list scopes, outermost first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContainerPath(pub Vec<ListMarker>);

impl ContainerPath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn depth(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn push(&mut self, marker: ListMarker) {
        self.0.push(marker);
    }

    pub fn pop(&mut self) -> Option<ListMarker> {
        self.0.pop()
    }

    pub fn innermost(&self) -> Option<ListMarker> {
        self.0.last().copied()
    }

    pub fn outermost(&self) -> Option<ListMarker> {
        self.0.first().copied()
    }

    /// Matches the line prefix at `pos` against the open scopes.
    ///
    /// Returns how many levels matched and the offset just past the matched
    /// markers. A quote-like level consumes every repeat of its marker.
    pub fn match_prefix(&self, bytes: &[u8], mut pos: usize) -> (usize, usize) {
        let mut matched = 0;
        for marker in &self.0 {
            let b = marker.as_byte();
            if bytes.get(pos) != Some(&b) {
                break;
            }
            pos += 1;
            if marker.is_quote_like() {
                while bytes.get(pos) == Some(&b) {
                    pos += 1;
                }
            }
            matched += 1;
        }
        (matched, pos)
    }
}
