use crate::parsing::{
    chars::{line_end, skip_blanks},
    span::Span,
};

use super::kinds::{Heading, HorizontalRule, ListMarker, Nowiki, TableRow};

/// Syntactic classification of a line from its leading characters.
///
/// No context is consulted: a `**bold**` line classifies as a list marker
/// line and it is up to the block parser to decide it is a paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    /// A line starting with `depth` repeats of `marker`. `remainder` is
    /// what follows the run, which may hold further markers of other kinds.
    ListMarker {
        marker: ListMarker,
        depth: usize,
        remainder: Span,
    },
    /// `remainder` is the heading text without its closing `=` trailer.
    Heading {
        level: u8,
        remainder: Span,
    },
    TableRow {
        cells: Span,
    },
    HorizontalRule,
    NowikiFenceOpen,
    /// A line starting with `}}}`. The block parser finds closing fences
    /// itself, so only scanner consumers see this.
    NowikiFenceClose,
    /// `~` followed by a character that would otherwise start block markup.
    Escaped,
    Text,
}

/// One physical line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    /// Content after leading blanks, without the line terminator.
    pub span: Span,
    /// Offset where the following line starts.
    pub next: usize,
    pub kind: LineKind,
}

/// Classifies the line starting at `offset`, or `None` at end of input.
///
/// `offset` does not have to be at a line start: the block parser resumes
/// mid-line after constructs such as a nowiki block closing fence.
pub fn classify_at(text: &str, offset: usize) -> Option<Line> {
    let bytes = text.as_bytes();
    if offset >= bytes.len() {
        return None;
    }
    let start = skip_blanks(bytes, offset);
    let eol = line_end(bytes, start);
    let next = if eol < bytes.len() { eol + 1 } else { eol };
    let mut end = eol;
    if end > start && bytes[end - 1] == b'\r' {
        end -= 1;
    }
    Some(Line {
        span: Span::new(start, end),
        next,
        kind: classify_content(bytes, start, end),
    })
}

fn classify_content(bytes: &[u8], start: usize, end: usize) -> LineKind {
    if start >= end {
        return LineKind::Blank;
    }
    let rest = &bytes[start..end];
    match rest[0] {
        TableRow::SEPARATOR => LineKind::TableRow {
            cells: Span::new(start, end),
        },
        Heading::MARKER => {
            let run = Heading::run_len(bytes, start);
            let content = skip_blanks(bytes, start + run).min(end);
            LineKind::Heading {
                level: Heading::level(run),
                remainder: Span::new(content, Heading::content_end(bytes, content, end)),
            }
        }
        b'{' if rest.starts_with(Nowiki::OPEN) => LineKind::NowikiFenceOpen,
        b'}' if rest.starts_with(Nowiki::CLOSE) => LineKind::NowikiFenceClose,
        b'~' if rest.get(1).is_some_and(|&b| escapes_block_markup(b)) => LineKind::Escaped,
        _ if HorizontalRule::matches(bytes, start) => LineKind::HorizontalRule,
        c => match ListMarker::from_byte(c) {
            Some(marker) => {
                let depth = rest.iter().take_while(|&&b| b == c).count();
                let content = skip_blanks(bytes, start + depth).min(end);
                LineKind::ListMarker {
                    marker,
                    depth,
                    remainder: Span::new(content, end),
                }
            }
            None => LineKind::Text,
        },
    }
}

/// Characters that lose their block meaning when preceded by `~` at line start.
pub fn escapes_block_markup(b: u8) -> bool {
    ListMarker::from_byte(b).is_some()
        || b == Heading::MARKER
        || b == TableRow::SEPARATOR
        || b == b'{'
}

/// Lazy line iterator, restartable at any byte offset.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(text: &'a str) -> Self {
        Self::at(text, 0)
    }

    pub fn at(text: &'a str, offset: usize) -> Self {
        Self { text, pos: offset }
    }

    /// Offset the next call to `next` will classify from.
    pub fn position(&self) -> usize {
        self.pos
    }
}

impl Iterator for Scanner<'_> {
    type Item = Line;

    fn next(&mut self) -> Option<Line> {
        let line = classify_at(self.text, self.pos)?;
        self.pos = line.next;
        Some(line)
    }
}
