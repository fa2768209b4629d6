use log::{debug, trace};

use super::{
    classify::{LineKind, classify_at},
    containers::ContainerPath,
    kinds::{ListMarker, MAX_LIST_DEPTH, Nowiki, TableRow},
};
use crate::{
    parsing::{
        ParseOptions,
        chars::skip_blanks,
        inline::{InlineEnd, InlineParser, ItemContext},
    },
    sink::EventSink,
};

/// Drives block structure over the whole input.
///
/// Each step classifies the line at the current offset and handles exactly
/// one block construct: a blank line, a table row, a heading, a rule, a
/// nowiki block, a list item or a paragraph. Multi-line constructs (items,
/// paragraphs) are consumed by the inline parser, which reports where it
/// stopped.
pub struct BlockParser<'a, 's, S: EventSink> {
    text: &'a str,
    pos: usize,
    options: ParseOptions,
    sink: &'s mut S,
    lists: ContainerPath,
    in_table: bool,
    /// Set after a scope opens or closes and after an empty item, so runs
    /// of empty items produce a single `list_blank_item`.
    suppress_blank_item: bool,
}

impl<'a, 's, S: EventSink> BlockParser<'a, 's, S> {
    pub fn new(text: &'a str, options: ParseOptions, sink: &'s mut S) -> Self {
        Self {
            text,
            pos: 0,
            options,
            sink,
            lists: ContainerPath::new(),
            in_table: false,
            suppress_blank_item: false,
        }
    }

    /// Parses to end of input, then closes every scope still open.
    pub fn run(mut self) -> Result<(), S::Error> {
        while self.step()? {}
        if !self.lists.is_empty() {
            debug!("closing {} list scope(s) at end of input", self.lists.depth());
        }
        self.close_scopes()
    }

    fn step(&mut self) -> Result<bool, S::Error> {
        let Some(line) = classify_at(self.text, self.pos) else {
            return Ok(false);
        };
        self.pos = line.span.start;
        trace!("block at {}: {:?}", self.pos, line.kind);

        match line.kind {
            LineKind::Blank => {
                self.close_scopes()?;
                self.pos = line.next;
                return Ok(true);
            }
            LineKind::TableRow { .. } => {
                if !self.in_table {
                    self.close_lists()?;
                    self.sink.table_open()?;
                    self.in_table = true;
                }
                self.table_row()?;
                return Ok(true);
            }
            _ => self.close_table()?,
        }

        match line.kind {
            LineKind::Heading { level, remainder } => {
                self.close_lists()?;
                self.pos = remainder.start;
                self.sink.heading_open(level)?;
                self.inline(ItemContext::Heading)?;
                self.sink.heading_close(level)?;
                return Ok(true);
            }
            LineKind::HorizontalRule => {
                self.close_lists()?;
                self.sink.hr()?;
                self.pos = line.next;
                return Ok(true);
            }
            LineKind::NowikiFenceOpen => {
                if self.nowiki_block()? {
                    return Ok(true);
                }
            }
            _ => {}
        }

        if self.list_line()? {
            return Ok(true);
        }
        self.paragraph()?;
        Ok(true)
    }

    fn inline(&mut self, context: ItemContext) -> Result<InlineEnd, S::Error> {
        let mut parser = InlineParser::new(
            self.text,
            self.pos,
            context,
            self.lists.outermost(),
            self.options,
        );
        let end = parser.run(self.sink)?;
        self.pos = parser.position();
        Ok(end)
    }

    fn paragraph(&mut self) -> Result<(), S::Error> {
        self.sink.paragraph_open()?;
        self.inline(ItemContext::Paragraph)?;
        self.sink.paragraph_close()
    }

    /// Handles a multi-line nowiki block. Returns `false` when the region
    /// closes on its opening line, which makes it inline nowiki in a paragraph.
    fn nowiki_block(&mut self) -> Result<bool, S::Error> {
        let start = self.pos + Nowiki::OPEN.len();
        let (raw, next) = match Nowiki::find_close(self.text.as_bytes(), start) {
            Some(close) => {
                let raw = &self.text[start..close];
                if !raw.contains('\n') {
                    return Ok(false);
                }
                (raw, close + Nowiki::CLOSE.len())
            }
            None => {
                debug!("unterminated nowiki block at {}, taking rest of input", self.pos);
                (&self.text[start..], self.text.len())
            }
        };
        self.close_lists()?;
        if let Some(body) = Nowiki::block_body(raw) {
            self.sink.nowiki_block(&Nowiki::unescape(body))?;
        }
        self.pos = next;
        Ok(true)
    }

    /// Handles a line while list scopes may be open.
    ///
    /// Returns `false` when the line is not list content, in which case it is
    /// a paragraph.
    fn list_line(&mut self) -> Result<bool, S::Error> {
        let bytes = self.text.as_bytes();
        let (matched, at) = self.lists.match_prefix(bytes, self.pos);

        if matched < self.lists.depth() {
            while self.lists.depth() > matched {
                self.close_innermost_list()?;
            }
            // The same line is examined again against the shorter stack.
            return Ok(true);
        }

        if let Some(marker) = bytes.get(at).copied().and_then(ListMarker::from_byte)
            && marker.opens_level(bytes, at)
        {
            if self.lists.depth() < MAX_LIST_DEPTH {
                let mut next = at + 1;
                if marker.is_quote_like() {
                    while bytes.get(next) == Some(&marker.as_byte()) {
                        next += 1;
                    }
                }
                self.lists.push(marker);
                self.suppress_blank_item = true;
                self.sink.list_open(marker)?;
                self.pos = next;
                self.list_item()?;
                return Ok(true);
            }
            debug!("list nesting capped at {MAX_LIST_DEPTH}, marker kept as text");
        }

        let Some(marker) = self.lists.innermost() else {
            return Ok(false);
        };
        self.sink.list_next_item(marker)?;
        self.pos = at;
        self.list_item()?;
        Ok(true)
    }

    fn list_item(&mut self) -> Result<(), S::Error> {
        let bytes = self.text.as_bytes();
        self.pos = skip_blanks(bytes, self.pos);
        if bytes.get(self.pos) == Some(&b'\n') {
            if !self.suppress_blank_item
                && let Some(marker) = self.lists.innermost()
            {
                self.sink.list_blank_item(marker)?;
            }
            self.suppress_blank_item = true;
            self.pos += 1;
            return Ok(());
        }
        self.suppress_blank_item = false;
        self.inline(ItemContext::ListItem)?;
        Ok(())
    }

    fn table_row(&mut self) -> Result<(), S::Error> {
        let bytes = self.text.as_bytes();
        self.sink.table_row_open()?;
        // Each iteration starts on a `|`.
        while bytes.get(self.pos) == Some(&TableRow::SEPARATOR) {
            let run = bytes[self.pos..]
                .iter()
                .take_while(|&&b| b == TableRow::SEPARATOR)
                .count();
            self.pos += run;
            let header = bytes.get(self.pos) == Some(&TableRow::HEADER);
            if header {
                self.pos += 1;
            }
            self.pos = skip_blanks(bytes, self.pos);
            match bytes.get(self.pos) {
                None => break,
                Some(b'\n') => {
                    self.pos += 1;
                    break;
                }
                Some(_) => {}
            }

            let colspan = TableRow::colspan(run);
            if header {
                self.sink.table_head_cell_open(&colspan)?;
            } else {
                self.sink.table_cell_open(&colspan)?;
            }
            let end = self.inline(ItemContext::TableCell)?;
            if header {
                self.sink.table_head_cell_close()?;
            } else {
                self.sink.table_cell_close()?;
            }
            if end == InlineEnd::Block {
                if bytes.get(self.pos) == Some(&b'\n') {
                    self.pos += 1;
                }
                break;
            }
        }
        self.sink.table_row_close()
    }

    fn close_innermost_list(&mut self) -> Result<(), S::Error> {
        match self.lists.pop() {
            Some(marker) => {
                self.suppress_blank_item = true;
                self.sink.list_close(marker)
            }
            None => Ok(()),
        }
    }

    fn close_lists(&mut self) -> Result<(), S::Error> {
        while !self.lists.is_empty() {
            self.close_innermost_list()?;
        }
        Ok(())
    }

    fn close_table(&mut self) -> Result<(), S::Error> {
        if self.in_table {
            self.in_table = false;
            self.sink.table_close()?;
        }
        Ok(())
    }

    fn close_scopes(&mut self) -> Result<(), S::Error> {
        self.close_lists()?;
        self.close_table()
    }
}
