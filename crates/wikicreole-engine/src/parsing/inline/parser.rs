use log::debug;

use super::{
    cursor::Cursor,
    kinds::{AutoLink, Escape, FormatKind, Image, LineBreak, Link, Placeholder, split_title},
    types::{InlineEnd, ItemContext},
};
use crate::{
    parsing::{
        ParseOptions,
        blocks::{Heading, ListMarker, Nowiki, TableRow},
        chars::{find_on_line, is_blank},
    },
    sink::EventSink,
};

const EN_DASH: char = '\u{2013}';

/// Scans the text of one block item and emits its inline events.
///
/// Text accumulates in a pending run that is flushed whenever another event
/// has to be emitted. Open formatting spans live on an explicit stack and are
/// closed in reverse order when the item ends.
pub struct InlineParser<'a> {
    cur: Cursor<'a>,
    context: ItemContext,
    /// Marker of the outermost open list scope, if any.
    outer_list: Option<ListMarker>,
    options: ParseOptions,
    pending: String,
    spans: Vec<FormatKind>,
    at_line_start: bool,
}

impl<'a> InlineParser<'a> {
    pub fn new(
        src: &'a str,
        start: usize,
        context: ItemContext,
        outer_list: Option<ListMarker>,
        options: ParseOptions,
    ) -> Self {
        Self {
            cur: Cursor::new(src, start),
            context,
            outer_list,
            options,
            pending: String::new(),
            spans: Vec::new(),
            at_line_start: true,
        }
    }

    /// Offset where scanning stopped.
    pub fn position(&self) -> usize {
        self.cur.pos()
    }

    /// Scans to the end of the item, closing any formatting left open.
    pub fn run<S: EventSink>(&mut self, sink: &mut S) -> Result<InlineEnd, S::Error> {
        let end = self.scan(sink)?;
        self.flush(sink)?;
        while let Some(kind) = self.spans.pop() {
            debug!("auto-closing {kind:?} at {}", self.cur.pos());
            sink.format_close(kind)?;
        }
        Ok(end)
    }

    fn scan<S: EventSink>(&mut self, sink: &mut S) -> Result<InlineEnd, S::Error> {
        loop {
            let Some(c) = self.cur.peek() else {
                return Ok(InlineEnd::Block);
            };
            if c == b'\r' && self.cur.peek_at(1) == Some(b'\n') {
                self.cur.bump();
                continue;
            }
            if c == b'\n' {
                if let Some(end) = self.newline() {
                    return Ok(end);
                }
                continue;
            }
            let line_start = std::mem::replace(&mut self.at_line_start, false);

            if let Some(kind) = FormatKind::from_byte(c)
                && self.cur.peek_at(1) == Some(c)
            {
                self.flush(sink)?;
                self.cur.bump_n(2);
                if self.spans.last() == Some(&kind) {
                    self.spans.pop();
                    sink.format_close(kind)?;
                } else {
                    self.spans.push(kind);
                    sink.format_open(kind)?;
                }
                continue;
            }

            let handled = match c {
                TableRow::SEPARATOR if self.context == ItemContext::TableCell => {
                    return Ok(InlineEnd::Cell);
                }
                Heading::MARKER if self.context == ItemContext::Heading => {
                    if let Some(end) = Heading::trailer_end(self.cur.s.as_bytes(), self.cur.pos()) {
                        let kept = self.pending.trim_end_matches(|c: char| c <= ' ').len();
                        self.pending.truncate(kept);
                        self.cur.seek(end);
                        return Ok(InlineEnd::Block);
                    }
                    false
                }
                b'{' => self.nowiki(sink)? || self.image(sink)?,
                b'[' => self.link(sink)?,
                b'<' => self.placeholder(sink)?,
                b'\\' if self.cur.starts_with(LineBreak::TOKEN) => {
                    self.flush(sink)?;
                    self.cur.bump_n(LineBreak::TOKEN.len());
                    sink.br()?;
                    true
                }
                Escape::CHAR => self.escape(line_start),
                b'h' if self.options.autolinks => self.autolink(sink)?,
                b'-' if self.options.typographic_dashes => self.dash(),
                _ => false,
            };
            if !handled && let Some(ch) = self.cur.bump_char() {
                self.pending.push(ch);
            }
        }
    }

    /// Handles a newline outside headings and cells. Returns `Some` when the
    /// item ends here.
    fn newline(&mut self) -> Option<InlineEnd> {
        if matches!(self.context, ItemContext::Heading | ItemContext::TableCell) {
            return Some(InlineEnd::Block);
        }
        self.cur.bump();
        while self.cur.peek().is_some_and(is_blank) {
            self.cur.bump();
        }
        match self.cur.peek() {
            None | Some(b'\n') => return Some(InlineEnd::Block),
            Some(c) if self.breaks_item(c) => return Some(InlineEnd::Block),
            Some(_) => {}
        }
        self.pending.push('\n');
        self.at_line_start = true;
        None
    }

    /// Whether a line starting with `c` begins new block markup.
    fn breaks_item(&self, c: u8) -> bool {
        if let Some(marker) = ListMarker::from_byte(c) {
            return !marker.doubles_as_format()
                || self.cur.peek_at(1) != Some(c)
                || self.outer_list == Some(marker);
        }
        c == Heading::MARKER || c == TableRow::SEPARATOR
    }

    fn flush<S: EventSink>(&mut self, sink: &mut S) -> Result<(), S::Error> {
        if !self.pending.is_empty() {
            sink.text(&self.pending)?;
            self.pending.clear();
        }
        Ok(())
    }

    fn nowiki<S: EventSink>(&mut self, sink: &mut S) -> Result<bool, S::Error> {
        if !self.cur.starts_with(Nowiki::OPEN) {
            return Ok(false);
        }
        let src = self.cur.s;
        let start = self.cur.pos() + Nowiki::OPEN.len();
        let Some(close) = Nowiki::find_close(src.as_bytes(), start) else {
            return Ok(false);
        };
        self.flush(sink)?;
        let raw = &src[start..close];
        if raw.contains('\n') {
            if let Some(body) = Nowiki::block_body(raw) {
                let in_paragraph = self.context == ItemContext::Paragraph;
                if in_paragraph {
                    sink.paragraph_close()?;
                }
                sink.nowiki_block(&Nowiki::unescape(body))?;
                if in_paragraph {
                    sink.paragraph_open()?;
                }
            }
        } else {
            sink.nowiki_inline(&Nowiki::unescape(raw))?;
        }
        self.cur.seek(close + Nowiki::CLOSE.len());
        Ok(true)
    }

    /// Finds `close` on the current line after an opener of `open_len` bytes.
    fn enclosed(&self, open_len: usize, close: &[u8]) -> Option<(&'a str, usize)> {
        let src = self.cur.s;
        let start = self.cur.pos() + open_len;
        let end = find_on_line(src.as_bytes(), start, close)?;
        Some((&src[start..end], end + close.len()))
    }

    fn image<S: EventSink>(&mut self, sink: &mut S) -> Result<bool, S::Error> {
        if !self.cur.starts_with(Image::OPEN) || self.cur.starts_with(Nowiki::OPEN) {
            return Ok(false);
        }
        let Some((content, next)) = self.enclosed(Image::OPEN.len(), Image::CLOSE) else {
            return Ok(false);
        };
        self.flush(sink)?;
        let (src, title) = split_title(content);
        sink.image(src, title)?;
        self.cur.seek(next);
        Ok(true)
    }

    fn link<S: EventSink>(&mut self, sink: &mut S) -> Result<bool, S::Error> {
        if !self.cur.starts_with(Link::OPEN) {
            return Ok(false);
        }
        let Some((content, next)) = self.enclosed(Link::OPEN.len(), Link::CLOSE) else {
            return Ok(false);
        };
        self.flush(sink)?;
        let (target, title) = split_title(content);
        sink.link(target, title)?;
        self.cur.seek(next);
        Ok(true)
    }

    fn placeholder<S: EventSink>(&mut self, sink: &mut S) -> Result<bool, S::Error> {
        if !self.cur.starts_with(Placeholder::OPEN) {
            return Ok(false);
        }
        let Some((name, next)) = self.enclosed(Placeholder::OPEN.len(), Placeholder::CLOSE) else {
            return Ok(false);
        };
        self.flush(sink)?;
        sink.placeholder(name)?;
        self.cur.seek(next);
        Ok(true)
    }

    fn escape(&mut self, at_line_start: bool) -> bool {
        let Some(next) = self.cur.peek_at(1) else {
            return false;
        };
        if Escape::applies(next, self.cur.peek_at(2), at_line_start) {
            self.cur.bump();
            self.pending.push(next as char);
            self.cur.bump();
            return true;
        }
        // `~http://` keeps the URL as text: copy the scheme so it is not
        // seen again.
        if self.options.autolinks {
            let rest = &self.cur.rest().as_bytes()[1..];
            if let Some(len) = AutoLink::scheme_len(rest) {
                let start = self.cur.pos() + 1;
                self.pending.push_str(&self.cur.s[start..start + len]);
                self.cur.bump_n(1 + len);
                return true;
            }
        }
        false
    }

    fn autolink<S: EventSink>(&mut self, sink: &mut S) -> Result<bool, S::Error> {
        let Some(len) = AutoLink::url_len(self.cur.rest().as_bytes()) else {
            return Ok(false);
        };
        self.flush(sink)?;
        let start = self.cur.pos();
        sink.link(&self.cur.s[start..start + len], None)?;
        self.cur.bump_n(len);
        Ok(true)
    }

    /// ` -- ` becomes an en dash.
    fn dash(&mut self) -> bool {
        if self.pending.ends_with(' ') && self.cur.starts_with(b"-- ") {
            self.pending.push(EN_DASH);
            self.cur.bump_n(2);
            return true;
        }
        false
    }
}
