//! # Creole parsing
//!
//! Two layers share one pass over the input:
//!
//! - [`blocks`]: line classification ([`blocks::Scanner`]) and the block
//!   state machine ([`blocks::BlockParser`]) that tracks open list scopes and
//!   tables and decides which construct each line starts.
//! - [`inline`]: the [`inline::InlineParser`] that scans the text of one
//!   item (paragraph, list item, heading, table cell) and emits text,
//!   formatting toggles, links, images, nowiki and placeholders.
//!
//! Nothing is buffered beyond the current text run: events go straight to
//! the [`EventSink`]. Malformed markup never fails; the only error a parse
//! can return is one raised by the sink.

pub mod blocks;
pub mod chars;
pub mod inline;
pub mod span;

#[cfg(test)]
mod tests;

use crate::sink::EventSink;

use blocks::BlockParser;

/// Optional extensions to strict Creole 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Turn bare `http://` and `https://` URLs into links.
    pub autolinks: bool,
    /// Turn ` -- ` into an en dash.
    pub typographic_dashes: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            autolinks: true,
            typographic_dashes: true,
        }
    }
}

/// Parses `text` with default options, driving `sink` with every event.
pub fn parse<S: EventSink>(text: &str, sink: &mut S) -> Result<(), S::Error> {
    parse_with_options(text, &ParseOptions::default(), sink)
}

pub fn parse_with_options<S: EventSink>(
    text: &str,
    options: &ParseOptions,
    sink: &mut S,
) -> Result<(), S::Error> {
    BlockParser::new(text, *options, sink).run()
}
