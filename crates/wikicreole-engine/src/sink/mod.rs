//! # Event sinks
//!
//! The parser never builds a tree. It drives an [`EventSink`] with one call
//! per structural or inline event, in document order, and stops at the first
//! error the sink returns.
//!
//! Strings handed to a sink are raw: escaping for the output format is the
//! sink's business.

mod event;
pub mod invariants;

pub use event::{Event, EventRecorder, collect_events};

use crate::parsing::{blocks::ListMarker, inline::FormatKind};

/// Receiver of parse events.
///
/// Every method returns `Result<(), Self::Error>`; the first `Err` halts the
/// parse and is returned unchanged to the caller.
pub trait EventSink {
    type Error;

    fn text(&mut self, text: &str) -> Result<(), Self::Error>;

    fn table_open(&mut self) -> Result<(), Self::Error>;
    fn table_close(&mut self) -> Result<(), Self::Error>;
    fn table_row_open(&mut self) -> Result<(), Self::Error>;
    fn table_row_close(&mut self) -> Result<(), Self::Error>;
    /// `colspan` is the decimal column count, `"1"` for an ordinary cell.
    fn table_head_cell_open(&mut self, colspan: &str) -> Result<(), Self::Error>;
    fn table_head_cell_close(&mut self) -> Result<(), Self::Error>;
    fn table_cell_open(&mut self, colspan: &str) -> Result<(), Self::Error>;
    fn table_cell_close(&mut self) -> Result<(), Self::Error>;

    /// Opens a list scope together with its first item.
    fn list_open(&mut self, marker: ListMarker) -> Result<(), Self::Error>;
    fn list_next_item(&mut self, marker: ListMarker) -> Result<(), Self::Error>;
    fn list_blank_item(&mut self, marker: ListMarker) -> Result<(), Self::Error>;
    fn list_close(&mut self, marker: ListMarker) -> Result<(), Self::Error>;

    fn paragraph_open(&mut self) -> Result<(), Self::Error>;
    fn paragraph_close(&mut self) -> Result<(), Self::Error>;
    fn heading_open(&mut self, level: u8) -> Result<(), Self::Error>;
    fn heading_close(&mut self, level: u8) -> Result<(), Self::Error>;

    fn format_open(&mut self, kind: FormatKind) -> Result<(), Self::Error>;
    fn format_close(&mut self, kind: FormatKind) -> Result<(), Self::Error>;

    fn hr(&mut self) -> Result<(), Self::Error>;
    fn br(&mut self) -> Result<(), Self::Error>;
    fn nowiki_block(&mut self, text: &str) -> Result<(), Self::Error>;
    fn nowiki_inline(&mut self, text: &str) -> Result<(), Self::Error>;
    fn image(&mut self, src: &str, title: Option<&str>) -> Result<(), Self::Error>;
    fn link(&mut self, target: &str, title: Option<&str>) -> Result<(), Self::Error>;
    fn placeholder(&mut self, name: &str) -> Result<(), Self::Error>;
}
