use std::convert::Infallible;

use serde::Serialize;

use super::EventSink;
use crate::parsing::{blocks::ListMarker, inline::FormatKind, parse};

/// Owned record of one [`EventSink`] call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Event {
    Text(String),
    TableOpen,
    TableClose,
    TableRowOpen,
    TableRowClose,
    TableHeadCellOpen(String),
    TableHeadCellClose,
    TableCellOpen(String),
    TableCellClose,
    ListOpen(ListMarker),
    ListNextItem(ListMarker),
    ListBlankItem(ListMarker),
    ListClose(ListMarker),
    ParagraphOpen,
    ParagraphClose,
    HeadingOpen(u8),
    HeadingClose(u8),
    FormatOpen(FormatKind),
    FormatClose(FormatKind),
    Hr,
    Br,
    NowikiBlock(String),
    NowikiInline(String),
    Image { src: String, title: Option<String> },
    Link { target: String, title: Option<String> },
    Placeholder(String),
}

/// Sink that keeps every event in memory.
#[derive(Debug, Default, Clone)]
pub struct EventRecorder {
    pub events: Vec<Event>,
}

impl EventRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_events(self) -> Vec<Event> {
        self.events
    }

    fn record(&mut self, event: Event) -> Result<(), Infallible> {
        self.events.push(event);
        Ok(())
    }
}

/// Parses `text` with default options and returns the recorded events.
pub fn collect_events(text: &str) -> Vec<Event> {
    let mut recorder = EventRecorder::new();
    match parse(text, &mut recorder) {
        Ok(()) => recorder.into_events(),
        Err(never) => match never {},
    }
}

impl EventSink for EventRecorder {
    type Error = Infallible;

    fn text(&mut self, text: &str) -> Result<(), Infallible> {
        self.record(Event::Text(text.to_string()))
    }

    fn table_open(&mut self) -> Result<(), Infallible> {
        self.record(Event::TableOpen)
    }

    fn table_close(&mut self) -> Result<(), Infallible> {
        self.record(Event::TableClose)
    }

    fn table_row_open(&mut self) -> Result<(), Infallible> {
        self.record(Event::TableRowOpen)
    }

    fn table_row_close(&mut self) -> Result<(), Infallible> {
        self.record(Event::TableRowClose)
    }

    fn table_head_cell_open(&mut self, colspan: &str) -> Result<(), Infallible> {
        self.record(Event::TableHeadCellOpen(colspan.to_string()))
    }

    fn table_head_cell_close(&mut self) -> Result<(), Infallible> {
        self.record(Event::TableHeadCellClose)
    }

    fn table_cell_open(&mut self, colspan: &str) -> Result<(), Infallible> {
        self.record(Event::TableCellOpen(colspan.to_string()))
    }

    fn table_cell_close(&mut self) -> Result<(), Infallible> {
        self.record(Event::TableCellClose)
    }

    fn list_open(&mut self, marker: ListMarker) -> Result<(), Infallible> {
        self.record(Event::ListOpen(marker))
    }

    fn list_next_item(&mut self, marker: ListMarker) -> Result<(), Infallible> {
        self.record(Event::ListNextItem(marker))
    }

    fn list_blank_item(&mut self, marker: ListMarker) -> Result<(), Infallible> {
        self.record(Event::ListBlankItem(marker))
    }

    fn list_close(&mut self, marker: ListMarker) -> Result<(), Infallible> {
        self.record(Event::ListClose(marker))
    }

    fn paragraph_open(&mut self) -> Result<(), Infallible> {
        self.record(Event::ParagraphOpen)
    }

    fn paragraph_close(&mut self) -> Result<(), Infallible> {
        self.record(Event::ParagraphClose)
    }

    fn heading_open(&mut self, level: u8) -> Result<(), Infallible> {
        self.record(Event::HeadingOpen(level))
    }

    fn heading_close(&mut self, level: u8) -> Result<(), Infallible> {
        self.record(Event::HeadingClose(level))
    }

    fn format_open(&mut self, kind: FormatKind) -> Result<(), Infallible> {
        self.record(Event::FormatOpen(kind))
    }

    fn format_close(&mut self, kind: FormatKind) -> Result<(), Infallible> {
        self.record(Event::FormatClose(kind))
    }

    fn hr(&mut self) -> Result<(), Infallible> {
        self.record(Event::Hr)
    }

    fn br(&mut self) -> Result<(), Infallible> {
        self.record(Event::Br)
    }

    fn nowiki_block(&mut self, text: &str) -> Result<(), Infallible> {
        self.record(Event::NowikiBlock(text.to_string()))
    }

    fn nowiki_inline(&mut self, text: &str) -> Result<(), Infallible> {
        self.record(Event::NowikiInline(text.to_string()))
    }

    fn image(&mut self, src: &str, title: Option<&str>) -> Result<(), Infallible> {
        self.record(Event::Image {
            src: src.to_string(),
            title: title.map(str::to_string),
        })
    }

    fn link(&mut self, target: &str, title: Option<&str>) -> Result<(), Infallible> {
        self.record(Event::Link {
            target: target.to_string(),
            title: title.map(str::to_string),
        })
    }

    fn placeholder(&mut self, name: &str) -> Result<(), Infallible> {
        self.record(Event::Placeholder(name.to_string()))
    }
}
