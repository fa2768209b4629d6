use std::io::Write;

use super::RenderError;
use crate::{
    parsing::{blocks::ListMarker, inline::FormatKind},
    sink::EventSink,
};

/// Writes events as readable plain text.
///
/// Markup disappears, list items get a bullet or number indented two spaces
/// per level, table cells are joined with ` | `.
pub struct TextRenderer<W: Write> {
    out: W,
    /// Open list scopes with the number of the current item.
    lists: Vec<(ListMarker, usize)>,
    cells_in_row: usize,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            lists: Vec::new(),
            cells_in_row: 0,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write(&mut self, s: &str) -> Result<(), RenderError> {
        self.out.write_all(s.as_bytes())?;
        Ok(())
    }

    fn item_prefix(&mut self) -> Result<(), RenderError> {
        let Some(&(marker, number)) = self.lists.last() else {
            return Ok(());
        };
        let indent = "  ".repeat(self.lists.len() - 1);
        let bullet = match marker {
            ListMarker::Bullet | ListMarker::Dash => "- ".to_string(),
            ListMarker::Numbered => format!("{number}. "),
            ListMarker::Quote => "> ".to_string(),
            ListMarker::Indent => "  ".to_string(),
            ListMarker::Center => String::new(),
        };
        self.write(&format!("{indent}{bullet}"))
    }

    fn cell_open(&mut self) -> Result<(), RenderError> {
        if self.cells_in_row > 0 {
            self.write(" | ")?;
        }
        self.cells_in_row += 1;
        Ok(())
    }
}

impl<W: Write> EventSink for TextRenderer<W> {
    type Error = RenderError;

    fn text(&mut self, text: &str) -> Result<(), RenderError> {
        self.write(text)
    }

    fn table_open(&mut self) -> Result<(), RenderError> {
        Ok(())
    }

    fn table_close(&mut self) -> Result<(), RenderError> {
        Ok(())
    }

    fn table_row_open(&mut self) -> Result<(), RenderError> {
        self.cells_in_row = 0;
        Ok(())
    }

    fn table_row_close(&mut self) -> Result<(), RenderError> {
        self.write("\n")
    }

    fn table_head_cell_open(&mut self, _colspan: &str) -> Result<(), RenderError> {
        self.cell_open()
    }

    fn table_head_cell_close(&mut self) -> Result<(), RenderError> {
        Ok(())
    }

    fn table_cell_open(&mut self, _colspan: &str) -> Result<(), RenderError> {
        self.cell_open()
    }

    fn table_cell_close(&mut self) -> Result<(), RenderError> {
        Ok(())
    }

    fn list_open(&mut self, marker: ListMarker) -> Result<(), RenderError> {
        if !self.lists.is_empty() {
            self.write("\n")?;
        }
        self.lists.push((marker, 1));
        self.item_prefix()
    }

    fn list_next_item(&mut self, _marker: ListMarker) -> Result<(), RenderError> {
        if let Some((_, number)) = self.lists.last_mut() {
            *number += 1;
        }
        self.write("\n")?;
        self.item_prefix()
    }

    fn list_blank_item(&mut self, _marker: ListMarker) -> Result<(), RenderError> {
        Ok(())
    }

    fn list_close(&mut self, _marker: ListMarker) -> Result<(), RenderError> {
        self.lists.pop();
        if self.lists.is_empty() {
            self.write("\n")?;
        }
        Ok(())
    }

    fn paragraph_open(&mut self) -> Result<(), RenderError> {
        Ok(())
    }

    fn paragraph_close(&mut self) -> Result<(), RenderError> {
        self.write("\n")
    }

    fn heading_open(&mut self, _level: u8) -> Result<(), RenderError> {
        Ok(())
    }

    fn heading_close(&mut self, _level: u8) -> Result<(), RenderError> {
        self.write("\n")
    }

    fn format_open(&mut self, _kind: FormatKind) -> Result<(), RenderError> {
        Ok(())
    }

    fn format_close(&mut self, _kind: FormatKind) -> Result<(), RenderError> {
        Ok(())
    }

    fn hr(&mut self) -> Result<(), RenderError> {
        self.write("----\n")
    }

    fn br(&mut self) -> Result<(), RenderError> {
        self.write("\n")
    }

    fn nowiki_block(&mut self, text: &str) -> Result<(), RenderError> {
        self.write(text)?;
        self.write("\n")
    }

    fn nowiki_inline(&mut self, text: &str) -> Result<(), RenderError> {
        self.write(text)
    }

    fn image(&mut self, src: &str, title: Option<&str>) -> Result<(), RenderError> {
        self.write(title.unwrap_or(src))
    }

    fn link(&mut self, target: &str, title: Option<&str>) -> Result<(), RenderError> {
        self.write(title.unwrap_or(target))
    }

    fn placeholder(&mut self, _name: &str) -> Result<(), RenderError> {
        Ok(())
    }
}
