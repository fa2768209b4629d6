use std::{borrow::Cow, io::Write};

use super::{PlaceholderStyle, RenderError};
use crate::{
    parsing::{blocks::ListMarker, inline::FormatKind},
    sink::EventSink,
};

/// Escapes raw text for the output document.
pub type Escaper = for<'x> fn(&'x str) -> Cow<'x, str>;

/// Escapes `&`, `<`, `>`, `"` and `'`, which is safe in element content and
/// in quoted attribute values.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    html_escape::encode_quoted_attribute(text)
}

/// Writes events as an XHTML fragment.
pub struct XhtmlRenderer<W: Write> {
    out: W,
    escape: Escaper,
    placeholders: PlaceholderStyle,
}

impl<W: Write> XhtmlRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            escape: escape_html,
            placeholders: PlaceholderStyle::default(),
        }
    }

    pub fn with_escaper(mut self, escape: Escaper) -> Self {
        self.escape = escape;
        self
    }

    pub fn with_placeholders(mut self, placeholders: PlaceholderStyle) -> Self {
        self.placeholders = placeholders;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write(&mut self, s: &str) -> Result<(), RenderError> {
        self.out.write_all(s.as_bytes())?;
        Ok(())
    }

    fn write_escaped(&mut self, s: &str) -> Result<(), RenderError> {
        let escaped = (self.escape)(s);
        self.out.write_all(escaped.as_bytes())?;
        Ok(())
    }

    fn cell_open(&mut self, tag: &str, colspan: &str) -> Result<(), RenderError> {
        if colspan == "1" {
            self.write(&format!("<{tag}>"))
        } else {
            self.write(&format!("<{tag} colspan=\"{colspan}\">"))
        }
    }
}

fn list_open_tag(marker: ListMarker) -> &'static str {
    match marker {
        ListMarker::Bullet | ListMarker::Dash => "<ul><li>",
        ListMarker::Numbered => "<ol><li>",
        ListMarker::Quote => "<blockquote>",
        ListMarker::Indent => "<div class=\"indent\">",
        ListMarker::Center => "<div class=\"center\">",
    }
}

fn list_next_item_tag(marker: ListMarker) -> &'static str {
    match marker {
        ListMarker::Bullet | ListMarker::Dash | ListMarker::Numbered => "</li>\n<li>",
        ListMarker::Quote | ListMarker::Indent => "",
        ListMarker::Center => "</div>\n<div class=\"center\">",
    }
}

fn list_blank_item_tag(marker: ListMarker) -> &'static str {
    match marker {
        ListMarker::Quote | ListMarker::Indent => "<br/><br/>\n",
        ListMarker::Bullet | ListMarker::Dash | ListMarker::Numbered | ListMarker::Center => {
            "&nbsp;"
        }
    }
}

fn list_close_tag(marker: ListMarker) -> &'static str {
    match marker {
        ListMarker::Bullet | ListMarker::Dash => "</li></ul>\n",
        ListMarker::Numbered => "</li></ol>\n",
        ListMarker::Quote => "</blockquote>\n",
        ListMarker::Indent | ListMarker::Center => "</div>\n",
    }
}

fn format_tags(kind: FormatKind) -> (&'static str, &'static str) {
    match kind {
        FormatKind::Strong => ("<strong>", "</strong>"),
        FormatKind::Emphasis => ("<em>", "</em>"),
        FormatKind::Underline => ("<span class=\"underline\">", "</span>"),
        FormatKind::Monospace => ("<code>", "</code>"),
    }
}

impl<W: Write> EventSink for XhtmlRenderer<W> {
    type Error = RenderError;

    fn text(&mut self, text: &str) -> Result<(), RenderError> {
        self.write_escaped(text)
    }

    fn table_open(&mut self) -> Result<(), RenderError> {
        self.write("<table>")
    }

    fn table_close(&mut self) -> Result<(), RenderError> {
        self.write("</table>")
    }

    fn table_row_open(&mut self) -> Result<(), RenderError> {
        self.write("<tr>")
    }

    fn table_row_close(&mut self) -> Result<(), RenderError> {
        self.write("</tr>")
    }

    fn table_head_cell_open(&mut self, colspan: &str) -> Result<(), RenderError> {
        self.cell_open("th", colspan)
    }

    fn table_head_cell_close(&mut self) -> Result<(), RenderError> {
        self.write("</th>")
    }

    fn table_cell_open(&mut self, colspan: &str) -> Result<(), RenderError> {
        self.cell_open("td", colspan)
    }

    fn table_cell_close(&mut self) -> Result<(), RenderError> {
        self.write("</td>")
    }

    fn list_open(&mut self, marker: ListMarker) -> Result<(), RenderError> {
        self.write(list_open_tag(marker))
    }

    fn list_next_item(&mut self, marker: ListMarker) -> Result<(), RenderError> {
        self.write(list_next_item_tag(marker))
    }

    fn list_blank_item(&mut self, marker: ListMarker) -> Result<(), RenderError> {
        self.write(list_blank_item_tag(marker))
    }

    fn list_close(&mut self, marker: ListMarker) -> Result<(), RenderError> {
        self.write(list_close_tag(marker))
    }

    fn paragraph_open(&mut self) -> Result<(), RenderError> {
        self.write("<p>")
    }

    fn paragraph_close(&mut self) -> Result<(), RenderError> {
        self.write("</p>\n")
    }

    fn heading_open(&mut self, level: u8) -> Result<(), RenderError> {
        self.write(&format!("<h{level}>"))
    }

    fn heading_close(&mut self, level: u8) -> Result<(), RenderError> {
        self.write(&format!("</h{level}>\n"))
    }

    fn format_open(&mut self, kind: FormatKind) -> Result<(), RenderError> {
        self.write(format_tags(kind).0)
    }

    fn format_close(&mut self, kind: FormatKind) -> Result<(), RenderError> {
        self.write(format_tags(kind).1)
    }

    fn hr(&mut self) -> Result<(), RenderError> {
        self.write("\n<hr/>\n")
    }

    fn br(&mut self) -> Result<(), RenderError> {
        self.write("<br/>\n")
    }

    fn nowiki_block(&mut self, text: &str) -> Result<(), RenderError> {
        self.write("<pre>")?;
        self.write_escaped(text)?;
        self.write("</pre>\n")
    }

    fn nowiki_inline(&mut self, text: &str) -> Result<(), RenderError> {
        self.write("<span class=\"nowiki\">")?;
        self.write_escaped(text)?;
        self.write("</span>")
    }

    fn image(&mut self, src: &str, title: Option<&str>) -> Result<(), RenderError> {
        self.write("<img src=\"")?;
        self.write_escaped(src)?;
        self.write("\"")?;
        if let Some(title) = title {
            self.write(" alt=\"")?;
            self.write_escaped(title)?;
            self.write("\"")?;
        }
        self.write(" />")
    }

    fn link(&mut self, target: &str, title: Option<&str>) -> Result<(), RenderError> {
        self.write("<a href=\"")?;
        self.write_escaped(target)?;
        self.write("\">")?;
        self.write_escaped(title.unwrap_or(target))?;
        self.write("</a>")
    }

    fn placeholder(&mut self, name: &str) -> Result<(), RenderError> {
        match self.placeholders {
            PlaceholderStyle::Visible => {
                self.write("&lt;&lt;&lt;Placeholder:")?;
                self.write_escaped(name)?;
                self.write("&gt;&gt;&gt;")
            }
            PlaceholderStyle::Hidden => Ok(()),
        }
    }
}
