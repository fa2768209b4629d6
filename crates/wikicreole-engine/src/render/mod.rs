//! Reference sinks that serialise events as XHTML or plain text.

mod text;
mod xhtml;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use text::TextRenderer;
pub use xhtml::{Escaper, XhtmlRenderer, escape_html};

use crate::parsing::parse;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to write rendered output")]
    Io(#[from] std::io::Error),
}

/// How unresolved `<<<placeholder>>>` references appear in XHTML output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaceholderStyle {
    /// `&lt;&lt;&lt;Placeholder:name&gt;&gt;&gt;`
    #[default]
    Visible,
    /// Dropped from the output.
    Hidden,
}

/// Renders `text` to an XHTML fragment with default options.
pub fn render_xhtml(text: &str) -> String {
    let mut renderer = XhtmlRenderer::new(Vec::new());
    let result = parse(text, &mut renderer);
    into_string(result, renderer.into_inner())
}

/// Renders `text` as plain text with default options.
pub fn render_text(text: &str) -> String {
    let mut renderer = TextRenderer::new(Vec::new());
    let result = parse(text, &mut renderer);
    into_string(result, renderer.into_inner())
}

fn into_string(result: Result<(), RenderError>, out: Vec<u8>) -> String {
    match result {
        Ok(()) => {}
        Err(RenderError::Io(err)) => {
            log::warn!("in-memory render stopped early: {err}");
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}
