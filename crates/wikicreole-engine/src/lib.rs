pub mod parsing;
pub mod render;
pub mod sink;

pub use parsing::{
    ParseOptions,
    blocks::{Line, LineKind, ListMarker, Scanner, classify_at},
    inline::FormatKind,
    parse, parse_with_options,
};
pub use render::{
    PlaceholderStyle, RenderError, TextRenderer, XhtmlRenderer, render_text, render_xhtml,
};
pub use sink::{Event, EventRecorder, EventSink, collect_events};
