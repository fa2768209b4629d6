pub mod autolink;
pub mod escape;
pub mod format;
pub mod line_break;
pub mod link;
pub mod placeholder;

pub use autolink::AutoLink;
pub use escape::Escape;
pub use format::FormatKind;
pub use line_break::LineBreak;
pub use link::{Image, Link, split_title};
pub use placeholder::Placeholder;
