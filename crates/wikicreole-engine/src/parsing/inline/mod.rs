pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use kinds::FormatKind;
pub use parser::InlineParser;
pub use types::{InlineEnd, ItemContext};
