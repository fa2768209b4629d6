pub mod heading;
pub mod list;
pub mod nowiki;
pub mod rule;
pub mod table;

pub use heading::Heading;
pub use list::{ListMarker, MAX_LIST_DEPTH};
pub use nowiki::Nowiki;
pub use rule::HorizontalRule;
pub use table::TableRow;
