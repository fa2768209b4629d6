pub mod builder;
pub mod classify;
pub mod containers;
pub mod kinds;

pub use builder::BlockParser;
pub use classify::{Line, LineKind, Scanner, classify_at};
pub use containers::ContainerPath;
pub use kinds::{Heading, HorizontalRule, ListMarker, MAX_LIST_DEPTH, Nowiki, TableRow};
