//! Structural checks over a recorded event stream.
//!
//! Used by the test suites to assert that any input, however malformed,
//! produces a well-nested event sequence.

use super::Event;
use crate::parsing::{blocks::ListMarker, inline::FormatKind};

#[derive(Debug, PartialEq, Eq)]
enum Open {
    Paragraph,
    Heading(u8),
    Table,
    Row,
    HeadCell,
    Cell,
    List(ListMarker),
}

/// Panics with a description of the first structural violation in `events`.
pub fn check(events: &[Event]) {
    let mut blocks: Vec<Open> = Vec::new();
    let mut formats: Vec<FormatKind> = Vec::new();

    for (i, event) in events.iter().enumerate() {
        match event {
            Event::Text(text) => {
                assert!(!text.is_empty(), "empty text event at {i}");
            }
            Event::ParagraphOpen => {
                assert!(
                    !blocks.contains(&Open::Paragraph),
                    "nested paragraph at {i}: {blocks:?}"
                );
                blocks.push(Open::Paragraph);
            }
            Event::HeadingOpen(level) => {
                assert!((1..=6).contains(level), "heading level {level} at {i}");
                blocks.push(Open::Heading(*level));
            }
            Event::TableOpen => {
                assert!(
                    !blocks.contains(&Open::Table),
                    "nested table at {i}: {blocks:?}"
                );
                blocks.push(Open::Table);
            }
            Event::TableRowOpen => {
                assert_eq!(blocks.last(), Some(&Open::Table), "row outside table at {i}");
                blocks.push(Open::Row);
            }
            Event::TableHeadCellOpen(colspan) | Event::TableCellOpen(colspan) => {
                assert_eq!(blocks.last(), Some(&Open::Row), "cell outside row at {i}");
                assert!(
                    colspan.parse::<u8>().is_ok_and(|n| (1..=99).contains(&n)),
                    "bad colspan {colspan:?} at {i}"
                );
                blocks.push(if matches!(event, Event::TableHeadCellOpen(_)) {
                    Open::HeadCell
                } else {
                    Open::Cell
                });
            }
            Event::ListOpen(marker) => blocks.push(Open::List(*marker)),
            Event::ListNextItem(marker) | Event::ListBlankItem(marker) => {
                assert_eq!(
                    blocks.last(),
                    Some(&Open::List(*marker)),
                    "list item outside its scope at {i}"
                );
            }
            Event::ParagraphClose => close(&mut blocks, Open::Paragraph, i),
            Event::HeadingClose(level) => close(&mut blocks, Open::Heading(*level), i),
            Event::TableClose => close(&mut blocks, Open::Table, i),
            Event::TableRowClose => close(&mut blocks, Open::Row, i),
            Event::TableHeadCellClose => close(&mut blocks, Open::HeadCell, i),
            Event::TableCellClose => close(&mut blocks, Open::Cell, i),
            Event::ListClose(marker) => close(&mut blocks, Open::List(*marker), i),
            Event::FormatOpen(kind) => formats.push(*kind),
            Event::FormatClose(kind) => {
                assert_eq!(formats.pop(), Some(*kind), "unbalanced format close at {i}");
            }
            Event::Hr
            | Event::Br
            | Event::NowikiBlock(_)
            | Event::NowikiInline(_)
            | Event::Image { .. }
            | Event::Link { .. }
            | Event::Placeholder(_) => {}
        }
    }

    assert!(blocks.is_empty(), "unclosed blocks at end: {blocks:?}");
    assert!(formats.is_empty(), "unclosed formats at end: {formats:?}");
}

fn close(blocks: &mut Vec<Open>, expected: Open, i: usize) {
    let top = blocks.pop();
    assert_eq!(top.as_ref(), Some(&expected), "mismatched close at {i}");
}
