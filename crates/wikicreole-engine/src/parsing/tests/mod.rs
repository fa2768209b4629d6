//! Event-sequence tests for the block and inline layers together.


use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::{
    parsing::{ParseOptions, blocks::ListMarker, inline::FormatKind, parse_with_options},
    sink::{Event, EventRecorder, collect_events, invariants},
};

use Event::*;

const B: ListMarker = ListMarker::Bullet;
const N: ListMarker = ListMarker::Numbered;

fn t(text: &str) -> Event {
    Text(text.to_string())
}

fn link(target: &str, title: Option<&str>) -> Event {
    Link {
        target: target.to_string(),
        title: title.map(str::to_string),
    }
}

fn paragraph(inner: Vec<Event>) -> Vec<Event> {
    let mut events = vec![ParagraphOpen];
    events.extend(inner);
    events.push(ParagraphClose);
    events
}

fn events_with(text: &str, options: ParseOptions) -> Vec<Event> {
    let mut recorder = EventRecorder::new();
    parse_with_options(text, &options, &mut recorder).unwrap();
    recorder.into_events()
}

#[rstest]
#[case::plain("hello", paragraph(vec![t("hello")]))]
#[case::raw_markup_chars("a < b & c", paragraph(vec![t("a < b & c")]))]
#[case::soft_wrap("line one\nline two", paragraph(vec![t("line one\nline two")]))]
#[case::nested_format(
    "**a //b// c**",
    paragraph(vec![
        FormatOpen(FormatKind::Strong),
        t("a "),
        FormatOpen(FormatKind::Emphasis),
        t("b"),
        FormatClose(FormatKind::Emphasis),
        t(" c"),
        FormatClose(FormatKind::Strong),
    ])
)]
#[case::unclosed_format_auto_closes(
    "**never closed",
    paragraph(vec![
        FormatOpen(FormatKind::Strong),
        t("never closed"),
        FormatClose(FormatKind::Strong),
    ])
)]
#[case::escaped_format("~**not bold~**", paragraph(vec![t("**not bold**")]))]
#[case::escaped_heading("~= not a heading", paragraph(vec![t("= not a heading")]))]
#[case::line_break("a\\\\b", paragraph(vec![t("a"), Br, t("b")]))]
#[case::link_with_title("[[Page|the page]]", paragraph(vec![link("Page", Some("the page"))]))]
#[case::link_with_empty_title("[[target|]]", paragraph(vec![link("target", None)]))]
#[case::unclosed_link("[[no close", paragraph(vec![t("[[no close")]))]
#[case::link_must_close_on_same_line(
    "[[a\nb]]",
    paragraph(vec![t("[[a\nb]]")])
)]
#[case::image(
    "{{pic.png|A pic}}",
    paragraph(vec![Image { src: "pic.png".to_string(), title: Some("A pic".to_string()) }])
)]
#[case::placeholder("<<<toc>>>", paragraph(vec![Placeholder("toc".to_string())]))]
#[case::inline_nowiki(
    "x {{{**raw**}}} y",
    paragraph(vec![t("x "), NowikiInline("**raw**".to_string()), t(" y")])
)]
#[case::nowiki_escaped_fence(
    "{{{a ~}}} b}}}",
    paragraph(vec![NowikiInline("a }}} b".to_string())])
)]
#[case::autolink(
    "see http://example.com.",
    paragraph(vec![t("see "), link("http://example.com", None), t(".")])
)]
#[case::escaped_autolink("~http://example.com", paragraph(vec![t("http://example.com")]))]
#[case::typographic_dash("a -- b", paragraph(vec![t("a \u{2013} b")]))]
#[case::crlf("a\r\nb", paragraph(vec![t("a\nb")]))]
fn inline_events(#[case] input: &str, #[case] expected: Vec<Event>) {
    let events = collect_events(input);
    invariants::check(&events);
    assert_eq!(events, expected);
}

#[rstest]
#[case::heading("== Title ==", vec![HeadingOpen(2), t("Title"), HeadingClose(2)])]
#[case::heading_without_trailer("=== Open", vec![HeadingOpen(3), t("Open"), HeadingClose(3)])]
#[case::heading_keeps_inner_equals("= a = b", vec![HeadingOpen(1), t("a = b"), HeadingClose(1)])]
#[case::heading_level_capped("======== deep", vec![HeadingOpen(6), t("deep"), HeadingClose(6)])]
#[case::rule_after_paragraph(
    "para\n\n----",
    vec![ParagraphOpen, t("para"), ParagraphClose, Hr]
)]
#[case::rule_ends_paragraph(
    "para\n----",
    vec![ParagraphOpen, t("para"), ParagraphClose, Hr]
)]
#[case::nested_list(
    "* a\n** b\n* c\n",
    vec![
        ListOpen(B), t("a"),
        ListOpen(B), t("b"), ListClose(B),
        ListNextItem(B), t("c"),
        ListClose(B),
    ]
)]
#[case::mixed_list(
    "# one\n#* sub",
    vec![ListOpen(N), t("one"), ListOpen(B), t("sub"), ListClose(B), ListClose(N)]
)]
#[case::item_continues_on_next_line(
    "* a\ncontinued",
    vec![ListOpen(B), t("a\ncontinued"), ListClose(B)]
)]
#[case::bold_line_continues_numbered_item(
    "# a\n**b**",
    vec![
        ListOpen(N), t("a\n"),
        FormatOpen(FormatKind::Strong), t("b"), FormatClose(FormatKind::Strong),
        ListClose(N),
    ]
)]
#[case::blank_item(
    "* a\n*\n*\n* b",
    vec![
        ListOpen(B), t("a"),
        ListNextItem(B), ListBlankItem(B),
        ListNextItem(B),
        ListNextItem(B), t("b"),
        ListClose(B),
    ]
)]
#[case::blank_line_closes_list(
    "* a\n\npara",
    vec![ListOpen(B), t("a"), ListClose(B), ParagraphOpen, t("para"), ParagraphClose]
)]
#[case::heading_closes_list(
    "* a\n= H",
    vec![ListOpen(B), t("a"), ListClose(B), HeadingOpen(1), t("H"), HeadingClose(1)]
)]
#[case::quote_absorbs_repeats(
    ">> deep",
    vec![ListOpen(ListMarker::Quote), t("deep"), ListClose(ListMarker::Quote)]
)]
#[case::doubled_dash_is_text("-- not a list", vec![ParagraphOpen, t("-- not a list"), ParagraphClose])]
#[case::table(
    "|=a|b|\n",
    vec![
        TableOpen, TableRowOpen,
        TableHeadCellOpen("1".to_string()), t("a"), TableHeadCellClose,
        TableCellOpen("1".to_string()), t("b"), TableCellClose,
        TableRowClose, TableClose,
    ]
)]
#[case::table_colspan_and_no_trailing_bar(
    "|||wide",
    vec![
        TableOpen, TableRowOpen,
        TableCellOpen("3".to_string()), t("wide"), TableCellClose,
        TableRowClose, TableClose,
    ]
)]
#[case::consecutive_rows_share_a_table(
    "|a|\n|b|",
    vec![
        TableOpen,
        TableRowOpen, TableCellOpen("1".to_string()), t("a"), TableCellClose, TableRowClose,
        TableRowOpen, TableCellOpen("1".to_string()), t("b"), TableCellClose, TableRowClose,
        TableClose,
    ]
)]
#[case::text_line_closes_table(
    "|a|\ntext",
    vec![
        TableOpen, TableRowOpen, TableCellOpen("1".to_string()), t("a"), TableCellClose,
        TableRowClose, TableClose,
        ParagraphOpen, t("text"), ParagraphClose,
    ]
)]
#[case::table_closes_list(
    "* a\n|b|",
    vec![
        ListOpen(B), t("a"), ListClose(B),
        TableOpen, TableRowOpen, TableCellOpen("1".to_string()), t("b"), TableCellClose,
        TableRowClose, TableClose,
    ]
)]
#[case::nowiki_block("{{{\ncode\n}}}", vec![NowikiBlock("code".to_string())])]
#[case::unterminated_nowiki_block("{{{abc", vec![NowikiBlock("abc".to_string())])]
#[case::empty_nowiki_block("{{{\n}}}", vec![])]
#[case::single_line_nowiki_is_paragraph(
    "{{{x}}} y",
    vec![ParagraphOpen, NowikiInline("x".to_string()), t(" y"), ParagraphClose]
)]
#[case::multi_line_nowiki_splits_paragraph(
    "before {{{\ncode\n}}} after",
    vec![
        ParagraphOpen, t("before "), ParagraphClose,
        NowikiBlock("code".to_string()),
        ParagraphOpen, t(" after"), ParagraphClose,
    ]
)]
#[case::blank_input("", vec![])]
#[case::whitespace_only(" \n\t\n", vec![])]
fn block_events(#[case] input: &str, #[case] expected: Vec<Event>) {
    let events = collect_events(input);
    invariants::check(&events);
    assert_eq!(events, expected);
}

#[test]
fn autolinks_can_be_disabled() {
    let options = ParseOptions {
        autolinks: false,
        ..ParseOptions::default()
    };
    assert_eq!(
        events_with("go to https://example.com", options),
        paragraph(vec![t("go to https://example.com")])
    );
}

#[test]
fn typographic_dashes_can_be_disabled() {
    let options = ParseOptions {
        typographic_dashes: false,
        ..ParseOptions::default()
    };
    assert_eq!(events_with("a -- b", options), paragraph(vec![t("a -- b")]));
}

#[test]
fn list_nesting_is_capped() {
    // One level opens per line, so line k carries the first k markers.
    let markers = "*#".repeat(100);
    let text: String = (1..=markers.len())
        .map(|k| format!("{} x\n", &markers[..k]))
        .collect();
    let events = collect_events(&text);
    invariants::check(&events);
    let opened = events.iter().filter(|e| matches!(e, ListOpen(_))).count();
    assert_eq!(opened, crate::parsing::blocks::MAX_LIST_DEPTH);
}

#[test]
fn single_column_cell_reports_colspan_one() {
    let events = collect_events("|a|\n");
    assert!(events.contains(&TableCellOpen("1".to_string())));
    invariants::check(&events);
}
