use wikicreole_engine::{collect_events, render_xhtml, sink::invariants};

#[test]
fn fixture_headings_and_paragraphs() {
    assert_fixture("headings_and_paragraphs");
}

#[test]
fn fixture_lists() {
    assert_fixture("lists");
}

#[test]
fn fixture_tables() {
    assert_fixture("tables");
}

#[test]
fn fixture_nowiki_and_escapes() {
    assert_fixture("nowiki_and_escapes");
}

#[test]
fn fixture_links_and_media() {
    assert_fixture("links_and_media");
}

#[test]
fn fixture_quotes_and_rules() {
    assert_fixture("quotes_and_rules");
}

fn assert_fixture(name: &str) {
    let text = std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}.creole",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap();

    invariants::check(&collect_events(&text));

    let html = render_xhtml(&text);
    insta::assert_snapshot!(name, html);
}

/// The same document rendered twice produces identical output.
#[test]
fn rendering_is_deterministic() {
    let text = "= T =\n* a\n** b\n|x|y|\n{{{\nz\n}}}";
    assert_eq!(render_xhtml(text), render_xhtml(text));
}

/// CRLF input renders exactly like LF input.
#[test]
fn crlf_matches_lf() {
    let lf = "= T =\n* a\n* b\n\n|x|y|\npara\nline";
    let crlf = lf.replace('\n', "\r\n");
    assert_eq!(render_xhtml(&crlf), render_xhtml(lf));
}
