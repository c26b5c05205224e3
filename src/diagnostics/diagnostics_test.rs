use std::path::PathBuf;

use super::*;

fn at(line: usize, column: usize) -> SourceLocation {
    SourceLocation::new("schema.ion", line, column)
}

#[test]
fn display_with_and_without_location() {
    let located = Diagnostic::syntax("unexpected `)`", at(3, 7));
    assert_eq!(located.to_string(), "schema.ion:3:7: unexpected `)`");

    let bare = Diagnostic::unknown_domain("v9");
    assert_eq!(bare.to_string(), "unknown domain `v9`");
}

#[test]
fn every_kind_has_a_distinct_code() {
    let diagnostics = [
        Diagnostic::syntax("x", at(1, 1)),
        Diagnostic::malformed("x", at(1, 1)),
        Diagnostic::unknown_domain("d"),
        Diagnostic::unknown_type("t", "domain `d`"),
        Diagnostic::duplicate_type("t", "domain `d`"),
        Diagnostic::include_not_found("a.ion", Vec::new()),
        Diagnostic::circular_include(Vec::new()),
    ];
    let codes: Vec<&str> = diagnostics.iter().map(Diagnostic::code).collect();
    assert_eq!(
        codes,
        vec!["T001", "T002", "T003", "T004", "T005", "T006", "T007"]
    );
}

#[test]
fn catalog_hints_are_filled_in() {
    let diagnostic = Diagnostic::duplicate_type("point", "domain `v2`");
    assert_eq!(
        diagnostic.hints(),
        ["Exclude `point` first if you meant to replace it.".to_string()]
    );
    assert!(Diagnostic::syntax("x", at(1, 1)).hints().is_empty());
}

#[test]
fn include_messages_list_paths_in_order() {
    let missing = Diagnostic::include_not_found(
        "b.ion",
        vec![PathBuf::from("/src/b.ion"), PathBuf::from("/lib/b.ion")],
    );
    assert_eq!(
        missing.message(),
        "cannot find include file \"b.ion\" (tried: /src/b.ion, /lib/b.ion)"
    );

    let cycle = Diagnostic::circular_include(vec![
        PathBuf::from("/a.ion"),
        PathBuf::from("/b.ion"),
        PathBuf::from("/a.ion"),
    ]);
    assert_eq!(cycle.message(), "circular include: /a.ion -> /b.ion -> /a.ion");
}

#[test]
fn or_location_keeps_an_existing_location() {
    let diagnostic = Diagnostic::malformed("x", at(2, 2)).or_location(Some(&at(9, 9)));
    assert_eq!(diagnostic.location(), Some(&at(2, 2)));

    let filled = Diagnostic::unknown_domain("d").or_location(Some(&at(9, 9)));
    assert_eq!(filled.location(), Some(&at(9, 9)));
}

#[test]
fn render_without_color() {
    let diagnostic = Diagnostic::unknown_domain("base").with_location(at(2, 14));
    let source = "(define v1 (domain))\n(define v2 (permute_domain base))";
    let expected = "\
-- UNKNOWN DOMAIN -- schema.ion -- [T003]

schema.ion:2:14: unknown domain `base`

2 | (define v2 (permute_domain base))
  |              ^

Hint: Domain `base` must be defined before it is referenced.";
    assert_eq!(diagnostic.render_with_color(Some(source), false), expected);
}

#[test]
fn render_skips_the_excerpt_when_the_line_is_missing() {
    let diagnostic = Diagnostic::syntax("unterminated list", at(40, 1));
    let rendered = diagnostic.render_with_color(Some("(define"), false);
    assert!(!rendered.contains(" | "));
    assert!(rendered.contains("schema.ion:40:1: unterminated list"));
}

#[test]
fn error_source_is_the_kind() {
    use std::error::Error;

    let diagnostic = Diagnostic::unknown_type("t", "sum `s`");
    let source = diagnostic.source().map(ToString::to_string);
    assert_eq!(source.as_deref(), Some("unknown type `t` in sum `s`"));
}
