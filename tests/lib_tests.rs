use super::*;
use crate::tracing_config::LogFormat;

#[test]
fn test_parse_keeps_source_and_tokens() {
    let parsed = parse("a.js", "x = 'a' + b;");
    assert!(!parsed.has_errors());
    assert_eq!(parsed.file_name, "a.js");
    assert_eq!(parsed.tokens.len(), 6);
    assert_eq!(parsed.text_of(4, 7), "'a'");
}

#[test]
fn test_facade_runs_analyses() {
    let parsed = parse("a.js", "('a' + `b`);");
    let expr = parsed
        .arena
        .nodes
        .iter()
        .enumerate()
        .filter(|(_, node)| node.is_expression())
        .max_by_key(|(_, node)| node.end - node.pos)
        .map(|(i, _)| parser::NodeIndex(i as u32))
        .expect("expression");

    assert_eq!(parsed.node_text(expr), "'a' + `b`");
    assert_eq!(
        get_string_if_constant(&parsed.arena, expr).as_deref(),
        Some("ab")
    );
    let range = get_parenthesized_range(&parsed.arena, &parsed.tokens, expr).expect("range");
    assert_eq!(parsed.text_of(range.start, range.end), "('a' + `b`)");
    assert!(is_parenthesized(&parsed.arena, &parsed.tokens, expr));
}

#[test]
fn test_parse_reports_errors() {
    let parsed = parse("bad.js", "a +;");
    assert!(parsed.has_errors());
    assert_eq!(parsed.node_text(parser::NodeIndex::NONE), "");
}

#[test]
fn test_log_format_parse() {
    assert_eq!(LogFormat::parse("tree"), LogFormat::Tree);
    assert_eq!(LogFormat::parse(" JSON "), LogFormat::Json);
    assert_eq!(LogFormat::parse("text"), LogFormat::Text);
    assert_eq!(LogFormat::parse("bogus"), LogFormat::Text);
}
