use super::*;
use crate::test_fixtures::Fixture;
use lintkit_common::Span;
use lintkit_parser::NodeIndex;
use lintkit_scanner::SyntaxKind;

/// Source text of the parenthesized range of the expression `text`.
fn parenthesized_text(source: &str, text: &str) -> String {
    let fixture = Fixture::parse(source);
    let node = fixture.find(text);
    let range = get_parenthesized_range(&fixture.arena, &fixture.tokens, node).expect("range");
    fixture.source_of(range.start, range.end).to_string()
}

fn parenthesized(source: &str, text: &str) -> bool {
    let fixture = Fixture::parse(source);
    is_parenthesized(&fixture.arena, &fixture.tokens, fixture.find(text))
}

#[test]
fn test_redundant_pairs_are_all_included() {
    let fixture = Fixture::parse("((x));");
    let node = fixture.find("x");
    let pair = get_parenthesized_tokens(&fixture.arena, &fixture.tokens, node).expect("pair");

    assert_eq!(pair.left.kind, SyntaxKind::OpenParenToken);
    assert_eq!(pair.right.kind, SyntaxKind::CloseParenToken);
    assert_eq!(pair.range(), Span::new(0, 5));
}

#[test]
fn test_unparenthesized_range_is_the_node() {
    let fixture = Fixture::parse("a + b;");
    let expr = fixture.expression();
    let pair = get_parenthesized_tokens(&fixture.arena, &fixture.tokens, expr).expect("pair");

    assert_eq!(pair.left.kind, SyntaxKind::Identifier);
    assert_eq!(pair.range(), Span::new(0, 5));
    assert!(pair.left.pos < pair.right.end);
}

#[test]
fn test_if_test_keeps_syntactic_paren() {
    assert_eq!(parenthesized_text("if ((a)) {}", "a"), "(a)");
    assert_eq!(parenthesized_text("if (a) {}", "a"), "a");
    assert!(parenthesized("if ((a)) {}", "a"));
    assert!(!parenthesized("if (a) {}", "a"));
}

#[test]
fn test_sole_call_argument_keeps_call_paren() {
    assert_eq!(parenthesized_text("f((a))", "a"), "(a)");
    assert_eq!(parenthesized_text("f(a)", "a"), "a");
    assert!(parenthesized("f((a))", "a"));
    assert!(!parenthesized("f(a)", "a"));
    assert_eq!(parenthesized_text("(f)((a))", "a"), "(a)");
    assert_eq!(parenthesized_text("new Foo((a))", "a"), "(a)");
}

#[test]
fn test_one_of_several_arguments() {
    assert_eq!(parenthesized_text("f((a), b)", "a"), "(a)");
    assert!(!parenthesized("f(a, b)", "a"));
}

#[test]
fn test_other_parent_constructs() {
    assert_eq!(parenthesized_text("do {} while ((a))", "a"), "(a)");
    assert_eq!(parenthesized_text("do x(); while (a)", "a"), "a");
    assert_eq!(parenthesized_text("while ((a)) {}", "a"), "(a)");
    assert_eq!(parenthesized_text("switch ((a)) {}", "a"), "(a)");
    assert_eq!(parenthesized_text("with ((a)) {}", "a"), "(a)");
    assert_eq!(parenthesized_text("import((a))", "a"), "(a)");
    assert_eq!(parenthesized_text("import(a)", "a"), "a");
}

#[test]
fn test_parent_syntax_paren_tokens() {
    let fixture = Fixture::parse("if (a) b;");
    let test = fixture.find("a");
    let paren = get_parent_syntax_paren(&fixture.arena, &fixture.tokens, test).expect("paren");
    assert_eq!((paren.kind, paren.pos), (SyntaxKind::OpenParenToken, 3));

    // `b` is the consequent, not the test.
    let consequent = fixture.find("b");
    assert_eq!(get_parent_syntax_paren(&fixture.arena, &fixture.tokens, consequent), None);

    let fixture = Fixture::parse("(f)(a)");
    let paren = get_parent_syntax_paren(&fixture.arena, &fixture.tokens, fixture.find("a"))
        .expect("call paren");
    assert_eq!(paren.pos, 3);

    let fixture = Fixture::parse("x = (a)");
    assert_eq!(
        get_parent_syntax_paren(&fixture.arena, &fixture.tokens, fixture.find("a")),
        None
    );
}

#[test]
fn test_parenthesized_times() {
    let fixture = Fixture::parse("((a));");
    let node = fixture.find("a");

    assert!(is_parenthesized_times(&fixture.arena, &fixture.tokens, 1, node));
    assert!(is_parenthesized_times(&fixture.arena, &fixture.tokens, 2, node));
    assert!(!is_parenthesized_times(&fixture.arena, &fixture.tokens, 3, node));

    let fixture = Fixture::parse("if (((a))) {}");
    let node = fixture.find("a");
    assert!(is_parenthesized_times(&fixture.arena, &fixture.tokens, 2, node));
    assert!(!is_parenthesized_times(&fixture.arena, &fixture.tokens, 3, node));
}

#[test]
fn test_grouped_operands_are_not_a_wrapping_pair() {
    let fixture = Fixture::parse("(a) + (b);");
    let expr = fixture.expression();
    let range = get_parenthesized_range(&fixture.arena, &fixture.tokens, expr).expect("range");

    assert_eq!(range, Span::new(0, 9));
    assert!(!is_parenthesized(&fixture.arena, &fixture.tokens, expr));
    assert!(is_parenthesized(&fixture.arena, &fixture.tokens, fixture.find("a")));
}

#[test]
fn test_node_without_parent_is_not_parenthesized() {
    let fixture = Fixture::parse("(a);");
    assert!(!is_parenthesized(&fixture.arena, &fixture.tokens, fixture.root));
    assert!(fixture.tokens.is_parenthesized(&fixture.arena, fixture.find("a")));
}

#[test]
fn test_contract_violations_are_errors() {
    let fixture = Fixture::parse("a;");

    let missing = NodeIndex(9_999);
    assert_eq!(
        get_parenthesized_tokens(&fixture.arena, &fixture.tokens, missing),
        Err(AnalysisError::MissingNode(missing))
    );

    let eof = fixture
        .arena
        .get_source_file_at(fixture.root)
        .expect("source file")
        .end_of_file_token;
    assert!(matches!(
        get_parenthesized_range(&fixture.arena, &fixture.tokens, eof),
        Err(AnalysisError::NoTokens { .. })
    ));
}
