use super::*;
use crate::test_fixtures::Fixture;

/// Source text of each operand, or `None` when not applicable.
fn operands(source: &str) -> Option<Vec<String>> {
    let fixture = Fixture::parse(source);
    extract_concat_expressions(&fixture.arena, &fixture.tokens, fixture.expression()).map(
        |operands| {
            operands
                .iter()
                .map(|&operand| fixture.text(operand).to_string())
                .collect()
        },
    )
}

fn texts(expected: &[&str]) -> Option<Vec<String>> {
    Some(expected.iter().map(|s| s.to_string()).collect())
}

#[test]
fn test_flat_chain() {
    assert_eq!(operands("a + b + c"), texts(&["a", "b", "c"]));
    assert_eq!(operands("a + b"), texts(&["a", "b"]));
}

#[test]
fn test_right_operand_is_a_leaf() {
    assert_eq!(operands("a + (b + c)"), texts(&["a", "b + c"]));
}

#[test]
fn test_parenthesized_left_is_a_leaf() {
    assert_eq!(operands("(a + b) + c"), texts(&["a + b", "c"]));
}

#[test]
fn test_tighter_binding_left_is_a_leaf() {
    assert_eq!(operands("a * b + c"), texts(&["a * b", "c"]));
    assert_eq!(operands("a / b + c"), texts(&["a / b", "c"]));
    assert_eq!(operands("a % b + c"), texts(&["a % b", "c"]));
    assert_eq!(operands("a ** b + c"), texts(&["a ** b", "c"]));
    assert_eq!(operands("x + a * b + c"), texts(&["x", "a * b", "c"]));
}

#[test]
fn test_not_applicable() {
    assert_eq!(operands("a - b"), None);
    assert_eq!(operands("a - b + c"), None);
    assert_eq!(operands("f(a)"), None);
    assert_eq!(operands("'a'"), None);
}

#[test]
fn test_operands_of_partly_constant_chain() {
    let fixture = Fixture::parse("'a' + 'b' + c");
    let expr = fixture.expression();

    let parts = extract_concat_expressions(&fixture.arena, &fixture.tokens, expr).expect("chain");
    let parts: Vec<&str> = parts.iter().map(|&p| fixture.text(p)).collect();
    assert_eq!(parts, vec!["'a'", "'b'", "c"]);
    assert_eq!(resolve_static_value(&fixture.arena, expr), StaticValue::Unknown);
}

#[test]
fn test_long_chain() {
    let source = (0..2_000)
        .map(|i| format!("v{i}"))
        .collect::<Vec<_>>()
        .join(" + ");
    let fixture = Fixture::parse(&source);
    let parts = extract_concat_expressions(&fixture.arena, &fixture.tokens, fixture.expression())
        .expect("chain");

    assert_eq!(parts.len(), 2_000);
    assert_eq!(fixture.text(parts[0]), "v0");
    assert_eq!(fixture.text(parts[1_999]), "v1999");
}
