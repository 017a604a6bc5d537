use super::*;
use lintkit_scanner::SyntaxKind;

fn parse(source: &str) -> (ParserState, NodeIndex) {
    let mut parser = ParserState::new("test.js".to_string(), source.to_string());
    let root = parser.parse_source_file();
    (parser, root)
}

/// Expression of the first statement, which must be an expression statement.
fn first_expression(parser: &ParserState, root: NodeIndex) -> NodeIndex {
    let arena = parser.get_arena();
    let source_file = arena.get_source_file_at(root).expect("source file");
    let statement = arena
        .get(source_file.statements.nodes[0])
        .expect("statement");
    arena
        .get_expression_statement(statement)
        .expect("expression statement")
        .expression
}

fn binary(arena: &NodeArena, index: NodeIndex) -> &BinaryExprData {
    let node = arena.get(index).expect("node");
    arena.get_binary_expr(node).expect("binary expression")
}

fn kind_of(arena: &NodeArena, index: NodeIndex) -> u16 {
    arena.get(index).expect("node").kind
}

fn span_of(arena: &NodeArena, index: NodeIndex) -> (u32, u32) {
    let node = arena.get(index).expect("node");
    (node.pos, node.end)
}

#[test]
fn test_multiplicative_binds_tighter_than_additive() {
    let (parser, root) = parse("a + b * c;");
    let arena = parser.get_arena();
    let expr = first_expression(&parser, root);

    let sum = binary(arena, expr);
    assert_eq!(sum.operator_token, SyntaxKind::PlusToken as u16);
    assert_eq!(arena.get_identifier_text(sum.left), Some("a"));

    let product = binary(arena, sum.right);
    assert_eq!(product.operator_token, SyntaxKind::AsteriskToken as u16);
    assert!(parser.get_diagnostics().is_empty());
}

#[test]
fn test_additive_is_left_associative() {
    let (parser, root) = parse("a - b - c");
    let arena = parser.get_arena();
    let outer = binary(arena, first_expression(&parser, root));

    assert_eq!(kind_of(arena, outer.left), syntax_kind_ext::BINARY_EXPRESSION);
    assert_eq!(arena.get_identifier_text(outer.right), Some("c"));
}

#[test]
fn test_exponent_is_right_associative() {
    let (parser, root) = parse("a ** b ** c");
    let arena = parser.get_arena();
    let outer = binary(arena, first_expression(&parser, root));

    assert_eq!(arena.get_identifier_text(outer.left), Some("a"));
    let inner = binary(arena, outer.right);
    assert_eq!(inner.operator_token, SyntaxKind::AsteriskAsteriskToken as u16);
}

#[test]
fn test_assignment_is_right_associative() {
    let (parser, root) = parse("a = b = c");
    let arena = parser.get_arena();
    let outer = binary(arena, first_expression(&parser, root));

    assert_eq!(outer.operator_token, SyntaxKind::EqualsToken as u16);
    assert_eq!(arena.get_identifier_text(outer.left), Some("a"));
    assert_eq!(binary(arena, outer.right).operator_token, SyntaxKind::EqualsToken as u16);
}

#[test]
fn test_comma_builds_binary_expression() {
    let (parser, root) = parse("a, b, c");
    let arena = parser.get_arena();
    let outer = binary(arena, first_expression(&parser, root));

    assert_eq!(outer.operator_token, SyntaxKind::CommaToken as u16);
    assert_eq!(binary(arena, outer.left).operator_token, SyntaxKind::CommaToken as u16);
}

#[test]
fn test_parentheses_produce_no_node() {
    let (parser, root) = parse("(a + b) * c");
    let arena = parser.get_arena();
    let expr = first_expression(&parser, root);
    let product = binary(arena, expr);

    assert_eq!(product.operator_token, SyntaxKind::AsteriskToken as u16);
    assert_eq!(kind_of(arena, product.left), syntax_kind_ext::BINARY_EXPRESSION);
    // The inner sum spans `a + b` only; the outer product starts at `(`.
    assert_eq!(span_of(arena, product.left), (1, 6));
    assert_eq!(span_of(arena, expr), (0, 11));
    assert_eq!(arena.get_parent(product.left), expr);
}

#[test]
fn test_parenthesized_tokens_are_recorded() {
    let (parser, _root) = parse("f((a));");
    let kinds: Vec<SyntaxKind> = parser.get_tokens().iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            SyntaxKind::Identifier,
            SyntaxKind::OpenParenToken,
            SyntaxKind::OpenParenToken,
            SyntaxKind::Identifier,
            SyntaxKind::CloseParenToken,
            SyntaxKind::CloseParenToken,
            SyntaxKind::SemicolonToken,
        ]
    );
}

#[test]
fn test_arrow_look_ahead_does_not_leak_tokens() {
    let (parser, root) = parse("(a, b)");
    let arena = parser.get_arena();
    let expr = first_expression(&parser, root);

    assert_eq!(parser.get_tokens().len(), 5);
    assert_eq!(binary(arena, expr).operator_token, SyntaxKind::CommaToken as u16);
    assert!(parser.get_diagnostics().is_empty());
}

#[test]
fn test_parenthesized_assignment_is_not_arrow() {
    let (parser, root) = parse("(a = 1)");
    let arena = parser.get_arena();
    let expr = first_expression(&parser, root);
    assert_eq!(binary(arena, expr).operator_token, SyntaxKind::EqualsToken as u16);
}

#[test]
fn test_conditional_nests_in_false_branch() {
    let (parser, root) = parse("a ? b : c ? d : e");
    let arena = parser.get_arena();
    let expr = first_expression(&parser, root);
    let node = arena.get(expr).expect("node");
    let conditional = arena.get_conditional_expr(node).expect("conditional");

    assert_eq!(arena.get_identifier_text(conditional.when_true), Some("b"));
    assert_eq!(
        kind_of(arena, conditional.when_false),
        syntax_kind_ext::CONDITIONAL_EXPRESSION
    );
}

#[test]
fn test_conditional_condition_takes_binary() {
    let (parser, root) = parse("a || b ? c : d");
    let arena = parser.get_arena();
    let expr = first_expression(&parser, root);
    let conditional = arena
        .get_conditional_expr(arena.get(expr).expect("node"))
        .expect("conditional");
    assert_eq!(binary(arena, conditional.condition).operator_token, SyntaxKind::BarBarToken as u16);
}

#[test]
fn test_prefix_and_postfix_unary() {
    let (parser, root) = parse("typeof a === 'b'");
    let arena = parser.get_arena();
    let comparison = binary(arena, first_expression(&parser, root));
    let left = arena.get(comparison.left).expect("left");
    assert_eq!(left.kind, syntax_kind_ext::PREFIX_UNARY_EXPRESSION);
    assert_eq!(
        arena.get_unary_expr(left).expect("unary").operator,
        SyntaxKind::TypeOfKeyword as u16
    );

    let (parser, root) = parse("a++");
    let arena = parser.get_arena();
    let expr = first_expression(&parser, root);
    assert_eq!(kind_of(arena, expr), syntax_kind_ext::POSTFIX_UNARY_EXPRESSION);
    assert_eq!(span_of(arena, expr), (0, 3));
}

#[test]
fn test_call_arguments_and_parents() {
    let (parser, root) = parse("f(a, ...b,)");
    let arena = parser.get_arena();
    let expr = first_expression(&parser, root);
    let call = arena.get_call_expr(arena.get(expr).expect("node")).expect("call");
    let arguments = call.arguments.as_ref().expect("arguments");

    assert_eq!(arguments.len(), 2);
    assert!(arguments.has_trailing_comma);
    assert_eq!(kind_of(arena, arguments.nodes[1]), syntax_kind_ext::SPREAD_ELEMENT);
    assert_eq!(arena.get_parent(arguments.nodes[0]), expr);
    assert_eq!(arena.get_parent(call.expression), expr);
}

#[test]
fn test_optional_chain_call_is_flagged() {
    let (parser, root) = parse("a?.b()");
    let arena = parser.get_arena();
    let expr = first_expression(&parser, root);
    let node = arena.get(expr).expect("node");

    assert_eq!(node.kind, syntax_kind_ext::CALL_EXPRESSION);
    assert_ne!(node.flags as u32 & node_flags::OPTIONAL_CHAIN, 0);

    let call = arena.get_call_expr(node).expect("call");
    let access = arena
        .get_access_expr(arena.get(call.expression).expect("callee"))
        .expect("access");
    assert!(access.question_dot_token);
}

#[test]
fn test_new_expression_forms() {
    let (parser, root) = parse("new Foo");
    let arena = parser.get_arena();
    let expr = first_expression(&parser, root);
    let new_expr = arena.get_call_expr(arena.get(expr).expect("node")).expect("new");
    assert_eq!(kind_of(arena, expr), syntax_kind_ext::NEW_EXPRESSION);
    assert!(new_expr.arguments.is_none());

    let (parser, root) = parse("new a.b(c)");
    let arena = parser.get_arena();
    let expr = first_expression(&parser, root);
    let new_expr = arena.get_call_expr(arena.get(expr).expect("node")).expect("new");
    assert_eq!(
        kind_of(arena, new_expr.expression),
        syntax_kind_ext::PROPERTY_ACCESS_EXPRESSION
    );
    assert_eq!(new_expr.arguments.as_ref().map(NodeList::len), Some(1));
}

#[test]
fn test_member_access_with_keyword_name() {
    let (parser, root) = parse("a.default[0]");
    let arena = parser.get_arena();
    let expr = first_expression(&parser, root);
    let element = arena.get_access_expr(arena.get(expr).expect("node")).expect("element");
    assert_eq!(kind_of(arena, expr), syntax_kind_ext::ELEMENT_ACCESS_EXPRESSION);

    let property = arena
        .get_access_expr(arena.get(element.expression).expect("object"))
        .expect("property");
    assert_eq!(arena.get_identifier_text(property.name_or_argument), Some("default"));
}

#[test]
fn test_template_expression() {
    let (parser, root) = parse("`a${b}c${d}e`");
    let arena = parser.get_arena();
    let expr = first_expression(&parser, root);
    let template = arena
        .get_template_expr(arena.get(expr).expect("node"))
        .expect("template");

    assert_eq!(arena.get_literal_text(template.head), Some("a"));
    assert_eq!(template.template_spans.len(), 2);

    let last_span = arena
        .get_template_span(arena.get(template.template_spans.nodes[1]).expect("span"))
        .expect("span data");
    assert_eq!(kind_of(arena, last_span.literal), SyntaxKind::TemplateTail as u16);
    assert_eq!(arena.get_literal_text(last_span.literal), Some("e"));

    let kinds: Vec<SyntaxKind> = parser.get_tokens().iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            SyntaxKind::TemplateHead,
            SyntaxKind::Identifier,
            SyntaxKind::TemplateMiddle,
            SyntaxKind::Identifier,
            SyntaxKind::TemplateTail,
        ]
    );
    assert_eq!(span_of(arena, expr), (0, 13));
}

#[test]
fn test_unclosed_template_substitution_gets_missing_tail() {
    let (parser, root) = parse("`a${b");
    let arena = parser.get_arena();
    let expr = first_expression(&parser, root);
    let template = arena
        .get_template_expr(arena.get(expr).expect("node"))
        .expect("template");
    let span = arena
        .get_template_span(arena.get(template.template_spans.nodes[0]).expect("span"))
        .expect("span data");
    let tail = arena.get(span.literal).expect("tail");

    assert_eq!(tail.kind, SyntaxKind::TemplateTail as u16);
    assert_ne!(tail.flags as u32 & node_flags::MISSING, 0);
    assert!(!parser.get_diagnostics().is_empty());
}

#[test]
fn test_arrow_functions() {
    let (parser, root) = parse("(a, b = 1) => a + b");
    let arena = parser.get_arena();
    let expr = first_expression(&parser, root);
    let arrow = arena.get_function(arena.get(expr).expect("node")).expect("arrow");

    assert_eq!(kind_of(arena, expr), syntax_kind_ext::ARROW_FUNCTION);
    assert_eq!(arrow.parameters.len(), 2);
    let second = arena
        .get_parameter(arena.get(arrow.parameters.nodes[1]).expect("param"))
        .expect("param data");
    assert!(second.initializer.is_some());
    assert_eq!(kind_of(arena, arrow.body), syntax_kind_ext::BINARY_EXPRESSION);

    let (parser, root) = parse("x => { return x; }");
    let arena = parser.get_arena();
    let expr = first_expression(&parser, root);
    let arrow = arena.get_function(arena.get(expr).expect("node")).expect("arrow");
    assert_eq!(arrow.parameters.len(), 1);
    assert_eq!(kind_of(arena, arrow.body), syntax_kind_ext::BLOCK);
    assert!(parser.get_diagnostics().is_empty());
}

#[test]
fn test_import_expression() {
    let (parser, root) = parse("import('./m', { with: {} }).then(f)");
    let arena = parser.get_arena();
    let expr = first_expression(&parser, root);
    let call = arena.get_call_expr(arena.get(expr).expect("node")).expect("call");
    let access = arena
        .get_access_expr(arena.get(call.expression).expect("callee"))
        .expect("access");
    let import = arena
        .get_import_expr(arena.get(access.expression).expect("import"))
        .expect("import data");

    assert_eq!(arena.get_literal_text(import.source), Some("./m"));
    assert_eq!(
        kind_of(arena, import.options),
        syntax_kind_ext::OBJECT_LITERAL_EXPRESSION
    );
    assert!(parser.get_diagnostics().is_empty());
}

#[test]
fn test_numeric_literal_values() {
    for (source, expected) in [("0x1F", 31.0), ("1_000", 1000.0), ("0b101", 5.0), (".5", 0.5)] {
        let (parser, root) = parse(source);
        let arena = parser.get_arena();
        let expr = first_expression(&parser, root);
        let literal = arena.get_literal(arena.get(expr).expect("node")).expect("literal");
        assert_eq!(literal.value, Some(expected), "{source}");
    }
}

#[test]
fn test_object_literal_members() {
    let (parser, root) = parse("({ a: 1, b, ...c, if: 2, 'd': 3 })");
    let arena = parser.get_arena();
    let expr = first_expression(&parser, root);
    let object = arena
        .get_literal_expr(arena.get(expr).expect("node"))
        .expect("object");
    let kinds: Vec<u16> = object
        .elements
        .nodes
        .iter()
        .map(|&e| kind_of(arena, e))
        .collect();

    assert_eq!(
        kinds,
        vec![
            syntax_kind_ext::PROPERTY_ASSIGNMENT,
            syntax_kind_ext::SHORTHAND_PROPERTY_ASSIGNMENT,
            syntax_kind_ext::SPREAD_ELEMENT,
            syntax_kind_ext::PROPERTY_ASSIGNMENT,
            syntax_kind_ext::PROPERTY_ASSIGNMENT,
        ]
    );
    assert!(parser.get_diagnostics().is_empty());
}

#[test]
fn test_array_literal_holes() {
    let (parser, root) = parse("[a, , b]");
    let arena = parser.get_arena();
    let expr = first_expression(&parser, root);
    let array = arena
        .get_literal_expr(arena.get(expr).expect("node"))
        .expect("array");

    assert_eq!(array.elements.len(), 3);
    assert!(array.elements.nodes[1].is_none());
}

#[test]
fn test_missing_operand_reports_expression_expected() {
    let (parser, _root) = parse("a +;");
    let diagnostics = parser.get_diagnostics();

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code, diagnostic_codes::EXPRESSION_EXPECTED);
    assert_eq!(diagnostics[0].start, 3);
}

#[test]
fn test_missing_close_paren_in_arguments() {
    let (parser, _root) = parse("f(a b)");
    let first = &parser.get_diagnostics()[0];

    assert_eq!(first.code, diagnostic_codes::EXPECTED);
    assert_eq!(first.message, "')' expected.");
    assert_eq!(first.start, 4);
}

#[test]
fn test_deep_nesting_reports_instead_of_overflowing() {
    let handle = std::thread::Builder::new()
        .stack_size(256 * 1024 * 1024)
        .spawn(|| {
            let source = format!("{}a{}", "(".repeat(1500), ")".repeat(1500));
            let (parser, _root) = parse(&source);
            parser
                .get_diagnostics()
                .iter()
                .any(|d| d.code == diagnostic_codes::MAXIMUM_NESTING_DEPTH_EXCEEDED)
        })
        .expect("spawn");
    assert!(handle.join().expect("join"));
}
