use super::*;
use lintkit_scanner::SyntaxKind;

fn parse(source: &str) -> (ParserState, NodeIndex) {
    let mut parser = ParserState::new("test.js".to_string(), source.to_string());
    let root = parser.parse_source_file();
    (parser, root)
}

fn statements(parser: &ParserState, root: NodeIndex) -> Vec<NodeIndex> {
    parser
        .get_arena()
        .get_source_file_at(root)
        .expect("source file")
        .statements
        .nodes
        .clone()
}

fn kinds(arena: &NodeArena, nodes: &[NodeIndex]) -> Vec<u16> {
    nodes
        .iter()
        .map(|&n| arena.get(n).expect("node").kind)
        .collect()
}

#[test]
fn test_source_file_spans_whole_text() {
    let source = "a;\n// trailing\n";
    let (parser, root) = parse(source);
    let arena = parser.get_arena();
    let node = arena.get(root).expect("root");

    assert_eq!(node.kind, syntax_kind_ext::SOURCE_FILE);
    assert_eq!((node.pos, node.end), (0, source.len() as u32));
    let source_file = arena.get_source_file(node).expect("data");
    assert_eq!(source_file.file_name, "test.js");
    assert_eq!(
        arena.get(source_file.end_of_file_token).expect("eof").kind,
        SyntaxKind::EndOfFileToken as u16
    );
    // The end-of-file marker is not part of the token stream.
    assert_eq!(parser.get_tokens().len(), 2);
}

#[test]
fn test_statement_kinds() {
    let (parser, root) = parse(
        "var a = 1; let b; const c = 2;\n;\n{ a; }\nfunction f(x) { return x; }\nthrow a;",
    );
    let arena = parser.get_arena();

    assert_eq!(
        kinds(arena, &statements(&parser, root)),
        vec![
            syntax_kind_ext::VARIABLE_STATEMENT,
            syntax_kind_ext::VARIABLE_STATEMENT,
            syntax_kind_ext::VARIABLE_STATEMENT,
            syntax_kind_ext::EMPTY_STATEMENT,
            syntax_kind_ext::BLOCK,
            syntax_kind_ext::FUNCTION_DECLARATION,
            syntax_kind_ext::THROW_STATEMENT,
        ]
    );
    assert!(parser.get_diagnostics().is_empty());
}

#[test]
fn test_variable_statement_flags_and_declarations() {
    let (parser, root) = parse("const a = 1, b;");
    let arena = parser.get_arena();
    let statement = arena.get(statements(&parser, root)[0]).expect("statement");

    assert_eq!(statement.flags as u32 & node_flags::CONST, node_flags::CONST);
    assert_eq!((statement.pos, statement.end), (0, 15));

    let variable = arena.get_variable(statement).expect("variable");
    assert_eq!(variable.declarations.len(), 2);
    let second = arena
        .get_variable_declaration(arena.get(variable.declarations.nodes[1]).expect("decl"))
        .expect("decl data");
    assert_eq!(arena.get_identifier_text(second.name), Some("b"));
    assert!(second.initializer.is_none());
}

#[test]
fn test_if_else_children_in_source_order() {
    let (parser, root) = parse("if (a) b; else c;");
    let arena = parser.get_arena();
    let statement = statements(&parser, root)[0];
    let if_data = arena
        .get_if_statement(arena.get(statement).expect("if"))
        .expect("if data");

    assert_eq!(arena.get_identifier_text(if_data.expression), Some("a"));
    assert_eq!(arena.get_parent(if_data.expression), statement);
    assert_eq!(
        arena.get_children(statement),
        vec![if_data.expression, if_data.then_statement, if_data.else_statement]
    );
}

#[test]
fn test_do_while_children_put_body_first() {
    let (parser, root) = parse("do x(); while (y)");
    let arena = parser.get_arena();
    let statement = statements(&parser, root)[0];
    let loop_data = arena
        .get_loop(arena.get(statement).expect("do"))
        .expect("loop data");

    assert_eq!(arena.get_identifier_text(loop_data.condition), Some("y"));
    assert_eq!(
        arena.get_children(statement),
        vec![loop_data.statement, loop_data.condition]
    );
    assert!(parser.get_diagnostics().is_empty());
}

#[test]
fn test_switch_clauses() {
    let (parser, root) = parse("switch (k) { case 1: a(); break; default: b(); case 2: }");
    let arena = parser.get_arena();
    let statement = arena.get(statements(&parser, root)[0]).expect("switch");
    let switch = arena.get_switch(statement).expect("switch data");

    assert_eq!(arena.get_identifier_text(switch.expression), Some("k"));
    assert_eq!(
        kinds(arena, &switch.clauses.nodes),
        vec![
            syntax_kind_ext::CASE_CLAUSE,
            syntax_kind_ext::DEFAULT_CLAUSE,
            syntax_kind_ext::CASE_CLAUSE,
        ]
    );
    let first = arena
        .get_case_clause(arena.get(switch.clauses.nodes[0]).expect("clause"))
        .expect("clause data");
    assert_eq!(first.statements.len(), 2);
    assert!(parser.get_diagnostics().is_empty());
}

#[test]
fn test_with_and_while() {
    let (parser, root) = parse("with (o) p; while (q) { break; }");
    let arena = parser.get_arena();
    let nodes = statements(&parser, root);

    let with = arena
        .get_with_statement(arena.get(nodes[0]).expect("with"))
        .expect("with data");
    assert_eq!(arena.get_identifier_text(with.expression), Some("o"));

    let while_data = arena.get_loop(arena.get(nodes[1]).expect("while")).expect("loop");
    assert_eq!(arena.get_identifier_text(while_data.condition), Some("q"));
}

#[test]
fn test_break_label_requires_same_line() {
    let (parser, root) = parse("break foo;\ncontinue\nbar");
    let arena = parser.get_arena();
    let nodes = statements(&parser, root);

    let labeled = arena.get_jump_data(arena.get(nodes[0]).expect("break")).expect("jump");
    assert_eq!(arena.get_identifier_text(labeled.label), Some("foo"));

    let bare = arena
        .get_jump_data(arena.get(nodes[1]).expect("continue"))
        .expect("jump");
    assert!(bare.label.is_none());
    assert_eq!(nodes.len(), 3);
}

#[test]
fn test_automatic_semicolon_insertion() {
    let (parser, root) = parse("a\n++b");
    let arena = parser.get_arena();
    let nodes = statements(&parser, root);

    assert_eq!(nodes.len(), 2);
    let second = arena
        .get_expression_statement(arena.get(nodes[1]).expect("statement"))
        .expect("expression statement");
    assert_eq!(
        arena.get(second.expression).expect("expr").kind,
        syntax_kind_ext::PREFIX_UNARY_EXPRESSION
    );
    assert!(parser.get_diagnostics().is_empty());
}

#[test]
fn test_return_outside_function_is_reported() {
    let (parser, _root) = parse("return 1;");
    let diagnostics = parser.get_diagnostics();

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code, diagnostic_codes::RETURN_OUTSIDE_FUNCTION);
    assert_eq!(diagnostics[0].start, 0);
}

#[test]
fn test_return_inside_function_expression() {
    let (parser, _root) = parse("var f = function () { return; };");
    assert!(parser.get_diagnostics().is_empty());
}

#[test]
fn test_stray_token_is_skipped() {
    let (parser, root) = parse(") a;");
    let diagnostics = parser.get_diagnostics();

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics[0].code,
        diagnostic_codes::DECLARATION_OR_STATEMENT_EXPECTED
    );
    assert_eq!(statements(&parser, root).len(), 1);
}

#[test]
fn test_scanner_diagnostics_are_merged() {
    let (parser, _root) = parse("x = 'abc");
    assert!(
        parser
            .get_diagnostics()
            .iter()
            .any(|d| d.code == diagnostic_codes::UNTERMINATED_STRING_LITERAL)
    );
}
