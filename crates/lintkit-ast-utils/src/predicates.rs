//! Small node predicates used by string-related rules.

use lintkit_parser::{NodeArena, NodeIndex, syntax_kind_ext};

pub fn is_string_literal(arena: &NodeArena, node: NodeIndex) -> bool {
    arena.get(node).is_some_and(|n| n.is_string_literal())
}

/// `String(...)`: a call whose callee is the bare identifier `String`.
pub fn is_string_call_expression(arena: &NodeArena, node: NodeIndex) -> bool {
    let Some(call_node) = arena.get(node) else {
        return false;
    };
    if call_node.kind != syntax_kind_ext::CALL_EXPRESSION {
        return false;
    }
    arena
        .get_call_expr(call_node)
        .and_then(|call| arena.get_identifier_text(call.expression))
        == Some("String")
}
