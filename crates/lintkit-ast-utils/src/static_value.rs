//! Compile-time string resolution.
//!
//! Only syntactic constants are resolved: string literals, templates whose
//! substitutions are themselves constant, and `+` concatenations of those.
//! Identifiers, numbers and calls are never evaluated.

use lintkit_common::limits::MAX_STATIC_VALUE_DEPTH;
use lintkit_parser::{NodeArena, NodeIndex, syntax_kind_ext};
use lintkit_scanner::SyntaxKind;
use serde::Serialize;
use tracing::debug;

/// Result of resolving an expression to a string.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum StaticValue {
    /// Cannot be determined without executing the program.
    #[default]
    Unknown,
    Known(String),
}

impl StaticValue {
    #[inline]
    pub fn is_known(&self) -> bool {
        matches!(self, StaticValue::Known(_))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            StaticValue::Known(value) => Some(value),
            StaticValue::Unknown => None,
        }
    }

    pub fn into_option(self) -> Option<String> {
        match self {
            StaticValue::Known(value) => Some(value),
            StaticValue::Unknown => None,
        }
    }

    /// String concatenation; unknown if either side is.
    pub fn concat(self, other: StaticValue) -> StaticValue {
        match (self, other) {
            (StaticValue::Known(mut left), StaticValue::Known(right)) => {
                left.push_str(&right);
                StaticValue::Known(left)
            }
            _ => StaticValue::Unknown,
        }
    }
}

impl From<Option<String>> for StaticValue {
    fn from(value: Option<String>) -> StaticValue {
        value.map_or(StaticValue::Unknown, StaticValue::Known)
    }
}

/// Resolve `expr` to a known string, if it is a syntactic constant.
pub fn resolve_static_value(arena: &NodeArena, expr: NodeIndex) -> StaticValue {
    resolve(arena, expr, 0)
}

/// `Option` form of [`resolve_static_value`].
pub fn get_string_if_constant(arena: &NodeArena, expr: NodeIndex) -> Option<String> {
    resolve_static_value(arena, expr).into_option()
}

/// `(left, right)` of a binary `+`.
pub(crate) fn plus_operands(arena: &NodeArena, index: NodeIndex) -> Option<(NodeIndex, NodeIndex)> {
    let node = arena.get(index)?;
    let binary = arena.get_binary_expr(node)?;
    (binary.operator_token == SyntaxKind::PlusToken as u16).then_some((binary.left, binary.right))
}

fn resolve(arena: &NodeArena, expr: NodeIndex, depth: u32) -> StaticValue {
    if depth > MAX_STATIC_VALUE_DEPTH {
        debug!(?expr, depth, "static value depth limit reached");
        return StaticValue::Unknown;
    }

    // The left spine of `a + b + c + ...` is walked without recursion.
    let mut right_operands = Vec::new();
    let mut current = expr;
    while let Some((left, right)) = plus_operands(arena, current) {
        right_operands.push(right);
        current = left;
    }

    let mut value = resolve_operand(arena, current, depth);
    for right in right_operands.into_iter().rev() {
        if !value.is_known() {
            return StaticValue::Unknown;
        }
        value = value.concat(resolve(arena, right, depth + 1));
    }
    value
}

/// Anything but a `+` expression.
fn resolve_operand(arena: &NodeArena, index: NodeIndex, depth: u32) -> StaticValue {
    let Some(node) = arena.get(index) else {
        return StaticValue::Unknown;
    };

    if node.kind == SyntaxKind::StringLiteral as u16
        || node.kind == SyntaxKind::NoSubstitutionTemplateLiteral as u16
    {
        return arena
            .get_literal(node)
            .map_or(StaticValue::Unknown, |lit| StaticValue::Known(lit.text.clone()));
    }

    if node.kind != syntax_kind_ext::TEMPLATE_EXPRESSION {
        return StaticValue::Unknown;
    }
    let Some(template) = arena.get_template_expr(node) else {
        return StaticValue::Unknown;
    };

    // head, then (substitution, literal) per span
    let mut value = match arena.get_literal_text(template.head) {
        Some(text) => text.to_string(),
        None => return StaticValue::Unknown,
    };
    for &span_index in &template.template_spans.nodes {
        let Some(span) = arena.get(span_index).and_then(|n| arena.get_template_span(n)) else {
            return StaticValue::Unknown;
        };
        match resolve(arena, span.expression, depth + 1) {
            StaticValue::Known(text) => value.push_str(&text),
            StaticValue::Unknown => return StaticValue::Unknown,
        }
        match arena.get_literal_text(span.literal) {
            Some(text) => value.push_str(text),
            None => return StaticValue::Unknown,
        }
    }
    StaticValue::Known(value)
}
