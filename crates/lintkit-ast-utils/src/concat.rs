//! Flattening of `+` concatenation chains.

use crate::parens::is_parenthesized;
use crate::static_value::plus_operands;
use crate::token_source::TokenSource;
use lintkit_parser::{NodeArena, NodeIndex};
use lintkit_scanner::SyntaxKind;
use smallvec::SmallVec;

/// Operands of a concatenation chain, in evaluation order.
pub type ConcatOperands = SmallVec<[NodeIndex; 4]>;

/// Split `a + b + c` into `[a, b, c]`.
///
/// Only the left operand is followed, and only while it is an unparenthesized
/// binary expression. A left operand that binds tighter than `+`
/// (`a * b + c`) or is parenthesized (`(a + b) + c`) is a single operand;
/// the right operand always is (`a + (b + c)` gives `[a, b + c]`).
///
/// Returns `None` when `expr` is not a `+` expression, or when its left
/// spine contains another additive-level operator (`a - b + c`), since the
/// chain is then not a pure concatenation.
pub fn extract_concat_expressions<T: TokenSource + ?Sized>(
    arena: &NodeArena,
    tokens: &T,
    expr: NodeIndex,
) -> Option<ConcatOperands> {
    let (mut left, right) = plus_operands(arena, expr)?;

    // Collected right to left, reversed at the end.
    let mut operands = ConcatOperands::new();
    operands.push(right);

    while let Some(binary) = arena.get(left).and_then(|node| arena.get_binary_expr(node)) {
        let binds_tighter = SyntaxKind::try_from_u16(binary.operator_token)
            .is_some_and(SyntaxKind::is_multiplicative_or_exponent_operator);
        if binds_tighter || is_parenthesized(arena, tokens, left) {
            break;
        }
        if binary.operator_token != SyntaxKind::PlusToken as u16 {
            return None;
        }
        operands.push(binary.right);
        left = binary.left;
    }

    operands.push(left);
    operands.reverse();
    Some(operands)
}
