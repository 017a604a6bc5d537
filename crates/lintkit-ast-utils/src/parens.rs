//! Parenthesis boundaries of expressions.
//!
//! Grouping parentheses produce no node, so the only way to see them is the
//! token stream: walk outwards from the node's first and last tokens while
//! they are wrapped by `(` and `)`. The `(` that belongs to the parent's own
//! grammar (`if (a)`, `f(a)`, `import(a)`) is never counted.

use crate::error::AnalysisError;
use crate::token_source::TokenSource;
use lintkit_common::Span;
use lintkit_parser::{NodeArena, NodeIndex, syntax_kind_ext};
use lintkit_scanner::Token;
use serde::Serialize;
use tracing::trace;

/// Outermost tokens of an expression, redundant parentheses included.
///
/// Either the node's own first and last tokens, or a matching `(` `)` pair
/// around them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ParenthesizedTokens {
    pub left: Token,
    pub right: Token,
}

impl ParenthesizedTokens {
    #[inline]
    pub fn range(&self) -> Span {
        Span::new(self.left.pos, self.right.end)
    }
}

/// The `(` owned by the syntax of `node`'s parent, if any.
///
/// | parent | when `node` is | paren |
/// |---|---|---|
/// | call / `new` | the only argument | first `(` after the callee |
/// | `do ... while` | the test | first `(` after the body |
/// | `if`, `while` | the test | second token of the parent |
/// | `import()` | the source | second token of the parent |
/// | `switch` | the discriminant | second token of the parent |
/// | `with` | the object | second token of the parent |
pub fn get_parent_syntax_paren<T: TokenSource + ?Sized>(
    arena: &NodeArena,
    tokens: &T,
    node: NodeIndex,
) -> Option<Token> {
    let parent = arena.get(arena.get_parent(node))?;

    match parent.kind {
        syntax_kind_ext::CALL_EXPRESSION | syntax_kind_ext::NEW_EXPRESSION => {
            let call = arena.get_call_expr(parent)?;
            if call.arguments.as_ref()?.only()? != node {
                return None;
            }
            let callee = arena.get(call.expression)?;
            tokens.token_after_matching(tokens.last_token(callee)?, Token::is_open_paren)
        }
        syntax_kind_ext::DO_STATEMENT => {
            let loop_data = arena.get_loop(parent)?;
            if loop_data.condition != node {
                return None;
            }
            let body = arena.get(loop_data.statement)?;
            tokens.token_after_matching(tokens.last_token(body)?, Token::is_open_paren)
        }
        syntax_kind_ext::IF_STATEMENT => {
            let if_data = arena.get_if_statement(parent)?;
            (if_data.expression == node).then(|| tokens.first_token_skip(parent, 1))?
        }
        syntax_kind_ext::WHILE_STATEMENT => {
            let loop_data = arena.get_loop(parent)?;
            (loop_data.condition == node).then(|| tokens.first_token_skip(parent, 1))?
        }
        syntax_kind_ext::IMPORT_EXPRESSION => {
            let import = arena.get_import_expr(parent)?;
            (import.source == node).then(|| tokens.first_token_skip(parent, 1))?
        }
        syntax_kind_ext::SWITCH_STATEMENT => {
            let switch = arena.get_switch(parent)?;
            (switch.expression == node).then(|| tokens.first_token_skip(parent, 1))?
        }
        syntax_kind_ext::WITH_STATEMENT => {
            let with = arena.get_with_statement(parent)?;
            (with.expression == node).then(|| tokens.first_token_skip(parent, 1))?
        }
        _ => None,
    }
}

/// Outermost tokens of `expr`, extended through every redundant pair of
/// parentheses around it.
///
/// `((x))` gives the outer pair; for the test of `if ((a))` only the inner
/// pair is taken, since the outer one is the `if`'s own.
pub fn get_parenthesized_tokens<T: TokenSource + ?Sized>(
    arena: &NodeArena,
    tokens: &T,
    expr: NodeIndex,
) -> Result<ParenthesizedTokens, AnalysisError> {
    let node = arena.get(expr).ok_or(AnalysisError::MissingNode(expr))?;
    let no_tokens = || AnalysisError::NoTokens {
        node: expr,
        pos: node.pos,
        end: node.end,
    };
    let mut left = tokens.first_token(node).ok_or_else(no_tokens)?;
    let mut right = tokens.last_token(node).ok_or_else(no_tokens)?;

    let syntax_paren = get_parent_syntax_paren(arena, tokens, expr);
    while let (Some(candidate_left), Some(candidate_right)) =
        (tokens.token_before(left), tokens.token_after(right))
    {
        if !candidate_left.is_open_paren()
            || !candidate_right.is_close_paren()
            || Some(candidate_left) == syntax_paren
        {
            break;
        }
        left = candidate_left;
        right = candidate_right;
    }

    trace!(?expr, start = left.pos, end = right.end, "parenthesized tokens");
    Ok(ParenthesizedTokens { left, right })
}

/// Byte range of [`get_parenthesized_tokens`].
pub fn get_parenthesized_range<T: TokenSource + ?Sized>(
    arena: &NodeArena,
    tokens: &T,
    expr: NodeIndex,
) -> Result<Span, AnalysisError> {
    get_parenthesized_tokens(arena, tokens, expr).map(|pair| pair.range())
}

/// Whether `node` is wrapped in at least one redundant pair of parentheses.
pub fn is_parenthesized<T: TokenSource + ?Sized>(
    arena: &NodeArena,
    tokens: &T,
    node: NodeIndex,
) -> bool {
    is_parenthesized_times(arena, tokens, 1, node)
}

/// Whether `node` is wrapped in at least `times` redundant pairs.
///
/// A node without a parent is never parenthesized. `times == 0` is
/// trivially true for any node that has one.
pub fn is_parenthesized_times<T: TokenSource + ?Sized>(
    arena: &NodeArena,
    tokens: &T,
    times: usize,
    node: NodeIndex,
) -> bool {
    if arena.get_parent(node).is_none() {
        return false;
    }
    let Some(header) = arena.get(node) else {
        return false;
    };
    let (Some(mut left), Some(mut right)) = (tokens.first_token(header), tokens.last_token(header))
    else {
        return false;
    };

    let syntax_paren = get_parent_syntax_paren(arena, tokens, node);
    for _ in 0..times {
        match (tokens.token_before(left), tokens.token_after(right)) {
            (Some(open), Some(close))
                if open.is_open_paren() && close.is_close_paren() && Some(open) != syntax_paren =>
            {
                left = open;
                right = close;
            }
            _ => return false,
        }
    }
    true
}
