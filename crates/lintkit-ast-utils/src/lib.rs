//! Expression analyses for lint rules and fixers.
//!
//! Everything here is a read-only query over one parse: a [`NodeArena`]
//! plus a [`TokenSource`] over the same source text.
//!
//! - [`resolve_static_value`] / [`get_string_if_constant`]: is this
//!   expression a compile-time-known string?
//! - [`extract_concat_expressions`]: flatten a `+` chain into its operands.
//! - [`get_parenthesized_tokens`] / [`get_parenthesized_range`]: the full
//!   extent of an expression including redundant wrapping parentheses.
//! - [`get_parent_syntax_paren`]: the `(` that belongs to the enclosing
//!   construct (`if (a)`, `f(a)`, ...) and must never be removed.
//! - [`need_parentheses`]: does a replacement expression need wrapping?
//!
//! [`NodeArena`]: lintkit_parser::NodeArena

pub mod concat;
pub mod error;
pub mod needs_parens;
pub mod parens;
pub mod predicates;
pub mod static_value;
pub mod token_source;

pub use concat::{ConcatOperands, extract_concat_expressions};
pub use error::AnalysisError;
pub use needs_parens::{CompositionContext, ExpressionKind, need_parentheses, need_parentheses_for};
pub use parens::{
    ParenthesizedTokens, get_parent_syntax_paren, get_parenthesized_range,
    get_parenthesized_tokens, is_parenthesized, is_parenthesized_times,
};
pub use predicates::{is_string_call_expression, is_string_literal};
pub use static_value::{StaticValue, get_string_if_constant, resolve_static_value};
pub use token_source::TokenSource;

#[cfg(test)]
mod test_fixtures;

#[cfg(test)]
#[path = "../tests/static_value_tests.rs"]
mod static_value_tests;

#[cfg(test)]
#[path = "../tests/concat_tests.rs"]
mod concat_tests;

#[cfg(test)]
#[path = "../tests/parens_tests.rs"]
mod parens_tests;

#[cfg(test)]
#[path = "../tests/needs_parens_tests.rs"]
mod needs_parens_tests;

#[cfg(test)]
#[path = "../tests/predicates_tests.rs"]
mod predicates_tests;

#[cfg(test)]
#[path = "../tests/token_source_tests.rs"]
mod token_source_tests;
