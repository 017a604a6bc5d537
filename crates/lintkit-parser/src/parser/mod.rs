//! Parser module: arena, node types and the recursive-descent parser.

pub mod base;
pub mod flags;
pub mod node;
mod node_access;
mod node_arena;
pub mod state;
mod state_expressions;
mod state_statements;
pub mod syntax_kind_ext;

pub use base::{NodeIndex, NodeList};
pub use flags::node_flags;
pub use node::*;
pub use state::{ParseDiagnostic, ParserState, diagnostic_codes};

#[cfg(test)]
#[path = "../../tests/node_arena_tests.rs"]
mod node_arena_tests;

#[cfg(test)]
#[path = "../../tests/state_expression_tests.rs"]
mod state_expression_tests;

#[cfg(test)]
#[path = "../../tests/state_statement_tests.rs"]
mod state_statement_tests;
