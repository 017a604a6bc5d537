//! JavaScript parser for the lintkit workspace.
//!
//! The parser produces a thin-node AST stored in a [`NodeArena`] together
//! with the [`TokenStream`](lintkit_scanner::TokenStream) of every token it
//! consumed. Grouping parentheses do not produce nodes: they are visible
//! only in the token stream, which is what the analyses in
//! `lintkit-ast-utils` rely on.

pub mod parser;

pub use parser::{
    Node, NodeArena, NodeIndex, NodeList, ParseDiagnostic, ParserState, node_flags,
    syntax_kind_ext,
};
