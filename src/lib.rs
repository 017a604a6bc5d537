//! lintkit: static string and parenthesis analysis for JavaScript lint
//! fixers.
//!
//! This crate re-exports the workspace pipeline:
//!
//! - [`scanner`]: tokens and the recorded [`TokenStream`](scanner::TokenStream)
//! - [`parser`]: thin-node AST in a [`NodeArena`](parser::NodeArena)
//! - [`ast_utils`]: the expression analyses built on both
//!
//! and owns the process-wide [`tracing_config`].

pub use lintkit_ast_utils as ast_utils;
pub use lintkit_common as common;
pub use lintkit_parser as parser;
pub use lintkit_scanner as scanner;

pub use lintkit_ast_utils::{
    AnalysisError, CompositionContext, ExpressionKind, StaticValue, TokenSource,
    extract_concat_expressions, get_parent_syntax_paren, get_parenthesized_range,
    get_parenthesized_tokens, get_string_if_constant, is_parenthesized, is_parenthesized_times,
    need_parentheses, resolve_static_value,
};

pub mod tracing_config;

/// One parsed source text: the inputs every analysis needs.
pub struct ParsedSource {
    pub file_name: String,
    pub source_text: String,
    pub arena: parser::NodeArena,
    pub tokens: scanner::TokenStream,
    pub root: parser::NodeIndex,
    pub diagnostics: Vec<parser::ParseDiagnostic>,
}

/// Parse `source_text` and keep everything the analyses read.
pub fn parse(file_name: impl Into<String>, source_text: impl Into<String>) -> ParsedSource {
    let file_name = file_name.into();
    let source_text = source_text.into();
    let _span = tracing::debug_span!("parse", file = %file_name, bytes = source_text.len()).entered();
    let mut state = parser::ParserState::new(file_name.clone(), source_text.clone());
    let root = state.parse_source_file();
    let diagnostics = state.get_diagnostics().to_vec();
    let (arena, tokens) = state.into_parts();
    ParsedSource {
        file_name,
        source_text,
        arena,
        tokens,
        root,
        diagnostics,
    }
}

impl ParsedSource {
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Source text of `[start, end)`, empty when out of range.
    pub fn text_of(&self, start: u32, end: u32) -> &str {
        self.source_text
            .get(start as usize..end as usize)
            .unwrap_or_default()
    }

    /// Source text of a node.
    pub fn node_text(&self, index: parser::NodeIndex) -> &str {
        match self.arena.get(index) {
            Some(node) => self.text_of(node.pos, node.end),
            None => "",
        }
    }
}

#[cfg(test)]
#[path = "../tests/lib_tests.rs"]
mod lib_tests;
