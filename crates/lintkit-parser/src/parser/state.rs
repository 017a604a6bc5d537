//! Parser state: token cursor, diagnostics, recursion guard.
//!
//! Parsing is recursive descent over the pull-based scanner. Every token the
//! parser moves past is appended to a [`TokenStream`]; speculative
//! look-ahead truncates the stream back when it rewinds.

use super::base::{NodeIndex, NodeList};
use super::node::NodeArena;
use lintkit_common::limits::MAX_PARSER_RECURSION_DEPTH;
use lintkit_scanner::{ScannerState, SyntaxKind, Token, TokenStream};
use serde::Serialize;
use tracing::{debug, trace};

/// Diagnostic codes reported by the parser.
pub mod diagnostic_codes {
    pub const UNTERMINATED_STRING_LITERAL: u32 = 1002;
    pub const IDENTIFIER_EXPECTED: u32 = 1003;
    pub const EXPECTED: u32 = 1005;
    pub const RETURN_OUTSIDE_FUNCTION: u32 = 1108;
    pub const EXPRESSION_EXPECTED: u32 = 1109;
    pub const DECLARATION_OR_STATEMENT_EXPECTED: u32 = 1128;
    pub const ARGUMENT_EXPRESSION_EXPECTED: u32 = 1135;
    pub const PROPERTY_ASSIGNMENT_EXPECTED: u32 = 1136;
    pub const MAXIMUM_NESTING_DEPTH_EXCEEDED: u32 = 9001;
}

/// A syntax error found while parsing (or scanning).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ParseDiagnostic {
    pub start: u32,
    pub length: u32,
    pub message: String,
    pub code: u32,
}

/// Inside a function body (`return` allowed).
pub const CONTEXT_FLAG_IN_FUNCTION: u32 = 1 << 0;

pub struct ParserState {
    pub(crate) scanner: ScannerState,
    pub(crate) arena: NodeArena,
    pub(crate) file_name: String,
    pub(crate) current_token: SyntaxKind,
    /// End of the most recently consumed token.
    pub(crate) prev_token_end: u32,
    pub(crate) tokens: TokenStream,
    pub(crate) context_flags: u32,
    pub(crate) parse_diagnostics: Vec<ParseDiagnostic>,
    recursion_depth: u32,
    last_error_pos: Option<u32>,
}

/// Everything needed to rewind the parser after a look-ahead.
struct ParserSnapshot {
    scanner: lintkit_scanner::ScannerSnapshot,
    current_token: SyntaxKind,
    prev_token_end: u32,
    tokens_len: usize,
    diagnostics_len: usize,
    last_error_pos: Option<u32>,
}

impl ParserState {
    pub fn new(file_name: String, source_text: String) -> ParserState {
        let estimated_nodes = source_text.len() / 4;
        ParserState {
            scanner: ScannerState::new(source_text),
            arena: NodeArena::with_capacity(estimated_nodes),
            file_name,
            current_token: SyntaxKind::Unknown,
            prev_token_end: 0,
            tokens: TokenStream::new(),
            context_flags: 0,
            parse_diagnostics: Vec::new(),
            recursion_depth: 0,
            last_error_pos: None,
        }
    }

    // =========================================================================
    // Results
    // =========================================================================

    pub fn get_arena(&self) -> &NodeArena {
        &self.arena
    }

    pub fn into_arena(self) -> NodeArena {
        self.arena
    }

    /// Every significant token of the source, end-of-file excluded.
    pub fn get_tokens(&self) -> &TokenStream {
        &self.tokens
    }

    /// Split into arena and token stream.
    pub fn into_parts(self) -> (NodeArena, TokenStream) {
        (self.arena, self.tokens)
    }

    pub fn get_diagnostics(&self) -> &[ParseDiagnostic] {
        &self.parse_diagnostics
    }

    pub fn get_file_name(&self) -> &str {
        &self.file_name
    }

    pub fn get_source_text(&self) -> &str {
        self.scanner.source_text()
    }

    // =========================================================================
    // Token cursor
    // =========================================================================

    #[inline]
    pub(crate) fn token(&self) -> SyntaxKind {
        self.current_token
    }

    #[inline]
    pub(crate) fn is_token(&self, kind: SyntaxKind) -> bool {
        self.current_token == kind
    }

    /// Start of the current token.
    #[inline]
    pub(crate) fn token_pos(&self) -> u32 {
        self.scanner.get_token_start()
    }

    /// End of the current token.
    #[inline]
    pub(crate) fn token_end(&self) -> u32 {
        self.scanner.get_token_end()
    }

    /// End of the last consumed token: the end of the node being finished.
    #[inline]
    pub(crate) fn node_end(&self) -> u32 {
        self.prev_token_end
    }

    #[inline]
    pub(crate) fn token_value(&self) -> &str {
        self.scanner.get_token_value_ref()
    }

    #[inline]
    pub(crate) fn has_preceding_line_break(&self) -> bool {
        self.scanner.has_preceding_line_break()
    }

    /// Scan the first token without recording anything.
    pub(crate) fn start_scanning(&mut self) {
        self.current_token = self.scanner.scan();
    }

    /// Consume the current token and scan the next one.
    pub(crate) fn next_token(&mut self) -> SyntaxKind {
        if self.current_token != SyntaxKind::EndOfFileToken {
            let token = Token::new(self.current_token, self.token_pos(), self.token_end());
            trace!(kind = ?token.kind, pos = token.pos, end = token.end, "consume token");
            self.tokens.push(token);
            self.prev_token_end = token.end;
        }
        self.current_token = self.scanner.scan();
        self.current_token
    }

    /// Re-scan the current `}` as a template continuation.
    pub(crate) fn re_scan_template_token(&mut self) -> SyntaxKind {
        self.current_token = self.scanner.re_scan_template_token();
        self.current_token
    }

    /// Consume `kind` if it is the current token.
    pub(crate) fn parse_optional(&mut self, kind: SyntaxKind) -> bool {
        if self.is_token(kind) {
            self.next_token();
            true
        } else {
            false
        }
    }

    /// Consume `kind`, reporting `'x' expected.` if it is not there.
    pub(crate) fn parse_expected(&mut self, kind: SyntaxKind) -> bool {
        if self.parse_optional(kind) {
            return true;
        }
        let text = kind.text().unwrap_or("token");
        self.parse_error_at_current_token(
            &format!("'{text}' expected."),
            diagnostic_codes::EXPECTED,
        );
        false
    }

    /// Whether a statement may end here without an explicit `;`.
    pub(crate) fn can_parse_semicolon(&self) -> bool {
        matches!(
            self.current_token,
            SyntaxKind::SemicolonToken | SyntaxKind::CloseBraceToken | SyntaxKind::EndOfFileToken
        ) || self.has_preceding_line_break()
    }

    /// Consume a statement terminator, applying automatic semicolon insertion.
    pub(crate) fn parse_semicolon(&mut self) -> bool {
        if self.can_parse_semicolon() {
            self.parse_optional(SyntaxKind::SemicolonToken);
            true
        } else {
            self.parse_expected(SyntaxKind::SemicolonToken)
        }
    }

    /// Run `f` speculatively and rewind the parser afterwards.
    pub(crate) fn look_ahead<T>(&mut self, f: impl FnOnce(&mut ParserState) -> T) -> T {
        let snapshot = ParserSnapshot {
            scanner: self.scanner.save_state(),
            current_token: self.current_token,
            prev_token_end: self.prev_token_end,
            tokens_len: self.tokens.len(),
            diagnostics_len: self.parse_diagnostics.len(),
            last_error_pos: self.last_error_pos,
        };
        let result = f(self);
        self.scanner.restore_state(snapshot.scanner);
        self.current_token = snapshot.current_token;
        self.prev_token_end = snapshot.prev_token_end;
        self.tokens.truncate(snapshot.tokens_len);
        self.parse_diagnostics.truncate(snapshot.diagnostics_len);
        self.last_error_pos = snapshot.last_error_pos;
        result
    }

    pub(crate) fn make_node_list(&self, nodes: Vec<NodeIndex>, pos: u32, end: u32) -> NodeList {
        NodeList {
            nodes,
            pos,
            end,
            has_trailing_comma: false,
        }
    }

    // =========================================================================
    // Diagnostics
    // =========================================================================

    /// Record an error. Only the first error at a given position is kept.
    pub(crate) fn parse_error_at(&mut self, start: u32, length: u32, message: &str, code: u32) {
        if self.last_error_pos == Some(start) {
            return;
        }
        self.last_error_pos = Some(start);
        debug!(start, length, code, message, "parse error");
        self.parse_diagnostics.push(ParseDiagnostic {
            start,
            length,
            message: message.to_string(),
            code,
        });
    }

    pub(crate) fn parse_error_at_current_token(&mut self, message: &str, code: u32) {
        let start = self.token_pos();
        let length = self.token_end().saturating_sub(start);
        self.parse_error_at(start, length, message, code);
    }

    pub(crate) fn error_expression_expected(&mut self) {
        self.parse_error_at_current_token(
            "Expression expected.",
            diagnostic_codes::EXPRESSION_EXPECTED,
        );
    }

    pub(crate) fn error_identifier_expected(&mut self) {
        self.parse_error_at_current_token(
            "Identifier expected.",
            diagnostic_codes::IDENTIFIER_EXPECTED,
        );
    }

    /// Move scanner diagnostics into the parse diagnostics, ordered by position.
    pub(crate) fn merge_scanner_diagnostics(&mut self) {
        for diag in self.scanner.take_diagnostics() {
            self.parse_diagnostics.push(ParseDiagnostic {
                start: diag.start,
                length: diag.length,
                message: diag.message,
                code: diag.code,
            });
        }
        self.parse_diagnostics.sort_by_key(|d| d.start);
    }

    // =========================================================================
    // Recursion guard
    // =========================================================================

    /// Enter one nesting level. Returns false (after reporting) when the
    /// nesting limit is reached; the caller must not call `exit_recursion`.
    pub(crate) fn enter_recursion(&mut self) -> bool {
        if self.recursion_depth >= MAX_PARSER_RECURSION_DEPTH {
            self.parse_error_at_current_token(
                "Maximum nesting depth exceeded.",
                diagnostic_codes::MAXIMUM_NESTING_DEPTH_EXCEEDED,
            );
            return false;
        }
        self.recursion_depth += 1;
        true
    }

    pub(crate) fn exit_recursion(&mut self) {
        self.recursion_depth = self.recursion_depth.saturating_sub(1);
    }
}
