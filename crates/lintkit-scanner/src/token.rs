//! Recorded tokens.
//!
//! The parser records every significant token it consumes (trivia and the
//! end-of-file marker excluded) into a [`TokenStream`]. Tokens never overlap,
//! so the stream is sorted by both `pos` and `end`, and navigation is a
//! binary search.

use crate::SyntaxKind;
use lintkit_common::Span;
use serde::Serialize;

/// A lexical token: kind plus byte range `[pos, end)`.
///
/// Tokens are `Copy`, and two tokens from the same stream are the same token
/// iff they compare equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Token {
    pub kind: SyntaxKind,
    pub pos: u32,
    pub end: u32,
}

impl Token {
    #[inline]
    pub const fn new(kind: SyntaxKind, pos: u32, end: u32) -> Token {
        Token { kind, pos, end }
    }

    #[inline]
    pub const fn span(&self) -> Span {
        Span::new(self.pos, self.end)
    }

    #[inline]
    pub fn is_open_paren(&self) -> bool {
        self.kind == SyntaxKind::OpenParenToken
    }

    #[inline]
    pub fn is_close_paren(&self) -> bool {
        self.kind == SyntaxKind::CloseParenToken
    }

    /// Source text of the token.
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        self.span().slice(source)
    }
}

/// Position-ordered sequence of the tokens of one source file.
#[derive(Clone, Debug, Default, Serialize)]
pub struct TokenStream {
    tokens: Vec<Token>,
}

impl TokenStream {
    pub fn new() -> TokenStream {
        TokenStream::default()
    }

    pub fn with_capacity(capacity: usize) -> TokenStream {
        TokenStream {
            tokens: Vec::with_capacity(capacity),
        }
    }

    /// Append a token. Tokens must be pushed in source order.
    pub fn push(&mut self, token: Token) {
        debug_assert!(
            self.tokens.last().is_none_or(|last| last.end <= token.pos),
            "tokens must be recorded in source order"
        );
        self.tokens.push(token);
    }

    /// Drop every token recorded after the first `len` (speculative parsing).
    pub fn truncate(&mut self, len: usize) {
        self.tokens.truncate(len);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<Token> {
        self.tokens.get(index).copied()
    }

    /// Index of `token` in the stream, if it belongs to it.
    pub fn index_of(&self, token: Token) -> Option<usize> {
        let index = self
            .tokens
            .binary_search_by_key(&token.pos, |t| t.pos)
            .ok()?;
        (self.tokens[index] == token).then_some(index)
    }

    /// The token starting exactly at `pos`.
    pub fn token_starting_at(&self, pos: u32) -> Option<Token> {
        let index = self.tokens.binary_search_by_key(&pos, |t| t.pos).ok()?;
        self.get(index)
    }

    /// The token ending exactly at `end`.
    pub fn token_ending_at(&self, end: u32) -> Option<Token> {
        let index = self.tokens.binary_search_by_key(&end, |t| t.end).ok()?;
        self.get(index)
    }

    /// The token immediately preceding `token`.
    pub fn before(&self, token: Token) -> Option<Token> {
        let index = self.index_of(token)?;
        index.checked_sub(1).and_then(|i| self.get(i))
    }

    /// The token immediately following `token`.
    pub fn after(&self, token: Token) -> Option<Token> {
        let index = self.index_of(token)?;
        self.get(index + 1)
    }

    /// Tokens lying entirely inside `span`.
    pub fn tokens_in(&self, span: Span) -> &[Token] {
        let start = self.tokens.partition_point(|t| t.pos < span.start);
        let end = self.tokens.partition_point(|t| t.end <= span.end);
        if start >= end {
            &[]
        } else {
            &self.tokens[start..end]
        }
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
