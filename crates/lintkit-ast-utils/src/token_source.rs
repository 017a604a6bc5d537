//! Read-only navigation over the tokens of one parse.

use crate::parens;
use lintkit_parser::{Node, NodeArena, NodeIndex};
use lintkit_scanner::{Token, TokenStream};

/// Token navigation needed by the parenthesis analyses.
///
/// Nodes are located by their `pos`/`end`, which are the start of their
/// first token and the end of their last token.
pub trait TokenSource {
    fn first_token(&self, node: &Node) -> Option<Token>;

    fn last_token(&self, node: &Node) -> Option<Token>;

    fn token_before(&self, token: Token) -> Option<Token>;

    fn token_after(&self, token: Token) -> Option<Token>;

    /// First token after `token` accepted by `filter`.
    fn token_after_matching(
        &self,
        token: Token,
        filter: impl Fn(&Token) -> bool,
    ) -> Option<Token> {
        let mut current = self.token_after(token)?;
        while !filter(&current) {
            current = self.token_after(current)?;
        }
        Some(current)
    }

    /// The node's first token, moved forward `skip` tokens.
    fn first_token_skip(&self, node: &Node, skip: usize) -> Option<Token> {
        let mut token = self.first_token(node)?;
        for _ in 0..skip {
            token = self.token_after(token)?;
        }
        Some(token)
    }

    /// Whether `node` is wrapped in at least one redundant pair of parentheses.
    fn is_parenthesized(&self, arena: &NodeArena, node: NodeIndex) -> bool {
        parens::is_parenthesized(arena, self, node)
    }
}

// Zero-width nodes (recovery placeholders) own no tokens.
impl TokenSource for TokenStream {
    fn first_token(&self, node: &Node) -> Option<Token> {
        if node.pos >= node.end {
            return None;
        }
        self.token_starting_at(node.pos)
    }

    fn last_token(&self, node: &Node) -> Option<Token> {
        if node.pos >= node.end {
            return None;
        }
        self.token_ending_at(node.end)
    }

    fn token_before(&self, token: Token) -> Option<Token> {
        self.before(token)
    }

    fn token_after(&self, token: Token) -> Option<Token> {
        self.after(token)
    }
}
