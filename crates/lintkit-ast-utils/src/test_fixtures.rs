//! Shared parse helpers for the unit tests.

use lintkit_parser::{NodeArena, NodeIndex, ParseDiagnostic, ParserState};
use lintkit_scanner::TokenStream;

/// Common test file name
pub(crate) const TEST_FILE_NAME: &str = "test.js";

/// One parsed snippet: arena, tokens and source.
pub(crate) struct Fixture {
    pub arena: NodeArena,
    pub tokens: TokenStream,
    pub root: NodeIndex,
    pub source: String,
    pub diagnostics: Vec<ParseDiagnostic>,
}

impl Fixture {
    /// Parse `source`, panicking on syntax errors.
    pub fn parse(source: &str) -> Fixture {
        let fixture = Fixture::parse_lenient(source);
        assert!(
            fixture.diagnostics.is_empty(),
            "unexpected diagnostics for {source:?}: {:?}",
            fixture.diagnostics
        );
        fixture
    }

    /// Parse `source`, keeping any diagnostics.
    pub fn parse_lenient(source: &str) -> Fixture {
        let mut parser = ParserState::new(TEST_FILE_NAME.to_string(), source.to_string());
        let root = parser.parse_source_file();
        let diagnostics = parser.get_diagnostics().to_vec();
        let (arena, tokens) = parser.into_parts();
        Fixture {
            arena,
            tokens,
            root,
            source: source.to_string(),
            diagnostics,
        }
    }

    /// The `index`-th top-level statement.
    pub fn statement(&self, index: usize) -> NodeIndex {
        self.arena
            .get_source_file_at(self.root)
            .expect("source file")
            .statements
            .nodes[index]
    }

    /// Expression of the first statement, which must be an expression
    /// statement.
    pub fn expression(&self) -> NodeIndex {
        let statement = self.arena.get(self.statement(0)).expect("statement");
        self.arena
            .get_expression_statement(statement)
            .expect("expression statement")
            .expression
    }

    /// The innermost expression whose source text is exactly `text`.
    ///
    /// Children are allocated before their parents, so the first match in
    /// arena order is the innermost one.
    pub fn find(&self, text: &str) -> NodeIndex {
        self.arena
            .nodes
            .iter()
            .enumerate()
            .find(|(_, node)| node.is_expression() && self.source_of(node.pos, node.end) == text)
            .map(|(i, _)| NodeIndex(i as u32))
            .unwrap_or_else(|| panic!("no expression {text:?} in {:?}", self.source))
    }

    /// Source text of a node.
    pub fn text(&self, index: NodeIndex) -> &str {
        let node = self.arena.get(index).expect("node");
        self.source_of(node.pos, node.end)
    }

    pub fn source_of(&self, start: u32, end: u32) -> &str {
        &self.source[start as usize..end as usize]
    }
}
