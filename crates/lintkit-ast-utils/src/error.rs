//! Errors for caller contract violations.

use lintkit_parser::NodeIndex;
use thiserror::Error;

/// A query was given a node it cannot analyze.
///
/// Both variants mean the caller passed a node from another parse or a
/// synthesized node; they are not "cannot determine" outcomes.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("node {0:?} does not exist in the arena")]
    MissingNode(NodeIndex),

    #[error("no tokens found for node {node:?} spanning {pos}..{end}")]
    NoTokens { node: NodeIndex, pos: u32, end: u32 },
}
