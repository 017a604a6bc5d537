//! JavaScript scanner/tokenizer for the lintkit workspace.
//!
//! This crate provides the lexical analysis phase:
//! - `SyntaxKind` - Token types
//! - `ScannerState` - Tokenizer state machine (with template re-scanning)
//! - `Token` / `TokenStream` - The recorded, position-ordered token sequence

pub mod syntax_kind;
pub use syntax_kind::SyntaxKind;

pub mod scanner_impl;
pub use scanner_impl::{ScannerDiagnostic, ScannerSnapshot, ScannerState, token_flags};

pub mod token;
pub use token::{Token, TokenStream};

#[cfg(test)]
#[path = "../tests/scanner_tests.rs"]
mod scanner_tests;

#[cfg(test)]
#[path = "../tests/token_stream_tests.rs"]
mod token_stream_tests;
