//! Common types and utilities for the lintkit workspace.
//!
//! This crate provides foundational types used across all lintkit crates:
//! - Source spans (`Span`) as byte offsets
//! - Centralized recursion limits

// Span - Source location tracking (byte offsets)
pub mod span;
pub use span::Span;

// Centralized limits and thresholds
pub mod limits;

#[cfg(test)]
#[path = "../tests/span_tests.rs"]
mod span_tests;
