//! Centralized limits and thresholds.
//!
//! Recursive walks over the AST are bounded here so that pathological input
//! (machine-generated concatenations, deeply nested templates) cannot exhaust
//! the call stack.

// =============================================================================
// Recursion Depth Limits
// =============================================================================

/// Maximum nesting depth accepted by the parser.
///
/// Statements, assignment-level expressions, unary operands and nested
/// bodies each enter one level, so one pair of grouping parentheses costs
/// a couple of levels. When exceeded the parser emits a diagnostic and
/// stops descending.
///
/// ```javascript
/// // A few hundred levels of grouping:
/// const x = ((((((((((((/* ... */ a /* ... */))))))))))));
///
/// // Deeply nested template substitutions:
/// const y = `${`${`${`${/* ... */ a}`}`}`}`;
/// ```
pub const MAX_PARSER_RECURSION_DEPTH: u32 = 1_000;

/// Maximum nesting depth for static string resolution.
///
/// The left spine of a `+` chain is walked iteratively and does not count
/// against this limit. Only genuinely nested operands (parenthesized right
/// operands, template substitutions) do. Beyond the limit the resolver gives
/// up and reports the value as unknown.
///
/// ```javascript
/// // Left spine, walked iteratively (no depth consumed):
/// "a" + "b" + "c" + /* ... 100_000 operands ... */ "z";
///
/// // Right-nested, each level consumes depth:
/// "a" + ("b" + ("c" + (/* ... */ "z")));
/// ```
pub const MAX_STATIC_VALUE_DEPTH: u32 = 500;
