//! Report types and their text rendering.

use colored::Colorize;
use lintkit::ParsedSource;
use lintkit_ast_utils::{ExpressionKind, StaticValue};
use lintkit_common::Span;
use lintkit_scanner::SyntaxKind;
use serde::Serialize;
use std::fmt::Write;

/// Everything `lintkit analyze` knows about one expression.
#[derive(Clone, Debug, Serialize)]
pub struct AnalysisReport {
    pub file: String,
    pub text: String,
    pub kind: ExpressionKind,
    pub span: Span,
    pub static_value: StaticValue,
    /// `None` when the expression is not a pure `+` chain.
    pub concat_operands: Option<Vec<OperandReport>>,
    pub parenthesized_range: Span,
    pub parenthesized_text: String,
    pub is_parenthesized: bool,
    pub parent_syntax_paren: Option<Span>,
    pub needs_parens: NeedsParens,
}

#[derive(Clone, Debug, Serialize)]
pub struct OperandReport {
    pub text: String,
    pub span: Span,
    pub static_value: StaticValue,
}

/// Whether the expression needs wrapping as the operand of `!` and of
/// `&&`/`||`.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct NeedsParens {
    pub not: bool,
    pub logical: bool,
}

#[derive(Clone, Debug, Serialize)]
pub struct TokenReport {
    pub kind: SyntaxKind,
    pub span: Span,
    pub text: String,
}

/// Text rendering, optionally colored.
pub struct Reporter {
    color: bool,
}

impl Reporter {
    pub fn new(color: bool) -> Self {
        Reporter { color }
    }

    fn label(&self, text: &str) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn dim(&self, text: &str) -> String {
        if self.color {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }

    fn yes_no(&self, value: bool) -> String {
        let text = if value { "yes" } else { "no" };
        if !self.color {
            return text.to_string();
        }
        if value {
            text.green().to_string()
        } else {
            text.yellow().to_string()
        }
    }

    fn static_value(&self, value: &StaticValue) -> String {
        match value.as_str() {
            Some(text) => format!("{text:?}"),
            None => self.dim("unknown"),
        }
    }

    pub fn render_analysis(&self, report: &AnalysisReport) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{} {}  {}",
            self.label("expression:"),
            report.text,
            self.dim(&format!(
                "[{} {}..{}]",
                report.kind, report.span.start, report.span.end
            ))
        );
        let _ = writeln!(
            out,
            "{} {}",
            self.label("static value:"),
            self.static_value(&report.static_value)
        );

        match &report.concat_operands {
            Some(operands) => {
                let _ = writeln!(out, "{}", self.label("concat operands:"));
                for (i, operand) in operands.iter().enumerate() {
                    let _ = writeln!(
                        out,
                        "  {i}: {}  {}",
                        operand.text,
                        self.static_value(&operand.static_value)
                    );
                }
            }
            None => {
                let _ = writeln!(out, "{} {}", self.label("concat operands:"), self.dim("none"));
            }
        }

        let _ = writeln!(
            out,
            "{} {}..{}  {}",
            self.label("parenthesized range:"),
            report.parenthesized_range.start,
            report.parenthesized_range.end,
            report.parenthesized_text
        );
        let _ = writeln!(
            out,
            "{} {}",
            self.label("parenthesized:"),
            self.yes_no(report.is_parenthesized)
        );
        let syntax_paren = match report.parent_syntax_paren {
            Some(span) => format!("at {}", span.start),
            None => self.dim("none"),
        };
        let _ = writeln!(out, "{} {}", self.label("parent syntax paren:"), syntax_paren);
        let _ = writeln!(
            out,
            "{} `!` {}, `&&`/`||` {}",
            self.label("needs parentheses:"),
            self.yes_no(report.needs_parens.not),
            self.yes_no(report.needs_parens.logical)
        );
        out
    }

    pub fn render_tokens(&self, tokens: &[TokenReport]) -> String {
        let mut out = String::new();
        for token in tokens {
            let range = format!("{}..{}", token.span.start, token.span.end);
            let _ = writeln!(
                out,
                "{:<10} {:<28} {}",
                self.dim(&range),
                format!("{:?}", token.kind),
                token.text
            );
        }
        out
    }

    /// `file:line:col - error LK1005: message`, one per diagnostic.
    pub fn render_diagnostics(&self, parsed: &ParsedSource) -> String {
        let mut out = String::new();
        for diag in &parsed.diagnostics {
            let (line, column) = line_and_column(&parsed.source_text, diag.start);
            let error = if self.color {
                "error".red().bold().to_string()
            } else {
                "error".to_string()
            };
            let code = format!("LK{}", diag.code);
            let _ = writeln!(
                out,
                "{}:{}:{} - {} {}: {}",
                parsed.file_name,
                line,
                column,
                error,
                self.dim(&code),
                diag.message
            );
        }
        let count = parsed.diagnostics.len();
        if count > 0 {
            let noun = if count == 1 { "error" } else { "errors" };
            let _ = writeln!(out, "\nFound {count} {noun}.");
        }
        out
    }
}

/// 1-based line and column (in characters) of a byte offset.
pub fn line_and_column(source: &str, offset: u32) -> (usize, usize) {
    let offset = (offset as usize).min(source.len());
    let prefix = source.get(..offset).unwrap_or(source);
    let line = prefix.matches('\n').count() + 1;
    let line_start = prefix.rfind('\n').map_or(0, |i| i + 1);
    let column = prefix[line_start..].chars().count() + 1;
    (line, column)
}
