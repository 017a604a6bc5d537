//! Command dispatch: load the input, parse it, pick an expression, analyze
//! and report.

use crate::args::{AnalyzeArgs, CliArgs, Command, InputArgs, OutputFormat, TokensArgs};
use crate::reporter::{AnalysisReport, NeedsParens, OperandReport, Reporter, TokenReport};
use anyhow::{Context, Result};
use lintkit::ParsedSource;
use lintkit_ast_utils::{
    CompositionContext, ExpressionKind, extract_concat_expressions, get_parent_syntax_paren,
    get_parenthesized_tokens, is_parenthesized, need_parentheses, resolve_static_value,
};
use lintkit_common::Span;
use lintkit_parser::NodeIndex;
use std::io::Write;
use tracing::{debug, info_span};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_DIAGNOSTICS: i32 = 1;

/// File name reported for `--expr` input.
pub const INLINE_FILE_NAME: &str = "<expr>";

/// Run one command. Reports go to `out`, parse diagnostics to `err`.
///
/// Returns the process exit code: [`EXIT_DIAGNOSTICS`] when the input has
/// syntax errors. I/O and selection failures are errors.
pub fn run(args: &CliArgs, color: bool, out: &mut dyn Write, err: &mut dyn Write) -> Result<i32> {
    let reporter = Reporter::new(color);
    match &args.command {
        Command::Analyze(analyze_args) => run_analyze(analyze_args, &reporter, out, err),
        Command::Tokens(tokens_args) => run_tokens(tokens_args, &reporter, out, err),
    }
}

/// Read the source text named by `input` as `(file name, text)`.
pub fn load_source(input: &InputArgs) -> Result<(String, String)> {
    if let Some(expr) = &input.expr {
        return Ok((INLINE_FILE_NAME.to_string(), expr.clone()));
    }
    let path = input
        .file
        .as_ref()
        .context("no input given: pass a file or --expr")?;
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    Ok((path.display().to_string(), text))
}

fn parse_input(input: &InputArgs) -> Result<ParsedSource> {
    let (file_name, text) = load_source(input)?;
    let _span = info_span!("parse_input", file = %file_name, bytes = text.len()).entered();
    let parsed = lintkit::parse(file_name, text);
    debug!(
        tokens = parsed.tokens.len(),
        diagnostics = parsed.diagnostics.len(),
        "parsed input"
    );
    Ok(parsed)
}

fn run_analyze(
    args: &AnalyzeArgs,
    reporter: &Reporter,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<i32> {
    let parsed = parse_input(&args.input)?;
    if parsed.has_errors() {
        err.write_all(reporter.render_diagnostics(&parsed).as_bytes())?;
        return Ok(EXIT_DIAGNOSTICS);
    }

    let expr = select_expression(&parsed, args.offset)?;
    let report = analyze(&parsed, expr)?;

    match args.format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &report)
                .context("failed to write JSON report")?;
            writeln!(out)?;
        }
        OutputFormat::Text => out.write_all(reporter.render_analysis(&report).as_bytes())?,
    }
    Ok(EXIT_SUCCESS)
}

fn run_tokens(
    args: &TokensArgs,
    reporter: &Reporter,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<i32> {
    let parsed = parse_input(&args.input)?;
    let tokens: Vec<TokenReport> = parsed
        .tokens
        .iter()
        .map(|token| TokenReport {
            kind: token.kind,
            span: token.span(),
            text: token.text(&parsed.source_text).to_string(),
        })
        .collect();

    match args.format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &tokens)
                .context("failed to write JSON tokens")?;
            writeln!(out)?;
        }
        OutputFormat::Text => out.write_all(reporter.render_tokens(&tokens).as_bytes())?,
    }

    if parsed.has_errors() {
        err.write_all(reporter.render_diagnostics(&parsed).as_bytes())?;
        return Ok(EXIT_DIAGNOSTICS);
    }
    Ok(EXIT_SUCCESS)
}

/// The expression to analyze.
///
/// With an offset: the innermost expression whose span contains it. Without:
/// the expression of the first top-level expression statement, else the
/// first variable initializer.
pub fn select_expression(parsed: &ParsedSource, offset: Option<u32>) -> Result<NodeIndex> {
    match offset {
        Some(offset) => innermost_expression_at(parsed, offset)
            .with_context(|| format!("no expression at offset {offset}")),
        None => first_top_level_expression(parsed)
            .context("input has no top-level expression; pass --offset to pick one"),
    }
}

fn innermost_expression_at(parsed: &ParsedSource, offset: u32) -> Option<NodeIndex> {
    // Children are allocated before their parents, so among equal spans the
    // first one is the innermost.
    parsed
        .arena
        .nodes
        .iter()
        .enumerate()
        .filter(|(_, node)| node.is_expression() && Span::new(node.pos, node.end).contains(offset))
        .min_by_key(|(_, node)| node.end - node.pos)
        .map(|(i, _)| NodeIndex(i as u32))
}

fn first_top_level_expression(parsed: &ParsedSource) -> Option<NodeIndex> {
    let arena = &parsed.arena;
    let statements = &arena.get_source_file_at(parsed.root)?.statements;

    statements.nodes.iter().find_map(|&statement| {
        let node = arena.get(statement)?;
        if let Some(expr_statement) = arena.get_expression_statement(node) {
            return Some(expr_statement.expression);
        }
        let variable = arena.get_variable(node)?;
        variable.declarations.nodes.iter().find_map(|&declaration| {
            let declaration = arena.get_variable_declaration(arena.get(declaration)?)?;
            declaration.initializer.is_some().then_some(declaration.initializer)
        })
    })
}

/// Run every analysis on `expr`.
pub fn analyze(parsed: &ParsedSource, expr: NodeIndex) -> Result<AnalysisReport> {
    let _span = info_span!("analyze", ?expr).entered();
    let arena = &parsed.arena;
    let tokens = &parsed.tokens;
    let node = arena
        .get(expr)
        .with_context(|| format!("expression {expr:?} is not in the parse"))?;

    let kind = ExpressionKind::of(arena, expr);
    let concat_operands = extract_concat_expressions(arena, tokens, expr).map(|operands| {
        operands
            .iter()
            .map(|&operand| OperandReport {
                text: parsed.node_text(operand).to_string(),
                span: arena
                    .get(operand)
                    .map(|n| Span::new(n.pos, n.end))
                    .unwrap_or_default(),
                static_value: resolve_static_value(arena, operand),
            })
            .collect()
    });

    let parenthesized = get_parenthesized_tokens(arena, tokens, expr)
        .context("failed to compute the parenthesized range")?;
    let parenthesized_range = parenthesized.range();

    Ok(AnalysisReport {
        file: parsed.file_name.clone(),
        text: parsed.node_text(expr).to_string(),
        kind,
        span: Span::new(node.pos, node.end),
        static_value: resolve_static_value(arena, expr),
        concat_operands,
        parenthesized_range,
        parenthesized_text: parsed
            .text_of(parenthesized_range.start, parenthesized_range.end)
            .to_string(),
        is_parenthesized: is_parenthesized(arena, tokens, expr),
        parent_syntax_paren: get_parent_syntax_paren(arena, tokens, expr).map(|t| t.span()),
        needs_parens: NeedsParens {
            not: need_parentheses(kind, CompositionContext::Not),
            logical: need_parentheses(kind, CompositionContext::Logical),
        },
    })
}
