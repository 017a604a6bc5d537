use super::args::*;
use clap::Parser;
use std::path::PathBuf;

#[test]
fn test_analyze_with_file_defaults() {
    let args = CliArgs::try_parse_from(["lintkit", "analyze", "input.js"])
        .expect("analyze with a file should parse");

    let Command::Analyze(analyze) = args.command else {
        panic!("expected analyze");
    };
    assert_eq!(analyze.input.file, Some(PathBuf::from("input.js")));
    assert_eq!(analyze.input.expr, None);
    assert_eq!(analyze.offset, None);
    assert_eq!(analyze.format, OutputFormat::Text);
    assert!(!args.no_color);
}

#[test]
fn test_analyze_with_expr_offset_and_format() {
    let args = CliArgs::try_parse_from([
        "lintkit", "analyze", "--expr", "'a' + b", "--offset", "4", "--format", "JSON",
    ])
    .expect("analyze with --expr should parse");

    let Command::Analyze(analyze) = args.command else {
        panic!("expected analyze");
    };
    assert_eq!(analyze.input.expr.as_deref(), Some("'a' + b"));
    assert_eq!(analyze.offset, Some(4));
    assert_eq!(analyze.format, OutputFormat::Json);
}

#[test]
fn test_tokens_short_expr_and_global_no_color() {
    let args = CliArgs::try_parse_from(["lintkit", "tokens", "-e", "(a)", "--no-color"])
        .expect("tokens should parse");

    assert!(args.no_color);
    let Command::Tokens(tokens) = args.command else {
        panic!("expected tokens");
    };
    assert_eq!(tokens.input.expr.as_deref(), Some("(a)"));
    assert_eq!(tokens.format, OutputFormat::Text);
}

#[test]
fn test_input_is_required() {
    assert!(CliArgs::try_parse_from(["lintkit", "analyze"]).is_err());
}

#[test]
fn test_file_and_expr_conflict() {
    assert!(CliArgs::try_parse_from(["lintkit", "analyze", "a.js", "--expr", "a"]).is_err());
}

#[test]
fn test_rejects_unknown_format() {
    assert!(
        CliArgs::try_parse_from(["lintkit", "analyze", "--expr", "a", "--format", "yaml"]).is_err()
    );
}

#[test]
fn test_rejects_negative_offset() {
    assert!(
        CliArgs::try_parse_from(["lintkit", "analyze", "--expr", "a", "--offset", "-1"]).is_err()
    );
}
