use super::args::CliArgs;
use super::driver::*;
use clap::Parser;
use serde_json::Value;
use std::fs;

/// Run the CLI in-process, returning `(exit code, stdout, stderr)`.
fn run_cli(argv: &[&str]) -> (i32, String, String) {
    let mut full = vec!["lintkit"];
    full.extend_from_slice(argv);
    let args = CliArgs::try_parse_from(full).expect("arguments should parse");

    let mut out = Vec::new();
    let mut err = Vec::new();
    let status = run(&args, false, &mut out, &mut err).expect("command should run");
    (
        status,
        String::from_utf8(out).expect("utf-8 stdout"),
        String::from_utf8(err).expect("utf-8 stderr"),
    )
}

fn run_json(argv: &[&str]) -> Value {
    let (status, out, err) = run_cli(argv);
    assert_eq!(status, EXIT_SUCCESS, "stderr: {err}");
    serde_json::from_str(&out).expect("valid JSON report")
}

#[test]
fn test_analyze_file_json_report() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("input.js");
    fs::write(&path, "('a' + `b` + 'c');\n").expect("write input");

    let report = run_json(&["analyze", path.to_str().expect("utf-8 path"), "--format", "json"]);

    assert_eq!(report["text"], "'a' + `b` + 'c'");
    assert_eq!(report["kind"], "Binary");
    assert_eq!(report["static_value"]["state"], "known");
    assert_eq!(report["static_value"]["value"], "abc");
    assert_eq!(report["parenthesized_text"], "('a' + `b` + 'c')");
    assert_eq!(report["parenthesized_range"]["start"], 0);
    assert_eq!(report["is_parenthesized"], true);
    assert_eq!(report["needs_parens"]["not"], true);

    let operands = report["concat_operands"].as_array().expect("operands");
    let texts: Vec<&str> = operands.iter().filter_map(|o| o["text"].as_str()).collect();
    assert_eq!(texts, ["'a'", "`b`", "'c'"]);
}

#[test]
fn test_analyze_unknown_value_and_no_chain() {
    let report = run_json(&["analyze", "--expr", "a * b;", "--format", "json"]);

    assert_eq!(report["static_value"]["state"], "unknown");
    assert!(report["static_value"].get("value").is_none());
    assert!(report["concat_operands"].is_null());
    assert_eq!(report["is_parenthesized"], false);
}

#[test]
fn test_analyze_offset_picks_innermost_expression() {
    // x = (a + 'b');
    // 0123456789012
    let report = run_json(&[
        "analyze", "--expr", "x = (a + 'b');", "--offset", "5", "--format", "json",
    ]);
    assert_eq!(report["text"], "a");
    assert_eq!(report["kind"], "Identifier");

    let report = run_json(&[
        "analyze", "--expr", "x = (a + 'b');", "--offset", "7", "--format", "json",
    ]);
    assert_eq!(report["text"], "a + 'b'");
    assert_eq!(report["parenthesized_text"], "(a + 'b')");
}

#[test]
fn test_analyze_reports_parent_syntax_paren() {
    let report = run_json(&["analyze", "--expr", "if (a) {}", "--offset", "4", "--format", "json"]);

    assert_eq!(report["text"], "a");
    assert_eq!(report["parent_syntax_paren"]["start"], 3);
    assert_eq!(report["parenthesized_text"], "a");
    assert_eq!(report["is_parenthesized"], false);
}

#[test]
fn test_analyze_defaults_to_variable_initializer() {
    let report = run_json(&["analyze", "--expr", "const s = 'x' + 'y';", "--format", "json"]);
    assert_eq!(report["text"], "'x' + 'y'");
    assert_eq!(report["static_value"]["value"], "xy");
}

#[test]
fn test_analyze_text_report() {
    let (status, out, err) = run_cli(&["analyze", "--expr", "!(a || b)", "--offset", "3"]);

    assert_eq!(status, EXIT_SUCCESS);
    assert!(err.is_empty());
    assert!(out.contains("expression: a || b  [Logical 2..8]"), "{out}");
    assert!(out.contains("static value: unknown"), "{out}");
    assert!(out.contains("parenthesized range: 1..9  (a || b)"), "{out}");
    assert!(out.contains("needs parentheses: `!` yes, `&&`/`||` yes"), "{out}");
}

#[test]
fn test_analyze_syntax_error_exit_code() {
    let (status, out, err) = run_cli(&["analyze", "--expr", "a +;"]);

    assert_eq!(status, EXIT_DIAGNOSTICS);
    assert!(out.is_empty());
    assert!(err.contains("<expr>:1:4 - error LK1109: Expression expected."), "{err}");
    assert!(err.contains("Found 1 error."), "{err}");
}

#[test]
fn test_analyze_offset_outside_any_expression() {
    let args = CliArgs::try_parse_from(["lintkit", "analyze", "--expr", "a;   ", "--offset", "4"])
        .expect("arguments should parse");
    let error = run(&args, false, &mut Vec::new(), &mut Vec::new())
        .expect_err("offset 4 is whitespace");
    assert!(error.to_string().contains("no expression at offset 4"));
}

#[test]
fn test_analyze_without_expression_statement() {
    let args = CliArgs::try_parse_from(["lintkit", "analyze", "--expr", "if (a) {}"])
        .expect("arguments should parse");
    let error = run(&args, false, &mut Vec::new(), &mut Vec::new())
        .expect_err("no top-level expression");
    assert!(error.to_string().contains("no top-level expression"));
}

#[test]
fn test_missing_file_has_context() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("missing.js");
    let args = CliArgs::try_parse_from(["lintkit", "analyze", path.to_str().expect("utf-8 path")])
        .expect("arguments should parse");

    let error = run(&args, false, &mut Vec::new(), &mut Vec::new())
        .expect_err("missing file must fail");
    assert!(format!("{error:#}").contains("failed to read"), "{error:#}");
}

#[test]
fn test_tokens_text_and_json() {
    let (status, out, _) = run_cli(&["tokens", "--expr", "(a)"]);
    assert_eq!(status, EXIT_SUCCESS);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains("OpenParenToken"));
    assert!(lines[1].ends_with(" a"));

    let tokens = run_json(&["tokens", "--expr", "f(`x${y}z`)", "--format", "json"]);
    let tokens = tokens.as_array().expect("token array");
    let kinds: Vec<&str> = tokens.iter().filter_map(|t| t["kind"].as_str()).collect();
    assert_eq!(
        kinds,
        [
            "Identifier",
            "OpenParenToken",
            "TemplateHead",
            "Identifier",
            "TemplateTail",
            "CloseParenToken"
        ]
    );
    assert_eq!(tokens[2]["text"], "`x${");
}

#[test]
fn test_tokens_with_errors_still_prints_tokens() {
    let (status, out, err) = run_cli(&["tokens", "--expr", "'abc"]);
    assert_eq!(status, EXIT_DIAGNOSTICS);
    assert!(out.contains("StringLiteral"));
    assert!(err.contains("LK1002"), "{err}");
}
