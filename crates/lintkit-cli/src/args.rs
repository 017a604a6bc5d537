use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the lintkit binary.
#[derive(Parser, Debug)]
#[command(
    name = "lintkit",
    version,
    about = "Static string and parenthesis analysis for JavaScript expressions"
)]
pub struct CliArgs {
    /// Disable colored output.
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Analyze one expression: static value, concatenation operands and
    /// parenthesized range.
    Analyze(AnalyzeArgs),

    /// Print the token stream of the input.
    Tokens(TokensArgs),
}

/// Where the source text comes from.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// JavaScript file to read.
    #[arg(required_unless_present = "expr", conflicts_with = "expr")]
    pub file: Option<PathBuf>,

    /// Inline source text instead of a file.
    #[arg(short = 'e', long)]
    pub expr: Option<String>,
}

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Byte offset selecting the innermost expression that contains it.
    /// Defaults to the expression of the first expression statement.
    #[arg(long)]
    pub offset: Option<u32>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, ignore_case = true)]
    pub format: OutputFormat,
}

#[derive(Args, Debug)]
pub struct TokensArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, ignore_case = true)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
