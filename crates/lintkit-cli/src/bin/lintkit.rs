use anyhow::Result;
use clap::Parser;
use lintkit_cli::args::CliArgs;
use lintkit_cli::driver::{self, EXIT_SUCCESS};
use std::io::IsTerminal;

fn main() -> Result<()> {
    lintkit::tracing_config::init_tracing();

    let args = CliArgs::parse();
    let color = !args.no_color && std::io::stdout().is_terminal();

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    let status = driver::run(&args, color, &mut stdout.lock(), &mut stderr.lock())?;
    if status != EXIT_SUCCESS {
        std::process::exit(status);
    }
    Ok(())
}
