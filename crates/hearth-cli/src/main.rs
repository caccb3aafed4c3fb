use anyhow::Context;
use clap::Parser;
use hearth_config::HearthConfig;

mod cli;
mod commands;
mod context;
mod output;

fn main() {
    if let Err(error) = run() {
        eprintln!("hearth error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let config = HearthConfig::load_with_dotenv().context("failed to load hearth configuration")?;
    init_tracing(cli.quiet, cli.verbose, &config.general.log_level)?;

    let flags = cli.global_flags();
    let ctx = context::AppContext::new(config);
    commands::dispatch::dispatch(&cli.command, &ctx, &flags)
}

fn init_tracing(quiet: bool, verbose: bool, configured: &str) -> anyhow::Result<()> {
    let level = log_level(quiet, verbose, configured);
    let filter = tracing_subscriber::EnvFilter::try_from_env("HEARTH_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

/// Command-line flags win over `general.log_level`.
fn log_level(quiet: bool, verbose: bool, configured: &str) -> &str {
    if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        configured
    }
}
