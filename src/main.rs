//! Binary entrypoint: install logging, parse arguments, route to a command.
use anyhow::Result;
use clap::Parser;

mod cli;
mod profile;
mod prompt;
mod provider;
mod session;
mod surface;
mod workflow;

fn main() -> Result<()> {
    init_tracing();
    let args = cli::RootArgs::parse();
    match args.command {
        cli::Command::Plan(args) => workflow::run_plan(args),
        cli::Command::Check(args) => workflow::run_check(args),
    }
}

/// Route diagnostics to stderr so stdout stays clean for the plan itself.
/// `RUST_LOG` overrides the default `warn` level.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
