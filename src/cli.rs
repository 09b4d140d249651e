//! CLI argument parsing for the workout plan generator.
//!
//! The CLI is intentionally thin: it routes to the session workflow without
//! embedding policy, so the same core logic can be driven by tests.
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Root CLI entrypoint for the plan generator.
///
/// Keeping a single `RootArgs` type makes command routing obvious and avoids
/// hidden defaults in subcommand constructors.
#[derive(Parser, Debug)]
#[command(
    name = "fitbuddy",
    version,
    about = "AI-assisted workout plan generator",
    after_help = "Commands:\n  plan   Run the interactive workout plan session\n  check  Verify that the generation provider is reachable\n\nHow it works:\n  1. Fill out the fitness profile form\n  2. Submit to generate a personalized workout plan\n  3. Review the plan and share feedback\n  4. Download the plan as a text file\n\nExamples:\n  fitbuddy plan\n  fitbuddy plan --out plans/monday.txt\n  fitbuddy check --json\n\nThe provider credential is read from the PROVIDER_API_KEY environment variable.",
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct RootArgs {
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    Plan(PlanArgs),
    Check(CheckArgs),
}

/// Plan command inputs for one interactive session.
#[derive(Parser, Debug)]
#[command(about = "Run the interactive workout plan session")]
pub struct PlanArgs {
    /// Write the generated plan to PATH instead of prompting to save
    #[arg(long, value_name = "PATH")]
    pub out: Option<PathBuf>,
}

/// Check command inputs for the provider preflight.
#[derive(Parser, Debug)]
#[command(about = "Verify that the generation provider is reachable")]
pub struct CheckArgs {
    /// Emit machine-readable JSON output
    #[arg(long)]
    pub json: bool,
}
