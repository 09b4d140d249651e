//! Command drivers for the CLI.
//!
//! `run_plan` owns one interactive session end to end: collect, validate,
//! generate, display, export, feedback, reset. `run_check` answers the
//! provider preflight. Session state lives in an explicit [`Session`] value
//! owned here, never in process globals.
use crate::cli::{CheckArgs, PlanArgs};
use crate::provider::{GenerationClient, GenerationError, ProviderConfig, PROVIDER_API_KEY_ENV};
use crate::session::{FeedbackAck, Phase, Session};
use crate::surface::{ConsoleSurface, FormSurface};
use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Fixed suggested filename for the exported plan.
pub const DEFAULT_PLAN_FILENAME: &str = "my_workout_plan.txt";

/// Greeting printed at the top of every interactive session.
const WELCOME_MESSAGE: &str =
    "Hi! I'm your fitness buddy. Let's create a personalized workout plan for you.";

/// Generic causes suggested alongside a provider failure.
const PROVIDER_ERROR_HINTS: [&str; 3] = [
    "an invalid API key",
    "insufficient API credits",
    "network connection issues",
];

/// Remediation steps shown when the provider is unreachable.
fn credential_checklist() -> [String; 3] {
    [
        format!("1. Set {PROVIDER_API_KEY_ENV} in the environment"),
        "2. Use a key that is active for your provider account".to_string(),
        "3. Keep sufficient API credits on the account".to_string(),
    ]
}

pub fn run_plan(args: PlanArgs) -> Result<()> {
    let client = GenerationClient::new(ProviderConfig::from_env());
    let mut surface = ConsoleSurface::new();
    let mut session = Session::new();
    run_plan_session(&mut session, &mut surface, &client, args.out.as_deref())
}

pub fn run_check(args: CheckArgs) -> Result<()> {
    let client = GenerationClient::new(ProviderConfig::from_env());
    let outcome = client.probe();
    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&outcome).context("serialize probe outcome")?
        );
    } else if outcome.ok {
        println!("{}", outcome.status);
    } else {
        eprintln!("{}", outcome.status);
        eprintln!("Make sure you have:");
        for step in credential_checklist() {
            eprintln!("  {step}");
        }
    }
    if outcome.ok {
        Ok(())
    } else {
        Err(anyhow!("provider check failed"))
    }
}

/// Drive one interactive session over any surface.
///
/// `out_override` skips the save prompt and writes the plan to the given path
/// directly. Returns when the user quits the form or declines a new plan.
fn run_plan_session(
    session: &mut Session,
    surface: &mut dyn FormSurface,
    client: &GenerationClient,
    out_override: Option<&Path>,
) -> Result<()> {
    surface.show_notice(WELCOME_MESSAGE);
    if !client.has_credential() {
        surface.show_error(&GenerationError::MissingCredential.to_string());
        show_credential_checklist(surface);
    }

    loop {
        match session.phase() {
            Phase::Collecting => {
                let Some(raw) = surface.request_profile() else {
                    return Ok(());
                };
                let profile = match raw.validate() {
                    Ok(profile) => profile,
                    Err(err) => {
                        surface.show_error(&err.to_string());
                        continue;
                    }
                };
                surface.show_summary(&profile);
                surface.show_notice("Generating your personalized workout plan...");
                if let Err(err) = session.submit(profile, client) {
                    surface.show_error(&err.to_string());
                    match err {
                        GenerationError::MissingCredential => show_credential_checklist(surface),
                        GenerationError::Provider(_) => show_provider_hints(surface),
                    }
                }
            }
            Phase::Displaying => {
                let plan = session
                    .state()
                    .current_plan()
                    .ok_or_else(|| anyhow!("displaying phase without a cached plan"))?
                    .to_string();
                surface.show_plan(&plan);
                offer_export(surface, &plan, out_override)?;
                if let Some(feedback) = surface.request_feedback() {
                    match session.acknowledge_feedback(&feedback) {
                        FeedbackAck::Received => {
                            surface.show_notice("Thank you for your feedback!");
                        }
                        FeedbackAck::Empty => {
                            surface.show_notice("Please enter some feedback before submitting.");
                        }
                    }
                }
                if surface.confirm_reset() {
                    session.reset();
                } else {
                    return Ok(());
                }
            }
        }
    }
}

/// Offer the plain-text plan artifact, honoring an explicit output path.
fn offer_export(
    surface: &mut dyn FormSurface,
    plan: &str,
    out_override: Option<&Path>,
) -> Result<()> {
    match out_override {
        Some(path) => {
            write_plan(path, plan)?;
            surface.show_notice(&format!("wrote {}", path.display()));
        }
        None => {
            let path = PathBuf::from(DEFAULT_PLAN_FILENAME);
            if surface.confirm_save(&path) {
                write_plan(&path, plan)?;
                surface.show_notice(&format!("wrote {}", path.display()));
            }
        }
    }
    Ok(())
}

/// Write the plan artifact as plain text.
fn write_plan(path: &Path, plan: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create plan directory {}", parent.display()))?;
        }
    }
    fs::write(path, plan).with_context(|| format!("write plan to {}", path.display()))?;
    tracing::info!(plan_bytes = plan.len(), path = %path.display(), "plan exported");
    Ok(())
}

fn show_credential_checklist(surface: &mut dyn FormSurface) {
    surface.show_notice("Make sure you have:");
    for step in credential_checklist() {
        surface.show_notice(&format!("  {step}"));
    }
}

fn show_provider_hints(surface: &mut dyn FormSurface) {
    surface.show_notice("This might be due to:");
    for hint in PROVIDER_ERROR_HINTS {
        surface.show_notice(&format!("  - {hint}"));
    }
}

#[cfg(test)]
#[path = "workflow_tests.rs"]
mod tests;
