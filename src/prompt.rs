//! Prompt assembly for plan generation.
//!
//! The template lives in `prompts/workout_plan.md`; substitution is plain
//! string replacement so the rendered prompt is deterministic for a given
//! profile.
use crate::profile::UserProfile;

/// System role instruction sent with every generation request.
pub const SYSTEM_PROMPT: &str = "You are a professional fitness trainer with expertise in creating safe, effective, and personalized workout plans.";

// Prompt template loaded at compile time
const WORKOUT_PLAN_TEMPLATE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/prompts/workout_plan.md"
));

/// Render the user prompt for a validated profile.
///
/// All nine profile fields appear literally in the output; `limitations` is
/// already normalized to `None` when the user left it blank.
pub fn build_prompt(profile: &UserProfile) -> String {
    WORKOUT_PLAN_TEMPLATE
        .replace("{fitness_goal}", profile.fitness_goal.as_str())
        .replace("{activity_level}", profile.activity_level.as_str())
        .replace("{workout_type}", profile.workout_type.as_str())
        .replace("{days_per_week}", &profile.days_per_week.to_string())
        .replace(
            "{minutes_per_session}",
            &profile.minutes_per_session.to_string(),
        )
        .replace("{age}", &profile.age.to_string())
        .replace("{weight}", &profile.weight.to_string())
        .replace("{height}", &profile.height.to_string())
        .replace("{limitations}", &profile.limitations)
}

#[cfg(test)]
#[path = "prompt_tests.rs"]
mod tests;
