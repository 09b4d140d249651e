//! Interactive form surface.
//!
//! The workflow drives rendering and input only through [`FormSurface`]; the
//! default implementation prompts on the console with dialoguer. Numeric
//! widgets deliberately skip range checks so validation stays in
//! `profile::validate`.
use crate::profile::{
    ActivityLevel, FitnessGoal, RawProfile, UserProfile, WorkoutType, DAYS_PER_WEEK_OPTIONS,
    DEFAULT_AGE, DEFAULT_DAYS_INDEX, DEFAULT_HEIGHT_CM, DEFAULT_MINUTES_INDEX, DEFAULT_WEIGHT_KG,
    MINUTES_PER_SESSION_OPTIONS,
};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

const RULE: &str = "------------------------------------------------------------";

/// Rendering and input surface the workflow drives.
///
/// Interactive methods report user aborts (Esc, EOF, interrupted terminal)
/// through their return values so the loop can wind down cleanly instead of
/// treating a quit as a failure.
pub trait FormSurface {
    /// Collect one full set of raw form values. `None` means the user quit.
    fn request_profile(&mut self) -> Option<RawProfile>;
    /// Show the pre-generation profile summary.
    fn show_summary(&mut self, profile: &UserProfile);
    /// Render the generated plan.
    fn show_plan(&mut self, plan: &str);
    /// Surface a recoverable error.
    fn show_error(&mut self, message: &str);
    /// Surface an informational notice.
    fn show_notice(&mut self, message: &str);
    /// Ask whether to save the plan at `path`.
    fn confirm_save(&mut self, path: &Path) -> bool;
    /// Collect optional free-text feedback. `None` means the user skipped.
    fn request_feedback(&mut self) -> Option<String>;
    /// Ask whether to start over with a new plan.
    fn confirm_reset(&mut self) -> bool;
}

/// Default console implementation backed by dialoguer.
pub struct ConsoleSurface {
    theme: ColorfulTheme,
}

impl ConsoleSurface {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }

    fn select<T: ToString>(&self, prompt: &str, items: &[T], default: usize) -> Option<usize> {
        Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(default)
            .interact_opt()
            .ok()
            .flatten()
    }

    fn input<T>(&self, prompt: &str, default: T) -> Option<T>
    where
        T: Clone + ToString + FromStr,
        <T as FromStr>::Err: fmt::Debug + ToString,
    {
        Input::<T>::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact_text()
            .ok()
    }

    fn optional_text(&self, prompt: &str) -> Option<String> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .ok()
    }

    fn confirm(&self, prompt: &str, default: bool) -> bool {
        Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact()
            .unwrap_or(false)
    }
}

impl Default for ConsoleSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl FormSurface for ConsoleSurface {
    fn request_profile(&mut self) -> Option<RawProfile> {
        println!();
        println!("Tell us about yourself:");
        let goal_idx = self.select("What's your fitness goal?", &FitnessGoal::ALL, 0)?;
        let level_idx = self.select(
            "What's your current activity level?",
            &ActivityLevel::ALL,
            0,
        )?;
        let type_idx = self.select("Where do you prefer to workout?", &WorkoutType::ALL, 0)?;
        let days_idx = self.select("Days per week", &DAYS_PER_WEEK_OPTIONS, DEFAULT_DAYS_INDEX)?;
        let minutes_idx = self.select(
            "Minutes per session",
            &MINUTES_PER_SESSION_OPTIONS,
            DEFAULT_MINUTES_INDEX,
        )?;
        let age = self.input("Age (years)", DEFAULT_AGE)?;
        let weight = self.input("Weight (kg)", DEFAULT_WEIGHT_KG)?;
        let height = self.input("Height (cm)", DEFAULT_HEIGHT_CM)?;
        let limitations =
            self.optional_text("Any injuries or physical limitations? (leave blank if none)")?;

        Some(RawProfile {
            fitness_goal: FitnessGoal::ALL[goal_idx],
            activity_level: ActivityLevel::ALL[level_idx],
            workout_type: WorkoutType::ALL[type_idx],
            days_per_week: DAYS_PER_WEEK_OPTIONS[days_idx],
            minutes_per_session: MINUTES_PER_SESSION_OPTIONS[minutes_idx],
            age,
            weight,
            height,
            limitations,
        })
    }

    fn show_summary(&mut self, profile: &UserProfile) {
        println!();
        println!("Your profile summary:");
        println!("  Goal:           {}", profile.fitness_goal);
        println!("  Activity level: {}", profile.activity_level);
        println!("  Workout type:   {}", profile.workout_type);
        println!(
            "  Schedule:       {} days/week, {} min/session",
            profile.days_per_week, profile.minutes_per_session
        );
        println!("  Age:            {} years", profile.age);
        println!("  Weight:         {} kg", profile.weight);
        println!("  Height:         {} cm", profile.height);
        if profile.has_limitations() {
            println!("  Limitations:    {}", profile.limitations);
        }
    }

    fn show_plan(&mut self, plan: &str) {
        println!();
        println!("Your personalized workout plan is ready!");
        println!("{RULE}");
        println!("{plan}");
        println!("{RULE}");
    }

    fn show_error(&mut self, message: &str) {
        eprintln!("error: {message}");
    }

    fn show_notice(&mut self, message: &str) {
        println!("{message}");
    }

    fn confirm_save(&mut self, path: &Path) -> bool {
        self.confirm(&format!("Save your plan to {}?", path.display()), true)
    }

    fn request_feedback(&mut self) -> Option<String> {
        let text =
            self.optional_text("Share your thoughts about the workout plan (blank to skip)")?;
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }

    fn confirm_reset(&mut self) -> bool {
        self.confirm("Create a new plan?", false)
    }
}
