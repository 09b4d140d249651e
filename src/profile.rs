//! User intake profile: form option domains, numeric range validation, and
//! the immutable profile handed to the prompt builder.
use std::fmt;
use std::ops::RangeInclusive;
use thiserror::Error;

/// Accepted age range in years, inclusive on both ends.
pub const AGE_RANGE: RangeInclusive<u32> = 13..=100;
/// Accepted weight range in kilograms, inclusive on both ends.
pub const WEIGHT_RANGE: RangeInclusive<f64> = 30.0..=300.0;
/// Accepted height range in centimeters, inclusive on both ends.
pub const HEIGHT_RANGE: RangeInclusive<u32> = 100..=250;

/// Days-per-week choices offered on the form.
pub const DAYS_PER_WEEK_OPTIONS: [u32; 7] = [1, 2, 3, 4, 5, 6, 7];
/// Minutes-per-session choices offered on the form.
pub const MINUTES_PER_SESSION_OPTIONS: [u32; 7] = [15, 30, 45, 60, 75, 90, 120];

/// Preselected index into [`DAYS_PER_WEEK_OPTIONS`] (3 days).
pub const DEFAULT_DAYS_INDEX: usize = 2;
/// Preselected index into [`MINUTES_PER_SESSION_OPTIONS`] (45 minutes).
pub const DEFAULT_MINUTES_INDEX: usize = 2;
/// Prefilled age in years.
pub const DEFAULT_AGE: u32 = 25;
/// Prefilled weight in kilograms.
pub const DEFAULT_WEIGHT_KG: f64 = 70.0;
/// Prefilled height in centimeters.
pub const DEFAULT_HEIGHT_CM: u32 = 170;

/// Primary training objective offered on the intake form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitnessGoal {
    WeightLoss,
    MuscleGain,
    Endurance,
    Flexibility,
    GeneralFitness,
}

impl FitnessGoal {
    /// All goals in form order.
    pub const ALL: [FitnessGoal; 5] = [
        FitnessGoal::WeightLoss,
        FitnessGoal::MuscleGain,
        FitnessGoal::Endurance,
        FitnessGoal::Flexibility,
        FitnessGoal::GeneralFitness,
    ];

    /// Return the label shown on the form and substituted into the prompt.
    pub fn as_str(&self) -> &'static str {
        match self {
            FitnessGoal::WeightLoss => "Weight Loss",
            FitnessGoal::MuscleGain => "Muscle Gain",
            FitnessGoal::Endurance => "Endurance",
            FitnessGoal::Flexibility => "Flexibility",
            FitnessGoal::GeneralFitness => "General Fitness",
        }
    }
}

impl fmt::Display for FitnessGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Self-reported day-to-day activity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityLevel {
    Sedentary,
    LightlyActive,
    Active,
    VeryActive,
}

impl ActivityLevel {
    /// All levels in form order.
    pub const ALL: [ActivityLevel; 4] = [
        ActivityLevel::Sedentary,
        ActivityLevel::LightlyActive,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
    ];

    /// Return the label shown on the form and substituted into the prompt.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary",
            ActivityLevel::LightlyActive => "Lightly Active",
            ActivityLevel::Active => "Active",
            ActivityLevel::VeryActive => "Very Active",
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Preferred workout environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkoutType {
    Home,
    Gym,
    Equipment,
    Bodyweight,
}

impl WorkoutType {
    /// All workout types in form order.
    pub const ALL: [WorkoutType; 4] = [
        WorkoutType::Home,
        WorkoutType::Gym,
        WorkoutType::Equipment,
        WorkoutType::Bodyweight,
    ];

    /// Return the label shown on the form and substituted into the prompt.
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutType::Home => "Home",
            WorkoutType::Gym => "Gym",
            WorkoutType::Equipment => "Equipment",
            WorkoutType::Bodyweight => "Bodyweight",
        }
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Range failure raised before a submission is accepted.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error(
        "age must be between {min} and {max} years (got {0})",
        min = AGE_RANGE.start(),
        max = AGE_RANGE.end()
    )]
    AgeOutOfRange(u32),
    #[error(
        "weight must be between {min} and {max} kg (got {0})",
        min = WEIGHT_RANGE.start(),
        max = WEIGHT_RANGE.end()
    )]
    WeightOutOfRange(f64),
    #[error(
        "height must be between {min} and {max} cm (got {0})",
        min = HEIGHT_RANGE.start(),
        max = HEIGHT_RANGE.end()
    )]
    HeightOutOfRange(u32),
}

/// Check the numeric intake ranges shared by every submission path.
///
/// Bounds are inclusive on both ends. No side effects; the caller decides
/// whether to re-prompt.
pub fn validate(age: u32, weight: f64, height: u32) -> Result<(), ValidationError> {
    if !AGE_RANGE.contains(&age) {
        return Err(ValidationError::AgeOutOfRange(age));
    }
    if !WEIGHT_RANGE.contains(&weight) {
        return Err(ValidationError::WeightOutOfRange(weight));
    }
    if !HEIGHT_RANGE.contains(&height) {
        return Err(ValidationError::HeightOutOfRange(height));
    }
    Ok(())
}

/// Unvalidated field values handed over by the form surface.
///
/// Numeric fields may be out of range; widgets deliberately do not enforce
/// bounds so the range checks live in one place.
#[derive(Debug, Clone)]
pub struct RawProfile {
    pub fitness_goal: FitnessGoal,
    pub activity_level: ActivityLevel,
    pub workout_type: WorkoutType,
    pub days_per_week: u32,
    pub minutes_per_session: u32,
    pub age: u32,
    pub weight: f64,
    pub height: u32,
    pub limitations: String,
}

impl RawProfile {
    /// Run the range checks and produce the immutable profile used for
    /// generation. Blank limitations normalize to the literal `None` so the
    /// prompt never carries an empty field.
    pub fn validate(self) -> Result<UserProfile, ValidationError> {
        validate(self.age, self.weight, self.height)?;
        let trimmed = self.limitations.trim();
        let limitations = if trimmed.is_empty() {
            "None".to_string()
        } else {
            trimmed.to_string()
        };
        Ok(UserProfile {
            fitness_goal: self.fitness_goal,
            activity_level: self.activity_level,
            workout_type: self.workout_type,
            days_per_week: self.days_per_week,
            minutes_per_session: self.minutes_per_session,
            age: self.age,
            weight: self.weight,
            height: self.height,
            limitations,
        })
    }
}

/// Validated intake profile.
///
/// Created only through [`RawProfile::validate`]; owned by the active session
/// and discarded on reset.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub fitness_goal: FitnessGoal,
    pub activity_level: ActivityLevel,
    pub workout_type: WorkoutType,
    pub days_per_week: u32,
    pub minutes_per_session: u32,
    pub age: u32,
    pub weight: f64,
    pub height: u32,
    pub limitations: String,
}

impl UserProfile {
    /// True when the user reported an injury or limitation.
    pub fn has_limitations(&self) -> bool {
        self.limitations != "None"
    }
}

#[cfg(test)]
#[path = "profile_tests.rs"]
mod tests;
