use super::*;
use crate::profile::{ActivityLevel, FitnessGoal, RawProfile, WorkoutType};

fn profile(limitations: &str) -> UserProfile {
    RawProfile {
        fitness_goal: FitnessGoal::MuscleGain,
        activity_level: ActivityLevel::LightlyActive,
        workout_type: WorkoutType::Gym,
        days_per_week: 4,
        minutes_per_session: 60,
        age: 31,
        weight: 82.5,
        height: 184,
        limitations: limitations.to_string(),
    }
    .validate()
    .expect("validate test profile")
}

#[test]
fn prompt_contains_all_nine_fields() {
    let prompt = build_prompt(&profile("lower back pain"));
    assert!(prompt.contains("Fitness Goal: Muscle Gain"));
    assert!(prompt.contains("Current Activity Level: Lightly Active"));
    assert!(prompt.contains("Preferred Workout Type: Gym"));
    assert!(prompt.contains("Time Commitment: 4 days per week, 60 minutes per session"));
    assert!(prompt.contains("Age: 31 years"));
    assert!(prompt.contains("Weight: 82.5 kg"));
    assert!(prompt.contains("Height: 184 cm"));
    assert!(prompt.contains("Injuries/Limitations: lower back pain"));
}

#[test]
fn prompt_leaves_no_placeholders_behind() {
    let prompt = build_prompt(&profile(""));
    assert!(!prompt.contains('{'), "unsubstituted placeholder: {prompt}");
    assert!(!prompt.contains('}'), "unsubstituted placeholder: {prompt}");
}

#[test]
fn prompt_is_deterministic_for_identical_profiles() {
    let first = build_prompt(&profile("shoulder impingement"));
    let second = build_prompt(&profile("shoulder impingement"));
    assert_eq!(first, second);
}

#[test]
fn blank_limitations_render_as_none() {
    let prompt = build_prompt(&profile(""));
    assert!(prompt.contains("Injuries/Limitations: None"));
}

#[test]
fn prompt_keeps_instruction_sections() {
    let prompt = build_prompt(&profile(""));
    assert!(prompt.contains("**User Profile:**"));
    assert!(prompt.contains("1. A personalized workout plan for one week"));
    assert!(prompt.contains("5. Nutrition tips that complement their fitness goal"));
}
