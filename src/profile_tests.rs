use super::*;

fn raw_profile() -> RawProfile {
    RawProfile {
        fitness_goal: FitnessGoal::WeightLoss,
        activity_level: ActivityLevel::Active,
        workout_type: WorkoutType::Home,
        days_per_week: 3,
        minutes_per_session: 45,
        age: 25,
        weight: 70.0,
        height: 170,
        limitations: String::new(),
    }
}

#[test]
fn validate_accepts_in_range_values() {
    assert_eq!(validate(25, 70.0, 170), Ok(()));
}

#[test]
fn validate_accepts_boundary_values() {
    assert_eq!(validate(13, 30.0, 100), Ok(()));
    assert_eq!(validate(100, 300.0, 250), Ok(()));
}

#[test]
fn validate_rejects_age_outside_bounds() {
    assert_eq!(validate(12, 70.0, 170), Err(ValidationError::AgeOutOfRange(12)));
    assert_eq!(
        validate(101, 70.0, 170),
        Err(ValidationError::AgeOutOfRange(101))
    );
}

#[test]
fn validate_rejects_weight_outside_bounds() {
    assert_eq!(
        validate(25, 29.5, 170),
        Err(ValidationError::WeightOutOfRange(29.5))
    );
    assert_eq!(
        validate(25, 300.5, 170),
        Err(ValidationError::WeightOutOfRange(300.5))
    );
}

#[test]
fn validate_rejects_height_outside_bounds() {
    assert_eq!(
        validate(25, 70.0, 99),
        Err(ValidationError::HeightOutOfRange(99))
    );
    assert_eq!(
        validate(25, 70.0, 251),
        Err(ValidationError::HeightOutOfRange(251))
    );
}

#[test]
fn validation_error_names_field_and_bounds() {
    let message = ValidationError::AgeOutOfRange(200).to_string();
    assert!(message.contains("age"), "missing field name: {message}");
    assert!(message.contains("13"), "missing lower bound: {message}");
    assert!(message.contains("100"), "missing upper bound: {message}");
    assert!(message.contains("200"), "missing submitted value: {message}");
}

#[test]
fn raw_profile_validate_builds_profile() {
    let mut raw = raw_profile();
    raw.limitations = "knee injury".to_string();
    let profile = raw.validate().expect("validate raw profile");
    assert_eq!(profile.fitness_goal, FitnessGoal::WeightLoss);
    assert_eq!(profile.activity_level, ActivityLevel::Active);
    assert_eq!(profile.workout_type, WorkoutType::Home);
    assert_eq!(profile.days_per_week, 3);
    assert_eq!(profile.minutes_per_session, 45);
    assert_eq!(profile.age, 25);
    assert_eq!(profile.weight, 70.0);
    assert_eq!(profile.height, 170);
    assert_eq!(profile.limitations, "knee injury");
    assert!(profile.has_limitations());
}

#[test]
fn raw_profile_validate_normalizes_blank_limitations() {
    let profile = raw_profile().validate().expect("validate raw profile");
    assert_eq!(profile.limitations, "None");
    assert!(!profile.has_limitations());

    let mut raw = raw_profile();
    raw.limitations = "   ".to_string();
    let profile = raw.validate().expect("validate whitespace limitations");
    assert_eq!(profile.limitations, "None");
}

#[test]
fn raw_profile_validate_rejects_out_of_range_age() {
    let mut raw = raw_profile();
    raw.age = 200;
    assert_eq!(raw.validate(), Err(ValidationError::AgeOutOfRange(200)));
}

#[test]
fn form_labels_match_option_order() {
    let goals: Vec<&str> = FitnessGoal::ALL.iter().map(FitnessGoal::as_str).collect();
    assert_eq!(
        goals,
        [
            "Weight Loss",
            "Muscle Gain",
            "Endurance",
            "Flexibility",
            "General Fitness"
        ]
    );

    let levels: Vec<&str> = ActivityLevel::ALL.iter().map(ActivityLevel::as_str).collect();
    assert_eq!(levels, ["Sedentary", "Lightly Active", "Active", "Very Active"]);

    let types: Vec<&str> = WorkoutType::ALL.iter().map(WorkoutType::as_str).collect();
    assert_eq!(types, ["Home", "Gym", "Equipment", "Bodyweight"]);
}

#[test]
fn form_defaults_point_at_expected_options() {
    assert_eq!(DAYS_PER_WEEK_OPTIONS[DEFAULT_DAYS_INDEX], 3);
    assert_eq!(MINUTES_PER_SESSION_OPTIONS[DEFAULT_MINUTES_INDEX], 45);
}
