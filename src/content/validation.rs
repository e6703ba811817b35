//! Validation for consistency between tuning values.

use super::data::StatTuning;

/// A validation error with context about what failed.
#[derive(Debug, Clone, PartialEq)]
pub struct TuningValidationError {
    pub section: &'static str,
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for TuningValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}: {}", self.section, self.field, self.message)
    }
}

/// Helper macro for checking a rate or bound is non-negative and finite
macro_rules! check_non_negative {
    ($errors:expr, $section:expr, $field:expr, $value:expr) => {
        if !($value.is_finite() && $value >= 0.0) {
            $errors.push(TuningValidationError {
                section: $section,
                field: $field,
                message: format!("must be a non-negative number, got {}", $value),
            });
        }
    };
}

/// Validate all tuning values.
/// Returns a list of validation errors, empty if the tuning is usable.
pub fn validate_tuning(tuning: &StatTuning) -> Vec<TuningValidationError> {
    let mut errors = Vec::new();

    // Stamina
    let stamina = &tuning.stamina;
    check_non_negative!(errors, "stamina", "max", stamina.max);
    check_non_negative!(errors, "stamina", "drain_rate", stamina.drain_rate);
    check_non_negative!(errors, "stamina", "fill_rate_default", stamina.fill_rate_default);
    check_non_negative!(errors, "stamina", "fill_multiplier", stamina.fill_multiplier);
    check_non_negative!(errors, "stamina", "sprint_threshold", stamina.sprint_threshold);
    check_non_negative!(errors, "stamina", "exhaustion_recovery", stamina.exhaustion_recovery);
    if stamina.sprint_threshold > stamina.max {
        errors.push(TuningValidationError {
            section: "stamina",
            field: "sprint_threshold",
            message: format!("{} exceeds max {}", stamina.sprint_threshold, stamina.max),
        });
    }
    if stamina.exhaustion_recovery > stamina.max {
        errors.push(TuningValidationError {
            section: "stamina",
            field: "exhaustion_recovery",
            message: format!("{} exceeds max {}", stamina.exhaustion_recovery, stamina.max),
        });
    }

    // Breath
    let breath = &tuning.breath;
    check_non_negative!(errors, "breath", "max", breath.max);
    check_non_negative!(errors, "breath", "drain_rate", breath.drain_rate);
    check_non_negative!(errors, "breath", "fill_rate_default", breath.fill_rate_default);

    // Fullness
    let fullness = &tuning.fullness;
    check_non_negative!(errors, "fullness", "max", fullness.max);
    check_non_negative!(errors, "fullness", "start", fullness.start);
    check_non_negative!(errors, "fullness", "drain_rate", fullness.drain_rate);
    check_non_negative!(errors, "fullness", "fill_rate", fullness.fill_rate);
    if fullness.start > fullness.max {
        errors.push(TuningValidationError {
            section: "fullness",
            field: "start",
            message: format!("{} exceeds max {}", fullness.start, fullness.max),
        });
    }

    // Happiness
    let happiness = &tuning.happiness;
    check_non_negative!(errors, "happiness", "max", happiness.max);
    check_non_negative!(errors, "happiness", "start", happiness.start);
    check_non_negative!(errors, "happiness", "multiplier", happiness.multiplier);
    check_non_negative!(errors, "happiness", "drain_rate", happiness.drain_rate);
    check_non_negative!(errors, "happiness", "fill_rate", happiness.fill_rate);
    check_non_negative!(errors, "happiness", "animation_rate", happiness.animation_rate);
    if happiness.start > happiness.max {
        errors.push(TuningValidationError {
            section: "happiness",
            field: "start",
            message: format!("{} exceeds max {}", happiness.start, happiness.max),
        });
    }

    // Leveling
    let leveling = &tuning.leveling;
    if leveling.max_level == 0 {
        errors.push(TuningValidationError {
            section: "leveling",
            field: "max_level",
            message: "must be at least 1".to_string(),
        });
    }
    if leveling.start_level == 0 || leveling.start_level > leveling.max_level {
        errors.push(TuningValidationError {
            section: "leveling",
            field: "start_level",
            message: format!(
                "{} is outside 1..={}",
                leveling.start_level, leveling.max_level
            ),
        });
    }
    for (index, requirement) in leveling.happiness_requirement_per_level.iter().enumerate() {
        if *requirement == 0 {
            errors.push(TuningValidationError {
                section: "leveling",
                field: "happiness_requirement_per_level",
                message: format!("entry {} is zero", index),
            });
        }
        if *requirement as f32 > happiness.max {
            errors.push(TuningValidationError {
                section: "leveling",
                field: "happiness_requirement_per_level",
                message: format!(
                    "entry {} ({}) can never be reached with happiness max {}",
                    index, requirement, happiness.max
                ),
            });
        }
    }

    // Abilities
    check_non_negative!(errors, "abilities", "jump_cost", tuning.abilities.jump_cost);
    check_non_negative!(errors, "abilities", "dash_cost", tuning.abilities.dash_cost);

    // Speed
    let speed = &tuning.speed;
    check_non_negative!(errors, "speed", "default_max_walk_speed", speed.default_max_walk_speed);
    check_non_negative!(errors, "speed", "max_sprint_speed", speed.max_sprint_speed);
    check_non_negative!(errors, "speed", "jump_velocity", speed.jump_velocity);
    check_non_negative!(errors, "speed", "gravity", speed.gravity);
    check_non_negative!(errors, "speed", "dash_speed", speed.dash_speed);
    check_non_negative!(errors, "speed", "dash_time", speed.dash_time);

    errors
}
