//! Data types for tuning definitions loaded from RON files.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

// ============================================================================
// Character stats (character_stats.ron) - Single struct, not a list
// ============================================================================

/// Every editor-facing number the stat regulator and movement read.
///
/// Missing fields fall back to their defaults, so a file only needs to
/// list what it overrides.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Reflect, Resource)]
#[serde(default)]
pub struct StatTuning {
    pub schema_version: u32,
    pub stamina: StaminaTuning,
    pub breath: BreathTuning,
    pub fullness: FullnessTuning,
    pub happiness: HappinessTuning,
    pub leveling: LevelingTuning,
    pub abilities: AbilityTuning,
    pub speed: SpeedTuning,
}

impl Default for StatTuning {
    fn default() -> Self {
        Self {
            schema_version: 1,
            stamina: StaminaTuning::default(),
            breath: BreathTuning::default(),
            fullness: FullnessTuning::default(),
            happiness: HappinessTuning::default(),
            leveling: LevelingTuning::default(),
            abilities: AbilityTuning::default(),
            speed: SpeedTuning::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Reflect)]
#[serde(default)]
pub struct StaminaTuning {
    pub max: f32,
    pub drain_rate: f32,
    pub fill_rate_default: f32,
    /// Fill rate multiplier applied while resting after `restore_stamina`.
    pub fill_multiplier: f32,
    /// Minimum stamina a sprint must be able to afford to start.
    pub sprint_threshold: f32,
    /// Stamina needed to shake off exhaustion after bottoming out.
    pub exhaustion_recovery: f32,
}

impl Default for StaminaTuning {
    fn default() -> Self {
        Self {
            max: 100.0,
            drain_rate: 10.0,
            fill_rate_default: 5.0,
            fill_multiplier: 5.0,
            sprint_threshold: 10.0,
            exhaustion_recovery: 20.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Reflect)]
#[serde(default)]
pub struct BreathTuning {
    pub max: f32,
    pub drain_rate: f32,
    pub fill_rate_default: f32,
}

impl Default for BreathTuning {
    fn default() -> Self {
        Self {
            max: 100.0,
            drain_rate: 50.0,
            fill_rate_default: 100.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Reflect)]
#[serde(default)]
pub struct FullnessTuning {
    pub max: f32,
    pub start: f32,
    pub drain_rate: f32,
    pub fill_rate: f32,
    /// Whether hunger is active from spawn.
    pub drains_by_default: bool,
}

impl Default for FullnessTuning {
    fn default() -> Self {
        Self {
            max: 100.0,
            start: 100.0,
            drain_rate: 0.5,
            fill_rate: 0.0,
            drains_by_default: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Reflect)]
#[serde(default)]
pub struct HappinessTuning {
    pub max: f32,
    pub start: f32,
    pub multiplier: f32,
    /// Decay per second while the character is starving.
    pub drain_rate: f32,
    pub fill_rate: f32,
    /// Units per second a gain is animated in at; 0 applies gains at once.
    pub animation_rate: f32,
}

impl Default for HappinessTuning {
    fn default() -> Self {
        Self {
            max: 1000.0,
            start: 0.0,
            multiplier: 1.0,
            drain_rate: 1.0,
            fill_rate: 0.0,
            animation_rate: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Reflect)]
#[serde(default)]
pub struct LevelingTuning {
    pub start_level: u32,
    pub max_level: u32,
    pub happiness_requirement_per_level: Vec<u32>,
}

impl Default for LevelingTuning {
    fn default() -> Self {
        Self {
            start_level: 1,
            max_level: 10,
            happiness_requirement_per_level: vec![100, 150, 200, 300, 400, 500, 650, 800, 1000],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Reflect)]
#[serde(default)]
pub struct AbilityTuning {
    pub unlocked_sprint: bool,
    pub jump_unlocked: bool,
    pub dash_unlocked: bool,
    pub jump_cost: f32,
    pub dash_cost: f32,
    pub input_blocked: bool,
}

impl Default for AbilityTuning {
    fn default() -> Self {
        Self {
            unlocked_sprint: false,
            jump_unlocked: true,
            dash_unlocked: true,
            jump_cost: 0.0,
            dash_cost: 25.0,
            input_blocked: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Reflect)]
#[serde(default)]
pub struct SpeedTuning {
    pub default_max_walk_speed: f32,
    pub max_sprint_speed: f32,
    pub jump_velocity: f32,
    pub gravity: f32,
    pub dash_speed: f32,
    pub dash_time: f32,
}

impl Default for SpeedTuning {
    fn default() -> Self {
        Self {
            default_max_walk_speed: 300.0,
            max_sprint_speed: 600.0,
            jump_velocity: 680.0,
            gravity: 1800.0,
            dash_speed: 900.0,
            dash_time: 0.16,
        }
    }
}
