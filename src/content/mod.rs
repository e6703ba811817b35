//! Content domain: RON-backed tuning for character stats and movement.

mod data;
mod loader;
mod validation;

pub use data::{
    AbilityTuning, BreathTuning, FullnessTuning, HappinessTuning, LevelingTuning, SpeedTuning,
    StaminaTuning, StatTuning,
};
pub use loader::{STAT_TUNING_FILE, TuningLoadError, load_stat_tuning, parse_stat_tuning};
pub use validation::{TuningValidationError, validate_tuning};

use bevy::prelude::*;
use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_DIR: &str = "assets/data";

pub struct ContentPlugin {
    pub data_dir: PathBuf,
}

impl Default for ContentPlugin {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
        }
    }
}

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<StatTuning>()
            .insert_resource(load_tuning_or_default(&self.data_dir));
    }
}

/// Load and validate tuning, falling back to defaults on any failure.
pub fn load_tuning_or_default(data_dir: &Path) -> StatTuning {
    let tuning = match load_stat_tuning(data_dir) {
        Ok(tuning) => tuning,
        Err(e) => {
            warn!("{}; using default stat tuning", e);
            return StatTuning::default();
        }
    };

    let errors = validate_tuning(&tuning);
    if !errors.is_empty() {
        for error in &errors {
            warn!("Invalid stat tuning: {}", error);
        }
        warn!(
            "{} tuning error(s) in {}; using default stat tuning",
            errors.len(),
            STAT_TUNING_FILE
        );
        return StatTuning::default();
    }

    info!(
        "Loaded stat tuning v{} from {}",
        tuning.schema_version,
        data_dir.join(STAT_TUNING_FILE).display()
    );
    tuning
}
