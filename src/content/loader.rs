//! Loader for RON tuning files at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::StatTuning;

pub const STAT_TUNING_FILE: &str = "character_stats.ron";

/// Error type for tuning loading failures.
#[derive(Debug)]
pub struct TuningLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for TuningLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for TuningLoadError {}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse a RON document into `StatTuning`. `source` names it in errors.
pub fn parse_stat_tuning(source: &str, contents: &str) -> Result<StatTuning, TuningLoadError> {
    ron_options()
        .from_str(contents)
        .map_err(|e| TuningLoadError {
            file: source.to_string(),
            message: format!("Parse error: {}", e),
        })
}

/// Load `character_stats.ron` from `base_path`.
pub fn load_stat_tuning(base_path: &Path) -> Result<StatTuning, TuningLoadError> {
    let path = base_path.join(STAT_TUNING_FILE);
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(&path).map_err(|e| TuningLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_stat_tuning(&file_name, &contents)
}
