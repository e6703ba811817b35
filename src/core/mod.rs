//! Core domain: play state, camera, and death transitions.

mod state;
mod systems;

pub use state::GameState;

use bevy::prelude::*;

use crate::core::systems::{handle_character_died, setup_camera, toggle_pause};
use crate::stats::StatSystems;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .add_systems(Startup, setup_camera)
            .add_systems(
                Update,
                (
                    toggle_pause,
                    handle_character_died.after(StatSystems::Notify),
                ),
            );
    }
}
