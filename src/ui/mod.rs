//! UI domain: stat HUD and death flow.

mod death;
mod hud_stats;

pub use death::{DeathScreenUI, RespawnButton};
pub use hud_stats::{LevelText, StatBarFill, StatHudUI};

use bevy::prelude::*;

use crate::core::GameState;
use crate::stats::StatSystems;
use crate::ui::death::{despawn_death_screen, handle_respawn, spawn_death_screen};
use crate::ui::hud_stats::{spawn_stat_hud, update_level_text, update_stat_bars};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_stat_hud)
            .add_systems(
                Update,
                (update_stat_bars, update_level_text).after(StatSystems::Notify),
            )
            .add_systems(OnEnter(GameState::Dead), spawn_death_screen)
            .add_systems(OnExit(GameState::Dead), despawn_death_screen)
            .add_systems(Update, handle_respawn.run_if(in_state(GameState::Dead)));
    }
}
