//! Core domain: game state definitions for the play flow.

use bevy::prelude::*;

#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Copy, Default)]
pub enum GameState {
    #[default]
    Playing,
    Paused,
    /// Breath ran out; waiting for a respawn
    Dead,
}
