//! Core domain: camera setup and play flow transitions.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::core::state::GameState;
use crate::stats::CharacterDiedEvent;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Move to the dead state when any character's breath runs out
pub(crate) fn handle_character_died(
    mut events: MessageReader<CharacterDiedEvent>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    for event in events.read() {
        info!("Character {:?} died", event.entity);
        next_state.set(GameState::Dead);
    }
}

/// Escape toggles pause while playing
pub(crate) fn toggle_pause(
    keyboard: Res<ButtonInput<KeyCode>>,
    state: Res<State<GameState>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if !keyboard.just_pressed(KeyCode::Escape) {
        return;
    }

    match state.get() {
        GameState::Playing => {
            info!("Paused");
            next_state.set(GameState::Paused);
        }
        GameState::Paused => {
            info!("Resumed");
            next_state.set(GameState::Playing);
        }
        GameState::Dead => {}
    }
}
