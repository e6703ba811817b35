//! Movement domain: player spawn, locomotion, and ability input.

mod components;
mod resources;
mod systems;

pub use components::{CharacterMovement, Facing, MovementState, Player};
pub use resources::MovementInput;
pub(crate) use systems::FLOOR_Y;

use bevy::prelude::*;

use crate::content::StatTuning;
use crate::core::GameState;
use crate::hazards::SmokeExposure;
use crate::movement::systems::{
    apply_dash, apply_eat, apply_horizontal_movement, apply_jump, apply_sprint_input,
    integrate_motion, read_input, report_movement, sync_sprint_speed, update_facing,
    update_timers,
};
use crate::stats::{ResourceRegulator, StatSystems};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementInput>()
            .add_systems(Startup, spawn_player)
            .add_systems(
                Update,
                (
                    read_input,
                    (apply_sprint_input, apply_jump, apply_dash, apply_eat),
                    update_timers,
                    apply_horizontal_movement,
                    update_facing,
                    integrate_motion,
                    report_movement,
                )
                    .chain()
                    .in_set(StatSystems::Input)
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(
                Update,
                sync_sprint_speed
                    .after(StatSystems::Tick)
                    .before(StatSystems::Notify),
            );
    }
}

/// Spawn point used at startup and on respawn
pub const PLAYER_SPAWN: Vec3 = Vec3::new(-400.0, FLOOR_Y, 0.0);

fn spawn_player(mut commands: Commands, tuning: Res<StatTuning>) {
    let regulator = ResourceRegulator::from_tuning(&tuning);
    info!(
        "Spawning player: level={}, stamina={}, sprint_unlocked={}",
        regulator.level(),
        regulator.stamina().current,
        regulator.unlocks().sprint
    );

    commands.spawn((
        Player,
        MovementState {
            on_ground: true,
            ..default()
        },
        CharacterMovement::from(&tuning.speed),
        regulator,
        SmokeExposure::default(),
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(Vec2::new(24.0, 48.0)),
            ..default()
        },
        Transform::from_translation(PLAYER_SPAWN),
    ));
}
