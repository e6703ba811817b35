//! Movement domain: kinematic locomotion with a flat floor.

use bevy::prelude::*;

use crate::content::StatTuning;
use crate::movement::{CharacterMovement, Facing, MovementInput, MovementState, Player};
use crate::stats::ResourceRegulator;

/// Height of the floor the player stands on
pub(crate) const FLOOR_Y: f32 = -200.0;

pub(crate) fn update_timers(time: Res<Time>, mut query: Query<&mut MovementState, With<Player>>) {
    let dt = time.delta_secs();

    for mut state in &mut query {
        if state.is_dashing {
            state.dash_timer -= dt;
            if state.dash_timer <= 0.0 {
                state.is_dashing = false;
            }
        }
    }
}

pub(crate) fn apply_horizontal_movement(
    input: Res<MovementInput>,
    tuning: Res<StatTuning>,
    mut query: Query<
        (&mut MovementState, &CharacterMovement, &ResourceRegulator),
        With<Player>,
    >,
) {
    for (mut state, movement, regulator) in &mut query {
        if state.is_dashing {
            state.velocity.x = state.dash_direction * tuning.speed.dash_speed;
            continue;
        }

        let axis = if regulator.is_input_blocked() {
            0.0
        } else {
            input.horizontal
        };
        state.velocity.x = axis * movement.max_speed;
    }
}

pub(crate) fn integrate_motion(
    time: Res<Time>,
    tuning: Res<StatTuning>,
    mut query: Query<(&mut MovementState, &mut Transform), With<Player>>,
) {
    let dt = time.delta_secs();

    for (mut state, mut transform) in &mut query {
        // No gravity during dash
        if !state.is_dashing && !state.on_ground {
            state.velocity.y -= tuning.speed.gravity * dt;
        }

        transform.translation.x += state.velocity.x * dt;
        transform.translation.y += state.velocity.y * dt;

        if transform.translation.y <= FLOOR_Y {
            transform.translation.y = FLOOR_Y;
            state.velocity.y = 0.0;
            state.on_ground = true;
        }
    }
}

pub(crate) fn update_facing(input: Res<MovementInput>, mut query: Query<&mut MovementState, With<Player>>) {
    for mut state in &mut query {
        if state.is_dashing {
            continue;
        }

        if input.horizontal > 0.1 {
            state.facing = Facing::Right;
        } else if input.horizontal < -0.1 {
            state.facing = Facing::Left;
        }
    }
}

/// Raise `CharacterMoved` on frames where the player actually moves.
pub(crate) fn report_movement(
    mut query: Query<(&MovementState, &mut ResourceRegulator), With<Player>>,
) {
    for (state, mut regulator) in &mut query {
        if state.velocity != Vec2::ZERO {
            regulator.character_moved();
        }
    }
}
