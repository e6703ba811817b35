//! Movement domain: maps ability input onto regulator mutators.

use bevy::prelude::*;

use crate::content::StatTuning;
use crate::movement::{CharacterMovement, MovementInput, MovementState, Player};
use crate::stats::ResourceRegulator;

/// Fullness restored by one bite
pub(crate) const EAT_FULLNESS: f32 = 25.0;
/// Happiness granted by a meal, before the multiplier
pub(crate) const EAT_HAPPINESS: f32 = 10.0;

pub(crate) fn apply_sprint_input(
    input: Res<MovementInput>,
    mut query: Query<&mut ResourceRegulator, With<Player>>,
) {
    for mut regulator in &mut query {
        if input.sprint_just_pressed && !regulator.sprint() {
            debug!(
                "Sprint denied: gate={:?}, stamina={}",
                regulator.gate(),
                regulator.stamina().current
            );
        }
        if regulator.is_sprinting() && !input.sprint_held {
            regulator.stop_sprinting();
        }
        if input.rest_just_pressed {
            regulator.restore_stamina();
        }
    }
}

pub(crate) fn apply_jump(
    input: Res<MovementInput>,
    tuning: Res<StatTuning>,
    mut query: Query<(&mut MovementState, &mut ResourceRegulator), With<Player>>,
) {
    if !input.jump_just_pressed {
        return;
    }

    for (mut state, mut regulator) in &mut query {
        if !state.on_ground || state.is_dashing {
            continue;
        }
        if regulator.try_jump() {
            state.velocity.y = tuning.speed.jump_velocity;
            state.on_ground = false;
        } else {
            debug!("Jump denied: gate={:?}", regulator.gate());
        }
    }
}

pub(crate) fn apply_dash(
    input: Res<MovementInput>,
    tuning: Res<StatTuning>,
    mut query: Query<(&mut MovementState, &mut ResourceRegulator), With<Player>>,
) {
    if !input.dash_just_pressed {
        return;
    }

    for (mut state, mut regulator) in &mut query {
        if state.is_dashing || !regulator.try_dash() {
            continue;
        }

        state.is_dashing = true;
        state.dash_timer = tuning.speed.dash_time;
        // Dash in input direction, or facing direction when idle
        state.dash_direction = if input.horizontal.abs() > 0.1 {
            input.horizontal.signum()
        } else {
            state.facing.sign()
        };
    }
}

pub(crate) fn apply_eat(
    input: Res<MovementInput>,
    mut query: Query<&mut ResourceRegulator, With<Player>>,
) {
    if !input.eat_just_pressed {
        return;
    }

    for mut regulator in &mut query {
        if regulator.is_input_blocked() {
            continue;
        }
        regulator.add_fullness(EAT_FULLNESS);
        regulator.add_happiness(EAT_HAPPINESS, true);
    }
}

/// Keep the speed cap in step with the regulator's sprint flag.
pub(crate) fn sync_sprint_speed(
    mut query: Query<(&mut CharacterMovement, &ResourceRegulator), With<Player>>,
) {
    for (mut movement, regulator) in &mut query {
        if movement.apply_sprint(regulator.is_sprinting()) {
            debug!("Max speed now {}", movement.max_speed);
        }
    }
}
