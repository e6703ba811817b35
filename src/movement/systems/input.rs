//! Movement domain: input sampling for locomotion and abilities.

use bevy::prelude::*;

use crate::movement::MovementInput;

pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<MovementInput>) {
    // Horizontal axis
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    input.horizontal = x;
    input.jump_just_pressed = keyboard.just_pressed(KeyCode::Space);
    input.dash_just_pressed = keyboard.just_pressed(KeyCode::KeyE);
    input.sprint_just_pressed = keyboard.just_pressed(KeyCode::ShiftLeft);
    input.sprint_held = keyboard.pressed(KeyCode::ShiftLeft);
    input.eat_just_pressed = keyboard.just_pressed(KeyCode::KeyF);
    input.rest_just_pressed = keyboard.just_pressed(KeyCode::KeyQ);
}
