//! Movement domain: input resources.

use bevy::prelude::*;

/// Keyboard state sampled once per frame, consumed by locomotion and ability systems.
#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    /// -1 left, 1 right, 0 idle
    pub horizontal: f32,
    pub jump_just_pressed: bool,
    pub dash_just_pressed: bool,
    pub sprint_just_pressed: bool,
    /// Sprint key is down this frame; a sprint ends as soon as it is not
    pub sprint_held: bool,
    pub eat_just_pressed: bool,
    pub rest_just_pressed: bool,
}
