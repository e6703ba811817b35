//! Movement domain: system modules for locomotion and ability input.

pub(crate) mod abilities;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use abilities::{apply_dash, apply_eat, apply_jump, apply_sprint_input, sync_sprint_speed};
pub(crate) use input::read_input;
pub(crate) use movement::{
    FLOOR_Y, apply_horizontal_movement, integrate_motion, report_movement, update_facing,
    update_timers,
};
