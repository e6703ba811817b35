//! Movement domain: components for the player and its locomotion.

use bevy::prelude::*;

use crate::content::SpeedTuning;

#[derive(Component, Debug)]
pub struct Player;

#[derive(Component, Debug, Default)]
pub struct MovementState {
    pub velocity: Vec2,
    pub on_ground: bool,
    pub facing: Facing,
    pub dash_timer: f32,
    pub is_dashing: bool,
    pub dash_direction: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }
}

/// Walk and sprint speed caps. The regulator decides whether the
/// character is sprinting; this only picks the matching cap.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct CharacterMovement {
    pub default_max_walk_speed: f32,
    pub max_sprint_speed: f32,
    pub max_speed: f32,
}

impl CharacterMovement {
    pub fn new(default_max_walk_speed: f32, max_sprint_speed: f32) -> Self {
        Self {
            default_max_walk_speed,
            max_sprint_speed,
            max_speed: default_max_walk_speed,
        }
    }

    pub fn set_max_sprint_speed(&mut self, value: f32) {
        self.max_sprint_speed = value.max(0.0);
    }

    /// Switch the active cap. Returns true if it changed.
    pub fn apply_sprint(&mut self, sprinting: bool) -> bool {
        let target = if sprinting {
            self.max_sprint_speed
        } else {
            self.default_max_walk_speed
        };
        let changed = target != self.max_speed;
        self.max_speed = target;
        changed
    }
}

impl From<&SpeedTuning> for CharacterMovement {
    fn from(tuning: &SpeedTuning) -> Self {
        Self::new(tuning.default_max_walk_speed, tuning.max_sprint_speed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sprint_switches_speed_cap() {
        let mut movement = CharacterMovement::new(300.0, 600.0);
        assert_eq!(movement.max_speed, 300.0);

        assert!(movement.apply_sprint(true));
        assert_eq!(movement.max_speed, 600.0);
        assert!(!movement.apply_sprint(true));

        movement.apply_sprint(false);
        assert_eq!(movement.max_speed, 300.0);
    }

    #[test]
    fn test_new_sprint_speed_applies_on_next_switch() {
        let mut movement = CharacterMovement::new(300.0, 600.0);
        movement.set_max_sprint_speed(750.0);
        assert_eq!(movement.max_speed, 300.0);
        movement.apply_sprint(true);
        assert_eq!(movement.max_speed, 750.0);
    }
}
