//! Hazards domain: smoke volumes that drain the player's breath.

use bevy::prelude::*;

use crate::core::GameState;
use crate::movement::{FLOOR_Y, Player};
use crate::stats::{ResourceRegulator, StatSystems};

/// A cloud of smoke. Anything inside `radius` of its centre is overlapping it.
#[derive(Component, Debug, Clone, Copy)]
pub struct SmokeVolume {
    pub radius: f32,
}

impl SmokeVolume {
    pub fn contains(&self, centre: Vec2, point: Vec2) -> bool {
        centre.distance_squared(point) <= self.radius * self.radius
    }
}

/// Smoke volumes the entity currently overlaps.
#[derive(Component, Debug, Default)]
pub struct SmokeExposure {
    pub overlapped: Vec<Entity>,
}

impl SmokeExposure {
    pub fn is_exposed(&self) -> bool {
        !self.overlapped.is_empty()
    }

    /// Replace the overlap list. Returns true if exposure started or stopped.
    pub fn update(&mut self, overlapped: Vec<Entity>) -> bool {
        let was_exposed = self.is_exposed();
        self.overlapped = overlapped;
        was_exposed != self.is_exposed()
    }
}

pub struct HazardsPlugin;

impl Plugin for HazardsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_smoke_clouds).add_systems(
            Update,
            update_smoke_exposure
                .in_set(StatSystems::Input)
                .run_if(in_state(GameState::Playing)),
        );
    }
}

fn spawn_smoke_clouds(mut commands: Commands) {
    for (x, radius) in [(0.0, 90.0), (420.0, 140.0)] {
        commands.spawn((
            SmokeVolume { radius },
            Sprite {
                color: Color::srgba(0.45, 0.45, 0.5, 0.45),
                custom_size: Some(Vec2::splat(radius * 2.0)),
                ..default()
            },
            Transform::from_xyz(x, FLOOR_Y, -1.0),
        ));
    }
}

/// Rebuild each player's overlap list and drain breath while it is non-empty.
pub(crate) fn update_smoke_exposure(
    smoke_query: Query<(Entity, &SmokeVolume, &Transform)>,
    mut player_query: Query<
        (&Transform, &mut SmokeExposure, &mut ResourceRegulator),
        With<Player>,
    >,
) {
    for (player_transform, mut exposure, mut regulator) in &mut player_query {
        let position = player_transform.translation.truncate();
        let overlapped: Vec<Entity> = smoke_query
            .iter()
            .filter(|(_, volume, transform)| {
                volume.contains(transform.translation.truncate(), position)
            })
            .map(|(entity, _, _)| entity)
            .collect();

        if exposure.update(overlapped) {
            let exposed = exposure.is_exposed();
            debug!(
                "Smoke exposure {}: {} volume(s)",
                if exposed { "started" } else { "ended" },
                exposure.overlapped.len()
            );
            regulator.change_breath(exposed);
        }
    }
}
