//! Stats domain: bounded resources, leveling, and the per-frame regulator.

mod events;
mod level;
mod notify;
mod regulator;
mod resource;
mod systems;

#[cfg(test)]
mod tests;

pub use events::{CharacterDiedEvent, CharacterMovedEvent, LeveledUpEvent, StatChangedEvent};
pub use level::LevelState;
pub use notify::{StatCallback, StatEvent, StatNotifier};
pub use regulator::{AbilityGate, AbilityUnlocks, ResourceRegulator, StatKind, StatSnapshot};
pub use resource::{BoundedResource, ResourceState, StepOutcome};

use bevy::prelude::*;

use crate::core::GameState;
use crate::stats::systems::{forward_stat_events, tick_regulators};

/// Frame ordering shared by every domain that touches a regulator.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum StatSystems {
    /// Input and hazards call regulator mutators
    Input,
    /// The frame clock ticks regulators
    Tick,
    /// Queued notifications become messages
    Notify,
}

pub struct StatsPlugin;

impl Plugin for StatsPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<StatChangedEvent>()
            .add_message::<LeveledUpEvent>()
            .add_message::<CharacterMovedEvent>()
            .add_message::<CharacterDiedEvent>()
            .configure_sets(
                Update,
                (StatSystems::Input, StatSystems::Tick, StatSystems::Notify).chain(),
            )
            .add_systems(
                Update,
                tick_regulators
                    .in_set(StatSystems::Tick)
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(Update, forward_stat_events.in_set(StatSystems::Notify));
    }
}
