//! Stats domain: messages forwarded from regulator notifications.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::stats::regulator::StatKind;

/// A regulated resource changed; re-read it from the regulator.
#[derive(Debug, Clone, Copy)]
pub struct StatChangedEvent {
    pub entity: Entity,
    pub stat: StatKind,
}

impl Message for StatChangedEvent {}

/// Emitted once per level gained
#[derive(Debug, Clone, Copy)]
pub struct LeveledUpEvent {
    pub entity: Entity,
    pub level: u32,
    pub perk_points: u32,
}

impl Message for LeveledUpEvent {}

#[derive(Debug, Clone, Copy)]
pub struct CharacterMovedEvent {
    pub entity: Entity,
}

impl Message for CharacterMovedEvent {}

/// Breath ran out while draining
#[derive(Debug, Clone, Copy)]
pub struct CharacterDiedEvent {
    pub entity: Entity,
}

impl Message for CharacterDiedEvent {}
