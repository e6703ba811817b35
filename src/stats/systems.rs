//! Stats domain: frame clock and notification bridge systems.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::stats::events::{
    CharacterDiedEvent, CharacterMovedEvent, LeveledUpEvent, StatChangedEvent,
};
use crate::stats::notify::StatEvent;
use crate::stats::regulator::{ResourceRegulator, StatKind};

/// Advance every regulator by the frame's elapsed time.
pub(crate) fn tick_regulators(time: Res<Time>, mut query: Query<&mut ResourceRegulator>) {
    let dt = time.delta_secs();

    for mut regulator in &mut query {
        regulator.tick(dt);
    }
}

/// Drain queued regulator notifications into messages.
pub(crate) fn forward_stat_events(
    mut query: Query<(Entity, &mut ResourceRegulator)>,
    mut changed: MessageWriter<StatChangedEvent>,
    mut leveled: MessageWriter<LeveledUpEvent>,
    mut moved: MessageWriter<CharacterMovedEvent>,
    mut died: MessageWriter<CharacterDiedEvent>,
) {
    for (entity, mut regulator) in &mut query {
        // Skip the mutable borrow when idle so change detection stays quiet
        if regulator.notifier().pending().is_empty() {
            continue;
        }

        let level = regulator.level();
        let perk_points = regulator.perk_points();
        let events = regulator.drain_events();
        // Several level-ups in one frame are reported with their own level
        let mut later_levels = events
            .iter()
            .filter(|event| **event == StatEvent::LeveledUp)
            .count() as u32;

        for event in events {
            if let Some(stat) = StatKind::from_changed_event(event) {
                changed.write(StatChangedEvent { entity, stat });
                continue;
            }

            match event {
                StatEvent::LeveledUp => {
                    later_levels -= 1;
                    leveled.write(LeveledUpEvent {
                        entity,
                        level: level.saturating_sub(later_levels),
                        perk_points: perk_points.saturating_sub(later_levels),
                    });
                }
                StatEvent::CharacterMoved => {
                    moved.write(CharacterMovedEvent { entity });
                }
                StatEvent::Died => {
                    died.write(CharacterDiedEvent { entity });
                }
                _ => {}
            }
        }
    }
}
