//! Stats domain: tests for regulation, gating, leveling and notifications.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use super::systems::forward_stat_events;
use super::{
    CharacterDiedEvent, CharacterMovedEvent, LeveledUpEvent, ResourceRegulator, ResourceState,
    StatChangedEvent, StatEvent, StatKind,
};
use crate::content::StatTuning;

fn tuning() -> StatTuning {
    let mut tuning = StatTuning::default();
    tuning.abilities.unlocked_sprint = true;
    tuning
}

fn regulator() -> ResourceRegulator {
    ResourceRegulator::from_tuning(&tuning())
}

fn count(events: &[StatEvent], wanted: StatEvent) -> usize {
    events.iter().filter(|event| **event == wanted).count()
}

// -----------------------------------------------------------------------------
// Bounds
// -----------------------------------------------------------------------------

#[test]
fn test_add_keeps_every_resource_in_bounds() {
    let mut regulator = regulator();

    for delta in [-1000.0, -1.0, 0.0, 0.5, 1.0, 1000.0, f32::NAN] {
        regulator.add_stamina(delta);
        regulator.add_fullness(delta);
        regulator.add_happiness(delta, false);

        for kind in [StatKind::Stamina, StatKind::Fullness, StatKind::Happiness] {
            let res = regulator.resource(kind);
            assert!(
                res.min <= res.current && res.current <= res.max,
                "{:?} out of bounds after adding {}",
                kind,
                delta
            );
        }
    }
}

#[test]
fn test_setters_clamp_silently() {
    let mut regulator = regulator();
    regulator.set_stamina(250.0);
    regulator.set_breath(-3.0);
    regulator.set_fullness(1e9);
    regulator.set_happiness(-1.0);

    assert_eq!(regulator.stamina().current, 100.0);
    assert_eq!(regulator.breath().current, 0.0);
    assert_eq!(regulator.fullness().current, 100.0);
    assert_eq!(regulator.happiness().current, 0.0);
}

#[test]
fn test_can_afford_stamina_cost_at_exact_value() {
    let mut regulator = regulator();
    regulator.set_stamina(42.5);

    assert!(regulator.can_afford_stamina_cost(42.5));
    assert!(!regulator.can_afford_stamina_cost(42.51));
    assert_eq!(regulator.stamina().current, 42.5);
}

// -----------------------------------------------------------------------------
// Sprint and stamina
// -----------------------------------------------------------------------------

#[test]
fn test_sprint_drains_stamina_to_zero_then_locks_sprint() {
    let mut regulator = regulator();
    assert!(regulator.sprint());

    regulator.tick(1.0);
    assert_eq!(regulator.stamina().current, 90.0);
    assert!(regulator.is_sprinting());

    for _ in 0..9 {
        regulator.tick(1.0);
    }
    assert_eq!(regulator.stamina().current, 0.0);
    assert!(!regulator.is_sprinting());
    assert!(!regulator.gate().sprint_allowed);
    assert!(!regulator.sprint());
}

#[test]
fn test_stop_sprinting_refills_at_fill_rate_up_to_max() {
    let mut regulator = regulator();
    regulator.sprint();
    regulator.tick(5.0);
    assert_eq!(regulator.stamina().current, 50.0);

    regulator.stop_sprinting();
    regulator.tick(1.0);
    assert_eq!(regulator.stamina().current, 55.0);

    for _ in 0..20 {
        regulator.tick(1.0);
        assert!(regulator.stamina().current <= 100.0);
    }
    assert_eq!(regulator.stamina().current, 100.0);
    assert_eq!(
        regulator.resource_state(StatKind::Stamina),
        ResourceState::IdleAtBound
    );
}

#[test]
fn test_sprint_requires_unlock_and_unblocked_input() {
    let mut locked = ResourceRegulator::default();
    assert!(!locked.sprint());
    locked.set_sprint_unlocked(true);
    assert!(locked.sprint());

    let mut regulator = regulator();
    regulator.set_input_blocked(true);
    assert!(!regulator.sprint());

    regulator.set_input_blocked(false);
    assert!(regulator.sprint());
    regulator.set_input_blocked(true);
    assert!(!regulator.is_sprinting());
}

#[test]
fn test_sprint_needs_threshold_stamina() {
    let mut regulator = regulator();
    regulator.set_stamina(9.0);
    assert!(!regulator.sprint());
    regulator.set_stamina(10.0);
    assert!(regulator.sprint());
}

#[test]
fn test_drain_rate_adjustment_speeds_up_drain() {
    let mut regulator = regulator();
    regulator.add_to_stamina_drain_rate(5.0);
    regulator.sprint();
    regulator.tick(1.0);
    assert_eq!(regulator.stamina().current, 85.0);
}

#[test]
fn test_exhaustion_blocks_jump_until_recovery() {
    let mut regulator = regulator();
    regulator.sprint();
    regulator.tick(10.0);
    assert!(regulator.is_exhausted());
    assert!(!regulator.gate().jump_allowed);
    assert!(!regulator.try_jump());

    regulator.tick(2.0);
    assert_eq!(regulator.stamina().current, 10.0);
    assert!(regulator.is_exhausted());
    assert!(!regulator.gate().jump_allowed);

    regulator.tick(2.0);
    assert_eq!(regulator.stamina().current, 20.0);
    assert!(!regulator.is_exhausted());
    assert!(regulator.try_jump());
}

#[test]
fn test_sprint_allowed_while_exhausted_once_threshold_is_affordable() {
    let mut regulator = regulator();
    assert!(regulator.sprint());
    regulator.tick(10.0);
    assert_eq!(regulator.stamina().current, 0.0);
    assert!(!regulator.is_sprinting());
    assert!(!regulator.sprint());

    regulator.tick(3.0);
    assert_eq!(regulator.stamina().current, 15.0);
    assert!(regulator.is_exhausted());
    assert!(regulator.can_afford_stamina_cost(10.0));
    assert!(regulator.gate().sprint_allowed);
    assert!(!regulator.gate().jump_allowed);
    assert!(regulator.sprint());
}

#[test]
fn test_dash_consumes_its_cost() {
    let mut regulator = regulator();
    assert!(regulator.try_dash());
    assert_eq!(regulator.stamina().current, 75.0);

    regulator.set_stamina(20.0);
    assert!(!regulator.gate().dash_allowed);
    assert!(!regulator.try_dash());
    assert_eq!(regulator.stamina().current, 20.0);
}

#[test]
fn test_restore_stamina_boosts_fill_until_full() {
    let mut regulator = regulator();
    regulator.set_stamina(50.0);
    regulator.restore_stamina();
    assert!(regulator.is_resting());

    regulator.tick(1.0);
    assert_eq!(regulator.stamina().current, 75.0);

    regulator.tick(1.0);
    assert_eq!(regulator.stamina().current, 100.0);
    assert!(!regulator.is_resting());
    assert_eq!(regulator.stamina().fill_rate, 5.0);
}

#[test]
fn test_sprinting_cancels_rest() {
    let mut regulator = regulator();
    regulator.set_stamina(50.0);
    regulator.restore_stamina();
    assert!(regulator.sprint());
    assert!(!regulator.is_resting());
    assert_eq!(regulator.stamina().fill_rate, 5.0);
}

// -----------------------------------------------------------------------------
// Breath
// -----------------------------------------------------------------------------

#[test]
fn test_breath_exhaustion_dies_exactly_once() {
    let mut regulator = regulator();
    regulator.change_breath(true);

    regulator.tick(1.0);
    assert_eq!(regulator.breath().current, 50.0);
    assert!(!regulator.is_dead());

    regulator.tick(1.0);
    assert_eq!(regulator.breath().current, 0.0);
    assert!(regulator.is_dead());

    for _ in 0..5 {
        regulator.tick(1.0);
        assert_eq!(regulator.breath().current, 0.0);
    }

    let events = regulator.drain_events();
    assert_eq!(count(&events, StatEvent::Died), 1);
    assert_eq!(regulator.gate(), super::AbilityGate::default());
}

#[test]
fn test_breath_refills_when_not_draining() {
    let mut regulator = regulator();
    regulator.set_breath(20.0);
    regulator.change_breath(false);
    regulator.tick(0.5);
    assert_eq!(regulator.breath().current, 70.0);
    assert_eq!(
        regulator.resource_state(StatKind::Breath),
        ResourceState::Filling
    );
}

#[test]
fn test_revive_restores_resources_and_keeps_level() {
    let mut regulator = regulator();
    regulator.add_happiness(100.0, false);
    regulator.sprint();
    regulator.change_breath(true);
    regulator.tick(2.0);
    assert!(regulator.is_dead());
    assert!(!regulator.is_sprinting());

    regulator.revive();
    assert!(!regulator.is_dead());
    assert!(!regulator.is_breath_draining());
    assert_eq!(regulator.breath().current, 100.0);
    assert_eq!(regulator.stamina().current, 100.0);
    assert_eq!(regulator.level(), 2);
    assert!(regulator.sprint());
}

// -----------------------------------------------------------------------------
// Happiness, fullness and leveling
// -----------------------------------------------------------------------------

#[test]
fn test_reaching_threshold_levels_up_once() {
    let mut regulator = regulator();
    assert_eq!(regulator.happiness_required_for_this_level(), Some(100));

    regulator.add_happiness(100.0, false);
    assert_eq!(regulator.level(), 2);
    assert_eq!(regulator.perk_points(), 1);
    assert_eq!(regulator.happiness().current, 0.0);

    regulator.tick(1.0);
    regulator.tick(1.0);
    assert_eq!(regulator.level(), 2);
    assert_eq!(regulator.perk_points(), 1);
    assert_eq!(count(&regulator.drain_events(), StatEvent::LeveledUp), 1);
}

#[test]
fn test_multiplier_applies_only_when_requested() {
    let mut tuning = tuning();
    tuning.happiness.multiplier = 2.0;
    let mut regulator = ResourceRegulator::from_tuning(&tuning);

    regulator.add_happiness(30.0, true);
    assert_eq!(regulator.happiness().current, 60.0);
    regulator.add_happiness(30.0, false);
    assert_eq!(regulator.happiness().current, 90.0);
}

#[test]
fn test_large_gain_grants_one_level_per_tick() {
    let mut regulator = regulator();
    regulator.add_happiness(260.0, false);
    assert_eq!(regulator.level(), 2);
    assert_eq!(regulator.happiness().current, 160.0);

    regulator.tick(0.0);
    assert_eq!(regulator.level(), 3);
    assert_eq!(regulator.happiness().current, 10.0);

    regulator.tick(0.0);
    assert_eq!(regulator.level(), 3);
    assert_eq!(regulator.perk_points(), 2);
}

#[test]
fn test_no_level_past_max() {
    let mut tuning = tuning();
    tuning.leveling.max_level = 2;
    let mut regulator = ResourceRegulator::from_tuning(&tuning);

    regulator.add_happiness(500.0, false);
    regulator.tick(1.0);
    assert_eq!(regulator.level(), 2);
    assert_eq!(regulator.perk_points(), 1);
    assert_eq!(regulator.happiness().current, 400.0);
    assert_eq!(regulator.happiness_required_for_this_level(), None);
}

#[test]
fn test_direct_level_grant_leaves_happiness_alone() {
    let mut regulator = regulator();
    regulator.set_happiness(40.0);
    assert!(regulator.add_level_and_perk_point());
    assert_eq!(regulator.level(), 2);
    assert_eq!(regulator.happiness().current, 40.0);
}

#[test]
fn test_animated_gain_moves_toward_goal() {
    let mut tuning = tuning();
    tuning.happiness.animation_rate = 50.0;
    let mut regulator = ResourceRegulator::from_tuning(&tuning);

    regulator.add_happiness(100.0, false);
    assert!(regulator.is_happiness_changing());
    assert_eq!(regulator.happiness().current, 0.0);

    regulator.tick(1.0);
    assert_eq!(regulator.happiness().current, 50.0);
    assert_eq!(regulator.level(), 1);

    regulator.tick(1.0);
    assert!(!regulator.is_happiness_changing());
    assert_eq!(regulator.level(), 2);
    assert_eq!(regulator.happiness().current, 0.0);
}

#[test]
fn test_starving_drains_happiness() {
    let mut regulator = regulator();
    regulator.set_happiness(50.0);
    regulator.set_fullness(0.0);
    assert!(regulator.is_starving());

    regulator.tick(1.0);
    assert_eq!(regulator.happiness().current, 49.0);
    assert_eq!(
        regulator.resource_state(StatKind::Happiness),
        ResourceState::Draining
    );
}

#[test]
fn test_fullness_drains_with_hunger() {
    let mut regulator = regulator();
    regulator.tick(10.0);
    assert_eq!(regulator.fullness().current, 95.0);

    regulator.set_fullness_draining(false);
    regulator.tick(10.0);
    assert_eq!(regulator.fullness().current, 95.0);
}

// -----------------------------------------------------------------------------
// Notifications
// -----------------------------------------------------------------------------

#[test]
fn test_idle_tick_raises_nothing() {
    let mut regulator = regulator();
    regulator.set_fullness_draining(false);
    regulator.tick(1.0);
    assert!(regulator.drain_events().is_empty());
}

#[test]
fn test_setters_always_notify() {
    let mut regulator = regulator();
    regulator.set_stamina(100.0);
    regulator.set_breath(100.0);
    regulator.character_moved();

    assert_eq!(
        regulator.drain_events(),
        vec![
            StatEvent::StaminaChanged,
            StatEvent::BreathChanged,
            StatEvent::CharacterMoved,
        ]
    );
    assert!(regulator.drain_events().is_empty());
}

#[test]
fn test_callbacks_run_synchronously() {
    let mut regulator = regulator();
    let stamina_calls = Arc::new(AtomicUsize::new(0));
    let level_calls = Arc::new(AtomicUsize::new(0));

    let counter = Arc::clone(&stamina_calls);
    regulator.on(StatEvent::StaminaChanged, move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    let counter = Arc::clone(&level_calls);
    regulator.on(StatEvent::LeveledUp, move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    regulator.add_stamina(-10.0);
    assert_eq!(stamina_calls.load(Ordering::SeqCst), 1);

    regulator.add_happiness(100.0, false);
    assert_eq!(level_calls.load(Ordering::SeqCst), 1);
}

// -----------------------------------------------------------------------------
// Message bridge
// -----------------------------------------------------------------------------

#[derive(Resource, Default)]
struct Received {
    changed: Vec<StatKind>,
    levels: Vec<u32>,
    moved: usize,
    died: usize,
}

fn collect_messages(
    mut changed: MessageReader<StatChangedEvent>,
    mut leveled: MessageReader<LeveledUpEvent>,
    mut moved: MessageReader<CharacterMovedEvent>,
    mut died: MessageReader<CharacterDiedEvent>,
    mut received: ResMut<Received>,
) {
    received
        .changed
        .extend(changed.read().map(|event| event.stat));
    received
        .levels
        .extend(leveled.read().map(|event| event.level));
    received.moved += moved.read().count();
    received.died += died.read().count();
}

#[test]
fn test_forwarding_turns_notifications_into_messages() {
    let mut app = App::new();
    app.add_message::<StatChangedEvent>()
        .add_message::<LeveledUpEvent>()
        .add_message::<CharacterMovedEvent>()
        .add_message::<CharacterDiedEvent>()
        .init_resource::<Received>()
        .add_systems(Update, (forward_stat_events, collect_messages).chain());

    let mut regulator = regulator();
    regulator.add_happiness(260.0, false);
    regulator.check_for_level_up();
    regulator.character_moved();
    let entity = app.world_mut().spawn(regulator).id();

    app.update();

    let received = app.world().resource::<Received>();
    assert_eq!(received.levels, vec![2, 3]);
    assert_eq!(received.moved, 1);
    assert_eq!(received.died, 0);
    assert!(
        received
            .changed
            .iter()
            .all(|stat| *stat == StatKind::Happiness)
    );

    let regulator = app.world().get::<ResourceRegulator>(entity);
    assert!(regulator.is_some_and(|r| r.notifier().pending().is_empty()));
}
