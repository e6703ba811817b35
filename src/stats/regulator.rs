//! Stats domain: the per-character resource regulator.
//!
//! Owns stamina, breath, fullness and happiness, the level counter, and the
//! ability gate derived from them. The host calls [`ResourceRegulator::tick`]
//! once per frame and the mutators on discrete input events; every change is
//! reported through the regulator's [`StatNotifier`].

use bevy::prelude::*;
use serde::Serialize;

use crate::content::StatTuning;
use crate::stats::level::LevelState;
use crate::stats::notify::{StatEvent, StatNotifier};
use crate::stats::resource::{BoundedResource, ResourceState};

/// The four regulated resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StatKind {
    Stamina,
    Breath,
    Fullness,
    Happiness,
}

impl StatKind {
    pub const ALL: [StatKind; 4] = [
        StatKind::Stamina,
        StatKind::Breath,
        StatKind::Fullness,
        StatKind::Happiness,
    ];

    pub fn label(self) -> &'static str {
        match self {
            StatKind::Stamina => "Stamina",
            StatKind::Breath => "Breath",
            StatKind::Fullness => "Fullness",
            StatKind::Happiness => "Happiness",
        }
    }

    /// The resource a changed-notification refers to, if any.
    pub fn from_changed_event(event: StatEvent) -> Option<StatKind> {
        match event {
            StatEvent::StaminaChanged => Some(StatKind::Stamina),
            StatEvent::BreathChanged => Some(StatKind::Breath),
            StatEvent::FullnessChanged => Some(StatKind::Fullness),
            StatEvent::HappinessChanged => Some(StatKind::Happiness),
            StatEvent::LeveledUp | StatEvent::CharacterMoved | StatEvent::Died => None,
        }
    }
}

/// Which abilities the character may use right now.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AbilityGate {
    pub sprint_allowed: bool,
    pub jump_allowed: bool,
    pub dash_allowed: bool,
}

/// Explicit unlocks, independent of resource state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AbilityUnlocks {
    pub sprint: bool,
    pub jump: bool,
    pub dash: bool,
}

/// Numbers the regulator reads but never changes.
#[derive(Debug, Clone, PartialEq)]
struct RegulatorParams {
    stamina_fill_rate_default: f32,
    stamina_fill_multiplier: f32,
    breath_fill_rate_default: f32,
    sprint_threshold: f32,
    exhaustion_recovery: f32,
    jump_cost: f32,
    dash_cost: f32,
    happiness_multiplier: f32,
    happiness_animation_rate: f32,
}

/// Serializable view of the regulator, used by the HUD and dev tools.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatSnapshot {
    pub stamina: BoundedResource,
    pub breath: BoundedResource,
    pub fullness: BoundedResource,
    pub happiness: BoundedResource,
    pub level: LevelState,
    pub gate: AbilityGate,
    pub sprinting: bool,
    pub exhausted: bool,
    pub dead: bool,
}

#[derive(Component, Debug)]
pub struct ResourceRegulator {
    stamina: BoundedResource,
    breath: BoundedResource,
    fullness: BoundedResource,
    happiness: BoundedResource,
    levels: LevelState,
    unlocks: AbilityUnlocks,
    gate: AbilityGate,
    params: RegulatorParams,
    sprinting: bool,
    breath_draining: bool,
    fullness_draining: bool,
    happiness_is_changing: bool,
    happiness_goal: f32,
    input_blocked: bool,
    exhausted: bool,
    resting: bool,
    dead: bool,
    notifier: StatNotifier,
}

impl Default for ResourceRegulator {
    fn default() -> Self {
        Self::from_tuning(&StatTuning::default())
    }
}

impl ResourceRegulator {
    pub fn from_tuning(tuning: &StatTuning) -> Self {
        let stamina = BoundedResource::new(
            tuning.stamina.max,
            tuning.stamina.fill_rate_default,
            tuning.stamina.drain_rate,
        );
        let breath = BoundedResource::new(
            tuning.breath.max,
            tuning.breath.fill_rate_default,
            tuning.breath.drain_rate,
        );
        let fullness = BoundedResource::new(
            tuning.fullness.max,
            tuning.fullness.fill_rate,
            tuning.fullness.drain_rate,
        )
        .starting_at(tuning.fullness.start);
        let happiness = BoundedResource::new(
            tuning.happiness.max,
            tuning.happiness.fill_rate,
            tuning.happiness.drain_rate,
        )
        .starting_at(tuning.happiness.start);

        let mut regulator = Self {
            happiness_goal: happiness.current,
            stamina,
            breath,
            fullness,
            happiness,
            levels: LevelState::new(
                tuning.leveling.start_level,
                tuning.leveling.max_level,
                tuning.leveling.happiness_requirement_per_level.clone(),
            ),
            unlocks: AbilityUnlocks {
                sprint: tuning.abilities.unlocked_sprint,
                jump: tuning.abilities.jump_unlocked,
                dash: tuning.abilities.dash_unlocked,
            },
            gate: AbilityGate::default(),
            params: RegulatorParams {
                stamina_fill_rate_default: tuning.stamina.fill_rate_default,
                stamina_fill_multiplier: tuning.stamina.fill_multiplier,
                breath_fill_rate_default: tuning.breath.fill_rate_default,
                sprint_threshold: tuning.stamina.sprint_threshold,
                exhaustion_recovery: tuning.stamina.exhaustion_recovery,
                jump_cost: tuning.abilities.jump_cost,
                dash_cost: tuning.abilities.dash_cost,
                happiness_multiplier: tuning.happiness.multiplier,
                happiness_animation_rate: tuning.happiness.animation_rate,
            },
            sprinting: false,
            breath_draining: false,
            fullness_draining: tuning.fullness.drains_by_default,
            happiness_is_changing: false,
            input_blocked: tuning.abilities.input_blocked,
            exhausted: false,
            resting: false,
            dead: false,
            notifier: StatNotifier::default(),
        };
        regulator.refresh_gate();
        regulator
    }

    // ------------------------------------------------------------------
    // Read access
    // ------------------------------------------------------------------

    pub fn stamina(&self) -> &BoundedResource {
        &self.stamina
    }

    pub fn breath(&self) -> &BoundedResource {
        &self.breath
    }

    pub fn fullness(&self) -> &BoundedResource {
        &self.fullness
    }

    pub fn happiness(&self) -> &BoundedResource {
        &self.happiness
    }

    pub fn resource(&self, kind: StatKind) -> &BoundedResource {
        match kind {
            StatKind::Stamina => &self.stamina,
            StatKind::Breath => &self.breath,
            StatKind::Fullness => &self.fullness,
            StatKind::Happiness => &self.happiness,
        }
    }

    /// Whether `kind` is currently filling, draining, or pinned at a bound.
    pub fn resource_state(&self, kind: StatKind) -> ResourceState {
        let draining = match kind {
            StatKind::Stamina => self.sprinting,
            StatKind::Breath => self.breath_draining,
            StatKind::Fullness => self.fullness_draining,
            StatKind::Happiness => self.is_starving(),
        };
        self.resource(kind).state(draining)
    }

    pub fn levels(&self) -> &LevelState {
        &self.levels
    }

    pub fn level(&self) -> u32 {
        self.levels.level
    }

    pub fn perk_points(&self) -> u32 {
        self.levels.perk_points
    }

    pub fn gate(&self) -> AbilityGate {
        self.gate
    }

    pub fn unlocks(&self) -> AbilityUnlocks {
        self.unlocks
    }

    pub fn is_sprinting(&self) -> bool {
        self.sprinting
    }

    pub fn is_breath_draining(&self) -> bool {
        self.breath_draining
    }

    pub fn is_fullness_draining(&self) -> bool {
        self.fullness_draining
    }

    pub fn is_happiness_changing(&self) -> bool {
        self.happiness_is_changing
    }

    pub fn is_input_blocked(&self) -> bool {
        self.input_blocked
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }

    pub fn is_starving(&self) -> bool {
        self.fullness.is_at_min()
    }

    pub fn happiness_multiplier(&self) -> f32 {
        self.params.happiness_multiplier
    }

    pub fn snapshot(&self) -> StatSnapshot {
        StatSnapshot {
            stamina: self.stamina.clone(),
            breath: self.breath.clone(),
            fullness: self.fullness.clone(),
            happiness: self.happiness.clone(),
            level: self.levels.clone(),
            gate: self.gate,
            sprinting: self.sprinting,
            exhausted: self.exhausted,
            dead: self.dead,
        }
    }

    // ------------------------------------------------------------------
    // Notifications
    // ------------------------------------------------------------------

    /// Register a synchronous callback for `event`.
    pub fn on(&mut self, event: StatEvent, callback: impl FnMut() + Send + Sync + 'static) {
        self.notifier.on(event, callback);
    }

    pub fn notifier(&self) -> &StatNotifier {
        &self.notifier
    }

    /// Take the notifications queued since the last call.
    pub fn drain_events(&mut self) -> Vec<StatEvent> {
        self.notifier.drain()
    }

    pub fn character_moved(&mut self) {
        self.notifier.emit(StatEvent::CharacterMoved);
    }

    // ------------------------------------------------------------------
    // Direct mutators
    // ------------------------------------------------------------------

    pub fn set_stamina(&mut self, value: f32) {
        self.stamina.set(value);
        self.after_stamina_mutation();
    }

    pub fn add_stamina(&mut self, delta: f32) {
        self.stamina.add(delta);
        self.after_stamina_mutation();
    }

    pub fn set_breath(&mut self, value: f32) {
        self.breath.set(value);
        self.notifier.emit(StatEvent::BreathChanged);
    }

    pub fn set_fullness(&mut self, value: f32) {
        self.fullness.set(value);
        self.notifier.emit(StatEvent::FullnessChanged);
    }

    pub fn add_fullness(&mut self, delta: f32) {
        self.fullness.add(delta);
        self.notifier.emit(StatEvent::FullnessChanged);
    }

    /// Overwrite happiness, cancelling any gain still being animated in.
    pub fn set_happiness(&mut self, value: f32) {
        self.happiness.set(value);
        self.happiness_goal = self.happiness.current;
        self.happiness_is_changing = false;
        self.notifier.emit(StatEvent::HappinessChanged);
    }

    /// Add `value` happiness, scaled by the happiness multiplier when asked.
    ///
    /// With a non-zero animation rate the gain becomes a goal the tick moves
    /// toward; otherwise it lands immediately and is checked for a level-up.
    pub fn add_happiness(&mut self, value: f32, use_multiplier: bool) {
        let scale = if use_multiplier {
            self.params.happiness_multiplier
        } else {
            1.0
        };
        let amount = value * scale;

        if self.params.happiness_animation_rate > 0.0 {
            let base = if self.happiness_is_changing {
                self.happiness_goal
            } else {
                self.happiness.current
            };
            let mut goal = self.happiness.clone();
            goal.set(base + amount);
            self.happiness_goal = goal.current;
            self.happiness_is_changing = self.happiness_goal != self.happiness.current;
            return;
        }

        self.happiness.add(amount);
        self.happiness_goal = self.happiness.current;
        self.notifier.emit(StatEvent::HappinessChanged);
        self.check_for_level_up();
    }

    pub fn can_afford_stamina_cost(&self, cost: f32) -> bool {
        self.stamina.can_afford(cost)
    }

    /// Additive change to the stamina drain rate. The rate itself is not clamped.
    pub fn add_to_stamina_drain_rate(&mut self, value: f32) {
        self.stamina.drain_rate += value;
    }

    /// Stop sprinting and regenerate at the boosted rate until stamina is full.
    pub fn restore_stamina(&mut self) {
        self.sprinting = false;
        if self.stamina.is_at_max() {
            self.refresh_gate();
            return;
        }
        self.resting = true;
        self.stamina.fill_rate =
            self.params.stamina_fill_rate_default * self.params.stamina_fill_multiplier;
        debug!(
            "Resting: stamina fill rate raised to {}",
            self.stamina.fill_rate
        );
        self.refresh_gate();
    }

    pub fn is_resting(&self) -> bool {
        self.resting
    }

    // ------------------------------------------------------------------
    // Abilities
    // ------------------------------------------------------------------

    /// Start sprinting if the gate allows it. Returns whether the character is sprinting.
    pub fn sprint(&mut self) -> bool {
        self.refresh_gate();
        if !self.gate.sprint_allowed {
            return false;
        }
        self.end_rest();
        if !self.sprinting {
            self.sprinting = true;
            debug!("Sprint started at stamina {}", self.stamina.current);
        }
        true
    }

    pub fn stop_sprinting(&mut self) {
        if self.sprinting {
            debug!("Sprint stopped at stamina {}", self.stamina.current);
        }
        self.sprinting = false;
        self.refresh_gate();
    }

    /// Consume the jump cost if jumping is allowed.
    pub fn try_jump(&mut self) -> bool {
        self.refresh_gate();
        if !self.gate.jump_allowed {
            return false;
        }
        if self.params.jump_cost > 0.0 {
            self.add_stamina(-self.params.jump_cost);
        }
        true
    }

    /// Consume the dash cost if dashing is allowed.
    pub fn try_dash(&mut self) -> bool {
        self.refresh_gate();
        if !self.gate.dash_allowed {
            return false;
        }
        if self.params.dash_cost > 0.0 {
            self.add_stamina(-self.params.dash_cost);
        }
        true
    }

    pub fn set_sprint_unlocked(&mut self, unlocked: bool) {
        self.unlocks.sprint = unlocked;
        self.refresh_gate();
    }

    pub fn set_jump_unlocked(&mut self, unlocked: bool) {
        self.unlocks.jump = unlocked;
        self.refresh_gate();
    }

    pub fn set_dash_unlocked(&mut self, unlocked: bool) {
        self.unlocks.dash = unlocked;
        self.refresh_gate();
    }

    /// Blocking input also ends a sprint.
    pub fn set_input_blocked(&mut self, blocked: bool) {
        self.input_blocked = blocked;
        self.refresh_gate();
    }

    /// Toggle whether breath drains (e.g. while inside smoke) or refills.
    pub fn change_breath(&mut self, is_draining: bool) {
        if self.breath_draining != is_draining {
            debug!("Breath draining: {}", is_draining);
        }
        self.breath_draining = is_draining;
    }

    pub fn set_fullness_draining(&mut self, is_draining: bool) {
        self.fullness_draining = is_draining;
    }

    // ------------------------------------------------------------------
    // Leveling
    // ------------------------------------------------------------------

    pub fn happiness_required_for_this_level(&self) -> Option<u32> {
        self.levels.requirement_for_current_level()
    }

    /// Grant at most one level if happiness covers the current requirement.
    ///
    /// The requirement is subtracted from happiness so any excess carries
    /// into the next level; further levels wait for the next check.
    pub fn check_for_level_up(&mut self) -> bool {
        let Some(requirement) = self.levels.requirement_for_current_level() else {
            return false;
        };
        let requirement = requirement as f32;
        if self.happiness.current < requirement {
            return false;
        }

        self.happiness.add(-requirement);
        if self.happiness_is_changing {
            self.happiness_goal = (self.happiness_goal - requirement).max(self.happiness.min);
        } else {
            self.happiness_goal = self.happiness.current;
        }
        self.notifier.emit(StatEvent::HappinessChanged);
        self.add_level_and_perk_point()
    }

    /// Advance one level and grant a perk point without touching happiness.
    pub fn add_level_and_perk_point(&mut self) -> bool {
        if !self.levels.add_level_and_perk_point() {
            return false;
        }
        info!(
            "Leveled up to {} ({} perk points)",
            self.levels.level, self.levels.perk_points
        );
        self.notifier.emit(StatEvent::LeveledUp);
        true
    }

    // ------------------------------------------------------------------
    // Per-tick regulation
    // ------------------------------------------------------------------

    /// Advance every resource by one frame.
    pub fn tick(&mut self, delta_seconds: f32) {
        let dt = if delta_seconds.is_finite() {
            delta_seconds.max(0.0)
        } else {
            0.0
        };
        self.check_stamina(dt);
        self.check_breath(dt);
        self.check_fullness(dt);
        self.check_happiness(dt);
        self.refresh_gate();
    }

    pub fn check_stamina(&mut self, delta_seconds: f32) {
        let outcome = self.stamina.step(self.sprinting, delta_seconds);
        if outcome.reached_min {
            debug!("Stamina depleted");
        }
        if self.sprinting && self.stamina.is_at_min() {
            self.sprinting = false;
            debug!("Sprint stopped at empty stamina");
        }
        if self.resting && self.stamina.is_at_max() {
            if outcome.reached_max {
                debug!("Rest complete, stamina fill rate back to default");
            }
            self.end_rest();
        }
        if outcome.changed {
            self.notifier.emit(StatEvent::StaminaChanged);
        }
        self.refresh_gate();
    }

    pub fn check_breath(&mut self, delta_seconds: f32) {
        let outcome = self.breath.step(self.breath_draining, delta_seconds);
        if outcome.changed {
            self.notifier.emit(StatEvent::BreathChanged);
        }
        if self.breath_draining && self.breath.is_at_min() && !self.dead {
            self.dead = true;
            self.sprinting = false;
            info!("Breath exhausted, character died");
            self.notifier.emit(StatEvent::Died);
            self.refresh_gate();
        }
    }

    pub fn check_fullness(&mut self, delta_seconds: f32) {
        let outcome = self.fullness.step(self.fullness_draining, delta_seconds);
        if outcome.changed {
            self.notifier.emit(StatEvent::FullnessChanged);
        }
    }

    pub fn check_happiness(&mut self, delta_seconds: f32) {
        let mut changed = false;

        if self.happiness_is_changing {
            let remaining = self.happiness_goal - self.happiness.current;
            let step = self.params.happiness_animation_rate * delta_seconds;
            if remaining.abs() <= step {
                changed |= self.happiness.set(self.happiness_goal);
                self.happiness_is_changing = false;
            } else {
                changed |= self.happiness.add(step * remaining.signum());
            }
        } else {
            changed |= self.happiness.step(self.is_starving(), delta_seconds).changed;
            self.happiness_goal = self.happiness.current;
        }

        if changed {
            self.notifier.emit(StatEvent::HappinessChanged);
        }
        self.check_for_level_up();
    }

    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    /// Bring a dead character back with full stamina, breath and fullness.
    /// Level, perks and happiness are kept.
    pub fn revive(&mut self) {
        self.dead = false;
        self.sprinting = false;
        self.breath_draining = false;
        self.exhausted = false;
        self.end_rest();
        self.breath.fill_rate = self.params.breath_fill_rate_default;
        self.stamina.fill_to_max();
        self.breath.fill_to_max();
        self.fullness.fill_to_max();
        info!("Character revived at level {}", self.levels.level);
        self.notifier.emit(StatEvent::StaminaChanged);
        self.notifier.emit(StatEvent::BreathChanged);
        self.notifier.emit(StatEvent::FullnessChanged);
        self.refresh_gate();
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn after_stamina_mutation(&mut self) {
        if self.sprinting && self.stamina.is_at_min() {
            self.sprinting = false;
        }
        if self.resting && self.stamina.is_at_max() {
            self.end_rest();
        }
        self.notifier.emit(StatEvent::StaminaChanged);
        self.refresh_gate();
    }

    fn end_rest(&mut self) {
        self.resting = false;
        self.stamina.fill_rate = self.params.stamina_fill_rate_default;
    }

    /// Re-derive exhaustion and the ability gate from current state.
    fn refresh_gate(&mut self) {
        if self.stamina.is_at_min() {
            if !self.exhausted {
                debug!("Stamina exhausted");
            }
            self.exhausted = true;
        } else if self.exhausted
            && (self.stamina.current >= self.params.exhaustion_recovery
                || self.stamina.is_at_max())
        {
            self.exhausted = false;
        }

        let usable = !self.input_blocked && !self.dead;
        if !usable {
            self.sprinting = false;
        }

        self.gate = AbilityGate {
            sprint_allowed: self.unlocks.sprint
                && usable
                && self.stamina.can_afford(self.params.sprint_threshold),
            jump_allowed: self.unlocks.jump
                && usable
                && !self.exhausted
                && self.stamina.can_afford(self.params.jump_cost),
            dash_allowed: self.unlocks.dash
                && usable
                && self.stamina.can_afford(self.params.dash_cost),
        };
    }
}
