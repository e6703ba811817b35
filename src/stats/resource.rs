//! Stats domain: clamped numeric counters with independent fill and drain rates.

use serde::{Deserialize, Serialize};

/// Which way a resource is moving on the current tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceState {
    Filling,
    Draining,
    /// Pinned at the bound it is being pushed toward.
    IdleAtBound,
}

/// Result of advancing a resource by one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepOutcome {
    pub changed: bool,
    /// The resource arrived at `min` on this step.
    pub reached_min: bool,
    /// The resource arrived at `max` on this step.
    pub reached_max: bool,
}

/// A bounded float resource (stamina, breath, happiness, fullness).
///
/// Every mutator clamps, so `min <= current <= max` holds after any call.
/// Clamping uses `max`/`min` rather than `f32::clamp` so an inconsistent
/// pair of bounds or a NaN input never panics; NaN settles on `min`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundedResource {
    pub current: f32,
    pub min: f32,
    pub max: f32,
    pub fill_rate: f32,
    pub drain_rate: f32,
}

impl BoundedResource {
    /// Create a full resource with a lower bound of zero.
    pub fn new(max: f32, fill_rate: f32, drain_rate: f32) -> Self {
        Self {
            current: max,
            min: 0.0,
            max,
            fill_rate,
            drain_rate,
        }
    }

    /// Same as [`BoundedResource::new`] but starting at `current`.
    pub fn starting_at(mut self, current: f32) -> Self {
        self.current = self.clamped(current);
        self
    }

    fn clamped(&self, value: f32) -> f32 {
        value.max(self.min).min(self.max).max(self.min)
    }

    /// Overwrite the value. Returns true if it changed.
    pub fn set(&mut self, value: f32) -> bool {
        let next = self.clamped(value);
        let changed = next != self.current;
        self.current = next;
        changed
    }

    /// Apply a signed delta. Returns true if the value changed.
    pub fn add(&mut self, delta: f32) -> bool {
        self.set(self.current + delta)
    }

    pub fn fill_to_max(&mut self) -> bool {
        self.set(self.max)
    }

    /// True when paying `cost` would leave the resource at or above `min`.
    pub fn can_afford(&self, cost: f32) -> bool {
        self.current - cost >= self.min
    }

    pub fn is_at_min(&self) -> bool {
        self.current <= self.min
    }

    pub fn is_at_max(&self) -> bool {
        self.current >= self.max
    }

    /// Current value as a fraction of the range, for HUD bars.
    pub fn fraction(&self) -> f32 {
        let span = self.max - self.min;
        if span <= 0.0 {
            return 0.0;
        }
        ((self.current - self.min) / span).max(0.0).min(1.0)
    }

    pub fn state(&self, draining: bool) -> ResourceState {
        match (draining, self.is_at_min(), self.is_at_max()) {
            (true, true, _) => ResourceState::IdleAtBound,
            (true, false, _) => ResourceState::Draining,
            (false, _, true) => ResourceState::IdleAtBound,
            (false, _, false) => ResourceState::Filling,
        }
    }

    /// Move toward `min` at `drain_rate` while draining, otherwise toward
    /// `max` at `fill_rate`.
    pub fn step(&mut self, draining: bool, delta_seconds: f32) -> StepOutcome {
        let rate = if draining {
            -self.drain_rate
        } else {
            self.fill_rate
        };
        self.step_at(rate, delta_seconds)
    }

    /// Same as [`BoundedResource::step`] with an explicit per-second rate.
    pub fn step_at(&mut self, rate_per_second: f32, delta_seconds: f32) -> StepOutcome {
        let rate = if rate_per_second.is_finite() {
            rate_per_second
        } else {
            0.0
        };
        self.step_by(rate * delta_seconds)
    }

    fn step_by(&mut self, delta: f32) -> StepOutcome {
        let was_at_min = self.is_at_min();
        let was_at_max = self.is_at_max();
        let changed = self.add(delta);
        StepOutcome {
            changed,
            reached_min: changed && !was_at_min && self.is_at_min(),
            reached_max: changed && !was_at_max && self.is_at_max(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_clamps_both_ways() {
        let mut res = BoundedResource::new(100.0, 5.0, 10.0);
        res.add(50.0);
        assert_eq!(res.current, 100.0);
        res.add(-250.0);
        assert_eq!(res.current, 0.0);
    }

    #[test]
    fn test_nan_settles_on_min() {
        let mut res = BoundedResource::new(100.0, 5.0, 10.0);
        res.set(f32::NAN);
        assert_eq!(res.current, 0.0);
    }

    #[test]
    fn test_inverted_bounds_do_not_panic() {
        let mut res = BoundedResource::new(10.0, 1.0, 1.0);
        res.min = 20.0;
        res.set(15.0);
        assert!(res.current >= res.min);
    }

    #[test]
    fn test_step_reports_reaching_min_once() {
        let mut res = BoundedResource::new(10.0, 0.0, 10.0);
        let first = res.step(true, 1.0);
        assert!(first.changed);
        assert!(first.reached_min);

        let second = res.step(true, 1.0);
        assert!(!second.changed);
        assert!(!second.reached_min);
    }

    #[test]
    fn test_state_transitions() {
        let mut res = BoundedResource::new(10.0, 1.0, 1.0);
        assert_eq!(res.state(false), ResourceState::IdleAtBound);
        assert_eq!(res.state(true), ResourceState::Draining);
        res.set(0.0);
        assert_eq!(res.state(true), ResourceState::IdleAtBound);
        assert_eq!(res.state(false), ResourceState::Filling);
    }
}
