//! Stats domain: level and perk point progression.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelState {
    pub level: u32,
    pub max_level: u32,
    pub perk_points: u32,
    /// Happiness needed to leave level `n` sits at index `n - 1`.
    pub happiness_requirement_per_level: Vec<u32>,
}

impl Default for LevelState {
    fn default() -> Self {
        Self::new(1, 10, vec![100, 150, 200, 300, 400, 500, 650, 800, 1000])
    }
}

impl LevelState {
    /// Build a level state, pulling `level` into `1..=max_level`.
    pub fn new(level: u32, max_level: u32, requirements: Vec<u32>) -> Self {
        let max_level = max_level.max(1);
        Self {
            level: level.max(1).min(max_level),
            max_level,
            perk_points: 0,
            happiness_requirement_per_level: requirements,
        }
    }

    pub fn is_max_level(&self) -> bool {
        self.level >= self.max_level
    }

    /// Happiness required to leave the current level.
    ///
    /// Levels past the end of the table reuse its last entry. `None` when
    /// the table is empty or the character is at max level.
    pub fn requirement_for_current_level(&self) -> Option<u32> {
        if self.is_max_level() {
            return None;
        }
        let index = (self.level - 1) as usize;
        self.happiness_requirement_per_level
            .get(index)
            .or_else(|| self.happiness_requirement_per_level.last())
            .copied()
    }

    /// Advance one level and grant one perk point. No-op at max level.
    pub fn add_level_and_perk_point(&mut self) -> bool {
        if self.is_max_level() {
            return false;
        }
        self.level += 1;
        self.perk_points += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_is_pulled_into_range() {
        let state = LevelState::new(0, 5, vec![10]);
        assert_eq!(state.level, 1);
        let state = LevelState::new(9, 5, vec![10]);
        assert_eq!(state.level, 5);
    }

    #[test]
    fn test_requirement_reuses_last_entry() {
        let mut state = LevelState::new(1, 5, vec![10, 20]);
        assert_eq!(state.requirement_for_current_level(), Some(10));
        state.level = 2;
        assert_eq!(state.requirement_for_current_level(), Some(20));
        state.level = 4;
        assert_eq!(state.requirement_for_current_level(), Some(20));
        state.level = 5;
        assert_eq!(state.requirement_for_current_level(), None);
    }

    #[test]
    fn test_empty_table_disables_leveling() {
        let state = LevelState::new(1, 5, Vec::new());
        assert_eq!(state.requirement_for_current_level(), None);
    }

    #[test]
    fn test_add_level_stops_at_max() {
        let mut state = LevelState::new(1, 2, vec![10]);
        assert!(state.add_level_and_perk_point());
        assert!(!state.add_level_and_perk_point());
        assert_eq!(state.level, 2);
        assert_eq!(state.perk_points, 1);
    }
}
