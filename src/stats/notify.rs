//! Stats domain: change notifications and synchronous observer callbacks.

use serde::{Deserialize, Serialize};

const EVENT_COUNT: usize = 7;

/// Zero-argument signals meaning "re-read the corresponding value now".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatEvent {
    StaminaChanged,
    HappinessChanged,
    FullnessChanged,
    BreathChanged,
    LeveledUp,
    CharacterMoved,
    Died,
}

impl StatEvent {
    pub const ALL: [StatEvent; EVENT_COUNT] = [
        StatEvent::StaminaChanged,
        StatEvent::HappinessChanged,
        StatEvent::FullnessChanged,
        StatEvent::BreathChanged,
        StatEvent::LeveledUp,
        StatEvent::CharacterMoved,
        StatEvent::Died,
    ];

    fn slot(self) -> usize {
        match self {
            StatEvent::StaminaChanged => 0,
            StatEvent::HappinessChanged => 1,
            StatEvent::FullnessChanged => 2,
            StatEvent::BreathChanged => 3,
            StatEvent::LeveledUp => 4,
            StatEvent::CharacterMoved => 5,
            StatEvent::Died => 6,
        }
    }
}

pub type StatCallback = Box<dyn FnMut() + Send + Sync>;

/// One optional callback per event, plus a queue the host drains each frame.
#[derive(Default)]
pub struct StatNotifier {
    callbacks: [Option<StatCallback>; EVENT_COUNT],
    pending: Vec<StatEvent>,
}

impl StatNotifier {
    /// Register the callback for `event`, replacing any previous one.
    pub fn on(&mut self, event: StatEvent, callback: impl FnMut() + Send + Sync + 'static) {
        self.callbacks[event.slot()] = Some(Box::new(callback));
    }

    pub(crate) fn emit(&mut self, event: StatEvent) {
        if let Some(callback) = self.callbacks[event.slot()].as_mut() {
            callback();
        }
        self.pending.push(event);
    }

    /// Notifications raised since the last drain, in emission order.
    pub fn drain(&mut self) -> Vec<StatEvent> {
        std::mem::take(&mut self.pending)
    }

    pub fn pending(&self) -> &[StatEvent] {
        &self.pending
    }
}

impl std::fmt::Debug for StatNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let registered: Vec<StatEvent> = StatEvent::ALL
            .into_iter()
            .filter(|event| self.callbacks[event.slot()].is_some())
            .collect();
        f.debug_struct("StatNotifier")
            .field("registered", &registered)
            .field("pending", &self.pending)
            .finish()
    }
}
