use serde::{Deserialize, Serialize};

/// Outcome of observing the opponent's HP for one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttackEvent {
    /// Enemy HP dropped; carries the streak length including this hit.
    Hit(u32),
    StreakBroken,
    NoEvent,
}

/// Follows the opponent's HP between steps to detect landed attacks.
#[derive(Debug, Clone, Default)]
pub struct CombatTracker {
    /// `None` until the first observation.
    last_enemy_hp_fraction: Option<f32>,
    consecutive_hits: u32,
}

impl CombatTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, new_enemy_hp_fraction: f32) -> AttackEvent {
        let hit = self
            .last_enemy_hp_fraction
            .is_some_and(|last| new_enemy_hp_fraction < last);

        let event = if hit {
            self.consecutive_hits += 1;
            AttackEvent::Hit(self.consecutive_hits)
        } else if self.consecutive_hits > 0 {
            self.consecutive_hits = 0;
            AttackEvent::StreakBroken
        } else {
            AttackEvent::NoEvent
        };

        self.last_enemy_hp_fraction = Some(new_enemy_hp_fraction);
        event
    }

    pub fn reset(&mut self) {
        self.last_enemy_hp_fraction = None;
        self.consecutive_hits = 0;
    }

    pub fn consecutive_hits(&self) -> u32 {
        self.consecutive_hits
    }

    pub fn last_enemy_hp_fraction(&self) -> Option<f32> {
        self.last_enemy_hp_fraction
    }
}
