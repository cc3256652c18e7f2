use serde::{Deserialize, Serialize};

/// Enemy HP reported before the first battle reading of an episode.
pub const UNKNOWN_ENEMY_HP: f32 = -1.0;

/// Scalar features the observation encoder appends to the screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObservationStats {
    pub badges: u32,
    /// Party level total, centred on a fresh six-member party at level 1.
    pub level_stat: f32,
    pub enemy_hp_fraction: f32,
    pub attack_streak: u32,
}

impl ObservationStats {
    pub fn level_stat(total_levels: u32) -> f32 {
        (total_levels as f32 - 6.0) / 5.0
    }

    pub fn to_vector(&self) -> Vec<f32> {
        vec![
            self.badges as f32,
            self.level_stat,
            self.enemy_hp_fraction,
            self.attack_streak as f32,
        ]
    }
}
