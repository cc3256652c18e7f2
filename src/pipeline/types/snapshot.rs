use serde::{Deserialize, Serialize};

use crate::error::AppError;

pub type MapId = u8;

/// Largest party the game allows.
pub const MAX_PARTY_SIZE: usize = 6;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub map_id: MapId,
    #[serde(default)]
    pub map_name: String,
    pub x: i32,
    pub y: i32,
}

impl Location {
    /// Same map and tile, display name ignored.
    pub fn same_tile(&self, other: &Location) -> bool {
        self.map_id == other.map_id && self.x == other.x && self.y == other.y
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartyHp {
    pub current: Vec<u32>,
    pub max: Vec<u32>,
}

impl PartyHp {
    /// Fraction of the party's total HP remaining, 0 when the party has no HP pool.
    pub fn fraction(&self) -> f32 {
        let max: u32 = self.max.iter().sum();
        if max == 0 {
            return 0.0;
        }
        self.current.iter().sum::<u32>() as f32 / max as f32
    }
}

/// Everything the environment reads from the emulator in one step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub location: Location,
    pub badges: u32,
    pub levels: Vec<u32>,
    pub xp: Vec<u32>,
    #[serde(default)]
    pub seen_pokemon: u32,
    #[serde(default)]
    pub caught_pokemon: u32,
    #[serde(default)]
    pub hp: PartyHp,
    /// Current/max HP of the opponent, 0 when there is none or it fainted.
    #[serde(default)]
    pub enemy_hp_fraction: f32,
    #[serde(default)]
    pub on_grass: bool,
    #[serde(default)]
    pub in_dialog: bool,
}

impl GameStateSnapshot {
    /// Rejects snapshots the reward signals cannot interpret.
    ///
    /// An empty party is an error rather than a zero total: treating a missing
    /// `xp` reading as 0 would turn the next real reading into an XP gain.
    pub fn validate(&self) -> Result<(), AppError> {
        let party_size = self.xp.len();
        if party_size == 0 {
            return Err(AppError::InvalidSnapshot("xp is empty".to_string()));
        }
        if party_size > MAX_PARTY_SIZE {
            return Err(AppError::InvalidSnapshot(format!(
                "party of {} exceeds the maximum of {}",
                party_size, MAX_PARTY_SIZE
            )));
        }
        if self.levels.len() != party_size {
            return Err(AppError::InvalidSnapshot(format!(
                "levels has {} entries but xp has {}",
                self.levels.len(),
                party_size
            )));
        }
        // HP is optional, but when present it must line up with the party.
        let hp_present = !self.hp.current.is_empty() || !self.hp.max.is_empty();
        if hp_present && (self.hp.current.len() != party_size || self.hp.max.len() != party_size)
        {
            return Err(AppError::InvalidSnapshot(format!(
                "hp has {}/{} entries for a party of {}",
                self.hp.current.len(),
                self.hp.max.len(),
                party_size
            )));
        }
        if !self.enemy_hp_fraction.is_finite() || !(0.0..=1.0).contains(&self.enemy_hp_fraction)
        {
            return Err(AppError::InvalidSnapshot(format!(
                "enemy hp fraction {} is outside [0, 1]",
                self.enemy_hp_fraction
            )));
        }
        Ok(())
    }

    pub fn total_xp(&self) -> u64 {
        self.xp.iter().map(|&xp| u64::from(xp)).sum()
    }

    pub fn total_levels(&self) -> u32 {
        self.levels.iter().sum()
    }
}
