pub mod services;
pub mod types;

pub use services::{EpisodeSession, RewardAggregator};
pub use types::{GameStateSnapshot, Location, ObservationStats, PartyHp};
