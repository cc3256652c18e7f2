mod observation;
pub(crate) mod snapshot;

pub use observation::{ObservationStats, UNKNOWN_ENEMY_HP};
pub use snapshot::{GameStateSnapshot, Location, MapId, PartyHp, MAX_PARTY_SIZE};
