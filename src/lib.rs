pub mod config;
pub mod coordinator;
pub mod error;
pub mod intake;
pub mod pipeline;

pub use crate::config::{Configuration, CoordinateScope, EpisodeSettings, RewardWeights};
pub use coordinator::{Coordinator, CoordinatorBuilder};
pub use error::AppError;

pub use intake::snapshot::{GameStateReader, JsonLinesSnapshotReader};
pub use pipeline::services::learning::{
    AttackEvent, CombatTracker, EpisodeController, EpisodeSession, EpisodeStatus,
    ExplorationMemory, RewardBreakdown, RewardSignal, StepOutcome,
};
pub use pipeline::types::{GameStateSnapshot, ObservationStats};
