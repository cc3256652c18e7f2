pub mod combat_tracker;
pub mod episode_controller;
pub mod episode_session;
pub mod exploration_memory;
pub mod reward;

pub use combat_tracker::{AttackEvent, CombatTracker};
pub use episode_controller::{EpisodeController, EpisodeDecision, EpisodeStatus};
pub use episode_session::{EpisodeSession, SessionStats, StepOutcome};
pub use exploration_memory::ExplorationMemory;
pub use reward::{RewardAggregator, RewardBreakdown, RewardCalculator, RewardSignal};
