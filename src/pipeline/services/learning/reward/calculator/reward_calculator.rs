use crate::pipeline::services::learning::combat_tracker::CombatTracker;
use crate::pipeline::services::learning::exploration_memory::ExplorationMemory;
use crate::pipeline::services::learning::reward::RewardBreakdown;
use crate::pipeline::types::GameStateSnapshot;

/// Per-episode state the signals read and update while they are evaluated.
pub struct SignalContext<'a> {
    pub memory: &'a mut ExplorationMemory,
    pub combat: &'a mut CombatTracker,
}

pub trait RewardCalculator: Send + Sync {
    fn calculate_reward(
        &self,
        previous: &GameStateSnapshot,
        current: &GameStateSnapshot,
        context: &mut SignalContext<'_>,
        breakdown: &mut RewardBreakdown,
    );
}
