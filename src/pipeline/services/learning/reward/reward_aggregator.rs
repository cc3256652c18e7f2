use crate::config::RewardWeights;
use crate::pipeline::services::learning::combat_tracker::CombatTracker;
use crate::pipeline::services::learning::exploration_memory::ExplorationMemory;
use crate::pipeline::services::learning::reward::calculator::{
    BattleRewardCalculator, NavigationRewardCalculator, ProgressRewardCalculator,
    RewardCalculator, SignalContext,
};
use crate::pipeline::services::learning::reward::RewardBreakdown;
use crate::pipeline::types::GameStateSnapshot;

/// Sums every shaping signal for one transition.
///
/// The result is not clipped or normalised; the training loop owns that.
pub struct RewardAggregator {
    calculators: Vec<Box<dyn RewardCalculator>>,
}

impl Default for RewardAggregator {
    fn default() -> Self {
        Self::new(&RewardWeights::default())
    }
}

impl RewardAggregator {
    pub fn new(weights: &RewardWeights) -> Self {
        Self {
            calculators: vec![
                Box::new(NavigationRewardCalculator::new(weights)),
                Box::new(BattleRewardCalculator::new(weights)),
                Box::new(ProgressRewardCalculator::new(weights)),
            ],
        }
    }

    /// Starts from an empty calculator list, for custom signal sets.
    pub fn empty() -> Self {
        Self {
            calculators: Vec::new(),
        }
    }

    pub fn with_calculator(mut self, calculator: Box<dyn RewardCalculator>) -> Self {
        self.calculators.push(calculator);
        self
    }

    pub fn aggregate(
        &self,
        previous: &GameStateSnapshot,
        current: &GameStateSnapshot,
        memory: &mut ExplorationMemory,
        combat: &mut CombatTracker,
    ) -> RewardBreakdown {
        let mut context = SignalContext { memory, combat };
        let mut breakdown = RewardBreakdown::new();
        for calculator in &self.calculators {
            calculator.calculate_reward(previous, current, &mut context, &mut breakdown);
        }
        breakdown
    }
}
