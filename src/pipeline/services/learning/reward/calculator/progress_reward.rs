use super::reward_calculator::{RewardCalculator, SignalContext};
use crate::config::RewardWeights;
use crate::pipeline::services::learning::reward::{RewardBreakdown, RewardSignal};
use crate::pipeline::types::GameStateSnapshot;

/// Reward calculator for party experience and Pokédex progress.
///
/// Only strict increases count. A counter that goes down means the episode was
/// reset underneath us and is never turned into a penalty.
pub struct ProgressRewardCalculator {
    xp_gain: f32,
    new_pokemon_seen: f32,
    new_pokemon_caught: f32,
}

impl Default for ProgressRewardCalculator {
    fn default() -> Self {
        Self::new(&RewardWeights::default())
    }
}

impl ProgressRewardCalculator {
    pub fn new(weights: &RewardWeights) -> Self {
        Self {
            xp_gain: weights.xp_gain,
            new_pokemon_seen: weights.new_pokemon_seen,
            new_pokemon_caught: weights.new_pokemon_caught,
        }
    }
}

impl RewardCalculator for ProgressRewardCalculator {
    fn calculate_reward(
        &self,
        previous: &GameStateSnapshot,
        current: &GameStateSnapshot,
        _context: &mut SignalContext<'_>,
        breakdown: &mut RewardBreakdown,
    ) {
        let (previous_xp, current_xp) = (previous.total_xp(), current.total_xp());
        if current_xp > previous_xp {
            tracing::debug!("Party gained xp: {} -> {}", previous_xp, current_xp);
            breakdown.record(RewardSignal::XpGain, self.xp_gain);
        }

        if current.seen_pokemon > previous.seen_pokemon {
            breakdown.record(RewardSignal::NewPokemonSeen, self.new_pokemon_seen);
        }

        if current.caught_pokemon > previous.caught_pokemon {
            tracing::info!(
                "Caught new pokemon: {} -> {}",
                previous.caught_pokemon,
                current.caught_pokemon
            );
            breakdown.record(RewardSignal::NewPokemonCaught, self.new_pokemon_caught);
        }
    }
}
