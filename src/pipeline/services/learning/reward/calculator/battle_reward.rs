use super::reward_calculator::{RewardCalculator, SignalContext};
use crate::config::RewardWeights;
use crate::pipeline::services::learning::combat_tracker::AttackEvent;
use crate::pipeline::services::learning::reward::{RewardBreakdown, RewardSignal};
use crate::pipeline::types::GameStateSnapshot;

/// Rewards sustained attacking within one encounter.
///
/// Battles are drawn as the dialog overlay, so the opponent's HP is only
/// followed while dialog is up. Outside dialog the tracker is left untouched
/// and keeps its last reading for when the battle screen returns.
pub struct BattleRewardCalculator {
    combat_hit: f32,
    streak_broken: f32,
}

impl Default for BattleRewardCalculator {
    fn default() -> Self {
        Self::new(&RewardWeights::default())
    }
}

impl BattleRewardCalculator {
    pub fn new(weights: &RewardWeights) -> Self {
        Self {
            combat_hit: weights.combat_hit,
            streak_broken: weights.streak_broken,
        }
    }

    fn hit_reward(&self, streak: u32) -> f32 {
        let streak = streak as f32;
        self.combat_hit * streak * streak
    }
}

impl RewardCalculator for BattleRewardCalculator {
    fn calculate_reward(
        &self,
        _previous: &GameStateSnapshot,
        current: &GameStateSnapshot,
        context: &mut SignalContext<'_>,
        breakdown: &mut RewardBreakdown,
    ) {
        if !current.in_dialog {
            return;
        }

        match context.combat.observe(current.enemy_hp_fraction) {
            AttackEvent::Hit(streak) => {
                let reward = self.hit_reward(streak);
                tracing::debug!(
                    "Attack landed: enemy hp {:.2}, party hp {:.2}, streak {} = +{:.1}",
                    current.enemy_hp_fraction,
                    current.hp.fraction(),
                    streak,
                    reward
                );
                breakdown.record(RewardSignal::CombatHit, reward);
            }
            AttackEvent::StreakBroken => {
                tracing::debug!("Attack streak broken at enemy hp {:.2}", current.enemy_hp_fraction);
                breakdown.record(RewardSignal::StreakBroken, self.streak_broken);
            }
            AttackEvent::NoEvent => {}
        }
    }
}
