use super::reward_calculator::{RewardCalculator, SignalContext};
use crate::config::RewardWeights;
use crate::pipeline::services::learning::reward::{RewardBreakdown, RewardSignal};
use crate::pipeline::types::GameStateSnapshot;

/// Rewards walking somewhere new and punishes standing still.
pub struct NavigationRewardCalculator {
    novel_map: f32,
    novel_coordinate: f32,
    grass_contact: f32,
    stationary: f32,
}

impl Default for NavigationRewardCalculator {
    fn default() -> Self {
        Self::new(&RewardWeights::default())
    }
}

impl NavigationRewardCalculator {
    pub fn new(weights: &RewardWeights) -> Self {
        Self {
            novel_map: weights.novel_map,
            novel_coordinate: weights.novel_coordinate,
            grass_contact: weights.grass_contact,
            stationary: weights.stationary,
        }
    }
}

impl RewardCalculator for NavigationRewardCalculator {
    fn calculate_reward(
        &self,
        previous: &GameStateSnapshot,
        current: &GameStateSnapshot,
        context: &mut SignalContext<'_>,
        breakdown: &mut RewardBreakdown,
    ) {
        let location = &current.location;

        // The map goes first so a map change clears tile memory before the
        // new tile is checked.
        if context.memory.is_new_map(location.map_id) {
            tracing::info!(
                "New map reached: {} ({})",
                location.map_name,
                location.map_id
            );
            breakdown.record(RewardSignal::NovelMap, self.novel_map);
        }

        if context.memory.is_new_coordinate(location.x, location.y) {
            breakdown.record(RewardSignal::NovelCoordinate, self.novel_coordinate);
        }

        if current.on_grass {
            breakdown.record(RewardSignal::GrassContact, self.grass_contact);
        }

        // Waiting on dialog is forced, so it is not punished.
        if !current.in_dialog && location.same_tile(&previous.location) {
            breakdown.record(RewardSignal::Stationary, self.stationary);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CoordinateScope;
    use crate::pipeline::services::learning::combat_tracker::CombatTracker;
    use crate::pipeline::services::learning::exploration_memory::ExplorationMemory;
    use crate::pipeline::types::snapshot::tests::create_test_snapshot;

    fn run(
        calculator: &NavigationRewardCalculator,
        memory: &mut ExplorationMemory,
        previous: &GameStateSnapshot,
        current: &GameStateSnapshot,
    ) -> RewardBreakdown {
        let mut combat = CombatTracker::new();
        let mut context = SignalContext {
            memory,
            combat: &mut combat,
        };
        let mut breakdown = RewardBreakdown::new();
        calculator.calculate_reward(previous, current, &mut context, &mut breakdown);
        breakdown
    }

    #[test]
    fn test_new_map_and_tile() {
        let calculator = NavigationRewardCalculator::default();
        let mut memory = ExplorationMemory::new(CoordinateScope::PerMap);
        let previous = create_test_snapshot(0, 5, 5, vec![10]);
        let current = create_test_snapshot(12, 1, 1, vec![10]);

        let breakdown = run(&calculator, &mut memory, &previous, &current);
        assert_eq!(breakdown.get(RewardSignal::NovelMap), Some(3.0));
        assert_eq!(breakdown.get(RewardSignal::NovelCoordinate), Some(1.0));
        assert_eq!(breakdown.total(), 4.0);
    }

    #[test]
    fn test_stationary_outside_dialog() {
        let calculator = NavigationRewardCalculator::default();
        let mut memory = ExplorationMemory::new(CoordinateScope::PerMap);
        let snapshot = create_test_snapshot(0, 5, 5, vec![10]);
        run(&calculator, &mut memory, &snapshot, &snapshot);

        let breakdown = run(&calculator, &mut memory, &snapshot, &snapshot);
        assert_eq!(breakdown.get(RewardSignal::Stationary), Some(-0.1));
        assert_eq!(breakdown.total(), -0.1);
    }

    #[test]
    fn test_stationary_in_dialog_is_free() {
        let calculator = NavigationRewardCalculator::default();
        let mut memory = ExplorationMemory::new(CoordinateScope::PerMap);
        let mut snapshot = create_test_snapshot(0, 5, 5, vec![10]);
        run(&calculator, &mut memory, &snapshot, &snapshot);

        snapshot.in_dialog = true;
        let breakdown = run(&calculator, &mut memory, &snapshot, &snapshot);
        assert!(breakdown.is_empty());
    }

    #[test]
    fn test_grass_fires_every_step() {
        let calculator = NavigationRewardCalculator::default();
        let mut memory = ExplorationMemory::new(CoordinateScope::PerMap);
        let previous = create_test_snapshot(0, 5, 5, vec![10]);
        let mut current = create_test_snapshot(0, 5, 6, vec![10]);
        current.on_grass = true;

        run(&calculator, &mut memory, &previous, &current);
        let breakdown = run(&calculator, &mut memory, &current, &current);
        assert_eq!(breakdown.get(RewardSignal::GrassContact), Some(0.5));
        assert_eq!(breakdown.get(RewardSignal::Stationary), Some(-0.1));
        assert!(!breakdown.contains(RewardSignal::NovelCoordinate));
    }

    #[test]
    fn test_disabled_signal_still_records_visit() {
        let weights = RewardWeights {
            novel_coordinate: 0.0,
            ..RewardWeights::default()
        };
        let calculator = NavigationRewardCalculator::new(&weights);
        let mut memory = ExplorationMemory::new(CoordinateScope::PerMap);
        let previous = create_test_snapshot(0, 5, 5, vec![10]);
        let current = create_test_snapshot(0, 6, 5, vec![10]);

        let breakdown = run(&calculator, &mut memory, &previous, &current);
        assert!(!breakdown.contains(RewardSignal::NovelCoordinate));
        assert_eq!(memory.visited_coordinate_count(), 1);
    }
}
