use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One row of the shaping table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RewardSignal {
    NovelMap,
    NovelCoordinate,
    GrassContact,
    Stationary,
    CombatHit,
    StreakBroken,
    XpGain,
    NewPokemonSeen,
    NewPokemonCaught,
}

/// Contribution of every signal that fired this step, in evaluation order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RewardBreakdown {
    components: IndexMap<RewardSignal, f32>,
}

impl RewardBreakdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a fired signal. Disabled (zero-weight) signals are left out.
    pub fn record(&mut self, signal: RewardSignal, contribution: f32) {
        if contribution != 0.0 {
            *self.components.entry(signal).or_insert(0.0) += contribution;
        }
    }

    pub fn get(&self, signal: RewardSignal) -> Option<f32> {
        self.components.get(&signal).copied()
    }

    pub fn contains(&self, signal: RewardSignal) -> bool {
        self.components.contains_key(&signal)
    }

    pub fn iter(&self) -> impl Iterator<Item = (RewardSignal, f32)> + '_ {
        self.components.iter().map(|(signal, value)| (*signal, *value))
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn total(&self) -> f32 {
        self.components.values().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_sums_components() {
        let mut breakdown = RewardBreakdown::new();
        breakdown.record(RewardSignal::NovelCoordinate, 1.0);
        breakdown.record(RewardSignal::XpGain, 20.0);
        breakdown.record(RewardSignal::Stationary, -0.5);
        assert_eq!(breakdown.total(), 20.5);
    }

    #[test]
    fn test_zero_contribution_is_not_recorded() {
        let mut breakdown = RewardBreakdown::new();
        breakdown.record(RewardSignal::GrassContact, 0.0);
        assert!(breakdown.is_empty());
        assert_eq!(breakdown.total(), 0.0);
    }

    #[test]
    fn test_serializes_in_evaluation_order() {
        let mut breakdown = RewardBreakdown::new();
        breakdown.record(RewardSignal::NovelMap, 3.0);
        breakdown.record(RewardSignal::NovelCoordinate, 1.0);
        let json = serde_json::to_string(&breakdown).expect("serializable");
        assert_eq!(json, r#"{"components":{"novel_map":3.0,"novel_coordinate":1.0}}"#);
    }
}
