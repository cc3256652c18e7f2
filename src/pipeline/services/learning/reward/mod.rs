pub mod calculator;
pub mod reward_aggregator;
pub mod reward_breakdown;

pub use calculator::{RewardCalculator, SignalContext};
pub use reward_aggregator::RewardAggregator;
pub use reward_breakdown::{RewardBreakdown, RewardSignal};
