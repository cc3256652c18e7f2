pub mod battle_reward;
pub mod navigation_reward;
pub mod progress_reward;
pub mod reward_calculator;

pub use battle_reward::BattleRewardCalculator;
pub use navigation_reward::NavigationRewardCalculator;
pub use progress_reward::ProgressRewardCalculator;
pub use reward_calculator::{RewardCalculator, SignalContext};
