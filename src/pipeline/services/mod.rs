pub mod learning;

pub use learning::{EpisodeSession, RewardAggregator};
