use serde::{Deserialize, Serialize};

use crate::pipeline::services::learning::exploration_memory::ExplorationMemory;
use crate::pipeline::types::GameStateSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EpisodeStatus {
    Running,
    /// A badge was earned since the episode started.
    Done,
    /// The step budget ran out.
    Truncated,
}

impl EpisodeStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Truncated)
    }
}

/// Termination flags for one step, as handed to the training loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EpisodeDecision {
    pub done: bool,
    pub truncated: bool,
}

impl EpisodeDecision {
    pub fn status(&self) -> EpisodeStatus {
        if self.done {
            EpisodeStatus::Done
        } else if self.truncated {
            EpisodeStatus::Truncated
        } else {
            EpisodeStatus::Running
        }
    }
}

pub struct EpisodeController {
    max_steps: u32,
    step_count: u32,
    badges_at_episode_start: u32,
    status: EpisodeStatus,
}

impl EpisodeController {
    pub fn new(max_steps: u32, initial: &GameStateSnapshot) -> Self {
        Self {
            max_steps,
            step_count: 0,
            badges_at_episode_start: initial.badges,
            status: EpisodeStatus::Running,
        }
    }

    /// Starts a fresh episode from `initial`.
    pub fn begin(&mut self, initial: &GameStateSnapshot) {
        self.step_count = 0;
        self.badges_at_episode_start = initial.badges;
        self.status = EpisodeStatus::Running;
    }

    /// Counts the step and decides whether it ends the episode. Exploration
    /// memory is cleared on either boundary.
    pub fn evaluate(
        &mut self,
        current: &GameStateSnapshot,
        memory: &mut ExplorationMemory,
    ) -> EpisodeDecision {
        self.step_count += 1;

        let decision = EpisodeDecision {
            done: current.badges > self.badges_at_episode_start,
            truncated: self.step_count >= self.max_steps,
        };
        self.status = decision.status();

        match self.status {
            EpisodeStatus::Done => {
                tracing::info!(
                    "Episode done: badges {} -> {} after {} steps",
                    self.badges_at_episode_start,
                    current.badges,
                    self.step_count
                );
                memory.reset();
            }
            EpisodeStatus::Truncated => {
                tracing::info!("Episode truncated after {} steps", self.step_count);
                memory.reset();
            }
            EpisodeStatus::Running => {}
        }

        decision
    }

    pub fn status(&self) -> EpisodeStatus {
        self.status
    }

    pub fn step_count(&self) -> u32 {
        self.step_count
    }

    pub fn badges_at_episode_start(&self) -> u32 {
        self.badges_at_episode_start
    }
}
