use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::Configuration;
use crate::error::AppError;
use crate::pipeline::services::learning::combat_tracker::CombatTracker;
use crate::pipeline::services::learning::episode_controller::{EpisodeController, EpisodeStatus};
use crate::pipeline::services::learning::exploration_memory::ExplorationMemory;
use crate::pipeline::services::learning::reward::{RewardAggregator, RewardBreakdown};
use crate::pipeline::types::{GameStateSnapshot, ObservationStats, UNKNOWN_ENEMY_HP};

/// What one step hands back to the training loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepOutcome {
    pub episode_id: Uuid,
    pub step: u32,
    pub reward: f32,
    pub breakdown: RewardBreakdown,
    pub done: bool,
    pub truncated: bool,
    pub status: EpisodeStatus,
    pub timestamp_ms: i64,
}

#[derive(Clone, Debug)]
pub struct SessionStats {
    pub episodes_completed: usize,
    pub total_steps: usize,
    pub episode_return: f32,
}

/// All reward and episode state for one environment instance.
///
/// Vectorised training runs one session per environment; nothing in here is
/// shared between sessions.
pub struct EpisodeSession {
    episode_id: Uuid,
    memory: ExplorationMemory,
    combat: CombatTracker,
    controller: EpisodeController,
    aggregator: RewardAggregator,
    previous: GameStateSnapshot,
    episode_return: f32,
    episodes_completed: usize,
    total_steps: usize,
}

impl EpisodeSession {
    pub fn new(configuration: &Configuration, initial: GameStateSnapshot) -> Result<Self, AppError> {
        configuration.validate()?;
        initial.validate()?;

        let mut session = Self {
            episode_id: Uuid::new_v4(),
            memory: ExplorationMemory::new(configuration.episode.coordinate_scope),
            combat: CombatTracker::new(),
            controller: EpisodeController::new(configuration.episode.max_steps, &initial),
            aggregator: RewardAggregator::new(&configuration.reward),
            previous: initial.clone(),
            episode_return: 0.0,
            episodes_completed: 0,
            total_steps: 0,
        };
        session.begin_episode(initial);
        Ok(session)
    }

    /// Restarts the episode from `initial`, e.g. after a save state was reloaded.
    pub fn reset(&mut self, initial: GameStateSnapshot) -> Result<(), AppError> {
        initial.validate()?;
        // A terminal step already cleared the memory at its boundary.
        if !self.controller.status().is_terminal() {
            self.memory.reset();
        }
        self.begin_episode(initial);
        Ok(())
    }

    pub fn step(&mut self, current: GameStateSnapshot) -> Result<StepOutcome, AppError> {
        current.validate()?;

        if self.controller.status().is_terminal() {
            let initial = self.previous.clone();
            self.begin_episode(initial);
        }

        let breakdown =
            self.aggregator
                .aggregate(&self.previous, &current, &mut self.memory, &mut self.combat);
        let decision = self.controller.evaluate(&current, &mut self.memory);

        let reward = breakdown.total();
        self.episode_return += reward;
        self.total_steps += 1;

        if decision.status().is_terminal() {
            self.episodes_completed += 1;
            tracing::info!(
                "Episode {} finished ({:?}): return {:.2} over {} steps",
                self.episode_id,
                decision.status(),
                self.episode_return,
                self.controller.step_count()
            );
        }

        self.previous = current;

        Ok(StepOutcome {
            episode_id: self.episode_id,
            step: self.controller.step_count(),
            reward,
            breakdown,
            done: decision.done,
            truncated: decision.truncated,
            status: decision.status(),
            timestamp_ms: Utc::now().timestamp_millis(),
        })
    }

    pub fn observation(&self) -> ObservationStats {
        ObservationStats {
            badges: self.previous.badges,
            level_stat: ObservationStats::level_stat(self.previous.total_levels()),
            enemy_hp_fraction: self
                .combat
                .last_enemy_hp_fraction()
                .unwrap_or(UNKNOWN_ENEMY_HP),
            attack_streak: self.combat.consecutive_hits(),
        }
    }

    pub fn episode_id(&self) -> Uuid {
        self.episode_id
    }

    pub fn status(&self) -> EpisodeStatus {
        self.controller.status()
    }

    pub fn step_count(&self) -> u32 {
        self.controller.step_count()
    }

    pub fn memory(&self) -> &ExplorationMemory {
        &self.memory
    }

    pub fn get_stats(&self) -> SessionStats {
        SessionStats {
            episodes_completed: self.episodes_completed,
            total_steps: self.total_steps,
            episode_return: self.episode_return,
        }
    }

    /// Expects exploration memory to be empty already.
    fn begin_episode(&mut self, initial: GameStateSnapshot) {
        self.episode_id = Uuid::new_v4();
        self.combat.reset();
        self.controller.begin(&initial);
        self.episode_return = 0.0;

        // The starting tile is where the agent already is, not a discovery.
        self.memory.is_new_map(initial.location.map_id);
        self.memory
            .is_new_coordinate(initial.location.x, initial.location.y);

        tracing::info!(
            "Episode {} started on {} ({}) with {} badges",
            self.episode_id,
            initial.location.map_name,
            initial.location.map_id,
            initial.badges
        );
        self.previous = initial;
    }
}
