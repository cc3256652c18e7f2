use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Prefix for environment overrides, e.g. `POKEBOT__EPISODE__MAX_STEPS=4096`.
const ENV_PREFIX: &str = "POKEBOT";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    pub reward: RewardWeights,
    pub episode: EpisodeSettings,
}

/// Weight of every shaped reward signal. A weight of 0.0 disables the signal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewardWeights {
    pub novel_coordinate: f32,
    pub novel_map: f32,
    pub grass_contact: f32,
    pub xp_gain: f32,
    /// Scaled by the square of the current hit streak.
    pub combat_hit: f32,
    pub streak_broken: f32,
    pub stationary: f32,
    pub new_pokemon_seen: f32,
    pub new_pokemon_caught: f32,
}

impl Default for RewardWeights {
    fn default() -> Self {
        Self {
            novel_coordinate: 1.0,
            novel_map: 3.0,
            grass_contact: 0.5,
            xp_gain: 20.0,
            combat_hit: 5.0,
            streak_broken: -5.0,
            stationary: -0.1,
            new_pokemon_seen: 0.0,
            new_pokemon_caught: 0.0,
        }
    }
}

impl RewardWeights {
    fn named(&self) -> [(&'static str, f32); 9] {
        [
            ("novel_coordinate", self.novel_coordinate),
            ("novel_map", self.novel_map),
            ("grass_contact", self.grass_contact),
            ("xp_gain", self.xp_gain),
            ("combat_hit", self.combat_hit),
            ("streak_broken", self.streak_broken),
            ("stationary", self.stationary),
            ("new_pokemon_seen", self.new_pokemon_seen),
            ("new_pokemon_caught", self.new_pokemon_caught),
        ]
    }
}

/// How far coordinate novelty reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoordinateScope {
    /// Tiles are novel again every time the player enters a map.
    #[default]
    PerMap,
    /// Tiles stay visited for the whole episode, keyed by map and position.
    Global,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EpisodeSettings {
    /// Steps before an episode is truncated.
    pub max_steps: u32,
    pub coordinate_scope: CoordinateScope,
}

impl Default for EpisodeSettings {
    fn default() -> Self {
        Self {
            max_steps: 2048,
            coordinate_scope: CoordinateScope::PerMap,
        }
    }
}

impl Configuration {
    /// Battle-aware shaping used for the first-gym task.
    pub fn combat_aware() -> Self {
        Self::default()
    }

    /// Pure exploration: combat signals off, novelty weighted up, longer episodes.
    pub fn exploration_only() -> Self {
        Self {
            reward: RewardWeights {
                novel_coordinate: 2.0,
                novel_map: 10.0,
                grass_contact: 0.0,
                xp_gain: 10.0,
                combat_hit: 0.0,
                streak_broken: 0.0,
                stationary: -0.1,
                new_pokemon_seen: 0.8,
                new_pokemon_caught: 1.0,
            },
            episode: EpisodeSettings {
                max_steps: 5000,
                coordinate_scope: CoordinateScope::PerMap,
            },
        }
    }

    /// Layers an optional file and `POKEBOT__*` environment variables over the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, AppError> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        }
        let configuration: Configuration = builder
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?
            .try_deserialize()?;
        configuration.validate()?;
        Ok(configuration)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), AppError> {
        if self.episode.max_steps == 0 {
            return Err(AppError::InvalidConfiguration(
                "Max steps must be greater than 0".to_string(),
            ));
        }

        for (name, weight) in self.reward.named() {
            if !weight.is_finite() {
                return Err(AppError::InvalidConfiguration(format!(
                    "Reward weight {} must be finite, got {}",
                    name, weight
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let configuration = Configuration::default();
        assert!(configuration.validate().is_ok());
        assert_eq!(configuration.episode.max_steps, 2048);
        assert_eq!(configuration.reward.novel_map, 3.0);
    }

    #[test]
    fn test_presets_are_valid() {
        assert!(Configuration::combat_aware().validate().is_ok());
        let exploration = Configuration::exploration_only();
        assert!(exploration.validate().is_ok());
        assert_eq!(exploration.reward.combat_hit, 0.0);
    }

    #[test]
    fn test_zero_max_steps_is_rejected() {
        let mut configuration = Configuration::default();
        configuration.episode.max_steps = 0;
        assert!(matches!(
            configuration.validate(),
            Err(AppError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_non_finite_weight_is_rejected() {
        let mut configuration = Configuration::default();
        configuration.reward.xp_gain = f32::INFINITY;
        assert!(configuration.validate().is_err());
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let configuration = Configuration::load(None).expect("defaults should load");
        assert_eq!(configuration.reward, RewardWeights::default());
    }

    #[test]
    fn test_load_file_and_env_override() {
        let dir = tempdir::TempDir::new("pokebot-config").expect("temp dir");
        let path = dir.path().join("reward.json");
        std::fs::write(
            &path,
            r#"{"reward":{"novel_map":7.5},"episode":{"coordinate_scope":"global"}}"#,
        )
        .expect("write config file");

        std::env::set_var("POKEBOT__EPISODE__MAX_STEPS", "4096");
        let loaded = Configuration::load(Some(&path));
        std::env::remove_var("POKEBOT__EPISODE__MAX_STEPS");
        let configuration = loaded.expect("file and env should load");

        assert_eq!(configuration.reward.novel_map, 7.5);
        assert_eq!(configuration.episode.max_steps, 4096);
        assert_eq!(configuration.episode.coordinate_scope, CoordinateScope::Global);
        assert_eq!(configuration.reward.novel_coordinate, 1.0);
        assert_eq!(configuration.reward.xp_gain, 20.0);
        assert_eq!(configuration.reward.stationary, -0.1);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let json = r#"{"episode":{"max_steps":100,"coordinate_scope":"global"},"reward":{"novel_map":7.5}}"#;
        let configuration: Configuration = serde_json::from_str(json).expect("valid json");
        assert_eq!(configuration.episode.max_steps, 100);
        assert_eq!(configuration.episode.coordinate_scope, CoordinateScope::Global);
        assert_eq!(configuration.reward.novel_map, 7.5);
        assert_eq!(configuration.reward.novel_coordinate, 1.0);
    }
}
