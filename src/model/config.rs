//! Configuration management for simulation parameters.
//!
//! Strongly-typed structures that map to `config.toml`. Defaults reproduce
//! the reference tuning; a config file overrides them section by section.
//!
//! ## Example `config.toml`
//!
//! ```toml
//! [world]
//! initial_population = 20
//! tick_dt = 0.1
//! seed = 42
//! ```

use anyhow::Result;
use serde::{Deserialize, Serialize};
use vivarium_data::Vec2;

/// Arena bounds, timing, and initial population.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct WorldConfig {
    pub area_min: Vec2,
    pub area_max: Vec2,
    /// Simulated seconds advanced per tick.
    pub tick_dt: f32,
    pub initial_population: usize,
    pub seed: Option<u64>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            area_min: Vec2::new(-10.0, -10.0),
            area_max: Vec2::new(10.0, 10.0),
            tick_dt: 0.1,
            initial_population: 20,
            seed: None,
        }
    }
}

/// Steering and proximity parameters of the behavior state machine.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Per-tick chance that a wandering animal picks a fresh direction.
    pub wander_redirect_chance: f32,
    /// Distance below which food is eaten and fights are resolved.
    pub contact_range: f32,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            wander_redirect_chance: 0.001,
            contact_range: 1.0,
        }
    }
}

/// Energy drain coefficients and food value.
///
/// Per-tick drain is `base_cost + speed_sq_cost*speed² + vision_cost*vision
/// + strength_cost*strength + defense_cost*defense`, scaled by `tick_dt`.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct EnergyConfig {
    pub base_cost: f32,
    pub speed_sq_cost: f32,
    pub vision_cost: f32,
    pub strength_cost: f32,
    pub defense_cost: f32,
    /// Energy credited for one food, capped at the eater's `max_energy`.
    pub food_energy: f32,
}

impl Default for EnergyConfig {
    fn default() -> Self {
        Self {
            base_cost: 1.0,
            speed_sq_cost: 0.05,
            vision_cost: 0.1,
            strength_cost: 0.2,
            defense_cost: 0.2,
            food_energy: 20.0,
        }
    }
}

/// Egg timing and per-trait mutation bounds.
///
/// Each offspring trait is perturbed by a uniform offset inside the listed
/// bound, then clamped to the trait's domain.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ReproductionConfig {
    pub hatch_time: f32,
    pub speed_delta: f32,
    pub vision_delta: f32,
    pub energy_to_reproduce_delta: f32,
    pub strength_delta: f32,
    pub defense_delta: f32,
    pub aggression_delta: f32,
    pub timidity_delta: f32,
}

impl Default for ReproductionConfig {
    fn default() -> Self {
        Self {
            hatch_time: 3.0,
            speed_delta: 1.0,
            vision_delta: 1.0,
            energy_to_reproduce_delta: 5.0,
            strength_delta: 1.0,
            defense_delta: 1.0,
            aggression_delta: 0.1,
            timidity_delta: 0.1,
        }
    }
}

/// Food replenishment policy.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct SpawnerConfig {
    pub max_plants: usize,
    /// Food created per cadence expiry, cap permitting.
    pub plants_per_step: usize,
    /// Cadence of the spawner, in simulated seconds.
    pub spawn_period: f32,
    /// Food created in one burst at world start.
    pub start_amount: usize,
}

impl Default for SpawnerConfig {
    fn default() -> Self {
        Self {
            max_plants: 100,
            plants_per_step: 10,
            spawn_period: 1.0,
            start_amount: 100,
        }
    }
}

/// Sampling cadence and history depth of the stats aggregator.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct StatsConfig {
    /// Interval between samples, in simulated seconds.
    pub sample_period: f32,
    /// Ring capacity; appending past it evicts the oldest sample.
    pub max_samples: usize,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            sample_period: 1.0,
            max_samples: 100,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub world: WorldConfig,
    pub behavior: BehaviorConfig,
    pub energy: EnergyConfig,
    pub reproduction: ReproductionConfig,
    pub spawner: SpawnerConfig,
    pub stats: StatsConfig,
}

impl AppConfig {
    /// Validates all configuration parameters, returning the first failure.
    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(
            self.world.area_min.x < self.world.area_max.x
                && self.world.area_min.y < self.world.area_max.y,
            "World bounds must satisfy area_min < area_max on both axes"
        );
        anyhow::ensure!(self.world.tick_dt > 0.0, "tick_dt must be positive");
        anyhow::ensure!(
            self.world.initial_population <= 10_000,
            "Initial population too large (max 10000)"
        );

        anyhow::ensure!(
            (0.0..=1.0).contains(&self.behavior.wander_redirect_chance),
            "wander_redirect_chance must be in [0.0, 1.0]"
        );
        anyhow::ensure!(
            self.behavior.contact_range > 0.0,
            "contact_range must be positive"
        );

        anyhow::ensure!(
            self.energy.base_cost >= 0.0,
            "base_cost must be non-negative"
        );
        anyhow::ensure!(
            self.energy.speed_sq_cost >= 0.0
                && self.energy.vision_cost >= 0.0
                && self.energy.strength_cost >= 0.0
                && self.energy.defense_cost >= 0.0,
            "Energy drain coefficients must be non-negative"
        );
        anyhow::ensure!(
            self.energy.food_energy > 0.0,
            "food_energy must be positive"
        );

        anyhow::ensure!(
            self.reproduction.hatch_time > 0.0,
            "hatch_time must be positive"
        );
        anyhow::ensure!(
            self.reproduction.speed_delta >= 0.0
                && self.reproduction.vision_delta >= 0.0
                && self.reproduction.energy_to_reproduce_delta >= 0.0
                && self.reproduction.strength_delta >= 0.0
                && self.reproduction.defense_delta >= 0.0
                && self.reproduction.aggression_delta >= 0.0
                && self.reproduction.timidity_delta >= 0.0,
            "Mutation bounds must be non-negative"
        );

        anyhow::ensure!(
            self.spawner.max_plants <= 10_000,
            "max_plants too large (max 10000)"
        );
        anyhow::ensure!(
            self.spawner.plants_per_step > 0,
            "plants_per_step must be positive"
        );
        anyhow::ensure!(
            self.spawner.spawn_period > 0.0,
            "spawn_period must be positive"
        );

        anyhow::ensure!(
            self.stats.sample_period > 0.0,
            "sample_period must be positive"
        );
        anyhow::ensure!(self.stats.max_samples > 0, "max_samples must be positive");

        Ok(())
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(format!("{:?}", self.world).as_bytes());
        hasher.update(format!("{:?}", self.behavior).as_bytes());
        hasher.update(format!("{:?}", self.energy).as_bytes());
        hasher.update(format!("{:?}", self.reproduction).as_bytes());
        hasher.update(format!("{:?}", self.spawner).as_bytes());
        hasher.update(format!("{:?}", self.stats).as_bytes());
        hex::encode(hasher.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let mut config = AppConfig::default();
        config.world.area_min = Vec2::new(10.0, -10.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_dt_rejected() {
        let mut config = AppConfig::default();
        config.world.tick_dt = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_redirect_chance_out_of_range_rejected() {
        let mut config = AppConfig::default();
        config.behavior.wander_redirect_chance = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_toml_section_override() {
        let config = AppConfig::from_toml(
            r#"
            [spawner]
            max_plants = 50
            plants_per_step = 5
            spawn_period = 1.0
            start_amount = 50
            "#,
        )
        .expect("valid config");
        assert_eq!(config.spawner.max_plants, 50);
        assert_eq!(config.world.initial_population, 20);
    }

    #[test]
    fn test_from_toml_rejects_invalid() {
        let result = AppConfig::from_toml(
            r#"
            [world]
            area_min = { x = 10.0, y = -10.0 }
            area_max = { x = -10.0, y = 10.0 }
            tick_dt = 0.1
            initial_population = 20
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_fingerprint_consistency() {
        assert_eq!(
            AppConfig::default().fingerprint(),
            AppConfig::default().fingerprint()
        );
    }
}
