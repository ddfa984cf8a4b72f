//! Battle configuration.
//!
//! A battle is configured before it starts by providing:
//! - `PlayerConfig`: HP, armor, energy and hand size
//! - `EnemyConfig`: enemy stats and intent weights
//! - `PacingConfig`: presentation delays reported with scheduled continuations
//! - `LegacyActionConfig`: effects of the fixed-cost Attack/Guard/Mend helpers
//! - `BattleConfig`: combines all of the above with the seed and base reward
//!
//! Tuning values are signed so a bad data asset still loads. They are read
//! through accessors that clamp at the point of use.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::Result;
use crate::cards::{CardEffect, EffectId};

/// Clamp a configured value to zero, logging when it was negative.
pub(crate) fn clamp_non_negative(value: i32, field: &'static str) -> u32 {
    if value < 0 {
        tracing::warn!(field, value, "negative tuning value clamped to zero");
        0
    } else {
        value as u32
    }
}

/// Player-side tuning.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub max_hp: i32,
    pub starting_armor: i32,
    pub energy_per_turn: i32,
    pub max_energy: i32,
    pub hand_size: i32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            max_hp: 50,
            starting_armor: 0,
            energy_per_turn: 3,
            max_energy: 3,
            hand_size: 5,
        }
    }
}

impl PlayerConfig {
    #[must_use]
    pub fn max_hp(&self) -> i32 {
        clamp_non_negative(self.max_hp, "player.max_hp") as i32
    }

    #[must_use]
    pub fn starting_armor(&self) -> i32 {
        clamp_non_negative(self.starting_armor, "player.starting_armor") as i32
    }

    #[must_use]
    pub fn energy_per_turn(&self) -> u32 {
        clamp_non_negative(self.energy_per_turn, "player.energy_per_turn")
    }

    #[must_use]
    pub fn max_energy(&self) -> u32 {
        clamp_non_negative(self.max_energy, "player.max_energy")
    }

    #[must_use]
    pub fn hand_size(&self) -> usize {
        clamp_non_negative(self.hand_size, "player.hand_size") as usize
    }
}

/// Enemy stat sheet and intent weights.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyConfig {
    pub name: String,
    pub max_hp: i32,
    pub light_damage: i32,
    pub heavy_damage: i32,
    pub leech_heal_amount: i32,
    pub light_weight: i32,
    pub heavy_weight: i32,
    pub leech_weight: i32,
}

impl Default for EnemyConfig {
    fn default() -> Self {
        Self {
            name: "Slime".to_string(),
            max_hp: 40,
            light_damage: 6,
            heavy_damage: 12,
            leech_heal_amount: 5,
            light_weight: 50,
            heavy_weight: 30,
            leech_weight: 20,
        }
    }
}

impl EnemyConfig {
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn with_max_hp(mut self, max_hp: i32) -> Self {
        self.max_hp = max_hp;
        self
    }

    #[must_use]
    pub fn with_damage(mut self, light: i32, heavy: i32) -> Self {
        self.light_damage = light;
        self.heavy_damage = heavy;
        self
    }

    #[must_use]
    pub fn with_leech_heal(mut self, amount: i32) -> Self {
        self.leech_heal_amount = amount;
        self
    }

    /// Set the light/heavy/leech intent weights.
    #[must_use]
    pub fn with_weights(mut self, light: i32, heavy: i32, leech: i32) -> Self {
        self.light_weight = light;
        self.heavy_weight = heavy;
        self.leech_weight = leech;
        self
    }

    #[must_use]
    pub fn max_hp(&self) -> i32 {
        clamp_non_negative(self.max_hp, "enemy.max_hp") as i32
    }

    #[must_use]
    pub fn leech_heal_amount(&self) -> i32 {
        clamp_non_negative(self.leech_heal_amount, "enemy.leech_heal_amount") as i32
    }

    /// Weights as `(light, heavy, leech)`, each clamped to zero.
    #[must_use]
    pub fn weights(&self) -> (u32, u32, u32) {
        (
            clamp_non_negative(self.light_weight, "enemy.light_weight"),
            clamp_non_negative(self.heavy_weight, "enemy.heavy_weight"),
            clamp_non_negative(self.leech_weight, "enemy.leech_weight"),
        )
    }
}

/// Presentation pacing, in milliseconds.
///
/// The core never waits on these itself; they travel with each scheduled
/// continuation so the presentation layer knows how long to pause.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PacingConfig {
    pub enemy_turn_delay_ms: u64,
    pub auto_end_delay_ms: u64,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            enemy_turn_delay_ms: 600,
            auto_end_delay_ms: 400,
        }
    }
}

impl PacingConfig {
    #[must_use]
    pub fn enemy_turn_delay(&self) -> Duration {
        Duration::from_millis(self.enemy_turn_delay_ms)
    }

    #[must_use]
    pub fn auto_end_delay(&self) -> Duration {
        Duration::from_millis(self.auto_end_delay_ms)
    }
}

/// Effects behind the single-action helpers. Each costs one energy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegacyActionConfig {
    pub attack: CardEffect,
    pub guard: CardEffect,
    pub mend: CardEffect,
}

/// Effect ids reserved for the helpers' heal budgets.
pub const LEGACY_ATTACK_EFFECT: EffectId = EffectId::new(u32::MAX - 2);
pub const LEGACY_GUARD_EFFECT: EffectId = EffectId::new(u32::MAX - 1);
pub const LEGACY_MEND_EFFECT: EffectId = EffectId::new(u32::MAX);

impl Default for LegacyActionConfig {
    fn default() -> Self {
        Self {
            attack: CardEffect::damage(5).with_id(LEGACY_ATTACK_EFFECT),
            guard: CardEffect::block(5).with_id(LEGACY_GUARD_EFFECT),
            mend: CardEffect::heal(5, 3).with_id(LEGACY_MEND_EFFECT),
        }
    }
}

/// Complete battle configuration.
///
/// ## Example
///
/// ```
/// use rust_battler::core::{BattleConfig, EnemyConfig};
///
/// let config = BattleConfig::default()
///     .with_seed(7)
///     .with_enemy(EnemyConfig::default().with_max_hp(30));
///
/// assert_eq!(config.enemy.max_hp(), 30);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BattleConfig {
    /// Seed for deck shuffles and intent rolls.
    pub seed: u64,
    /// Reward before the economy multiplier is applied.
    pub base_reward: i64,
    pub player: PlayerConfig,
    pub enemy: EnemyConfig,
    pub pacing: PacingConfig,
    pub legacy: LegacyActionConfig,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            base_reward: 20,
            player: PlayerConfig::default(),
            enemy: EnemyConfig::default(),
            pacing: PacingConfig::default(),
            legacy: LegacyActionConfig::default(),
        }
    }
}

impl BattleConfig {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    pub fn from_json_str(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }

    /// Load from a file; `.json` is read as JSON, anything else as TOML.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&source),
            _ => Self::from_toml_str(&source),
        }
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_base_reward(mut self, base_reward: i64) -> Self {
        self.base_reward = base_reward;
        self
    }

    #[must_use]
    pub fn with_player(mut self, player: PlayerConfig) -> Self {
        self.player = player;
        self
    }

    #[must_use]
    pub fn with_enemy(mut self, enemy: EnemyConfig) -> Self {
        self.enemy = enemy;
        self
    }

    #[must_use]
    pub fn with_pacing(mut self, pacing: PacingConfig) -> Self {
        self.pacing = pacing;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BattleConfig::default();
        assert_eq!(config.seed, 42);
        assert_eq!(config.player.energy_per_turn(), 3);
        assert_eq!(config.player.hand_size(), 5);
        assert_eq!(config.enemy.weights(), (50, 30, 20));
    }

    #[test]
    fn test_negative_values_clamped() {
        let enemy = EnemyConfig::default()
            .with_max_hp(-5)
            .with_leech_heal(-3)
            .with_weights(-1, 4, -9);
        assert_eq!(enemy.max_hp(), 0);
        assert_eq!(enemy.leech_heal_amount(), 0);
        assert_eq!(enemy.weights(), (0, 4, 0));

        let player = PlayerConfig {
            energy_per_turn: -2,
            hand_size: -1,
            ..PlayerConfig::default()
        };
        assert_eq!(player.energy_per_turn(), 0);
        assert_eq!(player.hand_size(), 0);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let source = r#"
            seed = 9
            base_reward = 35

            [enemy]
            name = "Bat"
            max_hp = 22
            light_weight = 1
            heavy_weight = 0
            leech_weight = 0
        "#;

        let config = BattleConfig::from_toml_str(source).unwrap();
        assert_eq!(config.seed, 9);
        assert_eq!(config.base_reward, 35);
        assert_eq!(config.enemy.name, "Bat");
        assert_eq!(config.enemy.light_damage, 6);
        assert_eq!(config.player, PlayerConfig::default());
        assert_eq!(config.legacy, LegacyActionConfig::default());
    }

    #[test]
    fn test_pacing_durations() {
        let pacing = PacingConfig {
            enemy_turn_delay_ms: 250,
            auto_end_delay_ms: 0,
        };
        assert_eq!(pacing.enemy_turn_delay(), Duration::from_millis(250));
        assert_eq!(pacing.auto_end_delay(), Duration::ZERO);
    }

    #[test]
    fn test_serialization() {
        let config = BattleConfig::default().with_seed(123);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized = BattleConfig::from_json_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
