//! Core building blocks: sides, energy, RNG, configuration, errors.

pub mod combatant;
pub mod config;
pub mod energy;
pub mod error;
pub mod rng;

pub use combatant::{Combatant, DamageReport, PlayerCombatant, Side};
pub use config::{BattleConfig, EnemyConfig, LegacyActionConfig, PacingConfig, PlayerConfig};
pub use energy::Energy;
pub use error::{BattleError, Result};
pub use rng::GameRng;
