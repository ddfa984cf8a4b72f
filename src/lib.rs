//! # rust-battler
//!
//! Turn-based card battle core for an idle-progression game: one player,
//! one enemy, a shuffled deck of effect cards, per-turn energy, and two
//! stacking debuffs.
//!
//! ## Design Principles
//!
//! 1. **Atomic commands**: A card play can spend energy, apply a status,
//!    end the turn and end the battle in one call. Nothing is queued.
//!
//! 2. **Nothing is fatal**: Rejected commands are values, bad tuning is
//!    clamped, missing collaborators fall back to neutral defaults.
//!
//! 3. **Injected collaborators**: Economy, reward sink, enemy AI and
//!    observer are passed in through `BattleBuilder`. No globals.
//!
//! 4. **Deterministic**: One seed reproduces a whole battle.
//!
//! ## Modules
//!
//! - `core`: Sides, energy, RNG, configuration, errors
//! - `cards`: Card templates and the catalog
//! - `zones`: Draw pile, hand, discard pile
//! - `status`: Weak/Vulnerable and the damage modifier
//! - `ai`: Enemy intents
//! - `effects`: The battle-context facade and effect resolution
//! - `rewards`: Reward calculation and economy collaborators
//! - `events`: Observer trait and recorded events
//! - `battle`: The turn state machine

pub mod core;
pub mod cards;
pub mod zones;
pub mod status;
pub mod ai;
pub mod effects;
pub mod rewards;
pub mod events;
pub mod battle;

// Re-export commonly used types
pub use crate::core::{
    BattleConfig, BattleError, Combatant, EnemyConfig, Energy, GameRng, PacingConfig,
    PlayerCombatant, PlayerConfig, Result, Side,
};

pub use crate::cards::{CardCatalog, CardEffect, CardId, CardTemplate, EffectId};

pub use crate::zones::Deck;

pub use crate::status::{calculate_damage, StatusEngine, StatusKind, StatusState};

pub use crate::ai::{EnemyIntent, IntentKind, IntentPolicy, WeightedIntentPolicy};

pub use crate::effects::{BattleContext, EffectResolver};

pub use crate::rewards::{calculate_reward, EconomyProvider, FixedMultiplier, VictorySink};

pub use crate::events::{BattleEvent, BattleObserver, EventLog, NullObserver};

pub use crate::battle::{
    Battle, BattleBuilder, BattlePhase, BattleSnapshot, CommandOutcome, Continuation,
    RejectReason,
};
