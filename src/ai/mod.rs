//! Enemy AI.
//!
//! - `EnemyIntent`: the previewed next action
//! - `IntentPolicy`: trait for choosing intents
//! - `WeightedIntentPolicy`: the default weighted-random policy

mod intent;

pub use intent::{EnemyIntent, IntentKind, IntentPolicy, WeightedIntentPolicy};
