//! Battle orchestration.
//!
//! - `Battle`: the turn state machine and inbound command surface
//! - `BattleBuilder`: injects config, catalog, deck and collaborators
//! - `BattlePhase`, `Continuation`, `CommandOutcome`: state and results
//! - `BattleSnapshot`: serializable view for polling UIs

mod orchestrator;
mod phase;
mod snapshot;

pub use orchestrator::{Battle, BattleBuilder, LEGACY_ACTION_COST};
pub use phase::{BattlePhase, CommandOutcome, Continuation, RejectReason};
pub use snapshot::BattleSnapshot;
