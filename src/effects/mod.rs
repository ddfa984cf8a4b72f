//! Card effect application.
//!
//! - `BattleContext`: the facade effects call into
//! - `EffectResolver`: walks a `CardEffect` and drives the facade
//!
//! Effects only see the facade, so the same resolution logic serves cards
//! in hand and the fixed-cost single-action helpers.

mod context;
mod resolver;

pub use context::BattleContext;
pub use resolver::{EffectResolver, EffectSummary};
