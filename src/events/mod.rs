//! Outbound battle notifications.
//!
//! - `BattleObserver`: one method per notification category
//! - `NullObserver`: ignores everything
//! - `EventLog` / `BattleEvent`: records notifications as values

mod event;
mod observer;

pub use event::{BattleEvent, EventLog};
pub use observer::{BattleObserver, NullObserver};
