//! Typed observer for battle notifications.
//!
//! The battle calls these methods as its state changes. They are
//! fire-and-forget: nothing is returned and the battle does not wait.
//! Every method has an empty default, so an observer only overrides the
//! categories it cares about.

use std::time::Duration;

use crate::ai::EnemyIntent;
use crate::battle::Continuation;
use crate::cards::CardId;

pub trait BattleObserver {
    fn player_stats_changed(&mut self, _hp: i32, _max_hp: i32, _armor: i32) {}

    fn enemy_stats_changed(&mut self, _hp: i32, _max_hp: i32) {}

    fn energy_changed(&mut self, _current: u32, _max: u32) {}

    fn hand_changed(&mut self, _hand: &[CardId]) {}

    fn player_status_changed(&mut self, _label: &str) {}

    fn enemy_status_changed(&mut self, _label: &str) {}

    fn intent_changed(&mut self, _intent: &EnemyIntent) {}

    fn info(&mut self, _message: &str) {}

    fn battle_ended(&mut self, _victory: bool, _reward: i64) {}

    /// A continuation is waiting; call `Battle::resume` after `delay`.
    fn continuation_scheduled(&mut self, _continuation: Continuation, _delay: Duration) {}
}

/// Observer that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl BattleObserver for NullObserver {}
