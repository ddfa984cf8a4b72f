//! Recorded battle events.
//!
//! `EventLog` is a `BattleObserver` that stores every notification as a
//! `BattleEvent`. Useful for tests, replays, and polling UIs.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::observer::BattleObserver;
use crate::ai::EnemyIntent;
use crate::battle::Continuation;
use crate::cards::CardId;

/// One observed notification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleEvent {
    PlayerStats { hp: i32, max_hp: i32, armor: i32 },
    EnemyStats { hp: i32, max_hp: i32 },
    Energy { current: u32, max: u32 },
    Hand(Vec<CardId>),
    PlayerStatus(String),
    EnemyStatus(String),
    Intent(EnemyIntent),
    Info(String),
    Ended { victory: bool, reward: i64 },
    Scheduled { continuation: Continuation, delay: Duration },
}

/// Observer that records events in order.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Vec<BattleEvent>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    /// Remove and return everything recorded so far.
    pub fn drain(&mut self) -> Vec<BattleEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// All info messages, in order.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.events.iter().filter_map(|e| match e {
            BattleEvent::Info(message) => Some(message.as_str()),
            _ => None,
        })
    }

    /// The most recent event matching `predicate`.
    #[must_use]
    pub fn last_matching(&self, predicate: impl Fn(&BattleEvent) -> bool) -> Option<&BattleEvent> {
        self.events.iter().rev().find(|e| predicate(e))
    }
}

impl BattleObserver for EventLog {
    fn player_stats_changed(&mut self, hp: i32, max_hp: i32, armor: i32) {
        self.events.push(BattleEvent::PlayerStats { hp, max_hp, armor });
    }

    fn enemy_stats_changed(&mut self, hp: i32, max_hp: i32) {
        self.events.push(BattleEvent::EnemyStats { hp, max_hp });
    }

    fn energy_changed(&mut self, current: u32, max: u32) {
        self.events.push(BattleEvent::Energy { current, max });
    }

    fn hand_changed(&mut self, hand: &[CardId]) {
        self.events.push(BattleEvent::Hand(hand.to_vec()));
    }

    fn player_status_changed(&mut self, label: &str) {
        self.events.push(BattleEvent::PlayerStatus(label.to_string()));
    }

    fn enemy_status_changed(&mut self, label: &str) {
        self.events.push(BattleEvent::EnemyStatus(label.to_string()));
    }

    fn intent_changed(&mut self, intent: &EnemyIntent) {
        self.events.push(BattleEvent::Intent(intent.clone()));
    }

    fn info(&mut self, message: &str) {
        self.events.push(BattleEvent::Info(message.to_string()));
    }

    fn battle_ended(&mut self, victory: bool, reward: i64) {
        self.events.push(BattleEvent::Ended { victory, reward });
    }

    fn continuation_scheduled(&mut self, continuation: Continuation, delay: Duration) {
        self.events.push(BattleEvent::Scheduled { continuation, delay });
    }
}
