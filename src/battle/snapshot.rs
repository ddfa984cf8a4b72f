//! Serializable view of a battle.

use serde::{Deserialize, Serialize};

use super::phase::{BattlePhase, Continuation};
use crate::ai::EnemyIntent;
use crate::cards::CardId;
use crate::core::energy::Energy;
use crate::status::StatusState;

/// Point-in-time copy of everything a UI needs to draw the battle.
///
/// The battle never stores this anywhere; persisting it is up to the caller.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleSnapshot {
    pub phase: BattlePhase,
    pub turn: u32,
    pub pending: Option<Continuation>,
    pub player_hp: i32,
    pub player_max_hp: i32,
    pub player_armor: i32,
    pub enemy_name: String,
    pub enemy_hp: i32,
    pub enemy_max_hp: i32,
    pub player_status: StatusState,
    pub enemy_status: StatusState,
    pub energy: Energy,
    pub hand: Vec<CardId>,
    pub draw_pile_size: usize,
    pub discard_pile_size: usize,
    pub intent: EnemyIntent,
    pub reward: Option<i64>,
}
