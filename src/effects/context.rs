//! The surface card effects act through.
//!
//! Effects never touch battle internals directly. They call this facade,
//! which the battle implements, so effect logic can be tested against a
//! stub and the battle can notify observers on every change.

use crate::cards::EffectId;

pub trait BattleContext {
    /// Deal `amount` base damage to the enemy; status modifiers apply.
    fn damage_enemy(&mut self, amount: i32);

    fn add_player_armor(&mut self, amount: i32);

    /// Heal the player if `effect` still has uses left.
    ///
    /// `max_uses < 0` means unlimited. Returns `false` when the budget is
    /// spent.
    fn try_heal_player(&mut self, effect: EffectId, amount: i32, max_uses: i32) -> bool;

    fn apply_weak_to_enemy(&mut self, stacks: i32);

    fn apply_vulnerable_to_enemy(&mut self, stacks: i32);
}
