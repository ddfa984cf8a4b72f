//! Weak / Vulnerable counters and the damage modifier.
//!
//! Each side has its own turn counters. Applying a status adds turns to the
//! existing counter. A side's counters tick down at the end of that side's
//! own turn.

use serde::{Deserialize, Serialize};

use crate::core::combatant::Side;

/// Damage dealt by a Weak attacker is multiplied by this.
pub const WEAK_MULTIPLIER: f64 = 0.75;
/// Damage received by a Vulnerable defender is multiplied by this.
pub const VULNERABLE_MULTIPLIER: f64 = 1.5;

/// The two stacking debuffs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusKind {
    Weak,
    Vulnerable,
}

/// Modified damage for one hit.
///
/// `round(base × 0.75 if weak × 1.5 if vulnerable)`, never negative.
/// Rounding is half away from zero.
///
/// ```
/// use rust_battler::status::calculate_damage;
///
/// assert_eq!(calculate_damage(10, false, false), 10);
/// assert_eq!(calculate_damage(10, true, false), 8);
/// assert_eq!(calculate_damage(10, false, true), 15);
/// assert_eq!(calculate_damage(10, true, true), 11);
/// ```
#[must_use]
pub fn calculate_damage(base: i32, attacker_weak: bool, defender_vulnerable: bool) -> i32 {
    let mut damage = f64::from(base.max(0));
    if attacker_weak {
        damage *= WEAK_MULTIPLIER;
    }
    if defender_vulnerable {
        damage *= VULNERABLE_MULTIPLIER;
    }
    (damage.round() as i32).max(0)
}

/// Status counters for one side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusState {
    pub weak_turns: u32,
    pub vulnerable_turns: u32,
}

impl StatusState {
    /// Add `turns` to a counter. No-op for `turns <= 0`.
    pub fn apply(&mut self, kind: StatusKind, turns: i32) {
        if turns <= 0 {
            return;
        }
        let counter = match kind {
            StatusKind::Weak => &mut self.weak_turns,
            StatusKind::Vulnerable => &mut self.vulnerable_turns,
        };
        *counter = counter.saturating_add(turns as u32);
    }

    /// Decrement both counters by one, stopping at zero.
    pub fn tick(&mut self) {
        self.weak_turns = self.weak_turns.saturating_sub(1);
        self.vulnerable_turns = self.vulnerable_turns.saturating_sub(1);
    }

    #[must_use]
    pub fn is_weak(&self) -> bool {
        self.weak_turns > 0
    }

    #[must_use]
    pub fn is_vulnerable(&self) -> bool {
        self.vulnerable_turns > 0
    }

    /// Display label, e.g. `"Weak (2), Vulnerable (1)"`. Empty if none active.
    #[must_use]
    pub fn label(&self) -> String {
        let mut parts = Vec::with_capacity(2);
        if self.weak_turns > 0 {
            parts.push(format!("Weak ({})", self.weak_turns));
        }
        if self.vulnerable_turns > 0 {
            parts.push(format!("Vulnerable ({})", self.vulnerable_turns));
        }
        parts.join(", ")
    }
}

/// Status counters for both sides.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEngine {
    player: StatusState,
    enemy: StatusState,
}

impl StatusEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self, side: Side) -> &StatusState {
        match side {
            Side::Player => &self.player,
            Side::Enemy => &self.enemy,
        }
    }

    fn state_mut(&mut self, side: Side) -> &mut StatusState {
        match side {
            Side::Player => &mut self.player,
            Side::Enemy => &mut self.enemy,
        }
    }

    pub fn apply(&mut self, side: Side, kind: StatusKind, turns: i32) {
        self.state_mut(side).apply(kind, turns);
    }

    pub fn apply_to_player(&mut self, kind: StatusKind, turns: i32) {
        self.apply(Side::Player, kind, turns);
    }

    pub fn apply_to_enemy(&mut self, kind: StatusKind, turns: i32) {
        self.apply(Side::Enemy, kind, turns);
    }

    /// Player statuses expire at the end of the player's turn.
    pub fn tick_end_of_player_turn(&mut self) {
        self.player.tick();
    }

    /// Enemy statuses expire at the end of the enemy's turn.
    pub fn tick_end_of_enemy_turn(&mut self) {
        self.enemy.tick();
    }

    /// Damage `attacker` deals to the other side after modifiers.
    #[must_use]
    pub fn modified_damage(&self, attacker: Side, base: i32) -> i32 {
        let defender = attacker.opponent();
        calculate_damage(
            base,
            self.state(attacker).is_weak(),
            self.state(defender).is_vulnerable(),
        )
    }

    #[must_use]
    pub fn label(&self, side: Side) -> String {
        self.state(side).label()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_damage_formula() {
        assert_eq!(calculate_damage(10, false, false), 10);
        assert_eq!(calculate_damage(10, true, false), 8);
        assert_eq!(calculate_damage(10, false, true), 15);
        assert_eq!(calculate_damage(10, true, true), 11);
    }

    #[test]
    fn test_damage_never_negative() {
        assert_eq!(calculate_damage(-4, false, true), 0);
        assert_eq!(calculate_damage(0, true, true), 0);
    }

    #[test]
    fn test_small_values_round() {
        // 1 × 0.75 = 0.75 -> 1; 2 × 0.75 = 1.5 -> 2
        assert_eq!(calculate_damage(1, true, false), 1);
        assert_eq!(calculate_damage(2, true, false), 2);
        // 3 × 1.5 = 4.5 -> 5
        assert_eq!(calculate_damage(3, false, true), 5);
    }

    #[test]
    fn test_stacking_is_additive() {
        let mut state = StatusState::default();
        state.apply(StatusKind::Weak, 2);
        state.apply(StatusKind::Weak, 3);
        assert_eq!(state.weak_turns, 5);

        state.apply(StatusKind::Vulnerable, 0);
        state.apply(StatusKind::Vulnerable, -2);
        assert_eq!(state.vulnerable_turns, 0);
    }

    #[test]
    fn test_enemy_weak_decays_on_enemy_ticks() {
        let mut engine = StatusEngine::new();
        engine.apply_to_enemy(StatusKind::Weak, 2);
        assert_eq!(engine.label(Side::Enemy), "Weak (2)");

        engine.tick_end_of_enemy_turn();
        engine.tick_end_of_enemy_turn();

        assert_eq!(engine.state(Side::Enemy).weak_turns, 0);
        assert_eq!(engine.label(Side::Enemy), "");
    }

    #[test]
    fn test_ticks_only_affect_own_side() {
        let mut engine = StatusEngine::new();
        engine.apply_to_enemy(StatusKind::Vulnerable, 1);
        engine.apply_to_player(StatusKind::Weak, 1);

        engine.tick_end_of_player_turn();
        assert_eq!(engine.state(Side::Enemy).vulnerable_turns, 1);
        assert_eq!(engine.state(Side::Player).weak_turns, 0);

        // Extra ticks stay at zero
        engine.tick_end_of_player_turn();
        assert_eq!(engine.state(Side::Player).weak_turns, 0);
    }

    #[test]
    fn test_label_both() {
        let mut state = StatusState::default();
        state.apply(StatusKind::Vulnerable, 1);
        state.apply(StatusKind::Weak, 2);
        assert_eq!(state.label(), "Weak (2), Vulnerable (1)");
    }

    #[test]
    fn test_modified_damage_directions() {
        let mut engine = StatusEngine::new();
        engine.apply_to_enemy(StatusKind::Vulnerable, 1);

        // Player hits a vulnerable enemy
        assert_eq!(engine.modified_damage(Side::Player, 10), 15);
        // Enemy hits a non-vulnerable player
        assert_eq!(engine.modified_damage(Side::Enemy, 10), 10);

        engine.apply_to_enemy(StatusKind::Weak, 1);
        assert_eq!(engine.modified_damage(Side::Enemy, 10), 8);
    }
}
