//! The two sides of a battle and their hit points.
//!
//! ## Side
//!
//! A battle always has exactly two sides: the player and the enemy.
//!
//! ## Combatant / PlayerCombatant
//!
//! `Combatant` tracks HP for either side. The player additionally carries
//! armor, which absorbs incoming damage before HP and never decays on its
//! own, and a per-battle budget of limited-use heals keyed by effect.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::EffectId;

/// Which side of the battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Player,
    Enemy,
}

impl Side {
    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::Player => Side::Enemy,
            Side::Enemy => Side::Player,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Player => write!(f, "Player"),
            Side::Enemy => write!(f, "Enemy"),
        }
    }
}

/// Hit points for one side. HP never drops below zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combatant {
    hp: i32,
    max_hp: i32,
}

impl Combatant {
    /// Create a combatant at full health.
    #[must_use]
    pub fn new(max_hp: i32) -> Self {
        let max_hp = max_hp.max(0);
        Self { hp: max_hp, max_hp }
    }

    #[must_use]
    pub fn hp(&self) -> i32 {
        self.hp
    }

    #[must_use]
    pub fn max_hp(&self) -> i32 {
        self.max_hp
    }

    /// Subtract `amount` from HP. Returns the HP actually lost.
    pub fn take_damage(&mut self, amount: i32) -> i32 {
        let amount = amount.max(0);
        let before = self.hp;
        self.hp = (self.hp - amount).max(0);
        before - self.hp
    }

    /// Add `amount` to HP, capped at max. Returns the HP actually gained.
    pub fn heal(&mut self, amount: i32) -> i32 {
        let amount = amount.max(0);
        let before = self.hp;
        self.hp = self.hp.saturating_add(amount).min(self.max_hp);
        self.hp - before
    }

    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.hp <= 0
    }
}

/// How a hit was split between armor and HP.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DamageReport {
    pub absorbed: i32,
    pub hp_lost: i32,
}

/// The player's side: HP, armor, and limited-use heal counters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerCombatant {
    body: Combatant,
    armor: i32,
    heal_uses: FxHashMap<EffectId, u32>,
}

impl PlayerCombatant {
    #[must_use]
    pub fn new(max_hp: i32, starting_armor: i32) -> Self {
        Self {
            body: Combatant::new(max_hp),
            armor: starting_armor.max(0),
            heal_uses: FxHashMap::default(),
        }
    }

    #[must_use]
    pub fn body(&self) -> &Combatant {
        &self.body
    }

    #[must_use]
    pub fn hp(&self) -> i32 {
        self.body.hp()
    }

    #[must_use]
    pub fn max_hp(&self) -> i32 {
        self.body.max_hp()
    }

    #[must_use]
    pub fn armor(&self) -> i32 {
        self.armor
    }

    pub fn add_armor(&mut self, amount: i32) {
        self.armor = self.armor.saturating_add(amount.max(0));
    }

    /// Absorb `incoming` into armor first; the remainder hits HP.
    pub fn absorb(&mut self, incoming: i32) -> DamageReport {
        let incoming = incoming.max(0);
        let absorbed = incoming.min(self.armor);
        self.armor -= absorbed;
        let hp_lost = self.body.take_damage(incoming - absorbed);
        DamageReport { absorbed, hp_lost }
    }

    pub fn heal(&mut self, amount: i32) -> i32 {
        self.body.heal(amount)
    }

    /// Consume one use of a limited heal.
    ///
    /// `max_uses < 0` means unlimited. The budget is created the first time
    /// an effect is seen and shared by every card carrying that effect.
    #[must_use]
    pub fn try_consume_heal(&mut self, effect: EffectId, max_uses: i32) -> bool {
        if max_uses < 0 {
            return true;
        }
        let remaining = self.heal_uses.entry(effect).or_insert(max_uses as u32);
        if *remaining == 0 {
            return false;
        }
        *remaining -= 1;
        true
    }

    /// Remaining uses for an effect, `None` if it has not been used yet.
    #[must_use]
    pub fn heal_uses_remaining(&self, effect: EffectId) -> Option<u32> {
        self.heal_uses.get(&effect).copied()
    }

    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.body.is_defeated()
    }
}
