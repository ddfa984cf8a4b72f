//! Card templates - static card data.
//!
//! A `CardTemplate` is immutable and supplied by the game's data catalog.
//! Piles and hands hold `CardId` references to templates, so several slots
//! can point at the same template and removing "a card" removes one
//! matching reference.

use serde::{Deserialize, Serialize};

use crate::core::config::clamp_non_negative;

/// Unique identifier for a card template.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Identity of a card effect.
///
/// Limited-use heals are budgeted per effect, not per card, so every copy
/// of every card sharing an `EffectId` draws from one pool of uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EffectId(pub u32);

impl EffectId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for EffectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Effect({})", self.0)
    }
}

/// What a card does when played.
///
/// All amounts are signed so a bad data asset can be loaded; negative
/// values are treated as zero when the effect resolves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardEffect {
    /// Shared identity for limited-use heals. Defaults to the card's own id.
    pub id: Option<EffectId>,
    pub damage_amount: i32,
    pub block_amount: i32,
    pub heal_amount: i32,
    /// Uses per battle, `-1` for unlimited.
    pub heal_max_uses: i32,
    pub weak_stacks_granted: i32,
    pub vulnerable_stacks_granted: i32,
}

impl Default for CardEffect {
    fn default() -> Self {
        Self {
            id: None,
            damage_amount: 0,
            block_amount: 0,
            heal_amount: 0,
            heal_max_uses: -1,
            weak_stacks_granted: 0,
            vulnerable_stacks_granted: 0,
        }
    }
}

impl CardEffect {
    #[must_use]
    pub fn damage(amount: i32) -> Self {
        Self::default().with_damage(amount)
    }

    #[must_use]
    pub fn block(amount: i32) -> Self {
        Self::default().with_block(amount)
    }

    #[must_use]
    pub fn heal(amount: i32, max_uses: i32) -> Self {
        Self::default().with_heal(amount, max_uses)
    }

    #[must_use]
    pub fn with_id(mut self, id: EffectId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn with_damage(mut self, amount: i32) -> Self {
        self.damage_amount = amount;
        self
    }

    #[must_use]
    pub fn with_block(mut self, amount: i32) -> Self {
        self.block_amount = amount;
        self
    }

    #[must_use]
    pub fn with_heal(mut self, amount: i32, max_uses: i32) -> Self {
        self.heal_amount = amount;
        self.heal_max_uses = max_uses;
        self
    }

    #[must_use]
    pub fn with_weak(mut self, stacks: i32) -> Self {
        self.weak_stacks_granted = stacks;
        self
    }

    #[must_use]
    pub fn with_vulnerable(mut self, stacks: i32) -> Self {
        self.vulnerable_stacks_granted = stacks;
        self
    }
}

/// Immutable card template.
///
/// ## Example
///
/// ```
/// use rust_battler::cards::{CardEffect, CardId, CardTemplate};
///
/// let strike = CardTemplate::new(CardId::new(1), "Strike", 1)
///     .with_effect(CardEffect::damage(6));
///
/// assert_eq!(strike.energy_cost(), 1);
/// assert_eq!(strike.effect.damage_amount, 6);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardTemplate {
    pub id: CardId,
    pub title: String,
    #[serde(default)]
    pub cost: i32,
    #[serde(default)]
    pub effect: CardEffect,
}

impl CardTemplate {
    #[must_use]
    pub fn new(id: CardId, title: impl Into<String>, cost: i32) -> Self {
        Self {
            id,
            title: title.into(),
            cost,
            effect: CardEffect::default(),
        }
    }

    #[must_use]
    pub fn with_effect(mut self, effect: CardEffect) -> Self {
        self.effect = effect;
        self
    }

    /// Energy cost, negative costs treated as free.
    #[must_use]
    pub fn energy_cost(&self) -> u32 {
        clamp_non_negative(self.cost, "card cost")
    }

    /// Key under which this card's limited heals are counted.
    #[must_use]
    pub fn effect_key(&self) -> EffectId {
        self.effect.id.unwrap_or(EffectId(self.id.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id() {
        let id = CardId::new(5);
        assert_eq!(id.raw(), 5);
        assert_eq!(format!("{}", id), "Card(5)");
    }

    #[test]
    fn test_negative_cost_is_free() {
        let card = CardTemplate::new(CardId::new(1), "Glitch", -2);
        assert_eq!(card.energy_cost(), 0);
    }

    #[test]
    fn test_effect_key_defaults_to_card() {
        let plain = CardTemplate::new(CardId::new(3), "Bandage", 1)
            .with_effect(CardEffect::heal(4, 2));
        assert_eq!(plain.effect_key(), EffectId::new(3));

        let shared = CardTemplate::new(CardId::new(4), "Bandage+", 1)
            .with_effect(CardEffect::heal(6, 2).with_id(EffectId::new(100)));
        assert_eq!(shared.effect_key(), EffectId::new(100));
    }

    #[test]
    fn test_effect_default_is_unlimited_heal() {
        let effect = CardEffect::default();
        assert_eq!(effect.heal_max_uses, -1);
        assert_eq!(effect.damage_amount, 0);
    }

    #[test]
    fn test_template_deserializes_with_defaults() {
        let json = r#"{"id": 9, "title": "Hex", "effect": {"weak_stacks_granted": 2}}"#;
        let card: CardTemplate = serde_json::from_str(json).unwrap();
        assert_eq!(card.cost, 0);
        assert_eq!(card.effect.weak_stacks_granted, 2);
        assert_eq!(card.effect.heal_max_uses, -1);
    }
}
