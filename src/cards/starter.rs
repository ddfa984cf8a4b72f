//! Built-in starter content.
//!
//! A small catalog and deck so a battle can run without any data files.

use super::definition::{CardEffect, CardId, CardTemplate, EffectId};
use super::registry::CardCatalog;

pub const STRIKE: CardId = CardId::new(1);
pub const DEFEND: CardId = CardId::new(2);
pub const BANDAGE: CardId = CardId::new(3);
pub const HEX: CardId = CardId::new(4);
pub const EXPOSE: CardId = CardId::new(5);

/// Every bandage copy shares this budget.
pub const BANDAGE_EFFECT: EffectId = EffectId::new(300);

/// Templates for the starter catalog.
#[must_use]
pub fn starter_templates() -> Vec<CardTemplate> {
    vec![
        CardTemplate::new(STRIKE, "Strike", 1).with_effect(CardEffect::damage(6)),
        CardTemplate::new(DEFEND, "Defend", 1).with_effect(CardEffect::block(5)),
        CardTemplate::new(BANDAGE, "Bandage", 1)
            .with_effect(CardEffect::heal(6, 2).with_id(BANDAGE_EFFECT)),
        CardTemplate::new(HEX, "Hex", 1).with_effect(CardEffect::damage(3).with_weak(2)),
        CardTemplate::new(EXPOSE, "Expose", 2)
            .with_effect(CardEffect::damage(4).with_vulnerable(2)),
    ]
}

#[must_use]
pub fn starter_catalog() -> CardCatalog {
    let mut catalog = CardCatalog::new();
    for template in starter_templates() {
        catalog.insert(template);
    }
    catalog
}

/// Ten-card starting deck.
#[must_use]
pub fn starter_deck() -> Vec<CardId> {
    let mut deck = vec![STRIKE; 4];
    deck.extend([DEFEND; 3]);
    deck.extend([BANDAGE, HEX, EXPOSE]);
    deck
}
