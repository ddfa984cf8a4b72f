//! Card catalog for template lookup.
//!
//! The `CardCatalog` stores every card template a battle may reference.
//! It is built before the battle starts, either in code or from a TOML/JSON
//! file with a `cards` list, and is read-only afterwards.

use rustc_hash::FxHashMap;
use serde::Deserialize;

use super::definition::{CardId, CardTemplate};
use crate::core::error::{BattleError, Result};

/// Registry of card templates.
///
/// ## Example
///
/// ```
/// use rust_battler::cards::{CardCatalog, CardEffect, CardId, CardTemplate};
///
/// let mut catalog = CardCatalog::new();
/// catalog
///     .register(CardTemplate::new(CardId::new(1), "Strike", 1).with_effect(CardEffect::damage(6)))
///     .unwrap();
///
/// let found = catalog.get(CardId::new(1)).unwrap();
/// assert_eq!(found.title, "Strike");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: FxHashMap<CardId, CardTemplate>,
}

#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default)]
    cards: Vec<CardTemplate>,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from templates. Fails on duplicate ids.
    pub fn from_templates(templates: impl IntoIterator<Item = CardTemplate>) -> Result<Self> {
        let mut catalog = Self::new();
        for template in templates {
            catalog.register(template)?;
        }
        Ok(catalog)
    }

    /// Load a catalog from TOML (`[[cards]]` tables).
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(source)?;
        Self::from_templates(file.cards)
    }

    /// Load a catalog from JSON (`{"cards": [...]}`).
    pub fn from_json_str(source: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(source)?;
        Self::from_templates(file.cards)
    }

    /// Register a template.
    pub fn register(&mut self, template: CardTemplate) -> Result<()> {
        if self.cards.contains_key(&template.id) {
            return Err(BattleError::DuplicateCard(template.id));
        }
        self.cards.insert(template.id, template);
        Ok(())
    }

    /// Insert a template, replacing any template with the same id.
    ///
    /// Returns the replaced template.
    pub fn insert(&mut self, template: CardTemplate) -> Option<CardTemplate> {
        self.cards.insert(template.id, template)
    }

    /// Get a template by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&CardTemplate> {
        self.cards.get(&id)
    }

    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Check that every id in a starting deck is known.
    pub fn validate_deck(&self, deck: &[CardId]) -> Result<()> {
        match deck.iter().find(|id| !self.contains(**id)) {
            Some(&missing) => Err(BattleError::UnknownCard(missing)),
            None => Ok(()),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all templates (arbitrary order).
    pub fn iter(&self) -> impl Iterator<Item = &CardTemplate> {
        self.cards.values()
    }
}
