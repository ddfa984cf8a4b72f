//! Card system: templates, effects, and the catalog.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for card templates
//! - `EffectId`: Identity shared by cards with the same limited-use heal
//! - `CardEffect`: Damage, block, heal and status amounts of a card
//! - `CardTemplate`: Immutable card data (title, cost, effect)
//! - `CardCatalog`: Template lookup, loadable from TOML or JSON

pub mod definition;
pub mod registry;
pub mod starter;

pub use definition::{CardEffect, CardId, CardTemplate, EffectId};
pub use registry::CardCatalog;
