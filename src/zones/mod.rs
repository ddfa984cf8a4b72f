//! Card locations during a battle.
//!
//! ## Key Types
//!
//! - `Deck`: draw pile, hand and discard pile, with draw/recycle rules
//! - `DrawReport`: how many cards a draw moved and whether it reshuffled

pub mod deck;

pub use deck::{Deck, DrawReport};
