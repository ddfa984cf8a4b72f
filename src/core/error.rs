//! Errors raised while loading battle data.
//!
//! Only external data can fail: config files, card catalogs and starting
//! decks that reference unknown cards. Once a `Battle` exists, rejected
//! commands are reported as `CommandOutcome` values instead.

use thiserror::Error;

use crate::cards::CardId;

#[derive(Debug, Error)]
pub enum BattleError {
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown card in starting deck: {0}")]
    UnknownCard(CardId),

    #[error("Card registered twice: {0}")]
    DuplicateCard(CardId),
}

pub type Result<T> = std::result::Result<T, BattleError>;
