//! Battle phases, scheduled continuations, and command outcomes.

use serde::{Deserialize, Serialize};

/// Exactly one phase is active. `Victory` and `Defeat` are terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BattlePhase {
    PlayerTurn,
    EnemyTurn,
    Victory,
    Defeat,
}

impl BattlePhase {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, BattlePhase::Victory | BattlePhase::Defeat)
    }
}

/// Work the battle has scheduled behind a presentation delay.
///
/// The phase already reflects the transition while a continuation waits,
/// so commands arriving during the delay are checked against it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Continuation {
    /// The player can afford nothing in hand; end their turn.
    AutoEndTurn,
    /// The enemy is about to act on its previewed intent.
    ResolveEnemyTurn,
}

/// Why a command did nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RejectReason {
    WrongPhase,
    NotInHand,
    NotEnoughEnergy,
    /// The card is in hand but missing from the catalog.
    UnknownCard,
    NothingPending,
}

/// Result of an inbound command. Rejections leave state untouched.
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CommandOutcome {
    Applied,
    Rejected(RejectReason),
}

impl CommandOutcome {
    #[must_use]
    pub fn is_applied(self) -> bool {
        self == CommandOutcome::Applied
    }
}
