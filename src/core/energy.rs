//! Per-turn energy resource.
//!
//! Energy gates how many cards the player can play in a turn. It is reset,
//! not topped up, at the start of every player turn.

use serde::{Deserialize, Serialize};

/// Current and maximum energy. `current` never exceeds `max`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Energy {
    current: u32,
    max: u32,
}

impl Energy {
    /// Create a full energy pool.
    #[must_use]
    pub fn new(max: u32) -> Self {
        Self { current: max, max }
    }

    /// Set the maximum and fill the pool.
    pub fn initialize(&mut self, max: u32) {
        self.max = max;
        self.current = max;
    }

    /// Reset to the turn allotment. Leftover energy is discarded.
    pub fn refill(&mut self, amount: u32) {
        self.current = amount.min(self.max);
    }

    /// Spend `amount` if available. No mutation on failure.
    #[must_use]
    pub fn try_spend(&mut self, amount: u32) -> bool {
        if amount > self.current {
            return false;
        }
        self.current -= amount;
        true
    }

    #[must_use]
    pub fn can_afford(&self, amount: u32) -> bool {
        amount <= self.current
    }

    #[must_use]
    pub fn current(&self) -> u32 {
        self.current
    }

    #[must_use]
    pub fn max(&self) -> u32 {
        self.max
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.current == 0
    }
}
