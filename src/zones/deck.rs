//! Deck engine: draw pile, hand, and discard pile.
//!
//! The three piles partition every card the battle's deck owns. Cards move
//! between piles but are never created or destroyed after
//! `build_and_shuffle`, so `total_cards()` is constant for the battle.
//!
//! The top of the draw pile is the last element of its `Vec`.

use smallvec::SmallVec;

use crate::cards::CardId;
use crate::core::rng::GameRng;

/// Result of a `draw` call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DrawReport {
    /// Cards moved into the hand.
    pub drawn: usize,
    /// Times the discard pile was recycled into the draw pile.
    pub reshuffles: usize,
}

/// Card locations for one battle.
///
/// ## Usage
///
/// ```
/// use rust_battler::cards::CardId;
/// use rust_battler::core::GameRng;
/// use rust_battler::zones::Deck;
///
/// let mut rng = GameRng::new(42);
/// let mut deck = Deck::new();
/// deck.build_and_shuffle(&[CardId::new(1); 6], &mut rng);
///
/// let report = deck.draw(5, &mut rng);
/// assert_eq!(report.drawn, 5);
/// assert_eq!(deck.hand().len(), 5);
/// assert_eq!(deck.total_cards(), 6);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Deck {
    draw_pile: Vec<CardId>,
    discard_pile: Vec<CardId>,
    hand: SmallVec<[CardId; 8]>,
}

impl Deck {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill the draw pile from a starting list, clear the other piles, shuffle.
    pub fn build_and_shuffle(&mut self, source: &[CardId], rng: &mut GameRng) {
        self.draw_pile.clear();
        self.draw_pile.extend_from_slice(source);
        self.discard_pile.clear();
        self.hand.clear();
        self.shuffle_draw_pile(rng);
    }

    pub fn shuffle_draw_pile(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.draw_pile);
    }

    /// Draw up to `count` cards into the hand.
    ///
    /// An empty draw pile is refilled from the discard pile (then shuffled).
    /// When both are empty the draw stops early.
    pub fn draw(&mut self, count: usize, rng: &mut GameRng) -> DrawReport {
        let mut report = DrawReport::default();

        for _ in 0..count {
            if self.draw_pile.is_empty() {
                if self.discard_pile.is_empty() {
                    break;
                }
                self.recycle_discard(rng);
                report.reshuffles += 1;
            }

            if let Some(card) = self.draw_pile.pop() {
                tracing::trace!(%card, "drew card");
                self.hand.push(card);
                report.drawn += 1;
            }
        }

        report
    }

    fn recycle_discard(&mut self, rng: &mut GameRng) {
        tracing::debug!(cards = self.discard_pile.len(), "recycling discard pile");
        self.draw_pile.append(&mut self.discard_pile);
        self.shuffle_draw_pile(rng);
    }

    /// Move one matching card from hand to discard.
    ///
    /// Returns `false` if the card was not in hand.
    pub fn discard_from_hand(&mut self, card: CardId) -> bool {
        match self.hand.iter().position(|&c| c == card) {
            Some(index) => {
                let card = self.hand.remove(index);
                self.discard_pile.push(card);
                true
            }
            None => false,
        }
    }

    /// Move every card in hand to the discard pile.
    pub fn discard_hand(&mut self) {
        self.discard_pile.extend(self.hand.drain(..));
    }

    #[must_use]
    pub fn hand_contains(&self, card: CardId) -> bool {
        self.hand.contains(&card)
    }

    #[must_use]
    pub fn hand(&self) -> &[CardId] {
        &self.hand
    }

    #[must_use]
    pub fn draw_pile(&self) -> &[CardId] {
        &self.draw_pile
    }

    #[must_use]
    pub fn discard_pile(&self) -> &[CardId] {
        &self.discard_pile
    }

    /// Cards across all three piles.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.draw_pile.len() + self.discard_pile.len() + self.hand.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(range: std::ops::Range<u32>) -> Vec<CardId> {
        range.map(CardId::new).collect()
    }

    #[test]
    fn test_build_and_shuffle() {
        let mut rng = GameRng::new(42);
        let mut deck = Deck::new();
        let source = ids(0..20);

        deck.build_and_shuffle(&source, &mut rng);

        assert_eq!(deck.draw_pile().len(), 20);
        assert!(deck.hand().is_empty());
        assert!(deck.discard_pile().is_empty());
        assert_ne!(deck.draw_pile(), source.as_slice());

        let mut sorted = deck.draw_pile().to_vec();
        sorted.sort();
        assert_eq!(sorted, source);
    }

    #[test]
    fn test_build_clears_previous_state() {
        let mut rng = GameRng::new(1);
        let mut deck = Deck::new();
        deck.build_and_shuffle(&ids(0..5), &mut rng);
        deck.draw(3, &mut rng);
        deck.discard_hand();

        deck.build_and_shuffle(&ids(10..12), &mut rng);
        assert_eq!(deck.total_cards(), 2);
        assert!(deck.discard_pile().is_empty());
    }

    #[test]
    fn test_draw_from_top() {
        let mut rng = GameRng::new(42);
        let mut deck = Deck::new();
        deck.build_and_shuffle(&ids(0..10), &mut rng);

        let top = *deck.draw_pile().last().unwrap();
        deck.draw(1, &mut rng);
        assert_eq!(deck.hand(), &[top]);
    }

    #[test]
    fn test_draw_recycles_discard_once() {
        let mut rng = GameRng::new(42);
        let mut deck = Deck::new();
        deck.build_and_shuffle(&ids(0..6), &mut rng);

        deck.draw(4, &mut rng);
        deck.discard_hand();
        // 2 in draw pile, 4 in discard
        let report = deck.draw(5, &mut rng);

        assert_eq!(report, DrawReport { drawn: 5, reshuffles: 1 });
        assert_eq!(deck.hand().len(), 5);
        assert_eq!(deck.draw_pile().len(), 1);
        assert!(deck.discard_pile().is_empty());
        assert_eq!(deck.total_cards(), 6);
    }

    #[test]
    fn test_draw_stops_when_everything_is_in_hand() {
        let mut rng = GameRng::new(42);
        let mut deck = Deck::new();
        deck.build_and_shuffle(&ids(0..3), &mut rng);

        let report = deck.draw(10, &mut rng);
        assert_eq!(report, DrawReport { drawn: 3, reshuffles: 0 });

        let report = deck.draw(10, &mut rng);
        assert_eq!(report, DrawReport::default());
    }

    #[test]
    fn test_empty_deck_draw() {
        let mut rng = GameRng::new(42);
        let mut deck = Deck::new();
        assert_eq!(deck.draw(5, &mut rng).drawn, 0);
    }

    #[test]
    fn test_discard_from_hand_removes_one_copy() {
        let mut rng = GameRng::new(42);
        let mut deck = Deck::new();
        let strike = CardId::new(1);
        deck.build_and_shuffle(&[strike, strike, strike], &mut rng);
        deck.draw(3, &mut rng);

        assert!(deck.discard_from_hand(strike));
        assert_eq!(deck.hand().len(), 2);
        assert_eq!(deck.discard_pile(), &[strike]);

        assert!(!deck.discard_from_hand(CardId::new(99)));
        assert_eq!(deck.total_cards(), 3);
    }

    #[test]
    fn test_discard_hand() {
        let mut rng = GameRng::new(42);
        let mut deck = Deck::new();
        deck.build_and_shuffle(&ids(0..8), &mut rng);
        deck.draw(5, &mut rng);

        deck.discard_hand();
        assert!(deck.hand().is_empty());
        assert_eq!(deck.discard_pile().len(), 5);
        assert_eq!(deck.total_cards(), 8);
    }
}
