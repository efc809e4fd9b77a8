use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::GameError;

/// An ordered 52-card deck that only ever shrinks.
///
/// Cards are drawn from the front. A deck is built for one game and thrown
/// away with it.
///
/// # Examples
///
/// ```
/// use cardsaga_engine::deck::Deck;
///
/// let mut a = Deck::new_with_seed(42);
/// let mut b = Deck::new_with_seed(42);
/// assert_eq!(a.draw(), b.draw());
/// assert_eq!(a.remaining(), 51);
/// ```
#[derive(Debug, Clone)]
pub struct Deck {
    /// Cards in dealing order, including those already drawn
    cards: Vec<Card>,
    /// Index of the next card to draw
    position: usize,
}

impl Deck {
    /// Canonical order, then a Fisher-Yates shuffle driven by `rng`.
    pub fn new_shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = full_deck();
        cards.shuffle(rng);
        tracing::debug!(top = %cards[0], "shuffled fresh deck");
        Self { cards, position: 0 }
    }

    pub fn new_with_seed(seed: u64) -> Self {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        Self::new_shuffled(&mut rng)
    }

    /// Builds a deck in an explicit dealing order. The order must be a
    /// permutation of the 52 canonical cards.
    pub fn from_order(cards: Vec<Card>) -> Result<Self, GameError> {
        if cards.len() != 52 {
            return Err(GameError::InvalidDeck(format!(
                "expected 52 cards, got {}",
                cards.len()
            )));
        }
        let mut seen = HashSet::with_capacity(52);
        for c in &cards {
            if !seen.insert(*c) {
                return Err(GameError::InvalidDeck(format!("duplicate card {}", c)));
            }
        }
        Ok(Self { cards, position: 0 })
    }

    pub fn draw(&mut self) -> Result<Card, GameError> {
        let c = self
            .cards
            .get(self.position)
            .copied()
            .ok_or(GameError::EmptyDeck)?;
        self.position += 1;
        Ok(c)
    }

    /// Draws `n` cards, or none at all when fewer than `n` remain.
    pub fn draw_n(&mut self, n: usize) -> Result<Vec<Card>, GameError> {
        if self.remaining() < n {
            return Err(GameError::EmptyDeck);
        }
        let drawn = self.cards[self.position..self.position + n].to_vec();
        self.position += n;
        Ok(drawn)
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Undrawn cards, next card first.
    pub fn peek_remaining(&self) -> &[Card] {
        &self.cards[self.position..]
    }
}
