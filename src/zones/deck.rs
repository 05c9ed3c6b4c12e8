//! The draw deck.
//!
//! Built once per battle from the catalog and shuffled with the injected
//! RNG. Cards only ever leave from the front.

use std::collections::VecDeque;

use crate::cards::{Card, CardCatalog};
use crate::core::GameRng;

/// Ordered, shuffled working set of cards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Copy the catalog and shuffle it.
    #[must_use]
    pub fn build(catalog: &CardCatalog, rng: &mut GameRng) -> Self {
        let mut cards: Vec<Card> = catalog.cards().collect();
        rng.shuffle(&mut cards);
        tracing::debug!(cards = cards.len(), "deck built");
        Self {
            cards: cards.into(),
        }
    }

    /// A deck in exactly the given order, front first.
    #[must_use]
    pub fn from_ordered(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Remove and return the front card, or `None` once the deck is empty.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// Remaining card count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remaining cards in draw order.
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().copied()
    }
}
