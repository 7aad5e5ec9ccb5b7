//! Draw piles.
//!
//! A deck is a ring: drawing takes the head and puts it back at the tail, so
//! cards are never consumed and the deck size is fixed for the whole game.
//! Order is randomised once at setup and deterministic afterwards.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::catalog::cards_for;
use super::definition::{Card, DeckKind};
use crate::core::GameRng;

/// A cyclic draw pile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    kind: DeckKind,
    cards: Vector<Card>,
}

impl Deck {
    /// Create a deck from cards in the given order.
    #[must_use]
    pub fn new(kind: DeckKind, cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            kind,
            cards: cards.into_iter().collect(),
        }
    }

    /// The printed deck for a pile, unshuffled.
    #[must_use]
    pub fn standard(kind: DeckKind) -> Self {
        Self::new(kind, cards_for(kind))
    }

    /// Which pile this is.
    #[must_use]
    pub fn kind(&self) -> DeckKind {
        self.kind
    }

    /// Number of cards in the ring.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the deck holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The next card to be drawn.
    #[must_use]
    pub fn peek(&self) -> Option<&Card> {
        self.cards.front()
    }

    /// Iterate in draw order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Take the head card and requeue it at the tail.
    ///
    /// Returns `None` only for an empty deck.
    ///
    /// ```
    /// use rust_monopoly::cards::{Deck, DeckKind};
    ///
    /// let mut deck = Deck::standard(DeckKind::Chance);
    /// let first = deck.draw().unwrap();
    /// assert_eq!(deck.len(), 15);
    /// assert_eq!(deck.iter().last(), Some(&first));
    /// ```
    pub fn draw(&mut self) -> Option<Card> {
        let card = self.cards.pop_front()?;
        self.cards.push_back(card.clone());
        Some(card)
    }

    /// Shuffle the ring in place.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        let mut cards: Vec<Card> = self.cards.iter().cloned().collect();
        rng.shuffle(&mut cards);
        self.cards = cards.into_iter().collect();
    }
}
