//! Card system: definitions, decks and the dispenser.
//!
//! ## Key Types
//!
//! - `Card` / `CardAction`: static card data, one action per card
//! - `DeckKind`: Chance or Community Chest
//! - `Deck`: cyclic draw pile (head is drawn and requeued at the tail)
//! - `CardOutcome`: what applying a card did to the drawing player

pub mod catalog;
pub mod deck;
pub mod definition;
pub mod dispenser;

pub use catalog::{cards_for, chance_cards, community_chest_cards};
pub use deck::Deck;
pub use definition::{Card, CardAction, DeckKind};
pub use dispenser::{apply, draw, resolve_target, CardOutcome};
