//! Card definitions.
//!
//! Each card carries a single `CardAction`. The action is a tagged union so
//! a card can never pair, say, a repairs cost with a jail flag.

use serde::{Deserialize, Serialize};

use crate::board::Position;
use crate::core::Money;

/// The two draw piles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeckKind {
    Chance,
    CommunityChest,
}

impl std::fmt::Display for DeckKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeckKind::Chance => f.write_str("Chance"),
            DeckKind::CommunityChest => f.write_str("Community Chest"),
        }
    }
}

/// What a card does when applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardAction {
    /// Move forward to an absolute board position, collecting GO on the way.
    MoveTo(Position),
    /// Move back a number of spaces. Never passes GO.
    MoveBack(u8),
    /// Receive (positive) or pay (negative) money.
    Money(Money),
    /// Go directly to jail.
    GoToJail,
    /// Keep a get-out-of-jail-free card.
    GetOutOfJailFree,
    /// Pay a fixed amount per owned property.
    Repairs { per_property: Money },
}

/// A Chance or Community Chest card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Which pile the card belongs to.
    pub deck: DeckKind,
    /// Card text.
    pub description: String,
    /// Effect on the drawing player.
    pub action: CardAction,
}

impl Card {
    /// Create a new card.
    #[must_use]
    pub fn new(deck: DeckKind, description: impl Into<String>, action: CardAction) -> Self {
        Self {
            deck,
            description: description.into(),
            action,
        }
    }
}
