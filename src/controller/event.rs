//! Game events and the sink they are delivered to.
//!
//! Every accepted operation raises zero or more `GameEvent`s describing what
//! happened, in order. The engine only collects them into the operation's
//! `Outcome`; delivery to sounds, animation or logs is the business of an
//! `EventSink` the caller hands to the `Driver`.

use serde::{Deserialize, Serialize};

use crate::board::Position;
use crate::cards::DeckKind;
use crate::core::{Dice, Money, PlayerId};
use crate::rules::economy::GoSettlement;

/// How a player left jail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum JailRelease {
    /// Rolled doubles.
    Doubles,
    /// Paid the fine voluntarily.
    Fine,
    /// Spent a get-out-of-jail-free card.
    Card,
    /// Paid the fine after the last allowed jailed turn.
    Forced,
}

/// Something that happened during an operation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    GameStarted { players: usize },
    TurnStarted { player: PlayerId, turn: u32 },
    DiceRolled { player: PlayerId, dice: Dice },
    Moved { player: PlayerId, from: Position, to: Position },
    PassedGo { player: PlayerId, settlement: GoSettlement },
    RentPaid { payer: PlayerId, owner: PlayerId, position: Position, amount: Money },
    TaxPaid { player: PlayerId, position: Position, amount: Money },
    CardDrawn { player: PlayerId, deck: DeckKind, description: String },
    SentToJail { player: PlayerId },
    ReleasedFromJail { player: PlayerId, via: JailRelease },
    PropertyDeclined { player: PlayerId, position: Position },
    AuctionStarted { position: Position, starter: PlayerId },
    BidPlaced { bidder: PlayerId, amount: Money },
    BidWithdrawn { bidder: PlayerId },
    AuctionWon { winner: PlayerId, position: Position, amount: Money },
    AuctionUnsold { position: Position },
    Bankrupt { player: PlayerId },
    GameOver { winner: Option<PlayerId> },
}

/// Receiver for game events.
///
/// Injected into the `Driver`; the rules never reach for one.
pub trait EventSink {
    /// Handle one event.
    fn on_event(&mut self, event: &GameEvent);
}

/// Sink that discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn on_event(&mut self, _event: &GameEvent) {}
}

/// Collects events, mostly for tests and replays.
impl EventSink for Vec<GameEvent> {
    fn on_event(&mut self, event: &GameEvent) {
        self.push(event.clone());
    }
}
