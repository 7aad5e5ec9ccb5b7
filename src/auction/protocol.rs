//! Bid/pass state machine.
//!
//! Every solvent player enters with an open bid of 0. Bidders take turns in
//! seat order starting with the player who opened the auction. A bid must
//! beat the highest bid and be affordable; a pass withdraws the bidder for
//! the rest of the auction. Once at most one bidder is still open the
//! auction closes.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::board::Position;
use crate::core::{Money, Player, PlayerId};
use crate::error::{EngineError, Result};

/// A bidder's standing in the auction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Bid {
    /// Still bidding; the amount is the bidder's last bid (0 if none yet).
    Open(Money),
    /// Passed; out for the rest of this auction.
    Withdrawn,
}

impl Bid {
    /// Whether the bidder is still in.
    #[must_use]
    pub fn is_open(self) -> bool {
        matches!(self, Bid::Open(_))
    }
}

/// What a successful step of the protocol led to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Bidding continues with this player.
    Next(PlayerId),
    /// The auction is over and should be settled.
    Close,
}

/// Auction sub-state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Auction {
    /// Space being auctioned.
    pub position: Position,
    /// Standing of every player who entered.
    pub bids: FxHashMap<PlayerId, Bid>,
    /// Highest accepted bid (0 before any bid).
    pub highest_bid: Money,
    /// Who placed the highest bid.
    pub highest_bidder: Option<PlayerId>,
    /// Whose turn it is to bid or pass.
    pub current_bidder: PlayerId,
}

impl Auction {
    /// Open an auction with every solvent player at 0, `starter` first.
    #[must_use]
    pub fn open(position: Position, players: &[Player], starter: PlayerId) -> Self {
        let bids = players
            .iter()
            .filter(|p| p.is_active())
            .map(|p| (p.id, Bid::Open(0)))
            .collect();

        Self {
            position,
            bids,
            highest_bid: 0,
            highest_bidder: None,
            current_bidder: starter,
        }
    }

    /// Standing of a player, `None` if they never entered.
    #[must_use]
    pub fn bid_of(&self, id: PlayerId) -> Option<Bid> {
        self.bids.get(&id).copied()
    }

    /// Number of bidders still open.
    #[must_use]
    pub fn active_bidders(&self) -> usize {
        self.bids.values().filter(|b| b.is_open()).count()
    }

    /// Whether the auction should close.
    #[must_use]
    pub fn is_decided(&self) -> bool {
        self.active_bidders() <= 1
    }

    /// Whether a player can still act in this auction.
    #[must_use]
    pub fn is_eligible(&self, player: &Player) -> bool {
        !player.bankrupt && self.bid_of(player.id).is_some_and(Bid::is_open)
    }

    /// Next eligible bidder after the current one, scanning circularly.
    ///
    /// Returns `None` if the scan wraps back to the current bidder. That
    /// only happens if the auction should already have closed.
    #[must_use]
    pub fn next_bidder(&self, players: &[Player]) -> Option<PlayerId> {
        let count = players.len();
        let start = self.current_bidder.index();

        let next = (1..count)
            .map(|offset| &players[(start + offset) % count])
            .find(|p| self.is_eligible(p))
            .map(|p| p.id);

        if next.is_none() {
            warn!(
                current = self.current_bidder.0,
                active = self.active_bidders(),
                "no eligible bidder after wrap-around"
            );
        }
        next
    }

    /// The current bidder bids `amount`.
    ///
    /// Rejects (leaving the auction untouched) a bid that does not beat the
    /// highest bid, then one the bidder cannot afford.
    pub fn place_bid(&mut self, players: &[Player], amount: Money) -> Result<Step> {
        let bidder = &players[self.current_bidder.index()];

        if amount <= self.highest_bid {
            return Err(EngineError::BidTooLow {
                amount,
                highest: self.highest_bid,
            });
        }
        if amount > bidder.money {
            return Err(EngineError::InsufficientFunds {
                name: bidder.name.clone(),
                needed: amount,
                available: bidder.money,
            });
        }

        self.bids.insert(bidder.id, Bid::Open(amount));
        self.highest_bid = amount;
        self.highest_bidder = Some(bidder.id);

        Ok(self.advance(players))
    }

    /// The current bidder withdraws.
    pub fn pass(&mut self, players: &[Player]) -> Step {
        self.bids.insert(self.current_bidder, Bid::Withdrawn);

        if self.is_decided() {
            return Step::Close;
        }
        self.advance(players)
    }

    fn advance(&mut self, players: &[Player]) -> Step {
        match self.next_bidder(players) {
            Some(next) => {
                self.current_bidder = next;
                Step::Next(next)
            }
            None => Step::Close,
        }
    }

    /// The winner and price, if anyone placed a positive bid.
    #[must_use]
    pub fn result(&self) -> Option<(PlayerId, Money)> {
        match self.highest_bidder {
            Some(winner) if self.highest_bid > 0 => Some((winner, self.highest_bid)),
            _ => None,
        }
    }
}
