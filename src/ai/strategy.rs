//! AI decision contract.
//!
//! A `Strategy` answers the questions the engine asks an AI seat: auction
//! this space or pass, keep bidding or withdraw, how much to bid, and how
//! long to "think" first. Strategies are stateless; every random choice
//! draws from the `GameRng` passed in, so a seeded game replays exactly.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::board::Property;
use crate::core::{GameRng, GameState, Money, Phase, Player};

/// AI personality identifier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AiStrategy {
    /// Rarely auctions and bids low.
    Passive,
    /// Middle of the road.
    #[default]
    Balanced,
    /// Auctions almost everything and outbids hard.
    Aggressive,
    /// Values spaces by monopoly potential and its own GO salary.
    Adaptive,
}

impl AiStrategy {
    /// All four personalities.
    pub const ALL: [AiStrategy; 4] = [
        AiStrategy::Passive,
        AiStrategy::Balanced,
        AiStrategy::Aggressive,
        AiStrategy::Adaptive,
    ];
}

impl std::fmt::Display for AiStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            AiStrategy::Passive => "passive",
            AiStrategy::Balanced => "balanced",
            AiStrategy::Aggressive => "aggressive",
            AiStrategy::Adaptive => "adaptive",
        };
        f.write_str(name)
    }
}

/// What an AI sees when asked for a decision.
#[derive(Clone, Copy, Debug)]
pub struct DecisionContext<'a> {
    /// The whole game, read-only.
    pub state: &'a GameState,
    /// The deciding player.
    pub player: &'a Player,
    /// Space under consideration; `None` means there is nothing to act on.
    pub property: Option<&'a Property>,
    /// Highest bid so far (0 outside auctions).
    pub current_bid: Money,
}

impl<'a> DecisionContext<'a> {
    /// Context for the current player deciding whether to auction the space
    /// they stand on.
    #[must_use]
    pub fn for_property_action(state: &'a GameState) -> Self {
        let player = state.current();
        let space = state.board.space(player.position);
        Self {
            state,
            player,
            property: (state.phase == Phase::PropertyAction && space.is_available()).then_some(space),
            current_bid: 0,
        }
    }

    /// Context for the current bidder of a running auction.
    #[must_use]
    pub fn for_auction(state: &'a GameState) -> Option<Self> {
        let auction = state.auction.as_ref()?;
        Some(Self {
            state,
            player: state.player(auction.current_bidder),
            property: Some(state.board.space(auction.position)),
            current_bid: auction.highest_bid,
        })
    }

    /// Whether the deciding player already holds the highest bid.
    #[must_use]
    pub fn holds_highest_bid(&self) -> bool {
        self.state
            .auction
            .as_ref()
            .is_some_and(|a| a.highest_bidder == Some(self.player.id))
    }
}

/// Decision policy for an AI seat.
pub trait Strategy: Send + Sync + std::fmt::Debug {
    /// Which personality this is.
    fn kind(&self) -> AiStrategy;

    /// Auction the space the player stands on, or pass on it.
    fn should_start_auction(&self, ctx: &DecisionContext<'_>, rng: &mut GameRng) -> bool;

    /// Raise the current highest bid, or withdraw.
    fn should_bid(&self, ctx: &DecisionContext<'_>, rng: &mut GameRng) -> bool;

    /// Amount to bid. Returns 0 when there is nothing to bid on.
    fn bid_amount(&self, ctx: &DecisionContext<'_>, rng: &mut GameRng) -> Money;

    /// Cosmetic pause a presentation layer may wait before acting.
    fn thinking_time(&self, rng: &mut GameRng) -> Duration;
}

/// Random delay in `[base, base + spread)` milliseconds.
pub(crate) fn thinking_millis(rng: &mut GameRng, base: u64, spread: i64) -> Duration {
    Duration::from_millis(base + rng.gen_range(0..spread) as u64)
}

/// Uniform factor in `[low, low + width)`.
pub(crate) fn jitter(rng: &mut GameRng, low: f64, width: f64) -> f64 {
    low + rng.gen_unit() * width
}

/// Floor an `f64` amount to whole money.
pub(crate) fn floor_money(amount: f64) -> Money {
    amount.floor() as Money
}
