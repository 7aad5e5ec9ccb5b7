//! Rejection reasons for engine operations.
//!
//! A rejected operation leaves the game untouched apart from the status
//! message, which is this error's `Display` text.

use thiserror::Error;

use crate::board::Position;
use crate::core::{Money, OperationKind, Phase};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Cannot {operation} during {phase}.")]
    WrongPhase { operation: OperationKind, phase: Phase },

    #[error("Please select 2-4 total players (got {0}).")]
    InvalidSeatCount(usize),

    #[error("Invalid dice roll: faces must be between 1 and 6.")]
    InvalidDice,

    #[error("Bid must be higher than the current highest bid of ${highest}.")]
    BidTooLow { amount: Money, highest: Money },

    #[error("{name} doesn't have enough money (needs ${needed}, has ${available}).")]
    InsufficientFunds {
        name: String,
        needed: Money,
        available: Money,
    },

    #[error("{name} has no Get Out of Jail Free card.")]
    NoJailCard { name: String },

    #[error("Space {position} cannot be auctioned.")]
    PropertyUnavailable { position: Position },

    #[error("No auction is running.")]
    NoActiveAuction,

    #[error("No eligible bidder remains in the auction.")]
    NoEligibleBidder,
}

pub type Result<T> = std::result::Result<T, EngineError>;
