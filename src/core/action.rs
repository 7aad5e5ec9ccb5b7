//! Operations a caller may invoke, and the history record of accepted ones.
//!
//! An `Operation` is the full request (with its argument, e.g. a bid amount);
//! an `OperationKind` is the bare verb, used for phase tables and messages.

use serde::{Deserialize, Serialize};

use super::config::SeatConfig;
use super::player::{Money, PlayerId};

/// A pair of dice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dice(pub u8, pub u8);

impl Dice {
    /// Create a roll from two face values.
    #[must_use]
    pub const fn new(first: u8, second: u8) -> Self {
        Self(first, second)
    }

    /// Sum of both dice.
    #[must_use]
    pub const fn sum(self) -> u8 {
        self.0 + self.1
    }

    /// Whether both dice show the same face.
    #[must_use]
    pub const fn is_doubles(self) -> bool {
        self.0 == self.1
    }

    /// Whether both faces are in `1..=6`.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 >= 1 && self.0 <= 6 && self.1 >= 1 && self.1 <= 6
    }
}

impl std::fmt::Display for Dice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} and {}", self.0, self.1)
    }
}

/// A request to the phase controller.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operation {
    /// Seat players and start the game.
    Setup(SeatConfig),
    /// Roll from the `Rolling` phase. `None` draws dice from the game RNG.
    RollDice(Option<Dice>),
    /// Roll for doubles from `JailDecision`. `None` draws dice from the game RNG.
    RollForJail(Option<Dice>),
    /// Pay the fine to leave jail.
    PayJailFine,
    /// Spend a get-out-of-jail-free card.
    UseJailCard,
    /// Put the current space up for auction.
    StartAuction,
    /// Bid for the auctioned property.
    PlaceBid(Money),
    /// Withdraw from the running auction.
    PassBid,
    /// Decline to auction the current space.
    Pass,
    /// Finish the turn.
    EndTurn,
    /// Abandon the game and return to setup.
    Reset,
}

impl Operation {
    /// The bare verb of this operation.
    #[must_use]
    pub fn kind(&self) -> OperationKind {
        match self {
            Operation::Setup(_) => OperationKind::Setup,
            Operation::RollDice(_) => OperationKind::RollDice,
            Operation::RollForJail(_) => OperationKind::RollForJail,
            Operation::PayJailFine => OperationKind::PayJailFine,
            Operation::UseJailCard => OperationKind::UseJailCard,
            Operation::StartAuction => OperationKind::StartAuction,
            Operation::PlaceBid(_) => OperationKind::PlaceBid,
            Operation::PassBid => OperationKind::PassBid,
            Operation::Pass => OperationKind::Pass,
            Operation::EndTurn => OperationKind::EndTurn,
            Operation::Reset => OperationKind::Reset,
        }
    }
}

/// Operation verbs without arguments.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperationKind {
    Setup,
    RollDice,
    RollForJail,
    PayJailFine,
    UseJailCard,
    StartAuction,
    PlaceBid,
    PassBid,
    Pass,
    EndTurn,
    Reset,
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            OperationKind::Setup => "set up the game",
            OperationKind::RollDice => "roll the dice",
            OperationKind::RollForJail => "roll for doubles",
            OperationKind::PayJailFine => "pay the jail fine",
            OperationKind::UseJailCard => "use a jail card",
            OperationKind::StartAuction => "start an auction",
            OperationKind::PlaceBid => "place a bid",
            OperationKind::PassBid => "pass on bidding",
            OperationKind::Pass => "pass on the property",
            OperationKind::EndTurn => "end the turn",
            OperationKind::Reset => "reset the game",
        };
        f.write_str(name)
    }
}

/// A recorded operation with metadata for history tracking.
///
/// Used for:
/// - Replaying a seeded game
/// - Debugging AI behaviour
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player acting (the bidder during auctions).
    pub player: PlayerId,

    /// The operation accepted. Random rolls are recorded with the dice drawn.
    pub operation: Operation,

    /// Turn number when the operation was accepted.
    pub turn: u32,

    /// Sequence number within the game.
    pub sequence: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::AiStrategy;

    #[test]
    fn test_dice_basics() {
        let roll = Dice::new(3, 3);
        assert_eq!(roll.sum(), 6);
        assert!(roll.is_doubles());
        assert!(roll.is_valid());

        let roll = Dice::new(2, 5);
        assert_eq!(roll.sum(), 7);
        assert!(!roll.is_doubles());
    }

    #[test]
    fn test_dice_validity() {
        assert!(!Dice::new(0, 3).is_valid());
        assert!(!Dice::new(3, 7).is_valid());
        assert!(Dice::new(1, 6).is_valid());
    }

    #[test]
    fn test_operation_kind() {
        assert_eq!(Operation::PlaceBid(40).kind(), OperationKind::PlaceBid);
        assert_eq!(Operation::RollDice(None).kind(), OperationKind::RollDice);
        assert_eq!(
            Operation::Setup(SeatConfig::new(1, 1, AiStrategy::Passive)).kind(),
            OperationKind::Setup
        );
    }

    #[test]
    fn test_action_record_serialization() {
        let record = ActionRecord {
            player: PlayerId::new(1),
            operation: Operation::RollDice(Some(Dice::new(4, 2))),
            turn: 3,
            sequence: 17,
        };

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: ActionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }
}
