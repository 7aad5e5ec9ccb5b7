//! Top-level game phases.
//!
//! ```text
//! Setup -> Rolling <-> JailDecision
//!            |
//!            v
//!      PropertyAction -> Auctioning -> EndTurn -> Rolling | JailDecision | GameOver
//! ```
//!
//! `GameOver` is terminal; only a reset returns to `Setup`.

use serde::{Deserialize, Serialize};

/// Phase of the game state machine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for seat configuration.
    #[default]
    Setup,
    /// Current player must roll.
    Rolling,
    /// Current player starts the turn jailed: pay, use a card, or roll.
    JailDecision,
    /// Current player stands on an unowned property: auction it or pass.
    PropertyAction,
    /// Bidding is open.
    Auctioning,
    /// Turn is resolved; waiting for end-turn.
    EndTurn,
    /// A single solvent player remains (or none).
    GameOver,
}

impl Phase {
    /// Whether the game is finished.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self == Phase::GameOver
    }

    /// Whether a game is underway (set up and not over).
    #[must_use]
    pub fn in_progress(self) -> bool {
        !matches!(self, Phase::Setup | Phase::GameOver)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Setup => "setup",
            Phase::Rolling => "rolling",
            Phase::JailDecision => "jail decision",
            Phase::PropertyAction => "property action",
            Phase::Auctioning => "auctioning",
            Phase::EndTurn => "end of turn",
            Phase::GameOver => "game over",
        };
        f.write_str(name)
    }
}
