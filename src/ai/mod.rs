//! Computer players.
//!
//! - `strategy`: the `Strategy` trait and the `DecisionContext` it reads
//! - `passive`, `balanced`, `aggressive`, `adaptive`: the four personalities
//! - `registry`: maps an `AiStrategy` to its shared implementation
//!
//! Strategies only decide. Applying the decision is the controller's
//! `Driver`.

pub mod adaptive;
pub mod aggressive;
pub mod balanced;
pub mod passive;
pub mod registry;
pub mod strategy;

pub use adaptive::Adaptive;
pub use aggressive::Aggressive;
pub use balanced::Balanced;
pub use passive::Passive;
pub use registry::strategy_for;
pub use strategy::{AiStrategy, DecisionContext, Strategy};

#[cfg(test)]
pub(crate) mod test_support {
    use super::{AiStrategy, DecisionContext};
    use crate::auction::{Auction, Bid};
    use crate::board::Position;
    use crate::core::{GameConfig, GameState, Money, Player, PlayerId, Seat};

    /// Two AI seats with $1500 each and an auction running on `position`.
    /// The second seat is up; a non-zero `highest_bid` belongs to the first.
    pub(crate) fn auction_state(position: Position, highest_bid: Money) -> GameState {
        let mut state = GameState::new(GameConfig::default());
        for id in PlayerId::all(2) {
            let name = format!("AI {}", id.0 + 1);
            state
                .players
                .push(Player::new(id, name, Seat::Ai(AiStrategy::Balanced), 1500, 200));
        }

        let mut auction = Auction::open(position, &state.players, PlayerId::new(1));
        if highest_bid > 0 {
            auction.highest_bid = highest_bid;
            auction.highest_bidder = Some(PlayerId::new(0));
            auction.bids.insert(PlayerId::new(0), Bid::Open(highest_bid));
        }
        state.auction = Some(auction);
        state
    }

    pub(crate) fn bid_context(state: &GameState) -> DecisionContext<'_> {
        DecisionContext::for_auction(state).unwrap()
    }
}
