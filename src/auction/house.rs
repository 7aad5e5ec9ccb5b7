//! Running an auction against the game state.
//!
//! Opening, bidding, passing and settlement. Settlement transfers the space
//! to the highest bidder (if any bid was placed) and always ends in
//! `EndTurn`.

use tracing::{debug, info, warn};

use super::protocol::{Auction, Step};
use crate::controller::GameEvent;
use crate::core::{GameState, Money, Phase};
use crate::error::{EngineError, Result};

/// Open an auction for the space the current player stands on.
pub fn start_auction(state: &mut GameState) -> Result<()> {
    let starter = state.current_player;
    let space = state.current_space();

    if !space.is_available() {
        return Err(EngineError::PropertyUnavailable {
            position: space.position,
        });
    }

    let position = space.position;
    let space_name = space.name.clone();
    let auction = Auction::open(position, &state.players, starter);
    if auction.active_bidders() == 0 {
        return Err(EngineError::NoEligibleBidder);
    }

    let name = state.player(starter).name.clone();
    info!(position, starter = starter.0, bidders = auction.active_bidders(), "auction started");
    state.auction = Some(auction);
    state.phase = Phase::Auctioning;
    state.set_message(format!("Auction started for {space_name}. {name} to bid first."));
    state.emit(GameEvent::AuctionStarted { position, starter });
    Ok(())
}

/// The current bidder bids `amount`.
pub fn place_bid(state: &mut GameState, amount: Money) -> Result<()> {
    let auction = state.auction.as_mut().ok_or(EngineError::NoActiveAuction)?;
    let bidder = auction.current_bidder;
    let step = auction.place_bid(&state.players, amount)?;

    let name = state.player(bidder).name.clone();
    debug!(bidder = bidder.0, amount, "bid placed");
    state.emit(GameEvent::BidPlaced { bidder, amount });

    match step {
        Step::Next(next) => {
            let next_name = state.player(next).name.clone();
            state.set_message(format!("{name} bid ${amount}. {next_name}'s turn to bid."));
        }
        Step::Close => {
            state.set_message(format!("{name} bid ${amount}."));
            settle(state);
        }
    }
    Ok(())
}

/// The current bidder withdraws from the auction.
pub fn pass_bid(state: &mut GameState) -> Result<()> {
    let auction = state.auction.as_mut().ok_or(EngineError::NoActiveAuction)?;
    let bidder = auction.current_bidder;
    let step = auction.pass(&state.players);

    let name = state.player(bidder).name.clone();
    debug!(bidder = bidder.0, "bidder withdrew");
    state.emit(GameEvent::BidWithdrawn { bidder });

    match step {
        Step::Next(next) => {
            let next_name = state.player(next).name.clone();
            state.set_message(format!("{name} passed. {next_name}'s turn to bid."));
        }
        Step::Close => {
            state.set_message(format!("{name} passed."));
            settle(state);
        }
    }
    Ok(())
}

/// Close the running auction and move to `EndTurn`.
pub fn settle(state: &mut GameState) {
    let Some(auction) = state.auction.take() else {
        return;
    };
    let position = auction.position;
    let space_name = state.board.space(position).name.clone();

    match auction.result() {
        Some((winner, amount)) => {
            if state.board.assign_owner(position, winner) {
                let player = state.player_mut(winner);
                player.money -= amount;
                player.add_property(position);

                let name = player.name.clone();
                info!(winner = winner.0, position, amount, "auction won");
                state.announce(format!(
                    "{name} won the auction for {space_name} with a bid of ${amount}."
                ));
                state.emit(GameEvent::AuctionWon {
                    winner,
                    position,
                    amount,
                });
            } else {
                warn!(position, "auctioned space was no longer available");
                state.announce(format!("{space_name} could not be sold."));
                state.emit(GameEvent::AuctionUnsold { position });
            }
        }
        None => {
            info!(position, "auction closed without bids");
            state.announce("No one bid on the property. It remains unowned.");
            state.emit(GameEvent::AuctionUnsold { position });
        }
    }

    state.phase = Phase::EndTurn;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auction::Bid;
    use crate::core::{GameConfig, Player, PlayerId, Seat};

    fn state_on(position: u8, players: usize) -> GameState {
        let mut state = GameState::new(GameConfig::default());
        for id in PlayerId::all(players) {
            state.players.push(Player::new(id, format!("Player {}", id.0 + 1), Seat::Human, 1500, 200));
        }
        state.current_mut().position = position;
        state.phase = Phase::PropertyAction;
        state
    }

    #[test]
    fn test_start_auction() {
        let mut state = state_on(6, 3);

        start_auction(&mut state).unwrap();

        assert_eq!(state.phase, Phase::Auctioning);
        let auction = state.auction.as_ref().unwrap();
        assert_eq!(auction.position, 6);
        assert_eq!(auction.active_bidders(), 3);
        assert_eq!(state.message, "Auction started for Oriental Avenue. Player 1 to bid first.");
    }

    #[test]
    fn test_start_auction_on_owned_space() {
        let mut state = state_on(6, 2);
        state.board.assign_owner(6, PlayerId::new(1));

        assert_eq!(
            start_auction(&mut state),
            Err(EngineError::PropertyUnavailable { position: 6 })
        );
        assert!(state.auction.is_none());
    }

    #[test]
    fn test_start_auction_on_unownable_space() {
        let mut state = state_on(4, 2);
        assert!(start_auction(&mut state).is_err());
    }

    #[test]
    fn test_bid_without_auction() {
        let mut state = state_on(6, 2);
        assert_eq!(place_bid(&mut state, 10), Err(EngineError::NoActiveAuction));
        assert_eq!(pass_bid(&mut state), Err(EngineError::NoActiveAuction));
    }

    #[test]
    fn test_full_auction_transfers_ownership() {
        let mut state = state_on(6, 2);
        start_auction(&mut state).unwrap();

        place_bid(&mut state, 60).unwrap();
        assert_eq!(state.message, "Player 1 bid $60. Player 2's turn to bid.");

        pass_bid(&mut state).unwrap();

        assert!(state.auction.is_none());
        assert_eq!(state.phase, Phase::EndTurn);
        assert_eq!(state.board.owner_of(6), Some(PlayerId::new(0)));
        assert_eq!(state.player(PlayerId::new(0)).money, 1440);
        assert!(state.player(PlayerId::new(0)).owns(6));
        assert!(state.message.contains("won the auction for Oriental Avenue with a bid of $60"));
    }

    #[test]
    fn test_everyone_passes() {
        let mut state = state_on(6, 2);
        start_auction(&mut state).unwrap();

        pass_bid(&mut state).unwrap();

        assert_eq!(state.phase, Phase::EndTurn);
        assert!(state.board.owner_of(6).is_none());
        assert!(state.message.contains("It remains unowned."));
    }

    #[test]
    fn test_rejected_bid_keeps_auction() {
        let mut state = state_on(6, 2);
        start_auction(&mut state).unwrap();
        place_bid(&mut state, 60).unwrap();

        let before = state.auction.clone();
        assert!(place_bid(&mut state, 20).is_err());
        assert_eq!(state.auction, before);
        assert_eq!(
            state.auction.as_ref().unwrap().bid_of(PlayerId::new(1)),
            Some(Bid::Open(0))
        );
    }
}
