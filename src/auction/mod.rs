//! Auctions for unowned spaces.
//!
//! - `protocol`: the bid/pass state machine over the bid map
//! - `house`: opening and settling auctions against the game state

pub mod house;
pub mod protocol;

pub use house::{pass_bid, place_bid, settle, start_auction};
pub use protocol::{Auction, Bid, Step};
