//! # rust-monopoly
//!
//! A Monopoly-style board game engine with pluggable AI personalities.
//!
//! ## Design Principles
//!
//! 1. **One Owner**: `Game` exclusively owns the `GameState`. Every other
//!    module works on `&mut GameState` handed to it and keeps no copy.
//!
//! 2. **Phase Guards**: Each operation is accepted in specific phases only.
//!    A rejected operation is a value, not a panic, and changes nothing but
//!    the status message.
//!
//! 3. **Deterministic**: Dice, deck shuffles and AI choices all draw from a
//!    seeded `GameRng`, so a seed plus the operation history replays a game.
//!
//! ## Architecture
//!
//! - **Shrinking GO Salary**: each player's salary falls by a step every
//!   pass of GO. At zero the player enters recession and pays instead.
//!
//! - **Auctions Only**: unowned spaces are never bought outright; the
//!   landing player auctions them or passes.
//!
//! - **Persistent Data Structures**: `im-rs` keeps decks, the board and the
//!   history cheap to clone for `transition`.
//!
//! ## Modules
//!
//! - `core`: Players, configuration, phases, operations, RNG and state
//! - `board`: The 40 spaces, ownership and rent
//! - `cards`: Chance and Community Chest decks
//! - `rules`: Movement, landing, jail, GO salary and bankruptcy
//! - `auction`: The bid/pass protocol
//! - `ai`: Strategy trait and the four personalities
//! - `controller`: The `Game` phase controller, events and the AI driver

pub mod core;
pub mod board;
pub mod cards;
pub mod rules;
pub mod auction;
pub mod ai;
pub mod controller;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    Dice, GameConfig, GameRng, GameRngState, GameState, Money, Operation, OperationKind, Phase,
    Player, PlayerId, SalaryTrend, Seat, SeatConfig,
};

pub use crate::board::{Board, ColorGroup, Position, Property, SpaceKind};

pub use crate::cards::{Card, CardAction, Deck, DeckKind};

pub use crate::auction::{Auction, Bid};

pub use crate::ai::{strategy_for, AiStrategy, DecisionContext, Strategy};

pub use crate::controller::{
    transition, Driver, EventSink, Game, GameEvent, JailRelease, NullSink, Outcome,
};

pub use crate::error::{EngineError, Result};
