//! Core engine types: players, state, operations, RNG, configuration.
//!
//! This module contains the building blocks shared by every other module.
//! Rule constants live in `GameConfig` rather than being scattered through
//! the resolver.

pub mod action;
pub mod config;
pub mod phase;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{ActionRecord, Dice, Operation, OperationKind};
pub use config::{GameConfig, SeatConfig, MAX_SEATS, MIN_SEATS};
pub use phase::Phase;
pub use player::{Money, Player, PlayerId, SalaryTrend, Seat};
pub use rng::{GameRng, GameRngState};
pub use state::{GameState, WELCOME_MESSAGE};
