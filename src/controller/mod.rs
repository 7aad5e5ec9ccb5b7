//! Phase controller and orchestration.
//!
//! - `game`: `Game`, the owner of the state and its public operations
//! - `event`: `GameEvent` feed and the `EventSink` it is delivered to
//! - `driver`: plays AI seats through the same operations a human uses

pub mod driver;
pub mod event;
pub mod game;

pub use driver::Driver;
pub use event::{EventSink, GameEvent, JailRelease, NullSink};
pub use game::{transition, Game, Outcome};
