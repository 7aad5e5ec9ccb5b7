//! Turn resolver.
//!
//! - `movement`: dice, the doubles streak and moving around the board
//! - `landing`: rent, tax, cards and corners
//! - `jail`: entry, fines, cards and release
//! - `economy`: per-player GO salary that decays into recession
//! - `bankruptcy`: the one-way latch and game-over detection
//! - `turn`: extra rolls and passing the turn
//!
//! Every function here works on `&mut GameState` and leaves it in the next
//! phase. Phase guards are the controller's job.

pub mod bankruptcy;
pub mod economy;
pub mod jail;
pub mod landing;
pub mod movement;
pub mod turn;

pub use bankruptcy::{charge, check_game_over, check_solvency, close_move, finish_game};
pub use economy::{pass_go, settle_salary, GoSettlement};
pub use jail::{JailRoll, pay_fine, release, roll_in_jail, send_to_jail, use_card};
pub use landing::resolve_landing;
pub use movement::{advance, resolve_roll, roll};
pub use turn::{earns_extra_roll, end_turn, next_solvent_player, start_turn};
