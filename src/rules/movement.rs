//! Dice and movement.
//!
//! A roll updates the doubles streak, resolves jail if the roller is jailed,
//! sends a player who just rolled too many doubles to jail, and otherwise
//! moves them `sum` spaces clockwise, settling GO salary when the move wraps.

use tracing::debug;

use super::bankruptcy::{check_solvency, close_move};
use super::economy::{pass_go, GoSettlement};
use super::jail::{roll_in_jail, send_to_jail, JailRoll};
use super::landing::resolve_landing;
use crate::board;
use crate::controller::GameEvent;
use crate::core::{Dice, GameRng, GameState, Phase};

/// Roll two dice from the game RNG.
pub fn roll(rng: &mut GameRng) -> Dice {
    Dice::new(rng.roll_die(), rng.roll_die())
}

/// Resolve a roll for the current player, including jail, movement and
/// landing. Leaves the state in the next phase.
pub fn resolve_roll(state: &mut GameState, dice: Dice) {
    let id = state.current_player;
    let name = state.player(id).name.clone();

    state.dice = dice;
    state.doubles_count = if dice.is_doubles() {
        state.doubles_count + 1
    } else {
        0
    };
    debug!(player = id.0, die1 = dice.0, die2 = dice.1, doubles = state.doubles_count, "dice rolled");
    state.emit(GameEvent::DiceRolled { player: id, dice });
    state.set_message(format!("{name} rolled {dice}."));

    if state.player(id).in_jail {
        match roll_in_jail(state, dice) {
            JailRoll::StillJailed => {
                state.phase = Phase::EndTurn;
                return;
            }
            JailRoll::ForcedOut { bankrupt: true } => {
                close_move(state);
                return;
            }
            JailRoll::Released | JailRoll::ForcedOut { bankrupt: false } => {}
        }
    }

    if state.doubles_count >= state.config.max_doubles {
        let streak = state.doubles_count;
        state.announce(format!("{name} rolled doubles {streak} times in a row and went to jail!"));
        send_to_jail(state, id);
        state.phase = Phase::EndTurn;
        return;
    }

    advance(state, dice.sum());
}

/// Move the current player `steps` spaces clockwise and resolve the landing.
///
/// Wrapping past GO steps and settles the player's salary first. A recession
/// payment that bankrupts the player ends the move without resolving the
/// landing.
pub fn advance(state: &mut GameState, steps: u8) {
    let id = state.current_player;
    let from = state.player(id).position;
    let to = board::advance(from, steps);

    let mut bankrupt = false;
    if to < from {
        let step = state.config.go_salary_step;
        let settlement = pass_go(state.player_mut(id), step);
        let name = state.player(id).name.clone();

        match settlement {
            GoSettlement::Collected(amount) => {
                state.announce(format!("{name} passed GO and collected ${amount}!"));
            }
            GoSettlement::Paid(amount) => {
                state.announce(format!("{name} passed GO during recession and paid ${amount}!"));
            }
        }
        state.emit(GameEvent::PassedGo { player: id, settlement });
        bankrupt = check_solvency(state, id);
    }

    state.player_mut(id).position = to;
    state.emit(GameEvent::Moved { player: id, from, to });

    if bankrupt {
        close_move(state);
    } else {
        resolve_landing(state);
    }
}
