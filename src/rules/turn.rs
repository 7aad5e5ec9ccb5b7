//! Turn order.

use tracing::{debug, warn};

use super::bankruptcy::check_game_over;
use crate::controller::GameEvent;
use crate::core::{GameState, Phase, PlayerId};

/// Whether the current player rolls again instead of passing the turn.
#[must_use]
pub fn earns_extra_roll(state: &GameState) -> bool {
    let player = state.current();
    state.dice.is_doubles()
        && state.doubles_count > 0
        && state.doubles_count < state.config.max_doubles
        && !player.in_jail
        && !player.bankrupt
}

/// Next solvent player after `from` in seat order, or `None` if every
/// other seat is bankrupt.
#[must_use]
pub fn next_solvent_player(state: &GameState, from: PlayerId) -> Option<PlayerId> {
    let count = state.player_count();
    (1..count)
        .map(|offset| PlayerId::new(((from.index() + offset) % count) as u8))
        .find(|&id| state.player(id).is_active())
}

/// Finish the current turn.
///
/// Doubles earn the same player another roll. Otherwise the next solvent
/// player starts, in `JailDecision` if jailed. With nobody left to pass
/// to, the game ends.
pub fn end_turn(state: &mut GameState) {
    if earns_extra_roll(state) {
        let name = state.current().name.clone();
        debug!(player = state.current_player.0, "extra roll for doubles");
        state.set_message(format!("{name} rolled doubles and goes again!"));
        state.phase = Phase::Rolling;
        return;
    }

    match next_solvent_player(state, state.current_player) {
        Some(next) => start_turn(state, next),
        None => {
            state.set_message("");
            if !check_game_over(state) {
                warn!(player = state.current_player.0, "no next player but game not decided");
            }
        }
    }
}

/// Hand the turn to a player.
pub fn start_turn(state: &mut GameState, id: PlayerId) {
    state.current_player = id;
    state.doubles_count = 0;
    state.turn_number += 1;

    let player = state.player(id);
    let name = player.name.clone();
    if player.in_jail {
        let turn = player.jail_turns + 1;
        let max_turns = state.config.max_jail_turns;
        state.set_message(format!("{name}'s turn. They are in jail (turn {turn} of {max_turns})."));
        state.phase = Phase::JailDecision;
    } else {
        state.set_message(format!("{name}'s turn. Roll the dice!"));
        state.phase = Phase::Rolling;
    }

    debug!(player = id.0, turn = state.turn_number, phase = %state.phase, "turn started");
    state.emit(GameEvent::TurnStarted {
        player: id,
        turn: state.turn_number,
    });
}
