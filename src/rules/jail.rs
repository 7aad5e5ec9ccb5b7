//! Jail entry and exit.
//!
//! A jailed player starts each turn in `JailDecision` and may pay the fine,
//! spend a card, or roll. Doubles free them; otherwise the jailed-turn count
//! grows and on the last allowed turn the fine is taken by force.

use tracing::debug;

use super::bankruptcy::check_solvency;
use crate::board::JAIL_POSITION;
use crate::controller::{GameEvent, JailRelease};
use crate::core::{Dice, GameState, Phase, PlayerId};
use crate::error::{EngineError, Result};

/// Result of rolling while jailed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JailRoll {
    /// Doubles: the player is out and moves.
    Released,
    /// The fine was taken after the last jailed turn; the player moves
    /// unless that bankrupted them.
    ForcedOut { bankrupt: bool },
    /// Still jailed; the turn is over.
    StillJailed,
}

/// Put a player in jail and clear the doubles streak.
pub fn send_to_jail(state: &mut GameState, id: PlayerId) {
    let player = state.player_mut(id);
    player.position = JAIL_POSITION;
    player.in_jail = true;
    player.jail_turns = 0;

    state.doubles_count = 0;
    debug!(player = id.0, "sent to jail");
    state.emit(GameEvent::SentToJail { player: id });
}

/// Free a jailed player.
pub fn release(state: &mut GameState, id: PlayerId, via: JailRelease) {
    let player = state.player_mut(id);
    player.in_jail = false;
    player.jail_turns = 0;

    debug!(player = id.0, ?via, "released from jail");
    state.emit(GameEvent::ReleasedFromJail { player: id, via });
}

/// Pay the fine to leave jail, then roll normally.
pub fn pay_fine(state: &mut GameState) -> Result<()> {
    let id = state.current_player;
    let fine = state.config.jail_fine;
    let player = state.player(id);

    if player.money < fine {
        return Err(EngineError::InsufficientFunds {
            name: player.name.clone(),
            needed: fine,
            available: player.money,
        });
    }

    let name = player.name.clone();
    state.player_mut(id).money -= fine;
    release(state, id, JailRelease::Fine);
    state.set_message(format!("{name} paid ${fine} to get out of jail."));
    state.phase = Phase::Rolling;
    Ok(())
}

/// Spend a get-out-of-jail-free card, then roll normally.
pub fn use_card(state: &mut GameState) -> Result<()> {
    let id = state.current_player;
    let player = state.player(id);

    if player.jail_free_cards == 0 {
        return Err(EngineError::NoJailCard {
            name: player.name.clone(),
        });
    }

    let name = player.name.clone();
    state.player_mut(id).jail_free_cards -= 1;
    release(state, id, JailRelease::Card);
    state.set_message(format!("{name} used a Get Out of Jail Free card."));
    state.phase = Phase::Rolling;
    Ok(())
}

/// Apply a roll made by a jailed player.
pub fn roll_in_jail(state: &mut GameState, dice: Dice) -> JailRoll {
    let id = state.current_player;
    let name = state.player(id).name.clone();

    if dice.is_doubles() {
        release(state, id, JailRelease::Doubles);
        state.announce(format!("{name} rolled doubles and got out of jail!"));
        return JailRoll::Released;
    }

    let max_turns = state.config.max_jail_turns;
    let player = state.player_mut(id);
    player.jail_turns += 1;
    let turns = player.jail_turns;

    if turns < max_turns {
        state.announce(format!("{name} is still in jail (turn {turns} of {max_turns})."));
        return JailRoll::StillJailed;
    }

    let fine = state.config.jail_fine;
    state.player_mut(id).money -= fine;
    release(state, id, JailRelease::Forced);
    state.announce(format!("{name} paid ${fine} to get out of jail after {max_turns} turns."));
    let bankrupt = check_solvency(state, id);
    JailRoll::ForcedOut { bankrupt }
}
