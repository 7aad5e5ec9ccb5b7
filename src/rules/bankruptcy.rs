//! Bankruptcy latch and game-over detection.
//!
//! A balance that goes negative latches bankruptcy on the spot. Any move
//! that ends with at most one solvent player ends the game.

use smallvec::SmallVec;
use tracing::info;

use crate::controller::GameEvent;
use crate::core::{GameState, Money, Phase, PlayerId};

/// Debit a player, latching bankruptcy if the balance goes negative.
///
/// Returns true when this debit bankrupted the player.
pub fn charge(state: &mut GameState, id: PlayerId, amount: Money) -> bool {
    state.player_mut(id).money -= amount;
    check_solvency(state, id)
}

/// Latch bankruptcy if the player's balance is negative.
///
/// Returns true only on the call that flips the latch.
pub fn check_solvency(state: &mut GameState, id: PlayerId) -> bool {
    let player = state.player_mut(id);
    if !player.latch_bankruptcy() {
        return false;
    }

    let name = player.name.clone();
    info!(player = id.0, money = player.money, "player went bankrupt");
    state.announce(format!("{name} went bankrupt!"));
    state.emit(GameEvent::Bankrupt { player: id });
    true
}

/// End the game if at most one solvent player remains.
///
/// Returns true if the game is now over.
pub fn check_game_over(state: &mut GameState) -> bool {
    if state.phase == Phase::GameOver {
        return true;
    }

    let solvent: SmallVec<[PlayerId; 4]> = state.solvent_players().map(|p| p.id).collect();
    if solvent.len() > 1 {
        return false;
    }

    finish_game(state, solvent.first().copied());
    true
}

/// Move to `GameOver` with the given winner (`None` for a draw).
pub fn finish_game(state: &mut GameState, winner: Option<PlayerId>) {
    state.phase = Phase::GameOver;
    state.winner = winner;
    state.auction = None;

    match winner {
        Some(id) => {
            let name = state.player(id).name.clone();
            info!(winner = id.0, turn = state.turn_number, "game over");
            state.announce(format!("Game over! {name} wins!"));
        }
        None => {
            info!(turn = state.turn_number, "game over without a winner");
            state.announce("Game over! It's a draw!");
        }
    }
    state.emit(GameEvent::GameOver { winner });
}

/// Finish the current move: game over if it is decided, otherwise wait
/// for the end of the turn.
pub fn close_move(state: &mut GameState) {
    if !check_game_over(state) {
        state.phase = Phase::EndTurn;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameConfig, Player, Seat};

    fn state_with(players: usize) -> GameState {
        let mut state = GameState::new(GameConfig::default());
        for id in PlayerId::all(players) {
            state.players.push(Player::new(id, format!("Player {}", id.0 + 1), Seat::Human, 100, 200));
        }
        state.phase = Phase::Rolling;
        state.set_message("");
        state
    }

    #[test]
    fn test_charge_within_means() {
        let mut state = state_with(2);

        assert!(!charge(&mut state, PlayerId::new(0), 100));
        assert_eq!(state.player(PlayerId::new(0)).money, 0);
        assert!(!state.player(PlayerId::new(0)).bankrupt);
    }

    #[test]
    fn test_charge_latches_bankruptcy() {
        let mut state = state_with(3);

        assert!(charge(&mut state, PlayerId::new(1), 101));
        assert!(state.player(PlayerId::new(1)).bankrupt);
        assert_eq!(state.message, "Player 2 went bankrupt!");
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::Bankrupt {
                player: PlayerId::new(1)
            }]
        );

        // Already latched
        assert!(!charge(&mut state, PlayerId::new(1), 10));
    }

    #[test]
    fn test_game_continues_with_two_solvent() {
        let mut state = state_with(3);
        state.player_mut(PlayerId::new(2)).bankrupt = true;

        assert!(!check_game_over(&mut state));
        assert_eq!(state.phase, Phase::Rolling);
    }

    #[test]
    fn test_last_solvent_player_wins() {
        let mut state = state_with(2);
        charge(&mut state, PlayerId::new(0), 500);

        close_move(&mut state);

        assert_eq!(state.phase, Phase::GameOver);
        assert_eq!(state.winner, Some(PlayerId::new(1)));
        assert!(state.message.ends_with("Game over! Player 2 wins!"));
    }

    #[test]
    fn test_no_solvent_players_is_a_draw() {
        let mut state = state_with(2);
        state.player_mut(PlayerId::new(0)).bankrupt = true;
        state.player_mut(PlayerId::new(1)).bankrupt = true;

        assert!(check_game_over(&mut state));
        assert_eq!(state.winner, None);
        assert_eq!(state.message, "Game over! It's a draw!");
    }

    #[test]
    fn test_close_move_without_bankruptcy() {
        let mut state = state_with(2);
        close_move(&mut state);
        assert_eq!(state.phase, Phase::EndTurn);
    }
}
