//! Game state: the single aggregate every operation reads and writes.
//!
//! ## GameState
//!
//! - Players in turn order, the board and both decks
//! - Phase, current player, last dice and the doubles counter
//! - Running auction (if any), winner and the status message
//! - Turn counter and action history
//! - RNG
//!
//! Components receive `&mut GameState` (or the slice they need) and never
//! keep a copy of shared fields. The board, decks and history are `im`
//! structures, so cloning a whole state is cheap.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::{ActionRecord, Dice, Operation};
use super::config::GameConfig;
use super::phase::Phase;
use super::player::{Player, PlayerId};
use super::rng::GameRng;
use crate::auction::Auction;
use crate::board::{Board, Property};
use crate::cards::{Deck, DeckKind};
use crate::controller::GameEvent;

/// Status line shown before any game is set up.
pub const WELCOME_MESSAGE: &str = "Welcome to Monopoly! Set up your game to begin.";

/// Complete game state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    // === Configuration ===
    /// Rule constants.
    pub config: GameConfig,

    // === Table ===
    /// Players in turn order; `PlayerId` is the index.
    pub players: Vec<Player>,

    /// Board spaces and ownership.
    pub board: Board,

    /// Chance pile.
    pub chance: Deck,

    /// Community Chest pile.
    pub community_chest: Deck,

    // === Game Progression ===
    /// Current phase.
    pub phase: Phase,

    /// Player whose turn it is.
    pub current_player: PlayerId,

    /// Last dice rolled.
    pub dice: Dice,

    /// Consecutive doubles rolled by the current player this turn.
    pub doubles_count: u8,

    /// Bidding sub-state while `phase == Auctioning`.
    pub auction: Option<Auction>,

    /// Set on game over; `None` for a draw.
    pub winner: Option<PlayerId>,

    /// Human-readable status of the last operation.
    pub message: String,

    /// Turn number (starts at 1 once the game is set up).
    pub turn_number: u32,

    /// Accepted operations so far in this game.
    pub action_sequence: u32,

    /// Accepted operations, in order.
    pub history: Vector<ActionRecord>,

    /// Deterministic RNG for dice, shuffles and AI decisions.
    pub rng: GameRng,

    /// Events raised since the last drain.
    #[serde(skip)]
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create an empty table waiting for setup.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let rng = GameRng::new(config.seed);
        Self {
            config,
            players: Vec::new(),
            board: Board::standard(),
            chance: Deck::standard(DeckKind::Chance),
            community_chest: Deck::standard(DeckKind::CommunityChest),
            phase: Phase::Setup,
            current_player: PlayerId::new(0),
            dice: Dice::default(),
            doubles_count: 0,
            auction: None,
            winner: None,
            message: WELCOME_MESSAGE.to_string(),
            turn_number: 0,
            action_sequence: 0,
            history: Vector::new(),
            rng,
            events: Vec::new(),
        }
    }

    /// Get player count.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    // === Players ===

    /// Get a player by id.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    /// Get a mutable player by id.
    pub fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id.index()]
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current(&self) -> &Player {
        self.player(self.current_player)
    }

    /// Mutable access to the player whose turn it is.
    pub fn current_mut(&mut self) -> &mut Player {
        let id = self.current_player;
        self.player_mut(id)
    }

    /// Players that are not bankrupt.
    pub fn solvent_players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| p.is_active())
    }

    /// The space the current player stands on.
    #[must_use]
    pub fn current_space(&self) -> &Property {
        self.board.space(self.current().position)
    }

    // === Decks ===

    /// Get a deck.
    #[must_use]
    pub fn deck(&self, kind: DeckKind) -> &Deck {
        match kind {
            DeckKind::Chance => &self.chance,
            DeckKind::CommunityChest => &self.community_chest,
        }
    }

    /// Get a mutable deck.
    pub fn deck_mut(&mut self, kind: DeckKind) -> &mut Deck {
        match kind {
            DeckKind::Chance => &mut self.chance,
            DeckKind::CommunityChest => &mut self.community_chest,
        }
    }

    // === Messages & Events ===

    /// Replace the status message.
    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    /// Append a sentence to the status message.
    pub fn announce(&mut self, sentence: impl AsRef<str>) {
        if !self.message.is_empty() {
            self.message.push(' ');
        }
        self.message.push_str(sentence.as_ref());
    }

    /// Raise an event for the current operation.
    pub fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take the events raised since the last call.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    // === Action History ===

    /// Record an accepted operation.
    pub fn record_action(&mut self, player: PlayerId, operation: Operation) {
        let sequence = self.next_sequence();
        self.history.push_back(ActionRecord {
            player,
            operation,
            turn: self.turn_number,
            sequence,
        });
    }

    /// Get the next action sequence number and increment.
    pub fn next_sequence(&mut self) -> u32 {
        let seq = self.action_sequence;
        self.action_sequence += 1;
        seq
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Seat;

    fn two_player_state() -> GameState {
        let mut state = GameState::default();
        for id in PlayerId::all(2) {
            state.players.push(Player::new(
                id,
                format!("Player {}", id.0 + 1),
                Seat::Human,
                1500,
                200,
            ));
        }
        state
    }

    #[test]
    fn test_new_state() {
        let state = GameState::default();

        assert_eq!(state.phase, Phase::Setup);
        assert_eq!(state.player_count(), 0);
        assert_eq!(state.message, WELCOME_MESSAGE);
        assert_eq!(state.chance.len(), 15);
        assert_eq!(state.community_chest.len(), 17);
        assert!(state.auction.is_none());
    }

    #[test]
    fn test_player_access() {
        let mut state = two_player_state();

        state.current_mut().money -= 100;
        assert_eq!(state.player(PlayerId::new(0)).money, 1400);

        state.current_player = PlayerId::new(1);
        assert_eq!(state.current().name, "Player 2");
        assert_eq!(state.current_space().name, "GO");
    }

    #[test]
    fn test_solvent_players() {
        let mut state = two_player_state();
        assert_eq!(state.solvent_players().count(), 2);

        state.player_mut(PlayerId::new(1)).bankrupt = true;
        let solvent: Vec<_> = state.solvent_players().map(|p| p.id).collect();
        assert_eq!(solvent, vec![PlayerId::new(0)]);
    }

    #[test]
    fn test_announce_joins_sentences() {
        let mut state = two_player_state();
        state.set_message("Player 1 rolled 2 and 3.");
        state.announce("Player 1 paid $200 in taxes.");

        assert_eq!(state.message, "Player 1 rolled 2 and 3. Player 1 paid $200 in taxes.");
    }

    #[test]
    fn test_record_action() {
        let mut state = two_player_state();
        state.turn_number = 4;

        state.record_action(PlayerId::new(1), Operation::EndTurn);
        state.record_action(PlayerId::new(0), Operation::RollDice(Some(Dice::new(1, 2))));

        assert_eq!(state.history.len(), 2);
        assert_eq!(state.history[0].sequence, 0);
        assert_eq!(state.history[1].sequence, 1);
        assert_eq!(state.history[1].turn, 4);
    }

    #[test]
    fn test_events_drain() {
        let mut state = two_player_state();
        state.emit(GameEvent::Bankrupt {
            player: PlayerId::new(1),
        });

        assert_eq!(state.drain_events().len(), 1);
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_clone_is_independent() {
        let mut state = two_player_state();
        let snapshot = state.clone();

        state.current_mut().position = 12;
        state.chance.draw();

        assert_eq!(snapshot.current().position, 0);
        assert_ne!(snapshot.chance, state.chance);
    }
}
