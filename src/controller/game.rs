//! The phase controller.
//!
//! `Game` owns the single `GameState` and is the only way callers change
//! it. Each public operation checks the phase, runs the matching resolver,
//! and reports an `Outcome`. A rejected operation changes nothing except
//! the status message.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::event::GameEvent;
use crate::auction;
use crate::core::{
    Dice, GameConfig, GameState, Money, Operation, OperationKind, Phase, Player, PlayerId, Seat,
    SeatConfig,
};
use crate::error::{EngineError, Result};
use crate::rules;

const PLAYER_COLORS: [&str; 4] = ["#FF5252", "#4CAF50", "#2196F3", "#FFC107"];
const PLAYER_TOKENS: [&str; 4] = ["car", "ship", "hat", "dog"];

/// What an operation did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    /// `Ok` if the operation was accepted.
    pub result: Result<()>,
    /// Status message after the operation.
    pub message: String,
    /// The turn is resolved and only `EndTurn` remains, so a frontend may
    /// end it on the player's behalf after a pause.
    pub auto_end_turn: bool,
    /// Events raised, in order.
    pub events: Vec<GameEvent>,
}

impl Outcome {
    /// Whether the operation was accepted.
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        self.result.is_ok()
    }
}

/// Phases in which an operation is accepted. `Reset` is always accepted.
fn accepted_in(kind: OperationKind, phase: Phase) -> bool {
    match kind {
        OperationKind::Setup => phase == Phase::Setup,
        OperationKind::RollDice => phase == Phase::Rolling,
        OperationKind::RollForJail | OperationKind::PayJailFine | OperationKind::UseJailCard => {
            phase == Phase::JailDecision
        }
        OperationKind::StartAuction | OperationKind::Pass => phase == Phase::PropertyAction,
        OperationKind::PlaceBid | OperationKind::PassBid => phase == Phase::Auctioning,
        OperationKind::EndTurn => phase == Phase::EndTurn,
        OperationKind::Reset => true,
    }
}

const ALL_KINDS: [OperationKind; 11] = [
    OperationKind::Setup,
    OperationKind::RollDice,
    OperationKind::RollForJail,
    OperationKind::PayJailFine,
    OperationKind::UseJailCard,
    OperationKind::StartAuction,
    OperationKind::PlaceBid,
    OperationKind::PassBid,
    OperationKind::Pass,
    OperationKind::EndTurn,
    OperationKind::Reset,
];

/// A game of Monopoly.
///
/// ## Example
///
/// ```
/// use rust_monopoly::ai::AiStrategy;
/// use rust_monopoly::controller::Game;
/// use rust_monopoly::core::{Dice, GameConfig, Phase, SeatConfig};
///
/// let mut game = Game::new(GameConfig::default());
/// game.setup_game(SeatConfig::new(2, 0, AiStrategy::Balanced));
///
/// let outcome = game.roll_dice_with(Dice::new(3, 3));
/// assert!(outcome.is_accepted());
/// assert_eq!(game.state().phase, Phase::PropertyAction);
/// assert!(outcome.message.contains("Oriental Avenue"));
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Game {
    state: GameState,
}

impl Game {
    /// Create a game waiting for setup.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self {
            state: GameState::new(config),
        }
    }

    /// Wrap an existing state, e.g. a snapshot or a hand-built scenario.
    #[must_use]
    pub fn from_state(state: GameState) -> Self {
        Self { state }
    }

    /// Read the game state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable access for building scenarios. Bypasses every rule.
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Give the state back.
    #[must_use]
    pub fn into_state(self) -> GameState {
        self.state
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    /// Current status message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.state.message
    }

    /// Whether the game has finished.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.phase.is_terminal()
    }

    /// The player who must act next: the current bidder during an auction,
    /// otherwise the player whose turn it is. `None` before setup.
    #[must_use]
    pub fn acting_player(&self) -> Option<PlayerId> {
        if self.state.players.is_empty() {
            return None;
        }
        match (&self.state.auction, self.state.phase) {
            (Some(auction), Phase::Auctioning) => Some(auction.current_bidder),
            _ => Some(self.state.current_player),
        }
    }

    /// Operations the current phase accepts.
    #[must_use]
    pub fn legal_operations(&self) -> Vec<OperationKind> {
        ALL_KINDS
            .into_iter()
            .filter(|&kind| accepted_in(kind, self.state.phase))
            .collect()
    }

    /// Players ranked for display: solvent players first, then by cash.
    #[must_use]
    pub fn standings(&self) -> Vec<&Player> {
        let mut ranked: Vec<&Player> = self.state.players.iter().collect();
        ranked.sort_by(|a, b| a.bankrupt.cmp(&b.bankrupt).then(b.money.cmp(&a.money)));
        ranked
    }

    // === Operations ===

    /// Apply any operation.
    pub fn apply(&mut self, operation: Operation) -> Outcome {
        let actor = self.acting_player();
        let kind = operation.kind();

        let result = self
            .check_phase(kind)
            .and_then(|()| self.dispatch(operation));

        let result = match result {
            Ok(recorded) => {
                if let Some(recorded) = recorded {
                    let player = actor.unwrap_or(self.state.current_player);
                    self.state.record_action(player, recorded);
                }
                Ok(())
            }
            Err(err) => {
                debug!(operation = %kind, phase = %self.state.phase, %err, "operation rejected");
                self.state.set_message(err.to_string());
                Err(err)
            }
        };

        Outcome {
            result,
            message: self.state.message.clone(),
            auto_end_turn: self.state.phase == Phase::EndTurn,
            events: self.state.drain_events(),
        }
    }

    /// Seat the players and start the first turn.
    pub fn setup_game(&mut self, seats: SeatConfig) -> Outcome {
        self.apply(Operation::Setup(seats))
    }

    /// Roll for the current player.
    pub fn roll_dice(&mut self) -> Outcome {
        self.apply(Operation::RollDice(None))
    }

    /// Resolve a given roll for the current player.
    pub fn roll_dice_with(&mut self, dice: Dice) -> Outcome {
        self.apply(Operation::RollDice(Some(dice)))
    }

    /// Roll for doubles while jailed.
    pub fn roll_for_jail(&mut self) -> Outcome {
        self.apply(Operation::RollForJail(None))
    }

    /// Resolve a given roll for a jailed player.
    pub fn roll_for_jail_with(&mut self, dice: Dice) -> Outcome {
        self.apply(Operation::RollForJail(Some(dice)))
    }

    /// Pay the fine to leave jail.
    pub fn pay_jail_fine(&mut self) -> Outcome {
        self.apply(Operation::PayJailFine)
    }

    /// Spend a get-out-of-jail-free card.
    pub fn use_jail_card(&mut self) -> Outcome {
        self.apply(Operation::UseJailCard)
    }

    /// Auction the space the current player stands on.
    pub fn start_auction(&mut self) -> Outcome {
        self.apply(Operation::StartAuction)
    }

    /// Bid for the current bidder.
    pub fn place_bid(&mut self, amount: Money) -> Outcome {
        self.apply(Operation::PlaceBid(amount))
    }

    /// Withdraw the current bidder from the auction.
    pub fn pass_bid(&mut self) -> Outcome {
        self.apply(Operation::PassBid)
    }

    /// Decline to auction the current space.
    pub fn pass(&mut self) -> Outcome {
        self.apply(Operation::Pass)
    }

    /// End the current turn.
    pub fn end_turn(&mut self) -> Outcome {
        self.apply(Operation::EndTurn)
    }

    /// Throw the game away and return to setup.
    pub fn reset_game(&mut self) -> Outcome {
        self.apply(Operation::Reset)
    }

    // === Internals ===

    fn check_phase(&self, kind: OperationKind) -> Result<()> {
        if accepted_in(kind, self.state.phase) {
            Ok(())
        } else {
            Err(EngineError::WrongPhase {
                operation: kind,
                phase: self.state.phase,
            })
        }
    }

    /// Run an operation whose phase is already checked. Returns the
    /// operation to record, with random dice filled in.
    fn dispatch(&mut self, operation: Operation) -> Result<Option<Operation>> {
        let state = &mut self.state;
        match operation {
            Operation::Setup(seats) => {
                Self::setup(state, seats)?;
                Ok(Some(Operation::Setup(seats)))
            }
            Operation::RollDice(dice) => {
                let dice = Self::take_dice(state, dice)?;
                rules::resolve_roll(state, dice);
                Ok(Some(Operation::RollDice(Some(dice))))
            }
            Operation::RollForJail(dice) => {
                let dice = Self::take_dice(state, dice)?;
                rules::resolve_roll(state, dice);
                Ok(Some(Operation::RollForJail(Some(dice))))
            }
            Operation::PayJailFine => {
                rules::pay_fine(state)?;
                Ok(Some(Operation::PayJailFine))
            }
            Operation::UseJailCard => {
                rules::use_card(state)?;
                Ok(Some(Operation::UseJailCard))
            }
            Operation::StartAuction => {
                auction::start_auction(state)?;
                Ok(Some(Operation::StartAuction))
            }
            Operation::PlaceBid(amount) => {
                auction::place_bid(state, amount)?;
                Ok(Some(Operation::PlaceBid(amount)))
            }
            Operation::PassBid => {
                auction::pass_bid(state)?;
                Ok(Some(Operation::PassBid))
            }
            Operation::Pass => {
                Self::decline(state);
                Ok(Some(Operation::Pass))
            }
            Operation::EndTurn => {
                rules::end_turn(state);
                Ok(Some(Operation::EndTurn))
            }
            Operation::Reset => {
                info!(turn = state.turn_number, "game reset");
                *state = GameState::new(state.config.clone());
                Ok(None)
            }
        }
    }

    fn take_dice(state: &mut GameState, dice: Option<Dice>) -> Result<Dice> {
        match dice {
            Some(dice) if dice.is_valid() => Ok(dice),
            Some(_) => Err(EngineError::InvalidDice),
            None => Ok(rules::roll(&mut state.rng)),
        }
    }

    fn setup(current: &mut GameState, seats: SeatConfig) -> Result<()> {
        seats.validate()?;

        let mut state = GameState::new(current.config.clone());
        let seat_kinds = std::iter::repeat(Seat::Human)
            .take(seats.humans)
            .chain(std::iter::repeat(Seat::Ai(seats.ai_strategy)).take(seats.ais));

        let mut ai_number = 0;
        for (idx, seat) in seat_kinds.enumerate() {
            let name = match seat {
                Seat::Human => format!("Player {}", idx + 1),
                Seat::Ai(_) => {
                    ai_number += 1;
                    format!("AI {ai_number}")
                }
            };
            let player = Player::new(
                PlayerId::new(idx as u8),
                name,
                seat,
                state.config.starting_money,
                state.config.starting_go_salary,
            )
            .with_appearance(PLAYER_COLORS[idx], PLAYER_TOKENS[idx]);
            state.players.push(player);
        }

        state.chance.shuffle(&mut state.rng);
        state.community_chest.shuffle(&mut state.rng);

        info!(
            humans = seats.humans,
            ais = seats.ais,
            strategy = %seats.ai_strategy,
            seed = state.config.seed,
            "game set up"
        );
        state.emit(GameEvent::GameStarted {
            players: state.player_count(),
        });
        rules::start_turn(&mut state, PlayerId::new(0));

        *current = state;
        Ok(())
    }

    fn decline(state: &mut GameState) {
        let player = state.current_player;
        let position = state.current().position;
        let name = state.current().name.clone();

        debug!(player = player.0, position, "property declined");
        state.set_message(format!("{name} passed on the property."));
        state.emit(GameEvent::PropertyDeclined { player, position });
        state.phase = Phase::EndTurn;
    }
}

/// Apply an operation to a copy of the game, leaving the original intact.
///
/// ```
/// use rust_monopoly::ai::AiStrategy;
/// use rust_monopoly::controller::{transition, Game};
/// use rust_monopoly::core::{GameConfig, Operation, Phase, SeatConfig};
///
/// let game = Game::new(GameConfig::default());
/// let (next, outcome) = transition(&game, Operation::Setup(SeatConfig::new(1, 1, AiStrategy::Passive)));
///
/// assert!(outcome.is_accepted());
/// assert_eq!(game.phase(), Phase::Setup);
/// assert_eq!(next.phase(), Phase::Rolling);
/// ```
#[must_use]
pub fn transition(game: &Game, operation: Operation) -> (Game, Outcome) {
    let mut next = game.clone();
    let outcome = next.apply(operation);
    (next, outcome)
}
