//! Headless orchestration for AI seats.
//!
//! The `Driver` plays the role a frontend plays for human seats: it looks
//! at whose decision is pending, asks that seat's strategy, and applies the
//! resulting operation through the same `Game` API. Events of every
//! operation it applies go to the injected `EventSink`.

use std::time::Duration;

use tracing::debug;

use super::event::{EventSink, NullSink};
use super::game::{Game, Outcome};
use crate::ai::{strategy_for, DecisionContext, Strategy};
use crate::core::{GameRng, Money, Operation, Phase, Player};

/// Plays AI seats.
///
/// ## Example
///
/// ```
/// use rust_monopoly::ai::AiStrategy;
/// use rust_monopoly::controller::{Driver, Game};
/// use rust_monopoly::core::{GameConfig, SeatConfig};
///
/// let mut game = Game::new(GameConfig::default().with_seed(3));
/// game.setup_game(SeatConfig::new(0, 2, AiStrategy::Balanced));
///
/// let mut driver = Driver::new(&game);
/// let steps = driver.run_until_human_or_over(&mut game, 50);
/// assert_eq!(steps, 50);
/// assert!(game.state().turn_number > 1);
/// ```
#[derive(Debug)]
pub struct Driver<S: EventSink = NullSink> {
    rng: GameRng,
    sink: S,
}

impl Driver<NullSink> {
    /// Driver that discards events.
    #[must_use]
    pub fn new(game: &Game) -> Self {
        Self::with_sink(game, NullSink)
    }
}

impl<S: EventSink> Driver<S> {
    /// Driver that forwards events to `sink`. AI randomness is derived from
    /// the game's seed, separately from the dice.
    #[must_use]
    pub fn with_sink(game: &Game, sink: S) -> Self {
        Self {
            rng: game.state().rng.for_context("ai"),
            sink,
        }
    }

    /// The event sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Take the sink back.
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// The operation the driver would apply next, or `None` when a human
    /// must decide or there is nothing to do.
    pub fn decide(&mut self, game: &Game) -> Option<Operation> {
        let state = game.state();
        let actor = state.player(game.acting_player()?);

        match state.phase {
            Phase::Setup | Phase::GameOver => None,
            Phase::EndTurn => Some(Operation::EndTurn),
            Phase::Rolling => {
                strategy_of(actor)?;
                Some(Operation::RollDice(None))
            }
            Phase::JailDecision => {
                strategy_of(actor)?;
                Some(jail_choice(actor, state.config.jail_fine))
            }
            Phase::PropertyAction => {
                let strategy = strategy_of(actor)?;
                let ctx = DecisionContext::for_property_action(state);
                if strategy.should_start_auction(&ctx, &mut self.rng) {
                    Some(Operation::StartAuction)
                } else {
                    Some(Operation::Pass)
                }
            }
            Phase::Auctioning => {
                let strategy = strategy_of(actor)?;
                let ctx = DecisionContext::for_auction(state)?;
                Some(self.bid_choice(strategy, &ctx))
            }
        }
    }

    /// Cosmetic pause before the pending AI decision, `None` if a human is
    /// up.
    pub fn thinking_time(&mut self, game: &Game) -> Option<Duration> {
        let actor = game.state().player(game.acting_player()?);
        let strategy = strategy_of(actor)?;
        Some(strategy.thinking_time(&mut self.rng))
    }

    /// Decide and apply one operation.
    pub fn step(&mut self, game: &mut Game) -> Option<Outcome> {
        let actor = game.acting_player();
        let operation = self.decide(game)?;
        debug!(player = ?actor.map(|p| p.0), operation = %operation.kind(), "driver acting");

        let outcome = game.apply(operation);
        for event in &outcome.events {
            self.sink.on_event(event);
        }
        Some(outcome)
    }

    /// Step until a human must act, the game ends, or `max_steps` were
    /// applied. Returns the number of operations applied.
    pub fn run_until_human_or_over(&mut self, game: &mut Game, max_steps: usize) -> usize {
        let mut steps = 0;
        while steps < max_steps {
            if self.step(game).is_none() {
                break;
            }
            steps += 1;
        }
        steps
    }

    fn bid_choice(&mut self, strategy: &dyn Strategy, ctx: &DecisionContext<'_>) -> Operation {
        if !strategy.should_bid(ctx, &mut self.rng) {
            return Operation::PassBid;
        }

        let amount = strategy
            .bid_amount(ctx, &mut self.rng)
            .max(ctx.current_bid + 1)
            .min(ctx.player.money);
        if amount > ctx.current_bid {
            Operation::PlaceBid(amount)
        } else {
            Operation::PassBid
        }
    }
}

fn strategy_of(player: &Player) -> Option<&'static dyn Strategy> {
    player.ai_strategy().map(strategy_for)
}

/// Use a card if held, pay once a jailed turn has passed and the fine is
/// affordable, otherwise roll.
fn jail_choice(player: &Player, fine: Money) -> Operation {
    if player.jail_free_cards > 0 {
        Operation::UseJailCard
    } else if player.money >= fine && player.jail_turns >= 1 {
        Operation::PayJailFine
    } else {
        Operation::RollForJail(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::AiStrategy;
    use crate::controller::GameEvent;
    use crate::core::{Dice, GameConfig, PlayerId, Seat, SeatConfig};

    fn ai_game(humans: usize, ais: usize, strategy: AiStrategy) -> Game {
        let mut game = Game::new(GameConfig::default().with_seed(21));
        game.setup_game(SeatConfig::new(humans, ais, strategy));
        game
    }

    #[test]
    fn test_waits_for_human() {
        let mut game = ai_game(1, 1, AiStrategy::Balanced);
        let mut driver = Driver::new(&game);

        assert_eq!(driver.decide(&game), None);
        assert!(driver.step(&mut game).is_none());
        assert_eq!(driver.run_until_human_or_over(&mut game, 10), 0);
        assert!(driver.thinking_time(&game).is_none());
    }

    #[test]
    fn test_ai_rolls() {
        let game = ai_game(0, 2, AiStrategy::Passive);
        let mut driver = Driver::new(&game);
        assert_eq!(driver.decide(&game), Some(Operation::RollDice(None)));
    }

    #[test]
    fn test_ends_human_turn() {
        let mut game = ai_game(2, 0, AiStrategy::Balanced);
        game.roll_dice_with(Dice::new(1, 3));
        assert_eq!(game.phase(), Phase::EndTurn);

        let mut driver = Driver::new(&game);
        assert_eq!(driver.decide(&game), Some(Operation::EndTurn));
    }

    #[test]
    fn test_jail_policy() {
        let mut player = Player::new(PlayerId::new(0), "AI 1", Seat::Ai(AiStrategy::Balanced), 1500, 200);
        player.in_jail = true;
        assert_eq!(jail_choice(&player, 50), Operation::RollForJail(None));

        player.jail_turns = 1;
        assert_eq!(jail_choice(&player, 50), Operation::PayJailFine);

        player.money = 40;
        assert_eq!(jail_choice(&player, 50), Operation::RollForJail(None));

        player.jail_free_cards = 1;
        assert_eq!(jail_choice(&player, 50), Operation::UseJailCard);
    }

    #[test]
    fn test_bid_capped_by_money() {
        let mut game = ai_game(0, 2, AiStrategy::Aggressive);
        game.roll_dice_with(Dice::new(3, 3));
        game.start_auction();
        game.place_bid(100);
        game.state_mut().players[1].money = 105;

        let mut driver = Driver::new(&game);
        match driver.decide(&game) {
            Some(Operation::PlaceBid(amount)) => assert!(amount > 100 && amount <= 105),
            Some(Operation::PassBid) => {}
            other => panic!("unexpected decision {other:?}"),
        }
    }

    #[test]
    fn test_cannot_outbid_passes() {
        let mut game = ai_game(0, 2, AiStrategy::Aggressive);
        game.roll_dice_with(Dice::new(3, 3));
        game.start_auction();
        game.place_bid(100);
        game.state_mut().players[1].money = 100;

        let mut driver = Driver::new(&game);
        assert_eq!(driver.decide(&game), Some(Operation::PassBid));
    }

    #[test]
    fn test_sink_receives_events() {
        let mut game = ai_game(0, 2, AiStrategy::Balanced);
        let mut driver = Driver::with_sink(&game, Vec::new());

        let outcome = driver.step(&mut game).unwrap();

        assert!(outcome.is_accepted());
        assert_eq!(driver.sink().as_slice(), outcome.events.as_slice());
        assert!(matches!(driver.sink()[0], GameEvent::DiceRolled { .. }));
    }

    #[test]
    fn test_plays_ai_game_to_completion_or_limit() {
        let mut game = ai_game(0, 4, AiStrategy::Adaptive);
        let mut driver = Driver::new(&game);

        let steps = driver.run_until_human_or_over(&mut game, 5_000);

        assert!(steps > 0);
        if steps < 5_000 {
            assert!(game.is_over());
        }
        // Every driver decision is accepted, so each one is in the history after setup
        assert_eq!(game.state().history.len(), steps + 1);
    }
}
