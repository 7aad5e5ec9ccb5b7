//! Card draw and effect application.
//!
//! `apply` only touches the drawing player. The turn resolver owns the
//! consequences that reach beyond them: bankruptcy checks, the doubles
//! counter and the next phase.

use super::deck::Deck;
use super::definition::{Card, CardAction};
use crate::board::{retreat, Board, Position, JAIL_POSITION};
use crate::core::{Money, Player};
use crate::rules::economy::{settle_salary, GoSettlement};

/// What applying a card did to the player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CardOutcome {
    /// Salary settled because the move wrapped past GO.
    pub passed_go: Option<GoSettlement>,
    /// Where the card moved the player, if it moved them.
    pub moved_to: Option<Position>,
    /// Cash change from the card itself (money or repairs).
    pub money_delta: Money,
    /// The card sent the player to jail.
    pub jailed: bool,
    /// The player now stands on an unowned ownable space and must decide on it.
    pub redirected: bool,
}

/// Draw the head card of a deck, requeueing it at the tail.
pub fn draw(deck: &mut Deck) -> Option<Card> {
    deck.draw()
}

/// Absolute board position a move card sends a player standing on `from` to.
///
/// Backward moves are resolved here so `apply` never sees a relative offset.
#[must_use]
pub fn resolve_target(action: CardAction, from: Position) -> Option<Position> {
    match action {
        CardAction::MoveTo(position) => Some(position),
        CardAction::MoveBack(steps) => Some(retreat(from, steps)),
        _ => None,
    }
}

/// Apply a card to the drawing player.
///
/// Forward moves to a lower-numbered space pass GO and settle the player's
/// current salary. Backward moves never pass GO.
pub fn apply(card: &Card, player: &mut Player, board: &Board) -> CardOutcome {
    let mut outcome = CardOutcome::default();

    match card.action {
        CardAction::MoveTo(_) | CardAction::MoveBack(_) => {
            let Some(target) = resolve_target(card.action, player.position) else {
                return outcome;
            };

            if matches!(card.action, CardAction::MoveTo(_)) && target < player.position {
                outcome.passed_go = Some(settle_salary(player));
            }

            player.position = target;
            outcome.moved_to = Some(target);
            outcome.redirected = board.space(target).is_available();
        }
        CardAction::Money(amount) => {
            player.money += amount;
            outcome.money_delta = amount;
        }
        CardAction::GoToJail => {
            player.position = JAIL_POSITION;
            player.in_jail = true;
            player.jail_turns = 0;
            outcome.jailed = true;
        }
        CardAction::GetOutOfJailFree => {
            player.jail_free_cards += 1;
        }
        CardAction::Repairs { per_property } => {
            let cost = per_property * player.properties.len() as Money;
            player.money -= cost;
            outcome.money_delta = -cost;
        }
    }

    outcome
}
