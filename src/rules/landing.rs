//! Landing resolution: what happens on the space a player stops on.

use tracing::{debug, warn};

use super::bankruptcy::{charge, check_solvency, close_move};
use super::jail::send_to_jail;
use crate::board::{
    rent::rent_with_base, Position, Property, SpaceKind, FREE_PARKING_POSITION, GO_TO_JAIL_POSITION,
    INCOME_TAX_POSITION, JAIL_POSITION,
};
use crate::cards::{self, DeckKind};
use crate::controller::GameEvent;
use crate::core::{GameState, Phase, PlayerId};

/// Resolve the space the current player is standing on.
///
/// Sets the next phase: `PropertyAction` for an unowned ownable space,
/// `GameOver` if a bankruptcy decided the game, `EndTurn` otherwise.
pub fn resolve_landing(state: &mut GameState) {
    let id = state.current_player;
    let space = state.current_space().clone();
    debug!(player = id.0, position = space.position, space = %space.name, "landed");

    match space.kind {
        SpaceKind::Property | SpaceKind::Railroad | SpaceKind::Utility => match space.owner {
            None => offer_property(state, &space),
            Some(owner) if owner == id => {
                let name = state.player(id).name.clone();
                state.announce(format!("{name} landed on their own property: {}.", space.name));
                close_move(state);
            }
            Some(owner) => pay_rent(state, owner, &space),
        },
        SpaceKind::Tax => pay_tax(state, &space),
        SpaceKind::Chance => draw_card(state, DeckKind::Chance),
        SpaceKind::CommunityChest => draw_card(state, DeckKind::CommunityChest),
        SpaceKind::Corner => land_on_corner(state, space.position),
    }
}

fn offer_property(state: &mut GameState, space: &Property) {
    let name = state.current().name.clone();
    state.announce(format!("{name} landed on {}. Auction or pass?", space.name));
    state.phase = Phase::PropertyAction;
}

fn pay_rent(state: &mut GameState, owner: PlayerId, space: &Property) {
    let id = state.current_player;
    let name = state.player(id).name.clone();
    let owner_name = state.player(owner).name.clone();

    if state.player(owner).bankrupt {
        state.announce(format!("{owner_name} is bankrupt, so no rent is due on {}.", space.name));
        close_move(state);
        return;
    }

    let amount = rent_with_base(space, state.dice.sum(), &state.board, state.config.railroad_base_rent);
    state.player_mut(owner).money += amount;
    state.announce(format!("{name} paid ${amount} rent to {owner_name}."));
    state.emit(GameEvent::RentPaid {
        payer: id,
        owner,
        position: space.position,
        amount,
    });
    charge(state, id, amount);
    close_move(state);
}

fn pay_tax(state: &mut GameState, space: &Property) {
    let id = state.current_player;
    let amount = if space.position == INCOME_TAX_POSITION {
        state.config.income_tax
    } else {
        state.config.luxury_tax
    };

    let name = state.player(id).name.clone();
    state.announce(format!("{name} paid ${amount} in taxes."));
    state.emit(GameEvent::TaxPaid {
        player: id,
        position: space.position,
        amount,
    });
    charge(state, id, amount);
    close_move(state);
}

fn land_on_corner(state: &mut GameState, position: Position) {
    let id = state.current_player;
    let name = state.player(id).name.clone();

    match position {
        GO_TO_JAIL_POSITION => {
            state.announce(format!("{name} went to jail!"));
            send_to_jail(state, id);
        }
        FREE_PARKING_POSITION => state.announce(format!("{name} landed on Free Parking.")),
        JAIL_POSITION => state.announce(format!("{name} is just visiting jail.")),
        _ => state.announce(format!("{name} landed on GO.")),
    }
    close_move(state);
}

fn draw_card(state: &mut GameState, kind: DeckKind) {
    let id = state.current_player;
    let name = state.player(id).name.clone();

    let Some(card) = cards::draw(state.deck_mut(kind)) else {
        warn!(deck = %kind, "deck is empty, no card drawn");
        state.announce(format!("The {kind} deck is empty."));
        close_move(state);
        return;
    };

    state.announce(format!("{name} drew a {kind} card: {}", card.description));
    state.emit(GameEvent::CardDrawn {
        player: id,
        deck: kind,
        description: card.description.clone(),
    });

    let from = state.player(id).position;
    let outcome = cards::apply(&card, &mut state.players[id.index()], &state.board);
    debug!(player = id.0, card = %card.description, ?outcome, "card applied");

    if let Some(settlement) = outcome.passed_go {
        state.emit(GameEvent::PassedGo {
            player: id,
            settlement,
        });
    }
    if let Some(to) = outcome.moved_to {
        state.emit(GameEvent::Moved { player: id, from, to });
    }
    if outcome.jailed {
        state.doubles_count = 0;
        state.emit(GameEvent::SentToJail { player: id });
    }

    if check_solvency(state, id) {
        close_move(state);
        return;
    }

    if outcome.redirected {
        let space = state.current_space().clone();
        offer_property(state, &space);
    } else {
        close_move(state);
    }
}
