//! Standard card texts.

use super::definition::{Card, CardAction, DeckKind};

/// The 15 Chance cards in printed order.
#[must_use]
pub fn chance_cards() -> Vec<Card> {
    use CardAction::*;

    let chance = |text: &str, action| Card::new(DeckKind::Chance, text, action);
    vec![
        chance("Advance to GO", MoveTo(0)),
        chance("Advance to Illinois Avenue", MoveTo(24)),
        chance("Advance to St. Charles Place", MoveTo(11)),
        chance("Advance to nearest Railroad", MoveTo(5)),
        chance("Advance to nearest Utility", MoveTo(12)),
        chance("Bank pays you dividend of $50", Money(50)),
        chance("Get Out of Jail Free", GetOutOfJailFree),
        chance("Go Back 3 Spaces", MoveBack(3)),
        chance("Go to Jail", GoToJail),
        chance("Make general repairs on all your property", Repairs { per_property: 25 }),
        chance("Pay poor tax of $15", Money(-15)),
        chance("Take a trip to Reading Railroad", MoveTo(5)),
        chance("Take a walk on the Boardwalk", MoveTo(39)),
        chance("You have been elected Chairman of the Board", Money(-50)),
        chance("Your building loan matures", Money(150)),
    ]
}

/// The 17 Community Chest cards in printed order.
#[must_use]
pub fn community_chest_cards() -> Vec<Card> {
    use CardAction::*;

    let chest = |text: &str, action| Card::new(DeckKind::CommunityChest, text, action);
    vec![
        chest("Advance to GO", MoveTo(0)),
        chest("Bank error in your favor. Collect $200", Money(200)),
        chest("Doctor's fee. Pay $50", Money(-50)),
        chest("From sale of stock you get $50", Money(50)),
        chest("Get Out of Jail Free", GetOutOfJailFree),
        chest("Go to Jail", GoToJail),
        chest("Grand Opera Night. Collect $50", Money(50)),
        chest("Holiday Fund matures. Receive $100", Money(100)),
        chest("Income tax refund. Collect $20", Money(20)),
        chest("It's your birthday. Collect $10", Money(10)),
        chest("Life insurance matures. Collect $100", Money(100)),
        chest("Pay hospital fees of $100", Money(-100)),
        chest("Pay school fees of $50", Money(-50)),
        chest("Receive $25 consultancy fee", Money(25)),
        chest("You are assessed for street repairs", Repairs { per_property: 40 }),
        chest("You have won second prize in a beauty contest. Collect $10", Money(10)),
        chest("You inherit $100", Money(100)),
    ]
}

/// Cards for a given pile.
#[must_use]
pub fn cards_for(kind: DeckKind) -> Vec<Card> {
    match kind {
        DeckKind::Chance => chance_cards(),
        DeckKind::CommunityChest => community_chest_cards(),
    }
}
