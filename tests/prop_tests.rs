//! Property-based tests for dice, movement, decks, GO salary and auctions.
//! Run with: cargo test --release prop_tests

use proptest::prelude::*;

use rust_monopoly::ai::AiStrategy;
use rust_monopoly::auction::{Auction, Bid};
use rust_monopoly::board::{advance, BOARD_SIZE};
use rust_monopoly::cards::{Deck, DeckKind};
use rust_monopoly::controller::{Driver, Game};
use rust_monopoly::core::{
    Dice, GameConfig, GameRng, Money, Player, PlayerId, SalaryTrend, Seat, SeatConfig,
};
use rust_monopoly::rules::{pass_go, roll};

#[derive(Clone, Debug)]
enum AuctionMove {
    Bid(Money),
    Pass,
}

fn auction_move() -> impl Strategy<Value = AuctionMove> {
    prop_oneof![
        3 => (0i64..400).prop_map(AuctionMove::Bid),
        1 => Just(AuctionMove::Pass),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Dice faces stay in 1..=6 and doubles means equal faces.
    #[test]
    fn prop_dice_in_range(seed in any::<u64>()) {
        let mut rng = GameRng::new(seed);
        for _ in 0..100 {
            let dice = roll(&mut rng);
            prop_assert!(dice.is_valid());
            prop_assert_eq!(dice.is_doubles(), dice.0 == dice.1);
        }
    }

    /// Movement is addition modulo the board size.
    #[test]
    fn prop_movement_wraps(from in 0u8..BOARD_SIZE, die1 in 1u8..=6, die2 in 1u8..=6) {
        let dice = Dice::new(die1, die2);
        let to = advance(from, dice.sum());
        prop_assert!(to < BOARD_SIZE);
        prop_assert_eq!(u32::from(to), (u32::from(from) + u32::from(dice.sum())) % u32::from(BOARD_SIZE));
    }

    /// Drawing a multiple of the deck size restores the order.
    #[test]
    fn prop_deck_rotation(seed in any::<u64>(), laps in 1usize..4, chance in any::<bool>()) {
        let kind = if chance { DeckKind::Chance } else { DeckKind::CommunityChest };
        let mut deck = Deck::standard(kind);
        deck.shuffle(&mut GameRng::new(seed));
        let original = deck.clone();
        let size = deck.len();

        for _ in 0..laps * size {
            prop_assert!(deck.draw().is_some());
            prop_assert_eq!(deck.len(), size);
        }
        prop_assert_eq!(deck, original);
    }

    /// Salary falls by the step to zero, then recession charges a growing amount.
    #[test]
    fn prop_go_salary_trajectory(passes in 1usize..60, step in 1i64..50) {
        let mut player = Player::new(PlayerId::new(0), "Player 1", Seat::Human, 1500, 200);
        let mut expected = 200i64;
        let mut recession = false;

        for _ in 0..passes {
            let settlement = pass_go(&mut player, step);
            if recession {
                expected += step;
                prop_assert_eq!(settlement.delta(), -expected);
            } else {
                expected = (expected - step).max(0);
                prop_assert_eq!(settlement.delta(), expected);
                recession = expected == 0;
            }
            prop_assert_eq!(player.go_salary, expected);
            prop_assert_eq!(player.salary_trend == SalaryTrend::Recession, recession);
        }
    }

    /// Rejected bids never move the highest bid; each pass withdraws exactly
    /// one bidder; the auction closes exactly when one bidder is left.
    #[test]
    fn prop_auction_protocol(
        money in prop::collection::vec(0i64..500, 2..=4),
        moves in prop::collection::vec(auction_move(), 1..40),
    ) {
        let players: Vec<Player> = money
            .iter()
            .enumerate()
            .map(|(idx, &cash)| {
                Player::new(PlayerId::new(idx as u8), format!("Player {}", idx + 1), Seat::Human, cash, 200)
            })
            .collect();
        let mut auction = Auction::open(6, &players, PlayerId::new(0));

        for mv in moves {
            if auction.is_decided() {
                break;
            }
            let before = auction.clone();
            match mv {
                AuctionMove::Bid(amount) => {
                    let bidder = &players[auction.current_bidder.index()];
                    let valid = amount > before.highest_bid && amount <= bidder.money;
                    let result = auction.place_bid(&players, amount);
                    prop_assert_eq!(result.is_ok(), valid);
                    if valid {
                        prop_assert_eq!(auction.highest_bid, amount);
                        prop_assert_eq!(auction.highest_bidder, Some(bidder.id));
                    } else {
                        prop_assert_eq!(&auction, &before);
                    }
                }
                AuctionMove::Pass => {
                    let bidder = auction.current_bidder;
                    auction.pass(&players);
                    prop_assert_eq!(auction.active_bidders(), before.active_bidders() - 1);
                    prop_assert_eq!(auction.bid_of(bidder), Some(Bid::Withdrawn));
                }
            }
            if !auction.is_decided() {
                let current = &players[auction.current_bidder.index()];
                prop_assert!(auction.is_eligible(current));
            }
        }
        prop_assert_eq!(auction.is_decided(), auction.active_bidders() <= 1);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    /// Negative cash is always latched as bankruptcy before the next decision.
    #[test]
    fn prop_bankruptcy_latch(seed in any::<u64>(), ais in 2usize..=4) {
        let mut game = Game::new(GameConfig::default().with_seed(seed));
        game.setup_game(SeatConfig::new(0, ais, AiStrategy::Aggressive));
        let mut driver = Driver::new(&game);

        for _ in 0..1500 {
            if driver.step(&mut game).is_none() {
                break;
            }
            for player in &game.state().players {
                prop_assert!(player.money >= 0 || player.bankrupt);
                prop_assert!(player.position < BOARD_SIZE);
            }
        }
    }
}
