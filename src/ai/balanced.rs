//! Balanced personality.

use std::time::Duration;

use super::strategy::{floor_money, jitter, thinking_millis, AiStrategy, DecisionContext, Strategy};
use crate::board::SpaceKind;
use crate::core::{GameRng, Money};

/// Auctions 70% of the time. Bids up to 80% of the price with at most 40%
/// of cash, and fights harder for cheap railroads and utilities.
#[derive(Clone, Copy, Debug, Default)]
pub struct Balanced;

impl Balanced {
    const AUCTION_PROBABILITY: f64 = 0.7;
    const PRICE_SHARE: f64 = 0.8;
    const MONEY_SHARE: f64 = 0.4;
    const CHEAP_PRICE: Money = 200;

    fn increment(current_bid: Money) -> Money {
        match current_bid {
            b if b > 100 => 50,
            b if b > 50 => 25,
            b if b > 10 => 10,
            _ => 5,
        }
    }
}

impl Strategy for Balanced {
    fn kind(&self) -> AiStrategy {
        AiStrategy::Balanced
    }

    fn should_start_auction(&self, ctx: &DecisionContext<'_>, rng: &mut GameRng) -> bool {
        ctx.property.is_some() && rng.gen_bool(Self::AUCTION_PROBABILITY)
    }

    fn should_bid(&self, ctx: &DecisionContext<'_>, _rng: &mut GameRng) -> bool {
        let Some(property) = ctx.property else {
            return false;
        };
        if ctx.holds_highest_bid() {
            return false;
        }
        if ctx.current_bid == 0 {
            return true;
        }

        let max_bid = (property.price as f64 * Self::PRICE_SHARE)
            .min(ctx.player.money as f64 * Self::MONEY_SHARE);
        (ctx.current_bid as f64) < max_bid
    }

    fn bid_amount(&self, ctx: &DecisionContext<'_>, rng: &mut GameRng) -> Money {
        let Some(property) = ctx.property else {
            return 0;
        };
        let current = ctx.current_bid;

        let competitive = matches!(property.kind, SpaceKind::Railroad | SpaceKind::Utility);
        if competitive && property.price <= Self::CHEAP_PRICE && current > 0 {
            // 10-20% over the current bid
            let raised = floor_money(current as f64 * jitter(rng, 1.1, 0.1));
            return raised.max(current + 1);
        }

        let base = Self::increment(current) as f64;
        let increment = floor_money(base * jitter(rng, 0.8, 0.4)).max(1);
        current + increment
    }

    fn thinking_time(&self, rng: &mut GameRng) -> Duration {
        thinking_millis(rng, 800, 700)
    }
}
