//! Passive personality: auctions 40% of the time, bids small and quits early.

use std::time::Duration;

use super::strategy::{floor_money, jitter, thinking_millis, AiStrategy, DecisionContext, Strategy};
use crate::core::{GameRng, Money};

/// Bids up to 60% of the price, using at most 20% of cash.
#[derive(Clone, Copy, Debug, Default)]
pub struct Passive;

impl Passive {
    const AUCTION_PROBABILITY: f64 = 0.4;
    const PRICE_SHARE: f64 = 0.6;
    const MONEY_SHARE: f64 = 0.2;

    fn increment(current_bid: Money) -> Money {
        match current_bid {
            b if b > 100 => 25,
            b if b > 50 => 10,
            b if b > 10 => 5,
            _ => 1,
        }
    }
}

impl Strategy for Passive {
    fn kind(&self) -> AiStrategy {
        AiStrategy::Passive
    }

    fn should_start_auction(&self, ctx: &DecisionContext<'_>, rng: &mut GameRng) -> bool {
        ctx.property.is_some() && rng.gen_bool(Self::AUCTION_PROBABILITY)
    }

    fn should_bid(&self, ctx: &DecisionContext<'_>, rng: &mut GameRng) -> bool {
        let Some(property) = ctx.property else {
            return false;
        };
        if ctx.holds_highest_bid() {
            return false;
        }

        let max_bid = (property.price as f64 * Self::PRICE_SHARE)
            .min(ctx.player.money as f64 * Self::MONEY_SHARE);
        // Walks away somewhere between 70% and 90% of its ceiling
        let threshold = max_bid * jitter(rng, 0.7, 0.2);

        ctx.current_bid == 0 || (ctx.current_bid as f64) < threshold
    }

    fn bid_amount(&self, ctx: &DecisionContext<'_>, rng: &mut GameRng) -> Money {
        if ctx.property.is_none() {
            return 0;
        }

        let base = Self::increment(ctx.current_bid) as f64;
        let increment = floor_money(base * jitter(rng, 0.8, 0.3)).max(1);
        ctx.current_bid + increment
    }

    fn thinking_time(&self, rng: &mut GameRng) -> Duration {
        thinking_millis(rng, 1000, 1000)
    }
}
