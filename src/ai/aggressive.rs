//! Aggressive personality.

use std::time::Duration;

use super::strategy::{floor_money, jitter, thinking_millis, AiStrategy, DecisionContext, Strategy};
use crate::core::{GameRng, Money};

/// Auctions 90% of the time and will go to 150% of the price, capped at
/// 60% of cash. Opens at 20-30% of the price and raises by at least $10.
#[derive(Clone, Copy, Debug, Default)]
pub struct Aggressive;

impl Aggressive {
    const AUCTION_PROBABILITY: f64 = 0.9;
    const PRICE_SHARE: f64 = 1.5;
    const MONEY_SHARE: f64 = 0.6;
    const MIN_OPENING_BID: Money = 10;
    const MIN_RAISE: Money = 10;
}

impl Strategy for Aggressive {
    fn kind(&self) -> AiStrategy {
        AiStrategy::Aggressive
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

        if ctx.current_bid == 0 {
            let opening = floor_money(property.price as f64 * jitter(rng, 0.2, 0.1));
            return opening.max(Self::MIN_OPENING_BID);
        }

        let raise = floor_money(ctx.current_bid as f64 * 0.2).max(Self::MIN_RAISE);
        ctx.current_bid + raise
    }

    fn thinking_time(&self, rng: &mut GameRng) -> Duration {
        thinking_millis(rng, 500, 500)
    }
}
