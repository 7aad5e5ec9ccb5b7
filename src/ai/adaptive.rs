//! Adaptive personality.
//!
//! Values a space by how far it advances a colour-group monopoly and by the
//! bidder's own GO salary: a shrinking salary makes it cautious, and in
//! recession it bids as if the salary were zero.

use std::time::Duration;

use super::strategy::{floor_money, thinking_millis, AiStrategy, DecisionContext, Strategy};
use crate::board::{ColorGroup, Property, SpaceKind};
use crate::core::{GameRng, Money, SalaryTrend};

/// Monopoly-aware bidder that reacts to the economy.
#[derive(Clone, Copy, Debug, Default)]
pub struct Adaptive;

impl Adaptive {
    const AUCTION_PROBABILITY: f64 = 0.7;
    const MONEY_SHARE: f64 = 0.5;
    const MIN_OPENING_BID: Money = 5;
    /// Below this much headroom the bidder only ever raises by $1.
    const TIGHT_ROOM: Money = 20;

    /// 0.6 in recession up to 1.2 at the full starting salary.
    fn economic_factor(ctx: &DecisionContext<'_>) -> f64 {
        let ratio = match ctx.player.salary_trend {
            SalaryTrend::Earning => {
                let standard = ctx.state.config.starting_go_salary.max(1);
                ctx.player.go_salary as f64 / standard as f64
            }
            SalaryTrend::Recession => 0.0,
        };
        0.6 + ratio * 0.6
    }

    fn monopoly_factor(ctx: &DecisionContext<'_>, property: &Property) -> f64 {
        match (property.kind, property.group) {
            (SpaceKind::Property, Some(group)) => {
                let (total, owned) = ctx
                    .state
                    .board
                    .group_members(group)
                    .fold((0usize, 0usize), |(total, owned), member| {
                        (total + 1, owned + usize::from(ctx.player.owns(member.position)))
                    });
                if owned == 0 {
                    1.0
                } else if owned + 1 == total {
                    2.0
                } else {
                    1.0 + owned as f64 * 0.2
                }
            }
            (SpaceKind::Railroad, _) => 1.2,
            (SpaceKind::Utility, _) => 1.1,
            _ => 1.0,
        }
    }

    fn group_value(group: ColorGroup) -> f64 {
        match group {
            ColorGroup::Brown => 0.4,
            ColorGroup::LightBlue => 0.5,
            ColorGroup::Pink => 0.6,
            ColorGroup::Orange => 0.8,
            ColorGroup::Red => 0.7,
            ColorGroup::Yellow => 0.7,
            ColorGroup::Green => 0.6,
            ColorGroup::DarkBlue => 0.9,
        }
    }

    /// Desirability in `[0, 1]`, used to size opening bids and raises.
    fn strategic_value(ctx: &DecisionContext<'_>, property: &Property) -> f64 {
        let base = match (property.kind, property.group) {
            (SpaceKind::Property, Some(group)) => {
                Self::group_value(group) * Self::monopoly_factor(ctx, property)
            }
            (SpaceKind::Railroad, _) => 0.7,
            (SpaceKind::Utility, _) => 0.6,
            _ => 0.5,
        };
        (base * Self::economic_factor(ctx)).min(1.0)
    }

    fn max_bid(ctx: &DecisionContext<'_>, property: &Property) -> Money {
        let money = ctx.player.money as f64;
        let financial = (money / 1000.0).min(1.5);
        let value = property.price as f64
            * Self::economic_factor(ctx)
            * Self::monopoly_factor(ctx, property)
            * financial;
        floor_money(value.min(money * Self::MONEY_SHARE))
    }
}

impl Strategy for Adaptive {
    fn kind(&self) -> AiStrategy {
        AiStrategy::Adaptive
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
        ctx.current_bid == 0 || ctx.current_bid < Self::max_bid(ctx, property)
    }

    fn bid_amount(&self, ctx: &DecisionContext<'_>, _rng: &mut GameRng) -> Money {
        let Some(property) = ctx.property else {
            return 0;
        };
        let current = ctx.current_bid;
        let value = Self::strategic_value(ctx, property);

        if current == 0 {
            let opening = floor_money(property.price as f64 * value * 0.3);
            return opening.max(Self::MIN_OPENING_BID);
        }

        let room = Self::max_bid(ctx, property) - current;
        if room < Self::TIGHT_ROOM {
            return current + 1;
        }
        let raise = floor_money(room as f64 * (0.1 + value * 0.2)).max(1);
        current + raise
    }

    fn thinking_time(&self, rng: &mut GameRng) -> Duration {
        thinking_millis(rng, 500, 1000)
    }
}
