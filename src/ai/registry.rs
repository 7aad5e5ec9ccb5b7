//! Strategy lookup.
//!
//! Strategies are stateless, so one shared instance per personality serves
//! every AI seat in every game.

use super::adaptive::Adaptive;
use super::aggressive::Aggressive;
use super::balanced::Balanced;
use super::passive::Passive;
use super::strategy::{AiStrategy, Strategy};

static PASSIVE: Passive = Passive;
static BALANCED: Balanced = Balanced;
static AGGRESSIVE: Aggressive = Aggressive;
static ADAPTIVE: Adaptive = Adaptive;

/// The shared implementation of a personality.
///
/// ## Example
///
/// ```
/// use rust_monopoly::ai::{strategy_for, AiStrategy};
///
/// for kind in AiStrategy::ALL {
///     assert_eq!(strategy_for(kind).kind(), kind);
/// }
/// ```
#[must_use]
pub fn strategy_for(kind: AiStrategy) -> &'static dyn Strategy {
    match kind {
        AiStrategy::Passive => &PASSIVE,
        AiStrategy::Balanced => &BALANCED,
        AiStrategy::Aggressive => &AGGRESSIVE,
        AiStrategy::Adaptive => &ADAPTIVE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::test_support::{auction_state, bid_context};
    use crate::core::GameRng;

    #[test]
    fn test_every_strategy_passes_without_property() {
        let state = auction_state(39, 50);
        let mut ctx = bid_context(&state);
        ctx.property = None;
        let mut rng = GameRng::new(9);

        for kind in AiStrategy::ALL {
            let strategy = strategy_for(kind);
            assert!(!strategy.should_start_auction(&ctx, &mut rng), "{kind}");
            assert!(!strategy.should_bid(&ctx, &mut rng), "{kind}");
            assert_eq!(strategy.bid_amount(&ctx, &mut rng), 0, "{kind}");
        }
    }

    #[test]
    fn test_every_strategy_outbids_current() {
        let state = auction_state(24, 60);
        let ctx = bid_context(&state);
        let mut rng = GameRng::new(10);

        for kind in AiStrategy::ALL {
            let amount = strategy_for(kind).bid_amount(&ctx, &mut rng);
            assert!(amount > 60, "{kind} bid {amount}");
        }
    }
}
