//! GO-salary economics.
//!
//! Each player carries their own salary and trend. While earning, every pass
//! of GO shrinks the salary by one step (never below zero) and pays out the
//! new amount. When it hits zero the player tips into recession for good:
//! each later pass grows the amount by one step and charges it.

use serde::{Deserialize, Serialize};

use crate::core::{Money, Player, SalaryTrend};

/// Money that changed hands on a pass of GO.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GoSettlement {
    /// The player received this amount.
    Collected(Money),
    /// The player paid this amount (recession).
    Paid(Money),
}

impl GoSettlement {
    /// Signed change to the player's cash.
    #[must_use]
    pub fn delta(self) -> Money {
        match self {
            GoSettlement::Collected(amount) => amount,
            GoSettlement::Paid(amount) => -amount,
        }
    }
}

/// Step the player's salary for a pass of GO and settle it.
///
/// ```
/// use rust_monopoly::core::{Player, PlayerId, Seat, SalaryTrend};
/// use rust_monopoly::rules::economy::{pass_go, GoSettlement};
///
/// let mut player = Player::new(PlayerId::new(0), "Player 1", Seat::Human, 1500, 10);
/// assert_eq!(pass_go(&mut player, 10), GoSettlement::Collected(0));
/// assert_eq!(player.salary_trend, SalaryTrend::Recession);
/// assert_eq!(pass_go(&mut player, 10), GoSettlement::Paid(10));
/// assert_eq!(player.money, 1490);
/// ```
pub fn pass_go(player: &mut Player, step: Money) -> GoSettlement {
    let settlement = match player.salary_trend {
        SalaryTrend::Earning => {
            player.go_salary = (player.go_salary - step).max(0);
            GoSettlement::Collected(player.go_salary)
        }
        SalaryTrend::Recession => {
            player.go_salary += step;
            GoSettlement::Paid(player.go_salary)
        }
    };
    player.money += settlement.delta();

    // The pass that reaches zero still counts as earning
    if player.go_salary == 0 {
        player.salary_trend = SalaryTrend::Recession;
    }
    settlement
}

/// Settle the current salary without stepping it.
///
/// Used for card moves that wrap past GO.
pub fn settle_salary(player: &mut Player) -> GoSettlement {
    let settlement = match player.salary_trend {
        SalaryTrend::Earning => GoSettlement::Collected(player.go_salary),
        SalaryTrend::Recession => GoSettlement::Paid(player.go_salary),
    };
    player.money += settlement.delta();
    settlement
}
