//! Game configuration types.
//!
//! - `GameConfig`: rule constants and the RNG seed, with builder methods
//! - `SeatConfig`: how many human and AI seats to create at setup
//!
//! Defaults reproduce the classic table: $1500 starting cash, a $200 GO
//! salary that shrinks by $10 per pass, a $50 jail fine.

use serde::{Deserialize, Serialize};

use super::player::Money;
use crate::ai::AiStrategy;
use crate::error::{EngineError, Result};

/// Smallest table the engine will seat.
pub const MIN_SEATS: usize = 2;

/// Largest table the engine will seat.
pub const MAX_SEATS: usize = 4;

/// Rule constants for a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seed for dice, deck shuffles and AI decisions.
    pub seed: u64,

    /// Cash each player starts with.
    pub starting_money: Money,

    /// GO salary each player starts with.
    pub starting_go_salary: Money,

    /// Amount the GO salary moves by on each pass.
    pub go_salary_step: Money,

    /// Fine to leave jail, paid voluntarily or forced after the last jailed turn.
    pub jail_fine: Money,

    /// Jailed turns before release is forced.
    pub max_jail_turns: u8,

    /// Consecutive doubles that send a player to jail.
    pub max_doubles: u8,

    /// Charged on the income tax space.
    pub income_tax: Money,

    /// Charged on the luxury tax space.
    pub luxury_tax: Money,

    /// Rent for a single owned railroad; doubles per extra railroad.
    pub railroad_base_rent: Money,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            starting_money: 1500,
            starting_go_salary: 200,
            go_salary_step: 10,
            jail_fine: 50,
            max_jail_turns: 3,
            max_doubles: 3,
            income_tax: 200,
            luxury_tax: 100,
            railroad_base_rent: 25,
        }
    }
}

impl GameConfig {
    /// Use a custom seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Use custom starting cash.
    #[must_use]
    pub fn with_starting_money(mut self, money: Money) -> Self {
        self.starting_money = money;
        self
    }

    /// Use a custom starting GO salary.
    #[must_use]
    pub fn with_go_salary(mut self, salary: Money) -> Self {
        self.starting_go_salary = salary;
        self
    }

    /// Use a custom jail fine.
    #[must_use]
    pub fn with_jail_fine(mut self, fine: Money) -> Self {
        self.jail_fine = fine;
        self
    }
}

/// Seat counts chosen at setup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatConfig {
    /// Human seats, seated first.
    pub humans: usize,
    /// AI seats, seated after the humans.
    pub ais: usize,
    /// Personality shared by every AI seat.
    pub ai_strategy: AiStrategy,
}

impl SeatConfig {
    /// Create a seat configuration.
    #[must_use]
    pub fn new(humans: usize, ais: usize, ai_strategy: AiStrategy) -> Self {
        Self {
            humans,
            ais,
            ai_strategy,
        }
    }

    /// Total number of seats, saturating at `usize::MAX`.
    #[must_use]
    pub fn total(&self) -> usize {
        self.humans.saturating_add(self.ais)
    }

    /// Check the table size is within 2-4 seats.
    pub fn validate(&self) -> Result<()> {
        let total = self.total();
        if (MIN_SEATS..=MAX_SEATS).contains(&total) {
            Ok(())
        } else {
            Err(EngineError::InvalidSeatCount(total))
        }
    }
}

impl Default for SeatConfig {
    fn default() -> Self {
        Self::new(2, 0, AiStrategy::Balanced)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.starting_money, 1500);
        assert_eq!(config.starting_go_salary, 200);
        assert_eq!(config.go_salary_step, 10);
        assert_eq!(config.jail_fine, 50);
        assert_eq!(config.max_jail_turns, 3);
        assert_eq!(config.max_doubles, 3);
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::default()
            .with_seed(123)
            .with_starting_money(300)
            .with_go_salary(20)
            .with_jail_fine(75);

        assert_eq!(config.seed, 123);
        assert_eq!(config.starting_money, 300);
        assert_eq!(config.starting_go_salary, 20);
        assert_eq!(config.jail_fine, 75);
    }

    #[test]
    fn test_seat_validation() {
        assert!(SeatConfig::new(2, 0, AiStrategy::Balanced).validate().is_ok());
        assert!(SeatConfig::new(1, 3, AiStrategy::Passive).validate().is_ok());
        assert!(SeatConfig::new(0, 4, AiStrategy::Adaptive).validate().is_ok());

        assert_eq!(
            SeatConfig::new(1, 0, AiStrategy::Balanced).validate(),
            Err(EngineError::InvalidSeatCount(1))
        );
        assert_eq!(
            SeatConfig::new(3, 2, AiStrategy::Balanced).validate(),
            Err(EngineError::InvalidSeatCount(5))
        );
    }

    #[test]
    fn test_huge_seat_counts_saturate() {
        let seats = SeatConfig::new(usize::MAX, 1, AiStrategy::Balanced);
        assert_eq!(seats.total(), usize::MAX);
        assert_eq!(seats.validate(), Err(EngineError::InvalidSeatCount(usize::MAX)));
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::default().with_seed(7);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
