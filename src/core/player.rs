//! Player identification and per-player game data.
//!
//! ## PlayerId
//!
//! Type-safe seat identifier. Seats are numbered from 0 in turn order and
//! the id doubles as the index into the player list for the whole game.
//!
//! ## Player
//!
//! Everything the engine tracks about one seat: cash, board position,
//! holdings, jail status and the seat's personal GO-salary economy.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::ai::AiStrategy;
use crate::board::Position;

/// Money amounts. Signed because a balance can dip below zero for the
/// instant between a debit and the bankruptcy latch.
pub type Money = i64;

/// Seat identifier, 0-based in turn order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` seats.
    ///
    /// ```
    /// use rust_monopoly::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.0)
    }
}

/// Who makes decisions for a seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Seat {
    /// Decisions arrive from outside the engine.
    Human,
    /// Decisions come from the given AI personality.
    Ai(AiStrategy),
}

/// Direction of a player's GO salary.
///
/// Every player starts `Earning`: each pass of GO shrinks the salary by one
/// step and pays it out. Once it reaches zero the player enters `Recession`
/// for good, and every later pass grows the amount and charges it instead.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SalaryTrend {
    /// Salary shrinks toward zero and is collected.
    #[default]
    Earning,
    /// Salary grows and is paid to the bank.
    Recession,
}

impl SalaryTrend {
    /// Signed direction of the salary: -1 while earning, +1 in recession.
    #[must_use]
    pub const fn direction(self) -> i8 {
        match self {
            SalaryTrend::Earning => -1,
            SalaryTrend::Recession => 1,
        }
    }
}

/// A seat at the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Stable seat id (also the index in the player list).
    pub id: PlayerId,
    /// Display name.
    pub name: String,
    /// Cash on hand.
    pub money: Money,
    /// Board index, always in `0..40`.
    pub position: Position,
    /// Owned board positions, sorted, no duplicates.
    pub properties: SmallVec<[Position; 8]>,
    /// Whether the player is currently jailed.
    pub in_jail: bool,
    /// Consecutive turns spent in jail (0-3).
    pub jail_turns: u8,
    /// Held get-out-of-jail-free cards.
    pub jail_free_cards: u32,
    /// One-way bankruptcy latch.
    pub bankrupt: bool,
    /// Human or AI control.
    pub seat: Seat,
    /// Presentation colour, inert to the rules.
    pub color: String,
    /// Presentation token, inert to the rules.
    pub token: String,
    /// Current GO salary amount.
    pub go_salary: Money,
    /// Whether the salary is collected or charged.
    pub salary_trend: SalaryTrend,
}

impl Player {
    /// Create a player standing on GO with the given starting cash and salary.
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>, seat: Seat, money: Money, go_salary: Money) -> Self {
        Self {
            id,
            name: name.into(),
            money,
            position: 0,
            properties: SmallVec::new(),
            in_jail: false,
            jail_turns: 0,
            jail_free_cards: 0,
            bankrupt: false,
            seat,
            color: String::new(),
            token: String::new(),
            go_salary,
            salary_trend: SalaryTrend::Earning,
        }
    }

    /// Set presentation colour and token.
    #[must_use]
    pub fn with_appearance(mut self, color: impl Into<String>, token: impl Into<String>) -> Self {
        self.color = color.into();
        self.token = token.into();
        self
    }

    /// Whether this seat is computer-controlled.
    #[must_use]
    pub fn is_ai(&self) -> bool {
        matches!(self.seat, Seat::Ai(_))
    }

    /// The AI personality driving this seat, if any.
    #[must_use]
    pub fn ai_strategy(&self) -> Option<AiStrategy> {
        match self.seat {
            Seat::Ai(strategy) => Some(strategy),
            Seat::Human => None,
        }
    }

    /// Whether the player still takes turns and bids.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.bankrupt
    }

    /// Check if the player owns the given position.
    #[must_use]
    pub fn owns(&self, position: Position) -> bool {
        self.properties.binary_search(&position).is_ok()
    }

    /// Record ownership of a position. Returns false if already owned.
    pub fn add_property(&mut self, position: Position) -> bool {
        match self.properties.binary_search(&position) {
            Ok(_) => false,
            Err(idx) => {
                self.properties.insert(idx, position);
                true
            }
        }
    }

    /// Latch bankruptcy if the balance went negative.
    ///
    /// Returns true only on the call that flips the latch.
    pub fn latch_bankruptcy(&mut self) -> bool {
        if self.money < 0 && !self.bankrupt {
            self.bankrupt = true;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn human(id: u8) -> Player {
        Player::new(PlayerId::new(id), format!("Player {}", id + 1), Seat::Human, 1500, 200)
    }

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p0), "Seat 0");
    }

    #[test]
    fn test_player_id_all() {
        let players: Vec<_> = PlayerId::all(3).collect();
        assert_eq!(players, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    }

    #[test]
    fn test_new_player_defaults() {
        let player = human(0);

        assert_eq!(player.money, 1500);
        assert_eq!(player.position, 0);
        assert_eq!(player.go_salary, 200);
        assert_eq!(player.salary_trend, SalaryTrend::Earning);
        assert_eq!(player.salary_trend.direction(), -1);
        assert!(!player.is_ai());
        assert!(player.ai_strategy().is_none());
        assert!(player.is_active());
    }

    #[test]
    fn test_ai_seat() {
        let player = Player::new(PlayerId::new(1), "AI 1", Seat::Ai(AiStrategy::Aggressive), 1500, 200);

        assert!(player.is_ai());
        assert_eq!(player.ai_strategy(), Some(AiStrategy::Aggressive));
    }

    #[test]
    fn test_properties_stay_sorted_and_unique() {
        let mut player = human(0);

        assert!(player.add_property(39));
        assert!(player.add_property(5));
        assert!(player.add_property(12));
        assert!(!player.add_property(5));

        assert_eq!(player.properties.as_slice(), &[5, 12, 39]);
        assert!(player.owns(12));
        assert!(!player.owns(6));
    }

    #[test]
    fn test_bankruptcy_latch_is_one_way() {
        let mut player = human(0);

        assert!(!player.latch_bankruptcy());

        player.money = -1;
        assert!(player.latch_bankruptcy());
        assert!(player.bankrupt);

        // Already latched; restoring money does not clear it
        player.money = 500;
        assert!(!player.latch_bankruptcy());
        assert!(player.bankrupt);
    }

    #[test]
    fn test_player_serialization() {
        let player = human(2).with_appearance("#2196F3", "hat");
        let json = serde_json::to_string(&player).unwrap();
        let deserialized: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(player, deserialized);
    }
}
