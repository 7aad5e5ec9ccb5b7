//! Rent calculation.
//!
//! - Streets: the flat rent, or 10% of the price when none is listed
//! - Railroads: `base * 2^(railroads held by the owner - 1)`
//! - Utilities: dice sum times 4 with one utility, times 10 with both
//! - Everything else: 0
//!
//! No houses or hotels are modelled.

use super::{Board, Property, SpaceKind};
use crate::core::Money;

/// Rent for a single railroad when the board uses standard values.
pub const RAILROAD_BASE_RENT: Money = 25;

/// Rent owed for landing on `space`, using standard railroad rent.
///
/// Pure and deterministic: depends only on the space, the dice sum and the
/// current ownership recorded on `board`. Returns 0 for unowned spaces.
///
/// ```
/// use rust_monopoly::board::{rent, Board};
///
/// let board = Board::standard();
/// // Unowned spaces never charge rent
/// assert_eq!(rent(board.space(5), 7, &board), 0);
/// ```
#[must_use]
pub fn rent(space: &Property, dice_sum: u8, board: &Board) -> Money {
    rent_with_base(space, dice_sum, board, RAILROAD_BASE_RENT)
}

/// Rent owed with a configurable single-railroad rent.
#[must_use]
pub fn rent_with_base(space: &Property, dice_sum: u8, board: &Board, railroad_base: Money) -> Money {
    let Some(owner) = space.owner else {
        return 0;
    };

    match space.kind {
        SpaceKind::Property => space.rent.unwrap_or(space.price / 10),
        SpaceKind::Railroad => {
            let held = board.count_owned(owner, SpaceKind::Railroad) as u32;
            if held == 0 {
                0
            } else {
                railroad_base * (1 << (held - 1))
            }
        }
        SpaceKind::Utility => {
            let multiplier = match board.count_owned(owner, SpaceKind::Utility) {
                0 => 0,
                1 => 4,
                _ => 10,
            };
            Money::from(dice_sum) * multiplier
        }
        SpaceKind::Tax | SpaceKind::Chance | SpaceKind::CommunityChest | SpaceKind::Corner => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;

    const READING: u8 = 5;
    const PENNSYLVANIA_RR: u8 = 15;
    const B_AND_O: u8 = 25;
    const SHORT_LINE: u8 = 35;
    const ELECTRIC: u8 = 12;
    const WATER: u8 = 28;

    #[test]
    fn test_street_flat_rent() {
        let mut board = Board::standard();
        board.assign_owner(39, PlayerId::new(0));

        assert_eq!(rent(board.space(39), 7, &board), 50);
    }

    #[test]
    fn test_street_without_flat_rent_uses_tenth_of_price() {
        let mut board = Board::standard();
        board.assign_owner(6, PlayerId::new(0));

        let mut space = board.space(6).clone();
        space.rent = None;
        assert_eq!(rent(&space, 7, &board), 10);
    }

    #[test]
    fn test_railroad_doubles_per_railroad() {
        let mut board = Board::standard();
        let owner = PlayerId::new(0);

        let expected = [25, 50, 100, 200];
        for (idx, position) in [READING, PENNSYLVANIA_RR, B_AND_O, SHORT_LINE].into_iter().enumerate() {
            board.assign_owner(position, owner);
            assert_eq!(rent(board.space(READING), 7, &board), expected[idx]);
        }
    }

    #[test]
    fn test_railroad_counts_only_same_owner() {
        let mut board = Board::standard();
        board.assign_owner(READING, PlayerId::new(0));
        board.assign_owner(PENNSYLVANIA_RR, PlayerId::new(0));
        board.assign_owner(B_AND_O, PlayerId::new(1));

        // Owner of B&O holds one railroad
        assert_eq!(rent(board.space(B_AND_O), 7, &board), 25);
        // Owner of Reading holds two
        assert_eq!(rent(board.space(READING), 7, &board), 50);
    }

    #[test]
    fn test_utility_multipliers() {
        let mut board = Board::standard();
        let owner = PlayerId::new(1);

        board.assign_owner(ELECTRIC, owner);
        assert_eq!(rent(board.space(ELECTRIC), 9, &board), 36);

        board.assign_owner(WATER, owner);
        assert_eq!(rent(board.space(ELECTRIC), 9, &board), 90);
        assert_eq!(rent(board.space(WATER), 2, &board), 20);
    }

    #[test]
    fn test_unowned_and_non_ownable_spaces_are_free() {
        let board = Board::standard();

        assert_eq!(rent(board.space(39), 7, &board), 0);
        assert_eq!(rent(board.space(4), 7, &board), 0);
        assert_eq!(rent(board.space(0), 7, &board), 0);
    }

    #[test]
    fn test_custom_railroad_base() {
        let mut board = Board::standard();
        board.assign_owner(READING, PlayerId::new(0));
        board.assign_owner(SHORT_LINE, PlayerId::new(0));

        assert_eq!(rent_with_base(board.space(READING), 7, &board, 40), 80);
    }
}
