//! The 40-space board.

use super::space::{ColorGroup, Property, SpaceKind};
use super::Position;
use crate::core::Money;

/// Number of spaces around the board.
pub const BOARD_SIZE: u8 = 40;

/// The GO corner.
pub const GO_POSITION: Position = 0;

/// Income tax space.
pub const INCOME_TAX_POSITION: Position = 4;

/// Jail / Just Visiting corner.
pub const JAIL_POSITION: Position = 10;

/// Free Parking corner.
pub const FREE_PARKING_POSITION: Position = 20;

/// Go To Jail corner.
pub const GO_TO_JAIL_POSITION: Position = 30;

/// Luxury tax space.
pub const LUXURY_TAX_POSITION: Position = 38;

type Row = (&'static str, SpaceKind, Money, Option<(Money, ColorGroup)>);

const SPACES: [Row; BOARD_SIZE as usize] = {
    use ColorGroup as G;
    use SpaceKind as K;
    [
        ("GO", K::Corner, 0, None),
        ("Mediterranean Avenue", K::Property, 60, Some((2, G::Brown))),
        ("Community Chest", K::CommunityChest, 0, None),
        ("Baltic Avenue", K::Property, 60, Some((4, G::Brown))),
        ("Income Tax", K::Tax, 200, None),
        ("Reading Railroad", K::Railroad, 200, None),
        ("Oriental Avenue", K::Property, 100, Some((6, G::LightBlue))),
        ("Chance", K::Chance, 0, None),
        ("Vermont Avenue", K::Property, 100, Some((6, G::LightBlue))),
        ("Connecticut Avenue", K::Property, 120, Some((8, G::LightBlue))),
        ("Jail / Just Visiting", K::Corner, 0, None),
        ("St. Charles Place", K::Property, 140, Some((10, G::Pink))),
        ("Electric Company", K::Utility, 150, None),
        ("States Avenue", K::Property, 140, Some((10, G::Pink))),
        ("Virginia Avenue", K::Property, 160, Some((12, G::Pink))),
        ("Pennsylvania Railroad", K::Railroad, 200, None),
        ("St. James Place", K::Property, 180, Some((14, G::Orange))),
        ("Community Chest", K::CommunityChest, 0, None),
        ("Tennessee Avenue", K::Property, 180, Some((14, G::Orange))),
        ("New York Avenue", K::Property, 200, Some((16, G::Orange))),
        ("Free Parking", K::Corner, 0, None),
        ("Kentucky Avenue", K::Property, 220, Some((18, G::Red))),
        ("Chance", K::Chance, 0, None),
        ("Indiana Avenue", K::Property, 220, Some((18, G::Red))),
        ("Illinois Avenue", K::Property, 240, Some((20, G::Red))),
        ("B&O Railroad", K::Railroad, 200, None),
        ("Atlantic Avenue", K::Property, 260, Some((22, G::Yellow))),
        ("Ventnor Avenue", K::Property, 260, Some((22, G::Yellow))),
        ("Water Works", K::Utility, 150, None),
        ("Marvin Gardens", K::Property, 280, Some((24, G::Yellow))),
        ("Go To Jail", K::Corner, 0, None),
        ("Pacific Avenue", K::Property, 300, Some((26, G::Green))),
        ("North Carolina Avenue", K::Property, 300, Some((26, G::Green))),
        ("Community Chest", K::CommunityChest, 0, None),
        ("Pennsylvania Avenue", K::Property, 320, Some((28, G::Green))),
        ("Short Line Railroad", K::Railroad, 200, None),
        ("Chance", K::Chance, 0, None),
        ("Park Place", K::Property, 350, Some((35, G::DarkBlue))),
        ("Luxury Tax", K::Tax, 100, None),
        ("Boardwalk", K::Property, 400, Some((50, G::DarkBlue))),
    ]
};

/// Build the standard board with every space unowned.
#[must_use]
pub fn standard_spaces() -> Vec<Property> {
    SPACES
        .iter()
        .enumerate()
        .map(|(idx, &(name, kind, price, street))| {
            let space = Property::new(idx as Position, name, kind, price);
            match street {
                Some((rent, group)) => space.street(rent, group),
                None => space,
            }
        })
        .collect()
}

/// Advance `steps` spaces clockwise from `from`, wrapping past GO.
#[must_use]
pub fn advance(from: Position, steps: u8) -> Position {
    ((u16::from(from) + u16::from(steps)) % u16::from(BOARD_SIZE)) as Position
}

/// Step `steps` spaces counter-clockwise from `from`.
#[must_use]
pub fn retreat(from: Position, steps: u8) -> Position {
    let size = u16::from(BOARD_SIZE);
    ((u16::from(from) + size - u16::from(steps) % size) % size) as Position
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_shape() {
        let spaces = standard_spaces();
        assert_eq!(spaces.len(), 40);

        for (idx, space) in spaces.iter().enumerate() {
            assert_eq!(space.position as usize, idx);
            assert!(space.owner.is_none());
        }

        assert_eq!(spaces[6].name, "Oriental Avenue");
        assert_eq!(spaces[JAIL_POSITION as usize].kind, SpaceKind::Corner);
        assert_eq!(spaces[INCOME_TAX_POSITION as usize].kind, SpaceKind::Tax);
        assert_eq!(spaces[LUXURY_TAX_POSITION as usize].kind, SpaceKind::Tax);
    }

    #[test]
    fn test_group_sizes() {
        let spaces = standard_spaces();
        let count = |group| spaces.iter().filter(|s| s.group == Some(group)).count();

        assert_eq!(count(ColorGroup::Brown), 2);
        assert_eq!(count(ColorGroup::LightBlue), 3);
        assert_eq!(count(ColorGroup::Pink), 3);
        assert_eq!(count(ColorGroup::Orange), 3);
        assert_eq!(count(ColorGroup::Red), 3);
        assert_eq!(count(ColorGroup::Yellow), 3);
        assert_eq!(count(ColorGroup::Green), 3);
        assert_eq!(count(ColorGroup::DarkBlue), 2);

        let railroads = spaces.iter().filter(|s| s.kind == SpaceKind::Railroad).count();
        let utilities = spaces.iter().filter(|s| s.kind == SpaceKind::Utility).count();
        assert_eq!(railroads, 4);
        assert_eq!(utilities, 2);
    }

    #[test]
    fn test_non_streets_have_no_group() {
        for space in standard_spaces() {
            if space.kind != SpaceKind::Property {
                assert!(space.group.is_none(), "{} has a group", space.name);
                assert!(space.rent.is_none());
            }
        }
    }

    #[test]
    fn test_advance_wraps() {
        assert_eq!(advance(0, 6), 6);
        assert_eq!(advance(35, 7), 2);
        assert_eq!(advance(39, 1), 0);
    }

    #[test]
    fn test_retreat_wraps() {
        assert_eq!(retreat(7, 3), 4);
        assert_eq!(retreat(1, 3), 38);
        assert_eq!(retreat(36, 3), 33);
    }
}
