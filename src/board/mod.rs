//! Board: space catalog, ownership and rent.
//!
//! ## Key Types
//!
//! - `Property`: one of the 40 spaces, with its optional owner
//! - `SpaceKind` / `ColorGroup`: classification used by rent and AI valuation
//! - `Board`: the ordered space list plus ownership queries
//!
//! Ownership only ever moves from `None` to a player, and only through an
//! auction win; the setter is crate-private for that reason.

pub mod catalog;
pub mod rent;
pub mod space;

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

pub use catalog::{
    advance, retreat, standard_spaces, BOARD_SIZE, FREE_PARKING_POSITION, GO_POSITION,
    GO_TO_JAIL_POSITION, INCOME_TAX_POSITION, JAIL_POSITION, LUXURY_TAX_POSITION,
};
pub use rent::rent;
pub use space::{ColorGroup, Property, SpaceKind};

/// Board index, `0..40`.
pub type Position = u8;

/// All board spaces in position order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    spaces: Vector<Property>,
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl Board {
    /// The standard board, nothing owned.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            spaces: standard_spaces().into_iter().collect(),
        }
    }

    /// Get the space at a position.
    ///
    /// Positions wrap, so any `u8` maps onto the board.
    #[must_use]
    pub fn space(&self, position: Position) -> &Property {
        &self.spaces[usize::from(position % BOARD_SIZE)]
    }

    /// Iterate over all spaces in order.
    pub fn iter(&self) -> impl Iterator<Item = &Property> {
        self.spaces.iter()
    }

    /// Owner of a position, if any.
    #[must_use]
    pub fn owner_of(&self, position: Position) -> Option<PlayerId> {
        self.space(position).owner
    }

    /// Count spaces of a kind owned by a player.
    #[must_use]
    pub fn count_owned(&self, owner: PlayerId, kind: SpaceKind) -> usize {
        self.spaces
            .iter()
            .filter(|s| s.kind == kind && s.owner == Some(owner))
            .count()
    }

    /// All streets in a colour group.
    pub fn group_members(&self, group: ColorGroup) -> impl Iterator<Item = &Property> {
        self.spaces.iter().filter(move |s| s.group == Some(group))
    }

    /// Whether a player holds every street of a group.
    #[must_use]
    pub fn has_monopoly(&self, owner: PlayerId, group: ColorGroup) -> bool {
        self.group_members(group).all(|s| s.owner == Some(owner))
    }

    /// Assign an unowned, ownable space to a player.
    ///
    /// Returns false (and changes nothing) if the space is not available.
    pub(crate) fn assign_owner(&mut self, position: Position, owner: PlayerId) -> bool {
        let idx = usize::from(position % BOARD_SIZE);
        match self.spaces.get_mut(idx) {
            Some(space) if space.is_available() => {
                space.owner = Some(owner);
                true
            }
            _ => false,
        }
    }
}
