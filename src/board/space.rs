//! Board space definitions.
//!
//! A `Property` is any of the 40 board spaces; only tradable properties,
//! railroads and utilities can ever acquire an owner.

use serde::{Deserialize, Serialize};

use super::Position;
use crate::core::{Money, PlayerId};

/// What kind of space this is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpaceKind {
    /// Colour-group street.
    Property,
    Railroad,
    Utility,
    Tax,
    Chance,
    CommunityChest,
    /// GO, Jail, Free Parking, Go To Jail.
    Corner,
}

impl SpaceKind {
    /// Whether spaces of this kind can be owned.
    #[must_use]
    pub fn is_ownable(self) -> bool {
        matches!(self, SpaceKind::Property | SpaceKind::Railroad | SpaceKind::Utility)
    }
}

/// The eight street colour groups.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorGroup {
    Brown,
    LightBlue,
    Pink,
    Orange,
    Red,
    Yellow,
    Green,
    DarkBlue,
}

impl ColorGroup {
    /// All groups in board order.
    pub const ALL: [ColorGroup; 8] = [
        ColorGroup::Brown,
        ColorGroup::LightBlue,
        ColorGroup::Pink,
        ColorGroup::Orange,
        ColorGroup::Red,
        ColorGroup::Yellow,
        ColorGroup::Green,
        ColorGroup::DarkBlue,
    ];
}

/// One board space and its ownership.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    /// Board index, unique key.
    pub position: Position,
    /// Display name.
    pub name: String,
    /// Space kind.
    pub kind: SpaceKind,
    /// List price (the charged amount for tax spaces).
    pub price: Money,
    /// Flat rent, streets only.
    pub rent: Option<Money>,
    /// Colour group, streets only.
    pub group: Option<ColorGroup>,
    /// Current owner. `None` means unowned, never "owned by the bank".
    pub owner: Option<PlayerId>,
}

impl Property {
    /// Create an unowned space.
    #[must_use]
    pub fn new(position: Position, name: impl Into<String>, kind: SpaceKind, price: Money) -> Self {
        Self {
            position,
            name: name.into(),
            kind,
            price,
            rent: None,
            group: None,
            owner: None,
        }
    }

    /// Set a flat street rent and colour group.
    #[must_use]
    pub fn street(mut self, rent: Money, group: ColorGroup) -> Self {
        self.rent = Some(rent);
        self.group = Some(group);
        self
    }

    /// Whether the space can ever be owned.
    #[must_use]
    pub fn is_ownable(&self) -> bool {
        self.kind.is_ownable()
    }

    /// Whether the space is ownable and nobody owns it yet.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.is_ownable() && self.owner.is_none()
    }
}
