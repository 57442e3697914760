//! Cards which can be placed onto the panel. A card can lie either side up with its reference edge
//! facing any of the four compass directions, giving 8 placements. Rotating or flipping a card
//! never touches its printed colors, it only changes how they are looked up.

pub mod orientation;

pub use orientation::{Octant, Orientation, Rotation, Side};

use crate::error::{CardError, TryFromIntToEnumError};

/// A half-edge color.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    /// No card present. Never printed on a real card.
    Unknown,
    /// Blue
    Blue,
    /// Green
    Green,
    /// Red
    Red,
    /// Yellow
    Yellow,
}

impl Color {
    /// The single letter used when drawing this color, blank for `Unknown`.
    pub fn letter(self) -> char {
        match self {
            Color::Unknown => ' ',
            Color::Blue => 'B',
            Color::Green => 'G',
            Color::Red => 'R',
            Color::Yellow => 'Y',
        }
    }
}

impl TryFrom<u8> for Color {
    type Error = TryFromIntToEnumError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        use Color::*;
        match value {
            0 => Ok(Unknown),
            1 => Ok(Blue),
            2 => Ok(Green),
            3 => Ok(Red),
            4 => Ok(Yellow),
            _ => Err(TryFromIntToEnumError::OutOfBounds),
        }
    }
}

/// The two color halves of one edge, read clockwise.
pub type EdgePair = (Color, Color);

/// Look up the color visible at `octant` on a card with the given edge table lying in the given
/// orientation.
///
/// `edges` is ordered FN, FE, FS, FW, BN, BE, BS, BW. Turning the card by `r` quarter turns moves
/// what was printed at octant `p` to octant `p + 2r`, so we undo the turn and read from the half of
/// the table belonging to the side facing up.
pub const fn visible_color(
    edges: &[EdgePair; 8],
    orientation: Orientation,
    octant: Octant,
) -> Color {
    let idx = octant.unturn(orientation.rotation() as u8).position() as usize;
    let side = match orientation.side() {
        Side::Front => 0,
        Side::Back => 4,
    };
    let pair = edges[idx / 2 + side];
    if idx % 2 == 0 {
        pair.0
    } else {
        pair.1
    }
}

/// A card: a unique id, its printed edge colors and the orientation it currently lies in.
///
/// Two cards are equal iff their ids are equal, whatever their orientation.
#[derive(Debug, Copy, Clone)]
pub struct Card {
    id: u8,
    edges: [EdgePair; 8],
    /// Current placement of the card. Free to change at any time.
    pub orientation: Orientation,
}

impl Card {
    /// Create a card lying front side up facing north. `edges` is ordered FN, FE, FS, FW, BN, BE,
    /// BS, BW (clockwise starting with north, front side first).
    ///
    /// Panics if any half-edge is `Color::Unknown`; in a const context this is a compile error.
    pub const fn new(id: u8, edges: [EdgePair; 8]) -> Self {
        let mut i = 0;
        while i < 8 {
            assert!(
                !matches!(edges[i].0, Color::Unknown) && !matches!(edges[i].1, Color::Unknown),
                "card edges can't use the unknown color"
            );
            i += 1;
        }
        Card {
            id,
            edges,
            orientation: Orientation::FN,
        }
    }

    /// Like [`new`](Card::new), but reports an `Unknown` half-edge as an error.
    pub fn try_new(id: u8, edges: [EdgePair; 8]) -> Result<Self, CardError> {
        match edges
            .iter()
            .position(|&(a, b)| a == Color::Unknown || b == Color::Unknown)
        {
            Some(edge) => Err(CardError::UnknownColor { card: id, edge }),
            None => Ok(Card {
                id,
                edges,
                orientation: Orientation::FN,
            }),
        }
    }

    /// The same card lying in a different orientation.
    pub const fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// The card's id.
    pub const fn id(&self) -> u8 {
        self.id
    }

    /// The printed edge colors, ordered FN, FE, FS, FW, BN, BE, BS, BW.
    pub const fn edges(&self) -> &[EdgePair; 8] {
        &self.edges
    }

    /// The color currently visible at `position` (0 to 7, see [`Octant`]).
    ///
    /// Panics if `position >= 8`.
    pub const fn color_at(&self, position: u8) -> Color {
        self.color(Octant::new(position))
    }

    /// The color currently visible at `octant`.
    pub const fn color(&self, octant: Octant) -> Color {
        visible_color(&self.edges, self.orientation, octant)
    }

    /// Printed colors are fixed for the lifetime of a card, so this always fails.
    pub fn try_set_color(&mut self, _position: u8, _color: Color) -> Result<(), CardError> {
        Err(CardError::ImmutableEdges { card: self.id })
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Card {}

impl std::hash::Hash for Card {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
