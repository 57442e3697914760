//! The 8 ways a card can lie on the panel, and the 8 octants around a card that colors are read
//! from.

use crate::coord::Coordinate;
use crate::error::TryFromIntToEnumError;

#[cfg(test)]
use proptest_derive::Arbitrary;

/// Which side of the card faces up.
///
/// A card lying back side up is not "physically turned around": the back side bubbles up to the
/// surface with the front side underneath, so octant indices are not mirrored.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Side {
    /// Front side up
    Front,
    /// Back side up
    Back,
}

/// The compass direction the card's reference (main) edge faces. Each step turns the card a
/// quarter turn clockwise.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rotation {
    /// 0 degrees
    N = 0,
    /// 90 degrees
    E = 1,
    /// 180 degrees
    S = 2,
    /// 270 degrees
    W = 3,
}

/// A (side, rotation) pair. The discriminant is the placement index used by the search: front
/// side placements come first, each side in N, E, S, W order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
#[repr(u8)]
#[allow(missing_docs)]
pub enum Orientation {
    FN,
    FE,
    FS,
    FW,
    BN,
    BE,
    BS,
    BW,
}

impl Orientation {
    /// All orientations in search order.
    pub const ARRAY: [Orientation; 8] = [
        Orientation::FN,
        Orientation::FE,
        Orientation::FS,
        Orientation::FW,
        Orientation::BN,
        Orientation::BE,
        Orientation::BS,
        Orientation::BW,
    ];

    /// Build an orientation from its side and rotation.
    pub const fn new(side: Side, rotation: Rotation) -> Self {
        let base = match side {
            Side::Front => 0,
            Side::Back => 4,
        };
        Self::ARRAY[base + rotation as usize]
    }

    /// The side facing up.
    pub const fn side(self) -> Side {
        if (self as u8) < 4 {
            Side::Front
        } else {
            Side::Back
        }
    }

    /// The direction the reference edge faces.
    pub const fn rotation(self) -> Rotation {
        match self as u8 % 4 {
            0 => Rotation::N,
            1 => Rotation::E,
            2 => Rotation::S,
            _ => Rotation::W,
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

impl Coordinate for Orientation {
    const COUNT: usize = 8;

    fn repr(self) -> usize {
        self as usize
    }

    fn from_repr(n: usize) -> Self {
        Self::ARRAY[n]
    }
}

impl TryFrom<u8> for Orientation {
    type Error = TryFromIntToEnumError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ARRAY
            .get(value as usize)
            .copied()
            .ok_or(TryFromIntToEnumError::OutOfBounds)
    }
}

/// One of the 8 points around a card colors are read from, two per edge, running clockwise from
/// the first half of the north edge:
///
/// ```text
///  0 1
/// 7   2
/// 6   3
///  5 4
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
pub struct Octant(#[cfg_attr(test, proptest(strategy = "0..8u8"))] u8);

impl Octant {
    /// Get an octant by its position. Panics when `position >= 8`.
    pub const fn new(position: u8) -> Self {
        assert!(position < 8, "octant position out of range");
        Octant(position)
    }

    /// The position of this octant, 0 to 7.
    pub const fn position(self) -> u8 {
        self.0
    }

    /// The octant `steps` quarter turns clockwise from this one.
    pub const fn turn(self, steps: u8) -> Self {
        Octant((self.0 + 2 * (steps % 4)) % 8)
    }

    /// The octant `steps` quarter turns anticlockwise from this one.
    pub const fn unturn(self, steps: u8) -> Self {
        Octant((self.0 + 8 - 2 * (steps % 4)) % 8)
    }
}

impl Coordinate for Octant {
    const COUNT: usize = 8;

    fn repr(self) -> usize {
        self.0 as usize
    }

    fn from_repr(n: usize) -> Self {
        Octant::new(n as u8)
    }
}

impl TryFrom<u8> for Octant {
    type Error = TryFromIntToEnumError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value < 8 {
            Ok(Octant(value))
        } else {
            Err(TryFromIntToEnumError::OutOfBounds)
        }
    }
}
