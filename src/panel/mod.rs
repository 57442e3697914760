//! The game panel: 9 slots in a 3x3 grid, filled in order by a single cursor.
//!
//! Slot indices:
//!
//! ```text
//! 0 1 2
//! 3 4 5
//! 6 7 8
//! ```
//!
//! The panel is mutated in place during a search. Placing a card advances the cursor, and
//! `remove_last` is its exact inverse, so the solver never has to copy the board.

pub mod render;

use crate::card::{Card, Octant};
use crate::coord::Coordinate;
use crate::error::{PanelError, TryFromIntToEnumError};

/// Number of slots on the panel.
pub const SLOTS: usize = 9;
/// Width and height of the panel.
pub const SIDE: usize = 3;

/// A slot on the panel, numbered in row-major order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Slot(u8);

impl Slot {
    /// The slot at the given row and column. Panics if either is out of range.
    pub const fn at(row: usize, col: usize) -> Self {
        assert!(row < SIDE && col < SIDE, "slot out of range");
        Slot((row * SIDE + col) as u8)
    }

    /// Row of this slot, top to bottom.
    pub const fn row(self) -> usize {
        self.0 as usize / SIDE
    }

    /// Column of this slot, left to right.
    pub const fn col(self) -> usize {
        self.0 as usize % SIDE
    }

    /// The slots bordering this one.
    pub fn neighbors(self) -> &'static Neighbors {
        &SLOT_NEIGHBORS[self.0 as usize]
    }
}

impl Coordinate for Slot {
    const COUNT: usize = SLOTS;

    fn repr(self) -> usize {
        self.0 as usize
    }

    fn from_repr(n: usize) -> Self {
        assert!(n < SLOTS, "slot out of range");
        Slot(n as u8)
    }
}

impl TryFrom<usize> for Slot {
    type Error = TryFromIntToEnumError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        if value < SLOTS {
            Ok(Slot(value as u8))
        } else {
            Err(TryFromIntToEnumError::OutOfBounds)
        }
    }
}

/// A compass direction on the panel.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Up
    North,
    /// Right
    East,
    /// Down
    South,
    /// Left
    West,
}

impl Direction {
    /// All directions, clockwise from north.
    pub const ARRAY: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// The pairs of octants `(ours, theirs)` that touch when a neighbor lies in this direction.
    ///
    /// Touching edges face each other, so the two halves are paired in reverse order: the first
    /// half of our north edge meets the second half of their south edge.
    pub const fn touching(self) -> [(Octant, Octant); 2] {
        const fn o(n: u8) -> Octant {
            Octant::new(n)
        }
        match self {
            Direction::North => [(o(0), o(5)), (o(1), o(4))],
            Direction::East => [(o(2), o(7)), (o(3), o(6))],
            Direction::South => [(o(5), o(0)), (o(4), o(1))],
            Direction::West => [(o(7), o(2)), (o(6), o(3))],
        }
    }
}

/// Whether `card` can lie next to `neighbor` when the neighbor is in direction `dir` from it.
pub fn edges_match(card: &Card, dir: Direction, neighbor: &Card) -> bool {
    dir.touching()
        .iter()
        .all(|&(ours, theirs)| card.color(ours) == neighbor.color(theirs))
}

/// The slots adjacent to a slot, `None` at the border of the panel.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct Neighbors {
    pub north: Option<Slot>,
    pub east: Option<Slot>,
    pub south: Option<Slot>,
    pub west: Option<Slot>,
}

impl Neighbors {
    /// The neighbor in the given direction.
    pub fn get(&self, dir: Direction) -> Option<Slot> {
        match dir {
            Direction::North => self.north,
            Direction::East => self.east,
            Direction::South => self.south,
            Direction::West => self.west,
        }
    }
}

macro_rules! nb {
    ($n:tt, $e:tt, $s:tt, $w:tt) => {
        Neighbors {
            north: nb!(@ $n),
            east: nb!(@ $e),
            south: nb!(@ $s),
            west: nb!(@ $w),
        }
    };
    (@ _) => {
        None
    };
    (@ $i:literal) => {
        Some(Slot($i))
    };
}

/// (north, east, south, west) for every slot.
const SLOT_NEIGHBORS: [Neighbors; SLOTS] = [
    nb!(_, 1, 3, _),
    nb!(_, 2, 4, 0),
    nb!(_, _, 5, 1),
    nb!(0, 4, 6, _),
    nb!(1, 5, 7, 3),
    nb!(2, _, 8, 4),
    nb!(3, 7, _, _),
    nb!(4, 8, _, 6),
    nb!(5, _, _, 7),
];

/// The game panel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Panel {
    slots: [Option<Card>; SLOTS],
    cursor: usize,
}

impl Panel {
    /// An empty panel with the cursor on the upper-left slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// The next slot to fill, `None` once the panel is full.
    pub fn cursor(&self) -> Option<Slot> {
        Slot::try_from(self.cursor).ok()
    }

    /// Number of cards placed so far.
    pub fn len(&self) -> usize {
        self.cursor
    }

    /// Whether no card has been placed.
    pub fn is_empty(&self) -> bool {
        self.cursor == 0
    }

    /// Whether every slot holds a card.
    pub fn is_full(&self) -> bool {
        self.cursor == SLOTS
    }

    /// The card in a slot, if any.
    pub fn get(&self, slot: Slot) -> Option<&Card> {
        self.slots[slot.repr()].as_ref()
    }

    /// Every slot in order, filled or not.
    pub fn slots(&self) -> impl Iterator<Item = (Slot, Option<&Card>)> {
        Slot::all().map(|s| (s, self.get(s)))
    }

    /// The placed cards in slot order.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.slots[..self.cursor].iter().flatten()
    }

    /// Whether `card`, as currently oriented, can go into the slot at the cursor: every occupied
    /// neighboring slot must show matching colors on the touching edge. Always false on a full
    /// panel.
    pub fn can_place(&self, card: &Card) -> bool {
        let Some(slot) = self.cursor() else {
            return false;
        };
        let neighbors = slot.neighbors();
        Direction::ARRAY.into_iter().all(|dir| {
            let Some(neighbor) = neighbors.get(dir).and_then(|n| self.get(n)) else {
                return true;
            };
            edges_match(card, dir, neighbor)
        })
    }

    /// Put `card` into the slot at the cursor and advance the cursor. The caller is expected to
    /// have checked [`can_place`](Panel::can_place) first.
    ///
    /// Panics if the panel is full.
    pub fn place(&mut self, card: Card) {
        if let Err(e) = self.try_place(card) {
            panic!("{e}");
        }
    }

    /// Like [`place`](Panel::place), but reports a full panel as an error.
    pub fn try_place(&mut self, card: Card) -> Result<(), PanelError> {
        let slot = self.slots.get_mut(self.cursor).ok_or(PanelError::Full)?;
        *slot = Some(card);
        self.cursor += 1;
        Ok(())
    }

    /// Take back the card placed last, returning it.
    ///
    /// Panics when nothing is placed or the slot below the cursor is empty, both of which mean the
    /// caller lost track of its own placements.
    pub fn remove_last(&mut self) -> Card {
        self.try_remove_last().unwrap_or_else(|e| panic!("{e}"))
    }

    /// Like [`remove_last`](Panel::remove_last), but reports misuse as an error.
    pub fn try_remove_last(&mut self) -> Result<Card, PanelError> {
        if self.cursor == 0 {
            return Err(PanelError::Empty);
        }
        let slot = Slot::from_repr(self.cursor - 1);
        let card = self.slots[slot.repr()]
            .take()
            .ok_or(PanelError::VacantSlot(slot))?;
        self.cursor -= 1;
        Ok(card)
    }
}
