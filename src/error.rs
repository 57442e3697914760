//! This module defines general error types used throughout the crate.

use thiserror::Error;

use crate::panel::Slot;

/// Error type for converting integers to (C like) enums using TryFrom
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TryFromIntToEnumError {
    /// attempted to convert integer into enum value, but integer was out of bounds
    #[error("attempted to convert integer into enum value, but integer was out of bounds")]
    OutOfBounds,
}

/// Errors raised when building or modifying a [`Card`](crate::card::Card).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CardError {
    /// The printed edge colors of a card can never be changed, only its orientation can.
    #[error("card {card}: modifying card colors is not allowed")]
    ImmutableEdges {
        /// Id of the card that was written to.
        card: u8,
    },
    /// A half-edge was given the `Unknown` color, which only marks an empty slot.
    #[error("card {card}: edge {edge} uses the unknown color")]
    UnknownColor {
        /// Id of the offending card.
        card: u8,
        /// Index into the edge table (FN, FE, FS, FW, BN, BE, BS, BW).
        edge: usize,
    },
}

/// Misuse of a [`Panel`](crate::panel::Panel). These only happen when the caller breaks the
/// place/undo discipline, never during a correct search.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PanelError {
    /// Nothing has been placed yet.
    #[error("no cards to remove")]
    Empty,
    /// The slot below the cursor was expected to hold a card but doesn't.
    #[error("can't remove card from {0:?}, the slot is empty")]
    VacantSlot(Slot),
    /// Every slot is taken.
    #[error("the panel is full")]
    Full,
}

/// Reasons a search can't be started.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SolveError {
    /// The pool holds more cards than there are free slots on the panel.
    #[error("{cards} cards don't fit into {free} free slots")]
    TooManyCards {
        /// Size of the pool.
        cards: usize,
        /// Free slots left on the panel.
        free: usize,
    },
    /// The same card id appears twice in the pool.
    #[error("card {0} is in the pool more than once")]
    DuplicateCard(u8),
    /// A pool card is already lying on the panel.
    #[error("card {0} is already placed on the panel")]
    AlreadyPlaced(u8),
}
