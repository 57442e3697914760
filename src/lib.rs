//! A solver for an edge-matching card puzzle: 9 square cards, each edge printed with two half-edge
//! colors on both sides, have to be laid out on a 3x3 panel so that all touching edges match.
//! Every card can be placed in 8 ways (2 sides times 4 rotations).

#![deny(missing_docs)]

pub mod card;
pub mod catalog;
pub mod coord;
pub mod error;
pub mod panel;
pub mod solver;
