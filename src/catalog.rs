//! The 9 cards that ship with the puzzle.

use crate::card::{Card, Color, EdgePair};

use Color::{Blue as B, Green as G, Red as R, Yellow as Y};

#[rustfmt::skip]
const EDGES: [[EdgePair; 8]; 9] = [
    [(G, B), (R, G), (B, Y), (R, Y), (Y, B), (R, Y), (B, G), (R, G)],
    [(G, Y), (B, R), (G, B), (R, Y), (Y, G), (R, B), (Y, B), (G, R)],
    [(G, R), (Y, B), (G, Y), (B, R), (Y, R), (B, G), (Y, G), (R, B)],
    [(B, Y), (R, G), (B, G), (Y, R), (G, B), (Y, R), (G, Y), (R, B)],
    [(Y, R), (G, B), (Y, B), (R, G), (B, R), (Y, G), (B, Y), (G, R)],
    [(B, R), (G, Y), (B, Y), (R, G), (R, B), (Y, G), (R, Y), (G, B)],
    [(Y, G), (B, R), (Y, R), (G, B), (G, Y), (R, B), (G, R), (B, Y)],
    [(R, Y), (B, Y), (G, R), (B, G), (R, G), (Y, G), (B, R), (Y, B)],
    [(G, R), (Y, R), (B, G), (Y, B), (G, Y), (R, Y), (B, G), (R, B)],
];

/// The puzzle's cards, ids 1 to 9, all lying front side up facing north.
pub const CARDS: [Card; 9] = {
    let mut cards = [Card::new(1, EDGES[0]); 9];
    let mut i = 1;
    while i < 9 {
        cards[i] = Card::new(i as u8 + 1, EDGES[i]);
        i += 1;
    }
    cards
};

/// The puzzle's cards as a search pool.
pub fn cards() -> Vec<Card> {
    CARDS.to_vec()
}
