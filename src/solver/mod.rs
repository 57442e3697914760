//! Exhaustive backtracking search for every arrangement of a card pool on a panel.
//!
//! The search fills the panel slot by slot, trying every unused card in every orientation at the
//! cursor. A candidate that fits is placed, the search descends, and the placement is taken back
//! once that branch is exhausted. Only one panel exists for the whole search; solutions are
//! reported while the search is paused on them.

use crate::card::{Card, Orientation};
use crate::coord::Coordinate;
use crate::error::SolveError;
use crate::panel::{Panel, SLOTS};

/// Counters describing how much work a search has done so far.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    /// Solutions reported.
    pub solutions: u64,
    /// (card, orientation) candidates tested at a slot, accepted or not.
    pub combinations: u64,
}

/// One level of the search. `next` walks card-major over the pool, orientations ascending.
#[derive(Debug, Default, Clone, Copy)]
struct Frame {
    next: usize,
    /// The pool index placed from this level, if a placement is currently on the panel.
    placed: Option<usize>,
}

/// A lazy sequence of solutions, created by [`solve`].
///
/// Each call to [`next_solution`](Solutions::next_solution) resumes the search where the last one
/// stopped. Dropping the iterator early simply abandons the search.
#[derive(Debug)]
pub struct Solutions {
    panel: Panel,
    pool: Vec<Card>,
    used: Vec<bool>,
    remaining: usize,
    frames: Vec<Frame>,
    /// Set for an empty pool, whose single solution is the starting panel.
    trivial: bool,
    stats: SearchStats,
}

/// Search for every way to put all of `pool` onto `panel`, starting at its cursor.
///
/// Cards are tried in pool order, each in orientations FN to BW. The panel is moved into the
/// search and handed back by [`Solutions::into_panel`].
pub fn solve(panel: Panel, pool: impl IntoIterator<Item = Card>) -> Result<Solutions, SolveError> {
    let pool: Vec<Card> = pool.into_iter().collect();

    let free = SLOTS - panel.len();
    if pool.len() > free {
        return Err(SolveError::TooManyCards {
            cards: pool.len(),
            free,
        });
    }
    for (i, card) in pool.iter().enumerate() {
        if pool[..i].contains(card) {
            return Err(SolveError::DuplicateCard(card.id()));
        }
        if panel.cards().any(|c| c == card) {
            return Err(SolveError::AlreadyPlaced(card.id()));
        }
    }

    let trivial = pool.is_empty();
    Ok(Solutions {
        panel,
        used: vec![false; pool.len()],
        remaining: pool.len(),
        pool,
        frames: if trivial {
            Vec::new()
        } else {
            vec![Frame::default()]
        },
        trivial,
        stats: SearchStats::default(),
    })
}

impl Solutions {
    /// Advance to the next solution and return the panel holding it. The panel stays borrowed until
    /// the search is resumed, so nothing is copied.
    pub fn next_solution(&mut self) -> Option<&Panel> {
        if self.advance() {
            self.stats.solutions += 1;
            Some(&self.panel)
        } else {
            None
        }
    }

    /// Work done so far.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Stop searching and take the panel back. After the search ran to completion the panel is in
    /// its starting state again.
    pub fn into_panel(self) -> Panel {
        self.panel
    }

    /// Run the search until the next complete arrangement. Returns false once the tree is
    /// exhausted.
    fn advance(&mut self) -> bool {
        if self.trivial {
            self.trivial = false;
            return true;
        }

        let candidates = self.pool.len() * Orientation::COUNT;
        loop {
            let Some(frame) = self.frames.last_mut() else {
                return false;
            };

            // take back whatever this level placed before trying its next candidate
            if let Some(i) = frame.placed.take() {
                self.panel.remove_last();
                self.used[i] = false;
                self.remaining += 1;
            }

            let mut accepted = None;
            while frame.next < candidates {
                let n = frame.next;
                frame.next += 1;

                let i = n / Orientation::COUNT;
                if self.used[i] {
                    continue;
                }
                self.stats.combinations += 1;
                let orientation = Orientation::from_repr(n % Orientation::COUNT);
                let card = self.pool[i].with_orientation(orientation);
                if self.panel.can_place(&card) {
                    accepted = Some((i, card));
                    break;
                }
            }

            let Some((i, card)) = accepted else {
                // every candidate at this level is spent, return to the parent
                self.frames.pop();
                continue;
            };

            self.panel.place(card);
            self.used[i] = true;
            self.remaining -= 1;
            frame.placed = Some(i);

            if self.remaining == 0 {
                return true;
            }
            self.frames.push(Frame::default());
        }
    }
}

impl Iterator for Solutions {
    type Item = Panel;

    fn next(&mut self) -> Option<Panel> {
        self.next_solution().cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::tests::any_card;
    use crate::card::{Color, EdgePair};
    use crate::panel::Slot;

    use std::collections::HashSet;

    use proptest::collection::vec;
    use proptest::prelude::*;

    use Color::{Blue as B, Green as G, Red as R, Yellow as Y};

    /// Every pair of occupied neighbors shows matching colors. The south edge of a card reads
    /// 5, 4 against 0, 1 of the card below it, the east edge reads 2, 3 against 7, 6.
    fn consistent(panel: &Panel) -> bool {
        panel.slots().all(|(slot, card)| {
            let Some(card) = card else { return true };
            let n = slot.neighbors();
            if let Some(below) = n.south.and_then(|s| panel.get(s)) {
                if card.color_at(5) != below.color_at(0) || card.color_at(4) != below.color_at(1) {
                    return false;
                }
            }
            if let Some(right) = n.east.and_then(|s| panel.get(s)) {
                if card.color_at(2) != right.color_at(7) || card.color_at(3) != right.color_at(6) {
                    return false;
                }
            }
            true
        })
    }

    #[test]
    fn consistent_reads_touching_halves() {
        let mut edges = [(B, B); 8];
        // south edge (R, Y), east edge (G, Y)
        edges[2] = (R, Y);
        edges[1] = (G, Y);
        let mut panel = Panel::new();
        panel.place(Card::new(1, edges));
        panel.place(Card::new(2, [(B, B); 8]));
        assert!(!consistent(&panel));

        // the east neighbor has to show (Y, G) on its west edge
        let mut west = [(B, B); 8];
        west[3] = (Y, G);
        let mut panel = Panel::new();
        panel.place(Card::new(1, edges));
        panel.place(Card::new(2, west));
        assert!(consistent(&panel));
        // and the card below (Y, R) on its north edge
        panel.place(Card::new(3, [(B, B); 8]));
        panel.place(Card::new(4, [(Y, R); 8]));
        assert!(consistent(&panel));
        panel.remove_last();
        panel.place(Card::new(4, [(R, Y); 8]));
        assert!(!consistent(&panel));
    }

    #[test]
    fn empty_pool_yields_starting_panel_once() {
        let mut start = Panel::new();
        start.place(Card::new(1, [(B, G); 8]));
        let solutions: Vec<_> = solve(start.clone(), []).unwrap().collect();
        assert_eq!(solutions, vec![start]);
    }

    #[rustfmt::skip]
    const MIXED: [EdgePair; 8] = [(G, B), (R, G), (B, Y), (R, Y), (Y, B), (R, Y), (B, G), (R, G)];

    #[test]
    fn single_card_every_orientation() {
        let card = Card::new(1, MIXED);
        let mut solutions = solve(Panel::new(), [card]).unwrap();
        let mut seen = Vec::new();
        while let Some(panel) = solutions.next_solution() {
            assert_eq!(panel.len(), 1);
            seen.push(panel.get(Slot::from_repr(0)).map(|c| c.orientation));
        }
        assert_eq!(seen, Orientation::ARRAY.map(Some).to_vec());
        assert_eq!(
            solutions.stats(),
            SearchStats {
                solutions: 8,
                combinations: 8
            }
        );
        assert!(solutions.into_panel().is_empty());
    }

    #[test]
    fn mismatched_pair_has_no_solution() {
        let a = Card::new(1, [(B, G); 8]);
        let b = Card::new(2, [(R, Y); 8]);
        let mut solutions = solve(Panel::new(), [a, b]).unwrap();
        assert!(solutions.next_solution().is_none());
        // each card tried in slot 0 (8 each), then the other one in slot 1 (8 each per placement)
        assert_eq!(solutions.stats().combinations, 8 + 8 * 8 + 8 + 8 * 8);
        assert!(solutions.into_panel().is_empty());
    }

    #[test]
    fn rejected_inputs() {
        let card = |id| Card::new(id, [(B, G); 8]);
        assert_eq!(
            solve(Panel::new(), (1..=10).map(card)).unwrap_err(),
            SolveError::TooManyCards { cards: 10, free: 9 }
        );
        assert_eq!(
            solve(Panel::new(), [card(1), card(2), card(1)]).unwrap_err(),
            SolveError::DuplicateCard(1)
        );
        let mut panel = Panel::new();
        panel.place(card(4));
        assert_eq!(
            solve(panel, [card(3), card(4)]).unwrap_err(),
            SolveError::AlreadyPlaced(4)
        );
    }

    #[test]
    fn early_stop_leaves_search_resumable() {
        // uniform cards fit everywhere, so every arrangement of 3 cards is a solution
        let pool: Vec<_> = (1..=3).map(|id| Card::new(id, [(B, B); 8])).collect();
        let mut solutions = solve(Panel::new(), pool.clone()).unwrap();
        let first = solutions.next().unwrap();
        let placed: Vec<_> = first.cards().map(|c| (c.id(), c.orientation)).collect();
        assert_eq!(placed, [1u8, 2, 3].map(|id| (id, Orientation::FN)));
        let rest = solutions.count();
        assert_eq!(rest + 1, 6 * 8 * 8 * 8);

        let mut solutions = solve(Panel::new(), pool).unwrap();
        solutions.next_solution();
        let panel = solutions.into_panel();
        assert_eq!(panel.len(), 3);
    }

    #[rustfmt::skip]
    const HALF: [EdgePair; 8] = [(B, G), (G, B), (B, G), (G, B), (R, R), (R, R), (R, R), (R, R)];

    #[test]
    fn solutions_are_distinct() {
        let pool: Vec<_> = (1..=4).map(|id| Card::new(id, HALF)).collect();
        let all: Vec<_> = solve(Panel::new(), pool).unwrap().collect();
        assert!(!all.is_empty());
        let keys: HashSet<Vec<_>> = all
            .iter()
            .map(|p| p.cards().map(|c| (c.id(), c.orientation)).collect())
            .collect();
        assert_eq!(keys.len(), all.len());
        assert!(all.iter().all(consistent));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn every_solution_is_valid(cards in vec(any_card(), 0..=4)) {
            // give the cards distinct ids
            let pool: Vec<_> = cards
                .into_iter()
                .enumerate()
                .map(|(i, c)| Card::new(i as u8 + 1, *c.edges()))
                .collect();
            let n = pool.len();
            let mut solutions = solve(Panel::new(), pool).unwrap();
            while let Some(panel) = solutions.next_solution() {
                prop_assert_eq!(panel.len(), n);
                prop_assert!(consistent(panel));
                let mut ids: Vec<_> = panel.cards().map(Card::id).collect();
                ids.sort();
                prop_assert_eq!(ids, (1..=n as u8).collect::<Vec<_>>());
            }
            let stats = solutions.stats();
            prop_assert!(stats.combinations >= stats.solutions * n as u64);
            prop_assert!(solutions.into_panel().is_empty());
        }
    }
}
