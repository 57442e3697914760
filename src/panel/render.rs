//! Drawing a panel for the terminal.
//!
//! Each card takes 5 text lines and shows its 8 octants:
//!
//! ```text
//! +-----+
//! | G B |
//! |Y   R|
//! |R   G|
//! | Y B |
//! +-----+
//! ```
//!
//! With ANSI output the half-edges on the side the card's reference edge faces are drawn in
//! reverse video, and the placement summary below the grid is bold.

use std::fmt::{self, Display, Formatter};

use super::{Panel, Slot, SIDE};
use crate::card::{Card, Color, Rotation};

const BOLD: &str = "\x1b[1m";
const INV: &str = "\x1b[7m";
const RESET: &str = "\x1b[0m";

/// A panel ready to be printed, see [`Panel::render`].
#[derive(Debug, Clone, Copy)]
pub struct Render<'a> {
    panel: &'a Panel,
    ansi: bool,
}

impl Panel {
    /// Draw this panel, with terminal colors if `ansi` is set.
    pub fn render(&self, ansi: bool) -> Render<'_> {
        Render { panel: self, ansi }
    }
}

impl Display for Panel {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.render(true).fmt(f)
    }
}

impl Render<'_> {
    fn color(&self, f: &mut Formatter<'_>, color: Color, highlight: bool) -> fmt::Result {
        if !self.ansi {
            return write!(f, "{}", color.letter());
        }
        let code = match color {
            Color::Unknown => return f.write_str(" "),
            Color::Blue => 34,
            Color::Green => 32,
            Color::Red => 31,
            Color::Yellow => 33,
        };
        let inv = if highlight { INV } else { "" };
        write!(f, "{inv}\x1b[{code}m{}{RESET}", color.letter())
    }

    fn bold(&self) -> (&'static str, &'static str) {
        if self.ansi {
            (BOLD, RESET)
        } else {
            ("", "")
        }
    }
}

/// The color at `position`, blank for an empty slot.
fn at(card: Option<&Card>, position: u8) -> Color {
    card.map_or(Color::Unknown, |c| c.color_at(position))
}

fn facing(card: Option<&Card>, rotation: Rotation) -> bool {
    card.is_some_and(|c| c.orientation.rotation() == rotation)
}

impl Display for Render<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let border = format!("+{}", "-----+".repeat(SIDE));
        writeln!(f, "{border}")?;

        for row in 0..SIDE {
            let cards: Vec<_> = (0..SIDE)
                .map(|col| self.panel.get(Slot::at(row, col)))
                .collect();

            for &card in &cards {
                let hl = facing(card, Rotation::N);
                f.write_str("| ")?;
                self.color(f, at(card, 0), hl)?;
                f.write_str(" ")?;
                self.color(f, at(card, 1), hl)?;
                f.write_str(" ")?;
            }
            writeln!(f, "|")?;

            for (left, right) in [(7, 2), (6, 3)] {
                for &card in &cards {
                    f.write_str("|")?;
                    self.color(f, at(card, left), facing(card, Rotation::W))?;
                    f.write_str("   ")?;
                    self.color(f, at(card, right), facing(card, Rotation::E))?;
                }
                writeln!(f, "|")?;
            }

            for &card in &cards {
                let hl = facing(card, Rotation::S);
                f.write_str("| ")?;
                self.color(f, at(card, 5), hl)?;
                f.write_str(" ")?;
                self.color(f, at(card, 4), hl)?;
                f.write_str(" ")?;
            }
            writeln!(f, "|")?;

            writeln!(f, "{border}")?;
        }

        let (bold, reset) = self.bold();
        f.write_str("CARD PLACEMENT:")?;
        for row in 0..SIDE {
            let placed: Vec<_> = (0..SIDE)
                .filter_map(|col| self.panel.get(Slot::at(row, col)))
                .map(|c| format!("{bold}{}{reset}({bold}{}{reset})", c.id(), c.orientation))
                .collect();
            if !placed.is_empty() {
                write!(f, "\n{}", placed.join(" "))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Card, EdgePair, Orientation};

    use Color::{Blue as B, Green as G, Red as R, Yellow as Y};

    #[rustfmt::skip]
    const EDGES: [EdgePair; 8] = [(G, B), (R, G), (B, Y), (R, Y), (Y, B), (R, Y), (B, G), (R, G)];

    fn card(id: u8) -> Card {
        Card::new(id, EDGES)
    }

    #[test]
    fn plain_single_card() {
        let mut panel = Panel::new();
        panel.place(card(7));
        let text = panel.render(false).to_string();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "+-----+-----+-----+");
        assert_eq!(lines[1], "| G B |     |     |");
        assert_eq!(lines[2], "|Y   R|     |     |");
        assert_eq!(lines[3], "|R   G|     |     |");
        assert_eq!(lines[4], "| Y B |     |     |");
        assert_eq!(lines[5], "+-----+-----+-----+");
        assert_eq!(lines.len(), 3 * 5 + 1 + 2);
        assert_eq!(lines[16], "CARD PLACEMENT:");
        assert_eq!(lines[17], "7(FN)");
    }

    #[test]
    fn placement_rows() {
        let mut panel = Panel::new();
        for id in 1..=4 {
            panel.place(card(id).with_orientation(Orientation::ARRAY[id as usize]));
        }
        let text = panel.render(false).to_string();
        assert!(text.ends_with("CARD PLACEMENT:\n1(FE) 2(FS) 3(FW)\n4(BN)"));
    }

    #[test]
    fn ansi_highlights_reference_edge() {
        let mut panel = Panel::new();
        panel.place(card(7).with_orientation(Orientation::BE));
        let text = panel.to_string();
        // east column of the first card is in reverse video, the north edge isn't
        let second = text.lines().nth(2).unwrap();
        assert!(second.starts_with("|\x1b["));
        assert!(second.contains(INV));
        let first = text.lines().nth(1).unwrap();
        assert!(!first.contains(INV));
        assert!(text.ends_with(&format!("{BOLD}7{RESET}({BOLD}BE{RESET})")));
    }
}
