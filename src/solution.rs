use std::fmt::{self, Display, Formatter};

use itertools::Itertools;
use ndarray::Array2;

use crate::board::Board;
use crate::location::{Direction, Location, AXIS};
use crate::shape::Shape;

/// Box-drawing glyphs indexed by the 4-bit {north, east, south, west} stub
/// mask of the printed cell. Index 0 is never printed.
const GLYPHS: [&str; 16] = [
    "", "╵", "╶", "╰", "╷", "│", "╭", "├", "╴", "╯", "─", "┴", "╮", "┤", "┬", "┼",
];

/// One valid rotation of a board, recorded as which interior edges carry a
/// pipe.
///
/// An edge is set exactly when the two cells it separates both extrude a
/// stub across it. The horizontal bitmap covers edges between a cell and
/// its eastern neighbour; the vertical bitmap covers edges to the southern
/// neighbour. Both are indexed from the top-left interior cell.
///
/// [`Display`] renders the solution with Unicode box-drawing characters;
/// [`Solution::unsolve`] turns it back into a board that solves to it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Solution {
    horizontal: Array2<bool>,
    vertical: Array2<bool>,
}

impl Default for Solution {
    /// The empty solution: no edges set, rendered as the empty string.
    fn default() -> Self {
        Self {
            horizontal: Array2::from_elem((AXIS - 2, AXIS - 3), false),
            vertical: Array2::from_elem((AXIS - 3, AXIS - 2), false),
        }
    }
}

impl Solution {
    /// Whether a pipe crosses the edge east of interior cell `(x+1, y+1)`.
    pub(crate) fn horizontal(&self, x: usize, y: usize) -> bool {
        self.horizontal[[y, x]]
    }

    /// Whether a pipe crosses the edge south of interior cell `(x+1, y+1)`.
    pub(crate) fn vertical(&self, x: usize, y: usize) -> bool {
        self.vertical[[y, x]]
    }

    pub(crate) fn set_horizontal(&mut self, x: usize, y: usize, set: bool) {
        self.horizontal[[y, x]] = set;
    }

    pub(crate) fn set_vertical(&mut self, x: usize, y: usize, set: bool) {
        self.vertical[[y, x]] = set;
    }

    /// The stub mask implied by the four edges incident to the cell at
    /// zero-based interior coordinates `(x, y)`.
    fn stubs_at(&self, x: usize, y: usize) -> u8 {
        let mut stubs = 0;
        if y > 0 && self.vertical(x, y - 1) {
            stubs |= Direction::North.bit();
        }
        if x < AXIS - 3 && self.horizontal(x, y) {
            stubs |= Direction::East.bit();
        }
        if y < AXIS - 3 && self.vertical(x, y) {
            stubs |= Direction::South.bit();
        }
        if x > 0 && self.horizontal(x - 1, y) {
            stubs |= Direction::West.bit();
        }
        stubs
    }

    /// Synthesizes a board this solution solves: each interior cell gets
    /// the shape its incident edges imply. Solving the returned board
    /// enumerates this solution (and, on ambiguous layouts, others too).
    pub fn unsolve(&self) -> Board {
        let mut board = Board::default();
        for (x, y) in (0..AXIS - 2).cartesian_product(0..AXIS - 2) {
            board.place(Location(x + 1, y + 1), Shape::of(self.stubs_at(x, y)));
        }
        board
    }
}

/// Writes newlines and spaces until the cursor reaches `(x, y)`.
fn pad_to(f: &mut Formatter<'_>, x: usize, y: usize, pos: &mut (usize, usize)) -> fmt::Result {
    while pos.1 < y {
        f.write_str("\n")?;
        pos.0 = 0;
        pos.1 += 1;
    }
    while pos.0 < x {
        f.write_str(" ")?;
        pos.0 += 1;
    }
    Ok(())
}

impl Display for Solution {
    /// Renders the solution as box-drawing art.
    ///
    /// Cells print on a 3-column × 2-row lattice: the glyph for cell
    /// `(x, y)` lands at text position `(3x, 2y)`, a set horizontal edge
    /// appends `──`, and a set vertical edge prints `│` on the interleaved
    /// row below. Whitespace is written lazily ahead of each glyph, so
    /// blank runs at line ends never appear and the empty solution renders
    /// as nothing at all.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut pos = (0, 0);
        for y in 0..AXIS - 2 {
            for x in 0..AXIS - 2 {
                let stubs = self.stubs_at(x, y);
                if stubs != 0 {
                    pad_to(f, 3 * x, 2 * y, &mut pos)?;
                    f.write_str(GLYPHS[stubs as usize])?;
                    pos.0 += 1;
                    if x < AXIS - 3 && self.horizontal(x, y) {
                        f.write_str("──")?;
                        pos.0 += 2;
                    }
                }
            }

            if y < AXIS - 3 {
                for x in 0..AXIS - 2 {
                    if self.vertical(x, y) {
                        pad_to(f, 3 * x, 2 * y + 1, &mut pos)?;
                        f.write_str("│")?;
                        pos.0 += 1;
                    }
                }
            }
        }
        Ok(())
    }
}
