use std::fmt::{Display, Formatter};

use ndarray::Array2;

use crate::location::{Location, AXIS};
use crate::shape::Shape;
use crate::solution::Solution;
use crate::solver::{Consumer, Search, Signal};

/// A parsed puzzle: a fixed-size grid of pipe shapes whose rotations are
/// unknown.
///
/// The grid carries a one-cell border of empty cells around the usable
/// interior, so the solver can read all four neighbours of any interior
/// cell without bounds checks. Boards are immutable during solving; build
/// one with [`Board::parse`] (or [`Board::parse_strict`]) and enumerate its
/// solutions with [`Board::solve`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Board {
    cells: Array2<Shape>,
}

impl Default for Board {
    /// The empty board, which has exactly one (empty) solution.
    fn default() -> Self {
        Self { cells: Array2::from_elem((AXIS, AXIS), Shape::EMPTY) }
    }
}

impl Board {
    pub(crate) fn shape(&self, location: Location) -> Shape {
        self.cells[location.as_index()]
    }

    pub(crate) fn place(&mut self, location: Location, shape: Shape) {
        self.cells[location.as_index()] = shape;
    }

    /// Enumerates every valid rotation of this board.
    ///
    /// `consumer` receives each [`Solution`] as it is discovered and decides
    /// whether the search keeps going; after it returns [`Signal::Stop`] it
    /// is never called again. A board may have zero, one, or many solutions;
    /// an unsolvable board simply never invokes the consumer.
    pub fn solve<C: Consumer>(&self, consumer: &mut C) {
        Search::new(self, consumer).run();
    }

    /// Convenience wrapper around [`Board::solve`] collecting every
    /// solution into a [`Vec`].
    pub fn solutions(&self) -> Vec<Solution> {
        let mut found = Vec::new();
        self.solve(&mut |solution: &Solution| {
            found.push(solution.clone());
            Signal::Continue
        });
        found
    }
}

impl Display for Board {
    /// Prints the interior as piece characters, one row per line with
    /// trailing blanks elided. This is the canonical (uppercase) form of
    /// the parser's input language.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut rows: Vec<String> = (1..AXIS - 1)
            .map(|y| {
                let row: String = (1..AXIS - 1).map(|x| self.shape(Location(x, y)).piece()).collect();
                row.trim_end().to_owned()
            })
            .collect();
        while rows.last().is_some_and(|row| row.is_empty()) {
            rows.pop();
        }

        for row in rows {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}
