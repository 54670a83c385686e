use std::str::FromStr;

use thiserror::Error;

use crate::board::Board;
use crate::location::{Location, AXIS};
use crate::shape::Shape;

/// Reasons a textual puzzle cannot be turned into a [`Board`].
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum ParseError {
    /// A piece landed outside the usable interior of the board.
    #[error("piece {piece:?} at column {x}, row {y} does not fit the {side}x{side} interior", side = AXIS - 2)]
    OutOfBounds {
        /// The input character that did not fit.
        piece: char,
        /// Column the cursor had reached, counting the interior from 1.
        x: usize,
        /// Row the cursor had reached, counting the interior from 1.
        y: usize,
    },
    /// A character with no assigned meaning. Only [`Board::parse_strict`]
    /// reports this; [`Board::parse`] skips such characters.
    #[error("unrecognized character {0:?} in puzzle input")]
    Unrecognized(char),
}

impl Board {
    /// Reads a puzzle from its textual layout.
    ///
    /// `1` places a dead end, `C` a corner, `S` a straight, `3` a T-shaped
    /// junction, and `4` a crossing (the letters in either case); a space
    /// advances the cursor one column and a newline returns it to the first
    /// column of the next row. Anything else is skipped. The empty string,
    /// and any input placing no pieces, yields the empty board.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        Self::parse_with(input, false)
    }

    /// Like [`Board::parse`], but rejects characters that have no meaning
    /// instead of skipping them.
    pub fn parse_strict(input: &str) -> Result<Self, ParseError> {
        Self::parse_with(input, true)
    }

    fn parse_with(input: &str, strict: bool) -> Result<Self, ParseError> {
        let mut board = Self::default();
        let (mut x, mut y) = (1, 1);
        for ch in input.chars() {
            let piece = match ch {
                '\0' => break,
                ' ' => {
                    x += 1;
                    continue;
                }
                '\n' => {
                    x = 1;
                    y += 1;
                    continue;
                }
                '1' => Shape::DEAD_END,
                'C' | 'c' => Shape::CORNER,
                'S' | 's' => Shape::STRAIGHT,
                '3' => Shape::TEE,
                '4' => Shape::CROSS,
                other => {
                    if strict {
                        return Err(ParseError::Unrecognized(other));
                    }
                    continue;
                }
            };

            if x >= AXIS - 1 || y >= AXIS - 1 {
                return Err(ParseError::OutOfBounds { piece: ch, x, y });
            }
            board.place(Location(x, y), piece);
            x += 1;
        }
        Ok(board)
    }
}

impl FromStr for Board {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
