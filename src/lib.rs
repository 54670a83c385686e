#![warn(missing_docs)]

//! # `moebius`
//!
//! A solver for the pipe-rotation puzzles popularized by the mobile game Infinite Loop.
//! Each cell of a rectangular grid holds a pipe piece of fixed shape but unknown rotation;
//! a board is solved when every pipe end meets a matching end from the neighbouring cell.
//! Begin by reading a puzzle with [`Board::parse`] (see there for the input language),
//! then call [`Board::solve`] with a [`Consumer`] (any `FnMut(&Solution) -> Signal` closure will do)
//! to receive every [`Solution`], or [`Board::solutions`] to simply collect them.
//!
//! # Internals
//! This crate is driven by plain bit arithmetic on 4-bit masks rather than by an external constraint solver.
//! A shape is four stub bits, one per cardinal direction, and rotating it clockwise is a cyclic shift of the nibble.
//! Alongside the shape grid the solver keeps, for every cell, a mask of the rotations that are still viable.
//! Repeated propagation sweeps shrink those masks by local edge agreement:
//! a rotation survives only if every stub it extrudes can be answered by some surviving rotation of the neighbour it points at,
//! and every gap it leaves can be mirrored by a neighbour able to stay flat.
//! When propagation reaches a fixed point with cells still undecided, the search splits on one of them
//! and recurses over each of its remaining rotations with an independent copy of the mask grid,
//! so the enumeration visits every solution exactly once.
//!
//! A one-cell border of empty pipes rings the board so the sweeps can read all four neighbours unconditionally,
//! which keeps the inner loop free of bounds checks.

pub use board::Board;
pub use parse::ParseError;
pub use solution::Solution;
pub use solver::{Consumer, Signal};

pub(crate) mod board;
mod tests;
pub(crate) mod cell;
pub(crate) mod location;
pub(crate) mod parse;
pub(crate) mod shape;
pub(crate) mod solution;
pub(crate) mod solver;
