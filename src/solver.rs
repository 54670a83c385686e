use itertools::Itertools;
use ndarray::Array2;
use strum::VariantArray;

use crate::board::Board;
use crate::cell::Options;
use crate::location::{Direction, Location, AXIS};
use crate::shape::Shape;
use crate::solution::Solution;

/// A [`Consumer`]'s verdict after receiving a solution.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Signal {
    /// Keep enumerating further solutions.
    Continue,
    /// Unwind the search without producing anything else.
    Stop,
}

/// Receives solutions from [`Board::solve`] one at a time, in discovery
/// order, and steers the enumeration through the returned [`Signal`].
///
/// Any `FnMut(&Solution) -> Signal` closure is a consumer. The borrow
/// handed to [`deliver`](Consumer::deliver) only lives for the call; clone
/// the solution to retain it.
pub trait Consumer {
    /// Accept one solution and decide whether the search continues.
    fn deliver(&mut self, solution: &Solution) -> Signal;
}

impl<F> Consumer for F
where
    F: FnMut(&Solution) -> Signal,
{
    fn deliver(&mut self, solution: &Solution) -> Signal {
        self(solution)
    }
}

/// The per-cell rotation options remaining in some branch of the search.
/// Same dimensions as the board; border cells stay pinned to the single
/// placement of the empty shape.
pub(crate) type OptionsGrid = Array2<Options>;

/// Seed the options grid for a fresh search, granting each cell the
/// placements its rotational symmetry leaves distinct.
pub(crate) fn initial_options(board: &Board) -> OptionsGrid {
    Array2::from_shape_fn((AXIS, AXIS), |index| board.shape(Location::from(index)).symmetry_options())
}

/// Shrink `options` to a fixed point under local edge agreement.
///
/// Each sweep re-derives every interior cell's placements from what its
/// four neighbours can still offer: a placement survives only if each of
/// its stubs faces a neighbour able to extrude a matching stub, and each of
/// its gaps faces a neighbour able to stay flat. The reduction is monotone,
/// so sweeping until nothing changes terminates. Returns `false` as soon as
/// some cell has no placement left, which prunes the enclosing branch.
pub(crate) fn propagate(board: &Board, options: &mut OptionsGrid) -> bool {
    loop {
        let mut changed = false;
        for location in Location::interior() {
            // What the neighbourhood permits, from this cell's own frame:
            // a stub may be extruded towards (resp. a gap left facing)
            // direction `d` iff the neighbour there has a remaining
            // placement whose mask answers (resp. stays clear) across the
            // shared edge. Each neighbour's verdict lands on its own facing
            // bit, so one flip re-expresses the pair of masks in our frame.
            let mut set_facing = 0u8;
            let mut clear_facing = 0u8;
            for direction in Direction::VARIANTS {
                let neighbour = direction.step(location);
                let theirs = options[neighbour.as_index()];
                let shape = board.shape(neighbour);
                let facing = direction.invert();
                if shape.fanout(theirs).has(facing) {
                    set_facing |= facing.bit();
                }
                if shape.complement().fanout(theirs).has(facing) {
                    clear_facing |= facing.bit();
                }
            }
            let may_be_set = Shape::of(set_facing).flip().code();
            let may_be_clear = Shape::of(clear_facing).flip().code();

            let current = options[location.as_index()];
            let mut narrowed = Options::NONE;
            for turn in current.turns() {
                let placed = board.shape(location).rotate(turn).code();
                if (placed & !may_be_set) == 0 && (placed | may_be_clear) == 0xf {
                    narrowed.insert(turn);
                }
            }

            if narrowed != current {
                if narrowed == Options::NONE {
                    return false;
                }
                changed = true;
            }
            options[location.as_index()] = narrowed;
        }

        if !changed {
            return true;
        }
    }
}

fn finished(options: &OptionsGrid) -> bool {
    Location::interior().all(|location| options[location.as_index()].resolved())
}

/// One enumeration of a board's solutions: propagation interleaved with
/// backtracking over the cells propagation alone cannot resolve.
pub(crate) struct Search<'a, C: Consumer> {
    board: &'a Board,
    consumer: &'a mut C,
}

impl<'a, C: Consumer> Search<'a, C> {
    pub(crate) fn new(board: &'a Board, consumer: &'a mut C) -> Self {
        Self { board, consumer }
    }

    pub(crate) fn run(&mut self) -> Signal {
        let mut options = initial_options(self.board);
        self.step(&mut options)
    }

    /// The recursion node: propagate, then either report a fully determined
    /// grid or split on an unresolved cell. A contradiction prunes this
    /// branch but lets the enclosing search carry on, so it maps to
    /// [`Signal::Continue`]; only the consumer ever asks to stop.
    fn step(&mut self, options: &mut OptionsGrid) -> Signal {
        if !propagate(self.board, options) {
            return Signal::Continue;
        }
        if finished(options) {
            self.report(options)
        } else {
            self.branch(options)
        }
    }

    /// Split the search on the first unresolved cell in sweep order, trying
    /// each of its remaining placements against a private copy of the grid.
    /// Which cell is picked changes only the order solutions appear in,
    /// never the set, so a deterministic pick keeps runs reproducible.
    fn branch(&mut self, options: &OptionsGrid) -> Signal {
        let split = Location::interior()
            .find(|location| !options[location.as_index()].resolved())
            .expect("branching on a fully resolved grid");

        for turn in options[split.as_index()].turns() {
            let mut narrowed = options.clone();
            narrowed[split.as_index()] = Options::only(turn);
            if self.step(&mut narrowed) == Signal::Stop {
                return Signal::Stop;
            }
        }
        Signal::Continue
    }

    /// Extract the edge bitmaps from a fully determined grid and hand them
    /// to the consumer. Propagation has already established edge agreement,
    /// so reading each edge from its west (resp. north) cell is enough.
    fn report(&mut self, options: &OptionsGrid) -> Signal {
        let mut solution = Solution::default();
        for (x, y) in (0..AXIS - 3).cartesian_product(0..AXIS - 2) {
            let location = Location(x + 1, y + 1);
            let placed = self.board.shape(location).rotate(options[location.as_index()].turn());
            solution.set_horizontal(x, y, placed.has(Direction::East));
        }
        for (x, y) in (0..AXIS - 2).cartesian_product(0..AXIS - 3) {
            let location = Location(x + 1, y + 1);
            let placed = self.board.shape(location).rotate(options[location.as_index()].turn());
            solution.set_vertical(x, y, placed.has(Direction::South));
        }

        self.consumer.deliver(&solution)
    }
}
