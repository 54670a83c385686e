use itertools::Itertools;
use ndarray::Ix;
use strum::VariantArray;

/// Full board axis, including the one-cell sentinel border on either side.
/// Usable puzzle positions run from `1` to `AXIS - 2` on both axes.
pub(crate) const AXIS: usize = 16;

type Coord = usize;

/// A location `(x, y)` on a board. `Location(0, 0)` is the top left corner
/// of the border ring; the top left usable cell is `Location(1, 1)`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct Location(pub(crate) Coord, pub(crate) Coord);

impl Location {
    pub(crate) fn as_index(&self) -> (Coord, Coord) {
        (self.1, self.0)
    }

    fn offset_by(self, rhs: (isize, isize)) -> Self {
        Self(self.0.wrapping_add_signed(rhs.0), self.1.wrapping_add_signed(rhs.1))
    }

    /// All usable locations, in the deterministic sweep order used by both
    /// the propagator and the brancher.
    pub(crate) fn interior() -> impl Iterator<Item = Self> {
        (1..AXIS - 1).cartesian_product(1..AXIS - 1).map(|(x, y)| Self(x, y))
    }
}

impl From<(Ix, Ix)> for Location {
    fn from(value: (Ix, Ix)) -> Self {
        Self(value.1, value.0)
    }
}

/// The four cardinal directions a pipe stub can point in.
///
/// The variant order matches the bit assignment of shape codes: north is
/// bit 0 and each clockwise quarter-turn shifts one bit up.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, VariantArray)]
pub(crate) enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// The bit this direction occupies in a shape code or edge mask.
    pub(crate) const fn bit(self) -> u8 {
        match self {
            Self::North => 0x1,
            Self::East => 0x2,
            Self::South => 0x4,
            Self::West => 0x8,
        }
    }

    pub(crate) fn invert(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }

    /// Step one cell in this direction. Interior locations always step onto
    /// the board, thanks to the border ring.
    pub(crate) fn step(self, location: Location) -> Location {
        match self {
            Self::North => location.offset_by((0, -1)),
            Self::East => location.offset_by((1, 0)),
            Self::South => location.offset_by((0, 1)),
            Self::West => location.offset_by((-1, 0)),
        }
    }
}
