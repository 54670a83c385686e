/// A one-hot selector for a clockwise rotation by zero to three
/// quarter-turns: `1 << i` selects a rotation by `i`.
///
/// [`Shape::rotate`](crate::shape::Shape::rotate) consumes the selector
/// directly as a multiplier, which is why it is kept one-hot instead of
/// being an index.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Turn(u8);

impl Turn {
    /// All four turns, in increasing rotation order.
    pub(crate) const ALL: [Self; 4] = [Self(0x1), Self(0x2), Self(0x4), Self(0x8)];

    pub(crate) const fn bits(self) -> u8 {
        self.0
    }
}

/// The set of rotations a cell may still be placed in, one bit per
/// [`Turn`].
///
/// During search an unresolved cell holds two or more bits, a resolved cell
/// exactly one. The empty set only ever appears transiently inside the
/// propagator, where it signals a contradiction.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Options(u8);

impl Options {
    pub(crate) const NONE: Self = Self(0);

    pub(crate) const fn of(bits: u8) -> Self {
        Self(bits & 0xf)
    }

    pub(crate) const fn bits(self) -> u8 {
        self.0
    }

    /// Whether at most one rotation remains.
    pub(crate) fn resolved(self) -> bool {
        self.0 & self.0.wrapping_sub(1) == 0
    }

    pub(crate) fn insert(&mut self, turn: Turn) {
        self.0 |= turn.0;
    }

    /// The remaining turns, in increasing rotation order.
    pub(crate) fn turns(self) -> impl Iterator<Item = Turn> {
        Turn::ALL.into_iter().filter(move |turn| self.0 & turn.0 != 0)
    }

    /// The single remaining turn of a resolved, non-empty set.
    pub(crate) fn turn(self) -> Turn {
        debug_assert!(self != Self::NONE && self.resolved());
        Turn(self.0)
    }

    /// Pin the set to exactly one turn.
    pub(crate) fn only(turn: Turn) -> Self {
        Self(turn.0)
    }
}
