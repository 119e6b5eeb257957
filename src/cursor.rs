/// A cached `(run index, run start position)` pair produced by `RunMap`
/// lookups and mutations.
///
/// Passing a recently returned cursor back into the next call lets the map
/// choose a nearby scan origin instead of re-walking the run sequence from
/// position zero, which makes monotonic (or near-monotonic) access patterns
/// amortized O(1).
///
/// A cursor is a plain value: it does not borrow the map it came from, and it
/// becomes stale after any mutation of that map other than the mutation that
/// returned it. Feeding a stale cursor back in is a precondition violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    index: usize,
    position: u64,
}

impl Cursor {
    /// The cursor of the first run: index 0, position 0. Always a valid hint.
    pub const ORIGIN: Cursor = Cursor {
        index: 0,
        position: 0,
    };

    #[inline]
    pub(crate) fn new(index: usize, position: u64) -> Cursor {
        Cursor { index, position }
    }

    /// Index of the referenced run, or the run count for a past-the-end cursor.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Absolute start position of the referenced run: the sum of the lengths
    /// of all preceding runs.
    #[inline]
    pub fn position(&self) -> u64 {
        self.position
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Cursor::ORIGIN
    }
}
