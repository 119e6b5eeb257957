//! A stateful positional view over a [`RunMap`].
//!
//! Where [`RunMap::find`] is a one-shot lookup, a `RangeAccessor` behaves like
//! a moving read head (a caret, a formatter's scan position): it remembers the
//! last resolved cursor and position, answers "current run" queries against
//! them, and reuses the cursor as the hint for the next seek.

use crate::cursor::Cursor;
use crate::run_map::RunMap;

/// A caller-owned moving read head over a [`RunMap`].
///
/// The accessor is always in one of two states:
/// - **bounded**: positioned inside a stored run; run metadata queries answer
///   from that run;
/// - **unbounded**: positioned at or past the mapped end; the current value is
///   the map's default and the current extent has no finite end.
///
/// [`seek`](RangeAccessor::seek) is the only transition between the states.
/// The shared borrow of the map held by the accessor keeps the map immutable
/// for the accessor's lifetime.
pub struct RangeAccessor<'a, T> {
    map: &'a RunMap<T>,
    position: u64,
    cursor: Cursor,
    in_range: bool,
}

impl<'a, T> RangeAccessor<'a, T> {
    /// Creates an accessor positioned at 0.
    pub fn new(map: &'a RunMap<T>) -> RangeAccessor<'a, T> {
        RangeAccessor::with_cursor(map, Cursor::ORIGIN)
    }

    /// Creates an accessor positioned at the start of the run `cursor` refers
    /// to.
    ///
    /// `cursor` must be [`Cursor::ORIGIN`] or a cursor obtained from `map`
    /// after its most recent mutation.
    pub fn with_cursor(map: &'a RunMap<T>, cursor: Cursor) -> RangeAccessor<'a, T> {
        debug_assert!(cursor.index() <= map.count_runs(), "stale cursor");
        RangeAccessor {
            map,
            position: cursor.position(),
            cursor,
            in_range: cursor.index() < map.count_runs(),
        }
    }

    /// Creates an accessor at `position`, seeded with `cursor` as the lookup
    /// hint.
    pub fn with_position(
        map: &'a RunMap<T>,
        cursor: Cursor,
        position: u64,
    ) -> RangeAccessor<'a, T> {
        let mut accessor = RangeAccessor::with_cursor(map, cursor);
        accessor.seek(position);
        accessor
    }

    /// Moves the accessor to `position`, resolving the containing run with the
    /// previously cached cursor as the scan hint.
    ///
    /// Returns `true` when the new position lies inside a stored run (the
    /// accessor becomes bounded), `false` when it lies in the trailing default
    /// region (unbounded).
    pub fn seek(&mut self, position: u64) -> bool {
        let (cursor, in_range) = self.map.find(position, self.cursor);
        self.cursor = cursor;
        self.position = position;
        self.in_range = in_range;
        in_range
    }

    /// Returns the value at the current position: the current run's value when
    /// bounded, the map's default when unbounded.
    #[inline]
    pub fn value(&self) -> &'a T {
        if self.in_range {
            &self.map.run(self.cursor.index()).value
        } else {
            self.map.default_value()
        }
    }

    /// Returns the absolute start of the current run (the total mapped length
    /// when unbounded).
    #[inline]
    pub fn span_start(&self) -> u64 {
        self.cursor.position()
    }

    /// Returns the current absolute position.
    #[inline]
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Returns the cached cursor, usable as a hint for other calls on the same
    /// map.
    #[inline]
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Returns `true` when the accessor is positioned inside a stored run.
    #[inline]
    pub fn is_bounded(&self) -> bool {
        self.in_range
    }

    /// Returns the distance from the current position to the end of the
    /// current run, or `None` when the accessor sits in the trailing default
    /// region, whose extent has no finite end.
    #[inline]
    pub fn remaining(&self) -> Option<u64> {
        self.in_range.then(|| {
            self.cursor.position() + self.map.run(self.cursor.index()).length - self.position
        })
    }
}
