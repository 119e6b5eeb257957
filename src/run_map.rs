//! Run-length encoded mapping from positions to opaque values.
//!
//! A `RunMap` models a total function from the unbounded index space
//! `[0, u64::MAX)` to values of type `T`. Only the prefix of the space that has
//! been explicitly written is materialized, as an ordered vector of maximal
//! runs; every position at or past the end of the last run maps to the
//! default value.
//!
//! Lookups and overwrites accept a [`Cursor`] hint and return a fresh cursor,
//! so callers that move mostly monotonically (a formatting engine walking a
//! text buffer, a caret) pay O(1) amortized per access instead of O(run count).

use std::ops::Range;

use itertools::Itertools;

use crate::cursor::Cursor;
use crate::equality::IdentityEq;
use crate::error::{Error, Result};

/// A maximal contiguous interval of the index space sharing one value.
///
/// A run stores only its length; its absolute start position is the sum of the
/// lengths of all preceding runs in the owning [`RunMap`]. Stored runs always
/// have a non-zero length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run<T> {
    /// Number of consecutive positions covered by this run.
    pub length: u64,
    /// The value every position in the run maps to.
    pub value: T,
}

impl<T> Run<T> {
    /// Creates a run covering `length` positions.
    #[inline]
    pub fn new(length: u64, value: T) -> Run<T> {
        debug_assert!(length > 0, "runs must be non-empty");
        Run { length, value }
    }
}

/// An ordered sequence of runs plus a default value for the unmapped tail.
///
/// Invariants:
/// - No stored run has length zero.
/// - The total mapped length is the sum of all run lengths; positions at or
///   beyond it map to the default value with unbounded extent.
/// - Best effort: no two adjacent runs compare equal under the equality
///   strategy most recently used to mutate them.
///
/// The run sequence is mutated exclusively through the overwrite verbs
/// ([`set_value`](RunMap::set_value) and [`set_reference`](RunMap::set_reference)
/// and their hinted forms); it is exposed to readers only as a shared slice,
/// so external structural mutation cannot desynchronize the invariants.
///
/// # Examples
///
/// ```
/// use run_map::{Cursor, RunMap};
///
/// let mut map = RunMap::new('a');
/// map.set_value(0, 4, 'b').unwrap();
/// map.set_value(8, 2, 'c').unwrap();
///
/// // The gap [4, 8) was materialized with the default value.
/// assert_eq!(map.count_runs(), 3);
/// assert_eq!(map.total_length(), 10);
///
/// let (cursor, in_range) = map.find(9, Cursor::ORIGIN);
/// assert!(in_range);
/// assert_eq!(map.run(cursor.index()).value, 'c');
/// ```
#[derive(Debug, Clone)]
pub struct RunMap<T> {
    runs: Vec<Run<T>>,
    default: T,
}

impl<T> RunMap<T> {
    /// Creates an empty map: every position maps to `default`.
    pub fn new(default: T) -> RunMap<T> {
        RunMap {
            runs: Vec::new(),
            default,
        }
    }

    /// Builds a map from a sequence of runs, coalescing adjacent runs that
    /// hold equal values.
    pub fn from_runs(default: T, runs: impl IntoIterator<Item = Run<T>>) -> RunMap<T>
    where
        T: PartialEq,
    {
        let runs = runs
            .into_iter()
            .coalesce(|prev, next| {
                if prev.value == next.value {
                    Ok(Run::new(prev.length + next.length, prev.value))
                } else {
                    Err((prev, next))
                }
            })
            .collect();
        let map = RunMap { runs, default };
        #[cfg(debug_assertions)]
        map.check_invariants();
        map
    }

    /// Returns the number of stored runs.
    #[inline]
    pub fn count_runs(&self) -> usize {
        self.runs.len()
    }

    /// Returns `true` if no run is stored (every position maps to the default).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Returns the value mapped to every position at or beyond the last run.
    #[inline]
    pub fn default_value(&self) -> &T {
        &self.default
    }

    /// Returns the `index`-th run.
    ///
    /// Panics if `index >= count_runs()`.
    #[inline]
    pub fn run(&self, index: usize) -> &Run<T> {
        &self.runs[index]
    }

    /// Returns the stored runs in positional order.
    #[inline]
    pub fn runs(&self) -> &[Run<T>] {
        &self.runs
    }

    /// Returns the total mapped length: the sum of all run lengths.
    ///
    /// Complexity: O(run count).
    pub fn total_length(&self) -> u64 {
        self.runs.iter().map(|run| run.length).sum()
    }

    /// Returns a lazy iterator of `(absolute range, value)` pairs in positional
    /// order.
    ///
    /// Each call produces a fresh iterator over the current run sequence; the
    /// shared borrow it holds keeps the map immutable for its lifetime.
    pub fn ranges(&self) -> RangesIter<'_, T> {
        RangesIter {
            runs: self.runs.iter(),
            position: 0,
        }
    }

    /// Finds the run containing `position`.
    ///
    /// Returns the cursor of the containing run and `true` when `position` is
    /// below the total mapped length; otherwise the past-the-end cursor
    /// `(count_runs, total_length)` and `false`.
    ///
    /// `hint` selects the scan origin: the scan runs forward from the hint,
    /// forward from the origin, or backward from the hint, whichever is
    /// provably shortest. The scan distance is bounded by
    /// `min(position, |position - hint.position()|, hint.position())` runs,
    /// so threading the returned cursor through a monotonic scan costs O(1)
    /// amortized per lookup.
    ///
    /// `hint` must be [`Cursor::ORIGIN`] or a cursor obtained from this map
    /// after its most recent mutation.
    pub fn find(&self, position: u64, hint: Cursor) -> (Cursor, bool) {
        debug_assert!(hint.index() <= self.runs.len(), "stale cursor hint");
        if position == 0 {
            return (Cursor::ORIGIN, !self.runs.is_empty());
        }
        if position >= hint.position() {
            self.scan_forward(position, hint)
        } else if position < hint.position() - position {
            // The target is closer to the origin than to the hint.
            self.scan_forward(position, Cursor::ORIGIN)
        } else {
            (self.scan_backward(position, hint), true)
        }
    }

    fn scan_forward(&self, position: u64, from: Cursor) -> (Cursor, bool) {
        let mut index = from.index();
        let mut start = from.position();
        while index < self.runs.len() {
            let length = self.runs[index].length;
            if position < start + length {
                return (Cursor::new(index, start), true);
            }
            start += length;
            index += 1;
        }
        (Cursor::new(index, start), false)
    }

    fn scan_backward(&self, position: u64, from: Cursor) -> Cursor {
        // position < from.position() <= total length, so the containing run
        // lies strictly before the hint.
        let mut index = from.index();
        let mut start = from.position();
        while start > position {
            index -= 1;
            start -= self.runs[index].length;
        }
        Cursor::new(index, start)
    }

    /// Maps every position in `[first, first + length)` to `value`, merging
    /// with equal-valued neighbors under value equality (`==`).
    ///
    /// Positions outside the range keep their prior mapping; any gap between
    /// the current mapped end and `first` is materialized with the default
    /// value.
    pub fn set_value(&mut self, first: u64, length: u64, value: T) -> Result<()>
    where
        T: Clone + PartialEq,
    {
        self.overwrite(first, length, value, T::eq, Cursor::ORIGIN)?;
        Ok(())
    }

    /// Hinted form of [`set_value`](RunMap::set_value); returns the cursor of
    /// the run now containing `first`, for chaining sequential overwrites.
    pub fn set_value_with_hint(
        &mut self,
        first: u64,
        length: u64,
        value: T,
        hint: Cursor,
    ) -> Result<Cursor>
    where
        T: Clone + PartialEq,
    {
        self.overwrite(first, length, value, T::eq, hint)
    }

    /// Maps every position in `[first, first + length)` to `value`, merging
    /// neighbors only when they are the *same* object under [`IdentityEq`].
    ///
    /// Distinct but structurally equal values never merge; use this verb when
    /// separately created values must remain distinguishable runs.
    pub fn set_reference(&mut self, first: u64, length: u64, value: T) -> Result<()>
    where
        T: Clone + IdentityEq,
    {
        self.overwrite(first, length, value, T::identity_eq, Cursor::ORIGIN)?;
        Ok(())
    }

    /// Hinted form of [`set_reference`](RunMap::set_reference); returns the
    /// cursor of the run now containing `first`.
    pub fn set_reference_with_hint(
        &mut self,
        first: u64,
        length: u64,
        value: T,
        hint: Cursor,
    ) -> Result<Cursor>
    where
        T: Clone + IdentityEq,
    {
        self.overwrite(first, length, value, T::identity_eq, hint)
    }

    /// Range overwrite core shared by the public verbs.
    ///
    /// `eq` decides whether adjacent runs are eligible to merge. Capacity for
    /// any growth of the run vector is reserved up front, so on allocation
    /// failure the map is left unchanged.
    fn overwrite(
        &mut self,
        first: u64,
        length: u64,
        value: T,
        eq: impl Fn(&T, &T) -> bool,
        hint: Cursor,
    ) -> Result<Cursor>
    where
        T: Clone,
    {
        let (cursor, in_range) = self.find(first, hint);

        let result = if !in_range {
            self.append(cursor, first, length, value, &eq)
        } else if length == 0 {
            // Nothing to write and no gap to materialize.
            Ok(cursor)
        } else {
            self.replace(cursor, first, length, value, &eq)
        };

        #[cfg(debug_assertions)]
        self.check_invariants();
        result
    }

    /// Overwrite starting at or beyond the current mapped end: materialize the
    /// gap with the default value, then append the new run or extend the last
    /// one when its value compares equal.
    fn append(
        &mut self,
        cursor: Cursor,
        first: u64,
        length: u64,
        value: T,
        eq: &impl Fn(&T, &T) -> bool,
    ) -> Result<Cursor>
    where
        T: Clone,
    {
        // Worst case appends a filler run plus the new run; reserving up front
        // keeps the map untouched on allocation failure.
        self.reserve(2)?;

        let total = cursor.position();
        if first > total {
            let gap = first - total;
            let count = self.runs.len();
            if count > 0 && eq(&self.runs[count - 1].value, &self.default) {
                self.runs[count - 1].length += gap;
            } else {
                self.runs.push(Run::new(gap, self.default.clone()));
            }
        }
        if length == 0 {
            // A zero-length overwrite only materializes the gap; first is the
            // new mapped end.
            return Ok(Cursor::new(self.runs.len(), first));
        }

        let count = self.runs.len();
        if count > 0 {
            let last = &mut self.runs[count - 1];
            if eq(&last.value, &value) {
                let start = first - last.length;
                last.length += length;
                return Ok(Cursor::new(count - 1, start));
            }
        }
        self.runs.push(Run::new(length, value));
        Ok(Cursor::new(self.runs.len() - 1, first))
    }

    /// Overwrite starting inside existing content: widen the written range
    /// across equal-valued neighbors, then splice the affected slots.
    fn replace(
        &mut self,
        cursor: Cursor,
        first: u64,
        length: u64,
        value: T,
        eq: &impl Fn(&T, &T) -> bool,
    ) -> Result<Cursor>
    where
        T: Clone,
    {
        let count = self.runs.len();
        let mut first = first;
        let mut end = first + length;
        let mut fs = cursor.index();
        let mut fc = cursor.position();

        // Locate the first run not fully consumed by [first, end).
        let mut ls = fs;
        let mut lc = fc;
        while ls < count && lc + self.runs[ls].length <= end {
            lc += self.runs[ls].length;
            ls += 1;
        }

        // Left merge: fold an equal-valued predecessor, or absorb the partial
        // prefix of the first run when it already holds the new value.
        if first == fc {
            if fs > 0 && eq(&self.runs[fs - 1].value, &value) {
                fs -= 1;
                fc -= self.runs[fs].length;
                first = fc;
            }
        } else if eq(&self.runs[fs].value, &value) {
            first = fc;
        }

        // Right merge: swallow the trailing run entirely when it holds the
        // new value, whether the overwrite ends at or inside it.
        if ls < count && eq(&self.runs[ls].value, &value) {
            lc += self.runs[ls].length;
            ls += 1;
            end = lc;
        }

        let has_prefix = first > fc;
        let has_suffix = ls < count && end > lc;

        let new_count = 1 + has_prefix as usize + has_suffix as usize;
        let old_count = (ls - fs) + has_suffix as usize;
        if new_count > old_count {
            self.reserve(new_count - old_count)?;
        }

        let prefix = has_prefix.then(|| Run::new(first - fc, self.runs[fs].value.clone()));
        let suffix = has_suffix.then(|| {
            Run::new(
                lc + self.runs[ls].length - end,
                self.runs[ls].value.clone(),
            )
        });
        let replacement = prefix
            .into_iter()
            .chain(std::iter::once(Run::new(end - first, value)))
            .chain(suffix);
        self.runs.splice(fs..ls + has_suffix as usize, replacement);

        Ok(Cursor::new(fs + has_prefix as usize, first))
    }

    fn reserve(&mut self, additional: usize) -> Result<()> {
        self.runs
            .try_reserve(additional)
            .map_err(|source| Error::out_of_resources("growing the run sequence", source))
    }

    /// Verifies the structural invariants of the run sequence.
    ///
    /// Called from every mutation exit in debug builds; panics on violation.
    pub fn check_invariants(&self) {
        for (index, run) in self.runs.iter().enumerate() {
            assert!(run.length > 0, "zero-length run stored at index {index}");
        }
    }
}

/// Lazy forward-only iterator over `(absolute range, value)` pairs of a
/// [`RunMap`], accumulating run start positions as it advances.
#[derive(Clone)]
pub struct RangesIter<'a, T> {
    runs: std::slice::Iter<'a, Run<T>>,
    position: u64,
}

impl<'a, T> Iterator for RangesIter<'a, T> {
    type Item = (Range<u64>, &'a T);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let run = self.runs.next()?;
        let start = self.position;
        self.position += run.length;
        Some((start..self.position, &run.value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.runs.size_hint()
    }
}

impl<'a, T> ExactSizeIterator for RangesIter<'a, T> {}

impl<'a, T> std::iter::FusedIterator for RangesIter<'a, T> {}
