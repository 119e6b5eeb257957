//! Run-length encoded interval map with locality-optimized cursor lookups.
//!
//! This crate maps every position of an unbounded, zero-based `u64` index
//! space (character offsets in a document, cells in a row) to an opaque
//! classification value, while storing only the minimal sequence of maximal
//! contiguous runs that share a value. It offers:
//!
//! - **Point lookup**: [`RunMap::find`] resolves the run containing a position.
//! - **Range overwrite**: [`RunMap::set_value`] / [`RunMap::set_reference`]
//!   rewrite an arbitrary range, splitting and merging runs to keep the
//!   sequence compact.
//! - **Cursor threading**: every operation returns a [`Cursor`] that the next
//!   call can use as a scan hint, making monotonic position scans amortized
//!   O(1) even though a cold lookup is O(run count).
//! - **Stateful access**: [`RangeAccessor`] wraps a map reference and a live
//!   cursor into a moving read head with "current run" queries.
//!
//! # Key Types
//!
//! - [`RunMap`] - the ordered run sequence plus a default value for the
//!   unmapped tail
//! - [`Cursor`] - a `(run index, run start)` pair enabling cheap re-lookup
//! - [`RangeAccessor`] - a sequential positional view over a `RunMap`
//! - [`IdentityEq`] - the identity-equality strategy used by `set_reference`

pub mod accessor;
pub mod cursor;
pub mod equality;
pub mod error;
pub mod run_map;
#[cfg(test)]
mod tests;

pub use accessor::RangeAccessor;
pub use cursor::Cursor;
pub use equality::IdentityEq;
pub use error::{Error, ErrorKind, Result};
pub use run_map::{RangesIter, Run, RunMap};
