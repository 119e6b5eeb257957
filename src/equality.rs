//! The equality seam that controls run merging.
//!
//! A `RunMap` folds adjacent runs together only when their values compare
//! equal under the strategy the mutation was invoked with:
//!
//! - **Value equality** (`set_value`) compares through [`PartialEq`].
//! - **Identity equality** (`set_reference`) compares through [`IdentityEq`]:
//!   two values are equal only if they are the *same* underlying object, not
//!   merely structurally equal copies.
//!
//! Identity equality matters when distinct-but-equal values must stay
//! distinguishable, e.g. two separately allocated style objects that happen to
//! hold the same fields.

use std::rc::Rc;
use std::sync::Arc;

/// Identity comparison for run values.
///
/// Implementations must be reflexive (`v.identity_eq(&v)` is true for the same
/// underlying object) and symmetric. Unlike `PartialEq`, structural equality of
/// two independently created values must *not* imply identity equality.
///
/// # Examples
///
/// ```
/// use std::rc::Rc;
/// use run_map::IdentityEq;
///
/// let a = Rc::new(5);
/// let b = Rc::new(5);
/// assert!(a.identity_eq(&a.clone()));
/// assert!(!a.identity_eq(&b)); // equal contents, distinct objects
/// ```
pub trait IdentityEq {
    fn identity_eq(&self, other: &Self) -> bool;
}

impl<T: ?Sized> IdentityEq for Rc<T> {
    #[inline]
    fn identity_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(self, other)
    }
}

impl<T: ?Sized> IdentityEq for Arc<T> {
    #[inline]
    fn identity_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}

impl<T: ?Sized> IdentityEq for &T {
    #[inline]
    fn identity_eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(*self, *other)
    }
}
