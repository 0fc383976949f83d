//! Random-access views over arbitrary sequences.
//!
//! Index-based work needs a slice. The helpers here accept either a slice,
//! which is used in place, or any other sequence, which is drained into a new
//! `Vec` first. As elsewhere in the crate the choice is written as an
//! [`Either`]: `Left` for a collection that is already ordered, `Right` for a
//! general sequence.

use either::Either;

/// Get a slice view of `source`, draining it only when it is not one already.
///
/// The result derefs to `[T]`. A `Left` input comes back as the same borrowed
/// slice; a `Right` input is moved element by element into a new `Vec`.
///
/// ```rust
/// use lazy_seq::prelude::*;
///
/// let items = [1, 2, 3];
/// let view = unwrap_array(Either::<_, Vec<i32>>::Left(&items[..]));
/// assert!(view.is_left());
///
/// let drained = unwrap_array(Either::<&[i32], _>::Right(reverse(&items).copied()));
/// assert_eq!(&*drained, &[3, 2, 1]);
/// ```
pub fn unwrap_array<'a, T, S>(source: Either<&'a [T], S>) -> Either<&'a [T], Vec<T>>
where
    S: IntoIterator<Item = T>,
{
    source.map_right(|sequence| sequence.into_iter().collect())
}

/// Returns the index of the last element satisfying `predicate`.
///
/// The scan starts at the final element and walks toward the front.
pub fn find_last_index<T, S, P>(source: Either<&[T], S>, mut predicate: P) -> Option<usize>
where
    S: IntoIterator<Item = T>,
    P: FnMut(&T) -> bool,
{
    let items = unwrap_array(source);
    (0..items.len()).rev().find(|&i| predicate(&items[i]))
}
