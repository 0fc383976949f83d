//! The iteration capability and the canonical empty sequence.
//!
//! A *sequence* is anything implementing [`IntoIterator`]; its *cursor* is the
//! resulting [`Iterator`]. Where a value may be either a bare element or a
//! sequence of elements, it is written as [`Either<T, S>`]: `Left` holds the
//! element, `Right` holds the sequence.
//!
//! # Examples
//!
//! ```rust
//! use lazy_seq::prelude::*;
//!
//! let none: Option<Vec<i32>> = None;
//! assert_eq!(from(none).into_iter().count(), 0);
//! assert!(is_iterable(&Either::<i32, Vec<i32>>::Right(vec![1, 2])));
//! ```

use std::{fmt, iter::FusedIterator, marker::PhantomData};

use either::Either;

/// Reports whether `value` carries a sequence rather than a bare element.
pub fn is_iterable<T, S>(value: &Either<T, S>) -> bool
where
    S: IntoIterator<Item = T>,
{
    value.is_right()
}

/// The canonical empty sequence.
///
/// `Empty` is zero-sized, so every instance is the same immutable value and
/// handing one out never allocates. It is `Copy`, and every cursor taken from
/// it is exhausted from the start.
pub struct Empty<T>(PhantomData<fn() -> T>);

impl<T> Empty<T> {
    pub const fn new() -> Self {
        Empty(PhantomData)
    }
}

// Manual impls keep these free of bounds on `T`.
impl<T> Clone for Empty<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Empty<T> {}

impl<T> Default for Empty<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Empty<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Empty")
    }
}

impl<T> Iterator for Empty<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        None
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(0))
    }
}

impl<T> ExactSizeIterator for Empty<T> {}

impl<T> FusedIterator for Empty<T> {}

/// Returns the canonical empty sequence.
pub const fn empty<T>() -> Empty<T> {
    Empty::new()
}

/// A caller-supplied sequence, or the canonical empty sequence in its place.
///
/// Created via [`from`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrEmpty<S> {
    /// The source, moved through untouched.
    Source(S),
    /// No source was given.
    Empty,
}

impl<S> OrEmpty<S> {
    /// Borrow the source sequence, if there was one.
    pub fn as_sequence(&self) -> Option<&S> {
        match self {
            OrEmpty::Source(s) => Some(s),
            OrEmpty::Empty => None,
        }
    }

    /// Give back the source sequence, if there was one.
    pub fn into_sequence(self) -> Option<S> {
        match self {
            OrEmpty::Source(s) => Some(s),
            OrEmpty::Empty => None,
        }
    }
}

impl<S> IntoIterator for OrEmpty<S>
where
    S: IntoIterator,
{
    type Item = S::Item;
    type IntoIter = Either<S::IntoIter, Empty<S::Item>>;

    fn into_iter(self) -> Self::IntoIter {
        match self {
            OrEmpty::Source(s) => Either::Left(s.into_iter()),
            OrEmpty::Empty => Either::Right(empty()),
        }
    }
}

/// Treat a missing sequence as the canonical empty sequence.
///
/// Only `None` is replaced. A present but empty collection is passed through
/// unchanged and simply yields nothing.
pub fn from<S>(value: Option<S>) -> OrEmpty<S>
where
    S: IntoIterator,
{
    match value {
        Some(s) => OrEmpty::Source(s),
        None => OrEmpty::Empty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    #[test]
    fn test_empty_is_zero_sized_and_regenerable() {
        let canonical = empty::<String>();
        assert_eq!(size_of::<Empty<String>>(), 0);

        for _ in 0..3 {
            assert_eq!(canonical.count(), 0);
        }
    }

    #[test]
    fn test_empty_stays_exhausted() {
        let mut cursor = empty::<u8>();
        assert_eq!(cursor.next(), None);
        assert_eq!(cursor.next(), None);
        assert_eq!(cursor.len(), 0);
    }

    #[test]
    fn test_is_iterable_only_for_sequences() {
        let element: Either<u32, Vec<u32>> = Either::Left(7);
        let sequence: Either<u32, Vec<u32>> = Either::Right(vec![7]);
        assert!(!is_iterable(&element));
        assert!(is_iterable(&sequence));
    }

    #[test]
    fn test_from_none_is_empty() {
        let seq = from::<Vec<u32>>(None);
        assert_eq!(seq, OrEmpty::Empty);
        assert_eq!(seq.into_iter().count(), 0);
    }

    #[test]
    fn test_from_keeps_source_identity() {
        let values = vec![1, 2, 3];
        let seq = from(Some(&values));
        assert!(std::ptr::eq(*seq.as_sequence().unwrap(), &values));
        assert_eq!(seq.into_iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_from_does_not_coerce_present_empty_collection() {
        let seq = from(Some(Vec::<u32>::new()));
        assert_eq!(seq.into_sequence(), Some(Vec::new()));
    }
}
