//! Functions for draining sequences eagerly.
//!
//! This module provides both synchronous and asynchronous drivers, plus
//! bounded consumption that hands back the rest of the sequence.

use either::Either;
use futures::{pin_mut, Stream, StreamExt, TryStreamExt};

use crate::sequence::{empty, Empty};

/// Fold every element into an accumulator, left to right.
///
/// Drains the whole sequence; never returns for an infinite one.
///
/// ```rust
/// use lazy_seq::prelude::*;
///
/// let doubled = map([1, 2, 3, 4], |x, _| x * 2);
/// let large = filter(doubled, |x, _| *x > 4);
/// assert_eq!(reduce(large, |a, b| a + b, 0), 14);
/// ```
pub fn reduce<S, R, F>(sequence: S, mut reducer: F, initial: R) -> R
where
    S: IntoIterator,
    F: FnMut(R, S::Item) -> R,
{
    let mut acc = initial;
    for element in sequence {
        acc = reducer(acc, element);
    }
    acc
}

/// Fallible version of [`reduce`].
///
/// Stops at the first `Err` from the reducer and returns it as-is. Elements
/// after the failing one are not pulled.
pub fn try_reduce<S, R, E, F>(sequence: S, mut reducer: F, initial: R) -> Result<R, E>
where
    S: IntoIterator,
    F: FnMut(R, S::Item) -> Result<R, E>,
{
    let mut acc = initial;
    for element in sequence {
        acc = reducer(acc, element)?;
    }
    Ok(acc)
}

/// What is left of a sequence after [`consume`].
///
/// The remainder owns the source's cursor outright; the source was moved into
/// [`consume`] and cannot be pulled from behind its back.
pub enum Remainder<S>
where
    S: IntoIterator,
{
    /// Nothing was requested, so the source comes back as it was.
    Untouched(S),
    /// The cursor stopped after the requested number of elements.
    Partial(S::IntoIter),
    /// The cursor ran out; iterates as the canonical empty sequence.
    Exhausted,
}

impl<S> Remainder<S>
where
    S: IntoIterator,
{
    /// Reports whether the source is known to be drained.
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Remainder::Exhausted)
    }
}

impl<S> IntoIterator for Remainder<S>
where
    S: IntoIterator,
{
    type Item = S::Item;
    type IntoIter = Either<S::IntoIter, Empty<S::Item>>;

    fn into_iter(self) -> Self::IntoIter {
        match self {
            Remainder::Untouched(s) => Either::Left(s.into_iter()),
            Remainder::Partial(cursor) => Either::Left(cursor),
            Remainder::Exhausted => Either::Right(empty()),
        }
    }
}

/// Pull up to `at_most` elements (all of them for `None`) into a `Vec`.
///
/// Returns the pulled elements together with the rest of the sequence. Draining
/// the remainder continues exactly where collection stopped.
///
/// ```rust
/// use lazy_seq::prelude::*;
///
/// let (head, rest) = consume(1..=5, Some(2));
/// assert_eq!(head, vec![1, 2]);
/// assert_eq!(rest.into_iter().collect::<Vec<_>>(), vec![3, 4, 5]);
/// ```
pub fn consume<S>(sequence: S, at_most: Option<usize>) -> (Vec<S::Item>, Remainder<S>)
where
    S: IntoIterator,
{
    let mut consumed = Vec::new();

    if at_most == Some(0) {
        return (consumed, Remainder::Untouched(sequence));
    }

    let mut cursor = sequence.into_iter();
    loop {
        if at_most.is_some_and(|n| consumed.len() >= n) {
            return (consumed, Remainder::Partial(cursor));
        }
        match cursor.next() {
            Some(element) => consumed.push(element),
            None => return (consumed, Remainder::Exhausted),
        }
    }
}

/// Drain an asynchronous sequence into a `Vec`, in arrival order.
///
/// Each pull may suspend; elements are requested one at a time.
pub async fn async_to_vec<S>(stream: S) -> Vec<S::Item>
where
    S: Stream,
{
    pin_mut!(stream);
    let mut items = Vec::new();
    while let Some(item) = stream.next().await {
        items.push(item);
    }
    items
}

/// Drain a fallible asynchronous sequence into a `Vec`.
///
/// The first error aborts the drain and is returned unmodified; elements
/// collected before it are dropped.
pub async fn try_async_to_vec<S, T, E>(stream: S) -> Result<Vec<T>, E>
where
    S: Stream<Item = Result<T, E>>,
{
    pin_mut!(stream);
    let mut items = Vec::new();
    while let Some(item) = stream.try_next().await? {
        items.push(item);
    }
    Ok(items)
}
