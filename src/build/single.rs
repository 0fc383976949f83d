use std::iter::FusedIterator;

use either::Either;

/// Yields one element, then completes.
///
/// Single-pass: once the element has been pulled the sequence stays exhausted.
#[derive(Debug, Clone)]
pub struct Single<T>(Option<T>);

/// Create a sequence that yields exactly `element`.
///
/// ```rust
/// use lazy_seq::prelude::*;
///
/// let mut seq = single("only");
/// assert_eq!(seq.next(), Some("only"));
/// assert_eq!(seq.next(), None);
/// ```
pub fn single<T>(element: T) -> Single<T> {
    Single(Some(element))
}

impl<T> Iterator for Single<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.0.take()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::from(self.0.is_some());
        (n, Some(n))
    }
}

impl<T> ExactSizeIterator for Single<T> {}

impl<T> FusedIterator for Single<T> {}

/// A sequence produced by [`wrap`].
///
/// Either the caller's own sequence, moved through untouched, or a fresh
/// [`Single`] around a bare element.
#[derive(Debug, Clone)]
pub enum Wrap<T, S> {
    Element(Single<T>),
    Sequence(S),
}

impl<T, S> Wrap<T, S> {
    /// Borrow the wrapped sequence if the input already was one.
    pub fn as_sequence(&self) -> Option<&S> {
        match self {
            Wrap::Sequence(s) => Some(s),
            Wrap::Element(_) => None,
        }
    }

    /// Give back the input sequence if the input already was one.
    pub fn into_sequence(self) -> Option<S> {
        match self {
            Wrap::Sequence(s) => Some(s),
            Wrap::Element(_) => None,
        }
    }
}

impl<T, S> IntoIterator for Wrap<T, S>
where
    S: IntoIterator<Item = T>,
{
    type Item = T;
    type IntoIter = Either<Single<T>, S::IntoIter>;

    fn into_iter(self) -> Self::IntoIter {
        match self {
            Wrap::Element(single) => Either::Left(single),
            Wrap::Sequence(s) => Either::Right(s.into_iter()),
        }
    }
}

/// Treat a value as a sequence.
///
/// A sequence (`Right`) is returned as-is, never copied. A bare element
/// (`Left`) becomes a one-element sequence.
///
/// Whether something iterable counts as one element or as many is decided by
/// the caller: `Right("ab".chars())` is two chars, `Left("ab")` is one `&str`.
///
/// ```rust
/// use lazy_seq::prelude::*;
///
/// let letters: Vec<char> = wrap(Either::<char, _>::Right("ab".chars())).into_iter().collect();
/// assert_eq!(letters, vec!['a', 'b']);
///
/// let words: Vec<&str> = wrap(Either::<_, Vec<&str>>::Left("ab")).into_iter().collect();
/// assert_eq!(words, vec!["ab"]);
/// ```
pub fn wrap<T, S>(value: Either<T, S>) -> Wrap<T, S>
where
    S: IntoIterator<Item = T>,
{
    match value {
        Either::Left(element) => Wrap::Element(single(element)),
        Either::Right(sequence) => Wrap::Sequence(sequence),
    }
}
