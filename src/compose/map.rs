use std::iter::FusedIterator;

/// Transforms each element of the wrapped cursor.
///
/// The callback also receives the zero-based position of the element in the
/// source.
#[derive(Debug, Clone)]
pub struct Map<I, F> {
    source: I,
    f: F,
    index: usize,
}

/// Create a sequence yielding `f(value, index)` for each source element.
///
/// ```rust
/// use lazy_seq::prelude::*;
///
/// let labels: Vec<String> = map(["a", "b"], |v, i| format!("{i}:{v}")).collect();
/// assert_eq!(labels, vec!["0:a", "1:b"]);
/// ```
pub fn map<S, R, F>(sequence: S, f: F) -> Map<S::IntoIter, F>
where
    S: IntoIterator,
    F: FnMut(S::Item, usize) -> R,
{
    Map {
        source: sequence.into_iter(),
        f,
        index: 0,
    }
}

impl<I, R, F> Iterator for Map<I, F>
where
    I: Iterator,
    F: FnMut(I::Item, usize) -> R,
{
    type Item = R;

    fn next(&mut self) -> Option<R> {
        let element = self.source.next()?;
        let i = self.index;
        self.index += 1;
        Some((self.f)(element, i))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.source.size_hint()
    }
}

impl<I, R, F> FusedIterator for Map<I, F>
where
    I: FusedIterator,
    F: FnMut(I::Item, usize) -> R,
{
}

/// Keeps the elements of the wrapped cursor that satisfy a predicate.
///
/// The index passed to the predicate counts every element pulled from the
/// source, including rejected ones.
#[derive(Debug, Clone)]
pub struct Filter<I, P> {
    source: I,
    predicate: P,
    index: usize,
}

/// Create a sequence of the source elements for which `predicate(value, index)`
/// holds.
pub fn filter<S, P>(sequence: S, predicate: P) -> Filter<S::IntoIter, P>
where
    S: IntoIterator,
    P: FnMut(&S::Item, usize) -> bool,
{
    Filter {
        source: sequence.into_iter(),
        predicate,
        index: 0,
    }
}

impl<I, P> Iterator for Filter<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item, usize) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        for element in self.source.by_ref() {
            let i = self.index;
            self.index += 1;
            if (self.predicate)(&element, i) {
                return Some(element);
            }
        }
        None
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.source.size_hint().1)
    }
}

impl<I, P> FusedIterator for Filter<I, P>
where
    I: FusedIterator,
    P: FnMut(&I::Item, usize) -> bool,
{
}

/// Keeps and narrows the elements of the wrapped cursor.
///
/// Created via [`filter_as`]. Indexing follows [`Filter`].
#[derive(Debug, Clone)]
pub struct FilterAs<I, F> {
    source: I,
    refine: F,
    index: usize,
}

/// Create a sequence of `refine(value, index)` results that are `Some`.
///
/// This is [`filter`] for predicates that also narrow the element type.
///
/// ```rust
/// use lazy_seq::prelude::*;
///
/// let numbers: Vec<i64> = filter_as(["1", "x", "3"], |s, _| s.parse::<i64>().ok()).collect();
/// assert_eq!(numbers, vec![1, 3]);
/// ```
pub fn filter_as<S, R, F>(sequence: S, refine: F) -> FilterAs<S::IntoIter, F>
where
    S: IntoIterator,
    F: FnMut(S::Item, usize) -> Option<R>,
{
    FilterAs {
        source: sequence.into_iter(),
        refine,
        index: 0,
    }
}

impl<I, R, F> Iterator for FilterAs<I, F>
where
    I: Iterator,
    F: FnMut(I::Item, usize) -> Option<R>,
{
    type Item = R;

    fn next(&mut self) -> Option<R> {
        for element in self.source.by_ref() {
            let i = self.index;
            self.index += 1;
            if let Some(narrowed) = (self.refine)(element, i) {
                return Some(narrowed);
            }
        }
        None
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.source.size_hint().1)
    }
}

impl<I, R, F> FusedIterator for FilterAs<I, F>
where
    I: FusedIterator,
    F: FnMut(I::Item, usize) -> Option<R>,
{
}
