use std::iter::FusedIterator;

/// Walks an ordered collection from its last element to its first.
///
/// Created via [`reverse`]. Each instance keeps its own position, so any
/// number of them can run over the same collection independently.
#[derive(Debug, Clone)]
pub struct Reverse<'a, T> {
    items: &'a [T],
    // number of elements not yet yielded
    remaining: usize,
}

/// Create a sequence yielding the elements of `items` from last to first.
///
/// ```rust
/// use lazy_seq::prelude::*;
///
/// let items = [1, 2, 3];
/// assert_eq!(reverse(&items).copied().collect::<Vec<_>>(), vec![3, 2, 1]);
/// ```
pub fn reverse<T>(items: &[T]) -> Reverse<'_, T> {
    Reverse {
        items,
        remaining: items.len(),
    }
}

impl<'a, T> Iterator for Reverse<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.items.get(self.remaining)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Reverse<'_, T> {}

impl<T> FusedIterator for Reverse<'_, T> {}
