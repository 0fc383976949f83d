use std::{fmt, iter::FusedIterator};

use either::Either;

use crate::build::{single, Single};

/// Runs through a list of elements and sequences in order.
///
/// Created via [`concat`]. The part being drained is held in `current` and
/// dropped once it is exhausted.
pub struct Concat<P, T, S>
where
    S: IntoIterator<Item = T>,
{
    parts: P,
    current: Option<Either<Single<T>, S::IntoIter>>,
}

/// Create a sequence of every element of `parts`, in order.
///
/// A `Right` part contributes all of its elements. A `Left` part contributes
/// itself. Only one level is flattened: a part whose elements are themselves
/// sequences yields those sequences as elements.
///
/// ```rust
/// use lazy_seq::prelude::*;
///
/// let out: Vec<i32> = concat([
///     Either::Left(1),
///     Either::Right(vec![2, 3]),
///     Either::Left(4),
/// ])
/// .collect();
/// assert_eq!(out, vec![1, 2, 3, 4]);
/// ```
pub fn concat<I, T, S>(parts: I) -> Concat<I::IntoIter, T, S>
where
    I: IntoIterator<Item = Either<T, S>>,
    S: IntoIterator<Item = T>,
{
    Concat {
        parts: parts.into_iter(),
        current: None,
    }
}

impl<P, T, S> Iterator for Concat<P, T, S>
where
    P: Iterator<Item = Either<T, S>>,
    S: IntoIterator<Item = T>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        loop {
            if let Some(current) = self.current.as_mut() {
                match current.next() {
                    Some(element) => return Some(element),
                    None => self.current = None,
                }
            }

            self.current = Some(match self.parts.next()? {
                Either::Left(element) => Either::Left(single(element)),
                Either::Right(sequence) => Either::Right(sequence.into_iter()),
            });
        }
    }
}

// Manual impls: `S` itself need not be `Clone` or `Debug`.
impl<P, T, S> Clone for Concat<P, T, S>
where
    P: Clone,
    T: Clone,
    S: IntoIterator<Item = T>,
    S::IntoIter: Clone,
{
    fn clone(&self) -> Self {
        Concat {
            parts: self.parts.clone(),
            current: self.current.clone(),
        }
    }
}

impl<P, T, S> fmt::Debug for Concat<P, T, S>
where
    P: fmt::Debug,
    T: fmt::Debug,
    S: IntoIterator<Item = T>,
    S::IntoIter: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Concat")
            .field("parts", &self.parts)
            .field("current", &self.current)
            .finish()
    }
}

impl<P, T, S> FusedIterator for Concat<P, T, S>
where
    P: FusedIterator<Item = Either<T, S>>,
    S: IntoIterator<Item = T>,
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_concat_mixed_parts() {
        let out: Vec<_> = concat([
            Either::Left(1),
            Either::Right(vec![2, 3]),
            Either::Left(4),
        ])
        .collect();
        assert_eq!(out, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_concat_skips_empty_sequences() {
        let parts: Vec<Either<char, Vec<char>>> = vec![
            Either::Right(vec![]),
            Either::Left('a'),
            Either::Right(vec![]),
            Either::Right(vec!['b', 'c']),
        ];
        assert_eq!(concat(parts).collect::<String>(), "abc");
    }

    #[test]
    fn test_concat_nothing() {
        let parts: [Either<u8, Vec<u8>>; 0] = [];
        assert_eq!(concat(parts).next(), None);
    }

    #[test]
    fn test_concat_flattens_one_level() {
        let nested = vec![vec![1, 2], vec![3]];
        let out: Vec<Vec<i32>> = concat([
            Either::Right(nested),
            Either::Left(vec![4]),
        ])
        .collect();
        assert_eq!(out, vec![vec![1, 2], vec![3], vec![4]]);
    }

    #[test]
    fn test_concat_pulls_parts_on_demand() {
        let pulled = Cell::new(0);
        let parts = std::iter::from_fn(|| {
            pulled.set(pulled.get() + 1);
            Some(Either::<u32, Vec<u32>>::Left(pulled.get()))
        });

        let mut seq = concat(parts);
        assert_eq!(pulled.get(), 0);
        assert_eq!(seq.next(), Some(1));
        assert_eq!(pulled.get(), 1);
    }

    #[test]
    fn test_concat_stays_exhausted() {
        let mut seq = concat([Either::<u8, Vec<u8>>::Left(1)]);
        assert_eq!(seq.next(), Some(1));
        assert_eq!(seq.next(), None);
        assert_eq!(seq.next(), None);
    }

    #[test]
    fn test_concat_clone_resumes_independently() {
        let mut seq = concat([Either::Right(vec![1, 2]), Either::Left(3)]);
        assert_eq!(seq.next(), Some(1));
        let copy = seq.clone();
        assert_eq!(seq.collect::<Vec<_>>(), vec![2, 3]);
        assert_eq!(copy.collect::<Vec<_>>(), vec![2, 3]);
    }

    #[test]
    fn test_concat_is_lazy() {
        let mut pulled = 0;
        let parts = std::iter::from_fn(|| {
            pulled += 1;
            Some(Either::<u32, Vec<u32>>::Left(pulled))
        });
        let out: Vec<_> = concat(parts).take(3).collect();
        assert_eq!(out, vec![1, 2, 3]);
    }
}
