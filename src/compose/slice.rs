use std::iter::FusedIterator;

/// Yields a contiguous window of an ordered collection.
///
/// Created via [`slice`], which resolves the bounds up front.
#[derive(Debug, Clone)]
pub struct Slice<'a, T> {
    items: &'a [T],
    next: usize,
    end: usize,
}

/// Create a sequence over `items[from..to)` with signed, defaulted bounds.
///
/// Bounds are resolved in this order:
///
/// 1. a `from` below `-len` is clamped to `0`;
/// 2. a negative `from` counts back from the end;
/// 3. a negative `to` counts back from the end, a `to` above `len` (or `None`)
///    is clamped to `len`.
///
/// The first rule has no counterpart for `to`: a `to` below `-len` stays
/// negative and the result is empty. The result is also empty whenever the
/// resolved `from` is not below the resolved `to`.
///
/// ```rust
/// use lazy_seq::prelude::*;
///
/// let items = [10, 20, 30, 40, 50];
/// assert_eq!(slice(&items, -2, None).copied().collect::<Vec<_>>(), vec![40, 50]);
/// assert_eq!(slice(&items, 0, Some(-1)).count(), 4);
/// assert_eq!(slice(&items, -100, None).count(), 5);
/// ```
pub fn slice<T>(items: &[T], from: isize, to: Option<isize>) -> Slice<'_, T> {
    // Collections never exceed isize::MAX bytes, so neither can their length.
    let len = items.len() as isize;

    let mut from = from;
    if from < -len {
        from = 0;
    }
    if from < 0 {
        from += len;
    }

    let mut to = to.unwrap_or(len);
    if to < 0 {
        to += len;
    } else if to > len {
        to = len;
    }

    let (next, end) = if from < to {
        (from as usize, to as usize)
    } else {
        (0, 0)
    };

    Slice { items, next, end }
}

impl<'a, T> Iterator for Slice<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.next >= self.end {
            return None;
        }
        let element = self.items.get(self.next);
        self.next += 1;
        element
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.end.saturating_sub(self.next);
        (n, Some(n))
    }
}

impl<T> ExactSizeIterator for Slice<'_, T> {}

impl<T> FusedIterator for Slice<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(items: &[i32], from: isize, to: Option<isize>) -> Vec<i32> {
        slice(items, from, to).copied().collect()
    }

    const ITEMS: [i32; 5] = [10, 20, 30, 40, 50];

    #[test]
    fn test_slice_negative_from() {
        assert_eq!(collect(&ITEMS, -2, None), vec![40, 50]);
    }

    #[test]
    fn test_slice_negative_to() {
        assert_eq!(collect(&ITEMS, 0, Some(-1)), vec![10, 20, 30, 40]);
    }

    #[test]
    fn test_slice_deeply_negative_from_clamps_to_start() {
        assert_eq!(collect(&[10, 20, 30], -100, None), vec![10, 20, 30]);
        assert_eq!(collect(&ITEMS, -5, None), ITEMS.to_vec());
        assert_eq!(collect(&ITEMS, -6, Some(2)), vec![10, 20]);
    }

    #[test]
    fn test_slice_deeply_negative_to_is_not_clamped() {
        assert_eq!(collect(&ITEMS, 0, Some(-100)), Vec::<i32>::new());
        assert_eq!(collect(&ITEMS, 0, Some(-5)), Vec::<i32>::new());
    }

    #[test]
    fn test_slice_to_clamped_to_len() {
        assert_eq!(collect(&ITEMS, 3, Some(99)), vec![40, 50]);
    }

    #[test]
    fn test_slice_empty_when_bounds_cross() {
        assert_eq!(collect(&ITEMS, 3, Some(3)), Vec::<i32>::new());
        assert_eq!(collect(&ITEMS, 4, Some(1)), Vec::<i32>::new());
        assert_eq!(collect(&ITEMS, 7, None), Vec::<i32>::new());
        assert_eq!(collect(&[], -1, None), Vec::<i32>::new());
    }

    #[test]
    fn test_slice_size_hint() {
        let seq = slice(&ITEMS, 1, Some(-1));
        assert_eq!(seq.len(), 3);
    }
}
