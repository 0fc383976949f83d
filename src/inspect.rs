//! Inspecting sequences without collecting them.
//!
//! Every function here takes its sequence by value and pulls from a fresh
//! cursor. For a regenerable source such as `&Vec<T>` that leaves the
//! collection untouched. For a single-pass source (an iterator, or `&mut I`)
//! the pulled elements are gone: [`is_empty`] and [`first`] each consume one
//! element, [`some`] and [`find`] consume up to and including the match.

/// Reports whether `sequence` is missing or yields nothing.
///
/// ```rust
/// use lazy_seq::prelude::*;
///
/// assert!(is_empty(Some(empty::<u8>())));
/// assert!(is_empty(None::<Vec<u8>>));
/// assert!(!is_empty(Some(single(0))));
/// ```
pub fn is_empty<S>(sequence: Option<S>) -> bool
where
    S: IntoIterator,
{
    match sequence {
        Some(s) => s.into_iter().next().is_none(),
        None => true,
    }
}

/// Returns the first element, or `None` if the sequence is empty.
pub fn first<S>(sequence: S) -> Option<S::Item>
where
    S: IntoIterator,
{
    sequence.into_iter().next()
}

/// Reports whether `predicate(value, index)` holds for any element.
///
/// Stops pulling at the first match. `index` counts from zero in source order.
pub fn some<S, P>(sequence: S, mut predicate: P) -> bool
where
    S: IntoIterator,
    P: FnMut(&S::Item, usize) -> bool,
{
    for (i, element) in sequence.into_iter().enumerate() {
        if predicate(&element, i) {
            return true;
        }
    }
    false
}

/// Returns the first element for which `predicate(value, index)` holds.
pub fn find<S, P>(sequence: S, mut predicate: P) -> Option<S::Item>
where
    S: IntoIterator,
    P: FnMut(&S::Item, usize) -> bool,
{
    for (i, element) in sequence.into_iter().enumerate() {
        if predicate(&element, i) {
            return Some(element);
        }
    }
    None
}

/// Like [`find`], but the predicate narrows the element as it matches.
///
/// `refine(value, index)` returns `Some(narrowed)` for a match. The traversal
/// and index are the same as [`find`].
///
/// ```rust
/// use lazy_seq::prelude::*;
///
/// let tokens = ["x", "12", "y", "7"];
/// let n = find_as(tokens, |t, _| t.parse::<u32>().ok());
/// assert_eq!(n, Some(12));
/// ```
pub fn find_as<S, R, F>(sequence: S, mut refine: F) -> Option<R>
where
    S: IntoIterator,
    F: FnMut(S::Item, usize) -> Option<R>,
{
    for (i, element) in sequence.into_iter().enumerate() {
        if let Some(narrowed) = refine(element, i) {
            return Some(narrowed);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{empty, single};

    #[test]
    fn test_is_empty() {
        assert!(is_empty(Some(empty::<i32>())));
        assert!(is_empty::<Vec<i32>>(None));
        assert!(!is_empty(Some(single("x"))));
        assert!(!is_empty(Some(&vec![0])));
    }

    #[test]
    fn test_is_empty_consumes_single_pass_source() {
        let mut cursor = vec![1, 2, 3].into_iter();
        assert!(!is_empty(Some(&mut cursor)));
        assert_eq!(cursor.collect::<Vec<_>>(), vec![2, 3]);
    }

    #[test]
    fn test_is_empty_leaves_regenerable_source() {
        let values = vec![1, 2];
        assert!(!is_empty(Some(&values)));
        assert_eq!(first(&values), Some(&1));
    }

    #[test]
    fn test_first() {
        assert_eq!(first(vec!['a', 'b']), Some('a'));
        assert_eq!(first(empty::<char>()), None);
    }

    #[test]
    fn test_first_consumes_single_pass_source() {
        let mut cursor = 10..13;
        assert_eq!(first(&mut cursor), Some(10));
        assert_eq!(first(&mut cursor), Some(11));
    }

    #[test]
    fn test_some_stops_at_first_match() {
        let mut seen = Vec::new();
        let hit = some([3, 8, 9, 10], |v, i| {
            seen.push(i);
            v % 2 == 0
        });
        assert!(hit);
        assert_eq!(seen, vec![0, 1]);
    }

    #[test]
    fn test_some_without_match() {
        assert!(!some(1..5, |v, _| *v > 10));
        assert!(!some(empty::<u8>(), |_, _| true));
    }

    #[test]
    fn test_find_uses_index() {
        let found = find(["a", "b", "c", "d"], |_, i| i == 2);
        assert_eq!(found, Some("c"));
        assert_eq!(find(["a"], |v, _| *v == "z"), None);
    }

    #[test]
    fn test_find_as_narrows() {
        let values: Vec<Result<u8, &str>> = vec![Err("bad"), Ok(4), Ok(5)];
        let ok = find_as(values, |v, _| v.ok());
        assert_eq!(ok, Some(4));
    }
}
