//! # Lazy Seq: Lazy Sequence Combinators
//!
//! Compose transformations over anything that can be iterated, without
//! building intermediate collections.
//!
//! ## Sequences
//!
//! A *sequence* is any [`IntoIterator`]; its *cursor* is the [`Iterator`] it
//! produces. Two kinds matter:
//!
//! - **Regenerable** sequences, such as `&Vec<T>` or `&[T]`, start a fresh
//!   cursor every time they are iterated.
//! - **Single-pass** sequences, such as iterators or `&mut I`, carry their
//!   position with them. Inspecting one (with [`is_empty`], [`first`], ...)
//!   consumes what was inspected.
//!
//! Where a value may be a bare element or a sequence, it is passed as an
//! [`Either`]: `Left` for the element, `Right` for the sequence.
//!
//! ## Example
//!
//! ```
//! use lazy_seq::prelude::*;
//!
//! let doubled = map([1, 2, 3, 4], |x, _| x * 2);   // 2, 4, 6, 8
//! let large = filter(doubled, |x, _| *x > 4);     // 6, 8
//! assert_eq!(reduce(large, |a, b| a + b, 0), 14);
//! ```
//!
//! ## Common Functions
//!
//! **Building:**
//! - [`empty()`] - The canonical empty sequence
//! - [`single(x)`](single) - Yield `x` once
//! - [`wrap(x)`](wrap) - Pass a sequence through, or wrap an element
//! - [`from(x)`](from()) - Treat `None` as empty
//! - [`reverse(items)`](reverse) - Walk a slice back to front
//!
//! **Transforming (lazy):**
//! - [`map`], [`filter`], [`filter_as`], [`concat`], [`slice`]
//!
//! **Inspecting and draining:**
//! - [`is_empty`], [`first`], [`some`], [`find`], [`find_as`]
//! - [`reduce`], [`try_reduce`], [`consume`]
//! - [`async_to_vec`], [`try_async_to_vec`] - Drain a [`Stream`](futures::Stream)
//! - [`unwrap_array`], [`find_last_index`]

pub mod build;
pub mod compose;
mod drive;
mod inspect;
mod ordered;
pub mod prelude;
mod sequence;

pub use build::*;
pub use compose::*;
pub use drive::*;
pub use either::Either;
pub use inspect::*;
pub use ordered::*;
pub use sequence::*;
