//! Transforming sequences lazily
//!
//! Every function here only builds an adapter. Nothing is pulled from the
//! source, and no callback runs, until the adapter itself is iterated.

mod concat;
mod map;
mod slice;

// Re-export composition operations
pub use concat::{concat, Concat};
pub use map::{filter, filter_as, map, Filter, FilterAs, Map};
pub use slice::{slice, Slice};
