//! Commonly used imports
//!
//! Use `use lazy_seq::prelude::*;` for quick access to the most common types and functions.

// Core types
pub use crate::{Either, Empty, OrEmpty, Remainder};

// Building
pub use crate::build::{reverse, single, wrap};
pub use crate::{empty, from, is_iterable};

// Transformations
pub use crate::compose::{concat, filter, filter_as, map, slice};

// Inspection
pub use crate::{find, find_as, first, is_empty, some};

// Draining
pub use crate::{async_to_vec, consume, reduce, try_async_to_vec, try_reduce};
pub use crate::{find_last_index, unwrap_array};
