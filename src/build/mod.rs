//! Building sequences from scratch
//!
//! This module provides functions and types for creating new sequences out of
//! bare values and ordered collections.

mod reverse;
mod single;

// Re-export building blocks
pub use reverse::{reverse, Reverse};
pub use single::{single, wrap, Single, Wrap};
