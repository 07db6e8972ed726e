//! Standalone algorithm utilities.
//!
//! These modules share no state or protocol with the suffix tree; each is a
//! self-contained tool:
//!
//! - [`sort`] - comparison sorts (stable merge sort, in-place quicksort)
//! - [`mincut`] - Karger's randomized min-cut estimator
//! - [`aho`] - Aho-Corasick multi-pattern matcher

pub mod aho;
pub mod mincut;
pub mod sort;

pub use aho::*;
pub use mincut::*;
pub use sort::*;
