//! # SFX - Suffix-Tree Substring Search Engine
//!
//! SFX builds a suffix tree online (Ukkonen's algorithm, linear time) over a
//! single text and answers substring-containment queries in time proportional
//! to the probe length. Independently built trees compose into cross-text
//! common-substring searches.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`tree`] - Online suffix-tree construction and containment queries
//! - [`search`] - Cross-tree common-substring enumeration
//! - [`output`] - Result formatting for the CLI
//! - [`utils`] - Standalone algorithm utilities (sorts, min-cut, Aho-Corasick)
//!
//! ## Quick Start
//!
//! ```
//! use sfx::tree::SuffixTree;
//! use sfx::search::common_substrings_bytes;
//!
//! // Build a tree and probe it
//! let tree = SuffixTree::from_bytes(b"banana");
//! assert!(tree.contains(b"nana"));
//! assert!(!tree.contains(b"anax"));
//!
//! // Substrings of a probe shared by two texts
//! let a = SuffixTree::from_bytes(b"abcXYZdef");
//! let b = SuffixTree::from_bytes(b"ghiXYZjkl");
//! let shared = common_substrings_bytes(&a, &b, b"XYZ");
//! assert_eq!(shared.len(), 6); // X, XY, Y, XYZ, YZ, Z
//! ```
//!
//! ## Design
//!
//! Construction is strictly sequential: each phase of the algorithm starts
//! from the active point the previous phase left behind. Once sealed, a tree
//! is immutable and safe to query from any number of threads; the cross-tree
//! search exploits that by fanning the probe's end indices out with rayon.

pub mod output;
pub mod search;
pub mod tree;
pub mod utils;
