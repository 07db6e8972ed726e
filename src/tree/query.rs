//! Substring containment queries
//!
//! A probe walk descends from the root, consuming one probe symbol per step.
//! Whenever the walk reaches the end of an edge label it steps onto the node
//! and continues from there. The walk never mutates the tree.

use super::builder::SuffixTree;
use super::types::{NodeId, Symbol, INVALID_NODE, ROOT};

impl SuffixTree {
    /// Whether the probe occurs as a substring of the indexed text,
    /// one symbol per byte
    pub fn contains(&self, probe: &[u8]) -> bool {
        self.walk(probe.iter().map(|&b| b as Symbol))
    }

    /// Whether the probe occurs as a substring, one symbol per `char`
    pub fn contains_str(&self, probe: &str) -> bool {
        self.walk(probe.chars().map(|c| c as Symbol))
    }

    /// Whether the probe occurs as a substring, raw symbols
    pub fn contains_symbols(&self, probe: &[Symbol]) -> bool {
        self.walk(probe.iter().copied())
    }

    /// Follow the probe from the root. Succeeds iff every symbol is consumed
    /// without a mismatch; symbols the tree has never seen fail the walk
    /// rather than erroring.
    fn walk(&self, probe: impl IntoIterator<Item = Symbol>) -> bool {
        let mut node: NodeId = ROOT;
        // node at the far end of the edge currently being consumed
        let mut edge: NodeId = INVALID_NODE;
        let mut length = 0usize;

        for sym in probe {
            if length == 0 {
                match self.node(node).child(sym) {
                    None => return false,
                    Some(child) => {
                        edge = child;
                        length = 1;
                    }
                }
            } else {
                let start = self.node(edge).start;
                if self.text[start + length] != sym {
                    return false;
                }
                length += 1;
            }

            // edge fully consumed: the walk now sits exactly on the node
            if length == self.edge_len(edge) {
                node = edge;
                length = 0;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_basic() {
        let tree = SuffixTree::from_bytes(b"banana");
        assert!(tree.contains(b"ana"));
        assert!(tree.contains(b"nana"));
        assert!(tree.contains(b"banana"));
        assert!(!tree.contains(b"anax"));
        assert!(!tree.contains(b"bananas"));
    }

    #[test]
    fn test_empty_probe_always_present() {
        let tree = SuffixTree::from_bytes(b"abc");
        assert!(tree.contains(b""));
        let empty = SuffixTree::from_bytes(b"");
        assert!(empty.contains(b""));
    }

    #[test]
    fn test_unknown_symbols_are_not_errors() {
        let tree = SuffixTree::from_bytes(b"aabb");
        assert!(!tree.contains(b"xyz"));
        assert!(!tree.contains_symbols(&[0xFFFF]));
    }

    #[test]
    fn test_char_symbols() {
        let tree = SuffixTree::from_text("héllo héll");
        assert!(tree.contains_str("héll"));
        assert!(tree.contains_str("o h"));
        assert!(!tree.contains_str("hello"));
    }

    #[test]
    fn test_query_is_idempotent() {
        let tree = SuffixTree::from_bytes(b"mississi");
        for _ in 0..3 {
            assert!(tree.contains(b"issi"));
            assert!(!tree.contains(b"xyz"));
        }
    }
}
