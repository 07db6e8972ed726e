//! Diagnostic traversals
//!
//! Breadth-first edge listing, leaf counting, and shape statistics. These are
//! debugging aids, not part of the correctness contract. Traversals are
//! iterative: a skewed tree over a low-diversity alphabet can be as deep as
//! the text is long, so recursion is off the table.

use super::builder::SuffixTree;
use super::types::{render_symbols, EdgeInfo, NodeId, TreeStats, ROOT};
use std::collections::VecDeque;

impl SuffixTree {
    /// Every edge of the tree in breadth-first order, children visited in
    /// symbol order so the listing is deterministic
    pub fn edges(&self) -> Vec<EdgeInfo> {
        let mut out = Vec::with_capacity(self.node_count().saturating_sub(1));
        let mut queue: VecDeque<(NodeId, String)> = VecDeque::new();
        queue.push_back((ROOT, String::new()));

        while let Some((id, parent_label)) = queue.pop_front() {
            for child in self.sorted_children(id) {
                let node = self.node(child);
                let end = self.edge_end(node);
                let label = render_symbols(&self.text[node.start..=end]);
                queue.push_back((child, label.clone()));
                out.push(EdgeInfo {
                    start: node.start,
                    end,
                    label,
                    parent: parent_label.clone(),
                });
            }
        }
        out
    }

    /// Number of leaves; with a unique terminator this equals text length + 1
    pub fn leaf_count(&self) -> usize {
        let mut count = 0;
        let mut stack: Vec<NodeId> = self.node(ROOT).children.values().copied().collect();
        while let Some(id) = stack.pop() {
            let node = self.node(id);
            if node.is_leaf() {
                count += 1;
            } else {
                stack.extend(node.children.values().copied());
            }
        }
        count
    }

    /// Shape summary of the built tree
    pub fn stats(&self) -> TreeStats {
        let leaf_count = self.leaf_count();
        let node_count = self.node_count();
        TreeStats {
            node_count,
            leaf_count,
            internal_count: node_count - leaf_count - 1,
            text_len: self.text.len(),
        }
    }

    fn sorted_children(&self, id: NodeId) -> Vec<NodeId> {
        let node = self.node(id);
        let mut children: Vec<_> = node.children.iter().map(|(&s, &c)| (s, c)).collect();
        children.sort_unstable_by_key(|&(s, _)| s);
        children.into_iter().map(|(_, c)| c).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_count_banana() {
        let tree = SuffixTree::from_bytes(b"banana");
        assert_eq!(tree.leaf_count(), 7);
    }

    #[test]
    fn test_leaf_count_low_diversity() {
        // skewed trees are where divergent rewrites historically disagreed
        for (text, expected) in [
            (&b"aaaaa"[..], 6),
            (b"ababab", 7),
            (b"mississiississi", 16),
        ] {
            let tree = SuffixTree::from_bytes(text);
            assert_eq!(tree.leaf_count(), expected, "text {:?}", text);
        }
    }

    #[test]
    fn test_stats_consistency() {
        let tree = SuffixTree::from_bytes(b"abcabxabcd");
        let stats = tree.stats();
        assert_eq!(stats.text_len, 11);
        assert_eq!(stats.leaf_count, 11);
        assert_eq!(
            stats.node_count,
            stats.leaf_count + stats.internal_count + 1
        );
    }

    #[test]
    fn test_edges_listing() {
        let tree = SuffixTree::from_bytes(b"ab");
        let edges = tree.edges();
        // root fans out to "ab$", "b$", "$"
        assert_eq!(edges.len(), 3);
        assert!(edges.iter().all(|e| e.parent.is_empty()));
        let labels: Vec<&str> = edges.iter().map(|e| e.label.as_str()).collect();
        assert!(labels.contains(&"ab$"));
        assert!(labels.contains(&"b$"));
        assert!(labels.contains(&"$"));
    }

    #[test]
    fn test_edges_parent_labels() {
        let tree = SuffixTree::from_bytes(b"banana");
        let edges = tree.edges();
        // "na" repeats, so an internal "na" node exists with children
        assert!(edges
            .iter()
            .any(|e| e.parent == "na" && (e.label.starts_with("na") || e.label == "$")));
    }
}
