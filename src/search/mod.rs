//! Cross-tree common-substring search
//!
//! Given two independently built trees and a probe text, report every
//! substring of the probe present in both trees. This is a usage pattern of
//! the containment walk, not a new algorithm: all O(|P|^2) substrings are
//! probed, one query pair each. Queries are read-only, so the outer loop
//! fans out across threads and results are flattened back in order.

use crate::tree::{render_symbols, SuffixTree, Symbol};
use rayon::prelude::*;
use serde::Serialize;

/// One substring of the probe found in both trees. `start..=end` is the
/// `(j, i)` index pair into the probe; entries are reported per pair, not
/// deduplicated by value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommonSubstring {
    /// Start index `j` in the probe
    pub start: usize,
    /// End index `i` in the probe (inclusive)
    pub end: usize,
    /// The matched symbols, `probe[j..=i]`
    pub symbols: Vec<Symbol>,
}

impl CommonSubstring {
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Human-readable rendering of the matched symbols
    pub fn rendered(&self) -> String {
        render_symbols(&self.symbols)
    }
}

/// Enumerate all substrings of `probe` present in both trees, ordered by
/// increasing end index, then increasing start index.
pub fn common_substrings(
    a: &SuffixTree,
    b: &SuffixTree,
    probe: &[Symbol],
) -> Vec<CommonSubstring> {
    // each end index is an independent batch of read-only queries
    let per_end: Vec<Vec<CommonSubstring>> = (0..probe.len())
        .into_par_iter()
        .map(|i| {
            let mut found = Vec::new();
            for j in 0..=i {
                let candidate = &probe[j..=i];
                if a.contains_symbols(candidate) && b.contains_symbols(candidate) {
                    found.push(CommonSubstring {
                        start: j,
                        end: i,
                        symbols: candidate.to_vec(),
                    });
                }
            }
            found
        })
        .collect();

    per_end.into_iter().flatten().collect()
}

/// Byte-domain convenience wrapper around [`common_substrings`]
pub fn common_substrings_bytes(
    a: &SuffixTree,
    b: &SuffixTree,
    probe: &[u8],
) -> Vec<CommonSubstring> {
    let symbols: Vec<Symbol> = probe.iter().map(|&b| b as Symbol).collect();
    common_substrings(a, b, &symbols)
}

/// Intersect three texts: build trees over the two longest and probe with
/// the shortest (ties broken by input order). Returns the probe's index in
/// `texts` along with the matches, so callers can attribute the indices.
pub fn common_substrings_of_three(texts: [&[u8]; 3]) -> (usize, Vec<CommonSubstring>) {
    let mut order = [0usize, 1, 2];
    order.sort_by_key(|&i| (std::cmp::Reverse(texts[i].len()), i));

    let tree_a = SuffixTree::from_bytes(texts[order[0]]);
    let tree_b = SuffixTree::from_bytes(texts[order[1]]);
    let probe_idx = order[2];

    let matches = common_substrings_bytes(&tree_a, &tree_b, texts[probe_idx]);
    (probe_idx, matches)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(matches: &[CommonSubstring]) -> Vec<String> {
        matches.iter().map(|m| m.rendered()).collect()
    }

    #[test]
    fn test_probe_fully_shared() {
        let a = SuffixTree::from_bytes(b"abcXYZdef");
        let b = SuffixTree::from_bytes(b"ghiXYZjkl");
        let matches = common_substrings_bytes(&a, &b, b"XYZ");

        let pairs: Vec<(usize, usize)> = matches.iter().map(|m| (m.start, m.end)).collect();
        assert_eq!(pairs, vec![(0, 0), (0, 1), (1, 1), (0, 2), (1, 2), (2, 2)]);
        assert_eq!(rendered(&matches), vec!["X", "XY", "Y", "XYZ", "YZ", "Z"]);
    }

    #[test]
    fn test_order_and_duplicates() {
        // "aa" probe: "a" matches at two (j,i) pairs and is reported twice
        let a = SuffixTree::from_bytes(b"cat");
        let b = SuffixTree::from_bytes(b"mat");
        let matches = common_substrings_bytes(&a, &b, b"aa");
        let pairs: Vec<(usize, usize)> = matches.iter().map(|m| (m.start, m.end)).collect();
        assert_eq!(pairs, vec![(0, 0), (1, 1)]);
    }

    #[test]
    fn test_no_overlap() {
        let a = SuffixTree::from_bytes(b"abc");
        let b = SuffixTree::from_bytes(b"def");
        assert!(common_substrings_bytes(&a, &b, b"xyz").is_empty());
    }

    #[test]
    fn test_of_three_picks_shortest_probe() {
        let (probe_idx, matches) =
            common_substrings_of_three([b"aladdin", b"adding", b"dinner"]);
        assert_eq!(probe_idx, 2); // "dinner": shortest after the length tie-break
        assert_eq!(
            rendered(&matches),
            vec!["d", "di", "i", "din", "in", "n", "n"]
        );
    }
}
