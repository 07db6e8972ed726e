//! Aho-Corasick multi-pattern matcher
//!
//! A goto trie over the pattern set with BFS-threaded suffix links (longest
//! proper suffix that is also a trie path) and output links (nearest
//! suffix-link ancestor that ends a pattern). One pass over the text then
//! reports every occurrence of every pattern, overlaps included.
//!
//! Like the suffix tree, nodes live in an arena and reference each other by
//! index. Construction is one shot; there is no incremental pattern insert.

use ahash::AHashMap;
use std::collections::VecDeque;

const ROOT: usize = 0;

/// One reported occurrence. `start..end` is half-open into the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    /// Index of the matched pattern in the input set
    pub pattern: usize,
    pub start: usize,
    pub end: usize,
}

struct TrieNode {
    children: AHashMap<u8, usize>,
    suffix_link: usize,
    /// Nearest node up the suffix-link chain that ends a pattern
    output_link: Option<usize>,
    /// Pattern index ending at this node, if any (duplicates: last one wins)
    pattern: Option<usize>,
}

impl TrieNode {
    fn new() -> Self {
        Self {
            children: AHashMap::new(),
            suffix_link: ROOT,
            output_link: None,
            pattern: None,
        }
    }
}

/// Multi-pattern matcher over byte strings
pub struct AhoCorasick {
    nodes: Vec<TrieNode>,
    pattern_lens: Vec<usize>,
}

impl AhoCorasick {
    /// Build the matcher over a pattern set. Empty patterns never match.
    pub fn new<I, P>(patterns: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<[u8]>,
    {
        let mut matcher = Self {
            nodes: vec![TrieNode::new()],
            pattern_lens: Vec::new(),
        };
        for pattern in patterns {
            let pattern = pattern.as_ref();
            let idx = matcher.pattern_lens.len();
            matcher.pattern_lens.push(pattern.len());
            if !pattern.is_empty() {
                matcher.insert(pattern, idx);
            }
        }
        matcher.thread_links();
        matcher
    }

    /// Number of patterns the matcher was built over
    pub fn pattern_count(&self) -> usize {
        self.pattern_lens.len()
    }

    /// All occurrences of all patterns in `text`, in increasing end order
    pub fn find(&self, text: &[u8]) -> Vec<Match> {
        let mut out = Vec::new();
        let mut state = ROOT;
        for (i, &b) in text.iter().enumerate() {
            state = self.step(state, b);

            if let Some(pattern) = self.nodes[state].pattern {
                out.push(self.match_at(pattern, i));
            }
            // shorter patterns ending here hang off the output-link chain
            let mut link = self.nodes[state].output_link;
            while let Some(node) = link {
                let pattern = self.nodes[node]
                    .pattern
                    .expect("output links only target pattern nodes");
                out.push(self.match_at(pattern, i));
                link = self.nodes[node].output_link;
            }
        }
        out
    }

    /// Occurrence count per pattern, indexed like the input set
    pub fn count_matches(&self, text: &[u8]) -> Vec<usize> {
        let mut counts = vec![0; self.pattern_lens.len()];
        for m in self.find(text) {
            counts[m.pattern] += 1;
        }
        counts
    }

    fn insert(&mut self, pattern: &[u8], idx: usize) {
        let mut node = ROOT;
        for &b in pattern {
            node = match self.nodes[node].children.get(&b) {
                Some(&child) => child,
                None => {
                    self.nodes.push(TrieNode::new());
                    let child = self.nodes.len() - 1;
                    self.nodes[node].children.insert(b, child);
                    child
                }
            };
        }
        self.nodes[node].pattern = Some(idx);
    }

    /// BFS pass wiring suffix and output links; parents are always threaded
    /// before their children
    fn thread_links(&mut self) {
        let mut queue: VecDeque<usize> = VecDeque::new();
        let root_children: Vec<usize> = self.nodes[ROOT].children.values().copied().collect();
        for child in root_children {
            self.nodes[child].suffix_link = ROOT;
            queue.push_back(child);
        }

        while let Some(node) = queue.pop_front() {
            let suffix = self.nodes[node].suffix_link;
            self.nodes[node].output_link = if self.nodes[suffix].pattern.is_some() {
                Some(suffix)
            } else {
                self.nodes[suffix].output_link
            };

            let children: Vec<(u8, usize)> = self.nodes[node]
                .children
                .iter()
                .map(|(&b, &c)| (b, c))
                .collect();
            for (b, child) in children {
                let mut target = self.nodes[node].suffix_link;
                loop {
                    if let Some(&next) = self.nodes[target].children.get(&b) {
                        self.nodes[child].suffix_link = next;
                        break;
                    }
                    if target == ROOT {
                        self.nodes[child].suffix_link = ROOT;
                        break;
                    }
                    target = self.nodes[target].suffix_link;
                }
                queue.push_back(child);
            }
        }
    }

    fn step(&self, mut state: usize, b: u8) -> usize {
        loop {
            if let Some(&next) = self.nodes[state].children.get(&b) {
                return next;
            }
            if state == ROOT {
                return ROOT;
            }
            state = self.nodes[state].suffix_link;
        }
    }

    fn match_at(&self, pattern: usize, end_inclusive: usize) -> Match {
        let len = self.pattern_lens[pattern];
        Match {
            pattern,
            start: end_inclusive + 1 - len,
            end: end_inclusive + 1,
        }
    }
}
