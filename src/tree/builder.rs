//! Online suffix-tree construction (Ukkonen's algorithm)
//!
//! The builder consumes the text one symbol per phase. Each phase advances
//! the shared end cursor (extending every open leaf at once), then performs
//! extensions until every suffix ending at the current position is present:
//!
//! - symbol absent at a node: attach a new open leaf (rule 1)
//! - symbol absent mid-edge: split the edge, attach a leaf (rule 2)
//! - symbol already present: record it implicitly and end the phase (rule 3)
//!
//! Internal nodes created by splits are chained together through their
//! suffix links within the phase, and the skip/count walk-down keeps each
//! extension amortized O(1), for O(n) construction overall.

use super::types::*;
use memchr::memchr;

/// Incremental suffix-tree builder. Feed symbols with [`push`](Self::push),
/// then seal the tree with [`finish`](Self::finish); the terminator phase
/// runs there. Construction is strictly sequential (each phase starts from
/// the active point the previous phase left behind).
pub struct TreeBuilder {
    text: Vec<Symbol>,
    nodes: Vec<Node>,
    terminator: Symbol,
    /// Global end cursor; every OPEN_END edge reads this
    end_cursor: TextPos,
    active_node: NodeId,
    /// Text position of the first symbol on the active edge
    active_edge: TextPos,
    active_length: usize,
    /// Suffixes ending at the current phase that are not yet explicit
    remaining: usize,
}

impl TreeBuilder {
    /// Create a builder using the default out-of-band [`TERMINATOR`]
    pub fn new() -> Self {
        Self::with_terminator(TERMINATOR)
    }

    /// Create a builder with a caller-chosen terminator symbol
    pub fn with_terminator(terminator: Symbol) -> Self {
        let mut root = Node::new(0, 0);
        root.suffix_link = ROOT;
        Self {
            text: Vec::new(),
            nodes: vec![root],
            terminator,
            end_cursor: 0,
            active_node: ROOT,
            active_edge: 0,
            active_length: 0,
            remaining: 0,
        }
    }

    /// Reserve buffer capacity up front when the input length is known
    pub fn with_capacity(len: usize) -> Self {
        let mut builder = Self::new();
        builder.text.reserve(len + 1);
        // a tree over n symbols has at most 2n nodes
        builder.nodes.reserve(2 * len + 2);
        builder
    }

    /// Number of symbols consumed so far (terminator not included)
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Run one phase over the next symbol of the text.
    ///
    /// Rejects the reserved terminator symbol; everything else is a valid
    /// payload symbol.
    pub fn push(&mut self, sym: Symbol) -> Result<(), ReservedSymbolConflict> {
        if sym == self.terminator {
            return Err(ReservedSymbolConflict {
                position: self.text.len(),
                symbol: sym,
            });
        }
        self.phase(sym);
        Ok(())
    }

    /// Run the terminator phase and seal the tree.
    ///
    /// After this phase every suffix, including the full text, ends at its
    /// own leaf (the terminator is unique, so no suffix can remain implicit).
    pub fn finish(mut self) -> SuffixTree {
        let terminator = self.terminator;
        self.phase(terminator);
        debug_assert_eq!(self.remaining, 0, "terminator phase left implicit suffixes");
        SuffixTree {
            text: self.text,
            nodes: self.nodes,
            end_cursor: self.end_cursor,
            terminator,
        }
    }

    fn phase(&mut self, sym: Symbol) {
        let pos = self.text.len();
        self.text.push(sym);
        // extends every open leaf in O(1)
        self.end_cursor = pos;
        self.remaining += 1;
        let mut last_new_node = INVALID_NODE;

        while self.remaining > 0 {
            if self.active_length == 0 {
                self.active_edge = pos;
            }
            let first = self.text[self.active_edge];
            match self.nodes[self.active_node as usize].child(first) {
                None => {
                    // the active point sits on a node and the symbol has no
                    // edge there: new open leaf (rule 1)
                    debug_assert_eq!(
                        self.active_length, 0,
                        "active edge has no child mid-walk"
                    );
                    let leaf = self.new_node(pos, OPEN_END);
                    self.nodes[self.active_node as usize].children.insert(sym, leaf);
                    if last_new_node != INVALID_NODE {
                        self.nodes[last_new_node as usize].suffix_link = self.active_node;
                        last_new_node = INVALID_NODE;
                    }
                }
                Some(next) => {
                    // skip/count: hop whole edges until the active length
                    // fits within the edge now addressed
                    let len = self.edge_len(next);
                    if self.active_length >= len {
                        self.active_edge += len;
                        self.active_length -= len;
                        self.active_node = next;
                        continue;
                    }

                    let next_start = self.nodes[next as usize].start;
                    if self.text[next_start + self.active_length] == sym {
                        // rule 3: the suffix is already present, and so are
                        // all shorter ones — the phase ends here
                        if last_new_node != INVALID_NODE {
                            self.nodes[last_new_node as usize].suffix_link = self.active_node;
                        }
                        self.active_length += 1;
                        break;
                    }

                    // rule 2: split the edge at the active length, then hang
                    // a new leaf for the current symbol off the split node
                    let split = self.new_node(next_start, next_start + self.active_length - 1);
                    self.nodes[self.active_node as usize].children.insert(first, split);
                    let leaf = self.new_node(pos, OPEN_END);
                    self.nodes[split as usize].children.insert(sym, leaf);
                    self.nodes[next as usize].start += self.active_length;
                    let next_first = self.text[self.nodes[next as usize].start];
                    self.nodes[split as usize].children.insert(next_first, next);
                    if last_new_node != INVALID_NODE {
                        self.nodes[last_new_node as usize].suffix_link = split;
                    }
                    last_new_node = split;
                }
            }

            self.remaining -= 1;
            if self.active_node == ROOT && self.active_length > 0 {
                // from the root: drop the first symbol of the pending suffix
                self.active_length -= 1;
                self.active_edge = pos + 1 - self.remaining;
            } else if self.active_node != ROOT {
                // elsewhere: the suffix link points at the same string minus
                // its first symbol
                self.active_node = self.nodes[self.active_node as usize].suffix_link;
            }
        }
    }

    fn new_node(&mut self, start: TextPos, end: TextPos) -> NodeId {
        self.nodes.push(Node::new(start, end));
        (self.nodes.len() - 1) as NodeId
    }

    fn edge_len(&self, id: NodeId) -> usize {
        let node = &self.nodes[id as usize];
        let end = if node.end == OPEN_END {
            self.end_cursor
        } else {
            node.end
        };
        end - node.start + 1
    }
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// An immutable suffix tree over one text plus a unique terminator.
///
/// Built once via [`TreeBuilder`] or the `from_*` constructors; queries
/// never mutate it, so a built tree can be shared across threads freely.
#[derive(Debug, Clone)]
pub struct SuffixTree {
    pub(crate) text: Vec<Symbol>,
    pub(crate) nodes: Vec<Node>,
    /// Final value of the global end cursor (last index of the buffer)
    pub(crate) end_cursor: TextPos,
    pub(crate) terminator: Symbol,
}

impl SuffixTree {
    /// Build a tree from a raw symbol sequence with the default terminator.
    ///
    /// Fails with [`ReservedSymbolConflict`] before any node is created if
    /// the input already contains [`TERMINATOR`].
    pub fn build(symbols: Vec<Symbol>) -> Result<Self, ReservedSymbolConflict> {
        Self::build_with_terminator(symbols, TERMINATOR)
    }

    /// Build a tree from a raw symbol sequence with a caller-chosen
    /// terminator, validating the whole input up front
    pub fn build_with_terminator(
        symbols: Vec<Symbol>,
        terminator: Symbol,
    ) -> Result<Self, ReservedSymbolConflict> {
        if let Some(position) = symbols.iter().position(|&s| s == terminator) {
            return Err(ReservedSymbolConflict {
                position,
                symbol: terminator,
            });
        }
        let mut builder = TreeBuilder::with_terminator(terminator);
        builder.text.reserve(symbols.len() + 1);
        builder.nodes.reserve(2 * symbols.len() + 2);
        for sym in symbols {
            builder.phase(sym);
        }
        Ok(builder.finish())
    }

    /// Build a tree over bytes, one symbol per byte. The out-of-band
    /// terminator cannot collide with byte input, so this never fails.
    pub fn from_bytes(text: &[u8]) -> Self {
        let mut builder = TreeBuilder::with_capacity(text.len());
        for &b in text {
            builder.phase(b as Symbol);
        }
        builder.finish()
    }

    /// Build a tree over bytes with an in-band terminator byte (the classic
    /// `$` convention). Fails if the text already contains that byte.
    pub fn from_bytes_with_terminator(
        text: &[u8],
        terminator: u8,
    ) -> Result<Self, ReservedSymbolConflict> {
        if let Some(position) = memchr(terminator, text) {
            return Err(ReservedSymbolConflict {
                position,
                symbol: terminator as Symbol,
            });
        }
        let mut builder = TreeBuilder::with_terminator(terminator as Symbol);
        builder.text.reserve(text.len() + 1);
        builder.nodes.reserve(2 * text.len() + 2);
        for &b in text {
            builder.phase(b as Symbol);
        }
        Ok(builder.finish())
    }

    /// Build a tree over a string, one symbol per `char`. Never fails: the
    /// out-of-band terminator is not a valid scalar value.
    pub fn from_text(text: &str) -> Self {
        let mut builder = TreeBuilder::with_capacity(text.len());
        for c in text.chars() {
            builder.phase(c as Symbol);
        }
        builder.finish()
    }

    /// The symbol buffer, terminator included
    pub fn text(&self) -> &[Symbol] {
        &self.text
    }

    /// Number of payload symbols (terminator not counted)
    pub fn text_len(&self) -> usize {
        self.text.len() - 1
    }

    /// The terminator symbol this tree was sealed with
    pub fn terminator(&self) -> Symbol {
        self.terminator
    }

    /// Total nodes in the arena, root included
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id as usize]
    }

    /// Resolved inclusive end of a node's incoming edge
    pub(crate) fn edge_end(&self, node: &Node) -> TextPos {
        if node.end == OPEN_END {
            self.end_cursor
        } else {
            node.end
        }
    }

    pub(crate) fn edge_len(&self, id: NodeId) -> usize {
        let node = self.node(id);
        self.edge_end(node) - node.start + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_simple() {
        let tree = SuffixTree::from_bytes(b"banana");
        assert_eq!(tree.text_len(), 6);
        assert_eq!(tree.text().len(), 7); // "banana" + terminator
        assert_eq!(*tree.text().last().unwrap(), TERMINATOR);
    }

    #[test]
    fn test_empty_text() {
        // degenerate but valid: exactly one leaf for the terminator
        let tree = SuffixTree::from_bytes(b"");
        assert_eq!(tree.text_len(), 0);
        assert_eq!(tree.leaf_count(), 1);
    }

    #[test]
    fn test_single_symbol() {
        let tree = SuffixTree::from_bytes(b"a");
        assert_eq!(tree.leaf_count(), 2);
        assert!(tree.contains(b"a"));
        assert!(!tree.contains(b"b"));
    }

    #[test]
    fn test_incremental_push() {
        let mut builder = TreeBuilder::new();
        for &b in b"banana" {
            builder.push(b as Symbol).unwrap();
        }
        assert_eq!(builder.len(), 6);
        let tree = builder.finish();
        assert!(tree.contains(b"nana"));
    }

    #[test]
    fn test_push_rejects_terminator() {
        let mut builder = TreeBuilder::with_terminator(b'$' as Symbol);
        builder.push(b'a' as Symbol).unwrap();
        let err = builder.push(b'$' as Symbol).unwrap_err();
        assert_eq!(err.position, 1);
        assert_eq!(err.symbol, b'$' as Symbol);
    }

    #[test]
    fn test_build_validates_before_any_node() {
        let symbols: Vec<Symbol> = vec![1, 2, TERMINATOR, 3];
        let err = SuffixTree::build(symbols).unwrap_err();
        assert_eq!(err.position, 2);
    }

    #[test]
    fn test_byte_terminator_conflict() {
        let err = SuffixTree::from_bytes_with_terminator(b"ab$cd", b'$').unwrap_err();
        assert_eq!(err.position, 2);

        let tree = SuffixTree::from_bytes_with_terminator(b"abcd", b'$').unwrap();
        assert!(tree.contains(b"bcd"));
    }

    #[test]
    fn test_node_count_bound() {
        // at most 2n+1 nodes for n buffer symbols
        for text in [&b"aaaaaaaa"[..], b"abababab", b"mississi", b"abcdefgh"] {
            let tree = SuffixTree::from_bytes(text);
            assert!(tree.node_count() <= 2 * tree.text().len() + 1);
        }
    }
}
