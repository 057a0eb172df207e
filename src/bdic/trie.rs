//! Trie Builder: turns a sorted word list into a byte-wise prefix tree.
//!
//! Chains that lead to a single word are not expanded into one node per byte;
//! the remaining bytes are kept on the leaf as its suffix instead.

use itertools::Itertools;
use smallvec::SmallVec;
use tracing::debug;

use super::error::BuildError;
use super::format::ZERO_EDGE;

/// A node of the raw, not yet sized trie.
///
/// Children are ordered by strictly increasing edge byte. A node with no
/// children terminates exactly one word.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TrieNode {
    edge: u8,
    children: Vec<TrieNode>,
    suffix: SmallVec<[u8; 16]>,
}

impl TrieNode {
    /// The byte labeling the edge from this node's parent.
    ///
    /// [`ZERO_EDGE`] for the root and for terminators of words that end at
    /// the parent.
    #[inline]
    pub fn edge(&self) -> u8 {
        self.edge
    }

    /// Children in ascending edge byte order.
    #[inline]
    pub fn children(&self) -> &[TrieNode] {
        &self.children
    }

    /// Bytes of a collapsed single-word chain, empty for every other node.
    #[inline]
    pub fn suffix(&self) -> &[u8] {
        &self.suffix
    }

    /// Returns true if this node terminates a word.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns the child labeled `edge`.
    pub fn get(&self, edge: u8) -> Option<&TrieNode> {
        self.children
            .binary_search_by_key(&edge, |child| child.edge)
            .ok()
            .map(|i| &self.children[i])
    }

    /// Number of leaves, which equals the number of words in the subtree.
    pub fn leaf_count(&self) -> usize {
        if self.is_leaf() {
            1
        } else {
            self.children.iter().map(TrieNode::leaf_count).sum()
        }
    }

    /// Number of nodes in the subtree, including this one.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(TrieNode::node_count).sum::<usize>()
    }

    pub(crate) fn into_parts(self) -> (u8, Vec<TrieNode>, SmallVec<[u8; 16]>) {
        (self.edge, self.children, self.suffix)
    }

    /// Builds this node from `words[begin..end]`, all of which share their
    /// first `depth - 1` bytes, and returns the index of the first word not
    /// consumed.
    ///
    /// `depth` is 0 for the root, which takes the whole range as one group.
    /// Otherwise the node's edge byte is byte `depth - 1` of `words[begin]`.
    ///
    /// # Panics
    ///
    /// Panics if `begin >= end`. Correctness relies on `words` being sorted
    /// and free of duplicates, see [`prepare_words`].
    pub fn build(&mut self, words: &[&[u8]], begin: usize, end: usize, depth: usize) -> usize {
        let word = words[begin];
        if word.len() < depth {
            // The shared prefix already spells this whole word.
            self.edge = ZERO_EDGE;
            return begin + 1;
        }

        let match_count = if depth == 0 {
            self.edge = ZERO_EDGE;
            end - begin
        } else {
            let edge = word[depth - 1];
            self.edge = edge;
            words[begin..end]
                .iter()
                .take_while(|w| w.get(depth - 1) == Some(&edge))
                .count()
        };

        if match_count == 1 {
            self.suffix = SmallVec::from_slice(&word[depth..]);
            return begin + 1;
        }

        let group_end = begin + match_count;
        let mut next = begin;
        while next < group_end {
            let mut child = TrieNode::default();
            next = child.build(words, next, group_end, depth + 1);
            self.children.push(child);
        }
        group_end
    }
}

/// Validates a word list and returns it as byte slices with exact
/// duplicates collapsed.
///
/// # Errors
///
/// - [`BuildError::Empty`] if there are no words.
/// - [`BuildError::EmptyWord`] if any word has no bytes.
/// - [`BuildError::NulByte`] if any word contains a zero byte.
/// - [`BuildError::Order`] if the words are not sorted by byte value.
pub fn prepare_words<W: AsRef<[u8]>>(words: &[W]) -> Result<Vec<&[u8]>, BuildError> {
    if words.is_empty() {
        return Err(BuildError::Empty);
    }
    for (index, word) in words.iter().map(AsRef::as_ref).enumerate() {
        if word.is_empty() {
            return Err(BuildError::EmptyWord { index });
        }
        if word.contains(&0) {
            return Err(BuildError::NulByte {
                word: word.to_vec(),
            });
        }
    }
    if let Some((previous, current)) = words
        .iter()
        .map(AsRef::as_ref)
        .tuple_windows()
        .find(|(previous, current)| previous > current)
    {
        return Err(BuildError::Order {
            previous: previous.to_vec(),
            current: current.to_vec(),
        });
    }
    Ok(words.iter().map(AsRef::as_ref).dedup().collect())
}

/// Builds the trie for a sorted word list.
///
/// # Examples
///
/// ```
/// use libbdic::bdic::trie::build_trie;
///
/// let root = build_trie(&["car", "cat", "dog"]).unwrap();
/// let c = root.get(b'c').unwrap();
/// assert_eq!(c.get(b'a').unwrap().children().len(), 2);
/// assert_eq!(root.get(b'd').unwrap().suffix(), b"og");
/// ```
///
/// # Errors
///
/// Returns a [`BuildError`] if the words fail [`prepare_words`].
pub fn build_trie<W: AsRef<[u8]>>(words: &[W]) -> Result<TrieNode, BuildError> {
    let words = prepare_words(words)?;
    let mut root = TrieNode::default();
    let consumed = root.build(&words, 0, words.len(), 0);
    debug_assert_eq!(consumed, words.len());
    debug!(
        words = words.len(),
        nodes = root.node_count(),
        "built word trie"
    );
    Ok(root)
}
