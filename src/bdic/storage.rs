//! Storage Strategy Selector: picks the most compact encoding for every node.
//!
//! Sizing is bottom-up. A node's encoding depends on how many children it has
//! and how many bytes those children occupy, so the whole subtree must be
//! sized before its root can be. The result is a [`SizedNode`] tree, the only
//! form the serializer accepts.

use smallvec::SmallVec;
use tracing::{debug, trace};

use super::format::{LIST_HEADER_SIZE, LIST_THRESHOLD, LOOKUP_HEADER_SIZE, ZERO_EDGE};
use super::trie::TrieNode;

/// Id byte plus affix data byte of every leaf.
const LEAF_HEADER_SIZE: usize = 2;

/// Largest children region a list with 1-byte offsets can address.
const LIST8_MAX_CHILD_SIZE: usize = 0xFF;
/// Largest children region a list with 2-byte offsets can address.
const LIST16_MAX_CHILD_SIZE: usize = 0xFFFF;
/// Lookup nodes up to this total size use 2-byte offsets.
const LOOKUP16_SIZE_LIMIT: usize = 0xFFFF;

/// Encoding variant of a trie node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StorageKind {
    /// Leaf without suffix.
    Leaf,
    /// Leaf followed by a zero-terminated suffix.
    LeafWithSuffix,
    /// Up to 15 children, `(edge, u8 offset)` entries.
    List8,
    /// Up to 15 children, `(edge, u16 offset)` entries.
    List16,
    /// Range-indexed table of u16 offsets relative to the node.
    Lookup16,
    /// Range-indexed table of u32 offsets from the start of the trie.
    Lookup32,
}

impl StorageKind {
    /// Bytes per child table entry, zero for leaves.
    pub fn entry_width(self) -> usize {
        match self {
            StorageKind::Leaf | StorageKind::LeafWithSuffix => 0,
            StorageKind::List8 | StorageKind::Lookup16 => 2,
            StorageKind::List16 => 3,
            StorageKind::Lookup32 => 4,
        }
    }

    /// Bytes of the offset field within a table entry, zero for leaves.
    pub fn offset_width(self) -> usize {
        match self {
            StorageKind::Leaf | StorageKind::LeafWithSuffix => 0,
            StorageKind::List8 => 1,
            StorageKind::List16 | StorageKind::Lookup16 => 2,
            StorageKind::Lookup32 => 4,
        }
    }

    /// Returns true for the two leaf variants.
    pub fn is_leaf(self) -> bool {
        matches!(self, StorageKind::Leaf | StorageKind::LeafWithSuffix)
    }
}

/// Shape of a lookup node's offset table.
///
/// A child on [`ZERO_EDGE`] gets a dedicated 0th slot. The remaining children
/// are covered by a dense table indexed by `edge - first_item`; slots with no
/// child stay zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LookupStrategy {
    /// The first child sits on the zero edge.
    pub has_0th_item: bool,
    /// Edge byte of table slot 0.
    pub first_item: u8,
    /// Number of table slots.
    pub list_size: usize,
}

impl LookupStrategy {
    /// Computes the table shape for children with the given ascending edges.
    pub fn compute(edges: &[u8]) -> Self {
        let mut strategy = LookupStrategy::default();
        let ranged = match edges {
            [ZERO_EDGE, rest @ ..] => {
                strategy.has_0th_item = true;
                rest
            }
            _ => edges,
        };
        if let (Some(&first), Some(&last)) = (ranged.first(), ranged.last()) {
            strategy.first_item = first;
            strategy.list_size = usize::from(last - first) + 1;
        }
        strategy
    }

    /// Header, 0th slot and table bytes for the given entry width.
    fn table_size(&self, entry_width: usize) -> usize {
        let zeroth = if self.has_0th_item { entry_width } else { 0 };
        LOOKUP_HEADER_SIZE + zeroth + self.list_size * entry_width
    }
}

/// The chosen encoding of a node, with the lookup table shape where there is one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Storage {
    /// See [`StorageKind::Leaf`].
    Leaf,
    /// See [`StorageKind::LeafWithSuffix`].
    LeafWithSuffix,
    /// See [`StorageKind::List8`].
    List8,
    /// See [`StorageKind::List16`].
    List16,
    /// See [`StorageKind::Lookup16`].
    Lookup16(LookupStrategy),
    /// See [`StorageKind::Lookup32`].
    Lookup32(LookupStrategy),
}

impl Storage {
    /// The encoding variant without table details.
    pub fn kind(&self) -> StorageKind {
        match self {
            Storage::Leaf => StorageKind::Leaf,
            Storage::LeafWithSuffix => StorageKind::LeafWithSuffix,
            Storage::List8 => StorageKind::List8,
            Storage::List16 => StorageKind::List16,
            Storage::Lookup16(_) => StorageKind::Lookup16,
            Storage::Lookup32(_) => StorageKind::Lookup32,
        }
    }
}

/// A trie node with its encoding chosen and its encoded size known.
///
/// Built from a [`TrieNode`] by [`SizedNode::from_trie`] and never mutated
/// afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SizedNode {
    edge: u8,
    suffix: SmallVec<[u8; 16]>,
    children: Vec<SizedNode>,
    storage: Storage,
    size: usize,
}

impl SizedNode {
    /// Sizes `node` and its whole subtree, choosing each node's storage.
    pub fn from_trie(node: TrieNode) -> Self {
        let (edge, children, suffix) = node.into_parts();

        if children.is_empty() {
            let (storage, size) = if suffix.is_empty() {
                (Storage::Leaf, LEAF_HEADER_SIZE)
            } else {
                // Suffix bytes plus the NUL terminator.
                (Storage::LeafWithSuffix, LEAF_HEADER_SIZE + suffix.len() + 1)
            };
            return SizedNode {
                edge,
                suffix,
                children: Vec::new(),
                storage,
                size,
            };
        }

        let children: Vec<SizedNode> = children.into_iter().map(SizedNode::from_trie).collect();
        let child_size = children.iter().map(SizedNode::size).sum();
        let (storage, size) = select_table(&children, child_size);
        trace!(
            edge,
            children = children.len(),
            child_size,
            kind = ?storage.kind(),
            size,
            "selected storage"
        );
        SizedNode {
            edge,
            suffix,
            children,
            storage,
            size,
        }
    }

    /// The byte labeling the edge from this node's parent.
    #[inline]
    pub fn edge(&self) -> u8 {
        self.edge
    }

    /// Suffix of a collapsed leaf.
    #[inline]
    pub fn suffix(&self) -> &[u8] {
        &self.suffix
    }

    /// Children in ascending edge order.
    #[inline]
    pub fn children(&self) -> &[SizedNode] {
        &self.children
    }

    /// The chosen encoding.
    #[inline]
    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// The chosen encoding variant.
    #[inline]
    pub fn kind(&self) -> StorageKind {
        self.storage.kind()
    }

    /// Encoded bytes of this node and all of its descendants.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the child labeled `edge`.
    pub fn get(&self, edge: u8) -> Option<&SizedNode> {
        self.children
            .binary_search_by_key(&edge, |child| child.edge)
            .ok()
            .map(|i| &self.children[i])
    }
}

fn select_table(children: &[SizedNode], child_size: usize) -> (Storage, usize) {
    let count = children.len();
    if count < LIST_THRESHOLD {
        if child_size <= LIST8_MAX_CHILD_SIZE {
            let width = StorageKind::List8.entry_width();
            return (Storage::List8, LIST_HEADER_SIZE + count * width + child_size);
        }
        if child_size <= LIST16_MAX_CHILD_SIZE {
            let width = StorageKind::List16.entry_width();
            return (Storage::List16, LIST_HEADER_SIZE + count * width + child_size);
        }
    }

    let edges: SmallVec<[u8; 32]> = children.iter().map(SizedNode::edge).collect();
    let strategy = LookupStrategy::compute(&edges);
    let size = strategy.table_size(StorageKind::Lookup16.entry_width()) + child_size;
    if size <= LOOKUP16_SIZE_LIMIT {
        return (Storage::Lookup16(strategy), size);
    }
    let size = strategy.table_size(StorageKind::Lookup32.entry_width()) + child_size;
    (Storage::Lookup32(strategy), size)
}

/// Runs the selector over a whole trie.
pub fn select_storage(root: TrieNode) -> SizedNode {
    let root = SizedNode::from_trie(root);
    debug!(kind = ?root.kind(), size = root.size(), "sized word trie");
    root
}
