//! # libbdic
//!
//! Compiles a word list into a BDic dictionary, the compact trie container
//! read by Hunspell-based spell checkers in Chromium and Qt WebEngine.
//!
//! Compilation runs in three phases, each producing its own type:
//!
//! 1. [`build_trie`](bdic::build_trie) turns sorted words into a
//!    [`TrieNode`](bdic::TrieNode) tree, collapsing single-word chains into
//!    suffix-carrying leaves.
//! 2. [`select_storage`](bdic::select_storage) sizes the tree bottom-up and
//!    picks the smallest encoding for each node, giving a
//!    [`SizedNode`](bdic::SizedNode).
//! 3. [`serialize_trie`](bdic::serialize_trie) writes a `SizedNode` as bytes,
//!    back-patching child offsets as it goes.
//!
//! [`assemble`](bdic::assemble) runs all three and wraps the trie in the
//! container header, MD5 checksum and a fixed affix-rule section.
//!
//! ## Quick Start
//!
//! ```
//! use libbdic::bdic::{assemble, verify_checksum};
//!
//! let bdic = assemble(&["BAKE", "CAKE", "FAKE", "LAKE", "MAKE"]).unwrap();
//! assert_eq!(&bdic[..4], b"BDic");
//! assert!(verify_checksum(&bdic));
//! ```
//!
//! ## Phase by phase
//!
//! ```
//! use libbdic::bdic::{build_trie, select_storage, serialize_trie, StorageKind};
//!
//! let trie = build_trie(&["car", "cat", "dog"]).unwrap();
//! assert_eq!(trie.leaf_count(), 3);
//!
//! let sized = select_storage(trie);
//! assert_eq!(sized.kind(), StorageKind::List8);
//!
//! let bytes = serialize_trie(&sized).unwrap();
//! assert_eq!(bytes.len(), sized.size());
//! ```
//!
//! Words are byte strings. Input to [`assemble`](bdic::assemble) must be sorted
//! by byte value; [`assemble_unsorted`](bdic::assemble_unsorted) sorts first.

#![warn(missing_docs)]

/// BDic compilation: trie building, storage selection, serialization and
/// container assembly.
pub mod bdic;
