/// Container Assembler: header, checksum and sections.
pub mod container;
/// Error types.
pub mod error;
/// Container constants and node tag bits.
pub mod format;
/// Binary Serializer for sized tries.
pub mod serialize;
/// Storage Strategy Selector: per-node encoding and size.
pub mod storage;
/// Trie Builder for sorted word lists.
pub mod trie;
/// Word list file reading.
pub mod wordlist;

pub use container::{assemble, assemble_unsorted, checksum, verify_checksum};
pub use error::{BdicError, BuildError, Result, SerializeError};
pub use serialize::serialize_trie;
pub use storage::{select_storage, LookupStrategy, SizedNode, Storage, StorageKind};
pub use trie::{build_trie, prepare_words, TrieNode};
pub use wordlist::{parse_wordlist, read_wordlist, WordlistFormat};
