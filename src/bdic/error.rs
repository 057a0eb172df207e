//! Error types for dictionary compilation.

use std::io;
use thiserror::Error;

/// Errors raised while validating the input word list and building the trie.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// The word list contained no words.
    #[error("word list is empty")]
    Empty,

    /// A zero-length word was found at the given input position.
    #[error("empty word at index {index}")]
    EmptyWord {
        /// Position of the word in the input.
        index: usize,
    },

    /// A word contained a NUL byte, which the format reserves as a terminator.
    #[error("word {} contains a NUL byte", String::from_utf8_lossy(.word))]
    NulByte {
        /// The offending word.
        word: Vec<u8>,
    },

    /// Words were not provided in byte-wise sorted order.
    ///
    /// Contains the two words that were out of order.
    #[error(
        "words out of order: {} came before {}",
        String::from_utf8_lossy(.previous),
        String::from_utf8_lossy(.current)
    )]
    Order {
        /// The word that came first.
        previous: Vec<u8>,
        /// The word that should have sorted before `previous`.
        current: Vec<u8>,
    },
}

/// Internal consistency failures while writing the trie.
///
/// These are unreachable when the storage selector and serializer agree; they
/// abort the whole serialization rather than truncating a field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SerializeError {
    /// An offset did not fit in the field reserved for it.
    #[error("offset {value} does not fit in a {width}-byte field")]
    OffsetOverflow {
        /// The offset that was to be written.
        value: usize,
        /// Width of the field in bytes.
        width: usize,
    },

    /// A list node was asked to encode more children than its count nibble holds.
    #[error("list node cannot hold {count} children")]
    TooManyListChildren {
        /// Number of children on the node.
        count: usize,
    },
}

/// Top-level error for dictionary compilation.
#[derive(Error, Debug)]
pub enum BdicError {
    /// Invalid input word list.
    #[error(transparent)]
    Build(#[from] BuildError),

    /// Internal serialization failure.
    #[error(transparent)]
    Serialize(#[from] SerializeError),

    /// I/O error while reading a word list.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BdicError>;
