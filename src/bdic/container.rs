//! Container Assembler: header, checksum, affix rules and trie in one buffer.

use md5::{Digest, Md5};
use tracing::debug;

use super::error::Result;
use super::format::{AFF_BLOB, AFF_OFFSET, CHECKSUM_LEN, CHECKSUM_OFFSET, HEADER, TRIE_OFFSET};
use super::serialize::serialize_trie;
use super::storage::select_storage;
use super::trie::build_trie;

/// Builds a complete BDic container from a word list sorted by byte value.
///
/// Exact duplicates are collapsed. The output is fully determined by the
/// input: the same words always produce the same bytes.
///
/// # Examples
///
/// ```
/// use libbdic::bdic::container::{assemble, verify_checksum};
/// use libbdic::bdic::format::TRIE_OFFSET;
///
/// let bdic = assemble(&["car", "cat", "dog"]).unwrap();
/// assert_eq!(&bdic[..4], b"BDic");
/// assert!(verify_checksum(&bdic));
/// assert_eq!(bdic.len(), TRIE_OFFSET + 22);
/// ```
///
/// # Errors
///
/// Returns [`BdicError::Build`](super::error::BdicError::Build) if the word
/// list is empty, unsorted, or holds an empty word or a NUL byte.
pub fn assemble<W: AsRef<[u8]>>(words: &[W]) -> Result<Vec<u8>> {
    let root = select_storage(build_trie(words)?);
    let trie = serialize_trie(&root)?;

    let mut output = Vec::with_capacity(TRIE_OFFSET + trie.len());
    output.extend_from_slice(&HEADER);
    output.resize(CHECKSUM_OFFSET + CHECKSUM_LEN, 0);
    output.extend_from_slice(AFF_BLOB);
    debug_assert_eq!(output.len(), TRIE_OFFSET);
    output.extend_from_slice(&trie);

    let digest = checksum(&output[AFF_OFFSET..]);
    output[CHECKSUM_OFFSET..AFF_OFFSET].copy_from_slice(&digest);
    debug!(
        words = words.len(),
        trie_bytes = trie.len(),
        total_bytes = output.len(),
        "assembled bdic container"
    );
    Ok(output)
}

/// Sorts and deduplicates `words` by byte value, then calls [`assemble`].
///
/// # Errors
///
/// Same as [`assemble`], except that ordering errors cannot occur.
pub fn assemble_unsorted<W: AsRef<[u8]>>(words: impl IntoIterator<Item = W>) -> Result<Vec<u8>> {
    let mut words: Vec<Vec<u8>> = words.into_iter().map(|w| w.as_ref().to_vec()).collect();
    words.sort_unstable();
    words.dedup();
    assemble(&words)
}

/// MD5 digest as stored in the checksum field.
pub fn checksum(data: &[u8]) -> [u8; CHECKSUM_LEN] {
    let mut digest = [0u8; CHECKSUM_LEN];
    digest.copy_from_slice(&Md5::digest(data));
    digest
}

/// Returns true if the checksum field matches the bytes that follow it.
pub fn verify_checksum(container: &[u8]) -> bool {
    container.len() >= AFF_OFFSET
        && container[CHECKSUM_OFFSET..AFF_OFFSET] == checksum(&container[AFF_OFFSET..])
}
