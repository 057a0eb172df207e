//! Binary Serializer: writes a sized trie as bytes.
//!
//! Every node with children reserves a zero-filled offset table, serializes
//! its children one after another behind it, and patches each child's entry
//! once that child's position is known.
//!
//! ```text
//! leaf:    id  affix  [suffix.. 0]
//! list:    id|count  (edge offset){count}  children..
//! lookup:  id  first_item  list_size  [0th offset]  offset{list_size}  children..
//! ```
//!
//! List offsets count from the end of the table and Lookup16 offsets from the
//! lookup node's id byte. Lookup32 offsets are absolute positions within the
//! trie section.

use tracing::debug;

use super::error::SerializeError;
use super::format::{
    LEAF_NODE_ADDITIONAL_VALUE, LEAF_NODE_FIRST_BYTE_AFFIX_MASK, LEAF_NODE_TYPE_VALUE,
    LIST_NODE_16BIT_VALUE, LIST_NODE_COUNT_MASK, LIST_NODE_TYPE_VALUE, LOOKUP_NODE_0TH_FLAG,
    LOOKUP_NODE_32BIT_FLAG, LOOKUP_NODE_TYPE_VALUE,
};
use super::storage::{LookupStrategy, SizedNode, Storage, StorageKind};

/// Affix group written on every leaf. The dictionary defines no affixes.
const NO_AFFIX: u16 = 0;

impl SizedNode {
    /// Appends the encoding of this node and its descendants to `output`.
    ///
    /// Lookup32 nodes store positions within `output`, so `output` must start
    /// at the beginning of the trie section.
    ///
    /// # Errors
    ///
    /// Returns a [`SerializeError`] if an offset does not fit in its field.
    /// `output` is left partially written in that case.
    pub fn serialize_into(&self, output: &mut Vec<u8>) -> Result<(), SerializeError> {
        match self.storage() {
            Storage::Leaf | Storage::LeafWithSuffix => {
                self.serialize_leaf(output);
                Ok(())
            }
            Storage::List8 | Storage::List16 => self.serialize_list(output),
            Storage::Lookup16(strategy) | Storage::Lookup32(strategy) => {
                self.serialize_lookup(strategy, output)
            }
        }
    }

    fn serialize_leaf(&self, output: &mut Vec<u8>) {
        let with_suffix = self.kind() == StorageKind::LeafWithSuffix;
        let mut id_byte =
            LEAF_NODE_TYPE_VALUE | ((NO_AFFIX >> 8) as u8 & LEAF_NODE_FIRST_BYTE_AFFIX_MASK);
        if with_suffix {
            id_byte |= LEAF_NODE_ADDITIONAL_VALUE;
        }
        output.push(id_byte);
        output.push((NO_AFFIX & 0xFF) as u8);
        if with_suffix {
            output.extend_from_slice(self.suffix());
            output.push(0);
        }
    }

    fn serialize_list(&self, output: &mut Vec<u8>) -> Result<(), SerializeError> {
        let kind = self.kind();
        let count = self.children().len();
        if count > usize::from(LIST_NODE_COUNT_MASK) {
            return Err(SerializeError::TooManyListChildren { count });
        }

        let mut id_byte = LIST_NODE_TYPE_VALUE | count as u8;
        if kind == StorageKind::List16 {
            id_byte |= LIST_NODE_16BIT_VALUE;
        }
        output.push(id_byte);

        let entry_width = kind.entry_width();
        let table_begin = output.len();
        output.resize(table_begin + count * entry_width, 0);
        let children_begin = output.len();

        for (i, child) in self.children().iter().enumerate() {
            let entry = table_begin + i * entry_width;
            output[entry] = child.edge();
            let offset = output.len() - children_begin;
            patch_le(output, entry + 1, offset, kind.offset_width())?;
            child.serialize_into(output)?;
        }
        Ok(())
    }

    fn serialize_lookup(
        &self,
        strategy: &LookupStrategy,
        output: &mut Vec<u8>,
    ) -> Result<(), SerializeError> {
        let kind = self.kind();
        let is_32_bit = kind == StorageKind::Lookup32;

        let mut id_byte = LOOKUP_NODE_TYPE_VALUE;
        if is_32_bit {
            id_byte |= LOOKUP_NODE_32BIT_FLAG;
        }
        if strategy.has_0th_item {
            id_byte |= LOOKUP_NODE_0TH_FLAG;
        }
        let node_begin = output.len();
        output.push(id_byte);
        output.push(strategy.first_item);
        push_le(output, strategy.list_size, 1)?;

        let width = kind.offset_width();
        let zeroth_slot = output.len();
        if strategy.has_0th_item {
            output.resize(zeroth_slot + width, 0);
        }
        let table_begin = output.len();
        output.resize(table_begin + strategy.list_size * width, 0);

        for (i, child) in self.children().iter().enumerate() {
            let slot = if i == 0 && strategy.has_0th_item {
                zeroth_slot
            } else {
                table_begin + usize::from(child.edge() - strategy.first_item) * width
            };
            let offset = if is_32_bit {
                output.len()
            } else {
                output.len() - node_begin
            };
            patch_le(output, slot, offset, width)?;
            child.serialize_into(output)?;
        }
        Ok(())
    }
}

/// Writes `value` as a `width`-byte little-endian integer at `at`.
fn patch_le(output: &mut [u8], at: usize, value: usize, width: usize) -> Result<(), SerializeError> {
    debug_assert!(width <= 4);
    let value64 = value as u64;
    if value64 >> (8 * width) != 0 {
        return Err(SerializeError::OffsetOverflow { value, width });
    }
    output[at..at + width].copy_from_slice(&value64.to_le_bytes()[..width]);
    Ok(())
}

fn push_le(output: &mut Vec<u8>, value: usize, width: usize) -> Result<(), SerializeError> {
    let at = output.len();
    output.resize(at + width, 0);
    patch_le(output, at, value, width)
}

/// Serializes a sized trie into a new buffer holding the trie section.
///
/// # Errors
///
/// Returns a [`SerializeError`] if an offset does not fit in its field.
pub fn serialize_trie(root: &SizedNode) -> Result<Vec<u8>, SerializeError> {
    let mut output = Vec::with_capacity(root.size());
    root.serialize_into(&mut output)?;
    debug_assert_eq!(output.len(), root.size());
    debug!(bytes = output.len(), "serialized word trie");
    Ok(output)
}
