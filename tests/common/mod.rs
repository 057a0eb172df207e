//! Minimal BDic trie reader used to check what the writer produces.
//!
//! Walks every node, asserts that each child offset points exactly where the
//! previous sibling ended, and collects the words spelled by the leaves.

#![allow(dead_code)]

use libbdic::bdic::format::{
    HEADER_LEN, LEAF_NODE_ADDITIONAL_MASK, LEAF_NODE_ADDITIONAL_VALUE, LEAF_NODE_TYPE_MASK,
    LEAF_NODE_TYPE_VALUE, LIST_NODE_16BIT_MASK, LIST_NODE_16BIT_VALUE, LIST_NODE_COUNT_MASK,
    LIST_NODE_TYPE_MASK, LIST_NODE_TYPE_VALUE, LOOKUP_NODE_0TH_FLAG, LOOKUP_NODE_32BIT_FLAG,
    LOOKUP_NODE_TYPE_MASK, LOOKUP_NODE_TYPE_VALUE, MAGIC, TRIE_OFFSET, VERSION,
};

/// Words recovered from a trie, in the order the trie stores them.
pub fn decode_trie(trie: &[u8]) -> Vec<Vec<u8>> {
    let mut words = Vec::new();
    let end = walk(trie, 0, &mut Vec::new(), &mut words);
    assert_eq!(end, trie.len(), "trailing bytes after root node");
    words
}

/// Locates the trie through the header's dic offset and decodes it.
pub fn decode_container(bdic: &[u8]) -> Vec<Vec<u8>> {
    assert_eq!(bdic[..4], MAGIC);
    assert_eq!(read_le(bdic, 4, 4), VERSION as usize);
    let dic_offset = read_le(bdic, 12, 4);
    assert!(dic_offset >= HEADER_LEN);
    assert_eq!(dic_offset, TRIE_OFFSET);
    decode_trie(&bdic[dic_offset..])
}

pub fn read_le(bytes: &[u8], at: usize, width: usize) -> usize {
    bytes[at..at + width]
        .iter()
        .rev()
        .fold(0, |acc, &b| (acc << 8) | usize::from(b))
}

/// Decodes the node at `pos` and returns the position just past its subtree.
fn walk(trie: &[u8], pos: usize, prefix: &mut Vec<u8>, words: &mut Vec<Vec<u8>>) -> usize {
    let id = trie[pos];
    if id & LEAF_NODE_TYPE_MASK == LEAF_NODE_TYPE_VALUE {
        let mut end = pos + 2;
        let mut word = prefix.clone();
        if id & LEAF_NODE_ADDITIONAL_MASK == LEAF_NODE_ADDITIONAL_VALUE {
            let len = trie[end..].iter().position(|&b| b == 0).expect("unterminated suffix");
            assert!(len > 0, "empty suffix on leaf at {pos}");
            word.extend_from_slice(&trie[end..end + len]);
            end += len + 1;
        }
        words.push(word);
        return end;
    }

    let mut children = Vec::new();
    let children_begin;
    if id & LIST_NODE_TYPE_MASK == LIST_NODE_TYPE_VALUE {
        let count = usize::from(id & LIST_NODE_COUNT_MASK);
        let wide = id & LIST_NODE_16BIT_MASK == LIST_NODE_16BIT_VALUE;
        let entry = if wide { 3 } else { 2 };
        children_begin = pos + 1 + count * entry;
        for i in 0..count {
            let at = pos + 1 + i * entry;
            let offset = read_le(trie, at + 1, entry - 1);
            children.push((trie[at], children_begin + offset));
        }
    } else if id & LOOKUP_NODE_TYPE_MASK == LOOKUP_NODE_TYPE_VALUE {
        let has_0th = id & LOOKUP_NODE_0TH_FLAG != 0;
        let is_32_bit = id & LOOKUP_NODE_32BIT_FLAG != 0;
        let width = if is_32_bit { 4 } else { 2 };
        let first_item = trie[pos + 1];
        let list_size = usize::from(trie[pos + 2]);
        let table = pos + 3 + if has_0th { width } else { 0 };
        children_begin = table + list_size * width;
        let resolve = |offset: usize| if is_32_bit { offset } else { pos + offset };
        if has_0th {
            let offset = read_le(trie, pos + 3, width);
            assert_ne!(offset, 0, "empty 0th slot at {pos}");
            children.push((0, resolve(offset)));
        }
        for i in 0..list_size {
            let offset = read_le(trie, table + i * width, width);
            if offset != 0 {
                children.push((first_item + i as u8, resolve(offset)));
            }
        }
    } else {
        panic!("unknown node id {id:#04x} at {pos}");
    }

    assert!(!children.is_empty(), "node at {pos} has no children");
    let mut expected = children_begin;
    let mut last_edge = None;
    for (edge, child) in children {
        assert_eq!(child, expected, "child {edge:#04x} of node at {pos} is misplaced");
        assert!(last_edge < Some(edge), "edges of node at {pos} not ascending");
        last_edge = Some(edge);
        if edge == 0 {
            assert_eq!(trie[child], LEAF_NODE_TYPE_VALUE, "zero edge at {child} is not a plain leaf");
        } else {
            prefix.push(edge);
        }
        expected = walk(trie, child, prefix, words);
        if edge != 0 {
            prefix.pop();
        }
    }
    expected
}
