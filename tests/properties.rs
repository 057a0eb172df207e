mod common;

use std::collections::BTreeSet;

use libbdic::bdic::format::{AFF_OFFSET, CHECKSUM_OFFSET};
use libbdic::bdic::{assemble, assemble_unsorted, build_trie, checksum, select_storage};
use proptest::prelude::*;

use common::decode_container;

fn word_sets() -> impl Strategy<Value = BTreeSet<Vec<u8>>> {
    prop::collection::btree_set(prop::collection::vec(1u8..=255, 1..12), 1..300)
}

fn narrow_word_sets() -> impl Strategy<Value = BTreeSet<Vec<u8>>> {
    // Small alphabet, so words share long prefixes and end inside each other.
    prop::collection::btree_set(prop::collection::vec(b'a'..=b'd', 1..8), 1..200)
}

proptest! {
    #[test]
    fn every_word_is_recovered(words in word_sets()) {
        let words: Vec<Vec<u8>> = words.into_iter().collect();
        let bdic = assemble(&words).unwrap();
        prop_assert_eq!(decode_container(&bdic), words);
    }

    #[test]
    fn prefix_heavy_words_are_recovered(words in narrow_word_sets()) {
        let words: Vec<Vec<u8>> = words.into_iter().collect();
        let bdic = assemble(&words).unwrap();
        prop_assert_eq!(decode_container(&bdic), words);
    }

    #[test]
    fn checksum_matches_content(words in word_sets()) {
        let words: Vec<Vec<u8>> = words.into_iter().collect();
        let bdic = assemble(&words).unwrap();
        prop_assert_eq!(&bdic[CHECKSUM_OFFSET..AFF_OFFSET], &checksum(&bdic[AFF_OFFSET..])[..]);
    }

    #[test]
    fn trie_size_matches_container(words in narrow_word_sets()) {
        let words: Vec<Vec<u8>> = words.into_iter().collect();
        let sized = select_storage(build_trie(&words).unwrap());
        let bdic = assemble(&words).unwrap();
        prop_assert_eq!(bdic.len(), libbdic::bdic::format::TRIE_OFFSET + sized.size());
    }

    #[test]
    fn input_order_does_not_matter(words in narrow_word_sets(), seed in any::<u64>()) {
        let sorted: Vec<Vec<u8>> = words.into_iter().collect();
        let mut shuffled = sorted.clone();
        // Deterministic rotation plus reversal stands in for a shuffle.
        let len = shuffled.len();
        shuffled.rotate_left((seed as usize) % len);
        shuffled.reverse();
        prop_assert_eq!(assemble(&sorted).unwrap(), assemble_unsorted(shuffled).unwrap());
    }
}
