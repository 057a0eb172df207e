//! Fixed layout of a BDic container and the tag bits of its trie nodes.
//!
//! ```text
//! offset 0        header     "BDic", version, aff offset, dic offset (u32 LE each)
//! offset 16       checksum   MD5 over every byte from offset 32 onward
//! offset 32       aff blob   static affix-rule section
//! offset 0x83     trie       serialized word trie
//! ```

/// Magic bytes opening every container.
pub const MAGIC: [u8; 4] = *b"BDic";

/// Format version written to the header.
pub const VERSION: u32 = 2;

/// Length of the checksum field that follows the header.
pub const CHECKSUM_LEN: usize = 16;

/// Length of the header.
pub const HEADER_LEN: usize = 16;

/// Offset of the checksum field.
pub const CHECKSUM_OFFSET: usize = HEADER_LEN;

/// Offset of the affix-rule section; the checksum covers everything from here on.
pub const AFF_OFFSET: usize = CHECKSUM_OFFSET + CHECKSUM_LEN;

/// Offset of the trie section.
pub const TRIE_OFFSET: usize = AFF_OFFSET + AFF_BLOB.len();

/// Container header: magic, version, aff section offset, dic section offset.
pub const HEADER: [u8; HEADER_LEN] = header();

const fn header() -> [u8; HEADER_LEN] {
    let fields = [
        u32::from_le_bytes(MAGIC),
        VERSION,
        AFF_OFFSET as u32,
        TRIE_OFFSET as u32,
    ];
    let mut header = [0u8; HEADER_LEN];
    let mut i = 0;
    while i < HEADER_LEN {
        header[i] = fields[i / 4].to_le_bytes()[i % 4];
        i += 1;
    }
    header
}

/// Affix-rule section.
///
/// Four u32 offsets (affix groups, affix rules, replacements, other rules)
/// followed by the rule text:
///
/// ```text
/// AF 0
/// TRY esianrtolcdugmphbyfvkwzESIANRTOLCDUGMPHBYFVKWZ'
/// ICONV 1
/// ICONV ’ '
/// ```
///
/// The charset is implicitly UTF-8. No affix groups or flags are defined.
pub const AFF_BLOB: &[u8] = b"\
\x32\x00\x00\x00\x38\x00\x00\x00\x39\x00\x00\x00\x3A\x00\x00\x00\
\n\nAF 0\x00\x00\x00\x00\
TRY esianrtolcdugmphbyfvkwzESIANRTOLCDUGMPHBYFVKWZ'\x00\
ICONV 1\x00\
ICONV \xE2\x80\x99 '\x00\x00";

/// Leaf nodes have the high bit clear.
pub const LEAF_NODE_TYPE_MASK: u8 = 0x80;
/// Id bits of a leaf node.
pub const LEAF_NODE_TYPE_VALUE: u8 = 0x00;
/// Selects the suffix flag of a leaf id byte.
pub const LEAF_NODE_ADDITIONAL_MASK: u8 = 0xC0;
/// Set on a leaf that carries a zero-terminated suffix.
pub const LEAF_NODE_ADDITIONAL_VALUE: u8 = 0x40;
/// Low bits of a leaf id byte holding the top of the first affix index.
pub const LEAF_NODE_FIRST_BYTE_AFFIX_MASK: u8 = 0x1F;

/// Selects the type bits of a lookup id byte.
pub const LOOKUP_NODE_TYPE_MASK: u8 = 0xFC;
/// Id bits of a lookup node.
pub const LOOKUP_NODE_TYPE_VALUE: u8 = 0xC0;
/// Lookup node has a 0th slot for the zero edge.
pub const LOOKUP_NODE_0TH_FLAG: u8 = 0x01;
/// Lookup node stores 32-bit offsets.
pub const LOOKUP_NODE_32BIT_FLAG: u8 = 0x02;

/// Selects the type bits of a list id byte.
pub const LIST_NODE_TYPE_MASK: u8 = 0xE0;
/// Id bits of a list node.
pub const LIST_NODE_TYPE_VALUE: u8 = 0xE0;
/// Selects the width bit of a list id byte.
pub const LIST_NODE_16BIT_MASK: u8 = 0xF0;
/// List node stores 16-bit offsets.
pub const LIST_NODE_16BIT_VALUE: u8 = 0xF0;
/// Low bits of a list id byte holding the child count.
pub const LIST_NODE_COUNT_MASK: u8 = 0x0F;

/// List nodes are used only below this many children.
pub(crate) const LIST_THRESHOLD: usize = 16;
/// Tag byte of a list node.
pub(crate) const LIST_HEADER_SIZE: usize = 1;
/// Tag byte, first item and item count of a lookup node.
pub(crate) const LOOKUP_HEADER_SIZE: usize = 3;

/// Byte label of a child that terminates the word spelled by its parent.
pub const ZERO_EDGE: u8 = 0;
