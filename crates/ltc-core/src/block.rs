//! Litecoin block header and its canonical serialization.
//!
//! Every consensus field is pinned to a fixed-width little-endian integer.
//! `version` is stored signed but written as its unsigned 32-bit pattern; the
//! other integer fields are `u32` end to end. Hosts holding wider values go
//! through [`BlockHeader::from_wide`], which refuses to truncate.

use alloc::string::String;

use crate::error::HeaderError;
use crate::hash::{double_sha256, hash_to_display_hex};
use crate::network::BLOCK_HEADER_SIZE;

/// A Litecoin block header (80 bytes).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockHeader {
    /// Block version with BIP9 versionbits.
    pub version: i32,
    /// Hash of the previous block (internal byte order).
    pub prev_block_hash: [u8; 32],
    /// Merkle root of all transactions.
    pub merkle_root: [u8; 32],
    /// Block timestamp (Unix time).
    pub timestamp: u32,
    /// Difficulty target in compact "bits" format.
    pub bits: u32,
    /// Nonce for proof of work.
    pub nonce: u32,
}

impl BlockHeader {
    /// Create a new block header.
    pub fn new(
        version: i32,
        prev_block_hash: [u8; 32],
        merkle_root: [u8; 32],
        timestamp: u32,
        bits: u32,
        nonce: u32,
    ) -> Self {
        BlockHeader {
            version,
            prev_block_hash,
            merkle_root,
            timestamp,
            bits,
            nonce,
        }
    }

    /// Build a header from host integers wider than the consensus fields.
    ///
    /// `version` may be given either as a signed 32-bit value or as its
    /// unsigned bit pattern. Any other out-of-range value is an error.
    pub fn from_wide(
        version: i64,
        prev_block_hash: [u8; 32],
        merkle_root: [u8; 32],
        timestamp: u64,
        bits: u64,
        nonce: u64,
    ) -> Result<Self, HeaderError> {
        let version = if let Ok(v) = i32::try_from(version) {
            v
        } else {
            let pattern = u32::try_from(version).map_err(|_| HeaderError::FieldOverflow {
                field: "version",
                value: version as i128,
            })?;
            pattern as i32
        };

        Ok(BlockHeader {
            version,
            prev_block_hash,
            merkle_root,
            timestamp: narrow("timestamp", timestamp)?,
            bits: narrow("bits", bits)?,
            nonce: narrow("nonce", nonce)?,
        })
    }

    /// Serialize the header into its canonical 80-byte layout.
    ///
    /// `[version:4][prev:32][merkle:32][timestamp:4][bits:4][nonce:4]`
    pub fn canonicalize(&self) -> [u8; BLOCK_HEADER_SIZE] {
        let mut header = [0u8; BLOCK_HEADER_SIZE];

        header[0..4].copy_from_slice(&(self.version as u32).to_le_bytes());
        header[4..36].copy_from_slice(&self.prev_block_hash);
        header[36..68].copy_from_slice(&self.merkle_root);
        header[68..72].copy_from_slice(&self.timestamp.to_le_bytes());
        header[72..76].copy_from_slice(&self.bits.to_le_bytes());
        header[76..80].copy_from_slice(&self.nonce.to_le_bytes());

        header
    }

    /// Parse a canonical 80-byte header.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, HeaderError> {
        if bytes.len() != BLOCK_HEADER_SIZE {
            return Err(HeaderError::InvalidLength(bytes.len()));
        }

        let mut prev_block_hash = [0u8; 32];
        prev_block_hash.copy_from_slice(&bytes[4..36]);
        let mut merkle_root = [0u8; 32];
        merkle_root.copy_from_slice(&bytes[36..68]);

        Ok(BlockHeader {
            version: read_u32(bytes, 0) as i32,
            prev_block_hash,
            merkle_root,
            timestamp: read_u32(bytes, 68),
            bits: read_u32(bytes, 72),
            nonce: read_u32(bytes, 76),
        })
    }

    /// Parse a header from its hex serialization.
    pub fn from_hex(s: &str) -> Result<Self, HeaderError> {
        let bytes = hex::decode(s.trim()).map_err(|_| HeaderError::InvalidHex)?;
        Self::from_bytes(&bytes)
    }

    /// Block identifier: SHA256d of the canonical bytes.
    pub fn block_hash(&self) -> [u8; 32] {
        double_sha256(&self.canonicalize())
    }

    /// Block identifier in display (reversed) hex.
    pub fn block_hash_hex(&self) -> String {
        hash_to_display_hex(&self.block_hash())
    }
}

/// Canonical bytes of a header; the exact input to the PoW hash.
pub fn canonicalize(header: &BlockHeader) -> [u8; BLOCK_HEADER_SIZE] {
    header.canonicalize()
}

fn narrow(field: &'static str, value: u64) -> Result<u32, HeaderError> {
    u32::try_from(value).map_err(|_| HeaderError::FieldOverflow {
        field,
        value: value as i128,
    })
}

fn read_u32(bytes: &[u8], offset: usize) -> u32 {
    let mut word = [0u8; 4];
    word.copy_from_slice(&bytes[offset..offset + 4]);
    u32::from_le_bytes(word)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Litecoin mainnet genesis header.
    pub(crate) fn genesis_header() -> BlockHeader {
        let mut merkle_root = [0u8; 32];
        let display =
            hex::decode("97ddfbbae6be97fd6cdf3e7ca13232a3afff2353e29badfab7f73011edd4ced9")
                .unwrap();
        for (i, byte) in display.iter().rev().enumerate() {
            merkle_root[i] = *byte;
        }
        BlockHeader::new(1, [0u8; 32], merkle_root, 1317972665, 0x1e0ffff0, 2084524493)
    }

    #[test]
    fn test_block_header_serialization() {
        let prev_hash = [0x12u8; 32];
        let merkle_root = [0x34u8; 32];
        let header = BlockHeader::new(0x20000000, prev_hash, merkle_root, 1700000000, 0x1a01cd2d, 0xDEADBEEF);

        let serialized = header.canonicalize();

        assert_eq!(serialized.len(), 80);
        assert_eq!(&serialized[0..4], &[0x00, 0x00, 0x00, 0x20]);
        assert_eq!(&serialized[4..36], &prev_hash[..]);
        assert_eq!(&serialized[36..68], &merkle_root[..]);
        assert_eq!(&serialized[68..72], &1700000000u32.to_le_bytes());
        assert_eq!(&serialized[72..76], &[0x2d, 0xcd, 0x01, 0x1a]);
        assert_eq!(&serialized[76..80], &[0xEF, 0xBE, 0xAD, 0xDE]);
    }

    #[test]
    fn test_negative_version_serializes_as_bit_pattern() {
        let header = BlockHeader::new(-1, [0u8; 32], [0u8; 32], 0, 0, 0);
        assert_eq!(&header.canonicalize()[0..4], &[0xFF, 0xFF, 0xFF, 0xFF]);
    }

    #[test]
    fn test_genesis_block_hash() {
        assert_eq!(
            genesis_header().block_hash_hex(),
            "12a765e31ffd4059bada1e25190f6e98c99d9714d334efa41a195a7e7e04bfe2"
        );
    }

    #[test]
    fn test_from_bytes_roundtrip() {
        let header = genesis_header();
        let parsed = BlockHeader::from_bytes(&header.canonicalize()).unwrap();
        assert_eq!(parsed, header);

        let parsed_hex = BlockHeader::from_hex(&hex::encode(header.canonicalize())).unwrap();
        assert_eq!(parsed_hex, header);
    }

    #[test]
    fn test_from_bytes_rejects_bad_length() {
        assert_eq!(
            BlockHeader::from_bytes(&[0u8; 79]),
            Err(HeaderError::InvalidLength(79))
        );
        assert_eq!(BlockHeader::from_hex("zz"), Err(HeaderError::InvalidHex));
    }

    #[test]
    fn test_from_wide_accepts_u32_range() {
        let header =
            BlockHeader::from_wide(0xFFFF_FFFF, [0u8; 32], [0u8; 32], u32::MAX as u64, 0x1e0fffff, 7)
                .unwrap();
        assert_eq!(header.version, -1);
        assert_eq!(header.timestamp, u32::MAX);
        assert_eq!(header.nonce, 7);
    }

    #[test]
    fn test_from_wide_rejects_overflow() {
        let err = BlockHeader::from_wide(1, [0u8; 32], [0u8; 32], 1u64 << 32, 0, 0).unwrap_err();
        assert_eq!(
            err,
            HeaderError::FieldOverflow {
                field: "timestamp",
                value: 1i128 << 32
            }
        );

        assert!(matches!(
            BlockHeader::from_wide(1i64 << 33, [0u8; 32], [0u8; 32], 0, 0, 0),
            Err(HeaderError::FieldOverflow { field: "version", .. })
        ));
        assert!(matches!(
            BlockHeader::from_wide(i64::MIN, [0u8; 32], [0u8; 32], 0, 0, 0),
            Err(HeaderError::FieldOverflow { field: "version", .. })
        ));
    }

    proptest! {
        #[test]
        fn canonical_layout_holds_for_any_header(
            version in any::<i32>(),
            prev in any::<[u8; 32]>(),
            merkle in any::<[u8; 32]>(),
            timestamp in any::<u32>(),
            bits in any::<u32>(),
            nonce in any::<u32>(),
        ) {
            let header = BlockHeader::new(version, prev, merkle, timestamp, bits, nonce);
            let bytes = canonicalize(&header);

            prop_assert_eq!(bytes.len(), 80);
            prop_assert_eq!(&bytes[0..4], &(version as u32).to_le_bytes()[..]);
            prop_assert_eq!(&bytes[4..36], &prev[..]);
            prop_assert_eq!(&bytes[36..68], &merkle[..]);
            prop_assert_eq!(&bytes[68..72], &timestamp.to_le_bytes()[..]);
            prop_assert_eq!(&bytes[72..76], &bits.to_le_bytes()[..]);
            prop_assert_eq!(&bytes[76..80], &nonce.to_le_bytes()[..]);
        }
    }
}
