//! Litecoin network definitions and constants.
//!
//! All per-network behaviour is driven from one descriptor table. A new
//! network is a new row, never a new branch elsewhere in the crate.

use serde::{Deserialize, Serialize};

/// Litecoin network type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// Litecoin mainnet
    Mainnet,
    /// Litecoin testnet4
    Testnet,
}

/// Immutable per-network constants consumed by address encoding, the peer
/// handshake and key derivation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkDescriptor {
    pub bundle_name: &'static str,
    /// Payment URI scheme (`litecoin:`).
    pub uri_scheme: &'static str,
    /// P2PKH version byte.
    pub address_version: u8,
    /// P2SH version byte.
    pub script_address_version: u8,
    /// WIF private key version byte.
    pub private_key_version: u8,
    /// Bech32 human-readable part.
    pub segwit_hrp: &'static str,
    /// BIP-32 extended public key version.
    pub extended_public_key_version: u32,
    /// BIP-32 extended private key version.
    pub extended_private_key_version: u32,
    /// Message start bytes, as a big-endian u32.
    pub protocol_magic: u32,
    pub default_port: u16,
    /// BIP-44 coin type.
    pub bip32_coin_type: u32,
    /// Easiest allowed target, compact encoded.
    pub maximum_target_compact: u32,
    /// Smallest relayable output, in litoshis.
    pub dust_threshold: u64,
    /// DNS seeds, in query order.
    pub seed_hosts: &'static [&'static str],
}

impl NetworkDescriptor {
    /// Magic number as it appears on the wire.
    pub fn magic_bytes(&self) -> [u8; 4] {
        self.protocol_magic.to_be_bytes()
    }
}

static MAINNET: NetworkDescriptor = NetworkDescriptor {
    bundle_name: "Litecoin",
    uri_scheme: "litecoin",
    address_version: 0x30,
    script_address_version: 0x32,
    private_key_version: 0xB0,
    segwit_hrp: "ltc",
    extended_public_key_version: 0x0488_B21E,
    extended_private_key_version: 0x0488_ADE4,
    protocol_magic: 0xFBC0_B6DB,
    default_port: 9333,
    bip32_coin_type: 2,
    maximum_target_compact: MAX_TARGET_BITS,
    dust_threshold: 3000,
    seed_hosts: &[
        "x5.dnsseed.thrasher.io",
        "x5.dnsseed.litecointools.com",
        "x5.dnsseed.litecoinpool.org",
        "seed-a.litecoin.loshan.co.uk",
    ],
};

static TESTNET: NetworkDescriptor = NetworkDescriptor {
    bundle_name: "Litecoin",
    uri_scheme: "litecoin",
    address_version: 0x6F,
    script_address_version: 0x3A,
    private_key_version: 0xEF,
    segwit_hrp: "tltc",
    extended_public_key_version: 0x0435_87CF,
    extended_private_key_version: 0x0435_8394,
    protocol_magic: 0xFDD2_C8F1,
    default_port: 19335,
    bip32_coin_type: 1,
    maximum_target_compact: MAX_TARGET_BITS,
    dust_threshold: 3000,
    seed_hosts: &[
        "testnet-seed.ltc.xurious.com",
        "seed-b.litecoin.loshan.co.uk",
        "dnsseed-testnet.thrasher.io",
    ],
};

impl Network {
    /// Every supported network.
    pub const ALL: [Network; 2] = [Network::Mainnet, Network::Testnet];

    /// Get the constant table for this network.
    pub fn descriptor(&self) -> &'static NetworkDescriptor {
        match self {
            Network::Mainnet => &MAINNET,
            Network::Testnet => &TESTNET,
        }
    }

    /// Find the network that uses the given message start.
    pub fn from_magic(magic: u32) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|network| network.descriptor().protocol_magic == magic)
    }

    /// Parse network from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "mainnet" | "main" | "litecoin" | "ltc" => Some(Network::Mainnet),
            "testnet" | "testnet4" | "test" | "tltc" => Some(Network::Testnet),
            _ => None,
        }
    }

    /// Get network name as string.
    pub fn name(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
        }
    }

    /// Get display name for UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            Network::Mainnet => "Litecoin Mainnet",
            Network::Testnet => "Litecoin Testnet",
        }
    }
}

/// Look up the descriptor for a network. Total over [`Network`].
pub fn describe(network: Network) -> &'static NetworkDescriptor {
    network.descriptor()
}

impl core::fmt::Display for Network {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Default for Network {
    fn default() -> Self {
        Network::Mainnet
    }
}

/// Size of a block header in bytes.
pub const BLOCK_HEADER_SIZE: usize = 80;

/// Initial and easiest allowed target.
pub const MAX_TARGET_BITS: u32 = 0x1E0F_FFFF;

/// Blocks between difficulty retargets.
pub const DIFFICULTY_ADJUSTMENT_INTERVAL: u32 = 2016;

/// Target time between blocks (2.5 minutes).
pub const TARGET_SPACING_SECS: u32 = 150;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mainnet_descriptor() {
        let d = describe(Network::Mainnet);
        assert_eq!(d.address_version, 0x30);
        assert_eq!(d.script_address_version, 0x32);
        assert_eq!(d.private_key_version, 0xB0);
        assert_eq!(d.segwit_hrp, "ltc");
        assert_eq!(d.protocol_magic, 0xFBC0B6DB);
        assert_eq!(d.default_port, 9333);
        assert_eq!(d.bip32_coin_type, 2);
        assert_eq!(d.maximum_target_compact, 0x1E0FFFFF);
        assert_eq!(d.dust_threshold, 3000);
        assert_eq!(d.seed_hosts.len(), 4);
    }

    #[test]
    fn test_testnet_descriptor() {
        let d = describe(Network::Testnet);
        assert_eq!(d.address_version, 0x6F);
        assert_eq!(d.script_address_version, 0x3A);
        assert_eq!(d.private_key_version, 0xEF);
        assert_eq!(d.segwit_hrp, "tltc");
        assert_eq!(d.protocol_magic, 0xFDD2C8F1);
        assert_eq!(d.default_port, 19335);
        assert_eq!(d.bip32_coin_type, 1);
        assert_eq!(d.maximum_target_compact, 0x1E0FFFFF);
        assert_eq!(d.seed_hosts[0], "testnet-seed.ltc.xurious.com");
    }

    #[test]
    fn test_magic_numbers_are_unique() {
        let main = Network::Mainnet.descriptor().protocol_magic;
        let test = Network::Testnet.descriptor().protocol_magic;
        assert_ne!(main, test);

        assert_eq!(Network::from_magic(main), Some(Network::Mainnet));
        assert_eq!(Network::from_magic(test), Some(Network::Testnet));
        assert_eq!(Network::from_magic(0xD9B4BEF9), None);
    }

    #[test]
    fn test_magic_bytes_wire_order() {
        assert_eq!(
            Network::Mainnet.descriptor().magic_bytes(),
            [0xFB, 0xC0, 0xB6, 0xDB]
        );
    }

    #[test]
    fn test_network_from_str() {
        assert_eq!(Network::from_str("mainnet"), Some(Network::Mainnet));
        assert_eq!(Network::from_str("LTC"), Some(Network::Mainnet));
        assert_eq!(Network::from_str("testnet"), Some(Network::Testnet));
        assert_eq!(Network::from_str("regtest"), None);
    }

    #[test]
    fn test_descriptor_is_static() {
        assert!(core::ptr::eq(
            Network::Mainnet.descriptor(),
            describe(Network::Mainnet)
        ));
    }
}
