//! Litecoin-specific pieces for a Bitcoin-protocol chain engine.
//!
//! This crate provides pure Rust implementations of:
//! - Per-network constants (address versions, magic, ports, seeds)
//! - Canonical 80-byte block header serialization
//! - Scrypt(1024, 1, 1) proof-of-work hashing, swappable for any hasher
//! - Compact target decoding and the proof-of-work validator chain

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod block;
pub mod config;
pub mod difficulty;
pub mod error;
pub mod hash;
pub mod network;
pub mod validator;

pub use block::{canonicalize, BlockHeader};
pub use config::PowConfig;
pub use difficulty::{bits_to_target, target_to_bits, CompactCodec, CompactTargetCodec};
pub use error::{ConfigError, HashError, HeaderError, ValidationError};
pub use hash::{double_sha256, scrypt_pow_hash, PowHasher, ScryptHasher, ScryptParams};
pub use network::{describe, Network, NetworkDescriptor};
pub use validator::{
    BlockValidator, DigestOrder, MaxTargetValidator, ProofOfWorkValidator, ValidatorChain,
};
