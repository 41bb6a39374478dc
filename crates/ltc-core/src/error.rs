//! Error types for header parsing, hashing and proof-of-work validation.

use alloc::string::String;
use thiserror::Error;

/// Failures of the proof-of-work hash function itself.
///
/// These are configuration or environment faults. They are never a
/// statement about whether a header carries valid work.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HashError {
    /// The memory-hard primitive rejected its cost parameters.
    #[error("invalid hash parameters: {0}")]
    InvalidParams(String),
    /// The requested output length cannot be produced.
    #[error("invalid hash output length: {0}")]
    InvalidOutputLen(usize),
    /// A hash function produced no bytes.
    #[error("hash function returned an empty digest")]
    EmptyDigest,
}

/// Reasons a validator rejects a block header.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The header hash is not strictly below the target declared in `bits`,
    /// or `bits` does not decode to a positive target.
    #[error("invalid proof of work")]
    ProofOfWorkInvalid,
    /// The hash could not be computed at all.
    #[error("proof-of-work hash computation failed: {0}")]
    HashComputationFailed(#[from] HashError),
    /// `bits` declares a target easier than the network allows.
    #[error("target {bits:#010x} is above the network maximum {max_bits:#010x}")]
    TargetAboveMaximum { bits: u32, max_bits: u32 },
}

/// Errors building a [`BlockHeader`](crate::BlockHeader) from external data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeaderError {
    /// Raw header is not exactly 80 bytes.
    #[error("header must be 80 bytes, got {0}")]
    InvalidLength(usize),
    /// Header hex string could not be decoded.
    #[error("invalid header hex")]
    InvalidHex,
    /// A host value does not fit in its 32-bit consensus field.
    #[error("{field} value {value} does not fit in 32 bits")]
    FieldOverflow { field: &'static str, value: i128 },
}

/// Errors loading a [`PowConfig`](crate::PowConfig).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The configuration document could not be parsed.
    #[error("failed to parse config: {0}")]
    Parse(String),
    /// Scrypt parameters in the configuration are unusable.
    #[error(transparent)]
    Hash(#[from] HashError),
}
