//! Proof-of-work hash functions.
//!
//! Litecoin hashes the 80-byte header with Scrypt for proof of work, while the
//! block identifier stays SHA256d. The PoW hash is a pluggable strategy: any
//! [`PowHasher`] can stand in for [`ScryptHasher`], including plain closures.

use alloc::format;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::HashError;

/// A `(bytes) -> bytes` digest used for proof of work.
///
/// Implementations must be reentrant: validators share one hasher across
/// threads.
pub trait PowHasher: Send + Sync {
    fn digest(&self, data: &[u8]) -> Result<Vec<u8>, HashError>;
}

impl<F> PowHasher for F
where
    F: Fn(&[u8]) -> Vec<u8> + Send + Sync,
{
    fn digest(&self, data: &[u8]) -> Result<Vec<u8>, HashError> {
        Ok(self(data))
    }
}

impl<T: PowHasher + ?Sized> PowHasher for Arc<T> {
    fn digest(&self, data: &[u8]) -> Result<Vec<u8>, HashError> {
        (**self).digest(data)
    }
}

const PHC_LEN: usize = 32;

/// Scrypt cost parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScryptParams {
    /// Digest length in bytes.
    pub output_len: usize,
    /// CPU/memory cost `N`. Must be a power of two greater than one.
    pub memory_cost: u64,
    /// Block mixing factor `r`.
    pub block_size: u32,
    /// Parallelization factor `p`.
    pub parallelization: u32,
}

impl ScryptParams {
    /// Litecoin consensus parameters: N=1024, r=1, p=1, 32-byte output.
    pub const LITECOIN: ScryptParams = ScryptParams {
        output_len: 32,
        memory_cost: 1024,
        block_size: 1,
        parallelization: 1,
    };

    /// Check the parameters and convert them for the scrypt primitive.
    pub fn to_scrypt(&self) -> Result<scrypt::Params, HashError> {
        if self.output_len == 0 {
            return Err(HashError::InvalidOutputLen(self.output_len));
        }
        if self.memory_cost < 2 || !self.memory_cost.is_power_of_two() {
            return Err(HashError::InvalidParams(format!(
                "memory cost {} is not a power of two greater than one",
                self.memory_cost
            )));
        }
        if self.block_size == 0 || self.parallelization == 0 {
            return Err(HashError::InvalidParams(format!(
                "r={} p={} must both be non-zero",
                self.block_size, self.parallelization
            )));
        }
        let log_n = self.memory_cost.trailing_zeros() as u8;

        // `len` only matters for PHC strings; the raw digest length comes from
        // the output buffer.
        scrypt::Params::new(log_n, self.block_size, self.parallelization, PHC_LEN)
        .map_err(|e| HashError::InvalidParams(format!("{}", e)))
    }
}

impl Default for ScryptParams {
    fn default() -> Self {
        Self::LITECOIN
    }
}

/// Scrypt proof-of-work hash, using the input as both password and salt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScryptHasher {
    params: ScryptParams,
}

impl ScryptHasher {
    /// Create a hasher, rejecting unusable parameters up front.
    pub fn new(params: ScryptParams) -> Result<Self, HashError> {
        params.to_scrypt()?;
        Ok(ScryptHasher { params })
    }

    /// Hasher with the Litecoin consensus parameters.
    pub const fn litecoin() -> Self {
        ScryptHasher {
            params: ScryptParams::LITECOIN,
        }
    }

    /// Get the configured parameters.
    pub fn params(&self) -> &ScryptParams {
        &self.params
    }
}

impl Default for ScryptHasher {
    fn default() -> Self {
        Self::litecoin()
    }
}

impl PowHasher for ScryptHasher {
    fn digest(&self, data: &[u8]) -> Result<Vec<u8>, HashError> {
        let scrypt_params = self.params.to_scrypt()?;
        let mut output = vec![0u8; self.params.output_len];
        scrypt::scrypt(data, data, &scrypt_params, &mut output)
            .map_err(|_| HashError::InvalidOutputLen(self.params.output_len))?;
        Ok(output)
    }
}

/// Scrypt PoW hash of a header with the Litecoin parameters.
pub fn scrypt_pow_hash(data: &[u8]) -> Result<[u8; 32], HashError> {
    let digest = ScryptHasher::litecoin().digest(data)?;
    let mut result = [0u8; 32];
    result.copy_from_slice(&digest);
    Ok(result)
}

/// Double SHA256: SHA256(SHA256(data)).
///
/// Used for the block identifier, not for proof of work.
#[inline]
pub fn double_sha256(data: &[u8]) -> [u8; 32] {
    let first = Sha256::digest(data);
    let second = Sha256::digest(first);
    let mut result = [0u8; 32];
    result.copy_from_slice(&second);
    result
}

/// Single SHA256 hash.
#[inline]
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let hash = Sha256::digest(data);
    let mut result = [0u8; 32];
    result.copy_from_slice(&hash);
    result
}

/// Convert a hash to its display format (reversed hex).
pub fn hash_to_display_hex(hash: &[u8]) -> String {
    let reversed: Vec<u8> = hash.iter().rev().copied().collect();
    hex::encode(reversed)
}
