//! Block header validators.
//!
//! The host engine runs an ordered [`ValidatorChain`] against every candidate
//! header. [`ProofOfWorkValidator`] is the Scrypt check; [`MaxTargetValidator`]
//! is an optional sanity bound on the declared target.

use alloc::boxed::Box;
use alloc::vec::Vec;

use log::{debug, trace, warn};
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::block::BlockHeader;
use crate::difficulty::{meets_target, CompactCodec, CompactTargetCodec};
use crate::error::{HashError, ValidationError};
use crate::hash::{hash_to_display_hex, PowHasher, ScryptHasher};

/// A single acceptance check over a candidate header.
pub trait BlockValidator: Send + Sync {
    /// `previous` is the header this one builds on. Validators that only look
    /// at the candidate ignore it.
    fn validate(&self, header: &BlockHeader, previous: &BlockHeader)
        -> Result<(), ValidationError>;
}

/// How the PoW digest bytes are read as an integer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DigestOrder {
    /// First byte most significant.
    #[default]
    BigEndian,
    /// Last byte most significant, as Bitcoin-family nodes read a `uint256`.
    LittleEndian,
}

impl DigestOrder {
    pub fn to_value(self, digest: &[u8]) -> BigUint {
        match self {
            DigestOrder::BigEndian => BigUint::from_bytes_be(digest),
            DigestOrder::LittleEndian => BigUint::from_bytes_le(digest),
        }
    }
}

/// Accepts a header iff its PoW hash is strictly below the target in `bits`.
///
/// Stateless apart from its immutable hasher and codec, so one instance can
/// validate headers from many threads at once.
#[derive(Debug, Clone)]
pub struct ProofOfWorkValidator<H = ScryptHasher, C = CompactCodec> {
    hasher: H,
    codec: C,
    digest_order: DigestOrder,
}

impl<H: PowHasher> ProofOfWorkValidator<H, CompactCodec> {
    /// Create a validator with the standard compact codec.
    pub fn new(hasher: H) -> Self {
        Self::with_codec(hasher, CompactCodec)
    }
}

impl<H: PowHasher, C: CompactTargetCodec> ProofOfWorkValidator<H, C> {
    /// Create a validator with a host-supplied codec.
    pub fn with_codec(hasher: H, codec: C) -> Self {
        ProofOfWorkValidator {
            hasher,
            codec,
            digest_order: DigestOrder::default(),
        }
    }

    /// Set how the digest is read as an integer.
    pub fn with_digest_order(mut self, digest_order: DigestOrder) -> Self {
        self.digest_order = digest_order;
        self
    }

    pub fn digest_order(&self) -> DigestOrder {
        self.digest_order
    }

    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    /// Raw PoW digest of a header.
    pub fn pow_hash(&self, header: &BlockHeader) -> Result<Vec<u8>, HashError> {
        let digest = self.hasher.digest(&header.canonicalize())?;
        if digest.is_empty() {
            return Err(HashError::EmptyDigest);
        }
        Ok(digest)
    }

    /// PoW digest of a header read as an unsigned integer.
    pub fn pow_value(&self, header: &BlockHeader) -> Result<BigUint, HashError> {
        let digest = self.pow_hash(header)?;
        Ok(self.digest_order.to_value(&digest))
    }
}

impl ProofOfWorkValidator<ScryptHasher, CompactCodec> {
    /// Scrypt(1024, 1, 1) with the standard codec.
    pub fn litecoin() -> Self {
        Self::new(ScryptHasher::litecoin())
    }
}

impl Default for ProofOfWorkValidator {
    fn default() -> Self {
        Self::litecoin()
    }
}

impl<H: PowHasher, C: CompactTargetCodec> BlockValidator for ProofOfWorkValidator<H, C> {
    fn validate(&self, header: &BlockHeader, _previous: &BlockHeader) -> Result<(), ValidationError> {
        let digest = self.pow_hash(header).map_err(|e| {
            warn!("PoW hash failed for bits {:#010x}: {}", header.bits, e);
            e
        })?;
        let value = self.digest_order.to_value(&digest);

        let target = match self.codec.decode(header.bits) {
            Some(target) => target,
            None => {
                debug!("Rejecting header: bits {:#010x} decode to an invalid target", header.bits);
                return Err(ValidationError::ProofOfWorkInvalid);
            }
        };
        trace!(
            "PoW check: hash={}, target={:x}",
            hash_to_display_hex(&digest),
            target
        );

        if meets_target(&value, &target) {
            Ok(())
        } else {
            debug!(
                "Rejecting header {}: PoW hash not below target {:#010x}",
                header.block_hash_hex(),
                header.bits
            );
            Err(ValidationError::ProofOfWorkInvalid)
        }
    }
}

/// Rejects headers that declare a target easier than the network maximum.
#[derive(Debug, Clone)]
pub struct MaxTargetValidator<C = CompactCodec> {
    max_bits: u32,
    codec: C,
}

impl MaxTargetValidator<CompactCodec> {
    pub fn new(max_bits: u32) -> Self {
        MaxTargetValidator {
            max_bits,
            codec: CompactCodec,
        }
    }
}

impl<C: CompactTargetCodec> MaxTargetValidator<C> {
    pub fn with_codec(max_bits: u32, codec: C) -> Self {
        MaxTargetValidator { max_bits, codec }
    }
}

impl<C: CompactTargetCodec> BlockValidator for MaxTargetValidator<C> {
    fn validate(&self, header: &BlockHeader, _previous: &BlockHeader) -> Result<(), ValidationError> {
        let target = self
            .codec
            .decode(header.bits)
            .ok_or(ValidationError::ProofOfWorkInvalid)?;
        let max_target = self
            .codec
            .decode(self.max_bits)
            .ok_or(ValidationError::ProofOfWorkInvalid)?;

        if target > max_target {
            debug!(
                "Rejecting header: bits {:#010x} above maximum {:#010x}",
                header.bits, self.max_bits
            );
            return Err(ValidationError::TargetAboveMaximum {
                bits: header.bits,
                max_bits: self.max_bits,
            });
        }
        Ok(())
    }
}

/// Ordered validators, run in registration order until the first failure.
#[derive(Default)]
pub struct ValidatorChain {
    validators: Vec<Box<dyn BlockValidator>>,
}

impl ValidatorChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a validator to the end of the chain.
    pub fn add<V: BlockValidator + 'static>(&mut self, validator: V) -> &mut Self {
        self.validators.push(Box::new(validator));
        self
    }

    /// Builder form of [`add`](Self::add).
    pub fn with<V: BlockValidator + 'static>(mut self, validator: V) -> Self {
        self.add(validator);
        self
    }

    pub fn len(&self) -> usize {
        self.validators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }
}

impl BlockValidator for ValidatorChain {
    fn validate(&self, header: &BlockHeader, previous: &BlockHeader) -> Result<(), ValidationError> {
        for validator in &self.validators {
            validator.validate(header, previous)?;
        }
        Ok(())
    }
}

impl core::fmt::Debug for ValidatorChain {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ValidatorChain")
            .field("len", &self.validators.len())
            .finish()
    }
}
