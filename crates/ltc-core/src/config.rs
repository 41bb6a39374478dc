//! Proof-of-work configuration and validator wiring.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::hash::{ScryptHasher, ScryptParams};
use crate::network::Network;
use crate::validator::{DigestOrder, MaxTargetValidator, ProofOfWorkValidator, ValidatorChain};

/// Settings chosen once when the host engine is constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PowConfig {
    pub network: Network,
    pub scrypt: ScryptParams,
    pub digest_order: DigestOrder,
    /// Reject headers whose `bits` exceed the network's maximum target.
    pub enforce_max_target: bool,
}

impl Default for PowConfig {
    fn default() -> Self {
        PowConfig {
            network: Network::Mainnet,
            scrypt: ScryptParams::LITECOIN,
            digest_order: DigestOrder::BigEndian,
            enforce_max_target: true,
        }
    }
}

impl PowConfig {
    /// Default settings for a network.
    pub fn for_network(network: Network) -> Self {
        PowConfig {
            network,
            ..Self::default()
        }
    }

    /// Parse a JSON config document. Missing fields take their defaults.
    #[cfg(feature = "std")]
    pub fn from_json(s: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(s).map_err(|e| ConfigError::Parse(alloc::format!("{}", e)))
    }

    /// Build the configured PoW validator.
    pub fn pow_validator(&self) -> Result<ProofOfWorkValidator, ConfigError> {
        let hasher = ScryptHasher::new(self.scrypt)?;
        Ok(ProofOfWorkValidator::new(hasher).with_digest_order(self.digest_order))
    }

    /// Build the validator chain: max-target check (if enabled), then PoW.
    pub fn validator_chain(&self) -> Result<ValidatorChain, ConfigError> {
        let mut chain = ValidatorChain::new();
        if self.enforce_max_target {
            let max_bits = self.network.descriptor().maximum_target_compact;
            chain.add(MaxTargetValidator::new(max_bits));
        }
        chain.add(self.pow_validator()?);
        log::debug!(
            "Built {} validator chain with {} validators",
            self.network,
            chain.len()
        );
        Ok(chain)
    }
}
