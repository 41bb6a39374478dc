//! Header validation controller for JavaScript callers.

use ltc_core::{
    BlockHeader, DigestOrder, Network, PowConfig, ProofOfWorkValidator, ValidatorChain,
};
use wasm_bindgen::prelude::*;

use crate::state::ValidationReport;

/// Validates raw headers against one network's rules.
#[wasm_bindgen]
pub struct HeaderValidator {
    /// The network whose rules apply.
    network: Network,
    /// Max-target check followed by proof of work.
    chain: ValidatorChain,
    /// Standalone PoW validator for reporting the hash.
    pow: ProofOfWorkValidator,
}

#[wasm_bindgen]
impl HeaderValidator {
    /// Create a validator.
    ///
    /// # Arguments
    /// * `network` - "mainnet" or "testnet"
    /// * `digest_order` - "big_endian" (default) or "little_endian"
    #[wasm_bindgen(constructor)]
    pub fn new(network: &str, digest_order: Option<String>) -> Result<HeaderValidator, JsValue> {
        let network = Network::from_str(network)
            .ok_or_else(|| JsValue::from_str("Invalid network"))?;
        let digest_order = parse_digest_order(digest_order.as_deref())?;

        let config = PowConfig {
            digest_order,
            ..PowConfig::for_network(network)
        };
        let chain = config
            .validator_chain()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let pow = config
            .pow_validator()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::debug!("HeaderValidator ready for {}", network);
        Ok(HeaderValidator {
            network,
            chain,
            pow,
        })
    }

    /// Validate a header against its predecessor, both as 80-byte hex.
    #[wasm_bindgen]
    pub fn validate(&self, header_hex: &str, previous_hex: &str) -> Result<JsValue, JsValue> {
        let header = parse_header(header_hex)?;
        let previous = parse_header(previous_hex)?;

        let max_bits = self.network.descriptor().maximum_target_compact;
        ValidationReport::build(&self.chain, &self.pow, &header, &previous, max_bits).to_js()
    }

    /// Scrypt hash of a header in display hex.
    #[wasm_bindgen]
    pub fn pow_hash(&self, header_hex: &str) -> Result<String, JsValue> {
        let header = parse_header(header_hex)?;
        let digest = self
            .pow
            .pow_hash(&header)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(ltc_core::hash::hash_to_display_hex(&digest))
    }

    /// Get the network name.
    #[wasm_bindgen(getter)]
    pub fn network(&self) -> String {
        self.network.name().to_string()
    }
}

fn parse_header(header_hex: &str) -> Result<BlockHeader, JsValue> {
    BlockHeader::from_hex(header_hex).map_err(|e| JsValue::from_str(&format!("Invalid header: {}", e)))
}

fn parse_digest_order(s: Option<&str>) -> Result<DigestOrder, JsValue> {
    match s {
        None | Some("big_endian") => Ok(DigestOrder::BigEndian),
        Some("little_endian") => Ok(DigestOrder::LittleEndian),
        Some(other) => Err(JsValue::from_str(&format!("Invalid digest order: {}", other))),
    }
}
