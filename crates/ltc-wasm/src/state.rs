//! Serializable results handed back to JavaScript.

use ltc_core::difficulty::{bits_to_difficulty, bits_to_target, format_difficulty, target_to_bytes};
use ltc_core::hash::hash_to_display_hex;
use ltc_core::{BlockHeader, BlockValidator, PowHasher, ProofOfWorkValidator};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// Outcome of validating one header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Whether every validator accepted the header.
    pub valid: bool,
    /// Scrypt hash (display format), if it could be computed.
    pub pow_hash: Option<String>,
    /// SHA256d block identifier (display format).
    pub block_hash: String,
    /// Declared target as 64 hex chars, if `bits` decode.
    pub target: Option<String>,
    /// Difficulty relative to the network maximum.
    pub difficulty: f64,
    /// Formatted difficulty string.
    pub difficulty_display: String,
    /// Rejection reason.
    pub error: Option<String>,
}

impl ValidationReport {
    /// Run `chain` over a header and collect display data.
    pub fn build<H: PowHasher>(
        chain: &dyn BlockValidator,
        pow: &ProofOfWorkValidator<H>,
        header: &BlockHeader,
        previous: &BlockHeader,
        max_bits: u32,
    ) -> Self {
        let verdict = chain.validate(header, previous);
        let difficulty = bits_to_difficulty(header.bits, max_bits);

        ValidationReport {
            valid: verdict.is_ok(),
            pow_hash: pow
                .pow_hash(header)
                .ok()
                .map(|digest| hash_to_display_hex(&digest)),
            block_hash: header.block_hash_hex(),
            target: bits_to_target(header.bits)
                .as_ref()
                .and_then(target_to_bytes)
                .map(hex::encode),
            difficulty,
            difficulty_display: format_difficulty(difficulty),
            error: verdict.err().map(|e| e.to_string()),
        }
    }

    /// Convert to JS value.
    pub fn to_js(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {:?}", e)))
    }
}
