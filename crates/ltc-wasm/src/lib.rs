//! WebAssembly bindings for Litecoin header validation.
//!
//! This crate provides JavaScript-accessible APIs for:
//! - Looking up per-network constants
//! - Validating raw block headers against Scrypt proof of work

use ltc_core::Network;
use wasm_bindgen::prelude::*;

pub mod state;
pub mod validator;

// Re-export main types for JS access
pub use state::ValidationReport;
pub use validator::HeaderValidator;

/// Initialize the WASM module with better panic messages.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Constants for a network ("mainnet" or "testnet") as a JS object.
#[wasm_bindgen]
pub fn describe_network(network: &str) -> Result<JsValue, JsValue> {
    let network = Network::from_str(network)
        .ok_or_else(|| JsValue::from_str("Invalid network"))?;
    serde_wasm_bindgen::to_value(network.descriptor())
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {:?}", e)))
}
