//! Browser tests for the JS-facing API.

#![cfg(target_arch = "wasm32")]

use ltc_wasm::{describe_network, HeaderValidator, ValidationReport};
use wasm_bindgen_test::*;

const GENESIS_HEX: &str = "01000000\
0000000000000000000000000000000000000000000000000000000000000000\
d9ced4ed1130f7b7faad9be25323ffafa33232a17c3edf6cfd97bee6bafbdd97\
b9aa8e4e\
f0ff0f1e\
cd513f7c";

#[wasm_bindgen_test]
fn describe_known_network() {
    assert!(describe_network("mainnet").is_ok());
    assert!(describe_network("regtest").is_err());
}

#[wasm_bindgen_test]
fn genesis_validates_in_chain_byte_order() {
    let validator = HeaderValidator::new("mainnet", Some("little_endian".to_string())).unwrap();
    let report = validator.validate(GENESIS_HEX, GENESIS_HEX).unwrap();
    let report: ValidationReport = serde_wasm_bindgen::from_value(report).unwrap();

    assert!(report.valid);
    assert_eq!(
        report.block_hash,
        "12a765e31ffd4059bada1e25190f6e98c99d9714d334efa41a195a7e7e04bfe2"
    );
}

#[wasm_bindgen_test]
fn rejects_malformed_header() {
    let validator = HeaderValidator::new("mainnet", None).unwrap();
    assert!(validator.validate("00", GENESIS_HEX).is_err());
    assert!(HeaderValidator::new("mainnet", Some("middle".to_string())).is_err());
}
