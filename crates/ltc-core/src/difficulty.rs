//! Compact "bits" target encoding and difficulty utilities.
//!
//! The bits format is `[exponent (1 byte)][mantissa (3 bytes)]` with
//! `target = mantissa * 256^(exponent - 3)`. Bit 23 of the mantissa is a sign
//! flag; a target with it set is negative and therefore invalid.

use alloc::string::String;
use alloc::vec::Vec;

use num_bigint::BigUint;

/// Largest meaningful target width.
const TARGET_BITS: u64 = 256;

const SIGN_BIT: u32 = 0x0080_0000;
const MANTISSA_MASK: u32 = 0x007F_FFFF;

/// Conversion between compact bits and full-width targets.
///
/// The host chain engine normally provides this; [`CompactCodec`] is the
/// standard Bitcoin-family encoding.
pub trait CompactTargetCodec: Send + Sync {
    /// Decode compact bits. `None` marks an invalid encoding (negative or
    /// wider than 256 bits).
    fn decode(&self, bits: u32) -> Option<BigUint>;

    /// Encode a target in compact form, never setting the sign bit.
    fn encode(&self, target: &BigUint) -> u32;
}

/// Bitcoin-family compact target codec.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompactCodec;

impl CompactTargetCodec for CompactCodec {
    fn decode(&self, bits: u32) -> Option<BigUint> {
        bits_to_target(bits)
    }

    fn encode(&self, target: &BigUint) -> u32 {
        target_to_bits(target)
    }
}

/// Convert compact bits to a target.
pub fn bits_to_target(bits: u32) -> Option<BigUint> {
    if bits & SIGN_BIT != 0 {
        return None;
    }

    let exponent = bits >> 24;
    let mantissa = BigUint::from(bits & MANTISSA_MASK);

    let target = if exponent <= 3 {
        mantissa >> (8 * (3 - exponent))
    } else {
        mantissa << (8 * (exponent - 3))
    };

    if target.bits() > TARGET_BITS {
        return None;
    }
    Some(target)
}

/// Convert a target back to compact bits.
///
/// This is the inverse of [`bits_to_target`] for any target the encoding can
/// represent exactly.
pub fn target_to_bits(target: &BigUint) -> u32 {
    let mut size = ((target.bits() + 7) / 8) as u32;

    let mut compact = if size <= 3 {
        low_u32(target) << (8 * (3 - size))
    } else {
        low_u32(&(target >> (8 * (size - 3))))
    };

    // Shift the mantissa down a byte rather than set the sign flag.
    if compact & SIGN_BIT != 0 {
        compact >>= 8;
        size += 1;
    }

    (size << 24) | (compact & MANTISSA_MASK)
}

fn low_u32(value: &BigUint) -> u32 {
    value.to_u32_digits().first().copied().unwrap_or(0)
}

/// Big-endian 32-byte form of a target, or `None` if it does not fit.
pub fn target_to_bytes(target: &BigUint) -> Option<[u8; 32]> {
    let bytes = target.to_bytes_be();
    if bytes.len() > 32 {
        return None;
    }
    let mut out = [0u8; 32];
    out[32 - bytes.len()..].copy_from_slice(&bytes);
    Some(out)
}

/// Check a hash value against a target.
///
/// Strict: a value equal to the target fails, and a zero target admits
/// nothing.
#[inline]
pub fn meets_target(value: &BigUint, target: &BigUint) -> bool {
    value < target
}

/// Calculate difficulty relative to the easiest allowed target.
///
/// Difficulty = max_target / current_target
pub fn bits_to_difficulty(bits: u32, max_bits: u32) -> f64 {
    let (current, max) = match (bits_to_target(bits), bits_to_target(max_bits)) {
        (Some(current), Some(max)) => (current, max),
        _ => return 0.0,
    };

    let current_f64 = biguint_to_f64(&current);
    if current_f64 == 0.0 {
        return f64::INFINITY;
    }

    biguint_to_f64(&max) / current_f64
}

/// Approximate a target as an f64.
fn biguint_to_f64(value: &BigUint) -> f64 {
    let digits: Vec<u32> = value.to_u32_digits();
    digits
        .iter()
        .rev()
        .fold(0.0, |acc, digit| acc * 4_294_967_296.0 + *digit as f64)
}

/// Format difficulty for display (e.g., "1.23K" for thousand).
pub fn format_difficulty(difficulty: f64) -> String {
    if difficulty >= 1e15 {
        alloc::format!("{:.2}P", difficulty / 1e15)
    } else if difficulty >= 1e12 {
        alloc::format!("{:.2}T", difficulty / 1e12)
    } else if difficulty >= 1e9 {
        alloc::format!("{:.2}G", difficulty / 1e9)
    } else if difficulty >= 1e6 {
        alloc::format!("{:.2}M", difficulty / 1e6)
    } else if difficulty >= 1e3 {
        alloc::format!("{:.2}K", difficulty / 1e3)
    } else {
        alloc::format!("{:.2}", difficulty)
    }
}
