//! Validation utilities
//!
//! Explicit parse-then-validate helpers for number-like text and account
//! addresses, plus a shallow equality check for key-value records.

use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};
use std::str::FromStr;

use alloy_primitives::Address;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

use crate::error::Error;

static ADDRESS_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(0x)?[0-9a-f]{40}$").expect("address pattern is a valid regex"));

/// Parse number-like text into a finite `f64`
pub fn parse_number(value: &str) -> Result<f64, Error> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidNumber(value.to_string()));
    }

    match trimmed.parse::<f64>() {
        Ok(number) if number.is_finite() => Ok(number),
        _ => Err(Error::InvalidNumber(value.to_string())),
    }
}

/// Normalize an address to its EIP-55 checksummed form.
///
/// The input is lower-cased first, so any casing is accepted; the `0x`
/// prefix is optional.
pub fn checksum_address(value: &str) -> Result<String, Error> {
    let lowered = value.to_lowercase();
    if !ADDRESS_PATTERN.is_match(&lowered) {
        return Err(Error::InvalidAddress(value.to_string()));
    }

    let digits = lowered.strip_prefix("0x").unwrap_or(&lowered);
    let address = Address::from_str(&format!("0x{}", digits))
        .map_err(|_| Error::InvalidAddress(value.to_string()))?;
    Ok(address.to_checksum(None))
}

/// Checksummed address, or `None` when the input is not an address
pub fn is_address(value: &str) -> Option<String> {
    checksum_address(value).ok()
}

/// Shallow equality of two records.
///
/// Records with a different number of keys are never equal; otherwise each
/// value is compared with `V`'s own `PartialEq` and nothing deeper.
pub fn is_equivalent<K, V, S>(a: &HashMap<K, V, S>, b: &HashMap<K, V, S>) -> bool
where
    K: Eq + Hash,
    V: PartialEq,
    S: BuildHasher,
{
    if a.len() != b.len() {
        return false;
    }
    a.iter().all(|(key, value)| b.get(key) == Some(value))
}

/// Shallow equality of two JSON objects.
///
/// Scalars compare by value. Nested arrays and objects only match when both
/// sides are the very same value in memory; their contents are not compared.
pub fn is_equivalent_json(a: &Map<String, Value>, b: &Map<String, Value>) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().all(|(key, value)| match (value, b.get(key)) {
        (Value::Array(_) | Value::Object(_), Some(other)) => std::ptr::eq(value, other),
        (_, Some(other)) => value == other,
        (_, None) => false,
    })
}
