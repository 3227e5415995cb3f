//! Hex formatting and parsing helpers.
//!
//! The signing core works on fixed-width typed values; these helpers sit at
//! the boundary where addresses and keys arrive as hex strings and enforce
//! the width constraints before anything is encoded.

use alloy_primitives::{hex, Address};
use thiserror::Error;

/// Errors for values that violate the fixed-width formats of the signing
/// scheme. Always a caller bug; never retried.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
	/// The value is not valid hexadecimal.
	#[error("invalid hex: {0}")]
	InvalidHex(String),
	/// An address did not decode to exactly 20 bytes.
	#[error("invalid address length: expected 20 bytes, got {0}")]
	InvalidAddressLength(usize),
	/// A private key did not decode to exactly 32 bytes.
	#[error("invalid private key length: expected 32 bytes, got {0}")]
	InvalidKeyLength(usize),
	/// An operation discriminant outside `{0 = call, 1 = delegate-call}`.
	#[error("unknown operation: {0}")]
	UnknownOperation(u8),
}

/// Removes a "0x" or "0X" prefix from a hex string if present.
pub fn without_0x_prefix(hex_str: &str) -> &str {
	hex_str
		.strip_prefix("0x")
		.or_else(|| hex_str.strip_prefix("0X"))
		.unwrap_or(hex_str)
}

/// Parses a 20-byte address from a hex string, with or without prefix.
pub fn parse_address(address_hex: &str) -> Result<Address, FormatError> {
	let bytes = hex::decode(without_0x_prefix(address_hex))
		.map_err(|e| FormatError::InvalidHex(e.to_string()))?;
	if bytes.len() != 20 {
		return Err(FormatError::InvalidAddressLength(bytes.len()));
	}
	Ok(Address::from_slice(&bytes))
}

#[cfg(test)]
mod tests {
	use super::*;
	use alloy_primitives::address;

	#[test]
	fn prefix_stripping() {
		assert_eq!(without_0x_prefix("0xabc"), "abc");
		assert_eq!(without_0x_prefix("0Xabc"), "abc");
		assert_eq!(without_0x_prefix("abc"), "abc");
	}

	#[test]
	fn parses_addresses_in_both_forms() {
		let expected = address!("7a935d07d097146f143A45aA79FD8624353abD5D");
		assert_eq!(
			parse_address("0x7a935d07d097146f143A45aA79FD8624353abD5D").unwrap(),
			expected
		);
		assert_eq!(
			parse_address("7a935d07d097146f143A45aA79FD8624353abD5D").unwrap(),
			expected
		);
	}

	#[test]
	fn rejects_wrong_address_width() {
		let err = parse_address("0xaabbcc").unwrap_err();
		assert_eq!(err, FormatError::InvalidAddressLength(3));
	}

	#[test]
	fn rejects_non_hex_address() {
		assert!(matches!(
			parse_address("0xnothex").unwrap_err(),
			FormatError::InvalidHex(_)
		));
	}
}
