//! Zeroizing private key material.
//!
//! Owner keys reach the signer as hex strings, from configuration or from an
//! external secret store. `SecretKey` keeps that material out of logs and
//! debug output and zeroes it when dropped.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use zeroize::Zeroizing;

use alloy_primitives::{hex, B256};

use crate::utils::formatting::{without_0x_prefix, FormatError};

/// Private key material for a Safe owner account.
///
/// Wraps the hex-encoded 32-byte secret scalar, with or without a `0x`
/// prefix. Every textual surface is redacted: `Debug`, `Display` and
/// serialization never reveal the payload. The backing string is zeroed on
/// drop.
///
/// The raw scalar obtained from [`SecretKey::to_bytes`] is the caller's
/// responsibility: hold it only for the duration of the signing call.
#[derive(Clone)]
pub struct SecretKey(Zeroizing<String>);

impl SecretKey {
	/// Creates key material from an owned hex string.
	pub fn new(key_hex: String) -> Self {
		Self(Zeroizing::new(key_hex))
	}

	/// Decodes the payload into the raw 32-byte secret scalar.
	///
	/// Fails with a [`FormatError`] when the payload is not valid hex or
	/// does not decode to exactly 32 bytes. Whether those bytes form a
	/// valid curve scalar is decided by the signer, not here.
	pub fn to_bytes(&self) -> Result<B256, FormatError> {
		let decoded = Zeroizing::new(
			hex::decode(without_0x_prefix(&self.0))
				.map_err(|e| FormatError::InvalidHex(e.to_string()))?,
		);
		if decoded.len() != 32 {
			return Err(FormatError::InvalidKeyLength(decoded.len()));
		}
		Ok(B256::from_slice(&decoded))
	}

	/// Returns true if no key material was supplied.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl fmt::Debug for SecretKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "SecretKey(***REDACTED***)")
	}
}

impl fmt::Display for SecretKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "***REDACTED***")
	}
}

impl From<String> for SecretKey {
	fn from(key_hex: String) -> Self {
		Self::new(key_hex)
	}
}

impl From<&str> for SecretKey {
	fn from(key_hex: &str) -> Self {
		Self::new(key_hex.to_string())
	}
}

impl PartialEq for SecretKey {
	fn eq(&self, other: &Self) -> bool {
		self.0.as_str() == other.0.as_str()
	}
}

impl Eq for SecretKey {}

// Serialization always redacts; key material never round-trips outward.
impl Serialize for SecretKey {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.serialize_str("***REDACTED***")
	}
}

impl<'de> Deserialize<'de> for SecretKey {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		let key_hex = String::deserialize(deserializer)?;
		Ok(SecretKey::new(key_hex))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const KEY_HEX: &str = "4922baa2b29bc35f9e52877d5f9cb2f2b3ebcce3df56eb9fe346a6bfdbedbcd8";

	#[test]
	fn debug_and_display_are_redacted() {
		let key = SecretKey::from(KEY_HEX);
		assert_eq!(format!("{:?}", key), "SecretKey(***REDACTED***)");
		assert_eq!(format!("{}", key), "***REDACTED***");
	}

	#[test]
	fn serialization_is_redacted() {
		let key = SecretKey::from(KEY_HEX);
		let json = serde_json::to_string(&key).unwrap();
		assert!(!json.contains(KEY_HEX));
		assert!(json.contains("REDACTED"));
	}

	#[test]
	fn decodes_with_and_without_prefix() {
		let bare = SecretKey::from(KEY_HEX).to_bytes().unwrap();
		let prefixed = SecretKey::from(format!("0x{KEY_HEX}")).to_bytes().unwrap();
		assert_eq!(bare, prefixed);
		assert_eq!(bare.as_slice()[0], 0x49);
	}

	#[test]
	fn rejects_wrong_width() {
		let err = SecretKey::from("aabb").to_bytes().unwrap_err();
		assert_eq!(err, FormatError::InvalidKeyLength(2));
	}

	#[test]
	fn rejects_bad_hex() {
		let err = SecretKey::from("zz").to_bytes().unwrap_err();
		assert!(matches!(err, FormatError::InvalidHex(_)));
	}
}
