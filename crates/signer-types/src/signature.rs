//! Recoverable signature representation.
//!
//! A confirmation signature travels in two equivalent forms: split
//! `(v, r, s)` components, which the Safe contracts and transaction service
//! consume, and the compact 65-byte `r || s || v` blob. `v` uses the legacy
//! 27/28 convention.

use alloy_primitives::{Signature, B256, U256};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::transaction::SafeTransaction;

/// Errors for malformed raw signature blobs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SignatureError {
	/// The raw blob is not exactly 65 bytes. Reaching this indicates a bug
	/// at the encoder/signer boundary rather than a recoverable condition.
	#[error("invalid signature length: expected 65 bytes, got {0}")]
	InvalidLength(usize),
}

/// An ECDSA signature split into its recoverable components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureParts {
	/// Recovery id plus 27.
	pub v: u8,
	pub r: B256,
	pub s: B256,
}

impl SignatureParts {
	/// Splits a raw 65-byte `r || s || v` blob into its components.
	pub fn from_raw(raw: &[u8]) -> Result<Self, SignatureError> {
		if raw.len() != 65 {
			return Err(SignatureError::InvalidLength(raw.len()));
		}
		Ok(Self {
			v: raw[64],
			r: B256::from_slice(&raw[..32]),
			s: B256::from_slice(&raw[32..64]),
		})
	}

	/// Serializes back to the 65-byte `r || s || v` wire form.
	pub fn to_raw(&self) -> [u8; 65] {
		let mut raw = [0u8; 65];
		raw[..32].copy_from_slice(self.r.as_slice());
		raw[32..64].copy_from_slice(self.s.as_slice());
		raw[64] = self.v;
		raw
	}
}

impl From<Signature> for SignatureParts {
	fn from(signature: Signature) -> Self {
		Self {
			v: 27 + signature.v() as u8,
			r: B256::from(signature.r().to_be_bytes::<32>()),
			s: B256::from(signature.s().to_be_bytes::<32>()),
		}
	}
}

impl From<SignatureParts> for Signature {
	fn from(parts: SignatureParts) -> Self {
		Signature::new(
			U256::from_be_bytes(parts.r.0),
			U256::from_be_bytes(parts.s.0),
			matches!(parts.v, 1 | 28),
		)
	}
}

/// A transaction together with its confirmation signature: the payload an
/// orchestration layer submits to the Safe transaction service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedSafeTransaction {
	#[serde(flatten)]
	pub transaction: SafeTransaction,
	#[serde(flatten)]
	pub signature: SignatureParts,
}
