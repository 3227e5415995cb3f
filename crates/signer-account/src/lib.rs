//! Account management module for the Safe signer.
//!
//! This module provides the interface for signing accounts and the service
//! wrapper the orchestration layer talks to. An account turns a prepared
//! transaction record into a recoverable confirmation signature; it never
//! assembles records, sequences nonces or talks to the network. Every
//! signing call is stateless and independent, so concurrent signatures need
//! no coordination.

use alloy_primitives::{Address, B256};
use async_trait::async_trait;
use signer_types::{
	domain_separator, signing_digest, struct_hash, SafeTransaction, SignatureParts,
};
use thiserror::Error;

/// Re-export implementations
pub mod implementations {
	pub mod local;
}

/// Errors that can occur during signing operations.
#[derive(Debug, Error)]
pub enum AccountError {
	/// The supplied private key is not a valid scalar for the curve, or not
	/// 32 bytes at all. Fatal for the call; there is never a fallback key.
	#[error("Invalid key: {0}")]
	InvalidKey(String),
	/// A raw digest was not exactly 32 bytes. Correct wiring never produces
	/// this; treat it as an assertion failure, not a recoverable condition.
	#[error("Invalid digest length: expected 32 bytes, got {0}")]
	InvalidDigest(usize),
	/// The signing backend failed.
	#[error("Signing failed: {0}")]
	SigningFailed(String),
}

/// Trait defining the interface for signing accounts.
///
/// Implementations hold the key material; everything digest-shaped is
/// computed by the caller. Retrying a failed call is pointless: signing is
/// a pure function of key and digest, so the same inputs fail the same way.
#[async_trait]
pub trait AccountInterface: Send + Sync {
	/// Returns the owner address corresponding to the account's key.
	async fn address(&self) -> Result<Address, AccountError>;

	/// Signs a prepared 32-byte digest, returning split components with
	/// `v` in legacy 27/28 form.
	async fn sign_digest(&self, digest: B256) -> Result<SignatureParts, AccountError>;
}

/// Service that manages signing operations for one account.
///
/// This struct provides the high-level signing entry points, wrapping an
/// underlying account implementation.
pub struct AccountService {
	/// The underlying account implementation.
	implementation: Box<dyn AccountInterface>,
}

impl AccountService {
	/// Creates a new AccountService with the specified implementation.
	pub fn new(implementation: Box<dyn AccountInterface>) -> Self {
		Self { implementation }
	}

	/// Retrieves the owner address of the managed account.
	pub async fn get_address(&self) -> Result<Address, AccountError> {
		self.implementation.address().await
	}

	/// Signs a fully assembled transaction record for the given Safe.
	///
	/// Computes the domain separator for `(chain_id, safe_address)`, the
	/// struct hash of the record, combines both into the final digest and
	/// signs it.
	pub async fn sign_transaction(
		&self,
		chain_id: u64,
		safe_address: &Address,
		tx: &SafeTransaction,
	) -> Result<SignatureParts, AccountError> {
		let domain = domain_separator(chain_id, safe_address);
		let record = struct_hash(tx);
		let digest = signing_digest(&domain, &record);
		tracing::debug!(
			chain_id,
			safe = %safe_address,
			digest = %digest,
			"signing transaction digest"
		);
		self.implementation.sign_digest(digest).await
	}

	/// Signs a digest supplied as raw bytes, enforcing the 32-byte width.
	pub async fn sign_raw_digest(&self, digest: &[u8]) -> Result<SignatureParts, AccountError> {
		if digest.len() != 32 {
			return Err(AccountError::InvalidDigest(digest.len()));
		}
		self.implementation
			.sign_digest(B256::from_slice(digest))
			.await
	}
}

/// One-shot signing entry point.
///
/// Builds a local account from the supplied key material and signs the
/// record for the given Safe. Callers that sign repeatedly should build an
/// [`AccountService`] once instead.
pub async fn sign_transaction(
	chain_id: u64,
	key: &signer_types::SecretKey,
	safe_address: &Address,
	tx: &SafeTransaction,
) -> Result<SignatureParts, AccountError> {
	let service = implementations::local::create_account(key)?;
	service.sign_transaction(chain_id, safe_address, tx).await
}
