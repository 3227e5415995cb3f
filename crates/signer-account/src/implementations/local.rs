//! In-process signing account backed by a raw private key.

use alloy_primitives::{Address, B256};
use alloy_signer::SignerSync;
use alloy_signer_local::PrivateKeySigner;
use async_trait::async_trait;
use signer_types::{SecretKey, SignatureParts};

use crate::{AccountError, AccountInterface, AccountService};

/// Signing account holding its key in process memory.
///
/// Signing is ECDSA over secp256k1 with RFC 6979 deterministic nonces:
/// identical digests yield identical signatures, which keeps the pipeline
/// reproducible without weakening the key. k256 emits low-s signatures, the
/// same form the Safe contracts receive from every other signer; no further
/// normalization happens here.
#[derive(Debug)]
pub struct LocalAccount {
	signer: PrivateKeySigner,
}

impl LocalAccount {
	/// Builds the account from injected key material.
	///
	/// Fails with [`AccountError::InvalidKey`] when the material is not 32
	/// bytes of hex or is not a valid scalar in the curve's group order.
	pub fn new(key: &SecretKey) -> Result<Self, AccountError> {
		let scalar = key
			.to_bytes()
			.map_err(|e| AccountError::InvalidKey(e.to_string()))?;
		let signer = PrivateKeySigner::from_bytes(&scalar)
			.map_err(|e| AccountError::InvalidKey(e.to_string()))?;
		Ok(Self { signer })
	}
}

#[async_trait]
impl AccountInterface for LocalAccount {
	async fn address(&self) -> Result<Address, AccountError> {
		Ok(self.signer.address())
	}

	async fn sign_digest(&self, digest: B256) -> Result<SignatureParts, AccountError> {
		let signature = self
			.signer
			.sign_hash_sync(&digest)
			.map_err(|e| AccountError::SigningFailed(e.to_string()))?;
		Ok(SignatureParts::from(signature))
	}
}

/// Creates an [`AccountService`] for a locally held key.
pub fn create_account(key: &SecretKey) -> Result<AccountService, AccountError> {
	Ok(AccountService::new(Box::new(LocalAccount::new(key)?)))
}

#[cfg(test)]
mod tests {
	use super::*;
	use alloy_primitives::{address, b256, Bytes, Signature, U256};
	use signer_types::{Operation, SafeTransaction};

	// Throwaway test scalars; their addresses are the classic vanity values
	// derived from keys 1 and 2.
	const KEY_ONE: &str = "0000000000000000000000000000000000000000000000000000000000000001";
	const KEY_TWO: &str = "0000000000000000000000000000000000000000000000000000000000000002";

	const FIXTURE_DIGEST: B256 =
		b256!("7607b3901c476a309b98b4d5e7e6af14372bb45b7bce3c31371a19e13e70c68a");

	fn fixture_tx() -> SafeTransaction {
		SafeTransaction {
			to: address!("0000000000000000000000000000000000000002"),
			value: U256::ZERO,
			data: Bytes::new(),
			operation: Operation::Call,
			safe_tx_gas: U256::ZERO,
			base_gas: U256::ZERO,
			gas_price: U256::ZERO,
			gas_token: Address::ZERO,
			refund_receiver: Address::ZERO,
			nonce: U256::ZERO,
		}
	}

	#[tokio::test]
	async fn derives_the_owner_address() {
		let account = LocalAccount::new(&SecretKey::from(KEY_ONE)).unwrap();
		assert_eq!(
			account.address().await.unwrap(),
			address!("7E5F4552091A69125d5DfCb7b8C2659029395Bdf")
		);
	}

	#[tokio::test]
	async fn signs_the_fixture_digest_deterministically() {
		let account = LocalAccount::new(&SecretKey::from(KEY_ONE)).unwrap();
		let parts = account.sign_digest(FIXTURE_DIGEST).await.unwrap();
		assert_eq!(parts.v, 27);
		assert_eq!(
			parts.r,
			b256!("aaa83356ca08574fc37cf1062451c931a6f2d67f928cf9b02f8be1ae1b7398cf")
		);
		assert_eq!(
			parts.s,
			b256!("196a41d0a6f41430665090f236fcb49416cf02a08d8876e1a8db1aad18068c70")
		);

		// Same digest, same key, same signature.
		let again = account.sign_digest(FIXTURE_DIGEST).await.unwrap();
		assert_eq!(again, parts);
	}

	#[tokio::test]
	async fn end_to_end_pipeline_matches_fixture() {
		let service = create_account(&SecretKey::from(KEY_TWO)).unwrap();
		let safe = address!("0000000000000000000000000000000000000001");
		let parts = service
			.sign_transaction(5, &safe, &fixture_tx())
			.await
			.unwrap();
		assert_eq!(parts.v, 28);
		assert_eq!(
			parts.r,
			b256!("eb1298b57c118700be1fe0e5c881dca3781ba2948e326e7ff19db6aaf47e0620")
		);
		assert_eq!(
			parts.s,
			b256!("2ceb779caf9ba8135f9468f5402bdd81728a12dbcb128ee4a7eff062710d7fcc")
		);
	}

	#[tokio::test]
	async fn signatures_recover_to_the_owner() {
		let account = LocalAccount::new(&SecretKey::from(KEY_TWO)).unwrap();
		let owner = account.address().await.unwrap();
		let parts = account.sign_digest(FIXTURE_DIGEST).await.unwrap();
		let recovered = Signature::from(parts)
			.recover_address_from_prehash(&FIXTURE_DIGEST)
			.unwrap();
		assert_eq!(recovered, owner);
	}

	#[tokio::test]
	async fn rejects_key_of_wrong_width() {
		let err = LocalAccount::new(&SecretKey::from("aabb")).unwrap_err();
		assert!(matches!(err, AccountError::InvalidKey(_)));
	}

	#[tokio::test]
	async fn rejects_scalar_outside_the_group_order() {
		// The curve order itself is not a usable scalar; neither is zero.
		let order = "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141";
		assert!(matches!(
			LocalAccount::new(&SecretKey::from(order)).unwrap_err(),
			AccountError::InvalidKey(_)
		));
		let zero = "0000000000000000000000000000000000000000000000000000000000000000";
		assert!(matches!(
			LocalAccount::new(&SecretKey::from(zero)).unwrap_err(),
			AccountError::InvalidKey(_)
		));
	}

	#[tokio::test]
	async fn one_shot_entry_point_matches_the_service() {
		let safe = address!("0000000000000000000000000000000000000001");
		let key = SecretKey::from(KEY_TWO);
		let one_shot = crate::sign_transaction(5, &key, &safe, &fixture_tx())
			.await
			.unwrap();
		let service = create_account(&key).unwrap();
		let via_service = service
			.sign_transaction(5, &safe, &fixture_tx())
			.await
			.unwrap();
		assert_eq!(one_shot, via_service);
	}

	#[tokio::test]
	async fn raw_digest_width_is_enforced() {
		let service = create_account(&SecretKey::from(KEY_ONE)).unwrap();
		let err = service.sign_raw_digest(&[0u8; 31]).await.unwrap_err();
		assert!(matches!(err, AccountError::InvalidDigest(31)));

		let parts = service
			.sign_raw_digest(FIXTURE_DIGEST.as_slice())
			.await
			.unwrap();
		assert!(parts.v == 27 || parts.v == 28);
	}
}
