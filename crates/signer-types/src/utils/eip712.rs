//! EIP-712 hashing for Safe transactions.
//!
//! Implements the typed-data scheme the Safe contracts verify: a domain
//! separator binding signatures to one chain and one Safe, a struct hash
//! over the `SafeTx` record, and the final `0x19 0x01` digest. Everything
//! here is a pure function of its inputs; the same record, chain id and
//! Safe address always produce the same digest.

use alloy_primitives::{keccak256, Address, B256, U256};

use crate::transaction::SafeTransaction;

/// Canonical domain type string.
///
/// The Safe scheme binds signatures to `(chainId, verifyingContract)` only;
/// the `name` and `version` fields of the full four-field EIP-712 domain are
/// absent, which narrows replay protection to chain and contract. Adding the
/// missing fields would change every separator deployed verifiers expect, so
/// the two-field form is kept as-is.
///
/// `keccak256(DOMAIN_TYPE)` =
/// `0x47e79534a245952e8b16893a336b85a3d9ea9fa8c573f3d803afb92a79469218`.
pub const DOMAIN_TYPE: &str = "EIP712Domain(uint256 chainId,address verifyingContract)";

/// Canonical `SafeTx` type string.
///
/// Field order is the schema identity: reordering, renaming or dropping a
/// field yields a different type hash and therefore a different schema
/// version, never a fix to this one.
///
/// `keccak256(SAFE_TX_TYPE)` =
/// `0xbb8310d486368db6bd6f849402fdd73ad53d316b5a4b2644ad6efe0f941286d8`.
pub const SAFE_TX_TYPE: &str = "SafeTx(address to,uint256 value,bytes data,uint8 operation,uint256 safeTxGas,uint256 baseGas,uint256 gasPrice,address gasToken,address refundReceiver,uint256 nonce)";

/// Encoder for the static EIP-712 slot layout: every value occupies one
/// 32-byte slot, numbers big-endian, addresses left-zero-padded.
pub struct SlotEncoder {
	buf: Vec<u8>,
}

impl SlotEncoder {
	/// Creates an encoder sized for `slots` 32-byte words.
	pub fn with_slots(slots: usize) -> Self {
		Self {
			buf: Vec::with_capacity(slots * 32),
		}
	}

	pub fn push_b256(&mut self, value: &B256) {
		self.buf.extend_from_slice(value.as_slice());
	}

	pub fn push_address(&mut self, address: &Address) {
		let mut word = [0u8; 32];
		word[12..].copy_from_slice(address.as_slice());
		self.buf.extend_from_slice(&word);
	}

	pub fn push_u256(&mut self, value: U256) {
		self.buf.extend_from_slice(&value.to_be_bytes::<32>());
	}

	/// `uint8` is not packed under this scheme; it still occupies a full
	/// slot.
	pub fn push_u8(&mut self, value: u8) {
		let mut word = [0u8; 32];
		word[31] = value;
		self.buf.extend_from_slice(&word);
	}

	pub fn finish(self) -> Vec<u8> {
		self.buf
	}
}

/// Computes the domain separator for a Safe deployment:
/// `keccak256(typeHash(DOMAIN_TYPE) || u256(chainId) || pad32(safe))`.
pub fn domain_separator(chain_id: u64, verifying_contract: &Address) -> B256 {
	let domain_type_hash = keccak256(DOMAIN_TYPE.as_bytes());
	let mut enc = SlotEncoder::with_slots(3);
	enc.push_b256(&domain_type_hash);
	enc.push_u256(U256::from(chain_id));
	enc.push_address(verifying_contract);
	keccak256(enc.finish())
}

/// Computes the struct hash of a transaction record.
///
/// Eleven static slots: the type hash followed by every field in
/// declaration order. The dynamic `data` field contributes
/// `keccak256(data)`, never the raw bytes; inlining or zero-padding them
/// would produce a digest the Safe silently rejects.
pub fn struct_hash(tx: &SafeTransaction) -> B256 {
	let safe_tx_type_hash = keccak256(SAFE_TX_TYPE.as_bytes());
	let mut enc = SlotEncoder::with_slots(11);
	enc.push_b256(&safe_tx_type_hash);
	enc.push_address(&tx.to);
	enc.push_u256(tx.value);
	enc.push_b256(&keccak256(&tx.data));
	enc.push_u8(tx.operation.into());
	enc.push_u256(tx.safe_tx_gas);
	enc.push_u256(tx.base_gas);
	enc.push_u256(tx.gas_price);
	enc.push_address(&tx.gas_token);
	enc.push_address(&tx.refund_receiver);
	enc.push_u256(tx.nonce);
	keccak256(enc.finish())
}

/// Computes the digest that is actually signed:
/// `keccak256(0x19 || 0x01 || domainSeparator || structHash)`.
pub fn signing_digest(domain_separator: &B256, struct_hash: &B256) -> B256 {
	let mut preimage = Vec::with_capacity(2 + 32 + 32);
	preimage.push(0x19);
	preimage.push(0x01);
	preimage.extend_from_slice(domain_separator.as_slice());
	preimage.extend_from_slice(struct_hash.as_slice());
	keccak256(preimage)
}
