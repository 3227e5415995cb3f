//! Safe transaction types.
//!
//! Defines the transaction record that the signer hashes and signs. Every
//! field is explicit and required; there is no partial/override form, so a
//! zero `value` or a zero `nonce` is always encoded exactly as written.

use alloy_primitives::{Address, Bytes, U256};
use serde::{Deserialize, Serialize};

use crate::utils::formatting::FormatError;

/// How the Safe executes the inner call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Operation {
	/// Regular `CALL` to the target.
	Call = 0,
	/// `DELEGATECALL` into the target, executing in the Safe's context.
	DelegateCall = 1,
}

impl From<Operation> for u8 {
	fn from(operation: Operation) -> Self {
		operation as u8
	}
}

impl TryFrom<u8> for Operation {
	type Error = FormatError;

	fn try_from(value: u8) -> Result<Self, Self::Error> {
		match value {
			0 => Ok(Operation::Call),
			1 => Ok(Operation::DelegateCall),
			other => Err(FormatError::UnknownOperation(other)),
		}
	}
}

/// A single Safe transaction request, mirroring the `SafeTx` struct the
/// contract hashes.
///
/// Field declaration order matches the canonical type string in
/// [`crate::utils::eip712`]; reordering fields there is a schema change, not
/// a refactor. Wire names are camelCase, the form the surrounding Safe
/// tooling exchanges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafeTransaction {
	/// Call target.
	pub to: Address,
	/// Native currency amount, in wei.
	pub value: U256,
	/// Call payload. May be empty; it is hashed, never inlined, when the
	/// record is encoded.
	pub data: Bytes,
	pub operation: Operation,
	pub safe_tx_gas: U256,
	pub base_gas: U256,
	pub gas_price: U256,
	/// Token used for gas refunds; the zero address selects the native
	/// currency.
	pub gas_token: Address,
	/// Receiver of gas refunds; the zero address selects the execution
	/// origin.
	pub refund_receiver: Address,
	/// Sequential Safe nonce, assigned by the transaction service.
	pub nonce: U256,
}

#[cfg(test)]
mod tests {
	use super::*;
	use alloy_primitives::address;

	fn transfer_tx() -> SafeTransaction {
		SafeTransaction {
			to: address!("8a6AAe4B05601CDe4cecbb99941f724D7292867b"),
			value: U256::from(100_000_000_000_000u64),
			data: Bytes::new(),
			operation: Operation::Call,
			safe_tx_gas: U256::ZERO,
			base_gas: U256::ZERO,
			gas_price: U256::ZERO,
			gas_token: Address::ZERO,
			refund_receiver: Address::ZERO,
			nonce: U256::from(7),
		}
	}

	#[test]
	fn operation_round_trips_through_u8() {
		assert_eq!(u8::from(Operation::Call), 0);
		assert_eq!(u8::from(Operation::DelegateCall), 1);
		assert_eq!(Operation::try_from(0).unwrap(), Operation::Call);
		assert_eq!(Operation::try_from(1).unwrap(), Operation::DelegateCall);
	}

	#[test]
	fn operation_rejects_unknown_discriminant() {
		let err = Operation::try_from(2).unwrap_err();
		assert!(matches!(err, FormatError::UnknownOperation(2)));
	}

	#[test]
	fn operation_deserializes_from_integer() {
		let operation: Operation = serde_json::from_str("1").unwrap();
		assert_eq!(operation, Operation::DelegateCall);
		assert!(serde_json::from_str::<Operation>("3").is_err());
	}

	#[test]
	fn transaction_serializes_with_camel_case_keys() {
		let json = serde_json::to_value(transfer_tx()).unwrap();
		assert!(json.get("safeTxGas").is_some());
		assert!(json.get("refundReceiver").is_some());
		assert!(json.get("gasToken").is_some());
		assert_eq!(json.get("operation").unwrap(), 0);
	}

	#[test]
	fn transaction_round_trips_through_json() {
		let tx = transfer_tx();
		let json = serde_json::to_string(&tx).unwrap();
		let back: SafeTransaction = serde_json::from_str(&json).unwrap();
		assert_eq!(back, tx);
	}
}
