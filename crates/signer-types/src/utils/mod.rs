//! Encoding and formatting utilities shared across the signer.
//!
//! `eip712` holds the hashing pipeline that turns a transaction record into
//! a signable digest; `formatting` holds the hex boundary helpers.

pub mod eip712;
pub mod formatting;

pub use eip712::{
	domain_separator, signing_digest, struct_hash, SlotEncoder, DOMAIN_TYPE, SAFE_TX_TYPE,
};
pub use formatting::{parse_address, without_0x_prefix, FormatError};
