//! Common types for the Safe transaction signer.
//!
//! This crate defines the data types shared across the signer: the
//! transaction record that gets hashed and signed, signature
//! representations, zeroizing key material, network configuration, and the
//! EIP-712 encoding utilities that turn a record into a signable digest.

/// Network and Safe deployment configuration types.
pub mod networks;
/// Zeroizing private key material.
pub mod secret;
/// Recoverable signature representation and splitting.
pub mod signature;
/// The Safe transaction record and operation kind.
pub mod transaction;
/// EIP-712 encoding and hex formatting utilities.
pub mod utils;

// Re-export all types for convenient access
pub use networks::{NetworkConfig, NetworksConfig};
pub use secret::SecretKey;
pub use signature::{SignatureError, SignatureParts, SignedSafeTransaction};
pub use transaction::{Operation, SafeTransaction};
pub use utils::{
	domain_separator, parse_address, signing_digest, struct_hash, without_0x_prefix,
	FormatError, DOMAIN_TYPE, SAFE_TX_TYPE,
};
