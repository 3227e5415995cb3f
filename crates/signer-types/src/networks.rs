//! Network and Safe deployment configuration types.
//!
//! One entry per chain: where to reach the chain, which Safe to sign for,
//! who its owners are, and which transaction service coordinates
//! confirmations. The signing core itself never talks to any of these
//! endpoints; they are carried for the orchestration layer that does.

use alloy_primitives::Address;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// Configuration for one Safe deployment on one network.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NetworkConfig {
	/// HTTP(S) RPC endpoint for the chain.
	pub rpc_url: String,
	/// Address of the Safe proxy. This is the verifying contract every
	/// signature is domain-bound to.
	pub safe_address: Address,
	/// Owner accounts allowed to confirm transactions for this Safe.
	pub owners: Vec<Address>,
	/// Base URL of the Safe transaction service for this chain.
	pub service_url: String,
}

/// Networks configuration mapping chain IDs to their configurations.
pub type NetworksConfig = HashMap<u64, NetworkConfig>;

/// Deserializes network configurations keyed by chain id.
///
/// TOML tables cannot use numeric keys, so chain ids arrive as strings and
/// are parsed into the u64 keys used everywhere else.
pub fn deserialize_networks<'de, D>(deserializer: D) -> Result<NetworksConfig, D::Error>
where
	D: Deserializer<'de>,
{
	let string_map: HashMap<String, NetworkConfig> = HashMap::deserialize(deserializer)?;
	let mut networks = HashMap::new();

	for (key, value) in string_map {
		let chain_id = key
			.parse::<u64>()
			.map_err(|e| serde::de::Error::custom(format!("Invalid chain_id '{}': {}", key, e)))?;
		networks.insert(chain_id, value);
	}

	Ok(networks)
}
