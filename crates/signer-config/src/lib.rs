//! Configuration module for the Safe signer.
//!
//! Loads signer configuration from a TOML file: one `[networks.<chain_id>]`
//! table per Safe deployment plus an `[account]` section carrying the owner
//! key reference. Values may reference environment variables as `${VAR}`
//! (with an optional `${VAR:-default}` fallback), which keeps secret
//! material out of the file itself.

use regex::Regex;
use serde::Deserialize;
use signer_types::{networks::deserialize_networks, NetworksConfig, SecretKey};
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur during configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error that occurs during file I/O operations.
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
	/// Error that occurs when parsing TOML configuration.
	#[error("Configuration error: {0}")]
	Parse(String),
	/// Error that occurs when configuration validation fails.
	#[error("Validation error: {0}")]
	Validation(String),
}

impl From<toml::de::Error> for ConfigError {
	fn from(err: toml::de::Error) -> Self {
		// Extract just the message without the huge input dump
		let message = err.message().to_string();
		ConfigError::Parse(message)
	}
}

/// Main configuration structure for the Safe signer.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
	/// Safe deployments keyed by chain id.
	#[serde(deserialize_with = "deserialize_networks")]
	pub networks: NetworksConfig,
	/// Configuration for the signing account.
	pub account: AccountConfig,
}

/// Configuration for the signing account.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountConfig {
	/// Hex-encoded owner private key. Reference it as `${SAFE_OWNER_KEY}`
	/// rather than writing key material into the file; the value is
	/// redacted in logs and zeroed on drop either way.
	pub private_key: SecretKey,
}

/// Replaces `${VAR}` and `${VAR:-default}` references with environment
/// variable values.
///
/// A reference without a default fails when the variable is unset: a
/// missing secret should stop startup, not produce an empty key.
pub(crate) fn resolve_env_vars(input: &str) -> Result<String, ConfigError> {
	// Limit input size to prevent ReDoS attacks
	const MAX_INPUT_SIZE: usize = 1024 * 1024; // 1MB
	if input.len() > MAX_INPUT_SIZE {
		return Err(ConfigError::Validation(format!(
			"Configuration file too large: {} bytes (max: {} bytes)",
			input.len(),
			MAX_INPUT_SIZE
		)));
	}

	let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]{0,127})(?::-([^}]{0,256}))?\}")
		.map_err(|e| ConfigError::Parse(format!("Regex error: {}", e)))?;

	let mut result = input.to_string();
	let mut replacements = Vec::new();

	for cap in re.captures_iter(input) {
		let full_match = match cap.get(0) {
			Some(m) => m,
			None => continue,
		};
		let var_name = match cap.get(1) {
			Some(m) => m.as_str(),
			None => continue,
		};
		let default_value = cap.get(2).map(|m| m.as_str());

		let value = match std::env::var(var_name) {
			Ok(v) => v,
			Err(_) => match default_value {
				Some(default) => default.to_string(),
				None => {
					return Err(ConfigError::Validation(format!(
						"Environment variable '{}' not found",
						var_name
					)))
				},
			},
		};

		replacements.push((full_match.start(), full_match.end(), value));
	}

	// Apply replacements in reverse order to maintain positions
	for (start, end, value) in replacements.iter().rev() {
		result.replace_range(*start..*end, value);
	}

	Ok(result)
}

impl Config {
	/// Loads and validates a configuration file.
	pub async fn from_file(path: &str) -> Result<Self, ConfigError> {
		let content = tokio::fs::read_to_string(Path::new(path)).await?;
		let config: Config = content.parse()?;
		tracing::info!(path, networks = config.networks.len(), "loaded signer config");
		Ok(config)
	}

	/// Validates the configuration to ensure all required fields are
	/// properly set: at least one network, complete endpoints and owner
	/// sets per network, and non-empty key material.
	fn validate(&self) -> Result<(), ConfigError> {
		if self.networks.is_empty() {
			return Err(ConfigError::Validation(
				"Networks configuration cannot be empty".into(),
			));
		}
		for (chain_id, network) in &self.networks {
			if network.rpc_url.is_empty() {
				return Err(ConfigError::Validation(format!(
					"Network {} must have rpc_url",
					chain_id
				)));
			}
			if network.service_url.is_empty() {
				return Err(ConfigError::Validation(format!(
					"Network {} must have service_url",
					chain_id
				)));
			}
			if network.owners.is_empty() {
				return Err(ConfigError::Validation(format!(
					"Network {} must configure at least one owner",
					chain_id
				)));
			}
		}
		if self.account.private_key.is_empty() {
			return Err(ConfigError::Validation(
				"Account private key cannot be empty".into(),
			));
		}
		Ok(())
	}
}

impl FromStr for Config {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let resolved = resolve_env_vars(s)?;
		let config: Config = toml::from_str(&resolved)?;
		config.validate()?;
		Ok(config)
	}
}
