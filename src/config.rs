//! Invocation configuration, resolved once from flags > environment > defaults.

use crate::consts::{
	DEFAULT_BUCKET, DEFAULT_DOMAIN, DEFAULT_KEY_PREFIX, DEFAULT_REGION, ENV_BUCKET, ENV_KEY_PREFIX, ENV_REGION,
};
use std::env;

/// Values given on the command line. `None` means the flag was absent.
#[derive(Debug, Default, Clone)]
pub struct ConfigArgs {
	pub bucket: Option<String>,
	pub region: Option<String>,
	pub domain: Option<String>,
	pub prefix: Option<String>,
	pub profile: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkConfig {
	pub bucket: String,
	pub region: String,
	pub domain: String,
	pub prefix: String,
	pub profile: Option<String>,
}

impl LinkConfig {
	/// Resolve against the process environment.
	pub fn from_env(args: ConfigArgs) -> LinkConfig {
		Self::resolve(args, |name| env::var(name).ok())
	}

	/// Resolve with an explicit environment lookup.
	/// Empty environment values are treated as absent.
	pub fn resolve(args: ConfigArgs, env_lookup: impl Fn(&str) -> Option<String>) -> LinkConfig {
		let from_env = |name: &str, default: &str| env_lookup(name).filter(|v| !v.is_empty()).unwrap_or(default.to_string());

		let ConfigArgs {
			bucket,
			region,
			domain,
			prefix,
			profile,
		} = args;

		LinkConfig {
			bucket: bucket.unwrap_or_else(|| from_env(ENV_BUCKET, DEFAULT_BUCKET)),
			region: region.unwrap_or_else(|| from_env(ENV_REGION, DEFAULT_REGION)),
			domain: domain.unwrap_or_else(|| DEFAULT_DOMAIN.to_string()),
			prefix: prefix.unwrap_or_else(|| from_env(ENV_KEY_PREFIX, DEFAULT_KEY_PREFIX)),
			profile,
		}
	}
}

// region:    --- Tests

#[cfg(test)]
#[path = "_tests/test-config.rs"]
mod tests;

// endregion: --- Tests
