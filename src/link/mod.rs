//! Short link creation flow (storage agnostic)

// region:    --- Modules

mod id;

pub use self::id::{random_id, validate_key, validate_link};

use crate::config::LinkConfig;
use crate::prelude::f;
use crate::s3w::OverMode;
use crate::Result;
use async_trait::async_trait;
use tracing::{debug, info};

// endregion: --- Modules

/// Where the redirect objects live.
#[async_trait]
pub trait LinkStore {
	/// `Ok(false)` only when the store reports the key as not found. Any other failure is an error.
	async fn exists(&self, key: &str) -> Result<bool>;

	/// Write (or replace) the zero-byte redirect object at `key`.
	async fn put_redirect(&self, key: &str, target: &str) -> Result<()>;
}

#[derive(Debug, Clone)]
pub struct LinkRequest {
	pub link: String,
	pub name: Option<String>,
	pub over: OverMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
	Created { name: String, url: String },
	Replaced { name: String, url: String },
	/// Already there and not in write mode. Nothing was written.
	Skipped { name: String },
}

pub async fn add_link(store: &dyn LinkStore, config: &LinkConfig, req: LinkRequest) -> Result<AddOutcome> {
	let LinkRequest { link, name, over } = req;

	validate_link(&link)?;
	// An empty name is the same as no name.
	let name = name.filter(|n| !n.is_empty()).unwrap_or_else(random_id);

	let key = object_key(&config.prefix, &name);
	validate_key(&key)?;
	let exists = store.exists(&key).await?;
	debug!(%key, exists, "existence check");

	match (exists, over) {
		(true, OverMode::Skip) => Ok(AddOutcome::Skipped { name }),
		(exists, _) => {
			store.put_redirect(&key, &link).await?;
			info!(%key, %link, "redirect written");
			let url = short_url(&config.domain, &name);
			if exists {
				Ok(AddOutcome::Replaced { name, url })
			} else {
				Ok(AddOutcome::Created { name, url })
			}
		}
	}
}

// region:    --- Mod Utils

/// Object key for a short name, e.g., prefix `u` and name `abc` gives `u/abc`
pub fn object_key(prefix: &str, name: &str) -> String {
	let prefix = prefix.trim_end_matches('/');
	if prefix.is_empty() {
		name.to_string()
	} else {
		f!("{prefix}/{name}")
	}
}

pub fn short_url(domain: &str, name: &str) -> String {
	f!("https://{}/{name}", domain.trim_end_matches('/'))
}

// endregion: --- Mod Utils

// region:    --- Tests

#[cfg(test)]
#[path = "../_tests/test-link-add.rs"]
mod tests;

// endregion: --- Tests
