//! AWS API Wrapper

// region:    --- Modules

// -- Sub-modules

mod sbucket;
mod support;

// -- Re-exports
pub use self::cred::new_s3_client;
pub use self::sbucket::SBucket;
pub use self::support::OverMode;

pub mod cred;

// -- Imports
use crate::config::LinkConfig;

// endregion: --- Modules

// region:    --- SBucket factory

pub async fn get_sbucket(config: &LinkConfig) -> SBucket {
	let client = new_s3_client(config).await;
	SBucket::from_client_and_name(client, config.bucket.clone())
}

// endregion: --- SBucket factory
