use crate::config::LinkConfig;
use aws_config::BehaviorVersion;
use aws_sdk_s3::Client;
use aws_types::region::Region;
use aws_types::SdkConfig;
use tracing::debug;

/// Build the S3 client for the resolved config.
///
/// Credentials are left to the standard aws chain (env, shared config/credentials files, sso, imds).
/// When a profile is given, that profile is selected in the shared files.
/// The region always comes from the config (flag > `S3_REGION` > default).
pub async fn new_s3_client(config: &LinkConfig) -> Client {
	let sdk_config = load_sdk_config(config).await;
	Client::new(&sdk_config)
}

async fn load_sdk_config(config: &LinkConfig) -> SdkConfig {
	let mut loader = aws_config::defaults(BehaviorVersion::latest()).region(Region::new(config.region.clone()));

	if let Some(profile) = &config.profile {
		loader = loader.profile_name(profile);
	}

	debug!(region = %config.region, profile = ?config.profile, "loading aws config");

	loader.load().await
}
