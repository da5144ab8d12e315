use crate::consts::CT_TEXT;
use crate::link::LinkStore;
use crate::Result;
use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;

pub struct SBucket {
	pub client: Client,
	pub name: String,
}

impl SBucket {
	/// Constructor
	pub fn from_client_and_name(client: Client, name: String) -> SBucket {
		SBucket { client, name }
	}
}

impl SBucket {
	/// Returns false only on a NotFound head response. Other errors (access denied, network, ...) are returned.
	pub async fn exists(&self, key: &str) -> Result<bool> {
		let builder = self.client.head_object().key(key).bucket(&self.name);
		match builder.send().await {
			Ok(_) => Ok(true),
			Err(err) if err.as_service_error().is_some_and(|se| se.is_not_found()) => Ok(false),
			Err(err) => Err(err.into()),
		}
	}

	/// Put an empty object carrying only the website redirect location.
	pub async fn put_redirect(&self, key: &str, target: &str) -> Result<()> {
		// BUILD - aws s3 put request
		let builder = self
			.client
			.put_object()
			.key(key)
			.bucket(&self.name)
			.body(ByteStream::from_static(b""))
			.website_redirect_location(target)
			.content_type(CT_TEXT);

		// EXECUTE - aws request
		builder.send().await?;

		Ok(())
	}
}

#[async_trait]
impl LinkStore for SBucket {
	async fn exists(&self, key: &str) -> Result<bool> {
		SBucket::exists(self, key).await
	}

	async fn put_redirect(&self, key: &str, target: &str) -> Result<()> {
		SBucket::put_redirect(self, key, target).await
	}
}

// region:    --- Tests

#[cfg(test)]
#[path = "../_tests/test-sbucket.rs"]
mod tests;

// endregion: --- Tests
