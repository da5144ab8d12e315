use super::*;
use crate::_test_support::Result;
use aws_sdk_s3::config::{BehaviorVersion, Credentials, Region};
use aws_smithy_runtime::client::http::test_util::{ReplayEvent, StaticReplayClient};
use aws_smithy_runtime_api::client::orchestrator::{HttpRequest, HttpResponse};
use aws_smithy_runtime_api::http::StatusCode;
use aws_smithy_types::body::SdkBody;

const FX_BUCKET: &str = "test-short-bucket";

/// SBucket on a replay client answering each request, in order, with the given (status, body).
fn new_replay_sbucket(responses: &[(u16, &'static str)]) -> Result<(SBucket, StaticReplayClient)> {
	let mut events = Vec::new();
	for (status, body) in responses {
		// the expected request is not asserted, the actual requests are inspected instead
		let req = HttpRequest::new(SdkBody::empty());
		let res = HttpResponse::new(StatusCode::try_from(*status)?, SdkBody::from(*body));
		events.push(ReplayEvent::new(req, res));
	}
	let replay_client = StaticReplayClient::new(events);

	let config = aws_sdk_s3::Config::builder()
		.behavior_version(BehaviorVersion::latest())
		.credentials_provider(Credentials::new("test-key-id", "test-key-secret", None, None, "test"))
		.region(Region::new("us-east-1"))
		.http_client(replay_client.clone())
		.build();
	let client = Client::from_conf(config);

	Ok((SBucket::from_client_and_name(client, FX_BUCKET.to_string()), replay_client))
}

#[tokio::test]
async fn test_sbucket_exists_found() -> Result<()> {
	// -- Setup & Fixtures
	let (sbucket, replay_client) = new_replay_sbucket(&[(200, "")])?;

	// -- Exec
	let exists = sbucket.exists("u/docs").await?;

	// -- Check
	assert!(exists);
	let reqs: Vec<_> = replay_client.actual_requests().collect();
	assert_eq!(reqs.len(), 1);
	assert_eq!(reqs[0].method(), "HEAD");
	assert!(reqs[0].uri().ends_with("/u/docs"), "uri: {}", reqs[0].uri());

	Ok(())
}

#[tokio::test]
async fn test_sbucket_exists_not_found() -> Result<()> {
	// -- Setup & Fixtures
	// S3 HEAD errors have no body, a 404 is the NotFound
	let (sbucket, _replay_client) = new_replay_sbucket(&[(404, "")])?;

	// -- Exec
	let exists = sbucket.exists("u/docs").await?;

	// -- Check
	assert!(!exists);

	Ok(())
}

#[tokio::test]
async fn test_sbucket_exists_forbidden_is_error() -> Result<()> {
	// -- Setup & Fixtures
	let (sbucket, _replay_client) = new_replay_sbucket(&[(403, "")])?;

	// -- Exec
	let res = sbucket.exists("u/docs").await;

	// -- Check
	assert!(
		matches!(res, Err(crate::Error::AwsServiceError(..))),
		"403 should be an error, got {res:?}"
	);

	Ok(())
}

#[tokio::test]
async fn test_sbucket_put_redirect_request() -> Result<()> {
	// -- Setup & Fixtures
	let (sbucket, replay_client) = new_replay_sbucket(&[(200, "")])?;

	// -- Exec
	sbucket.put_redirect("u/docs", "https://example.com/some/long/path").await?;

	// -- Check
	let reqs: Vec<_> = replay_client.actual_requests().collect();
	assert_eq!(reqs.len(), 1);
	let req = reqs[0];
	assert_eq!(req.method(), "PUT");
	assert!(req.uri().ends_with("/u/docs"), "uri: {}", req.uri());
	assert_eq!(
		req.headers().get("x-amz-website-redirect-location"),
		Some("https://example.com/some/long/path")
	);
	assert_eq!(req.headers().get("content-type"), Some("text/plain; charset=UTF-8"));
	assert_eq!(req.body().bytes(), Some(&b""[..]), "empty body");

	Ok(())
}

#[tokio::test]
async fn test_sbucket_put_redirect_error() -> Result<()> {
	// -- Setup & Fixtures
	let fx_error_body = r#"<?xml version="1.0" encoding="UTF-8"?>
<Error><Code>AccessDenied</Code><Message>Access Denied</Message><RequestId>REQ1</RequestId></Error>"#;
	let (sbucket, _replay_client) = new_replay_sbucket(&[(403, fx_error_body)])?;

	// -- Exec
	let res = sbucket.put_redirect("u/docs", "https://example.com").await;

	// -- Check
	assert!(
		matches!(res, Err(crate::Error::AwsServiceError(ref code, ref message)) if code == "AccessDenied" && message == "Access Denied"),
		"got {res:?}"
	);

	Ok(())
}
