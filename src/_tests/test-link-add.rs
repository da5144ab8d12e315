use super::*;
use crate::_test_support::{default_test_config, MemStore, Result};

const FX_LINK: &str = "https://example.com/some/long/path?q=1";
const FX_OTHER_LINK: &str = "https://example.org/other";

fn fx_request(name: Option<&str>, over: OverMode) -> LinkRequest {
	LinkRequest {
		link: FX_LINK.to_string(),
		name: name.map(|s| s.to_string()),
		over,
	}
}

#[tokio::test]
async fn test_add_named_absent_created() -> Result<()> {
	// -- Setup & Fixtures
	let store = MemStore::default();
	let config = default_test_config();

	// -- Exec
	let outcome = add_link(&store, &config, fx_request(Some("docs"), OverMode::Skip)).await?;

	// -- Check
	assert_eq!(
		outcome,
		AddOutcome::Created {
			name: "docs".to_string(),
			url: "https://ds.io/docs".to_string()
		}
	);
	assert_eq!(store.target("u/docs").as_deref(), Some(FX_LINK));
	assert_eq!(store.put_count(), 1);

	Ok(())
}

#[tokio::test]
async fn test_add_existing_no_override_skipped() -> Result<()> {
	// -- Setup & Fixtures
	let store = MemStore::with_objects(&[("u/docs", FX_OTHER_LINK)]);
	let config = default_test_config();

	// -- Exec
	let outcome = add_link(&store, &config, fx_request(Some("docs"), OverMode::Skip)).await?;

	// -- Check
	assert_eq!(outcome, AddOutcome::Skipped { name: "docs".to_string() });
	assert_eq!(store.put_count(), 0, "no write should happen");
	assert_eq!(store.target("u/docs").as_deref(), Some(FX_OTHER_LINK));

	Ok(())
}

#[tokio::test]
async fn test_add_existing_override_replaced() -> Result<()> {
	// -- Setup & Fixtures
	let store = MemStore::with_objects(&[("u/docs", FX_OTHER_LINK)]);
	let config = default_test_config();

	// -- Exec
	let outcome = add_link(&store, &config, fx_request(Some("docs"), OverMode::Write)).await?;

	// -- Check
	assert_eq!(
		outcome,
		AddOutcome::Replaced {
			name: "docs".to_string(),
			url: "https://ds.io/docs".to_string()
		}
	);
	assert_eq!(store.target("u/docs").as_deref(), Some(FX_LINK));
	assert_eq!(store.put_count(), 1);

	Ok(())
}

#[tokio::test]
async fn test_add_no_name_generated() -> Result<()> {
	// -- Setup & Fixtures
	let store = MemStore::default();
	let config = default_test_config();

	// -- Exec
	let outcome = add_link(&store, &config, fx_request(None, OverMode::Skip)).await?;

	// -- Check
	let (name, url) = match outcome {
		AddOutcome::Created { name, url } => (name, url),
		other => panic!("should have been created, got {other:?}"),
	};
	assert_eq!(name.len(), 7);
	assert!(name.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()), "name '{name}'");
	assert_eq!(url, format!("https://ds.io/{name}"));
	assert_eq!(store.keys(), vec![format!("u/{name}")]);

	Ok(())
}

#[tokio::test]
async fn test_add_exists_error_propagated() -> Result<()> {
	// -- Setup & Fixtures
	let store = MemStore::failing_exists("AccessDenied", "Access Denied");
	let config = default_test_config();

	// -- Exec
	let res = add_link(&store, &config, fx_request(Some("docs"), OverMode::Write)).await;

	// -- Check
	assert!(
		matches!(res, Err(crate::Error::AwsServiceError(ref code, _)) if code == "AccessDenied"),
		"should be AccessDenied, got {res:?}"
	);
	assert_eq!(store.put_count(), 0);

	Ok(())
}

#[tokio::test]
async fn test_add_invalid_input_no_store_access() -> Result<()> {
	// -- Setup & Fixtures
	// failing store, so any store call would surface as an AwsServiceError
	let store = MemStore::failing_exists("AccessDenied", "Access Denied");
	let config = default_test_config();
	let long_name = "a".repeat(1100);
	let bad_name = fx_request(Some(&long_name), OverMode::Skip);
	let bad_link = LinkRequest {
		link: "example.com".to_string(),
		..fx_request(Some("docs"), OverMode::Skip)
	};

	// -- Exec & Check
	let res = add_link(&store, &config, bad_name).await;
	assert!(matches!(res, Err(crate::Error::KeyTooLong(1102))), "got {res:?}");
	let res = add_link(&store, &config, bad_link).await;
	assert!(matches!(res, Err(crate::Error::InvalidLink(_))), "got {res:?}");

	Ok(())
}

#[tokio::test]
async fn test_add_names_with_slash_and_unicode() -> Result<()> {
	// -- Setup & Fixtures
	let store = MemStore::default();
	let config = default_test_config();

	// -- Exec
	let nested = add_link(&store, &config, fx_request(Some("2024/talk"), OverMode::Skip)).await?;
	let unicode = add_link(&store, &config, fx_request(Some("café"), OverMode::Skip)).await?;

	// -- Check
	assert_eq!(
		nested,
		AddOutcome::Created {
			name: "2024/talk".to_string(),
			url: "https://ds.io/2024/talk".to_string()
		}
	);
	assert_eq!(
		unicode,
		AddOutcome::Created {
			name: "café".to_string(),
			url: "https://ds.io/café".to_string()
		}
	);
	assert_eq!(store.target("u/2024/talk").as_deref(), Some(FX_LINK));
	assert_eq!(store.target("u/café").as_deref(), Some(FX_LINK));

	Ok(())
}

#[tokio::test]
async fn test_add_empty_name_generated() -> Result<()> {
	// -- Setup & Fixtures
	let store = MemStore::default();
	let config = default_test_config();

	// -- Exec
	let outcome = add_link(&store, &config, fx_request(Some(""), OverMode::Skip)).await?;

	// -- Check
	let name = match outcome {
		AddOutcome::Created { name, .. } => name,
		other => panic!("should have been created, got {other:?}"),
	};
	assert_eq!(name.len(), 7);
	assert_eq!(store.keys(), vec![format!("u/{name}")]);

	Ok(())
}

#[tokio::test]
async fn test_add_custom_domain_and_prefix() -> Result<()> {
	// -- Setup & Fixtures
	let store = MemStore::default();
	let config = LinkConfig {
		domain: "go.example.com/".to_string(),
		prefix: "links/".to_string(),
		..default_test_config()
	};

	// -- Exec
	let outcome = add_link(&store, &config, fx_request(Some("x1"), OverMode::Skip)).await?;

	// -- Check
	assert_eq!(
		outcome,
		AddOutcome::Created {
			name: "x1".to_string(),
			url: "https://go.example.com/x1".to_string()
		}
	);
	assert!(store.target("links/x1").is_some());

	Ok(())
}

#[test]
fn test_random_id_shape() {
	for _ in 0..200 {
		let id = random_id();
		assert_eq!(id.len(), 7);
		assert!(id.bytes().all(|b| crate::consts::ID_CHARS.contains(&b)), "id '{id}'");
	}
}

#[test]
fn test_object_key() {
	assert_eq!(object_key("u", "abc"), "u/abc");
	assert_eq!(object_key("u/", "abc"), "u/abc");
	assert_eq!(object_key("", "abc"), "abc");
	assert_eq!(object_key("a/b", "abc"), "a/b/abc");
}

#[test]
fn test_validate_key_and_link() {
	assert!(validate_key("u/my-Link_1.0").is_ok());
	assert!(validate_key("u/2024/talk").is_ok());
	assert!(validate_key(&"k".repeat(1024)).is_ok());
	assert!(validate_key(&"k".repeat(1025)).is_err());
	// 2 bytes per 'é', limit is on bytes
	assert!(validate_key(&"é".repeat(513)).is_err());

	assert!(validate_link("https://example.com").is_ok());
	assert!(validate_link("http://example.com/a?b=c").is_ok());
	assert!(validate_link("/local/path").is_ok());
	assert!(validate_link("ftp://example.com").is_err());
	assert!(validate_link("example.com").is_err());
}
