use super::*;
use std::collections::HashMap;

fn fx_env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
	let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
	move |name: &str| map.get(name).cloned()
}

#[test]
fn test_config_defaults() {
	let config = LinkConfig::resolve(ConfigArgs::default(), fx_env(&[]));

	assert_eq!(
		config,
		LinkConfig {
			bucket: "ds-io-urlshortner".to_string(),
			region: "us-east-1".to_string(),
			domain: "ds.io".to_string(),
			prefix: "u".to_string(),
			profile: None,
		}
	);
}

#[test]
fn test_config_env_over_defaults() {
	let env = fx_env(&[("S3_BUCKET", "env-bucket"), ("S3_REGION", "eu-west-1"), ("KEY_SHORT", "s")]);

	let config = LinkConfig::resolve(ConfigArgs::default(), env);

	assert_eq!(config.bucket, "env-bucket");
	assert_eq!(config.region, "eu-west-1");
	assert_eq!(config.prefix, "s");
	assert_eq!(config.domain, "ds.io");
}

#[test]
fn test_config_args_over_env() {
	let env = fx_env(&[("S3_BUCKET", "env-bucket"), ("S3_REGION", "eu-west-1"), ("KEY_SHORT", "s")]);
	let args = ConfigArgs {
		bucket: Some("arg-bucket".to_string()),
		region: Some("ap-south-1".to_string()),
		domain: Some("go.example.com".to_string()),
		prefix: Some("r".to_string()),
		profile: Some("work".to_string()),
	};

	let config = LinkConfig::resolve(args, env);

	assert_eq!(config.bucket, "arg-bucket");
	assert_eq!(config.region, "ap-south-1");
	assert_eq!(config.domain, "go.example.com");
	assert_eq!(config.prefix, "r");
	assert_eq!(config.profile.as_deref(), Some("work"));
}

#[test]
fn test_config_empty_env_ignored() {
	let config = LinkConfig::resolve(ConfigArgs::default(), fx_env(&[("S3_BUCKET", "")]));

	assert_eq!(config.bucket, "ds-io-urlshortner");
}
