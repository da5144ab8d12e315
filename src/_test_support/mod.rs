pub type Result<T> = core::result::Result<T, Error>;
pub type Error = Box<dyn std::error::Error>; // For early dev.

use crate::config::{ConfigArgs, LinkConfig};
use crate::link::LinkStore;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// In memory LinkStore. Keeps the key -> redirect target and the number of puts.
#[derive(Default)]
pub struct MemStore {
	objects: Mutex<HashMap<String, String>>,
	puts: Mutex<usize>,
	/// When set, `exists` fails with this (code, message) service error.
	fail_exists: Option<(String, String)>,
}

impl MemStore {
	pub fn with_objects(objects: &[(&str, &str)]) -> MemStore {
		let objects = objects.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
		MemStore {
			objects: Mutex::new(objects),
			..Default::default()
		}
	}

	pub fn failing_exists(code: &str, message: &str) -> MemStore {
		MemStore {
			fail_exists: Some((code.to_string(), message.to_string())),
			..Default::default()
		}
	}

	pub fn target(&self, key: &str) -> Option<String> {
		self.objects.lock().unwrap().get(key).cloned()
	}

	pub fn keys(&self) -> Vec<String> {
		self.objects.lock().unwrap().keys().cloned().collect()
	}

	pub fn put_count(&self) -> usize {
		*self.puts.lock().unwrap()
	}
}

#[async_trait]
impl LinkStore for MemStore {
	async fn exists(&self, key: &str) -> crate::Result<bool> {
		if let Some((code, message)) = &self.fail_exists {
			return Err(crate::Error::AwsServiceError(code.clone(), message.clone()));
		}
		Ok(self.objects.lock().unwrap().contains_key(key))
	}

	async fn put_redirect(&self, key: &str, target: &str) -> crate::Result<()> {
		self.objects.lock().unwrap().insert(key.to_string(), target.to_string());
		*self.puts.lock().unwrap() += 1;
		Ok(())
	}
}

/// Config as resolved with an empty environment (all defaults).
pub fn default_test_config() -> LinkConfig {
	LinkConfig::resolve(ConfigArgs::default(), |_| None)
}
