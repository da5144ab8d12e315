use crate::consts::{ID_CHARS, ID_LEN, MAX_KEY_BYTES};
use crate::{Error, Result};
use rand::Rng;
use regex::Regex;
use std::sync::LazyLock;

static RX_LINK: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^(https?://\S+|/\S*)$").expect("Invalid link regex"));

/// Generate a new short name of `ID_LEN` chars in `[a-z0-9]`.
///
/// Uniqueness is not guaranteed here, the caller checks the bucket afterward.
pub fn random_id() -> String {
	let mut rng = rand::rng();
	(0..ID_LEN)
		.map(|_| ID_CHARS[rng.random_range(0..ID_CHARS.len())] as char)
		.collect()
}

/// Any UTF-8 name is a valid S3 key (including '/'), as long as the full key fits.
pub fn validate_key(key: &str) -> Result<()> {
	if key.len() > MAX_KEY_BYTES {
		Err(Error::KeyTooLong(key.len()))
	} else {
		Ok(())
	}
}

/// S3 only accepts a website redirect location that is absolute http(s) or starts with '/'.
pub fn validate_link(link: &str) -> Result<()> {
	if RX_LINK.is_match(link) {
		Ok(())
	} else {
		Err(Error::InvalidLink(link.to_string()))
	}
}
