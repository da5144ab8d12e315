//! Global constants

// -- Environment names
pub const ENV_BUCKET: &str = "S3_BUCKET";
pub const ENV_REGION: &str = "S3_REGION";
pub const ENV_KEY_PREFIX: &str = "KEY_SHORT";

// -- Defaults (when neither flag nor environment)
pub const DEFAULT_BUCKET: &str = "ds-io-urlshortner";
pub const DEFAULT_REGION: &str = "us-east-1";
pub const DEFAULT_DOMAIN: &str = "ds.io";
pub const DEFAULT_KEY_PREFIX: &str = "u";

pub const ID_LEN: usize = 7;
pub const ID_CHARS: &[u8; 36] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// S3 object key limit (utf-8 bytes).
pub const MAX_KEY_BYTES: usize = 1024;

pub const CT_TEXT: &str = "text/plain; charset=UTF-8";
