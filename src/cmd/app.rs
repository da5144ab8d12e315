use clap::{crate_version, Arg, ArgAction, Command};

pub const ARG_LINK: &str = "link";
pub const ARG_NAME: &str = "name";
pub const ARG_OVERRIDE: &str = "override";
pub const ARG_REGION: &str = "region";
pub const ARG_PROFILE: (&str, char) = ("profile", 'p');
pub const ARG_BUCKET: &str = "bucket";
pub const ARG_DOMAIN: &str = "domain";
pub const ARG_PREFIX: &str = "prefix";

pub fn cmd_app() -> Command {
	Command::new("s3short")
		.version(crate_version!())
		.about("Create a short link as a zero-byte S3 website redirect object. e.g., `s3short https://example.com/some/long/path`")
		.arg(arg_link())
		.arg(
			Arg::new(ARG_NAME)
				.num_args(1)
				.long(ARG_NAME)
				.help("The short name to use (default: a random 7 chars [a-z0-9] name)."),
		)
		.arg(
			Arg::new(ARG_OVERRIDE)
				.num_args(0)
				.long(ARG_OVERRIDE)
				.action(ArgAction::SetTrue)
				.help("Replace the short link if it already exists (default: skip it)"),
		)
		.args(args_region_profile())
		.args(args_target())
}

// region:    --- Args

/// Not `required` on purpose, the count (exactly one) is checked by the command so the error exit code stays 1.
fn arg_link() -> Arg {
	Arg::new(ARG_LINK)
		.num_args(1..)
		.action(ArgAction::Append)
		.help("The target URL the short link redirects to.")
}

fn args_region_profile() -> [Arg; 2] {
	[
		Arg::new(ARG_PROFILE.0)
			.required(false)
			.num_args(1)
			.short(ARG_PROFILE.1)
			.long(ARG_PROFILE.0)
			.help("The aws profile to use for the credentials."),
		Arg::new(ARG_REGION)
			.required(false)
			.num_args(1)
			.long(ARG_REGION)
			.help("The region to use (override S3_REGION env, default 'us-east-1')."),
	]
}

fn args_target() -> [Arg; 3] {
	[
		Arg::new(ARG_BUCKET)
			.num_args(1)
			.long(ARG_BUCKET)
			.help("The bucket to write the redirect object to (override S3_BUCKET env)."),
		Arg::new(ARG_DOMAIN)
			.num_args(1)
			.long(ARG_DOMAIN)
			.help("The public domain of the short urls (default 'ds.io')."),
		Arg::new(ARG_PREFIX)
			.num_args(1)
			.long(ARG_PREFIX)
			.help("The key prefix of the redirect objects (override KEY_SHORT env, default 'u')."),
	]
}

// endregion: --- Args
