use crate::utils::{exec_s3short, XString};
use anyhow::Result;

mod utils;

#[test]
fn test_args_missing_link() -> Result<()> {
	// EXEC
	let out = exec_s3short(&[], false)?;

	// CHECK
	assert_eq!(out.code, Some(1), "exit code");
	assert!(
		out.stderr.x_has_line("Error: Invalid command. Cause: main argument link is missing"),
		"stderr was: {}",
		out.stderr
	);

	Ok(())
}

#[test]
fn test_args_more_than_one_link() -> Result<()> {
	// EXEC
	let out = exec_s3short(&["https://example.com/a", "https://example.com/b"], false)?;

	// CHECK
	assert_eq!(out.code, Some(1), "exit code");
	assert!(
		out.stderr.contains("more than one link is provided"),
		"stderr was: {}",
		out.stderr
	);

	Ok(())
}

#[test]
fn test_args_missing_link_with_flags() -> Result<()> {
	// EXEC
	let out = exec_s3short(&["--name", "docs", "--override"], false)?;

	// CHECK
	assert_eq!(out.code, Some(1), "exit code");
	assert!(out.stderr.contains("main argument link is missing"), "stderr was: {}", out.stderr);

	Ok(())
}

#[test]
fn test_args_unknown_flag() -> Result<()> {
	// EXEC
	let out = exec_s3short(&["https://example.com", "--not-a-flag"], false)?;

	// CHECK
	assert_eq!(out.code, Some(1), "exit code");
	assert!(out.stderr.contains("--not-a-flag"), "stderr was: {}", out.stderr);
	assert!(out.stderr.starts_with("error: "), "clap message as is, stderr was: {}", out.stderr);
	assert!(!out.stderr.contains("Error: error:"), "no double prefix, stderr was: {}", out.stderr);

	Ok(())
}

#[test]
fn test_args_name_too_long() -> Result<()> {
	// EXEC
	let long_name = "n".repeat(1100);
	let out = exec_s3short(&["https://example.com", "--name", &long_name], false)?;

	// CHECK
	assert_eq!(out.code, Some(1), "exit code");
	assert!(out.stderr.contains("Object key too long (1102 bytes)"), "stderr was: {}", out.stderr);
	assert!(out.stdout.is_empty(), "nothing on stdout");

	Ok(())
}

#[test]
fn test_args_invalid_link() -> Result<()> {
	// EXEC
	let out = exec_s3short(&["example.com/no-scheme"], false)?;

	// CHECK
	assert_eq!(out.code, Some(1), "exit code");
	assert!(out.stderr.contains("Invalid link 'example.com/no-scheme'"), "stderr was: {}", out.stderr);

	Ok(())
}

#[test]
fn test_args_help_and_version() -> Result<()> {
	// EXEC
	let help = exec_s3short(&["--help"], false)?;
	let version = exec_s3short(&["--version"], false)?;

	// CHECK
	assert!(help.success(), "help exit 0");
	assert!(help.stdout.contains("--override"), "help lists --override");
	assert!(version.success(), "version exit 0");
	assert!(version.stdout.contains(env!("CARGO_PKG_VERSION")), "version output");

	Ok(())
}
