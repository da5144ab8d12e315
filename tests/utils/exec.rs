use anyhow::Result;
use std::collections::HashMap;
use std::path::PathBuf;
use std::process::{Command, Stdio};

const BIN_S3SHORT: &str = env!("CARGO_BIN_EXE_s3short");

// Keep the runs hermetic (no instance metadata lookup, no ambient bucket/region).
const ENV_TEST: [(&str, &str); 3] = [
	("AWS_EC2_METADATA_DISABLED", "true"),
	("S3_BUCKET", "test-short-bucket"),
	("S3_REGION", "us-east-1"),
];

pub struct ExecOutput {
	pub code: Option<i32>,
	pub stdout: String,
	pub stderr: String,
}

impl ExecOutput {
	pub fn success(&self) -> bool {
		self.code == Some(0)
	}
}

pub fn exec_s3short(args: &[&str], print_exec: bool) -> Result<ExecOutput> {
	exec_output(
		BIN_S3SHORT,
		args,
		&ExecConfig {
			print_exec,
			..ExecConfig::default()
		},
	)
}

struct ExecConfig {
	print_exec: bool,
	cwd: Option<PathBuf>,
	envs: Option<HashMap<&'static str, &'static str>>,
}

impl Default for ExecConfig {
	fn default() -> Self {
		Self {
			print_exec: true,
			cwd: None,
			envs: Some(ENV_TEST.into()),
		}
	}
}

fn exec_output(cmd: &str, args: &[&str], config: &ExecConfig) -> Result<ExecOutput> {
	let ExecConfig { print_exec, cwd, envs } = config;

	if *print_exec {
		println!("> executing: {} {}", cmd, args.join(" "));
	}

	let mut proc = Command::new(cmd);

	if let Some(cwd) = cwd {
		proc.current_dir(cwd);
	}
	proc.args(args);

	if let Some(envs) = envs {
		for (name, val) in envs.iter() {
			proc.env(name, val);
		}
	}

	let output = proc.stdout(Stdio::piped()).stderr(Stdio::piped()).output()?;

	Ok(ExecOutput {
		code: output.status.code(),
		stdout: String::from_utf8(output.stdout)?,
		stderr: String::from_utf8(output.stderr)?,
	})
}
