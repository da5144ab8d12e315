use cmd::cmd_run;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cmd;
mod config;
mod consts;
mod error;
mod link;
mod prelude;
mod s3w;

#[cfg(test)]
mod _test_support;

pub use prelude::{Error, Result};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
	init_tracing();

	match cmd_run().await {
		Ok(_) => ExitCode::SUCCESS,
		// clap renders its own "error: ..." and usage.
		Err(Error::Clap(e)) => {
			let _ = e.print();
			ExitCode::FAILURE
		}
		Err(e) => {
			eprintln!("Error: {}", e);
			ExitCode::FAILURE
		}
	}
}

/// Diagnostics go to stderr, driven by RUST_LOG (e.g., `RUST_LOG=s3short=debug`). Quiet by default.
fn init_tracing() {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.init();
}
