use crate::cmd::app::{
	cmd_app, ARG_BUCKET, ARG_DOMAIN, ARG_LINK, ARG_NAME, ARG_OVERRIDE, ARG_PREFIX, ARG_PROFILE, ARG_REGION,
};
use crate::config::{ConfigArgs, LinkConfig};
use crate::link::{add_link, AddOutcome, LinkRequest};
use crate::s3w::{get_sbucket, OverMode};
use crate::{Error, Result};
use clap::error::ErrorKind;
use clap::ArgMatches;
use tracing::debug;

mod app;

pub async fn cmd_run() -> Result<()> {
	let argm = match cmd_app().try_get_matches() {
		Ok(argm) => argm,
		Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
			err.print()?;
			return Ok(());
		}
		Err(err) => return Err(err.into()),
	};

	exec_add(&argm).await
}

async fn exec_add(argm: &ArgMatches) -> Result<()> {
	let req = get_link_request(argm)?;
	let config = LinkConfig::from_env(get_config_args(argm));
	debug!(?config, over = req.over.label(), "resolved config");

	let sbucket = get_sbucket(&config).await;

	match add_link(&sbucket, &config, req).await? {
		AddOutcome::Created { url, .. } | AddOutcome::Replaced { url, .. } => println!("{url}"),
		AddOutcome::Skipped { name } => println!("ignoring {name}. Already exists"),
	}

	Ok(())
}

// region:    Args Utils
fn get_link_request(argm: &ArgMatches) -> Result<LinkRequest> {
	let links: Vec<&String> = argm.get_many::<String>(ARG_LINK).map(|v| v.collect()).unwrap_or_default();

	let link = match links.as_slice() {
		[] => return Err(Error::CmdInvalid("main argument link is missing")),
		[link] => link.to_string(),
		_ => return Err(Error::CmdInvalid("more than one link is provided")),
	};

	Ok(LinkRequest {
		link,
		name: get_string(argm, ARG_NAME).filter(|n| !n.is_empty()),
		over: OverMode::from_override_flag(argm.get_flag(ARG_OVERRIDE)),
	})
}

fn get_config_args(argm: &ArgMatches) -> ConfigArgs {
	ConfigArgs {
		bucket: get_string(argm, ARG_BUCKET),
		region: get_string(argm, ARG_REGION),
		domain: get_string(argm, ARG_DOMAIN),
		prefix: get_string(argm, ARG_PREFIX),
		profile: get_string(argm, ARG_PROFILE.0),
	}
}

fn get_string(argm: &ArgMatches, id: &str) -> Option<String> {
	argm.get_one::<String>(id).cloned()
}
// endregion: Args Utils
