pub mod worker;

use std::{path::PathBuf, time::Duration};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use sprout_service::SproutService;
use sprout_storage::db::Db;

#[derive(Debug, Parser)]
#[command(
	version = sprout_cli::VERSION,
	rename_all = "kebab",
	styles = sprout_cli::styles(),
)]
pub struct Args {
	#[arg(long, short = 'c', value_name = "FILE")]
	pub config: PathBuf,
}

pub async fn run(args: Args) -> color_eyre::Result<()> {
	let config = sprout_config::load(&args.config)?;

	init_tracing(&config);

	let db = Db::connect(&config.storage.sqlite).await?;

	db.ensure_schema().await?;

	let poll_interval = Duration::from_millis(config.notifications.poll_interval_ms);
	let service = SproutService::new(config, db);

	let settled = worker::repair(&service).await;
	let result = worker::run_worker(&service, poll_interval, !settled).await;

	service.db.close().await;

	result
}

fn init_tracing(config: &sprout_config::Config) {
	let filter =
		EnvFilter::try_new(&config.service.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

	tracing_subscriber::fmt().with_env_filter(filter).init();
}
