use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;

	let args = sprout_worker::Args::parse();

	sprout_worker::run(args).await
}
