use clap::Parser;

use docdash_server::app_config;
use docdash_server::cli::{CliArgs, Command};
use docdash_server::startup;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_level(true)
        .init();

    let args = CliArgs::parse();
    let mut config = app_config::load_config();

    match args.command() {
        Command::Serve(serve) => {
            app_config::apply_overrides(&mut config, &serve);
            startup::serve(&config).await?;
        }
        Command::Datasets => startup::print_datasets(&config).await?,
    }

    Ok(())
}
