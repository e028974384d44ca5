// src/main.rs
use std::fs::OpenOptions;

use anyhow::Context;
use clap::Parser;
use dotenvy::dotenv;
use spending_dashboard::cli;
use spending_dashboard::config::{Cli, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let args = Cli::parse();
    let settings = Settings::from(&args);

    // the alternate screen owns stdout/stderr while the TUI runs
    init_logging(&settings, !args.once)?;

    if args.once {
        cli::print_once(&settings).await?;
    } else {
        cli::run(settings).await?;
    }
    Ok(())
}

fn init_logging(settings: &Settings, to_file: bool) -> anyhow::Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));

    if to_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&settings.log_file)
            .with_context(|| format!("opening log file {}", settings.log_file.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.try_init()?;
    Ok(())
}
