mod cli;
mod logging;
mod report;

use std::process;
use std::time::Duration;

use anyhow::{Context, Result};
use bazi_engine::{build_profile, BirthInput, CapabilityLoader, ProfileOptions, TableLoader};
use chrono::Local;
use clap::Parser;
use tracing::debug;

use crate::cli::{Cli, Format};
use crate::report::Report;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let input = BirthInput::new(cli.name, cli.date, cli.time, cli.offset);
    let options = ProfileOptions {
        zone: cli.zone,
        load_grace: Duration::from_millis(cli.grace_ms),
    };
    let loader = cli.table.map(|path| {
        debug!(path = %path.display(), "using table converter");
        TableLoader::new(path)
    });
    debug!(zone = %options.zone, grace_ms = cli.grace_ms, "building profile");

    let profile = build_profile(
        &input,
        &cli.focus,
        loader.as_ref().map(|l| l as &dyn CapabilityLoader),
        &options,
    )
    .await?;

    match cli.format {
        Format::Json => {
            let json =
                serde_json::to_string_pretty(&profile).context("failed to serialize profile")?;
            println!("{json}");
        }
        Format::Text => print!("{}", Report::new(&profile, Local::now())),
    }

    Ok(())
}
