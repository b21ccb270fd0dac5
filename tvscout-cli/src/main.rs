mod cli;
mod config;
mod error;
mod runner;

use crate::{
    cli::Args,
    config::AppConfig,
    error::{CliError, Result},
    runner::{finalize, run_pipeline},
};
use clap::Parser;
use scout_core::{
    extractor::{SearchExtractor, create_client},
    pipeline::{ChannelListError, Pipeline, read_channel_list},
    playlist::{Playlist, PlaylistWriter},
    probe::FfmpegProber,
};
use std::{future::pending, process};
use tracing::{Level, debug, error, info, warn};
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Application error: {}", e);
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let args = Args::parse();

    init_logging(args.verbose, args.quiet)?;

    info!("==================================================================");
    info!("TvScout - live TV stream finder and validator");
    info!("==================================================================");

    let config = AppConfig::load(args.config.as_deref())?.with_args(&args);
    debug!("Loaded configuration: {:?}", config);

    let directives = match read_channel_list(&config.input) {
        Ok(directives) => directives,
        Err(e @ (ChannelListError::NotFound(_) | ChannelListError::Empty(_))) => {
            warn!("{}, no playlist will be created", e);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let client = create_client(config.request_timeout(), config.proxy_config())?;
    let source = SearchExtractor::new(client)
        .with_search_url(config.search_url.as_str())
        .with_search_param(config.search_param.as_str())
        .with_user_agent(config.user_agent.as_str());
    let prober = FfmpegProber::new()
        .with_program(config.probe_program.as_path())
        .with_timeout(config.probe_timeout());

    let pipeline = Pipeline::new(Box::new(source), Box::new(prober))
        .with_policy(config.accept_policy)
        .with_default_group(config.default_group.as_str());
    let writer =
        PlaylistWriter::new(config.output.as_path()).with_logo_template(config.logo_template.as_str());

    let mut playlist = Playlist::new();
    run_pipeline(&pipeline, &directives, &mut playlist, shutdown_signal()).await;
    finalize(&writer, &playlist).await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C: {}", e);
        pending::<()>().await;
    }
}

fn init_logging(verbose: bool, quiet: bool) -> Result<()> {
    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(Level::INFO.into())
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_level(verbose))
        .with(filter)
        .try_init()
        .map_err(|e| CliError::Logging(e.to_string()))
}
