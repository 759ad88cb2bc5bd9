use anyhow::Result;
use clap::Parser;
use tracing::{error, info};

mod cli;
mod client;
mod config;
mod draft;
mod error;
mod grid;
mod models;
mod tui;

use cli::{Cli, Commands};
use client::PollClient;
use config::Config;
use error::PollError;

#[tokio::main]
async fn main() -> Result<()> {
    // Set default log level to INFO if not specified
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "pollgrid=info");
    }

    // Initialize logging to both console and file
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

    let file_appender = tracing_appender::rolling::never(".", "pollgrid.log");

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(EnvFilter::from_default_env()),
        )
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_filter(EnvFilter::from_default_env()),
        )
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Show { id, endpoint } => {
            let config = load_config(endpoint)?;
            if let Err(e) = show_poll(&config, id).await {
                error!("Fetching poll {} failed: {}", id, e);
            }
        }

        Commands::Respond {
            id,
            name,
            selections,
            endpoint,
        } => {
            let config = load_config(endpoint)?;
            let raw = Commands::parse_selections(selections);

            match respond_to_poll(&config, id, name, &raw).await {
                Ok(submission) => {
                    info!("Response for poll {} recorded as '{}'", id, name);
                    for selection in &submission.selections {
                        println!("{}: {}", selection.option, selection.selection.as_str());
                    }
                }
                Err(e) => error!("Responding to poll {} failed: {}", id, e),
            }
        }

        Commands::Tui { id, endpoint } => {
            info!("Launching poll view");
            let config = load_config(endpoint)?;

            match tui::run_tui(&config, id).await {
                Ok(_) => info!("Poll view exited successfully"),
                Err(e) => error!("Poll view failed: {}", e),
            }
        }
    }

    Ok(())
}

fn load_config(endpoint_override: &Option<String>) -> Result<Config> {
    let mut config = Config::from_env()?;
    if let Some(endpoint) = endpoint_override {
        config.endpoint = endpoint.clone();
    }
    config.validate()?;
    Ok(config)
}

/// Fetch a poll and print its resolved grid to stdout
async fn show_poll(config: &Config, id: &str) -> Result<(), PollError> {
    let client = PollClient::new(config)?;

    match client.fetch_poll(id).await? {
        None => println!("No poll"),
        Some(poll) => {
            let grid = grid::PollGrid::from_poll(&poll)?;

            println!("{}", poll.title);
            if !poll.description.is_empty() {
                println!("{}", poll.description);
            }
            println!();
            print!("{}", grid::render_plain(&poll, &grid));
        }
    }
    Ok(())
}

/// Fetch the poll for its option list, assemble the submission and post it.
/// Returns the submission as posted, for confirmation output.
async fn respond_to_poll(
    config: &Config,
    id: &str,
    name: &str,
    raw: &[String],
) -> Result<models::SubmissionRequest, PollError> {
    let client = PollClient::new(config)?;

    let poll = client
        .fetch_poll(id)
        .await?
        .ok_or_else(|| PollError::NotFound(id.to_string()))?;

    let submission = draft::build_submission_from_raw(&poll, name, raw)?;
    client.submit_response(id, &submission).await?;
    Ok(submission)
}
