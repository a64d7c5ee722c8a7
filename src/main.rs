// Grimoire - terminal browser for the Wizard World spell catalog
//
// Fetches spell records from the public catalog API, shows them in a
// searchable list, and renders a detail view tinted by each spell's light
// color.
//
// Architecture:
// - Fetch worker (reqwest): resolves catalog queries off the UI task,
//   debouncing search bursts to the newest query
// - TUI (ratatui): searchable list + detail view
// - mpsc channels connect the two; requests carry a generation stamp so
//   stale responses are discarded instead of clobbering a newer result

mod cli;
mod config;
mod demo;
mod events;
mod fetch;
mod light;
mod logging;
mod spell;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use config::{Config, LogRotation};
use logging::{BufferLayer, LogBuffer};
use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let mut config = Config::from_env();
    if args.demo {
        config.demo_mode = true;
    }

    // Precedence for the log filter: RUST_LOG env var > config file > "info"
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("grimoire={}", config.logging.level).into());

    match args.command {
        Some(cli::Commands::Config { show, reset, path }) => {
            cli::handle_config(show, reset, path);
            return Ok(());
        }
        Some(cli::Commands::Fetch { query }) => {
            // One-shot mode logs straight to stderr - no TUI to garble
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
            return cli::run_fetch_once(&config, &query.join(" ")).await;
        }
        None => {}
    }

    // TUI mode: capture logs into a buffer rendered by the logs view, so
    // nothing prints through the alternate screen. Optionally mirror to
    // rotating JSON log files; the guard must stay alive so logs flush.
    let log_buffer = LogBuffer::new();

    let _file_guard: Option<tracing_appender::non_blocking::WorkerGuard> =
        if config.logging.file_enabled {
            match std::fs::create_dir_all(&config.logging.file_dir) {
                Ok(()) => {
                    let file_appender = match config.logging.file_rotation {
                        LogRotation::Hourly => tracing_appender::rolling::hourly(
                            &config.logging.file_dir,
                            &config.logging.file_prefix,
                        ),
                        LogRotation::Daily => tracing_appender::rolling::daily(
                            &config.logging.file_dir,
                            &config.logging.file_prefix,
                        ),
                        LogRotation::Never => tracing_appender::rolling::never(
                            &config.logging.file_dir,
                            &config.logging.file_prefix,
                        ),
                    };
                    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

                    tracing_subscriber::registry()
                        .with(filter)
                        .with(BufferLayer::new(log_buffer.clone()))
                        .with(
                            tracing_subscriber::fmt::layer()
                                .json()
                                .with_writer(non_blocking)
                                .with_ansi(false),
                        )
                        .init();
                    Some(guard)
                }
                Err(e) => {
                    eprintln!(
                        "Warning: Could not create log directory {:?}: {}",
                        config.logging.file_dir, e
                    );
                    tracing_subscriber::registry()
                        .with(filter)
                        .with(BufferLayer::new(log_buffer.clone()))
                        .init();
                    None
                }
            }
        } else {
            tracing_subscriber::registry()
                .with(filter)
                .with(BufferLayer::new(log_buffer.clone()))
                .init();
            None
        };

    tracing::info!("grimoire v{} starting", config::VERSION);
    if config.demo_mode {
        tracing::info!("demo mode: serving bundled sample spells");
    } else {
        tracing::info!("catalog: {}", config.api_url);
    }

    // Bounded channels between the TUI and the fetch worker. The worker
    // coalesces queued requests, so modest buffers are plenty.
    let (request_tx, request_rx) = mpsc::channel(64);
    let (outcome_tx, outcome_rx) = mpsc::channel(64);

    // Spawn the fetch worker against the real catalog or the demo samples
    let worker = if config.demo_mode {
        tokio::spawn(fetch::run_fetcher(
            demo::DemoCatalog::new(),
            request_rx,
            outcome_tx,
            config.debounce(),
        ))
    } else {
        let client = fetch::SpellClient::new(config.api_url.clone(), config.request_timeout())
            .context("Failed to create HTTP client")?;
        tokio::spawn(fetch::run_fetcher(
            client,
            request_rx,
            outcome_tx,
            config.debounce(),
        ))
    };

    // Run the TUI on the main task; it blocks until the user quits
    if let Err(e) = tui::run_tui(request_tx, outcome_rx, log_buffer, config.demo_mode).await {
        tracing::error!("TUI error: {:?}", e);
    }

    // The TUI dropped its request sender on exit, which closes the channel
    // and lets the worker loop finish
    tracing::info!("Shutting down...");
    let _ = worker.await;
    tracing::info!("Shutdown complete");

    Ok(())
}
