// ENDofDAIZY - a design studio's one-page site as a terminal app
//
// Architecture:
// - Site (site/): content, section layout and the page's animation state
// - Motion (motion/): easing, springs, trail, hover registry, reveal, parallax
// - Contact (contact/): the "start a project" form and its auto-close timer
// - Assets (assets/): best-effort background image fetches on a worker thread
// - TUI (ratatui): draws the page and routes keyboard and mouse input
// - Event system: an mpsc channel carries asset results and demo steps to the UI

mod assets;
mod cli;
mod config;
mod contact;
mod demo;
mod events;
mod logging;
mod motion;
mod site;
mod startup;
mod theme;
mod tui;
mod util;

use anyhow::Result;
use clap::Parser;
use config::{Config, LogRotation};
use logging::{LogBuffer, TuiLogLayer};
use tokio::sync::{mpsc, oneshot};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Subcommands (config --show, --path, --reset) exit early
    let cli = cli::Cli::parse();
    if cli::handle_command(&cli)? {
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    // Extract bundled themes on first run
    theme::ensure_themes_extracted();

    let mut config = Config::from_env();
    cli.apply(&mut config);

    // The TUI owns the screen, so logs go to the in-app buffer and
    // optionally to JSON files.
    //
    // Precedence: RUST_LOG env var > config file > default "info"
    let log_buffer = LogBuffer::new();
    let default_filter = format!("daizy={}", config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    // The guard must live until exit so buffered lines are flushed
    let _file_guard: Option<tracing_appender::non_blocking::WorkerGuard> =
        if config.logging.file_enabled {
            match std::fs::create_dir_all(&config.logging.file_dir) {
                Err(e) => {
                    eprintln!(
                        "Warning: Could not create log directory {:?}: {}",
                        config.logging.file_dir, e
                    );
                    tracing_subscriber::registry()
                        .with(filter)
                        .with(TuiLogLayer::new(log_buffer.clone()))
                        .init();
                    None
                }
                Ok(()) => {
                    let dir = &config.logging.file_dir;
                    let prefix = &config.logging.file_prefix;
                    let file_appender = match config.logging.file_rotation {
                        LogRotation::Hourly => tracing_appender::rolling::hourly(dir, prefix),
                        LogRotation::Daily => tracing_appender::rolling::daily(dir, prefix),
                        LogRotation::Never => tracing_appender::rolling::never(dir, prefix),
                    };
                    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

                    tracing_subscriber::registry()
                        .with(filter)
                        .with(TuiLogLayer::new(log_buffer.clone()))
                        .with(
                            tracing_subscriber::fmt::layer()
                                .json()
                                .with_writer(non_blocking)
                                .with_ansi(false),
                        )
                        .init();
                    Some(guard)
                }
            }
        } else {
            tracing_subscriber::registry()
                .with(filter)
                .with(TuiLogLayer::new(log_buffer.clone()))
                .init();
            None
        };

    startup::print_startup(&config);
    startup::log_startup(&config);

    // Asset results and demo steps both flow to the UI through here
    let (event_tx, event_rx) = mpsc::channel(256);

    // Detached: a fetch in flight at quit ends at its request timeout
    let _assets = assets::spawn_loads(config.assets.clone(), event_tx.clone());

    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    let demo_handle = if config.demo_mode {
        tracing::info!("Running in DEMO MODE - scripted pointer tour");
        Some(tokio::spawn(demo::run_demo(event_tx.clone(), shutdown_rx)))
    } else {
        None
    };
    drop(event_tx);

    if let Err(e) = tui::run_tui(config, log_buffer, event_rx).await {
        tracing::error!("TUI error: {:?}", e);
        eprintln!("Error: {:?}", e);
    }

    tracing::info!("Shutting down...");

    // Already finished is fine
    let _ = shutdown_tx.send(());
    if let Some(handle) = demo_handle {
        let _ = handle.await;
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
