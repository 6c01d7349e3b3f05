//! Kibana index pattern wizard.
//!
//! Responsibilities:
//! - Orchestrate startup and shutdown.
//! - Initialize logging, configuration, the client and the terminal.
//! - Run the main event loop.
//!
//! Does NOT handle:
//! - Backend calls (see `crates/client` and `runtime::side_effects`).
//! - Configuration parsing (see `crates/config`).
//!
//! Invariants:
//! - The terminal enters raw mode and the alternate screen on startup and is
//!   restored on every exit path.
//! - Logs go to a daily rolling file, never to the terminal.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures_util::StreamExt;
use tokio::sync::mpsc::channel;
use tracing_appender::non_blocking;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use kbn_config::constants::{DEFAULT_CHANNEL_CAPACITY, DEFAULT_UI_TICK_MS};
use kbn_tui::action::Action;
use kbn_tui::app::App;
use kbn_tui::cli::Cli;
use kbn_tui::runtime::{
    client::create_client,
    config::load_config,
    side_effects::{SideEffectContext, TaskTracker, handle_side_effects},
    terminal::TerminalGuard,
};

const LOG_FILE_NAME: &str = "kbn-index-pattern-wizard.log";

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    std::fs::create_dir_all(&cli.log_dir)?;
    let file_appender = tracing_appender::rolling::daily(&cli.log_dir, LOG_FILE_NAME);
    // The guard flushes buffered log lines when main returns.
    let (non_blocking, _log_guard) = non_blocking(file_appender);
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(non_blocking))
        .init();

    let config = load_config(&cli)?;
    let client = Arc::new(create_client(&config)?);
    let kibana_url = client.kibana_url().to_string();

    let task_tracker = TaskTracker::new();
    let (tx, mut rx) = channel::<Action>(DEFAULT_CHANNEL_CAPACITY);
    let ctx = SideEffectContext {
        client,
        tx: tx.clone(),
        task_tracker: task_tracker.clone(),
        reasonable_wait: config.wizard.reasonable_wait(),
    };

    let (terminal_guard, mut terminal) = TerminalGuard::setup()?;

    // Not on the tracker: the event stream only ends with the process.
    let tx_input = tx.clone();
    let input_task = tokio::spawn(async move {
        let mut reader = EventStream::new();
        while let Some(Ok(event)) = reader.next().await {
            let action = match event {
                Event::Key(key) if key.kind == KeyEventKind::Press => Action::Input(key),
                Event::Resize(width, height) => Action::Resize(width, height),
                _ => continue,
            };
            if tx_input.send(action).await.is_err() {
                break;
            }
        }
    });

    let mut app = App::new(cli.id.clone(), config.wizard.include_system_indices);
    tracing::info!(id = ?cli.id, "Wizard started");
    handle_side_effects(&Action::FetchExistingIndices, &ctx).await;

    let mut tick_interval =
        tokio::time::interval(tokio::time::Duration::from_millis(DEFAULT_UI_TICK_MS));

    while !app.should_quit() {
        terminal.draw(|f| app.render(f))?;

        tokio::select! {
            Some(action) = rx.recv() => {
                let action = match action {
                    Action::Input(key) => match app.handle_input(key) {
                        Some(action) => action,
                        None => continue,
                    },
                    other => other,
                };
                tracing::debug!(action = %action, "Handling action");
                app.update(&action);
                handle_side_effects(&action, &ctx).await;
            }
            _ = tick_interval.tick() => {
                app.update(&Action::Tick);
            }
        }
    }

    input_task.abort();
    // In-flight requests are abandoned; their results have nowhere to go.
    task_tracker.close();
    drop(terminal);
    drop(terminal_guard);

    if let Some(route) = app.navigate_to() {
        println!("Index pattern created: {kibana_url}/app/kibana#{route}");
    }
    tracing::info!("Wizard exited");

    Ok(())
}
