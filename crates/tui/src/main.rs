//! Akyl Jer terminal portal.
//!
//! Startup order: arguments, `.env`, configuration, file logging, client,
//! terminal. The event loop multiplexes the action channel and the UI tick.

use std::time::Duration;

use akyljer_config::ConfigLoader;
use akyljer_config::constants::{DEFAULT_CHANNEL_CAPACITY, DEFAULT_UI_TICK_MS};
use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures_util::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc::{Sender, channel};
use tracing_appender::non_blocking;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use akyljer_tui::action::Action;
use akyljer_tui::app::App;
use akyljer_tui::cli::Cli;
use akyljer_tui::runtime::{
    client::create_client,
    side_effects::{SharedClient, TaskTracker, handle_side_effects},
    terminal::TerminalGuard,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut loader = ConfigLoader::new()
        .load_dotenv()
        .context("Failed to load .env file")?
        .from_env()
        .context("Invalid environment configuration")?;
    if let Some(url) = cli.base_url.clone() {
        loader = loader.with_base_url(url);
    }
    if let Some(secs) = cli.timeout {
        loader = loader.with_timeout(Duration::from_secs(secs));
    }
    if let Some(theme) = cli.theme {
        loader = loader.with_theme(theme);
    }
    let config = loader.build().context("Invalid configuration")?;

    std::fs::create_dir_all(&cli.log_dir)
        .with_context(|| format!("Failed to create log directory {}", cli.log_dir.display()))?;
    let file_appender = tracing_appender::rolling::daily(&cli.log_dir, "akyljer-tui.log");
    let (non_blocking, _log_guard) = non_blocking(file_appender);
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(non_blocking))
        .init();

    let client = create_client(&config)?;
    tracing::info!(base_url = %config.connection.base_url, "starting terminal portal");

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _terminal_guard = TerminalGuard::new();
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let (tx, mut rx) = channel::<Action>(DEFAULT_CHANNEL_CAPACITY);
    let task_tracker = TaskTracker::new();
    let input_task = tokio::spawn(read_input(tx.clone()));

    let mut app = App::new(config.theme, config.connection.base_url.clone());
    for request in app.open_path(&cli.route) {
        dispatch(request, &client, &tx, &task_tracker).await;
    }

    let mut tick_interval = tokio::time::interval(Duration::from_millis(DEFAULT_UI_TICK_MS));

    loop {
        terminal.draw(|f| app.render(f))?;

        tokio::select! {
            Some(action) = rx.recv() => {
                let action = match action {
                    Action::Input(key) => match app.handle_input(key) {
                        Some(intent) => intent,
                        None => continue,
                    },
                    other => other,
                };
                if matches!(action, Action::Quit) {
                    break;
                }
                for request in app.update(action) {
                    dispatch(request, &client, &tx, &task_tracker).await;
                }
            }
            _ = tick_interval.tick() => {
                app.update(Action::Tick);
            }
        }
    }

    input_task.abort();
    task_tracker.close();
    if tokio::time::timeout(Duration::from_millis(500), task_tracker.wait())
        .await
        .is_err()
    {
        tracing::debug!("exiting with requests still in flight");
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    tracing::info!("terminal portal stopped");
    Ok(())
}

async fn dispatch(
    request: Action,
    client: &SharedClient,
    tx: &Sender<Action>,
    task_tracker: &TaskTracker,
) {
    handle_side_effects(request, client.clone(), tx.clone(), task_tracker.clone()).await;
}

/// Forward key presses and resizes into the action channel.
async fn read_input(tx: Sender<Action>) {
    let mut reader = EventStream::new();
    while let Some(event) = reader.next().await {
        let action = match event {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => Action::Input(key),
            Ok(Event::Resize(width, height)) => Action::Resize(width, height),
            Ok(_) => continue,
            Err(e) => {
                tracing::warn!(error = %e, "terminal input stream failed");
                break;
            }
        };
        if tx.send(action).await.is_err() {
            break;
        }
    }
}
