//! Interactive terminal front end for the todo list.
//!
//! Usage:
//!
//! ```text
//! todos [--database-url <path>] [--pool-size <n>] [--log-filter <filter>]
//! ```
//!
//! The screen is redrawn on stdout whenever the list changes; commands are
//! read line by line from stdin (`help` lists them). Logs go to stderr.

use clap::Parser;
use thiserror::Error;
use todos::{
    app::{AppError, TodoApp},
    config::AppConfig,
    telemetry::{TelemetryError, init_tracing},
    todo::presentation::{ScreenAction, TodoScreen, TodoView},
};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Stdout};
use tokio::runtime::Builder;
use tracing::info;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that end the interactive session.
#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
    #[error(transparent)]
    App(#[from] AppError),
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

fn main() -> Result<(), BoxError> {
    let config = AppConfig::parse();
    init_tracing(&config.log_filter).map_err(CliError::from)?;
    let runtime = Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(CliError::from)?;
    runtime.block_on(run(config)).map_err(Into::into)
}

async fn run(config: AppConfig) -> Result<(), CliError> {
    let app = TodoApp::connect(&config)?;
    info!(database_url = %config.database_url, "starting todo screen");

    let view_model = app.view_model();
    let mut states = view_model.subscribe();
    let mut screen = TodoScreen::new();
    let view = TodoView;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    let frame = view.render(&states.borrow_and_update());
    draw(&mut stdout, &frame, &screen).await?;

    loop {
        tokio::select! {
            changed = states.changed() => {
                if changed.is_err() {
                    break;
                }
                let frame = view.render(&states.borrow_and_update());
                draw(&mut stdout, &frame, &screen).await?;
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                let state = view_model.state();
                match screen.handle_input(&line, &state) {
                    ScreenAction::Emit(event) => {
                        // Mutations report failures through the state's error field.
                        drop(view_model.handle_event(event));
                    }
                    ScreenAction::Prompt(prompt) => write(&mut stdout, &prompt).await?,
                    ScreenAction::Message(message) => {
                        write(&mut stdout, &format!("{message}\n")).await?;
                    }
                    ScreenAction::Render => draw(&mut stdout, &view.render(&state), &screen).await?,
                    ScreenAction::Quit => break,
                }
            }
        }
    }

    info!("todo screen closed");
    Ok(())
}

async fn draw(stdout: &mut Stdout, frame: &str, screen: &TodoScreen) -> Result<(), CliError> {
    write(stdout, "\n").await?;
    write(stdout, frame).await?;
    match screen.pending_prompt() {
        Some(prompt) => write(stdout, &prompt).await,
        None => write(stdout, "> ").await,
    }
}

async fn write(stdout: &mut Stdout, text: &str) -> Result<(), CliError> {
    stdout.write_all(text.as_bytes()).await?;
    stdout.flush().await?;
    Ok(())
}
