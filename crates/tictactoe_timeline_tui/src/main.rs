//! Tic-tac-toe timeline - terminal front end.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod replay;
mod ui;

use anyhow::{Context, Result};
use app::{App, Flow};
use clap::Parser;
use cli::{Cli, Command};
use config::TuiConfig;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::fs::File;
use std::io::{self, Stdout};
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = TuiConfig::load(cli.config.as_deref())?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => {
            init_tracing(&config, cli.log_file.as_deref(), false)?;
            run_tui(&config)
        }
        Command::Replay {
            actions,
            json,
            strict,
        } => {
            init_tracing(&config, cli.log_file.as_deref(), true)?;
            let state = replay::run(&actions, strict)?;
            if json {
                println!("{}", replay::render_json(&state)?);
            } else {
                print!("{}", replay::render_text(&state));
            }
            Ok(())
        }
    }
}

/// Sets up logging: `RUST_LOG` first, then the config's filter.
///
/// The TUI owns the terminal, so it only logs when a file is given.
fn init_tracing(config: &TuiConfig, log_file: Option<&Path>, stderr: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter()));

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None if stderr => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr)
                .init();
        }
        None => {}
    }
    Ok(())
}

/// Runs the interactive game until the user quits.
#[instrument(skip(config))]
fn run_tui(config: &TuiConfig) -> Result<()> {
    info!("Starting tic-tac-toe timeline TUI");
    let app = App::new(config.palette()?, config.show_cell_numbers());

    enable_raw_mode()?;
    let mut terminal = restore_on_err(setup_terminal(), || {
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen)
    })?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

/// Runs `restore` before propagating an error from `res`.
fn restore_on_err<T>(res: Result<T>, restore: impl FnOnce() -> io::Result<()>) -> Result<T> {
    res.or_else(|e| {
        restore().context("Failed to restore terminal")?;
        Err(e)
    })
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && app.handle_key(key.code) == Flow::Quit
        {
            info!("Quitting");
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_restore_runs_on_setup_failure() {
        let restored = Cell::new(false);
        let res: Result<()> = restore_on_err(Err(anyhow::anyhow!("no tty")), || {
            restored.set(true);
            Ok(())
        });
        assert!(restored.get());
        assert_eq!(res.unwrap_err().to_string(), "no tty");
    }

    #[test]
    fn test_restore_skipped_on_success() {
        let restored = Cell::new(false);
        let res = restore_on_err(Ok(7), || {
            restored.set(true);
            Ok(())
        });
        assert!(!restored.get());
        assert_eq!(res.unwrap(), 7);
    }

    #[test]
    fn test_restore_failure_is_reported() {
        let res: Result<()> = restore_on_err(Err(anyhow::anyhow!("no tty")), || {
            Err(io::Error::other("stuck in raw mode"))
        });
        assert_eq!(res.unwrap_err().to_string(), "Failed to restore terminal");
    }
}
