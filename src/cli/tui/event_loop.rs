//! TUI event loop and handling

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::{
    io::{self, Stdout},
    time::Duration,
};
use tokio::sync::mpsc;

use crate::cli::tui::main_app::{App, KeyOutcome};
use crate::cli::tui::ui::ui;
use crate::errors::PumpError;
use crate::models::AppEvent;

/// Run the main TUI event loop
pub async fn run_tui_event_loop(mut app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode().map_err(|e| PumpError::Tui(format!("failed to enable raw mode: {}", e)))?;
    let mut terminal = setup_or_restore(enter_alternate_screen, restore_terminal)?;

    let result = drive(&mut terminal, &mut app).await;

    // Cleanup, also after a failed draw
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn enter_alternate_screen() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

/// Best effort, the setup error is the one reported
fn restore_terminal() {
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
    let _ = disable_raw_mode();
}

/// Run `setup`, calling `restore` before handing back its error
fn setup_or_restore<T>(setup: impl FnOnce() -> Result<T>, restore: impl FnOnce()) -> Result<T> {
    setup().inspect_err(|e| {
        log::error!("Terminal setup failed: {}", e);
        restore();
    })
}

async fn drive<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();

    // Spawn tick generator
    let tx_tick = tx.clone();
    let tick_rate = Duration::from_millis(app.ui_config.tick_rate_ms);
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(tick_rate);
        loop {
            interval.tick().await;
            if tx_tick.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });

    // Terminal input is blocking, read it on its own thread
    let tx_input = tx.clone();
    tokio::task::spawn_blocking(move || {
        loop {
            match event::poll(Duration::from_millis(100)) {
                Ok(true) => match event::read() {
                    Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                        if tx_input.send(AppEvent::Input(key)).is_err() {
                            break;
                        }
                    }
                    Ok(_) => {}
                    Err(e) => {
                        log::error!("Failed to read terminal event: {}", e);
                        break;
                    }
                },
                Ok(false) => {
                    if tx_input.is_closed() {
                        break;
                    }
                }
                Err(e) => {
                    log::error!("Failed to poll terminal events: {}", e);
                    break;
                }
            }
        }
    });

    // Initial load when the view appears
    app.list_pipelines(tx.clone());

    loop {
        terminal.draw(|f| ui(f, app))?;

        let Some(event) = rx.recv().await else {
            return Ok(());
        };
        if app.handle_event(event, tx.clone()) == KeyOutcome::Quit {
            return Ok(());
        }
    }
}
