//! Terminal UI for tactoe.
//!
//! One event loop owns the [`App`]; a blocking task forwards key presses and
//! short-lived timer tasks deliver the delayed computer turns. All game
//! mutations happen on the loop.

mod app;
mod input;
mod ui;

use crate::config::GameConfig;
use anyhow::Result;
use app::{App, AppCommand};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument, warn};

/// Messages delivered to the event loop.
#[derive(Debug, Clone, Copy)]
enum AppEvent {
    /// A key was pressed.
    Key(KeyCode),
    /// The computer's delay elapsed for this game generation.
    ComputerTurn(u64),
}

/// Run the TUI until the player quits.
#[instrument(skip_all, fields(delay_ms = *config.computer_delay_ms()))]
pub async fn run_tui(config: GameConfig) -> Result<()> {
    info!("Starting tactoe TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_loop(&mut terminal, config).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: GameConfig,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let delay = config.computer_delay();
    let mut app = App::new(&config);

    let input_tx = event_tx.clone();
    let input = tokio::task::spawn_blocking(move || forward_keys(input_tx));

    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        let Some(event) = event_rx.recv().await else {
            warn!("Event channel closed");
            break;
        };

        match event {
            AppEvent::Key(key) => match app.handle_key(key) {
                AppCommand::Quit => {
                    info!("User quit");
                    break;
                }
                AppCommand::ScheduleComputer { generation } => {
                    schedule_computer(event_tx.clone(), delay, generation);
                }
                AppCommand::Continue => {}
            },
            AppEvent::ComputerTurn(generation) => app.computer_turn(generation),
        }
    }

    drop(event_rx);
    input.await??;
    Ok(())
}

/// Delivers a computer turn after the UX pause.
fn schedule_computer(tx: mpsc::UnboundedSender<AppEvent>, delay: Duration, generation: u64) {
    debug!(?delay, generation, "Scheduling computer turn");
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        // The loop may have exited; nothing to deliver to then.
        let _ = tx.send(AppEvent::ComputerTurn(generation));
    });
}

/// Forwards key presses until the event loop drops its receiver.
fn forward_keys(tx: mpsc::UnboundedSender<AppEvent>) -> io::Result<()> {
    while !tx.is_closed() {
        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press && tx.send(AppEvent::Key(key.code)).is_err() {
                break;
            }
        }
    }
    debug!("Key forwarder stopped");
    Ok(())
}
