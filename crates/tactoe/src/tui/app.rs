//! Application state and key handling.
//!
//! The app owns the only copy of the game state; the run loop feeds it keys
//! and delayed computer turns and draws whatever it holds.

use super::input::{digit_position, move_cursor};
use crate::alerts::{AlertItem, alert_for};
use crate::config::GameConfig;
use crossterm::event::KeyCode;
use rand::rngs::StdRng;
use tactoe_engine::{GameState, Player, Position, TurnOrchestrator, winning_pattern};
use tracing::{debug, error, info, instrument};

/// What the run loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    /// Nothing to schedule.
    Continue,
    /// Deliver a computer turn for this game generation after the delay.
    ScheduleComputer {
        /// Generation the turn belongs to.
        generation: u64,
    },
    /// Leave the UI.
    Quit,
}

/// Main application state.
pub struct App {
    game: GameState,
    orchestrator: TurnOrchestrator<StdRng>,
    cursor: Position,
    status_message: String,
    alert: Option<AlertItem>,
    generation: u64,
    human_glyph: char,
    computer_glyph: char,
}

impl App {
    /// Creates a new application.
    pub fn new(config: &GameConfig) -> Self {
        let orchestrator = match config.seed() {
            Some(seed) => TurnOrchestrator::seeded(*seed),
            None => TurnOrchestrator::from_entropy(),
        };
        Self {
            game: GameState::new(),
            orchestrator,
            cursor: Position::Center,
            status_message: "Your move.".to_string(),
            alert: None,
            generation: 0,
            human_glyph: *config.human_glyph(),
            computer_glyph: *config.computer_glyph(),
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// The dialog to show, if the game has ended.
    pub fn alert(&self) -> Option<&AlertItem> {
        self.alert.as_ref()
    }

    /// Glyph for a player's cells.
    pub fn glyph(&self, player: Player) -> char {
        match player {
            Player::Human => self.human_glyph,
            Player::Computer => self.computer_glyph,
        }
    }

    /// Cells to highlight as the completed line.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        self.game
            .evaluate()
            .winner()
            .and_then(|winner| winning_pattern(self.game.board(), winner))
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) -> AppCommand {
        if self.alert.is_some() {
            return match key {
                KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Esc => {
                    self.restart();
                    AppCommand::Continue
                }
                KeyCode::Char('q') => AppCommand::Quit,
                _ => AppCommand::Continue,
            };
        }

        match key {
            KeyCode::Char('q') | KeyCode::Esc => AppCommand::Quit,
            KeyCode::Char('r') => {
                self.restart();
                AppCommand::Continue
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor),
            KeyCode::Char(c) => match digit_position(c) {
                Some(pos) => {
                    self.cursor = pos;
                    self.play(pos)
                }
                None => AppCommand::Continue,
            },
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
                AppCommand::Continue
            }
            _ => AppCommand::Continue,
        }
    }

    /// Plays the human's move; invalid cells are ignored.
    fn play(&mut self, pos: Position) -> AppCommand {
        if self.game.is_board_locked() {
            debug!(position = %pos, "Board locked, ignoring input");
            return AppCommand::Continue;
        }

        let exchange = match self.orchestrator.human_half(&self.game, pos.to_index()) {
            Ok(exchange) => exchange,
            Err(e) => {
                debug!(error = %e, "Ignoring invalid move");
                return AppCommand::Continue;
            }
        };

        self.game = exchange.into_state();
        if self.finish_if_over() {
            return AppCommand::Continue;
        }

        self.status_message = "Computer is thinking...".to_string();
        AppCommand::ScheduleComputer {
            generation: self.generation,
        }
    }

    /// Applies a scheduled computer turn unless the game was reset since.
    #[instrument(skip(self))]
    pub fn computer_turn(&mut self, generation: u64) {
        if generation != self.generation {
            debug!(current = self.generation, "Discarding stale computer turn");
            return;
        }
        if !self.game.is_board_locked() {
            debug!("No computer reply pending");
            return;
        }

        match self.orchestrator.computer_half(&self.game) {
            Ok(exchange) => {
                self.game = exchange.into_state();
                if let Some(mv) = self.game.last_move() {
                    self.status_message = format!("Computer played {}. Your move.", mv.position);
                }
                self.finish_if_over();
            }
            Err(e) => {
                error!(error = %e, "Computer could not move");
                self.status_message = format!("Computer could not move: {}", e);
            }
        }
    }

    /// Restarts the game and cancels any pending computer turn.
    pub fn restart(&mut self) {
        info!(generation = self.generation, "Restarting game");
        self.game = self.orchestrator.reset(&self.game);
        self.generation += 1;
        self.alert = None;
        self.status_message = "New game. Your move.".to_string();
    }

    fn finish_if_over(&mut self) -> bool {
        let outcome = self.game.evaluate();
        self.alert = alert_for(outcome);
        if self.alert.is_some() {
            info!(%outcome, "Game over");
            self.status_message = outcome.to_string();
        }
        self.alert.is_some()
    }
}
