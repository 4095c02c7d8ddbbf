use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use tracing::{debug, error};

use super::animation::FallAnimation;
use crate::config::AppConfig;
use crate::game::{DropResult, Engine, Phase, COLS};

const IDLE_POLL: Duration = Duration::from_millis(100);

pub struct App {
    engine: Engine,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
    falling: Option<FallAnimation>,
    /// Time per row of fall; `None` disables the animation
    tick: Option<Duration>,
    last_tick: Instant,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        let tick = config
            .animation
            .enabled
            .then(|| Duration::from_millis(config.animation.tick_ms));
        App {
            engine: Engine::initialize(
                config.players.player1.trim(),
                config.players.player2.trim(),
            ),
            selected_column: COLS / 2, // Start in middle
            should_quit: false,
            message: None,
            falling: None,
            tick,
            last_tick: Instant::now(),
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn falling(&self) -> Option<&FallAnimation> {
        self.falling.as_ref()
    }

    /// Input is ignored while a token is still falling
    pub fn accepts_input(&self) -> bool {
        self.falling.is_none()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Wait for a key or the next animation tick, whichever comes first
    fn handle_events(&mut self) -> io::Result<()> {
        let timeout = match (self.falling, self.tick) {
            (Some(_), Some(tick)) => tick.saturating_sub(self.last_tick.elapsed()),
            _ => IDLE_POLL,
        };

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }

        if let Some(tick) = self.tick {
            if self.last_tick.elapsed() >= tick {
                self.last_tick = Instant::now();
                self.advance_animation();
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
            self.should_quit = true;
            return;
        }
        if !self.accepts_input() {
            return;
        }

        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < COLS {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char(c @ '1'..='7') => {
                self.selected_column = (c as usize) - ('1' as usize);
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                self.engine.reset();
                self.selected_column = COLS / 2;
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Move the falling token down one row; report the result once it lands
    pub fn advance_animation(&mut self) {
        let Some(anim) = self.falling.as_mut() else {
            return;
        };
        if anim.tick() {
            let outcome = anim.outcome();
            self.falling = None;
            self.announce(outcome);
        }
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        if self.engine.phase().is_terminal() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }

        let column = self.selected_column;
        // Path has to be read before the drop claims the slot
        let path = self.engine.fall_path(column);
        let player = self.engine.current_player();

        match self.engine.drop(column) {
            Ok(DropResult::ColumnFull) => {
                self.message = Some("Column is full!".to_string());
            }
            Ok(outcome) => {
                debug!(column, ?outcome, "drop applied");
                match (path, self.tick) {
                    (Some(path), Some(_)) => {
                        self.falling = Some(FallAnimation::new(path, player, outcome));
                        self.last_tick = Instant::now();
                    }
                    _ => self.announce(outcome),
                }
            }
            Err(err) => {
                error!(%err, "front-end offered an illegal drop");
                self.message = Some(err.to_string());
            }
        }
    }

    fn announce(&mut self, outcome: DropResult) {
        if matches!(outcome, DropResult::Win(_) | DropResult::Tie) {
            self.message = Some(format!("{} Press 'r' to play again.", self.engine.status_line()));
        }
    }

    /// Header text; follows the falling token rather than the engine so the
    /// result isn't revealed before the token lands
    pub fn status_line(&self) -> String {
        match self.falling {
            Some(anim) => format!("{} is dropping...", self.engine.name_of(anim.player())),
            None => self.engine.status_line(),
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.falling.is_none() && self.engine.phase() != Phase::InProgress
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, self);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}
