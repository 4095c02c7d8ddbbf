use tracing::{debug, info};

use super::board::{Board, Line, COLS};
use super::player::Player;
use crate::error::ContractViolation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    InProgress,
    Won(Player),
    Tied,
}

impl Phase {
    pub fn is_terminal(self) -> bool {
        self != Phase::InProgress
    }
}

/// Outcome of a single drop.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropResult {
    /// Token placed, game goes on; carries the player whose turn it now is.
    Continue(Player),
    Win(Player),
    Tie,
    /// Column has no room. Nothing changed, same player to move.
    ColumnFull,
}

/// Where the most recent token came to rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub row: usize,
    pub col: usize,
    pub player: Player,
}

/// Rows a token passes through on its way down a column, from the top row to
/// the landing row inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallPath {
    pub column: usize,
    pub landing_row: usize,
}

impl FallPath {
    pub fn rows(&self) -> impl Iterator<Item = usize> {
        0..=self.landing_row
    }

    /// Number of rows travelled, counting the landing row
    pub fn steps(&self) -> usize {
        self.landing_row + 1
    }
}

/// Display names for both seats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Players {
    names: [String; 2],
}

impl Players {
    pub fn new(player1: impl Into<String>, player2: impl Into<String>) -> Self {
        Players {
            names: [player1.into(), player2.into()],
        }
    }

    pub fn name(&self, player: Player) -> &str {
        &self.names[player.index()]
    }
}

impl Default for Players {
    fn default() -> Self {
        Players::new(Player::One.color_name(), Player::Two.color_name())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    phase: Phase,
    players: Players,
    last_drop: Option<Placement>,
    moves: usize,
}

impl GameState {
    /// Create initial game state
    pub fn initial(players: Players) -> Self {
        GameState {
            board: Board::new(),
            current_player: Player::One, // Player one always opens
            phase: Phase::InProgress,
            players,
            last_drop: None,
            moves: 0,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn players(&self) -> &Players {
        &self.players
    }

    pub fn last_drop(&self) -> Option<Placement> {
        self.last_drop
    }

    /// Tokens placed so far
    pub fn moves(&self) -> usize {
        self.moves
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.phase.is_terminal()
    }

    /// Columns that still accept a token; empty once the game is over
    pub fn open_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }

        (0..COLS)
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// The four cells that decided the game, if it was won
    pub fn winning_line(&self) -> Option<Line> {
        match (self.phase, self.last_drop) {
            (Phase::Won(_), Some(placement)) => self.board.line_through(placement.row, placement.col),
            _ => None,
        }
    }

    /// Apply a move in place. Either the whole transition happens or nothing
    /// does.
    pub(super) fn apply_drop(&mut self, column: usize) -> Result<DropResult, ContractViolation> {
        if self.is_terminal() {
            return Err(ContractViolation::GameOver { phase: self.phase });
        }
        if column >= COLS {
            return Err(ContractViolation::InvalidColumn { column });
        }

        let player = self.current_player;
        let Some(row) = self.board.drop_piece(column, player) else {
            debug!(column, ?player, "column full, drop rejected");
            return Ok(DropResult::ColumnFull);
        };

        self.moves += 1;
        self.last_drop = Some(Placement { row, col: column, player });
        debug!(column, row, ?player, moves = self.moves, "token placed");

        // Any new line must run through the token just placed
        if self.board.check_win(row, column) {
            self.phase = Phase::Won(player);
            info!(?player, moves = self.moves, "game won");
            return Ok(DropResult::Win(player));
        }

        if self.board.is_top_row_full() {
            self.phase = Phase::Tied;
            info!(moves = self.moves, "game tied");
            return Ok(DropResult::Tie);
        }

        self.current_player = player.other();
        Ok(DropResult::Continue(self.current_player))
    }
}
