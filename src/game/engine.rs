use tracing::warn;

use super::board::{Cell, Line};
use super::player::Player;
use super::state::{DropResult, FallPath, GameState, Phase, Placement, Players};
use crate::error::ContractViolation;

/// Owns a single game and is the only thing allowed to change it.
///
/// Front-ends read through the accessors and feed column choices to
/// [`Engine::drop`]; they never touch the grid directly.
#[derive(Debug, Clone)]
pub struct Engine {
    state: GameState,
}

impl Engine {
    /// Start a fresh game. Player one moves first.
    pub fn initialize(player1: impl Into<String>, player2: impl Into<String>) -> Self {
        Engine {
            state: GameState::initial(Players::new(player1, player2)),
        }
    }

    /// Drop the current player's token into `column`.
    ///
    /// A full column is an ordinary result and leaves the turn where it was.
    /// An out-of-range column or a drop after the game ended is a
    /// [`ContractViolation`].
    pub fn drop(&mut self, column: usize) -> Result<DropResult, ContractViolation> {
        self.state.apply_drop(column).inspect_err(|err| {
            warn!(%err, "rejected drop");
        })
    }

    /// Begin a new game with the same players.
    pub fn reset(&mut self) {
        let players = self.state.players().clone();
        self.state = GameState::initial(players);
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Row 0 is the top, row 5 is the bottom
    pub fn cell_at(&self, row: usize, col: usize) -> Cell {
        self.state.board().get(row, col)
    }

    pub fn current_player(&self) -> Player {
        self.state.current_player()
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn players(&self) -> &Players {
        self.state.players()
    }

    pub fn name_of(&self, player: Player) -> &str {
        self.state.players().name(player)
    }

    pub fn last_drop(&self) -> Option<Placement> {
        self.state.last_drop()
    }

    pub fn is_column_full(&self, col: usize) -> bool {
        self.state.board().is_column_full(col)
    }

    /// Columns a front-end should accept input for
    pub fn open_columns(&self) -> Vec<usize> {
        self.state.open_columns()
    }

    pub fn landing_row(&self, col: usize) -> Option<usize> {
        self.state.board().landing_row(col)
    }

    /// Path a token dropped into `col` right now would take. Ask before
    /// calling [`Engine::drop`], since afterwards the slot is taken.
    pub fn fall_path(&self, col: usize) -> Option<FallPath> {
        self.landing_row(col).map(|landing_row| FallPath {
            column: col,
            landing_row,
        })
    }

    pub fn winning_line(&self) -> Option<Line> {
        self.state.winning_line()
    }

    /// Turn or result label for the players.
    pub fn status_line(&self) -> String {
        match self.phase() {
            Phase::InProgress => format!("{}'s turn", self.name_of(self.current_player())),
            Phase::Won(winner) => format!("{} is the winner!", self.name_of(winner)),
            Phase::Tied => format!(
                "{} and {} tied!",
                self.name_of(Player::One),
                self.name_of(Player::Two)
            ),
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        let players = Players::default();
        Engine {
            state: GameState::initial(players),
        }
    }
}
