//! Core Connect Four rules: board representation, players, the game state
//! machine and the engine that owns it.

mod board;
mod engine;
mod player;
mod state;

pub use board::{Board, Cell, Direction, Line, COLS, CONNECT, ROWS};
pub use engine::Engine;
pub use player::Player;
pub use state::{DropResult, FallPath, GameState, Phase, Placement, Players};
