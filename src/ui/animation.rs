use crate::game::{DropResult, FallPath, Player};

/// A token sliding down its column one row per tick.
///
/// The engine has already applied the drop when this is created; the
/// animation only decides what the board looks like until the token lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallAnimation {
    path: FallPath,
    player: Player,
    row: usize,
    outcome: DropResult,
}

impl FallAnimation {
    pub fn new(path: FallPath, player: Player, outcome: DropResult) -> Self {
        FallAnimation {
            path,
            player,
            row: 0,
            outcome,
        }
    }

    /// Advance one row. Returns true once the token sits on its landing row.
    pub fn tick(&mut self) -> bool {
        if self.row < self.path.landing_row {
            self.row += 1;
        }
        self.is_finished()
    }

    pub fn is_finished(&self) -> bool {
        self.row >= self.path.landing_row
    }

    pub fn current_row(&self) -> usize {
        self.row
    }

    pub fn column(&self) -> usize {
        self.path.column
    }

    pub fn landing_row(&self) -> usize {
        self.path.landing_row
    }

    pub fn player(&self) -> Player {
        self.player
    }

    /// Result of the drop being animated, reported once the token lands
    pub fn outcome(&self) -> DropResult {
        self.outcome
    }
}
