use super::player::Player;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Tokens in a row needed to win.
pub const CONNECT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Owned(Player),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Owned(player) => Some(player),
        }
    }
}

/// The four line orientations. Each step goes "forward": rightwards, or
/// downwards when the line is vertical.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Horizontal,
    Vertical,
    /// Top-left to bottom-right (\)
    DiagonalDown,
    /// Bottom-left to top-right (/)
    DiagonalUp,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalDown,
        Direction::DiagonalUp,
    ];

    /// (row step, col step)
    pub fn step(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDown => (1, 1),
            Direction::DiagonalUp => (-1, 1),
        }
    }
}

/// Four cells forming a connection, as (row, col) pairs in forward order.
pub type Line = [(usize, usize); CONNECT];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Build a board from a picture, top row first: `.` empty, `X` player one,
    /// `O` player two. Returns `None` on a malformed picture.
    pub fn from_rows(rows: [&str; ROWS]) -> Option<Self> {
        let mut board = Board::new();
        for (row, text) in rows.iter().enumerate() {
            let symbols: Vec<char> = text.chars().filter(|c| !c.is_whitespace()).collect();
            if symbols.len() != COLS {
                return None;
            }
            for (col, symbol) in symbols.into_iter().enumerate() {
                board.cells[row][col] = match symbol {
                    '.' => Cell::Empty,
                    'X' => Cell::Owned(Player::One),
                    'O' => Cell::Owned(Player::Two),
                    _ => return None,
                };
            }
        }
        Some(board)
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row 5 is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Bounds-checked lookup; anything off the grid is `None`.
    pub fn cell(&self, row: isize, col: isize) -> Option<Cell> {
        if row < 0 || col < 0 {
            return None;
        }
        self.cells
            .get(row as usize)
            .and_then(|cells| cells.get(col as usize))
            .copied()
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[0][col] != Cell::Empty
    }

    /// Lowest empty row in a column, scanning from the bottom up
    pub fn landing_row(&self, col: usize) -> Option<usize> {
        if col >= COLS {
            return None;
        }
        (0..ROWS).rev().find(|&row| self.cells[row][col].is_empty())
    }

    /// Number of tokens stacked in a column
    pub fn column_height(&self, col: usize) -> usize {
        match self.landing_row(col) {
            Some(row) => ROWS - 1 - row,
            None if col < COLS => ROWS,
            None => 0,
        }
    }

    /// Drop a piece in a column, returns the row where it landed.
    /// `None` means the column is full or out of range; the board is untouched.
    pub fn drop_piece(&mut self, col: usize, player: Player) -> Option<usize> {
        let row = self.landing_row(col)?;
        self.cells[row][col] = Cell::Owned(player);
        Some(row)
    }

    /// Every column holds a token in the top row. Under gravity this means the
    /// whole board is occupied.
    pub fn is_top_row_full(&self) -> bool {
        self.cells[0].iter().all(|cell| !cell.is_empty())
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|cell| !cell.is_empty())
    }

    pub fn token_count(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| !cell.is_empty()).count()
    }

    /// No token floats above an empty cell in the same column.
    pub fn satisfies_gravity(&self) -> bool {
        (0..COLS).all(|col| {
            (0..ROWS - 1).all(|row| {
                self.cells[row][col].is_empty() || !self.cells[row + 1][col].is_empty()
            })
        })
    }

    /// Anchor cell plus the next three cells in `direction` all belong to
    /// `player`. Off-board cells count as not connected.
    pub fn connected_in(&self, row: isize, col: isize, player: Player, direction: Direction) -> bool {
        let (dr, dc) = direction.step();
        (0..CONNECT as isize)
            .all(|k| self.cell(row + k * dr, col + k * dc) == Some(Cell::Owned(player)))
    }

    /// Whether a line of four for `player` starts at (row, col) in any of the
    /// four forward directions.
    pub fn has_connection(&self, row: usize, col: usize, player: Player) -> bool {
        Direction::ALL
            .iter()
            .any(|&direction| self.connected_in(row as isize, col as isize, player, direction))
    }

    /// Find a winning line that passes through (row, col), in any position
    /// along it. Only the owner of that cell is considered.
    pub fn line_through(&self, row: usize, col: usize) -> Option<Line> {
        let player = self.cells.get(row)?.get(col)?.owner()?;

        for direction in Direction::ALL {
            let (dr, dc) = direction.step();
            // Slide the window so (row, col) sits at each of the four offsets
            for offset in 0..CONNECT as isize {
                let start_row = row as isize - offset * dr;
                let start_col = col as isize - offset * dc;
                if self.connected_in(start_row, start_col, player, direction) {
                    let mut line = [(0, 0); CONNECT];
                    for (k, slot) in line.iter_mut().enumerate() {
                        let k = k as isize;
                        *slot = ((start_row + k * dr) as usize, (start_col + k * dc) as usize);
                    }
                    return Some(line);
                }
            }
        }

        None
    }

    /// Check if the last move at (row, col) resulted in a win
    pub fn check_win(&self, row: usize, col: usize) -> bool {
        self.line_through(row, col).is_some()
    }

    /// Scan the whole board for any connection, anchoring at every occupied
    /// cell. Slower than `check_win`, kept as the reference answer.
    pub fn winner_anywhere(&self) -> Option<Player> {
        for row in 0..ROWS {
            for col in 0..COLS {
                if let Cell::Owned(player) = self.cells[row][col] {
                    if self.has_connection(row, col, player) {
                        return Some(player);
                    }
                }
            }
        }
        None
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
