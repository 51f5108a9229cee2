use super::player::PlayerId;
use crate::error::GameError;

pub const DEFAULT_ROWS: usize = 6;
pub const DEFAULT_COLS: usize = 7;

/// Number of same-colored cells in a line needed to win.
pub const RUN_LENGTH: usize = 4;

/// Smallest board on which a run fits in every direction.
pub const MIN_DIMENSION: usize = RUN_LENGTH;

/// Largest board side the terminal UI can lay out.
pub const MAX_DIMENSION: usize = 64;

/// Step vectors `(row, col)` for horizontal, vertical and both diagonals.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Coordinates `(row, col)` of a winning line.
pub type Run = [(usize, usize); RUN_LENGTH];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Occupied(PlayerId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    height: usize,
    width: usize,
    cells: Vec<Vec<Cell>>,
}

impl Board {
    /// Create an empty board. Row 0 is the top, row `height - 1` the bottom.
    pub fn new(height: usize, width: usize) -> Result<Self, GameError> {
        let sides = MIN_DIMENSION..=MAX_DIMENSION;
        if !sides.contains(&height) || !sides.contains(&width) {
            return Err(GameError::InvalidDimensions { height, width });
        }

        Ok(Board {
            height,
            width,
            cells: vec![vec![Cell::Empty; width]; height],
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the cell at a position, or `None` if it lies outside the board
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|cells| cells.get(col)).copied()
    }

    /// Find the row a piece dropped into `col` would settle in.
    ///
    /// Returns `Ok(None)` when the column is already full.
    pub fn find_landing_row(&self, col: usize) -> Result<Option<usize>, GameError> {
        if col >= self.width {
            return Err(GameError::InvalidColumn {
                column: col,
                width: self.width,
            });
        }

        Ok((0..self.height)
            .rev()
            .find(|&row| self.cells[row][col] == Cell::Empty))
    }

    /// Write `player` into an empty cell.
    ///
    /// # Panics
    ///
    /// Panics if the cell is out of range or already occupied. Callers must
    /// take `row` from [`Board::find_landing_row`] for the same column.
    pub fn place(&mut self, row: usize, col: usize, player: PlayerId) {
        assert_eq!(
            self.cells[row][col],
            Cell::Empty,
            "cell ({row}, {col}) is already occupied"
        );
        debug_assert_eq!(
            self.find_landing_row(col),
            Ok(Some(row)),
            "pieces must settle into the lowest empty row"
        );

        self.cells[row][col] = Cell::Occupied(player);
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.width {
            return true;
        }
        self.cells[0][col] != Cell::Empty
    }

    /// Get list of columns that still accept a piece
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..self.width)
            .filter(|&col| !self.is_column_full(col))
            .collect()
    }

    /// Check if every cell on the board is occupied
    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Cell::Empty))
    }

    pub fn has_four_in_a_row(&self, player: PlayerId) -> bool {
        self.winning_run(player).is_some()
    }

    /// Find the first run owned entirely by `player`.
    ///
    /// Every cell is tried as the start of a run in row-major order, in each
    /// of the four directions; the scan stops at the first match.
    pub fn winning_run(&self, player: PlayerId) -> Option<Run> {
        let target = Cell::Occupied(player);

        for row in 0..self.height {
            for col in 0..self.width {
                for &(d_row, d_col) in &DIRECTIONS {
                    let Some(run) = self.run_from(row, col, d_row, d_col) else {
                        continue;
                    };
                    if run.iter().all(|&(r, c)| self.cells[r][c] == target) {
                        return Some(run);
                    }
                }
            }
        }

        None
    }

    /// Coordinates of the run starting at `(row, col)`, if it stays on the board
    fn run_from(&self, row: usize, col: usize, d_row: isize, d_col: isize) -> Option<Run> {
        let mut run = [(0, 0); RUN_LENGTH];

        for (step, slot) in run.iter_mut().enumerate() {
            let r = row.checked_add_signed(d_row * step as isize)?;
            let c = col.checked_add_signed(d_col * step as isize)?;
            if r >= self.height || c >= self.width {
                return None;
            }
            *slot = (r, c);
        }

        Some(run)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board {
            height: DEFAULT_ROWS,
            width: DEFAULT_COLS,
            cells: vec![vec![Cell::Empty; DEFAULT_COLS]; DEFAULT_ROWS],
        }
    }
}
