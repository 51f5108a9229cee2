use serde::Serialize;
use tracing::{debug, info, warn};

use super::board::{Board, Cell, Run, DEFAULT_COLS, DEFAULT_ROWS};
use super::player::{roster, Player, PlayerId};
use crate::error::GameError;

/// Where a game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(PlayerId),
    Tied,
}

/// Result of a single [`GameEngine::drop_piece`] call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum MoveOutcome {
    /// The column had no empty cell; nothing changed.
    ColumnFull,
    /// The piece landed and the game goes on.
    Accepted {
        row: usize,
        column: usize,
        color: String,
        next_player_color: String,
    },
    /// The piece landed and completed a run for its owner.
    Won {
        row: usize,
        column: usize,
        color: String,
    },
    /// The piece landed in the last empty cell without completing a run.
    Tied {
        row: usize,
        column: usize,
        color: String,
    },
    /// The game had already ended; nothing changed.
    GameAlreadyOver,
}

impl MoveOutcome {
    /// Check if this outcome ended the game
    pub fn is_terminal(&self) -> bool {
        matches!(self, MoveOutcome::Won { .. } | MoveOutcome::Tied { .. })
    }

    /// Get the cell that was filled, if any
    pub fn placement(&self) -> Option<(usize, usize)> {
        match *self {
            MoveOutcome::Accepted { row, column, .. }
            | MoveOutcome::Won { row, column, .. }
            | MoveOutcome::Tied { row, column, .. } => Some((row, column)),
            MoveOutcome::ColumnFull | MoveOutcome::GameAlreadyOver => None,
        }
    }
}

/// A single game session: the board, the seated players and whose turn it is.
///
/// A value of this type only exists once a game has started. Starting a new
/// game means building a new engine; nothing carries over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    board: Board,
    players: Vec<Player>,
    current: usize,
    status: GameStatus,
    moves_played: usize,
}

impl GameEngine {
    /// Start a game on the standard 6x7 board
    pub fn start<S: AsRef<str>>(colors: &[S]) -> Result<Self, GameError> {
        Self::start_with_dimensions(colors, DEFAULT_ROWS, DEFAULT_COLS)
    }

    /// Start a game with the given players, in turn order, on a custom board.
    pub fn start_with_dimensions<S: AsRef<str>>(
        colors: &[S],
        height: usize,
        width: usize,
    ) -> Result<Self, GameError> {
        let players = roster(colors).inspect_err(|err| {
            warn!(%err, "rejected player setup");
        })?;
        let board = Board::new(height, width)?;

        info!(
            players = ?players.iter().map(Player::color).collect::<Vec<_>>(),
            height,
            width,
            "game started"
        );

        Ok(GameEngine {
            board,
            players,
            current: 0,
            status: GameStatus::InProgress,
            moves_played: 0,
        })
    }

    /// Drop the current player's piece into `column`.
    ///
    /// Full columns and finished games are reported through [`MoveOutcome`]
    /// and leave the engine untouched; only an out-of-range column is an error.
    pub fn drop_piece(&mut self, column: usize) -> Result<MoveOutcome, GameError> {
        if self.is_over() {
            debug!(column, "drop ignored, game already over");
            return Ok(MoveOutcome::GameAlreadyOver);
        }

        let Some(row) = self.board.find_landing_row(column)? else {
            debug!(column, "drop ignored, column full");
            return Ok(MoveOutcome::ColumnFull);
        };

        let mover = &self.players[self.current];
        let id = mover.id();
        let color = mover.color().to_string();

        self.board.place(row, column, id);
        self.moves_played += 1;

        // Win beats tie when the last empty cell completes a run
        if self.board.has_four_in_a_row(id) {
            self.status = GameStatus::Won(id);
            info!(%color, row, column, moves = self.moves_played, "game won");
            return Ok(MoveOutcome::Won { row, column, color });
        }

        if self.board.is_full() {
            self.status = GameStatus::Tied;
            info!(row, column, moves = self.moves_played, "game tied");
            return Ok(MoveOutcome::Tied { row, column, color });
        }

        self.current = (self.current + 1) % self.players.len();
        let next_player_color = self.current_player_color().to_string();
        debug!(%color, row, column, next = %next_player_color, "piece placed");

        Ok(MoveOutcome::Accepted {
            row,
            column,
            color,
            next_player_color,
        })
    }

    /// Get the player whose turn it is. After a win this is the winner.
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    pub fn current_player_color(&self) -> &str {
        self.current_player().color()
    }

    /// Get the current player's position in setup order
    pub fn current_player_index(&self) -> usize {
        self.current
    }

    /// Get the occupant of a cell, `None` if the cell is empty.
    pub fn cell_at(&self, row: usize, col: usize) -> Result<Option<&Player>, GameError> {
        let (height, width) = self.dimensions();
        if row >= height {
            return Err(GameError::InvalidRow { row, height });
        }
        if col >= width {
            return Err(GameError::InvalidColumn { column: col, width });
        }

        Ok(match self.board.get(row, col) {
            Some(Cell::Occupied(id)) => Some(self.player(id)),
            Some(Cell::Empty) | None => None,
        })
    }

    /// Get `(height, width)` of the board
    pub fn dimensions(&self) -> (usize, usize) {
        (self.board.height(), self.board.width())
    }

    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn winner(&self) -> Option<&Player> {
        match self.status {
            GameStatus::Won(id) => Some(self.player(id)),
            GameStatus::InProgress | GameStatus::Tied => None,
        }
    }

    /// Get the winner's four cells, once the game is won
    pub fn winning_run(&self) -> Option<Run> {
        match self.status {
            GameStatus::Won(id) => self.board.winning_run(id),
            GameStatus::InProgress | GameStatus::Tied => None,
        }
    }

    /// Get the players in turn order
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.0]
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get the number of pieces placed so far
    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    /// Get list of columns a piece can be dropped into (empty once over)
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_over() {
            return Vec::new();
        }
        self.board.legal_columns()
    }
}
