//! Core Connect Four rules: board representation, player setup, and the game
//! engine that sequences turns and detects wins and ties.

mod board;
mod engine;
mod player;

pub use board::{
    Board, Cell, Run, DEFAULT_COLS, DEFAULT_ROWS, MAX_DIMENSION, MIN_DIMENSION, RUN_LENGTH,
};
pub use engine::{GameEngine, GameStatus, MoveOutcome};
pub use player::{roster, Player, PlayerId, DEFAULT_COLORS, MAX_PLAYERS, MIN_PLAYERS};
