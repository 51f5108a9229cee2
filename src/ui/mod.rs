//! Terminal UI: a setup form for choosing players and colors, and the game
//! view for playing on one keyboard.

mod app;
pub mod board_widget;
mod game_view;
mod setup_view;

pub use app::{App, SetupForm};
