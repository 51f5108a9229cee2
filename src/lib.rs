//! # Connect Four
//!
//! Rules engine for Connect Four with 2 to 4 players, plus two front ends
//! that drive it: a terminal UI built with Ratatui and a headless runner that
//! reads column numbers and prints JSON outcomes.
//!
//! ## Modules
//!
//! - [`game`]: Core game logic (board, players, game engine)
//! - [`ui`]: Terminal UI (setup form, game view)
//! - [`headless`]: Line-oriented front end
//! - [`config`]: TOML configuration loading and validation
//! - [`logging`]: Tracing subscriber setup
//! - [`error`]: Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod headless;
pub mod logging;
pub mod ui;
