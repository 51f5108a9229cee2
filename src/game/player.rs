use std::collections::HashSet;
use std::fmt;

use crate::error::PlayerSetupError;

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 4;

/// Colors offered to each seat before the players pick their own.
pub const DEFAULT_COLORS: [&str; MAX_PLAYERS] = ["red", "blue", "green", "orange"];

/// A player's seat in setup order. Seat 0 moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(pub usize);

/// A participant in a game, identified by its color token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Player {
    id: PlayerId,
    color: String,
}

impl Player {
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// Get the color token, which doubles as the display name
    pub fn color(&self) -> &str {
        &self.color
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.color)
    }
}

/// Build the ordered player list for a new game.
///
/// Tokens are trimmed, must be non-empty, and must be pairwise distinct
/// (case-sensitive). Between [`MIN_PLAYERS`] and [`MAX_PLAYERS`] are accepted.
pub fn roster<S: AsRef<str>>(colors: &[S]) -> Result<Vec<Player>, PlayerSetupError> {
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&colors.len()) {
        return Err(PlayerSetupError::PlayerCount {
            count: colors.len(),
            min: MIN_PLAYERS,
            max: MAX_PLAYERS,
        });
    }

    let mut seen = HashSet::with_capacity(colors.len());
    let mut players = Vec::with_capacity(colors.len());

    for (idx, color) in colors.iter().enumerate() {
        let color = color.as_ref().trim();
        if color.is_empty() {
            return Err(PlayerSetupError::EmptyColor { position: idx + 1 });
        }
        if !seen.insert(color) {
            return Err(PlayerSetupError::DuplicateColor(color.to_string()));
        }
        players.push(Player {
            id: PlayerId(idx),
            color: color.to_string(),
        });
    }

    Ok(players)
}
