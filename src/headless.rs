//! Line-oriented front end: one column number per input line, one JSON object
//! per output line.
//!
//! Columns are zero-based, matching [`GameEngine::drop_piece`]. Blank lines
//! and lines starting with `#` are skipped. Input that is not a column, or a
//! column outside the board, produces an `{"error": ...}` line and play
//! continues.

use std::io::{self, BufRead, Write};

use serde_json::json;
use tracing::warn;

use crate::game::GameEngine;

/// Counts of what a headless run processed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Pieces actually placed. Full columns and moves after the end are not counted.
    pub moves: usize,
    pub errors: usize,
}

/// Feed every column in `input` to `engine`, reporting each result to `output`.
pub fn run<R: BufRead, W: Write>(
    engine: &mut GameEngine,
    input: R,
    mut output: W,
) -> io::Result<RunSummary> {
    let mut summary = RunSummary::default();

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let column = match line.parse::<usize>() {
            Ok(column) => column,
            Err(_) => {
                warn!(input = line, "not a column number");
                summary.errors += 1;
                writeln!(output, "{}", json!({ "error": format!("not a column: '{line}'") }))?;
                continue;
            }
        };

        match engine.drop_piece(column) {
            Ok(outcome) => {
                if outcome.placement().is_some() {
                    summary.moves += 1;
                }
                serde_json::to_writer(&mut output, &outcome)?;
                writeln!(output)?;
            }
            Err(err) => {
                warn!(%err, "move rejected");
                summary.errors += 1;
                writeln!(output, "{}", json!({ "error": err.to_string() }))?;
            }
        }
    }

    output.flush()?;
    Ok(summary)
}
