use std::str::FromStr;

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::game::{Cell, GameEngine};

/// Map a player's color token to a terminal color. Unknown names render white.
pub fn piece_color(token: &str) -> Color {
    Color::from_str(token.trim()).unwrap_or(Color::White)
}

/// Build the board as text lines: column numbers, the framed grid, and a
/// marker under the selected column. Cells of a winning run are highlighted.
pub fn board_lines(engine: &GameEngine, selected_column: usize) -> Vec<Line<'static>> {
    let board = engine.board();
    let (height, width) = engine.dimensions();
    let winning_run = engine.winning_run();
    let mut lines = Vec::with_capacity(height + 4);

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..width {
        let label = format!("{:^3}", col + 1);
        if col == selected_column {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    col_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(col_line));

    let rule = "═".repeat(width * 3 + 1);
    lines.push(Line::from(format!("  ╔{rule}╗")));

    for row in 0..height {
        let mut row_spans = vec![Span::raw("  ║")];

        for col in 0..width {
            let span = match board.get(row, col) {
                Some(Cell::Occupied(id)) => {
                    let mut style = Style::default().fg(piece_color(engine.player(id).color()));
                    if winning_run.is_some_and(|run| run.contains(&(row, col))) {
                        style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
                    }
                    Span::styled(" ● ", style)
                }
                Some(Cell::Empty) | None => {
                    Span::styled(" . ", Style::default().fg(Color::DarkGray))
                }
            };
            row_spans.push(span);
        }

        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{rule}╝")));

    // Selection indicator
    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..width {
        if col == selected_column && !engine.is_over() {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    lines
}
