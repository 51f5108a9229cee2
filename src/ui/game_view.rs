use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::board_widget::{board_lines, piece_color};
use crate::game::{GameEngine, GameStatus};

pub fn render(
    frame: &mut Frame,
    engine: &GameEngine,
    selected_column: usize,
    message: &Option<String>,
) {
    let (height, _) = engine.dimensions();
    let board_rows = u16::try_from(height).unwrap_or(u16::MAX).saturating_add(4);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(board_rows), // Board
            Constraint::Length(3), // Message
            Constraint::Length(4), // Controls
        ])
        .split(frame.area());

    render_header(frame, engine, chunks[0]);
    render_board(frame, engine, selected_column, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, engine, chunks[3]);
}

fn render_header(frame: &mut Frame, engine: &GameEngine, area: Rect) {
    let (status, color) = match engine.status() {
        GameStatus::InProgress => {
            let current = engine.current_player_color();
            (
                format!("Current Player: {current}  |  Move {}", engine.moves_played() + 1),
                piece_color(current),
            )
        }
        GameStatus::Won(id) => {
            let winner = engine.player(id).color();
            (format!("Game Over  |  {winner} won!"), piece_color(winner))
        }
        GameStatus::Tied => ("Game Over  |  Tie!".to_string(), Color::Gray),
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, engine: &GameEngine, selected_column: usize, area: Rect) {
    let board_widget =
        Paragraph::new(board_lines(engine, selected_column)).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, engine: &GameEngine, area: Rect) {
    let line1 = Line::from("←/→: Move  |  Enter: Drop  |  1-9: Drop in column  |  R: Restart  |  N: New setup  |  Q: Quit");

    // Turn order legend
    let mut line2 = vec![Span::raw("Order: ")];
    for (idx, player) in engine.players().iter().enumerate() {
        if idx > 0 {
            line2.push(Span::raw(" → "));
        }
        let mut style = Style::default().fg(piece_color(player.color()));
        if !engine.is_over() && idx == engine.current_player_index() {
            style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        }
        line2.push(Span::styled(player.color().to_string(), style));
    }

    let controls = Paragraph::new(vec![line1, Line::from(line2)])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}
