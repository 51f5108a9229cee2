use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::app::SetupForm;
use super::board_widget::piece_color;
use crate::game::{MAX_PLAYERS, MIN_PLAYERS};

pub fn render(frame: &mut Frame, form: &SetupForm, message: &Option<String>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(MAX_PLAYERS as u16 + 4), // Form
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    let title = Paragraph::new("Start New Game")
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Connect Four"));
    frame.render_widget(title, chunks[0]);

    render_form(frame, form, chunks[1]);

    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(msg_widget, chunks[2]);

    let controls = Paragraph::new(
        "←/→: Total players  |  ↑/↓/Tab: Select player  |  Type: Edit color  |  Enter: Start  |  Esc: Quit",
    )
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title("Controls"));
    frame.render_widget(controls, chunks[3]);
}

fn render_form(frame: &mut Frame, form: &SetupForm, area: Rect) {
    let mut lines = Vec::new();

    let count = form.player_count();
    let left = if count > MIN_PLAYERS { "◀" } else { " " };
    let right = if count < MAX_PLAYERS { "▶" } else { " " };
    lines.push(Line::from(format!("Total Players:  {left} {count} {right}")));
    lines.push(Line::from(""));

    for (idx, color) in form.colors().iter().enumerate() {
        let focused = idx == form.focused();
        let label_style = if focused {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let cursor = if focused { "_" } else { " " };

        lines.push(Line::from(vec![
            Span::styled(format!("Player {} Color: ", idx + 1), label_style),
            Span::styled(format!("{color:<12}{cursor}"), label_style),
            Span::styled(" ● ", Style::default().fg(piece_color(color))),
        ]));
    }

    let form_widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Players"));
    frame.render_widget(form_widget, area);
}
