//! Dashboard wallet card
//!
//! Renders the points balance and its derived credit value

use super::super::state::DashboardState;
use crate::rewards;
use ratatui::Frame;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};

pub fn render_wallet_card(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    // Credit is derived on every render, never cached.
    let points = state.data.points.points;
    let credit = rewards::credit_amount(points);

    let lines = vec![
        Line::from(vec![
            Span::styled("Points: ", Style::default().fg(Color::White)),
            Span::styled(
                points.to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Credit: ", Style::default().fg(Color::White)),
            Span::styled(
                format!("{:.2}", credit),
                Style::default()
                    .fg(Color::LightGreen)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            format!("Level {}", state.data.points.level),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let block = Block::default()
        .title("WALLET")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));

    f.render_widget(Paragraph::new(lines).block(block), area);
}
