//! Dashboard achievements card

use super::super::state::DashboardState;
use ratatui::Frame;
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

pub fn render_achievements_card(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let achievements = &state.data.profile.achievements;

    let lines: Vec<Line> = if achievements.is_empty() {
        vec![Line::from(Span::styled(
            "Nothing unlocked yet",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        achievements
            .iter()
            .map(|a| {
                Line::from(vec![
                    Span::styled("★ ", Style::default().fg(Color::Yellow)),
                    Span::styled(a.title.clone(), Style::default().fg(Color::White)),
                ])
            })
            .collect()
    };

    let block = Block::default()
        .title("ACHIEVEMENTS")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));

    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}
