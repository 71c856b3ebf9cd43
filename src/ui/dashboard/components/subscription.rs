//! Dashboard subscription card
//!
//! Renders the assistance-subscription status

use super::super::state::DashboardState;
use ratatui::Frame;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};

pub fn render_subscription_card(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let mut lines = Vec::new();

    match &state.data.profile.subscription {
        Some(subscription) => {
            lines.push(Line::from(Span::styled(
                format!("Plan: {}", subscription.plan),
                Style::default().fg(Color::White),
            )));
            let (status_text, status_color) = if subscription.active {
                ("Active", Color::Green)
            } else {
                ("Inactive", Color::Red)
            };
            lines.push(Line::from(Span::styled(
                status_text,
                Style::default()
                    .fg(status_color)
                    .add_modifier(Modifier::BOLD),
            )));
            if let Some(renews_at) = &subscription.renews_at {
                lines.push(Line::from(Span::styled(
                    format!("Renews: {}", renews_at),
                    Style::default().fg(Color::DarkGray),
                )));
            }
        }
        None => {
            let placeholder = if state.loading { "Loading..." } else { "Unavailable" };
            lines.push(Line::from(Span::styled(
                placeholder,
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    let block = Block::default()
        .title("SUBSCRIPTION")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));

    f.render_widget(Paragraph::new(lines).block(block), area);
}
