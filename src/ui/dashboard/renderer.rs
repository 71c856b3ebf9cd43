//! Dashboard main renderer

use super::components::{achievements, footer, header, logs, progress, subscription, wallet};
use super::state::DashboardState;
use crate::events::Event;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use std::collections::VecDeque;

pub fn render_dashboard(f: &mut Frame, state: &DashboardState, activity_logs: &VecDeque<Event>) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Fill(1),
            Constraint::Percentage(30),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(main_chunks[1]);

    let card_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),
            Constraint::Length(6),
            Constraint::Fill(1),
        ])
        .split(content_chunks[0]);

    subscription::render_subscription_card(f, card_chunks[0], state);
    wallet::render_wallet_card(f, card_chunks[1], state);
    achievements::render_achievements_card(f, card_chunks[2], state);

    progress::render_progress_panel(f, content_chunks[1], state);
    logs::render_logs_panel(f, main_chunks[2], activity_logs);
    footer::render_footer(f, main_chunks[3]);
}
