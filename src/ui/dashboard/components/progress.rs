//! Dashboard learning-progress panel
//!
//! Renders the completion gauge and the ordered module list with
//! locked/completed markers

use super::super::state::DashboardState;
use crate::api::types::ModuleStatus;
use crate::rewards;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Padding, Paragraph};

pub fn render_progress_panel(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let block = Block::default()
        .title("E-LEARNING")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Fill(1)])
        .split(inner);

    // Completion gauge, recomputed from the raw counts on every render.
    let progress = &state.data.progress;
    let percent = rewards::completion_percent(progress.completed_modules, progress.total_modules);
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Green))
        .ratio(percent / 100.0)
        .label(format!(
            "{}/{} completed ({:.0}%)",
            progress.completed_modules, progress.total_modules, percent
        ));
    f.render_widget(gauge, chunks[0]);

    if state.loading {
        f.render_widget(
            Paragraph::new(Span::styled(
                "Loading modules...",
                Style::default().fg(Color::DarkGray),
            )),
            chunks[2],
        );
        return;
    }
    if state.data.modules.is_empty() {
        f.render_widget(
            Paragraph::new(Span::styled(
                "No modules available",
                Style::default().fg(Color::DarkGray),
            )),
            chunks[2],
        );
        return;
    }

    let lines: Vec<Line> = state
        .data
        .modules
        .iter()
        .enumerate()
        .map(|(i, module)| {
            let locked = rewards::is_module_locked(&state.data.modules, i);
            let (marker, marker_color) = match (locked, module.status) {
                (true, _) => ("⦸", Color::DarkGray),
                (false, ModuleStatus::Completed) => ("✔", Color::Green),
                (false, ModuleStatus::InProgress) => ("…", Color::Yellow),
                (false, ModuleStatus::NotStarted) => ("·", Color::White),
            };

            let cursor = if i == state.selected { "> " } else { "  " };
            let title_style = if locked {
                Style::default().fg(Color::DarkGray)
            } else if i == state.selected {
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };

            Line::from(vec![
                Span::styled(cursor, Style::default().fg(Color::Cyan)),
                Span::styled(format!("{} ", marker), Style::default().fg(marker_color)),
                Span::styled(module.title.clone(), title_style),
                Span::styled(
                    format!("  [{}]", module.status),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines), chunks[2]);
}
