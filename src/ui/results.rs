//! Quiz result screen
//!
//! Renders the scored outcome returned by the grading service.

use crate::api::types::QuizResult;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// State of the mounted result screen.
#[derive(Debug)]
pub struct ResultsState {
    pub module_title: String,
    pub outcome: QuizResult,
}

impl ResultsState {
    pub fn new(module_title: String, outcome: QuizResult) -> Self {
        Self {
            module_title,
            outcome,
        }
    }
}

pub fn render_results(f: &mut Frame, state: &ResultsState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Fill(1), Constraint::Length(2)])
        .margin(1)
        .split(f.area());

    let outcome = &state.outcome;
    let mut lines = Vec::new();

    if outcome.perfect {
        lines.push(Line::from(Span::styled(
            "PERFECT SCORE!",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(vec![
        Span::styled("Score: ", Style::default().fg(Color::White)),
        Span::styled(
            format!(
                "{}/{} ({:.0}%)",
                outcome.correct_count, outcome.total, outcome.percentage
            ),
            Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    lines.push(Line::from(vec![
        Span::styled("Points awarded: ", Style::default().fg(Color::White)),
        Span::styled(
            outcome.points_awarded.to_string(),
            Style::default().fg(Color::Yellow),
        ),
    ]));
    lines.push(Line::from(vec![
        Span::styled("Credit earned: ", Style::default().fg(Color::White)),
        Span::styled(
            format!("{:.2}", outcome.credit_amount),
            Style::default().fg(Color::LightGreen),
        ),
    ]));

    if !outcome.achievements.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Unlocked:",
            Style::default().fg(Color::White),
        )));
        for achievement in &outcome.achievements {
            lines.push(Line::from(vec![
                Span::styled("★ ", Style::default().fg(Color::Yellow)),
                Span::raw(achievement.title.clone()),
            ]));
        }
    }

    if !outcome.promo_codes.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Promo codes:",
            Style::default().fg(Color::White),
        )));
        for promo in &outcome.promo_codes {
            lines.push(Line::from(vec![
                Span::styled(
                    promo.code.clone(),
                    Style::default()
                        .fg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {}", promo.description),
                    Style::default().fg(Color::DarkGray),
                ),
            ]));
        }
    }

    let block = Block::default()
        .title(format!(" {} — results ", state.module_title))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));
    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        chunks[0],
    );

    let footer = Paragraph::new("[Enter] Back to dashboard")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Cyan))
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, chunks[1]);
}
