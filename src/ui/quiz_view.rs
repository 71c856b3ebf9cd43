//! Quiz screen
//!
//! One question at a time with an answer overview; submission is gated on a
//! complete answer set and disabled while a request is in flight.

use crate::api::types::{ModuleDetail, QuizSubmission};
use crate::quiz::QuizAnswerSet;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// State of the mounted quiz screen.
#[derive(Debug)]
pub struct QuizScreenState {
    pub module: ModuleDetail,
    pub answers: QuizAnswerSet,
    pub cursor: usize,
}

impl QuizScreenState {
    pub fn new(module: ModuleDetail) -> Self {
        Self {
            module,
            answers: QuizAnswerSet::new(),
            cursor: 0,
        }
    }

    pub fn next_question(&mut self) {
        if self.cursor + 1 < self.module.questions.len() {
            self.cursor += 1;
        }
    }

    pub fn previous_question(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Records an answer for the current question and advances the cursor.
    pub fn select_letter(&mut self, letter: char) {
        let Some(question) = self.module.questions.get(self.cursor) else {
            return;
        };
        if self.answers.select(&question.id, letter) {
            self.next_question();
        }
    }

    pub fn unanswered_count(&self) -> usize {
        self.module.questions.len() - self.answers.len()
    }

    /// Builds the batched submission, or `None` while the gate is closed.
    pub fn submission(&self) -> Option<QuizSubmission> {
        self.answers
            .to_submission(&self.module.id, &self.module.questions)
    }
}

pub fn render_quiz(f: &mut Frame, state: &QuizScreenState, busy: bool) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Fill(1), Constraint::Length(2)])
        .margin(1)
        .split(f.area());

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(chunks[0]);

    render_overview(f, content_chunks[0], state);
    render_question(f, content_chunks[1], state);

    let status = if busy {
        "Submitting...".to_string()
    } else if state.unanswered_count() > 0 {
        format!(
            "[↑↓] Question | [A-D] Answer | {} unanswered | [Esc] Back",
            state.unanswered_count()
        )
    } else {
        "[↑↓] Question | [A-D] Answer | [Enter] Submit | [Esc] Back".to_string()
    };
    let footer = Paragraph::new(status)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Cyan))
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, chunks[1]);
}

fn render_overview(f: &mut Frame, area: ratatui::layout::Rect, state: &QuizScreenState) {
    let lines: Vec<Line> = state
        .module
        .questions
        .iter()
        .enumerate()
        .map(|(i, question)| {
            let cursor = if i == state.cursor { "> " } else { "  " };
            let answer = state
                .answers
                .answer_for(&question.id)
                .map(|letter| letter.to_string())
                .unwrap_or_else(|| "-".to_string());
            let answer_color = if answer == "-" {
                Color::DarkGray
            } else {
                Color::Green
            };
            Line::from(vec![
                Span::styled(cursor, Style::default().fg(Color::Cyan)),
                Span::styled(format!("Q{:<2}", i + 1), Style::default().fg(Color::White)),
                Span::styled(format!(" [{}]", answer), Style::default().fg(answer_color)),
            ])
        })
        .collect();

    let block = Block::default()
        .title("ANSWERS")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_question(f: &mut Frame, area: ratatui::layout::Rect, state: &QuizScreenState) {
    let mut lines = Vec::new();

    if let Some(question) = state.module.questions.get(state.cursor) {
        lines.push(Line::from(Span::styled(
            question.prompt.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));

        let selected = state.answers.answer_for(&question.id);
        for choice in &question.choices {
            let is_selected = selected == Some(choice.letter.to_ascii_uppercase());
            let style = if is_selected {
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            let marker = if is_selected { "●" } else { "○" };
            lines.push(Line::from(Span::styled(
                format!("{} {}) {}", marker, choice.letter, choice.text),
                style,
            )));
        }
    } else {
        lines.push(Line::from(Span::styled(
            "This module has no quiz",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let title = format!(
        " {} — question {}/{} ",
        state.module.title,
        (state.cursor + 1).min(state.module.questions.len().max(1)),
        state.module.questions.len()
    );
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));
    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{Choice, Question};

    fn quiz(question_count: usize) -> QuizScreenState {
        let questions = (0..question_count)
            .map(|i| Question {
                id: format!("q{}", i),
                prompt: format!("Prompt {}", i),
                choices: vec![
                    Choice {
                        letter: 'A',
                        text: "first".to_string(),
                    },
                    Choice {
                        letter: 'B',
                        text: "second".to_string(),
                    },
                ],
            })
            .collect();
        QuizScreenState::new(ModuleDetail {
            id: "m1".to_string(),
            title: "Module".to_string(),
            content: String::new(),
            questions,
        })
    }

    #[test]
    // The submission gate stays closed until every question is answered.
    fn test_submission_gate() {
        let mut state = quiz(2);
        assert!(state.submission().is_none());

        state.select_letter('a');
        assert!(state.submission().is_none());
        assert_eq!(state.unanswered_count(), 1);

        state.select_letter('b');
        let submission = state.submission().unwrap();
        assert_eq!(submission.answers.len(), 2);
    }

    #[test]
    // Selecting an answer advances to the next question.
    fn test_select_advances_cursor() {
        let mut state = quiz(3);
        state.select_letter('a');
        assert_eq!(state.cursor, 1);
        state.select_letter('c');
        assert_eq!(state.cursor, 2);
        // Last question: cursor stays put
        state.select_letter('d');
        assert_eq!(state.cursor, 2);
    }

    #[test]
    fn test_cursor_navigation_bounds() {
        let mut state = quiz(2);
        state.previous_question();
        assert_eq!(state.cursor, 0);
        state.next_question();
        state.next_question();
        assert_eq!(state.cursor, 1);
    }
}
