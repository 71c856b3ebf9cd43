//! Lesson viewer screen
//!
//! Pages the segmented lesson content as a slide carousel.

use crate::api::types::ModuleDetail;
use crate::content::{InlineNode, parse_inline, split_into_slides};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// State of the mounted lesson viewer.
#[derive(Debug)]
pub struct LessonState {
    pub module: ModuleDetail,
    pub slides: Vec<String>,
    pub current: usize,
}

impl LessonState {
    pub fn new(module: ModuleDetail) -> Self {
        let slides = split_into_slides(&module.content);
        Self {
            module,
            slides,
            current: 0,
        }
    }

    pub fn next_slide(&mut self) {
        if self.current + 1 < self.slides.len() {
            self.current += 1;
        }
    }

    pub fn previous_slide(&mut self) {
        self.current = self.current.saturating_sub(1);
    }

    pub fn has_quiz(&self) -> bool {
        !self.module.questions.is_empty()
    }
}

/// Converts one line of slide text into a styled line. Heading lines get a
/// title style; other lines go through the inline formatting parser.
fn styled_line(raw: &str) -> Line<'static> {
    let trimmed = raw.trim_start();
    if let Some(heading) = trimmed.strip_prefix('#') {
        let heading = heading.trim_start_matches('#').trim_start();
        return Line::from(Span::styled(
            heading.to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let spans = parse_inline(raw)
        .into_iter()
        .map(|node| match node {
            InlineNode::Text(text) => Span::raw(text),
            InlineNode::Bold(text) => {
                Span::styled(text, Style::default().add_modifier(Modifier::BOLD))
            }
            InlineNode::Italic(text) => {
                Span::styled(text, Style::default().add_modifier(Modifier::ITALIC))
            }
            InlineNode::Code(text) => Span::styled(text, Style::default().fg(Color::Yellow)),
        })
        .collect::<Vec<_>>();
    Line::from(spans)
}

pub fn render_lesson(f: &mut Frame, state: &LessonState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Fill(1), Constraint::Length(2)])
        .margin(1)
        .split(f.area());

    let slide_lines: Vec<Line> = state.slides[state.current].lines().map(styled_line).collect();

    let title = format!(
        " {} — slide {}/{} ",
        state.module.title,
        state.current + 1,
        state.slides.len()
    );
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    f.render_widget(
        Paragraph::new(slide_lines)
            .block(block)
            .wrap(Wrap { trim: false }),
        chunks[0],
    );

    let hints = if state.has_quiz() {
        "[←→] Page | [Enter] Take quiz | [Esc] Back"
    } else {
        "[←→] Page | [Esc] Back"
    };
    let footer = Paragraph::new(hints)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Cyan))
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lesson(content: &str) -> LessonState {
        LessonState::new(ModuleDetail {
            id: "m1".to_string(),
            title: "Module".to_string(),
            content: content.to_string(),
            questions: Vec::new(),
        })
    }

    #[test]
    fn test_paging_stays_in_bounds() {
        let mut state = lesson("# One\nbody\n\n# Two\nbody");
        assert_eq!(state.slides.len(), 2);
        state.previous_slide();
        assert_eq!(state.current, 0);
        state.next_slide();
        state.next_slide();
        assert_eq!(state.current, 1);
    }

    #[test]
    fn test_empty_content_still_has_a_slide() {
        let state = lesson("");
        assert_eq!(state.slides.len(), 1);
    }

    #[test]
    fn test_heading_line_is_styled_without_markers() {
        let line = styled_line("## Safety first");
        assert_eq!(line.spans.len(), 1);
        assert_eq!(line.spans[0].content.as_ref(), "Safety first");
    }
}
