//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::api::Api;
use crate::consts::cli_consts::{MAX_ACTIVITY_LOGS, MESSAGE_QUEUE_SIZE};
use crate::environment::Environment;
use crate::events::Event as ActivityEvent;
use crate::greeting::{greeting_for_hour, pick_tip};
use crate::loader::{self, AppMessage};
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crate::ui::lesson::{LessonState, render_lesson};
use crate::ui::quiz_view::{QuizScreenState, render_quiz};
use crate::ui::results::{ResultsState, render_results};
use crate::ui::splash::render_splash;
use chrono::{Local, Timelike};
use crossterm::event::{self, Event, KeyCode};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Wrap};
use ratatui::{Frame, Terminal, backend::Backend};
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// The different screens in the application.
#[derive(Debug)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// Dashboard screen with the subscription, wallet, progress, and
    /// achievements cards.
    Dashboard(Box<DashboardState>),
    /// Lesson viewer paging the segmented slides of one module.
    Lesson(Box<LessonState>),
    /// Quiz screen for the module's questions.
    Quiz(Box<QuizScreenState>),
    /// Scored quiz outcome.
    Results(Box<ResultsState>),
}

/// Application state
pub struct App {
    /// The start time of the application, used for computing uptime.
    start_time: Instant,

    /// The environment in which the application is running.
    environment: Environment,

    /// Shared API handle; background tasks get their own clone.
    api: Arc<dyn Api>,

    /// Sends messages from background tasks to the UI loop.
    message_tx: mpsc::Sender<AppMessage>,

    /// Receives messages from background tasks.
    message_rx: mpsc::Receiver<AppMessage>,

    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Activity log shared across screens, newest at the back.
    activity_logs: VecDeque<ActivityEvent>,

    /// Blocking alert for failed user-triggered actions. Any key dismisses it.
    alert: Option<String>,

    /// Whether a user-triggered request is in flight. Blocks duplicate
    /// submissions of the same action.
    busy: bool,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(api: Arc<dyn Api>, environment: Environment) -> Self {
        let (message_tx, message_rx) = mpsc::channel(MESSAGE_QUEUE_SIZE);
        Self {
            start_time: Instant::now(),
            environment,
            api,
            message_tx,
            message_rx,
            current_screen: Screen::Splash,
            activity_logs: VecDeque::new(),
            alert: None,
            busy: false,
        }
    }

    /// Add an event to the activity log with size limit
    fn add_to_activity_log(&mut self, event: ActivityEvent) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Mounts a fresh dashboard and kicks off the parallel section loads.
    fn mount_dashboard(&mut self) {
        let greeting = greeting_for_hour(Local::now().hour());
        let tip = pick_tip(&mut rand::thread_rng());
        self.current_screen = Screen::Dashboard(Box::new(DashboardState::loading(
            self.environment.clone(),
            self.start_time,
            greeting,
            tip,
        )));
        tokio::spawn(loader::load_dashboard(
            self.api.clone(),
            self.message_tx.clone(),
        ));
    }

    /// Applies one message from a background task to the current screen.
    fn handle_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::Log(event) => self.add_to_activity_log(event),
            AppMessage::DashboardLoaded(data) => {
                if let Screen::Dashboard(state) = &mut self.current_screen {
                    state.apply(*data);
                }
            }
            AppMessage::ModuleOpened(result) => {
                self.busy = false;
                match result {
                    Ok(detail) => {
                        self.current_screen = Screen::Lesson(Box::new(LessonState::new(detail)));
                    }
                    Err(e) => self.alert = Some(e.friendly_message()),
                }
            }
            AppMessage::QuizGraded(result) => {
                self.busy = false;
                match result {
                    Ok(outcome) => {
                        let title = match &self.current_screen {
                            Screen::Quiz(state) => state.module.title.clone(),
                            _ => String::new(),
                        };
                        self.current_screen =
                            Screen::Results(Box::new(ResultsState::new(title, outcome)));
                    }
                    Err(e) => self.alert = Some(e.friendly_message()),
                }
            }
        }
    }

    /// Handles a key press on the dashboard screen.
    fn handle_dashboard_key(&mut self, code: KeyCode) {
        let Screen::Dashboard(state) = &mut self.current_screen else {
            return;
        };
        match code {
            KeyCode::Up => state.select_previous(),
            KeyCode::Down => state.select_next(),
            KeyCode::Char('r') => {
                if !self.busy {
                    self.mount_dashboard();
                }
            }
            KeyCode::Enter => {
                if self.busy || state.loading {
                    return;
                }
                if state.selected_module_locked() {
                    self.alert =
                        Some("This module is locked. Complete the previous one first.".to_string());
                    return;
                }
                let Some(module_id) = state.selected_module_id() else {
                    return;
                };
                let module_id = module_id.to_string();
                self.busy = true;
                tokio::spawn(loader::open_module(
                    self.api.clone(),
                    self.message_tx.clone(),
                    module_id,
                ));
            }
            _ => {}
        }
    }

    /// Handles a key press on the quiz screen.
    fn handle_quiz_key(&mut self, code: KeyCode) {
        let Screen::Quiz(state) = &mut self.current_screen else {
            return;
        };
        match code {
            KeyCode::Up => state.previous_question(),
            KeyCode::Down => state.next_question(),
            KeyCode::Char(letter @ ('a'..='d' | 'A'..='D')) => state.select_letter(letter),
            KeyCode::Enter => {
                if self.busy {
                    return;
                }
                // Submission gate: incomplete sets never produce a request.
                match state.submission() {
                    Some(submission) => {
                        self.busy = true;
                        tokio::spawn(loader::submit_quiz(
                            self.api.clone(),
                            self.message_tx.clone(),
                            submission,
                        ));
                    }
                    None => {
                        self.alert =
                            Some("Answer every question before submitting.".to_string());
                    }
                }
            }
            _ => {}
        }
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();
    let splash_duration = Duration::from_secs(2);

    // UI event loop
    loop {
        // Queue all incoming messages for processing
        while let Ok(message) = app.message_rx.try_recv() {
            app.handle_message(message);
        }

        terminal.draw(|f| render(f, &app))?;

        // Handle splash-to-dashboard transition
        if let Screen::Splash = app.current_screen {
            if splash_start.elapsed() >= splash_duration {
                app.mount_dashboard();
                continue;
            }
        }

        // Poll for key events
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                // A blocking alert swallows the next key press
                if app.alert.take().is_some() {
                    continue;
                }

                // Handle exit events
                if key.code == KeyCode::Char('q') {
                    return Ok(());
                }

                match &mut app.current_screen {
                    Screen::Splash => {
                        // Any key press will skip the splash screen
                        if key.code != KeyCode::Esc {
                            app.mount_dashboard();
                        }
                    }
                    Screen::Dashboard(_) => {
                        if key.code == KeyCode::Esc {
                            return Ok(());
                        }
                        app.handle_dashboard_key(key.code);
                    }
                    Screen::Lesson(state) => match key.code {
                        KeyCode::Left => state.previous_slide(),
                        KeyCode::Right => state.next_slide(),
                        KeyCode::Enter => {
                            if state.has_quiz() {
                                let module = state.module.clone();
                                app.current_screen =
                                    Screen::Quiz(Box::new(QuizScreenState::new(module)));
                            }
                        }
                        KeyCode::Esc => app.mount_dashboard(),
                        _ => {}
                    },
                    Screen::Quiz(state) => {
                        if key.code == KeyCode::Esc {
                            if !app.busy {
                                let module = state.module.clone();
                                app.current_screen =
                                    Screen::Lesson(Box::new(LessonState::new(module)));
                            }
                            continue;
                        }
                        app.handle_quiz_key(key.code);
                    }
                    Screen::Results(_) => {
                        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                            app.mount_dashboard();
                        }
                    }
                }
            }
        }
    }
}

/// Renders the current screen, with the blocking alert on top when present.
fn render(f: &mut Frame, app: &App) {
    match &app.current_screen {
        Screen::Splash => render_splash(f),
        Screen::Dashboard(state) => render_dashboard(f, state, &app.activity_logs),
        Screen::Lesson(state) => render_lesson(f, state),
        Screen::Quiz(state) => render_quiz(f, state, app.busy),
        Screen::Results(state) => render_results(f, state),
    }
    if let Some(message) = &app.alert {
        render_alert(f, message);
    }
}

/// Renders a centered blocking alert over the current screen.
fn render_alert(f: &mut Frame, message: &str) {
    let area = centered_rect(50, 20, f.area());
    f.render_widget(Clear, area);

    let block = Block::default()
        .title(" NOTICE ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Red))
        .padding(Padding::uniform(1));
    let paragraph = Paragraph::new(vec![
        Line::from(message.to_string()),
        Line::from(""),
        Line::styled("Press any key to dismiss", Style::default().fg(Color::DarkGray)),
    ])
    .block(block)
    .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

/// Centered sub-rectangle taking the given percentages of the area.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}
