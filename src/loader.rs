//! Background data loading
//!
//! Spawned tasks fetch data from the API and report back to the UI loop
//! over an mpsc channel. Dashboard sections load in parallel and degrade
//! individually; module open and quiz submission are sequential,
//! user-triggered actions.

use crate::api::Api;
use crate::api::error::ApiError;
use crate::api::types::{
    ModuleDetail, ModuleSummary, PointsBalance, ProgressSummary, QuizResult, QuizSubmission,
    UserProfile,
};
use crate::error_classifier::ErrorClassifier;
use crate::events::{Event, Section};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Messages delivered from background tasks to the UI loop.
#[derive(Debug)]
pub enum AppMessage {
    /// All dashboard sections finished loading (each possibly degraded).
    DashboardLoaded(Box<DashboardData>),
    /// A module open action finished.
    ModuleOpened(Result<ModuleDetail, ApiError>),
    /// A quiz submission was graded (or failed).
    QuizGraded(Result<QuizResult, ApiError>),
    /// An activity-log event.
    Log(Event),
}

/// In-memory snapshot of the dashboard's server data. Sections that failed
/// to load hold their default (empty) state.
#[derive(Debug, Clone, Default)]
pub struct DashboardData {
    pub profile: UserProfile,
    pub modules: Vec<ModuleSummary>,
    pub progress: ProgressSummary,
    pub points: PointsBalance,
}

/// Loads all dashboard sections in parallel and reports the joined result.
///
/// Failure of any one section is caught, logged, and replaced with that
/// section's default state; it never blocks the others.
pub async fn load_dashboard(api: Arc<dyn Api>, tx: mpsc::Sender<AppMessage>) {
    let classifier = ErrorClassifier::new();

    let (profile, modules, progress, points) = tokio::join!(
        api.get_profile(),
        api.get_modules(),
        api.get_progress(),
        api.get_points()
    );

    let data = DashboardData {
        profile: section_or_default(profile, Section::Profile, &classifier, &tx).await,
        modules: section_or_default(modules, Section::Modules, &classifier, &tx).await,
        progress: section_or_default(progress, Section::Progress, &classifier, &tx).await,
        points: section_or_default(points, Section::Points, &classifier, &tx).await,
    };

    let _ = tx
        .send(AppMessage::Log(Event::success(
            Section::Modules,
            format!("Dashboard loaded ({} modules)", data.modules.len()),
        )))
        .await;
    let _ = tx.send(AppMessage::DashboardLoaded(Box::new(data))).await;
}

/// Unwraps one section result, degrading to the default on failure.
async fn section_or_default<T: Default>(
    result: Result<T, ApiError>,
    section: Section,
    classifier: &ErrorClassifier,
    tx: &mpsc::Sender<AppMessage>,
) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            let level = classifier.classify_load_error(&e);
            let _ = tx
                .send(AppMessage::Log(Event::error(
                    section,
                    format!("Failed to load {}: {}", section, e),
                    level,
                )))
                .await;
            T::default()
        }
    }
}

/// Marks a module started and fetches its detail. Any failure surfaces as a
/// blocking alert on the UI side; state is left unchanged for manual retry.
pub async fn open_module(api: Arc<dyn Api>, tx: mpsc::Sender<AppMessage>, module_id: String) {
    let classifier = ErrorClassifier::new();
    let _ = tx
        .send(AppMessage::Log(Event::refresh(
            Section::Lesson,
            format!("Opening module {}...", module_id),
        )))
        .await;

    let result = match api.start_module(&module_id).await {
        Ok(()) => api.get_module(&module_id).await,
        Err(e) => Err(e),
    };

    match &result {
        Ok(detail) => {
            let _ = tx
                .send(AppMessage::Log(Event::success(
                    Section::Lesson,
                    format!("Opened module: {}", detail.title),
                )))
                .await;
        }
        Err(e) => {
            let _ = tx
                .send(AppMessage::Log(Event::error(
                    Section::Lesson,
                    format!("Failed to open module {}: {}", module_id, e),
                    classifier.classify_action_error(e),
                )))
                .await;
        }
    }
    let _ = tx.send(AppMessage::ModuleOpened(result)).await;
}

/// Sends a batched answer set for grading and reports the scored outcome.
pub async fn submit_quiz(
    api: Arc<dyn Api>,
    tx: mpsc::Sender<AppMessage>,
    submission: QuizSubmission,
) {
    let classifier = ErrorClassifier::new();
    let _ = tx
        .send(AppMessage::Log(Event::refresh(
            Section::Quiz,
            format!(
                "Submitting {} answers for module {}...",
                submission.answers.len(),
                submission.module_id
            ),
        )))
        .await;

    let result = api.submit_quiz(&submission).await;

    match &result {
        Ok(outcome) => {
            let _ = tx
                .send(AppMessage::Log(Event::success(
                    Section::Quiz,
                    format!("Quiz graded: {}/{} correct", outcome.correct_count, outcome.total),
                )))
                .await;
        }
        Err(e) => {
            let _ = tx
                .send(AppMessage::Log(Event::error(
                    Section::Quiz,
                    format!("Quiz submission failed: {}", e),
                    classifier.classify_action_error(e),
                )))
                .await;
        }
    }
    let _ = tx.send(AppMessage::QuizGraded(result)).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockApi;
    use crate::api::types::ModuleStatus;

    fn sample_modules() -> Vec<ModuleSummary> {
        vec![ModuleSummary {
            id: "m1".to_string(),
            title: "Winter driving".to_string(),
            summary: String::new(),
            status: ModuleStatus::NotStarted,
            points_reward: 10,
        }]
    }

    fn server_error() -> ApiError {
        ApiError::Http {
            status: 500,
            message: "boom".to_string(),
        }
    }

    async fn recv_dashboard(rx: &mut mpsc::Receiver<AppMessage>) -> DashboardData {
        while let Some(msg) = rx.recv().await {
            if let AppMessage::DashboardLoaded(data) = msg {
                return *data;
            }
        }
        panic!("channel closed before DashboardLoaded");
    }

    #[tokio::test]
    // A failed section degrades to its default without blocking the others.
    async fn test_load_dashboard_degrades_failed_section() {
        let mut api = MockApi::new();
        api.expect_get_profile().returning(|| Err(server_error()));
        api.expect_get_modules().returning(|| Ok(sample_modules()));
        api.expect_get_progress()
            .returning(|| Ok(ProgressSummary::default()));
        api.expect_get_points()
            .returning(|| Ok(PointsBalance::default()));

        let (tx, mut rx) = mpsc::channel(16);
        load_dashboard(Arc::new(api), tx).await;

        let data = recv_dashboard(&mut rx).await;
        assert_eq!(data.profile, UserProfile::default());
        assert_eq!(data.modules.len(), 1);
    }

    #[tokio::test]
    // A failed start_module call skips the detail fetch entirely.
    async fn test_open_module_stops_after_start_failure() {
        let mut api = MockApi::new();
        api.expect_start_module()
            .returning(|_| Err(server_error()));
        api.expect_get_module().times(0);

        let (tx, mut rx) = mpsc::channel(16);
        open_module(Arc::new(api), tx, "m1".to_string()).await;

        let mut saw_failure = false;
        while let Some(msg) = rx.recv().await {
            if let AppMessage::ModuleOpened(result) = msg {
                saw_failure = result.is_err();
                break;
            }
        }
        assert!(saw_failure);
    }

    #[tokio::test]
    // A graded submission is reported back with its scored outcome.
    async fn test_submit_quiz_reports_outcome() {
        let mut api = MockApi::new();
        api.expect_submit_quiz().returning(|_| {
            Ok(QuizResult {
                correct_count: 3,
                total: 4,
                percentage: 75.0,
                points_awarded: 30,
                credit_amount: 1.5,
                perfect: false,
                achievements: Vec::new(),
                promo_codes: Vec::new(),
            })
        });

        let (tx, mut rx) = mpsc::channel(16);
        let submission = QuizSubmission {
            module_id: "m1".to_string(),
            answers: Vec::new(),
        };
        submit_quiz(Arc::new(api), tx, submission).await;

        let mut outcome = None;
        while let Some(msg) = rx.recv().await {
            if let AppMessage::QuizGraded(result) = msg {
                outcome = Some(result.unwrap());
                break;
            }
        }
        assert_eq!(outcome.unwrap().correct_count, 3);
    }
}
