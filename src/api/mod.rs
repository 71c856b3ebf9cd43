use crate::api::error::ApiError;
use crate::api::types::{
    ModuleDetail, ModuleSummary, PointsBalance, ProgressSummary, QuizResult, QuizSubmission,
    UserProfile,
};
use crate::environment::Environment;

pub(crate) mod client;
pub use client::ApiClient;
pub mod error;
pub mod types;

#[cfg(test)]
use mockall::{automock, predicate::*};

#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Api: Send + Sync {
    fn environment(&self) -> &Environment;

    /// Aggregated user profile (subscription, wallet, achievements).
    async fn get_profile(&self) -> Result<UserProfile, ApiError>;

    /// Module listing in course order.
    async fn get_modules(&self) -> Result<Vec<ModuleSummary>, ApiError>;

    /// Full detail of a single module (lesson content and questions).
    async fn get_module(&self, module_id: &str) -> Result<ModuleDetail, ApiError>;

    /// Completed/total progress summary.
    async fn get_progress(&self) -> Result<ProgressSummary, ApiError>;

    /// Accumulated points and level.
    async fn get_points(&self) -> Result<PointsBalance, ApiError>;

    /// Marks a module as started for the current user.
    async fn start_module(&self, module_id: &str) -> Result<(), ApiError>;

    /// Submits a batched answer set for grading.
    async fn submit_quiz(&self, submission: &QuizSubmission) -> Result<QuizResult, ApiError>;
}
