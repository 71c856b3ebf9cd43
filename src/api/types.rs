//! Serde models for the academy API.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a module for the current user.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
pub enum ModuleStatus {
    #[strum(serialize = "Not started")]
    NotStarted,
    #[strum(serialize = "In progress")]
    InProgress,
    #[strum(serialize = "Completed")]
    Completed,
}

/// One entry of the module listing, in course order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleSummary {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub summary: String,
    pub status: ModuleStatus,
    #[serde(default)]
    pub points_reward: u32,
}

/// A single answer choice within a question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    pub letter: char,
    pub text: String,
}

/// One quiz question with its choices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub prompt: String,
    pub choices: Vec<Choice>,
}

/// Full module detail: lesson content plus the optional quiz.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleDetail {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub questions: Vec<Question>,
}

/// One (question, answer) pair of a batched quiz submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizAnswer {
    pub question_id: String,
    pub answer: char,
}

/// Batched quiz submission payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizSubmission {
    pub module_id: String,
    pub answers: Vec<QuizAnswer>,
}

/// Scored quiz outcome returned by the grading service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizResult {
    pub correct_count: u32,
    pub total: u32,
    pub percentage: f64,
    pub points_awarded: u32,
    pub credit_amount: f64,
    pub perfect: bool,
    #[serde(default)]
    pub achievements: Vec<Achievement>,
    #[serde(default)]
    pub promo_codes: Vec<PromoCode>,
}

/// Completed/total module counts for the current user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgressSummary {
    pub completed_modules: u32,
    pub total_modules: u32,
}

/// Accumulated points and level.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PointsBalance {
    pub points: u64,
    #[serde(default)]
    pub level: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    pub plan: String,
    pub active: bool,
    #[serde(default)]
    pub renews_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Wallet {
    pub points: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromoCode {
    pub code: String,
    #[serde(default)]
    pub description: String,
}

/// Aggregated user profile shown on the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub subscription: Option<Subscription>,
    #[serde(default)]
    pub wallet: Option<Wallet>,
    #[serde(default)]
    pub achievements: Vec<Achievement>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_status_decodes_snake_case() {
        let status: ModuleStatus = serde_json::from_str(r#""not_started""#).unwrap();
        assert_eq!(status, ModuleStatus::NotStarted);
        let status: ModuleStatus = serde_json::from_str(r#""completed""#).unwrap();
        assert_eq!(status, ModuleStatus::Completed);
    }

    #[test]
    fn test_quiz_result_defaults_optional_lists() {
        let result: QuizResult = serde_json::from_str(
            r#"{
                "correct_count": 4,
                "total": 4,
                "percentage": 100.0,
                "points_awarded": 40,
                "credit_amount": 2.0,
                "perfect": true
            }"#,
        )
        .unwrap();
        assert!(result.perfect);
        assert!(result.achievements.is_empty());
        assert!(result.promo_codes.is_empty());
    }

    #[test]
    fn test_profile_tolerates_missing_sections() {
        let profile: UserProfile = serde_json::from_str(r#"{"name":"Ada"}"#).unwrap();
        assert_eq!(profile.name, "Ada");
        assert!(profile.subscription.is_none());
        assert!(profile.wallet.is_none());
    }
}
