//! Quiz answer tracking and the submission gate.

use crate::api::types::{Question, QuizAnswer, QuizSubmission};
use std::collections::HashMap;

/// Valid answer letters for a quiz question.
pub const ANSWER_LETTERS: [char; 4] = ['A', 'B', 'C', 'D'];

/// Mapping from question identifier to the single selected option letter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizAnswerSet {
    answers: HashMap<String, char>,
}

impl QuizAnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an answer for a question. Letters outside A-D are rejected.
    pub fn select(&mut self, question_id: &str, letter: char) -> bool {
        let letter = letter.to_ascii_uppercase();
        if !ANSWER_LETTERS.contains(&letter) {
            return false;
        }
        self.answers.insert(question_id.to_string(), letter);
        true
    }

    pub fn answer_for(&self, question_id: &str) -> Option<char> {
        self.answers.get(question_id).copied()
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Submission gate: every question must have an answer before the
    /// batched request may be sent.
    pub fn is_complete(&self, questions: &[Question]) -> bool {
        questions
            .iter()
            .all(|q| self.answers.contains_key(&q.id))
    }

    /// Builds the batched submission payload, with answers in question order.
    ///
    /// Returns `None` when the gate rejects the set, so an incomplete set
    /// can never produce a request.
    pub fn to_submission(&self, module_id: &str, questions: &[Question]) -> Option<QuizSubmission> {
        if !self.is_complete(questions) {
            return None;
        }
        let answers = questions
            .iter()
            .map(|q| QuizAnswer {
                question_id: q.id.clone(),
                answer: self.answers[&q.id],
            })
            .collect();
        Some(QuizSubmission {
            module_id: module_id.to_string(),
            answers,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: &str) -> Question {
        Question {
            id: id.to_string(),
            prompt: format!("Prompt {}", id),
            choices: Vec::new(),
        }
    }

    #[test]
    // An incomplete answer set must not produce a submission.
    fn test_incomplete_set_is_rejected() {
        let questions = vec![question("q1"), question("q2")];
        let mut answers = QuizAnswerSet::new();
        answers.select("q1", 'a');

        assert!(!answers.is_complete(&questions));
        assert!(answers.to_submission("m1", &questions).is_none());
    }

    #[test]
    // A complete set produces one batched submission in question order.
    fn test_complete_set_builds_submission() {
        let questions = vec![question("q1"), question("q2")];
        let mut answers = QuizAnswerSet::new();
        answers.select("q2", 'd');
        answers.select("q1", 'b');

        let submission = answers.to_submission("m1", &questions).unwrap();
        assert_eq!(submission.module_id, "m1");
        assert_eq!(submission.answers.len(), 2);
        assert_eq!(submission.answers[0].question_id, "q1");
        assert_eq!(submission.answers[0].answer, 'B');
        assert_eq!(submission.answers[1].answer, 'D');
    }

    #[test]
    // Selecting a new letter replaces the previous answer.
    fn test_reselect_replaces_answer() {
        let mut answers = QuizAnswerSet::new();
        answers.select("q1", 'a');
        answers.select("q1", 'c');
        assert_eq!(answers.answer_for("q1"), Some('C'));
        assert_eq!(answers.len(), 1);
    }

    #[test]
    // Letters outside A-D are rejected.
    fn test_invalid_letter_rejected() {
        let mut answers = QuizAnswerSet::new();
        assert!(!answers.select("q1", 'e'));
        assert!(!answers.select("q1", '1'));
        assert!(answers.is_empty());
    }

    #[test]
    // No questions means the gate is trivially open.
    fn test_no_questions_is_complete() {
        let answers = QuizAnswerSet::new();
        assert!(answers.is_complete(&[]));
    }
}
