use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::domain::user::UserRole;

/// A quiz document. Questions and answers are embedded, so the ownership
/// tree (quiz -> question -> answer) is strict and deleting the quiz
/// removes all of its descendants in one operation.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Quiz {
    pub id: String,
    pub title: String,
    pub description: String,
    pub created_by: String,
    /// Role of the creator at creation time, used by the listing filter.
    pub created_by_role: UserRole,
    pub questions: Vec<Question>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    pub id: String,
    pub text: String,
    pub kind: QuestionKind,
    pub answers: Vec<Answer>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Answer {
    pub id: String,
    pub text: String,
    pub correct: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum QuestionKind {
    Single,
    Multiple,
}

impl Quiz {
    pub fn new(
        title: &str,
        description: &str,
        created_by: &str,
        created_by_role: UserRole,
        questions: Vec<Question>,
    ) -> Self {
        Quiz {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            description: description.to_string(),
            created_by: created_by.to_string(),
            created_by_role,
            questions,
            created_at: Some(Utc::now()),
        }
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn answer_count(&self) -> usize {
        self.questions.iter().map(|q| q.answers.len()).sum()
    }
}

impl Question {
    pub fn new(text: &str, kind: QuestionKind, answers: Vec<Answer>) -> Self {
        Question {
            id: Uuid::new_v4().to_string(),
            text: text.to_string(),
            kind,
            answers,
        }
    }

    /// Ids of the answers flagged correct.
    pub fn correct_answer_ids(&self) -> Vec<&str> {
        self.answers
            .iter()
            .filter(|a| a.correct)
            .map(|a| a.id.as_str())
            .collect()
    }
}

impl Answer {
    pub fn new(text: &str, correct: bool) -> Self {
        Answer {
            id: Uuid::new_v4().to_string(),
            text: text.to_string(),
            correct,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_kind_round_trip_serialization() {
        for kind in [QuestionKind::Single, QuestionKind::Multiple] {
            let json = serde_json::to_string(&kind).expect("kind should serialize");
            let parsed: QuestionKind = serde_json::from_str(&json).expect("kind should deserialize");
            assert_eq!(kind, parsed);
        }
    }

    #[test]
    fn question_kind_rejects_unknown_variant() {
        let parsed = serde_json::from_str::<QuestionKind>("\"Essay\"");
        assert!(parsed.is_err());
    }

    #[test]
    fn correct_answer_ids_filters_on_flag() {
        let question = Question::new(
            "Pick the even numbers",
            QuestionKind::Multiple,
            vec![
                Answer::new("1", false),
                Answer::new("2", true),
                Answer::new("4", true),
            ],
        );

        let correct = question.correct_answer_ids();
        assert_eq!(correct.len(), 2);
        assert_eq!(correct[0], question.answers[1].id);
        assert_eq!(correct[1], question.answers[2].id);
    }

    #[test]
    fn quiz_counts_cover_embedded_tree() {
        let quiz = Quiz::new(
            "Basics",
            "",
            "user-1",
            UserRole::Admin,
            vec![
                Question::new(
                    "Q1",
                    QuestionKind::Single,
                    vec![Answer::new("a", true), Answer::new("b", false)],
                ),
                Question::new(
                    "Q2",
                    QuestionKind::Multiple,
                    vec![Answer::new("c", true), Answer::new("d", true)],
                ),
            ],
        );

        assert_eq!(quiz.question_count(), 2);
        assert_eq!(quiz.answer_count(), 4);
    }
}
