use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::domain::{Answer, Question, QuestionKind, Quiz, User, UserRole};

#[derive(Debug, Clone, Serialize)]
pub struct UserDto {
    pub id: String,
    pub username: String,
    pub role: UserRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        UserDto {
            id: user.id,
            username: user.username,
            role: user.role,
            display_name: user.profile.display_name,
            bio: user.profile.bio,
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub refresh_token: String,
    pub username: String,
    pub role: UserRole,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuizSummaryDto {
    pub id: String,
    pub title: String,
    pub description: String,
    pub question_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl From<Quiz> for QuizSummaryDto {
    fn from(quiz: Quiz) -> Self {
        QuizSummaryDto {
            question_count: quiz.question_count(),
            id: quiz.id,
            title: quiz.title,
            description: quiz.description,
            created_at: quiz.created_at,
        }
    }
}

/// Quiz detail for takers. Correctness flags are stripped so the payload
/// never reveals which answers score.
#[derive(Debug, Clone, Serialize)]
pub struct QuizDetailDto {
    pub id: String,
    pub title: String,
    pub description: String,
    pub questions: Vec<QuestionDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionDto {
    pub id: String,
    pub text: String,
    pub kind: QuestionKind,
    pub answers: Vec<AnswerDto>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnswerDto {
    pub id: String,
    pub text: String,
}

impl From<Quiz> for QuizDetailDto {
    fn from(quiz: Quiz) -> Self {
        QuizDetailDto {
            id: quiz.id,
            title: quiz.title,
            description: quiz.description,
            questions: quiz.questions.into_iter().map(QuestionDto::from).collect(),
            created_at: quiz.created_at,
        }
    }
}

impl From<Question> for QuestionDto {
    fn from(question: Question) -> Self {
        QuestionDto {
            id: question.id,
            text: question.text,
            kind: question.kind,
            answers: question.answers.into_iter().map(AnswerDto::from).collect(),
        }
    }
}

impl From<Answer> for AnswerDto {
    fn from(answer: Answer) -> Self {
        AnswerDto {
            id: answer.id,
            text: answer.text,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct QuizListResponse {
    pub items: Vec<QuizSummaryDto>,
    pub total: i64,
    pub offset: i64,
    pub limit: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct GradeResponse {
    pub quiz_id: String,
    pub score: usize,
    pub total_questions: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
