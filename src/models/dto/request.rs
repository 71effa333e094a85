use once_cell::sync::Lazy;
use serde::Deserialize;
use validator::Validate;

use crate::models::domain::{Answer, Question, QuestionKind};

static USERNAME_REGEX: Lazy<regex::Regex> = Lazy::new(|| {
    regex::Regex::new(r"^[a-zA-Z0-9_]+$").expect("USERNAME_REGEX is a valid regex pattern")
});

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(
        length(min = 3, max = 50),
        regex(
            path = *USERNAME_REGEX,
            message = "Username must be alphanumeric with underscores"
        )
    )]
    pub username: String,

    #[validate(length(min = 8, max = 128))]
    pub password: String,

    pub password_confirmation: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub username: String,

    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateQuizRequest {
    #[validate(length(min = 1, max = 255))]
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[validate(nested)]
    pub questions: Vec<CreateQuestionRequest>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateQuestionRequest {
    #[validate(length(min = 1, max = 500))]
    pub text: String,

    /// Multiple-choice mode; absent means single-choice.
    #[serde(default)]
    pub multiple: bool,

    #[validate(nested)]
    pub answers: Vec<CreateAnswerRequest>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAnswerRequest {
    #[validate(length(min = 1))]
    pub text: String,

    /// Correctness flag; absent means incorrect.
    #[serde(default)]
    pub correct: bool,
}

impl From<CreateQuestionRequest> for Question {
    fn from(request: CreateQuestionRequest) -> Self {
        let kind = if request.multiple {
            QuestionKind::Multiple
        } else {
            QuestionKind::Single
        };
        let answers = request.answers.into_iter().map(Answer::from).collect();
        Question::new(&request.text, kind, answers)
    }
}

impl From<CreateAnswerRequest> for Answer {
    fn from(request: CreateAnswerRequest) -> Self {
        Answer::new(&request.text, request.correct)
    }
}

/// One graded question's worth of selections. Single-choice submissions
/// carry exactly one id; multiple-choice submissions carry the whole set.
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionAnswerInput {
    pub question_id: String,
    pub selected_answer_ids: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubmitAnswersRequest {
    #[serde(default)]
    pub answers: Vec<QuestionAnswerInput>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PaginationParams {
    pub offset: Option<i64>,
    pub limit: Option<i64>,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            offset: Some(0),
            limit: Some(20),
        }
    }
}

impl PaginationParams {
    /// Negative offsets clamp to zero rather than erroring.
    pub fn offset(&self) -> i64 {
        self.offset.unwrap_or(0).max(0)
    }

    /// Clamped to 1..=100; a zero limit would mean "unbounded" to the
    /// storage layer, so it is never passed through.
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(20).clamp(1, 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_register_request() {
        let request = RegisterRequest {
            username: "johndoe".to_string(),
            password: "secret-password".to_string(),
            password_confirmation: "secret-password".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_username_too_short() {
        let request = RegisterRequest {
            username: "ab".to_string(),
            password: "secret-password".to_string(),
            password_confirmation: "secret-password".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_username_rejects_special_characters() {
        let request = RegisterRequest {
            username: "john doe!".to_string(),
            password: "secret-password".to_string(),
            password_confirmation: "secret-password".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_create_quiz_requires_title() {
        let request = CreateQuizRequest {
            title: "".to_string(),
            description: "".to_string(),
            questions: vec![],
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_question_mode_defaults_to_single() {
        let json = r#"{ "text": "Q1", "answers": [ { "text": "a" } ] }"#;
        let request: CreateQuestionRequest = serde_json::from_str(json).unwrap();

        assert!(!request.multiple);
        assert!(!request.answers[0].correct);

        let question = Question::from(request);
        assert_eq!(question.kind, QuestionKind::Single);
        assert!(question.correct_answer_ids().is_empty());
    }

    #[test]
    fn test_question_conversion_keeps_answer_order() {
        let request = CreateQuestionRequest {
            text: "Q1".to_string(),
            multiple: true,
            answers: vec![
                CreateAnswerRequest {
                    text: "first".to_string(),
                    correct: true,
                },
                CreateAnswerRequest {
                    text: "second".to_string(),
                    correct: false,
                },
            ],
        };

        let question = Question::from(request);
        assert_eq!(question.kind, QuestionKind::Multiple);
        assert_eq!(question.answers[0].text, "first");
        assert_eq!(question.answers[1].text, "second");
    }

    #[test]
    fn test_pagination_defaults_and_cap() {
        let params = PaginationParams::default();
        assert_eq!(params.offset(), 0);
        assert_eq!(params.limit(), 20);

        let params = PaginationParams {
            offset: Some(5),
            limit: Some(500),
        };
        assert_eq!(params.limit(), 100);
    }

    #[test]
    fn test_pagination_clamps_zero_and_negative_input() {
        let params = PaginationParams {
            offset: Some(-5),
            limit: Some(0),
        };

        assert_eq!(params.offset(), 0);
        assert_eq!(params.limit(), 1);

        let params = PaginationParams {
            offset: Some(0),
            limit: Some(-10),
        };
        assert_eq!(params.limit(), 1);
    }
}
