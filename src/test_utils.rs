use crate::models::domain::{Answer, Question, QuestionKind, Quiz, User, UserRole};

#[cfg(test)]
pub mod fixtures {
    use super::*;

    /// A quiz with one single-choice and one multiple-choice question,
    /// two answers each.
    pub fn mixed_quiz(created_by: &str) -> Quiz {
        Quiz::new(
            "Mixed quiz",
            "One of each kind",
            created_by,
            UserRole::Admin,
            vec![
                Question::new(
                    "Single-choice question",
                    QuestionKind::Single,
                    vec![Answer::new("right", true), Answer::new("wrong", false)],
                ),
                Question::new(
                    "Multiple-choice question",
                    QuestionKind::Multiple,
                    vec![Answer::new("also right", true), Answer::new("also wrong", false)],
                ),
            ],
        )
    }

    pub fn test_admin() -> User {
        User::test_admin("quizmaster")
    }

    pub fn test_standard_user() -> User {
        User::test_user("taker")
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_mixed_quiz_fixture_shape() {
        let quiz = mixed_quiz("admin-1");
        assert_eq!(quiz.question_count(), 2);
        assert_eq!(quiz.answer_count(), 4);
    }

    #[test]
    fn test_user_fixtures_roles() {
        assert!(test_admin().is_admin());
        assert!(!test_standard_user().is_admin());
    }
}
