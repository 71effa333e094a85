use std::sync::Arc;

use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{Question, Quiz, UserRole},
    models::dto::request::CreateQuizRequest,
    repositories::QuizRepository,
};

pub struct QuizService {
    repository: Arc<dyn QuizRepository>,
}

impl QuizService {
    pub fn new(repository: Arc<dyn QuizRepository>) -> Self {
        Self { repository }
    }

    /// Persists a quiz with its whole question/answer graph as a single
    /// document, so a failed request leaves no partial quiz behind.
    /// Privilege checks happen at the handler gate, not here.
    pub async fn create_quiz(
        &self,
        request: CreateQuizRequest,
        created_by: &str,
        created_by_role: UserRole,
    ) -> AppResult<Quiz> {
        request.validate()?;

        let questions: Vec<Question> = request.questions.into_iter().map(Question::from).collect();

        let quiz = Quiz::new(
            &request.title,
            &request.description,
            created_by,
            created_by_role,
            questions,
        );

        let quiz = self.repository.create(quiz).await?;
        log::info!(
            "Quiz '{}' created by {} with {} questions",
            quiz.title,
            created_by,
            quiz.question_count()
        );
        Ok(quiz)
    }

    pub async fn get_quiz(&self, id: &str) -> AppResult<Quiz> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Quiz with id '{}' not found", id)))
    }

    /// Admin viewers see every quiz; everyone else sees only quizzes
    /// created by admin accounts.
    pub async fn list_quizzes(
        &self,
        viewer_role: Option<UserRole>,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<Quiz>, i64)> {
        match viewer_role {
            Some(UserRole::Admin) => self.repository.list_quizzes(offset, limit).await,
            _ => {
                self.repository
                    .list_quizzes_by_creator_role(UserRole::Admin, offset, limit)
                    .await
            }
        }
    }

    /// Deletes the quiz document; embedded questions and answers go with
    /// it. Privilege checks happen at the handler gate.
    pub async fn delete_quiz(&self, id: &str) -> AppResult<()> {
        self.repository.delete(id).await?;
        log::info!("Quiz '{}' deleted", id);
        Ok(())
    }
}
