use std::sync::Arc;

use crate::{
    auth::JwtService,
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{
        MongoQuizRepository, MongoRefreshTokenRepository, MongoUserRepository, QuizRepository,
        RefreshTokenRepository, UserRepository,
    },
    services::{AuthService, QuizService, UserService},
};

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService>,
    pub quiz_service: Arc<QuizService>,
    pub auth_service: Arc<AuthService>,
    pub jwt_service: JwtService,
    pub config: Arc<Config>,
    pub db: Database,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let user_repository: Arc<dyn UserRepository> =
            Arc::new(MongoUserRepository::new(&db, &config));
        user_repository.ensure_indexes().await?;
        let user_service = Arc::new(UserService::new(Arc::clone(&user_repository)));

        let quiz_repository: Arc<dyn QuizRepository> =
            Arc::new(MongoQuizRepository::new(&db, &config));
        quiz_repository.ensure_indexes().await?;
        let quiz_service = Arc::new(QuizService::new(quiz_repository));

        let refresh_token_repository: Arc<dyn RefreshTokenRepository> =
            Arc::new(MongoRefreshTokenRepository::new(&db, &config));
        refresh_token_repository.ensure_indexes().await?;

        let jwt_service = JwtService::new(
            &config.jwt_secret,
            config.jwt_expiration_hours,
            config.refresh_expiration_hours,
        );
        let auth_service = Arc::new(AuthService::new(
            jwt_service.clone(),
            refresh_token_repository,
            user_repository,
        ));

        Ok(Self {
            user_service,
            quiz_service,
            auth_service,
            jwt_service,
            config: Arc::new(config),
            db,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }
}
