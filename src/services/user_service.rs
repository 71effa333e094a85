use std::sync::Arc;

use validator::Validate;

use crate::{
    auth::PasswordHasher,
    errors::{AppError, AppResult},
    models::domain::{User, UserRole},
    models::dto::request::{LoginRequest, RegisterRequest},
    repositories::UserRepository,
};

pub struct UserService {
    repository: Arc<dyn UserRepository>,
    hasher: PasswordHasher,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self {
            repository,
            hasher: PasswordHasher::new(),
        }
    }

    /// Registers a new standard user. The profile is embedded in the user
    /// document, so both come into existence together.
    pub async fn register(&self, request: RegisterRequest) -> AppResult<User> {
        request.validate()?;

        if request.password != request.password_confirmation {
            return Err(AppError::ValidationError(
                "Passwords do not match".to_string(),
            ));
        }

        if self
            .repository
            .find_by_username(&request.username)
            .await?
            .is_some()
        {
            return Err(AppError::AlreadyExists(format!(
                "User with username '{}' already exists",
                request.username
            )));
        }

        let password_hash = self.hasher.hash(&request.password)?;
        let user = User::new(&request.username, &password_hash, UserRole::Standard);

        self.repository.create(user).await
    }

    /// Verifies credentials. The error does not distinguish an unknown
    /// username from a wrong password.
    pub async fn authenticate(&self, request: LoginRequest) -> AppResult<User> {
        request.validate()?;

        let user = self
            .repository
            .find_by_username(&request.username)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Invalid username or password".to_string()))?;

        if !self.hasher.verify(&request.password, &user.password_hash)? {
            return Err(AppError::Unauthorized(
                "Invalid username or password".to_string(),
            ));
        }

        Ok(user)
    }

    pub async fn get_user(&self, id: &str) -> AppResult<User> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with id '{}' not found", id)))
    }
}
