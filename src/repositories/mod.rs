pub mod quiz_repository;
pub mod refresh_token_repository;
pub mod user_repository;

pub use quiz_repository::{MongoQuizRepository, QuizRepository};
pub use refresh_token_repository::{MongoRefreshTokenRepository, RefreshTokenRepository};
pub use user_repository::{MongoUserRepository, UserRepository};
