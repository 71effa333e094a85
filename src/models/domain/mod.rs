pub mod quiz;
pub mod refresh_token;
pub mod user;

pub use quiz::{Answer, Question, QuestionKind, Quiz};
pub use refresh_token::RefreshToken;
pub use user::{Profile, User, UserRole};
