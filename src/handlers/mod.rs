pub mod auth_handler;
pub mod quiz_handler;
pub mod user_handler;

pub use auth_handler::{login, logout, refresh_token, register};
pub use quiz_handler::{create_quiz, delete_quiz, get_quiz, grade_quiz, list_quizzes};
pub use user_handler::{current_user, health_check, health_check_live, health_check_ready};
