pub mod account_service;
pub mod progress_service;

pub use account_service::AccountService;
pub use progress_service::{score_quiz, ProgressService, ScoreResult, XP_PER_CORRECT_ANSWER};
