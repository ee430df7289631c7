use std::collections::HashMap;

use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 4, max = 50, message = "Username must be 4-50 characters"))]
    pub username: String,

    #[validate(length(min = 6, max = 128, message = "Password must be 6-128 characters"))]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Answers keyed by question id. Unknown keys are ignored; missing keys
/// score as incorrect.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuizSubmission {
    #[serde(default)]
    pub answers: HashMap<i64, String>,
}
