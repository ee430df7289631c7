use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Account {
    pub id: String,
    pub username: String,
    /// Argon2 PHC string. Never serialized towards clients; the response
    /// DTOs carry no credential fields.
    pub password_hash: String,
    pub xp: i64,
    pub streak: i64,
    pub last_login_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

impl Account {
    pub fn new(username: &str, password_hash: &str) -> Self {
        Account {
            id: Uuid::new_v4().to_string(),
            username: username.to_string(),
            password_hash: password_hash.to_string(),
            xp: 0,
            streak: 0,
            last_login_date: None,
            created_at: Utc::now(),
        }
    }
}

/// The canonical streak rule, evaluated against the date stored before this
/// login overwrites it.
pub fn streak_after_login(
    previous_streak: i64,
    last_login_date: Option<NaiveDate>,
    today: NaiveDate,
) -> i64 {
    match last_login_date {
        None => 1,
        Some(last) if last == today => previous_streak,
        Some(last) if last.succ_opt() == Some(today) => previous_streak + 1,
        Some(_) => 1,
    }
}
