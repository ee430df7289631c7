use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One record per (account, lesson). Re-submitting a quiz replaces the
/// previous attempt, so the latest attempt wins.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Completion {
    pub account_id: String,
    pub lesson_id: i64,
    pub score: i64,
    pub completed_at: DateTime<Utc>,
}

impl Completion {
    pub fn new(account_id: &str, lesson_id: i64, score: i64) -> Self {
        Completion {
            account_id: account_id.to_string(),
            lesson_id,
            score,
            completed_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_creation() {
        let completion = Completion::new("acct-1", 3, 2);
        assert_eq!(completion.account_id, "acct-1");
        assert_eq!(completion.lesson_id, 3);
        assert_eq!(completion.score, 2);
    }
}
