use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::models::domain::Account;

/// Session token claims. The token carries only the opaque account id and
/// username; XP and streak are always re-read from the account store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // account id
    pub username: String,
    pub exp: usize, // Expiration time (as UTC timestamp)
    pub iat: usize, // Issued at (as UTC timestamp)
}

impl Claims {
    pub fn new(account: &Account, expiration_hours: i64) -> Self {
        let now = Utc::now();
        let exp = now + Duration::hours(expiration_hours);

        Self {
            sub: account.id.clone(),
            username: account.username.clone(),
            iat: now.timestamp() as usize,
            exp: exp.timestamp() as usize,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_creation() {
        let account = Account::new("johndoe", "$argon2id$fake");
        let claims = Claims::new(&account, 24);

        assert_eq!(claims.sub, account.id);
        assert_eq!(claims.username, "johndoe");
        assert!(claims.exp > claims.iat);
    }
}
