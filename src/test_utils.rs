#[cfg(test)]
pub mod fixtures {
    use crate::auth::hash_password;
    use crate::models::domain::{Account, Lesson};

    /// Creates an account with a real argon2 hash for `password`.
    pub fn test_account(username: &str, password: &str) -> Account {
        Account::new(username, &hash_password(password).unwrap())
    }

    /// A small catalog of lessons for scoring tests.
    pub fn test_lessons() -> Vec<Lesson> {
        vec![Lesson::test_lesson(1), Lesson::test_lesson(2)]
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::auth::verify_password;

    #[test]
    fn test_fixtures_test_account() {
        let account = test_account("testuser", "secret1");
        assert_eq!(account.username, "testuser");
        assert!(verify_password("secret1", &account.password_hash));
    }

    #[test]
    fn test_fixtures_test_lessons() {
        let lessons = test_lessons();
        assert_eq!(lessons.len(), 2);
        assert_eq!(lessons[0].id, 1);
    }
}
