use std::sync::Arc;

use chrono::{DateTime, Utc};
use validator::Validate;

use crate::{
    auth::{hash_password, verify_password},
    errors::{AppError, AppResult},
    models::{domain::account::streak_after_login, domain::Account, dto::request::RegisterRequest},
    repositories::AccountRepository,
};

/// Retries for the optimistic login update before giving up.
const MAX_LOGIN_RETRIES: usize = 3;

pub const DEMO_USERNAME: &str = "demo";
pub const DEMO_PASSWORD: &str = "demo123";

pub struct AccountService {
    repository: Arc<dyn AccountRepository>,
}

impl AccountService {
    pub fn new(repository: Arc<dyn AccountRepository>) -> Self {
        Self { repository }
    }

    pub async fn register(&self, request: RegisterRequest) -> AppResult<Account> {
        request.validate()?;

        // Friendly pre-check; the unique index on username catches the race.
        if self
            .repository
            .find_by_username(&request.username)
            .await?
            .is_some()
        {
            return Err(AppError::DuplicateUsername(request.username));
        }

        let password_hash = hash_password(&request.password)?;
        let account = Account::new(&request.username, &password_hash);

        let created = self.repository.create(account).await?;
        log::info!("registered account '{}'", created.username);
        Ok(created)
    }

    /// Authenticates and applies the login streak rule. Bad username and bad
    /// password are indistinguishable to the caller.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
        now: DateTime<Utc>,
    ) -> AppResult<Account> {
        let account = self
            .repository
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Invalid username or password".to_string()))?;

        if !verify_password(password, &account.password_hash) {
            return Err(AppError::Unauthorized(
                "Invalid username or password".to_string(),
            ));
        }

        self.record_login(account, now).await
    }

    /// Applies the streak rule against the stored `last_login_date` read
    /// before the write. The conditional update misses when a concurrent
    /// login got there first; the account is then re-read and the rule
    /// re-evaluated.
    async fn record_login(&self, mut account: Account, now: DateTime<Utc>) -> AppResult<Account> {
        let today = now.date_naive();

        for _ in 0..MAX_LOGIN_RETRIES {
            let new_streak = streak_after_login(account.streak, account.last_login_date, today);

            let matched = self
                .repository
                .apply_login(&account.id, account.last_login_date, today, new_streak)
                .await?;

            if matched {
                account.streak = new_streak;
                account.last_login_date = Some(today);
                return Ok(account);
            }

            account = self
                .repository
                .find_by_id(&account.id)
                .await?
                .ok_or_else(|| {
                    AppError::NotFound(format!("Account with id '{}' not found", account.id))
                })?;
        }

        Err(AppError::StorageError(format!(
            "login update for account '{}' kept losing the race",
            account.id
        )))
    }

    pub async fn get_account(&self, account_id: &str) -> AppResult<Account> {
        self.repository
            .find_by_id(account_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Account with id '{}' not found", account_id)))
    }

    /// Seeds the demo account when the store is empty, mirroring a fresh
    /// deployment with nothing to log into.
    pub async fn seed_demo_account(&self) -> AppResult<()> {
        if !self.repository.is_empty().await? {
            return Ok(());
        }

        let request = RegisterRequest {
            username: DEMO_USERNAME.to_string(),
            password: DEMO_PASSWORD.to_string(),
        };

        match self.register(request).await {
            Ok(_) => {
                log::info!("seeded demo account: {} / {}", DEMO_USERNAME, DEMO_PASSWORD);
                Ok(())
            }
            // Another instance seeded it first.
            Err(AppError::DuplicateUsername(_)) => Ok(()),
            Err(e) => Err(e),
        }
    }
}
