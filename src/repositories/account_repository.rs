use async_trait::async_trait;
use chrono::NaiveDate;
use mongodb::{
    bson::{doc, Bson},
    options::IndexOptions,
    Collection, IndexModel,
};

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::Account,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn create(&self, account: Account) -> AppResult<Account>;
    async fn find_by_username(&self, username: &str) -> AppResult<Option<Account>>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Account>>;

    /// Conditionally applies a login: the write only matches when the stored
    /// `last_login_date` still equals `expected_last_login`, so a concurrent
    /// login cannot double-increment the streak. Returns whether the write
    /// matched; callers re-read and retry on a miss.
    async fn apply_login(
        &self,
        account_id: &str,
        expected_last_login: Option<NaiveDate>,
        today: NaiveDate,
        new_streak: i64,
    ) -> AppResult<bool>;

    /// Additive XP update. Never a read-modify-write overwrite, so two
    /// concurrent submissions both count.
    async fn add_xp(&self, account_id: &str, delta: i64) -> AppResult<()>;

    async fn is_empty(&self) -> AppResult<bool>;
    async fn ensure_indexes(&self) -> AppResult<()>;
}

pub struct MongoAccountRepository {
    collection: Collection<Account>,
}

impl MongoAccountRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("accounts");
        Self { collection }
    }
}

fn is_duplicate_key_error(err: &mongodb::error::Error) -> bool {
    matches!(
        *err.kind,
        mongodb::error::ErrorKind::Write(mongodb::error::WriteFailure::WriteError(ref we))
            if we.code == 11000
    )
}

fn date_bson(date: Option<NaiveDate>) -> Bson {
    // NaiveDate serializes as "YYYY-MM-DD"; the filter must use the same
    // representation as the stored field.
    match date {
        Some(d) => Bson::String(d.to_string()),
        None => Bson::Null,
    }
}

#[async_trait]
impl AccountRepository for MongoAccountRepository {
    async fn create(&self, account: Account) -> AppResult<Account> {
        match self.collection.insert_one(&account).await {
            Ok(_) => Ok(account),
            Err(e) if is_duplicate_key_error(&e) => {
                Err(AppError::DuplicateUsername(account.username))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<Account>> {
        let account = self
            .collection
            .find_one(doc! { "username": username })
            .await?;
        Ok(account)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Account>> {
        let account = self.collection.find_one(doc! { "id": id }).await?;
        Ok(account)
    }

    async fn apply_login(
        &self,
        account_id: &str,
        expected_last_login: Option<NaiveDate>,
        today: NaiveDate,
        new_streak: i64,
    ) -> AppResult<bool> {
        let filter = doc! {
            "id": account_id,
            "last_login_date": date_bson(expected_last_login),
        };
        let update = doc! {
            "$set": {
                "last_login_date": date_bson(Some(today)),
                "streak": new_streak,
            }
        };

        let result = self.collection.update_one(filter, update).await?;
        Ok(result.matched_count > 0)
    }

    async fn add_xp(&self, account_id: &str, delta: i64) -> AppResult<()> {
        let result = self
            .collection
            .update_one(doc! { "id": account_id }, doc! { "$inc": { "xp": delta } })
            .await?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound(format!(
                "Account with id '{}' not found",
                account_id
            )));
        }

        Ok(())
    }

    async fn is_empty(&self) -> AppResult<bool> {
        let count = self.collection.count_documents(doc! {}).await?;
        Ok(count == 0)
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        let options = IndexOptions::builder().unique(true).build();
        let model = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(options)
            .build();

        self.collection.create_index(model).await?;
        log::info!("created unique index on accounts.username");

        Ok(())
    }
}
