use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::doc,
    options::{IndexOptions, ReplaceOptions},
    Collection, IndexModel,
};

use crate::{db::Database, errors::AppResult, models::domain::Completion};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionRepository: Send + Sync {
    /// Inserts or replaces the completion for `(account_id, lesson_id)`.
    /// The latest attempt wins.
    async fn upsert(&self, completion: Completion) -> AppResult<Completion>;
    async fn find_by_account(&self, account_id: &str) -> AppResult<Vec<Completion>>;
    async fn ensure_indexes(&self) -> AppResult<()>;
}

pub struct MongoCompletionRepository {
    collection: Collection<Completion>,
}

impl MongoCompletionRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("completions");
        Self { collection }
    }
}

#[async_trait]
impl CompletionRepository for MongoCompletionRepository {
    async fn upsert(&self, completion: Completion) -> AppResult<Completion> {
        let filter = doc! {
            "account_id": &completion.account_id,
            "lesson_id": completion.lesson_id,
        };
        let options = ReplaceOptions::builder().upsert(true).build();

        self.collection
            .replace_one(filter, &completion)
            .with_options(options)
            .await?;

        Ok(completion)
    }

    async fn find_by_account(&self, account_id: &str) -> AppResult<Vec<Completion>> {
        let cursor = self
            .collection
            .find(doc! { "account_id": account_id })
            .await?;
        let mut completions: Vec<Completion> = cursor.try_collect().await?;
        completions.sort_by(|a, b| b.completed_at.cmp(&a.completed_at));
        Ok(completions)
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        let options = IndexOptions::builder().unique(true).build();
        let model = IndexModel::builder()
            .keys(doc! { "account_id": 1, "lesson_id": 1 })
            .options(options)
            .build();

        self.collection.create_index(model).await?;
        log::info!("created unique index on completions (account_id, lesson_id)");

        Ok(())
    }
}
