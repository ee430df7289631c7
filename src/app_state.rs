use std::sync::Arc;

use crate::{
    config::Config,
    content::LessonCatalog,
    db::Database,
    errors::AppResult,
    repositories::{
        AccountRepository, CompletionRepository, MongoAccountRepository, MongoCompletionRepository,
    },
    services::{AccountService, ProgressService},
};

#[derive(Clone)]
pub struct AppState {
    pub account_service: Arc<AccountService>,
    pub progress_service: Arc<ProgressService>,
    pub catalog: Arc<LessonCatalog>,
    pub db: Database,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let catalog = Arc::new(LessonCatalog::load(
            &config.lessons_path,
            config.lessons_fallback,
        )?);

        let account_repository = Arc::new(MongoAccountRepository::new(&db));
        account_repository.ensure_indexes().await?;

        let completion_repository = Arc::new(MongoCompletionRepository::new(&db));
        completion_repository.ensure_indexes().await?;

        let account_service = Arc::new(AccountService::new(account_repository.clone()));
        let progress_service = Arc::new(ProgressService::new(
            catalog.clone(),
            account_repository,
            completion_repository,
        ));

        if config.seed_demo_account {
            account_service.seed_demo_account().await?;
        }

        Ok(Self {
            account_service,
            progress_service,
            catalog,
            db,
            config: Arc::new(config),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }
}
