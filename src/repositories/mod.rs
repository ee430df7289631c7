pub mod account_repository;
pub mod completion_repository;

pub use account_repository::{AccountRepository, MongoAccountRepository};
pub use completion_repository::{CompletionRepository, MongoCompletionRepository};

#[cfg(test)]
pub use account_repository::MockAccountRepository;
#[cfg(test)]
pub use completion_repository::MockCompletionRepository;
