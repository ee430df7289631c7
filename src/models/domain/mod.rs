pub mod account;
pub mod completion;
pub mod lesson;

pub use account::Account;
pub use completion::Completion;
pub use lesson::{ContentBlock, Lesson, Question};
