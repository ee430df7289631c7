pub mod auth_handler;
pub mod lesson_handler;
pub mod profile_handler;
