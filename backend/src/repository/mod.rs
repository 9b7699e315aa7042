mod storage;
pub mod user_repository;
pub mod project_repository;
pub mod message_repository;
pub mod settings_repository;
pub mod seed;

pub use self::storage::*;
