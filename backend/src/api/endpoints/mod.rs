pub mod auth_api;
pub mod project_api;
pub mod settings_api;
pub mod message_api;
pub mod user_api;
pub mod web_index;
