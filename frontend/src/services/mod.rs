mod requests;
mod auth_service;
mod project_service;
mod settings_service;
mod message_service;
mod user_service;

pub use self::requests::*;
pub use self::auth_service::*;
pub use self::project_service::*;
pub use self::settings_service::*;
pub use self::message_service::*;
pub use self::user_service::*;
