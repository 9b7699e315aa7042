mod auth;
mod project;
mod message;
mod settings;

pub use self::auth::*;
pub use self::project::*;
pub use self::message::*;
pub use self::settings::*;
