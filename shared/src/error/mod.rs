mod portal_error;
mod auth_error;

pub use self::portal_error::*;
pub use self::auth_error::*;
