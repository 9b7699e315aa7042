mod password;
mod access_token;
mod auth_bearer;
mod authenticator;

pub use self::password::*;
pub use self::access_token::*;
pub use self::auth_bearer::*;
pub use self::authenticator::*;
