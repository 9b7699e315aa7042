mod role;
mod claims;
mod user;
mod access;
mod session;
mod visibility;

pub use self::role::*;
pub use self::claims::*;
pub use self::user::*;
pub use self::access::*;
pub use self::session::*;
pub use self::visibility::*;
