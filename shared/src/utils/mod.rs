mod constants;
mod time_utils;
mod string_utils;
mod serde_utils;

pub use self::constants::*;
pub use self::time_utils::*;
pub use self::string_utils::*;
pub use self::serde_utils::*;
