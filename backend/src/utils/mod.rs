mod sys_utils;
mod file;
mod logging;

pub use self::sys_utils::*;
pub use self::file::*;
pub use self::logging::*;
