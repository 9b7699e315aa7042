use std::error::Error;
use std::fmt::{Display, Formatter, Result};

#[macro_export]
macro_rules! info_err {
    // This matches any arguments (format string + variables) and forwards them
    // to format!, then wraps them in the error constructor.
    ($($arg:tt)*) => {
        $crate::error::PortalError::new($crate::error::PortalErrorKind::Info, format!($($arg)*))
    };
}

pub use info_err;

#[macro_export]
macro_rules! storage_err {
    ($($arg:tt)*) => {
        $crate::error::PortalError::new($crate::error::PortalErrorKind::Storage, format!($($arg)*))
    };
}

pub use storage_err;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PortalErrorKind {
    // configuration, validation
    Info,
    // persisted record stores
    Storage,
}

#[derive(Debug)]
pub struct PortalError {
    pub kind: PortalErrorKind,
    pub message: String,
}

impl PortalError {
    pub const fn new(kind: PortalErrorKind, message: String) -> Self {
        Self { kind, message }
    }
}

impl Display for PortalError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "Portal error: {}", self.message)
    }
}

impl Error for PortalError {}

pub fn to_io_error<E>(err: E) -> std::io::Error
where
    E: std::error::Error,
{ std::io::Error::other(err.to_string()) }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn macros_build_kind_and_message() {
        let err = info_err!("bad value {}", 42);
        assert_eq!(err.kind, PortalErrorKind::Info);
        assert_eq!(err.to_string(), "Portal error: bad value 42");

        let err = storage_err!("disk full");
        assert_eq!(err.kind, PortalErrorKind::Storage);
    }
}
