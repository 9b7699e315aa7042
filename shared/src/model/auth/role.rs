use std::fmt::Display;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::error::AuthError;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin1,
    Admin2,
    Cliente,
}

impl Role {
    const ADMIN1: &'static str = "admin1";
    const ADMIN2: &'static str = "admin2";
    const CLIENTE: &'static str = "cliente";

    pub const ALL: [Role; 3] = [Role::Admin1, Role::Admin2, Role::Cliente];

    pub const fn as_str(self) -> &'static str {
        match self {
            Role::Admin1 => Self::ADMIN1,
            Role::Admin2 => Self::ADMIN2,
            Role::Cliente => Self::CLIENTE,
        }
    }
}

impl FromStr for Role {
    type Err = AuthError;

    /// Exact, case-sensitive match against the closed role set.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            Self::ADMIN1 => Ok(Role::Admin1),
            Self::ADMIN2 => Ok(Role::Admin2),
            Self::CLIENTE => Ok(Role::Cliente),
            _ => Err(AuthError::InvalidRole),
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
