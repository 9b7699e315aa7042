use serde::{Deserialize, Serialize};
use crate::model::{IdentityDto, Role};

/// Claims carried by a session token.
///
/// `role` is optional on the wire so that a token without a role claim can
/// still be verified and then rejected as `unauthorized` by role-gated routes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    pub email: String,
    pub name: String,
    pub iat: i64,
    pub exp: i64,
    pub iss: String,
}

impl Claims {
    pub fn user_id(&self) -> Option<u64> {
        self.sub.parse::<u64>().ok()
    }

    /// Identity as carried in the token, `None` if the subject or role is unusable.
    pub fn identity(&self) -> Option<IdentityDto> {
        Some(IdentityDto {
            id: self.user_id()?,
            email: self.email.clone(),
            name: self.name.clone(),
            role: self.role?,
        })
    }
}
