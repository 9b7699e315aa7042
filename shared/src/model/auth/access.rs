use crate::error::AuthError;
use crate::model::Role;

/// Permission rule of a route. Declared once here and used by the server to
/// gate requests and by the client to decide what to show.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Access {
    Public,
    Authenticated,
    Roles(&'static [Role]),
}

const ADMINS: &[Role] = &[Role::Admin1, Role::Admin2];
const ADMIN1_ONLY: &[Role] = &[Role::Admin1];
const CLIENTS: &[Role] = &[Role::Cliente];

pub const SELF_LOOKUP: Access = Access::Authenticated;
pub const PROJECTS_LIST_ALL: Access = Access::Roles(ADMINS);
pub const PROJECTS_LIST_MINE: Access = Access::Roles(CLIENTS);
pub const PROJECT_WRITE: Access = Access::Roles(ADMINS);
// explicit single-role rules, not derived from ADMINS
pub const PROJECT_DELETE: Access = Access::Roles(ADMIN1_ONLY);
pub const SETTINGS_WRITE: Access = Access::Roles(ADMIN1_ONLY);
pub const MESSAGES_READ: Access = Access::Roles(ADMINS);
pub const USERS_READ: Access = Access::Roles(ADMIN1_ONLY);
pub const USERS_CREATE: Access = Access::Roles(ADMIN1_ONLY);

impl Access {
    pub const fn requires_token(self) -> bool {
        !matches!(self, Access::Public)
    }

    /// Role check for an already verified caller.
    ///
    /// Membership is exact, there is no hierarchy between roles.
    pub fn check(self, role: Option<Role>) -> Result<(), AuthError> {
        match self {
            Access::Public | Access::Authenticated => Ok(()),
            Access::Roles(roles) => match role {
                None => Err(AuthError::Unauthorized),
                Some(role) if roles.contains(&role) => Ok(()),
                Some(_) => Err(AuthError::Forbidden),
            },
        }
    }
}
