use std::fmt::Display;
use std::str::FromStr;
use crate::error::{info_err, PortalError};
use crate::model::{Access, Role, Session, MESSAGES_READ, PROJECTS_LIST_ALL, PROJECTS_LIST_MINE, PROJECT_DELETE, SETTINGS_WRITE, USERS_READ};

/// When a UI surface is shown.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Requirement {
    Always,
    Anonymous,
    Authenticated,
    /// An empty set is visible to everyone.
    Roles(&'static [Role]),
}

impl From<Access> for Requirement {
    fn from(access: Access) -> Self {
        match access {
            Access::Public => Requirement::Always,
            Access::Authenticated => Requirement::Authenticated,
            Access::Roles(roles) => Requirement::Roles(roles),
        }
    }
}

pub fn is_visible(session: Option<&Session>, requirement: Requirement) -> bool {
    match requirement {
        Requirement::Always => true,
        Requirement::Anonymous => session.is_none(),
        Requirement::Authenticated => session.is_some(),
        Requirement::Roles(roles) => {
            roles.is_empty() || session.is_some_and(|s| roles.contains(&s.user.role))
        }
    }
}

/// Delete buttons mirror the server's delete rule.
pub fn can_delete_project(session: Option<&Session>) -> bool {
    is_visible(session, PROJECT_DELETE.into())
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PanelView {
    Projects,
    MyProjects,
    Messages,
    Settings,
    Users,
}

impl PanelView {
    const PROJECTS: &'static str = "projects";
    const MY_PROJECTS: &'static str = "my-projects";
    const MESSAGES: &'static str = "messages";
    const SETTINGS: &'static str = "settings";
    const USERS: &'static str = "users";

    pub const ALL: [PanelView; 5] = [
        PanelView::Projects,
        PanelView::MyProjects,
        PanelView::Messages,
        PanelView::Settings,
        PanelView::Users,
    ];

    /// Rule of the route whose data the view loads.
    pub const fn access(self) -> Access {
        match self {
            PanelView::Projects => PROJECTS_LIST_ALL,
            PanelView::MyProjects => PROJECTS_LIST_MINE,
            PanelView::Messages => MESSAGES_READ,
            PanelView::Settings => SETTINGS_WRITE,
            PanelView::Users => USERS_READ,
        }
    }

    pub fn requirement(self) -> Requirement {
        self.access().into()
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            PanelView::Projects => Self::PROJECTS,
            PanelView::MyProjects => Self::MY_PROJECTS,
            PanelView::Messages => Self::MESSAGES,
            PanelView::Settings => Self::SETTINGS,
            PanelView::Users => Self::USERS,
        }
    }
}

impl FromStr for PanelView {
    type Err = PortalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            Self::PROJECTS => Ok(PanelView::Projects),
            Self::MY_PROJECTS => Ok(PanelView::MyProjects),
            Self::MESSAGES => Ok(PanelView::Messages),
            Self::SETTINGS => Ok(PanelView::Settings),
            Self::USERS => Ok(PanelView::Users),
            _ => Err(info_err!("Unknown panel view: {s}")),
        }
    }
}

impl Display for PanelView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub fn visible_views(session: Option<&Session>) -> Vec<PanelView> {
    PanelView::ALL.into_iter().filter(|view| is_visible(session, view.requirement())).collect()
}

/// Saved view if it parses and is still visible, otherwise the first visible one.
pub fn select_view(saved: Option<&str>, session: Option<&Session>) -> Option<PanelView> {
    let visible = visible_views(session);
    saved
        .and_then(|name| name.parse::<PanelView>().ok())
        .filter(|view| visible.contains(view))
        .or_else(|| visible.first().copied())
}
