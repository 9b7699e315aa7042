use std::rc::Rc;
use yew::prelude::*;
use crate::services::{AuthService, MessageService, ProjectService, SettingsService, UserService};

pub struct Services {
    pub auth: Rc<AuthService>,
    pub project: Rc<ProjectService>,
    pub settings: Rc<SettingsService>,
    pub message: Rc<MessageService>,
    pub user: Rc<UserService>,
}

impl Services {
    pub fn new() -> Self {
        Self {
            auth: Rc::new(AuthService::new()),
            project: Rc::new(ProjectService::new()),
            settings: Rc::new(SettingsService::new()),
            message: Rc::new(MessageService::new()),
            user: Rc::new(UserService::new()),
        }
    }
}

impl PartialEq for Services {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for Services {}

#[derive(PartialEq, Eq, Clone)]
pub struct ServiceContext {
    services: Rc<Services>,
}

impl ServiceContext {
    pub fn new() -> Self {
        Self {
            services: Rc::new(Services::new())
        }
    }

    pub fn services(&self) -> Rc<Services> {
        self.services.clone()
    }
}

#[hook]
pub fn use_service_context() -> Rc<Services> {
    use_context::<UseStateHandle<ServiceContext>>().expect("Services context not found").services()
}
