mod input;
mod text_button;
mod notice;
mod role_based_content;
mod nav;
mod login;
mod panel;
mod project_form;
mod project_list;
mod client_projects;
mod message_list;
mod settings_form;
mod user_list;
mod site_info;
mod catalog;
mod contact;

pub use self::input::*;
pub use self::text_button::*;
pub use self::notice::*;
pub use self::role_based_content::*;
pub use self::nav::*;
pub use self::login::*;
pub use self::panel::*;
pub use self::project_form::*;
pub use self::project_list::*;
pub use self::client_projects::*;
pub use self::message_list::*;
pub use self::settings_form::*;
pub use self::user_list::*;
pub use self::site_info::*;
pub use self::catalog::*;
pub use self::contact::*;
