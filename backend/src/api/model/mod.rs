mod app_state;

pub use self::app_state::*;
