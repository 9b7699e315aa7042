pub mod api_utils;
pub mod endpoints;
pub mod main_api;
pub mod model;
