mod app;
mod error;
mod hooks;
mod provider;
mod services;
mod utils;

use log::Level;
use crate::app::App;

fn main() {
    wasm_logger::init(wasm_logger::Config::new(Level::Info));
    yew::Renderer::<App>::new().render();
}
