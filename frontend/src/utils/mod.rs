mod storage;

use log::error;
use web_sys::window;
pub use storage::*;

#[macro_export]
macro_rules! html_if {
    ($cond:expr, $body:tt) => {
        if $cond {
            yew::html! $body
        } else {
            yew::Html::default()
        }
    };
}

/// Full page load of `path`. Session changes go through here so every
/// component re-reads the cache from scratch.
pub fn reload_to(path: &str) {
    if let Some(win) = window() {
        if let Err(err) = win.location().set_href(path) {
            error!("failed to load {path}: {err:?}");
        }
    }
}

/// Splits a textarea value into trimmed non-empty lines.
pub fn split_lines(value: &str) -> Vec<String> {
    value
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// `tel:` link for a phone as typed in the settings, keeping digits and `+`.
pub fn tel_href(phone: &str) -> String {
    let dialable: String = phone.chars().filter(|c| c.is_ascii_digit() || *c == '+').collect();
    format!("tel:{dialable}")
}
