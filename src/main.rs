//! CookUs Frontend Entry Point

mod api;
mod app;
mod calendar;
mod components;
mod config;
mod context;
mod error;
mod markdown;
mod models;
mod pages;
mod pantry;
mod recipe_text;
mod store;

use app::App;
use leptos::prelude::*;

use crate::config::ApiConfig;

fn main() {
    console_error_panic_hook::set_once();
    let config = ApiConfig::from_env();
    if console_logger::init("CookUs", config.log_level).is_err() {
        web_sys::console::warn_1(&"logger already installed".into());
    }
    mount_to_body(App);
}
