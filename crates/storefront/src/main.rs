//! Storefront Entry Point

mod app;
mod cart;
mod catalog;
mod components;
mod config;
mod context;
mod error;
mod models;
mod pages;
mod price;
mod route;
mod storage;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if console_logger::init("storefront", config::log_level()).is_err() {
        web_sys::console::warn_1(&"logger already installed".into());
    }
    mount_to_body(App);
}
