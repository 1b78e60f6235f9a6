//! Habit Tracker Frontend Entry Point

mod api;
mod app;
mod components;
mod context;
mod error;
mod models;
mod pages;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("habit tracker starting");
    mount_to_body(App);
}
