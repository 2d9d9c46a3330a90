//! Recipes Frontend Entry Point

mod models;
mod catalog;
mod logger;
mod storage;
mod context;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init();
    mount_to_body(App);
}
