#![allow(warnings)]
//! Task List Frontend Entry Point

mod activity;
mod api;
mod app;
mod client;
mod components;
mod context;
mod dialogs;
mod models;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("error initializing logger");
    mount_to_body(App);
}
