//! Connect Admin Console Entry Point

mod api;
mod app;
mod auth;
mod components;
mod config;
mod list;
mod models;
mod pages;
mod session;
mod view_model;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
