//! FileDiff Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod files;
mod logging;
mod models;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(config::LOG_LEVEL);
    log::info!("filediff-ui starting");
    mount_to_body(App);
}
