//! Dog Match Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod logging;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(config::log_level());

    let config = AppConfig::load();
    mount_to_body(move || view! { <App config=config.clone() /> });
}
