mod actions;
mod api;
mod app;
mod category;
mod components;
mod config;
mod error;
mod history;
mod ledger;
mod models;
mod screen;
mod session;
mod state;
#[cfg(test)]
mod test_support;

use config::AppConfig;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::load();
    let _ = console_log::init_with_level(config.log_level);
    log::info!("group expenses frontend starting, api at {}", config.api_base_url);

    yew::Renderer::<app::App>::with_props(app::AppProps { config }).render();
}
