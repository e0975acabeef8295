mod app;
mod config;
mod domain;
mod infra;
mod platform;
mod ui;
mod usecase;

#[cfg(test)]
mod tests;

use tracing::info;

use crate::app::App;
use crate::config::AppConfig;

fn main() {
    let config = AppConfig::from_env();
    if let Err(err) = dioxus::logger::init(config.log_level) {
        eprintln!("failed to initialise logging: {err}");
    }
    info!(base_url = %config.base_url, debounce_ms = config.debounce.as_millis() as u64, "starting edu-admin");
    launch(config);
}

#[cfg(not(target_arch = "wasm32"))]
fn launch(config: AppConfig) {
    let mut desktop = dioxus::desktop::Config::new().with_window(
        dioxus::desktop::WindowBuilder::new().with_title("Edu Admin"),
    );
    match platform::desktop::webview::default_webview_data_dir() {
        Ok(dir) => desktop = desktop.with_data_directory(dir),
        Err(err) => tracing::warn!(error = %format!("{err:#}"), "using the default webview data directory"),
    }

    dioxus::LaunchBuilder::desktop()
        .with_cfg(desktop)
        .with_context(config)
        .launch(App);
}

#[cfg(target_arch = "wasm32")]
fn launch(config: AppConfig) {
    dioxus::LaunchBuilder::web().with_context(config).launch(App);
}
