pub mod api;
pub mod components;
pub mod config;
pub mod pages;
pub mod router;
pub mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

/// Browser entry point: resolves the runtime configuration, then mounts the app.
#[cfg(target_arch = "wasm32")]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"Console logger already initialized".into());
    }
    log::info!("Starting HR dashboard frontend");

    leptos::spawn_local(async move {
        let config = config::load().await;
        log::info!(
            "Runtime config resolved (api: {}, proxy: {})",
            config.api_base_url,
            config.proxy_base_url
        );
        router::mount_app(config);
    });
}
