use web_sys::console;

pub mod config;
pub mod pages;
pub mod router;
pub mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match config::load() {
        Ok(config) => (config, None),
        Err(err) => (config::RuntimeConfig::default(), Some(err)),
    };
    let (level, level_error) = match config.log_level() {
        Ok(level) => (level, None),
        Err(err) => (config::DEFAULT_LOG_LEVEL, Some(err)),
    };
    if console_log::init_with_level(level).is_err() {
        console::warn_1(&"Logger was already initialized".into());
    }
    for err in config_error.into_iter().chain(level_error) {
        log::warn!("{}; using defaults", err);
    }

    log::info!("Starting Hardhat Frontend (wasm)");
    router::mount_app(config);
}
